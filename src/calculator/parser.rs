//! Shunting-yard conversion from infix text to a postfix token queue.

use tracing::debug;

use super::error::{InvalidExpression, Result};
use super::token::{Operator, Token};

/// Characters after which a `-` is a sign rather than a subtraction.
const UNARY_CONTEXT: &[char] = &['+', '-', '*', '/', '(', '%'];

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn fail(reason: &str, position: usize) -> InvalidExpression {
    debug!(reason, position, "rejecting expression");
    InvalidExpression
}

/// Convert `expression` into postfix order.
///
/// Whitespace is ignored. Numeric literals are not validated here: a run
/// such as `1.2.3` becomes a single token and is rejected on conversion.
pub fn to_postfix(expression: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = expression.chars().filter(|c| !c.is_whitespace()).collect();

    let mut output = Vec::new();
    let mut stack: Vec<Token> = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        if is_number_char(c) {
            let end = scan_number(&chars, i);
            output.push(Token::Number(chars[i..end].iter().collect()));
            i = end;
            continue;
        }

        match c {
            '(' => stack.push(Token::LeftParen),
            ')' => loop {
                match stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(token) => output.push(token),
                    None => return Err(fail("unmatched closing parenthesis", i)),
                }
            },
            _ => {
                let Some(op) = Operator::from_char(c) else {
                    return Err(fail("unexpected character", i));
                };

                if op == Operator::Subtract && (i == 0 || UNARY_CONTEXT.contains(&chars[i - 1])) {
                    if !chars.get(i + 1).is_some_and(char::is_ascii_digit) {
                        return Err(fail("unary minus without operand", i));
                    }
                    let end = scan_number(&chars, i + 1);
                    output.push(Token::Number(chars[i..end].iter().collect()));
                    i = end;
                    continue;
                }

                while let Some(Token::Operator(top)) = stack.last() {
                    if !top.binds_before(op) {
                        break;
                    }
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                stack.push(Token::Operator(op));
            }
        }
        i += 1;
    }

    while let Some(token) = stack.pop() {
        if matches!(token, Token::LeftParen | Token::RightParen) {
            return Err(fail("unmatched opening parenthesis", chars.len()));
        }
        output.push(token);
    }

    Ok(output)
}

/// Return the end of the digit/dot run starting at `start`.
fn scan_number(chars: &[char], start: usize) -> usize {
    let mut end = start;
    while end < chars.len() && is_number_char(chars[end]) {
        end += 1;
    }
    end
}
