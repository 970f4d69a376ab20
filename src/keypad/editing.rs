//! Expression editing rules applied on each keypress.

use lazy_static::lazy_static;
use regex::Regex;

use crate::calculator::is_operator_char;

lazy_static! {
    /// The number being typed: everything after the last operator or parenthesis.
    static ref TRAILING_NUMBER: Regex = Regex::new(r"[^\+\-\*/%()]*$").unwrap();
}

/// Split `expr` into the text up to and including the last operator or
/// parenthesis, and the trailing number after it.
fn split_trailing_number(expr: &str) -> (&str, &str) {
    let start = TRAILING_NUMBER
        .find(expr)
        .map_or(expr.len(), |m| m.start());
    expr.split_at(start)
}

/// Append a keypad token to `expr`.
///
/// Operators replace a trailing operator or dot, and only `-` may start an
/// empty expression. A second `.` in the same number is ignored and a leading
/// `.` becomes `0.`.
pub fn append_token(expr: &str, token: &str) -> String {
    let mut token_chars = token.chars();
    if let (Some(op), None) = (token_chars.next(), token_chars.next())
        && is_operator_char(op)
    {
        let Some(last) = expr.chars().last() else {
            return if op == '-' { "-".to_string() } else { String::new() };
        };
        if is_operator_char(last) || last == '.' {
            let mut replaced = expr[..expr.len() - last.len_utf8()].to_string();
            replaced.push(op);
            return replaced;
        }
    }

    if token == "." {
        let (_, number) = split_trailing_number(expr);
        if number.contains('.') {
            return expr.to_string();
        }
        if number.is_empty() {
            return format!("{expr}0.");
        }
    }

    format!("{expr}{token}")
}

/// Negate the number at the end of `expr`.
///
/// A lone number toggles its leading `-`. After an operator or parenthesis
/// the trailing number is wrapped as `(-n)`.
pub fn toggle_sign(expr: &str) -> String {
    if expr.is_empty() {
        return String::new();
    }

    let (before, number) = split_trailing_number(expr);
    if before.is_empty() {
        return match expr.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{expr}"),
        };
    }

    match number.strip_prefix('-') {
        Some(rest) => format!("{before}{rest}"),
        None => format!("{before}(-{number})"),
    }
}
