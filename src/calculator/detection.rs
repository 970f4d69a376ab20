//! Expression detection for calculator input.
//!
//! Determines whether a line of input looks like an arithmetic expression
//! worth evaluating, as opposed to a plain number or free text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches strings containing only calculator characters and whitespace.
    static ref CALC_CHARS: Regex = Regex::new(r"^[0-9\s\.\+\-\*/%()]+$").unwrap();

    /// Matches a plain number with an optional sign.
    static ref PLAIN_NUMBER: Regex = Regex::new(r"^\s*-?\s*[0-9\.]+\s*$").unwrap();

    /// Matches an operator or parenthesis anywhere in the input.
    static ref HAS_STRUCTURE: Regex = Regex::new(r"[\+\-\*/%()]").unwrap();
}

/// Check if input looks like a calculator expression.
///
/// Returns `true` if the input:
/// 1. Contains only digits, dots, operators, parentheses and whitespace
/// 2. Is not just a plain (optionally negated) number
/// 3. Has at least one operator or parenthesis
///
/// This is a diagnostic pre-check only: it never decides whether input is
/// evaluated, the evaluator alone decides validity.
pub fn looks_like_expression(input: &str) -> bool {
    let trimmed = input.trim();

    if trimmed.is_empty() || !CALC_CHARS.is_match(trimmed) {
        return false;
    }

    if PLAIN_NUMBER.is_match(trimmed) {
        return false;
    }

    HAS_STRUCTURE.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers_rejected() {
        assert!(!looks_like_expression("123"));
        assert!(!looks_like_expression("42.5"));
        assert!(!looks_like_expression("-123"));
        assert!(!looks_like_expression("  42  "));
    }

    #[test]
    fn test_expressions_accepted() {
        assert!(looks_like_expression("2+2"));
        assert!(looks_like_expression("2 + 2"));
        assert!(looks_like_expression("10 % 3"));
        assert!(looks_like_expression("(2 + 3) * 4"));
        assert!(looks_like_expression("10 - 5"));
        assert!(looks_like_expression("(7)"));
    }

    #[test]
    fn test_invalid_input_rejected() {
        assert!(!looks_like_expression(""));
        assert!(!looks_like_expression("   "));
        assert!(!looks_like_expression("2^8"));
        assert!(!looks_like_expression("sin(0)"));
        assert!(!looks_like_expression("hello world"));
        assert!(!looks_like_expression("٣+1"));
        assert!(!looks_like_expression("-٣"));
    }
}
