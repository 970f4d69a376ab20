//! Tokens produced by the expression scanner.

use std::fmt;

/// Grouping direction for operators of equal precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl Operator {
    /// Map an input character to its operator, if it is one.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Remainder),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Remainder => '%',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide | Self::Remainder => 2,
        }
    }

    pub fn associativity(self) -> Associativity {
        Associativity::Left
    }

    /// Whether `self`, already on the operator stack, must be emitted before
    /// `incoming` is pushed.
    pub fn binds_before(self, incoming: Operator) -> bool {
        match incoming.associativity() {
            Associativity::Left => self.precedence() >= incoming.precedence(),
            Associativity::Right => self.precedence() > incoming.precedence(),
        }
    }

    /// Apply the operator as `a op b`.
    ///
    /// Returns `None` for division or remainder by zero.
    pub fn apply(self, a: f64, b: f64) -> Option<f64> {
        match self {
            Self::Add => Some(a + b),
            Self::Subtract => Some(a - b),
            Self::Multiply => Some(a * b),
            Self::Divide if b == 0.0 => None,
            Self::Divide => Some(a / b),
            Self::Remainder if b == 0.0 => None,
            Self::Remainder => Some(a % b),
        }
    }
}

/// Characters that count as operators for the editing and detection helpers.
pub fn is_operator_char(c: char) -> bool {
    Operator::from_char(c).is_some()
}

/// A lexical token of an arithmetic expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// Raw literal text: digits and dots, with a leading `-` for a merged unary minus.
    Number(String),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Operator(op) => write!(f, "{}", op.symbol()),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_table() {
        assert_eq!(Operator::Add.precedence(), 1);
        assert_eq!(Operator::Subtract.precedence(), 1);
        assert_eq!(Operator::Multiply.precedence(), 2);
        assert_eq!(Operator::Divide.precedence(), 2);
        assert_eq!(Operator::Remainder.precedence(), 2);
    }

    #[test]
    fn test_equal_precedence_binds_left() {
        assert!(Operator::Subtract.binds_before(Operator::Add));
        assert!(Operator::Divide.binds_before(Operator::Multiply));
        assert!(Operator::Multiply.binds_before(Operator::Subtract));
        assert!(!Operator::Add.binds_before(Operator::Remainder));
    }

    #[test]
    fn test_apply_rejects_zero_divisor() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), None);
        assert_eq!(Operator::Remainder.apply(5.0, 0.0), None);
        assert_eq!(Operator::Divide.apply(5.0, -0.0), None);
        assert_eq!(Operator::Remainder.apply(-7.0, 3.0), Some(-1.0));
    }

    #[test]
    fn test_token_display() {
        let tokens = [
            Token::Number("-1.5".to_string()),
            Token::Operator(Operator::Remainder),
            Token::LeftParen,
            Token::RightParen,
        ];
        let text: String = tokens.iter().map(ToString::to_string).collect();
        assert_eq!(text, "-1.5%()");
    }
}
