use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::calculator::is_operator_char;

/// A keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// `C`: reset the expression and result.
    Clear,
    /// `⌫`: remove the last character.
    Backspace,
    /// `=`: replace the expression with its result.
    Equals,
    /// `+/-`: negate the number being typed.
    ToggleSign,
    /// A digit, `.`, operator or parenthesis appended to the expression.
    Input(char),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown key: {0:?}")]
pub struct UnknownKey(pub String);

fn is_input_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '(' | ')') || is_operator_char(c)
}

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "C" | "c" => Ok(Self::Clear),
            "⌫" | "<" | "BS" => Ok(Self::Backspace),
            "=" => Ok(Self::Equals),
            "+/-" | "±" => Ok(Self::ToggleSign),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if is_input_char(c) => Ok(Self::Input(c)),
                    _ => Err(UnknownKey(label.to_string())),
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clear => f.write_str("C"),
            Self::Backspace => f.write_str("⌫"),
            Self::Equals => f.write_str("="),
            Self::ToggleSign => f.write_str("+/-"),
            Self::Input(c) => write!(f, "{c}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!("C".parse(), Ok(Key::Clear));
        assert_eq!("⌫".parse(), Ok(Key::Backspace));
        assert_eq!("<".parse(), Ok(Key::Backspace));
        assert_eq!("=".parse(), Ok(Key::Equals));
        assert_eq!("+/-".parse(), Ok(Key::ToggleSign));
        assert_eq!("7".parse(), Ok(Key::Input('7')));
        assert_eq!("%".parse(), Ok(Key::Input('%')));
        assert_eq!("(".parse(), Ok(Key::Input('(')));
    }

    #[test]
    fn test_reject_unknown_labels() {
        assert_eq!("x".parse::<Key>(), Err(UnknownKey("x".to_string())));
        assert!("12".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
    }

    #[test]
    fn test_display_round_trips_labels() {
        for label in ["C", "⌫", "=", "+/-", "9", "."] {
            let key: Key = label.parse().unwrap();
            assert_eq!(key.to_string(), label);
        }
    }
}
