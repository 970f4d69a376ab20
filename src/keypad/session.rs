//! Keypad session state: the expression being edited and its live result.

use serde::Serialize;
use tracing::debug;

use super::editing::{append_token, toggle_sign};
use super::key::Key;
use crate::calculator::{evaluate_expression, format_number};

/// What the calculator screen shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Screen {
    /// The expression line, `"0"` while nothing has been typed.
    pub expression: String,
    /// The result line: a live preview, `"Error"`, or empty.
    pub result: String,
    /// Whether the result line shows an error.
    pub is_error: bool,
}

/// An editing session driven by keypad presses.
#[derive(Clone, Debug, Default)]
pub struct Session {
    expression: String,
    preview: String,
    is_error: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Apply a single key press.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Clear => {
                self.expression.clear();
                self.preview.clear();
                self.is_error = false;
            }
            Key::Backspace => {
                if self.expression.pop().is_some() {
                    self.refresh();
                }
            }
            Key::Equals => {
                self.preview.clear();
                match evaluate_expression(&self.expression) {
                    Some(value) => {
                        self.expression = format_number(value);
                        self.is_error = false;
                    }
                    None => self.is_error = true,
                }
            }
            Key::ToggleSign => {
                self.expression = toggle_sign(&self.expression);
                self.refresh();
            }
            Key::Input(c) => {
                self.expression = append_token(&self.expression, c.encode_utf8(&mut [0; 4]));
                self.refresh();
            }
        }
        debug!(%key, expression = %self.expression, "key pressed");
    }

    /// Re-evaluate the expression for the live preview.
    fn refresh(&mut self) {
        match evaluate_expression(&self.expression) {
            Some(value) => {
                self.preview = format_number(value);
                self.is_error = false;
            }
            None => {
                self.preview.clear();
                self.is_error = !self.expression.trim().is_empty();
            }
        }
    }

    /// Snapshot of the screen contents.
    pub fn screen(&self) -> Screen {
        let expression = if self.expression.is_empty() {
            "0".to_string()
        } else {
            self.expression.clone()
        };
        let result = if self.is_error {
            "Error".to_string()
        } else {
            self.preview.clone()
        };
        Screen {
            expression,
            result,
            is_error: self.is_error,
        }
    }
}
