//! Keypad calculator core.
//!
//! [`calculator`] holds the shunting-yard evaluator and result formatting,
//! [`keypad`] the editing layer that feeds it one key at a time.

pub mod calculator;
pub mod config;
pub mod keypad;

pub use calculator::{InvalidExpression, evaluate, evaluate_expression, format_number};
