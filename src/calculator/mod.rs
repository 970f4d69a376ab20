//! Calculator module for evaluating arithmetic expressions.
//!
//! This module provides functionality to:
//! - Convert infix expressions to postfix with the shunting-yard algorithm
//! - Evaluate postfix token queues
//! - Format results for display
//! - Detect if user input looks like a calculator expression
//! - Copy results to the clipboard

mod clipboard;
mod detection;
mod error;
mod evaluation;
mod format;
mod parser;
mod token;

pub use clipboard::copy_to_clipboard;
pub use detection::looks_like_expression;
pub use error::InvalidExpression;
pub use evaluation::{CalcResult, calculate, evaluate, evaluate_expression, evaluate_postfix};
pub use format::format_number;
pub use parser::to_postfix;
pub use token::{Associativity, Operator, Token, is_operator_char};
