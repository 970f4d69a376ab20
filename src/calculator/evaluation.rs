//! Postfix evaluation and the public evaluation entry points.

use serde::Serialize;
use tracing::debug;

use super::error::{InvalidExpression, Result};
use super::format::format_number;
use super::parser::to_postfix;
use super::token::Token;

/// Outcome of evaluating a calculator expression.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CalcResult {
    /// The expression produced a value.
    Success {
        /// The original expression.
        expression: String,
        /// The numeric value.
        value: f64,
        /// The value as shown to the user.
        display: String,
    },
    /// The expression is invalid.
    Error {
        /// The original expression.
        expression: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string, `"Error"` for failures.
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display, .. } => display,
            Self::Error { .. } => "Error",
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }
}

/// Evaluate an infix expression.
///
/// Blank input evaluates to `0.0`.
pub fn evaluate(expression: &str) -> Result<f64> {
    if expression.trim().is_empty() {
        return Ok(0.0);
    }
    let postfix = to_postfix(expression)?;
    evaluate_postfix(&postfix)
}

/// Evaluate an infix expression, discarding the failure.
pub fn evaluate_expression(expression: &str) -> Option<f64> {
    evaluate(expression).ok()
}

/// Evaluate and format an expression in one step.
///
/// A result that overflows to infinity or NaN is reported as an error.
pub fn calculate(expression: &str) -> CalcResult {
    let expression = expression.to_string();
    match evaluate(&expression) {
        Ok(value) if !value.is_finite() => {
            debug!(%value, "result is not finite");
            CalcResult::Error { expression }
        }
        Ok(value) => CalcResult::Success {
            display: format_number(value),
            expression,
            value,
        },
        Err(InvalidExpression) => CalcResult::Error { expression },
    }
}

/// Evaluate a postfix token queue.
pub fn evaluate_postfix(tokens: &[Token]) -> Result<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(text) => {
                let value = text.parse::<f64>().map_err(|_| {
                    debug!(literal = %text, "malformed numeric literal");
                    InvalidExpression
                })?;
                stack.push(value);
            }
            Token::Operator(op) => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    debug!(operator = %op.symbol(), "missing operand");
                    return Err(InvalidExpression);
                };
                let value = op.apply(a, b).ok_or_else(|| {
                    debug!(operator = %op.symbol(), "division by zero");
                    InvalidExpression
                })?;
                stack.push(value);
            }
            Token::LeftParen | Token::RightParen => {
                debug!("parenthesis in postfix queue");
                return Err(InvalidExpression);
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        values => {
            debug!(remaining = values.len(), "expected exactly one result");
            Err(InvalidExpression)
        }
    }
}
