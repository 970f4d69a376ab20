use thiserror::Error;

/// The expression could not be parsed or evaluated.
///
/// All failure causes collapse into this one value; the cause is only
/// reported through `tracing` at debug level.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("invalid expression")]
pub struct InvalidExpression;

pub type Result<T> = std::result::Result<T, InvalidExpression>;
