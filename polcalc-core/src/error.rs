//! Error types shared by the tokenizer, converter and evaluator.

use thiserror::Error;

/// Result alias used throughout the core crate.
pub type CalcResult<T> = Result<T, CalcError>;

/// Failure classification for expression processing.
///
/// Every failure is detected locally and returned as a typed result; the
/// core never logs, retries or produces partial results (a division by zero
/// is an error, not an infinity).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The token sequence does not form a well-formed expression.
    #[error("malformed expression: {detail}")]
    MalformedExpression { detail: String },

    /// A token is neither a number literal, an operator nor a parenthesis.
    #[error("unknown token: {token}")]
    UnknownToken { token: String },

    /// A numeric literal outside the supported shape (negative, fractional).
    #[error("unsupported literal: {literal}")]
    UnsupportedLiteral { literal: String },

    /// The divide operator was applied with a zero right operand.
    #[error("division by zero")]
    DivisionByZero,
}
