//! Top-level entry point tying the pipeline together for callers that hold
//! a raw expression string and a notation flag.

use serde::{Deserialize, Serialize};

use crate::convert::infix_to_prefix;
use crate::error::CalcResult;
use crate::eval::evaluate_prefix;
use crate::tokenizer::tokenize;

/// The notation an expression string is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Prefix (Polish) notation, e.g. `+ 1 2`.
    Prefix,
    /// Fully parenthesized infix notation, e.g. `( 1 + 2 )`.
    Infix,
}

/// Evaluate an expression string in the given notation.
///
/// Tokenizes the input, converts infix input to prefix form, and reduces the
/// result. Pure and stateless; safe to call from any number of threads.
pub fn evaluate(expression: &str, notation: Notation) -> CalcResult<f64> {
    let tokens = tokenize(expression)?;
    let prefix = match notation {
        Notation::Prefix => tokens,
        Notation::Infix => infix_to_prefix(&tokens)?,
    };
    evaluate_prefix(&prefix)
}
