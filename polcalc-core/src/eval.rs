//! # Prefix Evaluator
//!
//! Reduces a prefix (Polish) token sequence to a single numeric value.
//!
//! The algorithm is a single pass over the tokens in reverse order with an
//! operand stack: numbers are pushed, and each operator pops two operands,
//! applies itself and pushes the result. Because every fully reduced
//! sub-expression is a single stacked value by the time its enclosing
//! operator is reached, the pass is equivalent to a reverse post-order
//! reduction and generalizes to arbitrary nesting.

use crate::error::{CalcError, CalcResult};
use crate::tokenizer::{Operator, Token};

/// Evaluate a prefix token sequence.
///
/// Exactly one value must remain on the operand stack after the pass; an
/// empty stack, surplus values, an operator with fewer than two operands or
/// a parenthesis token all mean the input was malformed.
pub fn evaluate_prefix(tokens: &[Token]) -> CalcResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len() / 2 + 1);

    for token in tokens.iter().rev() {
        match token {
            Token::Number(value) => stack.push(*value),
            Token::Operator(op) => {
                // The first pop is the operand written directly after the
                // operator, i.e. the left-hand side. The order matters for
                // `-` and `/`.
                let left = stack.pop().ok_or_else(|| missing_operand(*op))?;
                let right = stack.pop().ok_or_else(|| missing_operand(*op))?;
                stack.push(op.apply(left, right)?);
            }
            Token::OpenParen | Token::CloseParen => {
                return Err(CalcError::MalformedExpression {
                    detail: "parentheses are not valid in prefix notation".to_string(),
                });
            }
        }
    }

    let result = stack.pop().ok_or_else(|| CalcError::MalformedExpression {
        detail: "empty expression".to_string(),
    })?;

    if !stack.is_empty() {
        return Err(CalcError::MalformedExpression {
            detail: format!("{} unconsumed operands remain", stack.len()),
        });
    }

    Ok(result)
}

fn missing_operand(op: Operator) -> CalcError {
    CalcError::MalformedExpression {
        detail: format!("operator '{op}' is missing an operand"),
    }
}
