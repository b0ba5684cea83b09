//! # Infix-to-Prefix Converter
//!
//! Rewrites a fully parenthesized infix token sequence into prefix form so
//! it can be fed to [`crate::eval::evaluate_prefix`].
//!
//! The input grammar is strict: every binary application is wrapped in
//! exactly one pair of parentheses holding `left operator right`, with
//! operands recursively either a number or another parenthesized group. No
//! precedence or associativity logic exists, nor is any needed — the
//! parenthesization alone determines evaluation order.
//!
//! The conversion is a single pass over the tokens in reverse order, with an
//! operator stack and an output sequence grown by front-insertion. A close
//! paren marks a pending operator application; the matching open paren pops
//! that group's operator to the front of the output. Groupings that violate
//! the grammar (an operator-less group, unbalanced parentheses, bare
//! operator chains) are rejected as [`CalcError::MalformedExpression`]
//! instead of producing undefined output.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::{CalcError, CalcResult};
use crate::tokenizer::Token;

/// Convert a fully parenthesized infix token sequence into prefix form.
pub fn infix_to_prefix(tokens: &[Token]) -> CalcResult<Vec<Token>> {
    let opens = tokens.iter().filter(|t| **t == Token::OpenParen).count();
    let closes = tokens.iter().filter(|t| **t == Token::CloseParen).count();
    if opens != closes {
        return Err(CalcError::MalformedExpression {
            detail: "unbalanced parentheses".to_string(),
        });
    }

    let mut output: VecDeque<Token> = VecDeque::with_capacity(tokens.len());
    let mut op_stack: Vec<Token> = Vec::new();

    for token in tokens.iter().rev() {
        match token {
            Token::CloseParen => op_stack.push(token.clone()),
            Token::OpenParen => {
                // Start of a group in original order: the group's operator
                // must be on top of the stack.
                match op_stack.pop() {
                    Some(op @ Token::Operator(_)) => output.push_front(op),
                    _ => {
                        return Err(CalcError::MalformedExpression {
                            detail: "parenthesized group without an operator".to_string(),
                        });
                    }
                }
                // A close paren left over from a now fully consumed nested
                // group is discarded.
                if op_stack.last() == Some(&Token::CloseParen) {
                    op_stack.pop();
                }
            }
            Token::Operator(_) => op_stack.push(token.clone()),
            Token::Number(_) => output.push_front(token.clone()),
        }
    }

    // A top-level expression with no enclosing parentheses leaves its
    // operator on the stack.
    if let Some(leftover) = op_stack.pop() {
        match leftover {
            Token::Operator(_) => output.push_front(leftover),
            _ => {
                return Err(CalcError::MalformedExpression {
                    detail: "unbalanced parentheses".to_string(),
                });
            }
        }
        if !op_stack.is_empty() {
            return Err(CalcError::MalformedExpression {
                detail: "operator chain without parentheses".to_string(),
            });
        }
    }

    debug!(converted = output.len(), "converted infix expression to prefix");

    Ok(output.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;
    use pretty_assertions::assert_eq;

    fn convert(input: &str) -> CalcResult<Vec<Token>> {
        infix_to_prefix(&tokenize(input)?)
    }

    fn render(tokens: &[Token]) -> String {
        tokens
            .iter()
            .map(|t| match t {
                Token::Number(n) => n.to_string(),
                Token::Operator(op) => op.to_string(),
                Token::OpenParen => "(".to_string(),
                Token::CloseParen => ")".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_flat_group() {
        assert_eq!(render(&convert("( 1 + 2 )").unwrap()), "+ 1 2");
    }

    #[test]
    fn test_nested_right_group() {
        assert_eq!(render(&convert("( 1 + ( 2 * 3 ) )").unwrap()), "+ 1 * 2 3");
    }

    #[test]
    fn test_nested_left_group() {
        assert_eq!(render(&convert("( ( 1 * 2 ) + 3 )").unwrap()), "+ * 1 2 3");
    }

    #[test]
    fn test_deeply_nested_groups() {
        assert_eq!(
            render(&convert("( ( ( 1 + 1 ) / 10 ) - ( 1 * 2 ) )").unwrap()),
            "- / + 1 1 10 * 1 2"
        );
    }

    #[test]
    fn test_bare_number() {
        assert_eq!(render(&convert("7").unwrap()), "7");
    }

    #[test]
    fn test_top_level_without_parentheses() {
        // The original shape the converter also accepts: a single
        // application left unwrapped at the top level.
        assert_eq!(render(&convert("1 + 2").unwrap()), "+ 1 2");
    }

    #[test]
    fn test_unbalanced_parentheses_rejected() {
        for input in ["( 1 + 2", "1 + 2 )", "( ( 1 + 2 )", ")"] {
            assert!(
                matches!(
                    convert(input).unwrap_err(),
                    CalcError::MalformedExpression { .. }
                ),
                "expected rejection of {input:?}"
            );
        }
    }

    #[test]
    fn test_group_without_operator_rejected() {
        assert!(matches!(
            convert("( 1 )").unwrap_err(),
            CalcError::MalformedExpression { .. }
        ));
    }

    #[test]
    fn test_operator_chain_rejected() {
        assert!(matches!(
            convert("1 + 2 + 3").unwrap_err(),
            CalcError::MalformedExpression { .. }
        ));
    }
}
