//! # Tokenizer
//!
//! Lexical analysis for calculator expressions. An expression arrives as a
//! whitespace-delimited string and is turned into a stream of [`Token`]
//! values for the converter and evaluator.
//!
//! Supported lexemes:
//!
//! * non-negative integer literals (parsed to `f64`)
//! * the four binary operators `+ - * /`
//! * the parentheses `(` and `)` (only meaningful in infix input)
//!
//! Anything else is rejected up front: literals of an unsupported shape
//! (negative or fractional numbers) as [`CalcError::UnsupportedLiteral`],
//! everything else as [`CalcError::UnknownToken`].

use std::str::FromStr;

use crate::error::{CalcError, CalcResult};

/// One atomic unit of an expression string. Tokens are immutable values and
/// compare by value.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A non-negative integer literal, held as its parsed floating-point value.
    Number(f64),
    /// One of the four binary arithmetic operators.
    Operator(Operator),
    /// `(` — opens a fully parenthesized infix group.
    OpenParen,
    /// `)` — closes a fully parenthesized infix group.
    CloseParen,
}

/// The fixed operator table: each variant maps a symbol to a strict binary
/// function over `f64`. The mapping is part of the type, so it is immutable
/// for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
}

impl Operator {
    /// Apply the operator to its two operands.
    ///
    /// Division checks the right operand before dividing so a zero divisor
    /// surfaces as [`CalcError::DivisionByZero`] rather than an infinity.
    pub fn apply(&self, left: f64, right: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

/// Split an expression string on whitespace and classify every word.
pub fn tokenize(input: &str) -> CalcResult<Vec<Token>> {
    input.split_whitespace().map(classify).collect()
}

fn classify(word: &str) -> CalcResult<Token> {
    match word {
        "(" => return Ok(Token::OpenParen),
        ")" => return Ok(Token::CloseParen),
        _ => {}
    }

    if let Ok(op) = Operator::from_str(word) {
        return Ok(Token::Operator(op));
    }

    if word.bytes().all(|b| b.is_ascii_digit()) {
        // Digit strings of any width are in range for f64 parsing.
        let value = word.parse::<f64>().map_err(|_| CalcError::UnknownToken {
            token: word.to_string(),
        })?;
        return Ok(Token::Number(value));
    }

    // Parseable as a number but not a plain non-negative integer literal,
    // e.g. "-3" or "2.5".
    if word.parse::<f64>().is_ok() {
        return Err(CalcError::UnsupportedLiteral {
            literal: word.to_string(),
        });
    }

    Err(CalcError::UnknownToken {
        token: word.to_string(),
    })
}
