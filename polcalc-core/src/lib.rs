//! # Polcalc Core
//!
//! The evaluation engine for a small arithmetic calculator that understands
//! two notations: prefix (Polish) and fully parenthesized infix. Operands
//! are non-negative integer literals; the operators are `+ - * /`.
//!
//! ## Processing Pipeline
//!
//! ```text
//! expression string → Tokenizer → (Converter) → Prefix Evaluator → f64
//! ```
//!
//! * [`tokenizer`] splits a whitespace-delimited expression string into
//!   [`tokenizer::Token`] values.
//! * [`convert`] rewrites a fully parenthesized infix token sequence into
//!   prefix form. Prefix input bypasses this stage.
//! * [`eval`] reduces a prefix token sequence to a single `f64` with a
//!   stack-based reverse pass.
//! * [`api`] ties the stages together behind [`api::evaluate`], keyed by a
//!   [`api::Notation`] flag.
//!
//! Every stage is a pure, synchronous function over an in-memory token
//! sequence: no I/O, no shared state, linear time and space in the token
//! count. Failures are classified by [`error::CalcError`] and always
//! returned as typed results.
//!
//! ## Usage Example
//!
//! ```rust
//! use polcalc_core::{Notation, evaluate};
//!
//! let result = evaluate("( 1 + ( 2 * 3 ) )", Notation::Infix)?;
//! assert_eq!(result, 7.0);
//! # Ok::<(), polcalc_core::CalcError>(())
//! ```

pub mod api;
pub mod convert;
pub mod error;
pub mod eval;
pub mod tokenizer;

// Re-exports
pub use api::*;
pub use error::*;
