//! Round-trip property: converting a fully parenthesized infix expression
//! and evaluating the result agrees with reducing the expression tree
//! directly, for randomly generated trees.

use polcalc_core::tokenizer::Operator;
use polcalc_core::{CalcResult, Notation, evaluate};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Expr {
    Num(u8),
    Bin(Operator, Box<Expr>, Box<Expr>),
}

impl Expr {
    fn render_infix(&self) -> String {
        match self {
            Expr::Num(n) => n.to_string(),
            Expr::Bin(op, left, right) => format!(
                "( {} {} {} )",
                left.render_infix(),
                op,
                right.render_infix()
            ),
        }
    }

    fn render_prefix(&self) -> String {
        match self {
            Expr::Num(n) => n.to_string(),
            Expr::Bin(op, left, right) => format!(
                "{} {} {}",
                op,
                left.render_prefix(),
                right.render_prefix()
            ),
        }
    }

    /// Standard left-to-right reduction of the tree itself.
    fn reduce(&self) -> CalcResult<f64> {
        match self {
            Expr::Num(n) => Ok(f64::from(*n)),
            Expr::Bin(op, left, right) => op.apply(left.reduce()?, right.reduce()?),
        }
    }
}

fn arb_operator() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Sub),
        Just(Operator::Mul),
        Just(Operator::Div),
    ]
}

fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = (0u8..100).prop_map(Expr::Num);
    leaf.prop_recursive(4, 32, 2, |inner| {
        (arb_operator(), inner.clone(), inner)
            .prop_map(|(op, left, right)| Expr::Bin(op, Box::new(left), Box::new(right)))
    })
}

proptest! {
    #[test]
    fn prop_infix_round_trip_matches_direct_reduction(expr in arb_expr()) {
        prop_assert_eq!(evaluate(&expr.render_infix(), Notation::Infix), expr.reduce());
    }

    #[test]
    fn prop_prefix_evaluation_matches_direct_reduction(expr in arb_expr()) {
        prop_assert_eq!(evaluate(&expr.render_prefix(), Notation::Prefix), expr.reduce());
    }
}
