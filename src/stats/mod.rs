//! Monte-Carlo evaluation of an expression.
//!
//! Every dice term is rolled once per trial into its own buffer; buffers and
//! literals are then folded left to right exactly like a single roll, one
//! trial at a time.

mod batch;
mod summary;

pub use summary::{Distribution, HistogramBin, Summary, DEFAULT_HISTOGRAM_BINS};

use crate::common::*;
use crate::config::RollConfig;
use crate::error::Result;
use crate::eval::{fold, Step};
use crate::parse::ast::{Expression, Token};
use crate::roll::ArithmeticError;

enum Operand {
    Scalar(Int),
    Trials(Vec<Int>),
}

/// Simulates `expr` over `trials` independent trials.
pub fn simulate(expr: &Expression, trials: usize, config: &RollConfig) -> Result<Distribution> {
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::debug!(expression = expr.source(), trials, seed, "simulating");

    let mut steps = Vec::with_capacity(expr.tokens().len());
    for (i, token) in expr.tokens().iter().enumerate() {
        steps.push(match *token {
            Token::Term(term) => {
                let seed = batch::term_seed(seed, i);
                let sums = batch::roll_term(&term, trials, seed, config.limits())?;
                Step::Value(Operand::Trials(sums))
            }
            Token::Literal(x) => Step::Value(Operand::Scalar(x)),
            Token::Op(op) => Step::Op(op),
        });
    }

    let values = fold(steps, vec![0.0; trials], combine)?;
    let dist = Distribution::new(expr.source().to_owned(), values);
    tracing::debug!(
        mean = dist.mean(),
        variance = dist.variance(),
        "simulation complete"
    );
    Ok(dist)
}

fn combine(
    mut acc: Vec<Float>,
    op: BinaryOperator,
    rhs: Operand,
) -> Result<Vec<Float>, ArithmeticError> {
    match rhs {
        Operand::Scalar(x) => {
            if op == BinaryOperator::Div && x == 0 {
                return Err(ArithmeticError::ZeroDivision);
            }
            let x = x as Float;
            for a in acc.iter_mut() {
                *a = apply(*a, op, x);
            }
        }
        Operand::Trials(xs) => {
            if op == BinaryOperator::Div && xs.contains(&0) {
                return Err(ArithmeticError::ZeroDivision);
            }
            for (a, &x) in acc.iter_mut().zip(&xs) {
                *a = apply(*a, op, x as Float);
            }
        }
    }
    Ok(acc)
}

fn apply(a: Float, op: BinaryOperator, b: Float) -> Float {
    match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => a / b,
    }
}
