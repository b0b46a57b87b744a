use crate::common::BinaryOperator;
use crate::error::Result;
use crate::parse::{ast::Expression, ast::Token, ParseError};
use crate::roll::{
    Literal, Number, RollContext, RolledDice, Roller, SimpleStringifier, Stringify, Total, Value,
};

/// One element of an expression as seen by the left-to-right fold.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<T> {
    Value(T),
    Op(BinaryOperator),
}

/// Folds `steps` strictly left to right, with no operator precedence.
///
/// The outcome starts at `zero` with a pending `+`. Every value is combined
/// into the outcome with the pending operator; every operator replaces the
/// pending one.
pub(crate) fn fold<A, T, E>(
    steps: impl IntoIterator<Item = Step<T>>,
    zero: A,
    mut combine: impl FnMut(A, BinaryOperator, T) -> Result<A, E>,
) -> Result<A, E> {
    let mut outcome = zero;
    let mut pending = BinaryOperator::Add;
    for step in steps {
        match step {
            Step::Value(value) => outcome = combine(outcome, pending, value)?,
            Step::Op(op) => pending = op,
        }
    }
    Ok(outcome)
}

/// A single concrete evaluation of an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarRoll {
    expression: String,
    steps: Vec<Step<Value>>,
    outcome: Number,
}

impl ScalarRoll {
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn steps(&self) -> &[Step<Value>] {
        &self.steps
    }

    pub fn outcome(&self) -> Number {
        self.outcome
    }

    /// `<expression> -> [<values>] = <outcome>`
    pub fn trace(&self) -> String {
        SimpleStringifier::new().stringify(self)
    }
}

pub fn evaluate<R: Roller>(expr: &Expression, ctx: &mut RollContext<R>) -> Result<ScalarRoll> {
    if let Some(level) = expr.accuracy() {
        return Err(ParseError::invalid_roll(format!("-a{}", level)).into());
    }

    let mut steps = Vec::with_capacity(expr.tokens().len());
    for token in expr.tokens() {
        steps.push(match *token {
            Token::Term(term) => Step::Value(Value::from(RolledDice::roll(ctx, term)?)),
            Token::Literal(x) => Step::Value(Value::from(Literal(x))),
            Token::Op(op) => Step::Op(op),
        });
    }

    let numbers = steps.iter().map(|step| match step {
        Step::Value(value) => Step::Value(Number::Int(value.total())),
        Step::Op(op) => Step::Op(*op),
    });
    let outcome = fold(numbers, Number::ZERO, Number::apply)?;

    tracing::debug!(expression = expr.source(), %outcome, "evaluated roll");
    Ok(ScalarRoll {
        expression: expr.source().to_owned(),
        steps,
        outcome,
    })
}
