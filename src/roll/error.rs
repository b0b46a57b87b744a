use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("dice count must be at least 1")]
    ZeroCount,
    #[error("dice must have at least 1 side")]
    ZeroSides,
    #[error("unknown accuracy level {0}")]
    UnknownAccuracy(String),
    #[error("trial count must be at least 1")]
    ZeroTrials,
    #[error("too many dice rolled (limit {limit})")]
    TooManyRolls { limit: usize },
    #[error("too many possible rerolls (limit {limit})")]
    TooManyRerolls { limit: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("cannot divide by zero")]
    ZeroDivision,
    #[error("integer overflow")]
    Overflow,
}
