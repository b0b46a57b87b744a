use crate::parse::{ModifierError, ParseError};
use crate::roll::{ArithmeticError, RangeError};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Range(#[from] RangeError),
    #[error("{0}")]
    Arithmetic(#[from] ArithmeticError),
    #[error("{0}")]
    Modifier(#[from] ModifierError),
}

pub type Result<T, E = RollError> = std::result::Result<T, E>;
