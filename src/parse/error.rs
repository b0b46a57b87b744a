use super::ast::Marker;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no terms")]
    NoTerms,
    #[error("invalid roll: {0}")]
    InvalidRoll(String),
    #[error("invalid roll: {term}: dice count must be an integer")]
    InvalidCount { term: String },
    #[error("invalid roll: {term}: dice sides must be an integer")]
    InvalidSides { term: String },
}

impl ParseError {
    pub(crate) fn invalid_roll(word: impl ToString) -> Self {
        Self::InvalidRoll(word.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid argument {argument:?} for modifier '{marker}' in {term}")]
pub struct ModifierError {
    pub marker: Marker,
    pub argument: String,
    pub term: String,
}
