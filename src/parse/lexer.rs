use super::error::ParseError;
use crate::common::*;
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, WordKind>, WordKind>;

pub fn lexer(s: &str) -> Lexer {
    WordKind::lexer(s).peekable_lexer()
}

/// Splits a command body into its whitespace-separated words.
pub fn tokenize(body: &str) -> impl Iterator<Item = &str> {
    body.split_whitespace()
}

/// The kind of a single whitespace-delimited word of a command body.
#[derive(Logos, Debug, Copy, Clone, PartialEq)]
pub enum WordKind {
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse())]
    Integer(Int),

    #[regex(r"[0-9]*d[0-9a-z]*")]
    Dice,

    #[regex(r"-a[0-9]+")]
    Accuracy,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[error]
    Error,
}

impl WordKind {
    pub fn as_str(&self) -> &'static str {
        use WordKind::*;

        match self {
            Integer(_) => "<integer>",
            Dice => "<dice>",
            Accuracy => "<accuracy>",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            Slash => "'/'",
            Error => "<error>",
        }
    }

    pub fn as_binary_op(&self) -> Option<BinaryOperator> {
        use BinaryOperator::*;
        Some(match self {
            Self::Plus => Add,
            Self::Minus => Sub,
            Self::Star => Mul,
            Self::Slash => Div,
            _ => return None,
        })
    }
}

impl fmt::Display for WordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a word. The word must lex as exactly one token spanning all of
/// it, so operator characters embedded in a larger word are rejected.
pub fn classify(word: &str) -> Result<WordKind, ParseError> {
    let mut lexer = lexer(word);
    match lexer.next() {
        Some(kind)
            if kind != WordKind::Error
                && lexer.span() == (0..word.len())
                && lexer.peek().is_none() =>
        {
            Ok(kind)
        }
        _ => Err(ParseError::invalid_roll(word)),
    }
}
