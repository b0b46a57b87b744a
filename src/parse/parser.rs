use super::{ast::*, error::*, lexer::*};
use crate::common::*;
use crate::error::Result;
use crate::roll::RangeError;
use std::str::FromStr;

pub struct Parser<'a> {
    body: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(body: &'a str) -> Self {
        Self { body }
    }

    pub fn parse(self) -> Result<Expression> {
        let mut words = tokenize(self.body).peekable();

        let accuracy = match words.peek().copied() {
            Some(word) if classify(word) == Ok(WordKind::Accuracy) => {
                words.next();
                Some(parse_level(&word[2..])?)
            }
            _ => None,
        };

        let mut source = Vec::new();
        let mut tokens = Vec::new();
        for word in words {
            tokens.push(Self::parse_word(word)?);
            source.push(word);
        }

        let tokens = NonEmpty::try_from_vec(tokens).map_err(|_| ParseError::NoTerms)?;
        let expr = Expression::new(source.join(" "), accuracy, tokens);
        tracing::debug!(source = expr.source(), ?accuracy, tokens = expr.tokens().len(), "parsed expression");
        Ok(expr)
    }

    fn parse_word(word: &str) -> Result<Token> {
        let kind = classify(word)?;
        match kind {
            WordKind::Dice => Ok(Token::Term(word.parse()?)),
            WordKind::Integer(x) => Ok(Token::Literal(x)),
            _ => match kind.as_binary_op() {
                Some(op) => Ok(Token::Op(op)),
                None => Err(ParseError::invalid_roll(word).into()),
            },
        }
    }
}

impl FromStr for DiceTerm {
    type Err = crate::RollError;

    fn from_str(s: &str) -> Result<Self> {
        let (count, rest) = s.split_once('d').ok_or_else(|| ParseError::invalid_roll(s))?;
        let count = parse_count(count, s)?;

        let (sides, suffix) = split_modifier(rest);
        let sides = parse_sides(sides, s)?;

        let term = Self::new(count, sides);
        Ok(match suffix {
            Some((marker, argument)) => {
                term.with_modifier(Modifier::resolve(marker, argument, sides, s)?)
            }
            None => term,
        })
    }
}

impl Modifier {
    /// Builds a modifier from its marker and the digits that follow it.
    /// Absent digits select the marker's default; for `ma` that is the
    /// number of sides.
    pub fn resolve(
        marker: Marker,
        argument: &str,
        sides: NonZeroUInt,
        term: &str,
    ) -> Result<Self, ModifierError> {
        let error = || ModifierError {
            marker,
            argument: argument.to_owned(),
            term: term.to_owned(),
        };

        Ok(match marker {
            Marker::KeepHighest => Self::KeepHighest(parse_digits(argument, 1).ok_or_else(error)?),
            Marker::Reroll => Self::Reroll(parse_digits(argument, 1).ok_or_else(error)?),
            Marker::ClampMin => Self::ClampMin(parse_digits(argument, 1).ok_or_else(error)?),
            Marker::ClampMax => {
                Self::ClampMax(parse_digits(argument, sides.get()).ok_or_else(error)?)
            }
        })
    }
}

/// Splits the part after `d` at the highest-priority marker it contains.
fn split_modifier(rest: &str) -> (&str, Option<(Marker, &str)>) {
    Marker::PRIORITY
        .iter()
        .find_map(|&marker| {
            rest.find(marker.as_str()).map(|i| {
                let argument = &rest[i + marker.as_str().len()..];
                (&rest[..i], Some((marker, argument)))
            })
        })
        .unwrap_or((rest, None))
}

/// A level too large to parse cannot be on any ladder.
fn parse_level(digits: &str) -> Result<u32, RangeError> {
    digits
        .parse()
        .map_err(|_| RangeError::UnknownAccuracy(digits.to_owned()))
}

fn parse_count(count: &str, term: &str) -> Result<Num> {
    if count.is_empty() {
        return Ok(Num::MIN);
    }
    let count = parse_digits(count, 0).ok_or_else(|| ParseError::InvalidCount {
        term: term.to_owned(),
    })?;
    Ok(Num::new(count).ok_or(RangeError::ZeroCount)?)
}

fn parse_sides(sides: &str, term: &str) -> Result<NonZeroUInt> {
    let invalid = || ParseError::InvalidSides {
        term: term.to_owned(),
    };
    if sides.is_empty() {
        return Err(invalid().into());
    }
    let sides = parse_digits(sides, 0).ok_or_else(invalid)?;
    Ok(NonZeroUInt::new(sides).ok_or(RangeError::ZeroSides)?)
}

fn parse_digits<T: FromStr>(s: &str, default: T) -> Option<T> {
    if s.is_empty() {
        Some(default)
    } else if s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}
