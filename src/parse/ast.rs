use crate::common::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The textual marker that introduces a modifier suffix.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Marker {
    KeepHighest,
    Reroll,
    ClampMin,
    ClampMax,
}

impl Marker {
    /// Markers in the order they are searched for in a dice term. When a
    /// term contains several, the first one found in this order wins.
    pub const PRIORITY: [Self; 4] = [
        Self::KeepHighest,
        Self::Reroll,
        Self::ClampMin,
        Self::ClampMax,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeepHighest => "kh",
            Self::Reroll => "rr",
            Self::ClampMin => "mi",
            Self::ClampMax => "ma",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// Keep the `n` highest faces.
    KeepHighest(usize),
    /// Redraw faces showing exactly 1, up to `n` passes.
    Reroll(usize),
    /// Raise every face below the value to it.
    ClampMin(UInt),
    /// Lower every face above the value to it.
    ClampMax(UInt),
}

impl Modifier {
    pub const fn marker(&self) -> Marker {
        match self {
            Self::KeepHighest(_) => Marker::KeepHighest,
            Self::Reroll(_) => Marker::Reroll,
            Self::ClampMin(_) => Marker::ClampMin,
            Self::ClampMax(_) => Marker::ClampMax,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeepHighest(n) | Self::Reroll(n) => write!(f, "{}{}", self.marker(), n),
            Self::ClampMin(v) | Self::ClampMax(v) => write!(f, "{}{}", self.marker(), v),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DiceTerm {
    pub count: Num,
    pub sides: NonZeroUInt,
    pub modifier: Option<Modifier>,
}

impl DiceTerm {
    pub const fn new(count: Num, sides: NonZeroUInt) -> Self {
        Self {
            count,
            sides,
            modifier: None,
        }
    }

    pub const fn with_modifier(self, modifier: Modifier) -> Self {
        Self {
            modifier: Some(modifier),
            ..self
        }
    }
}

impl fmt::Display for DiceTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if let Some(modifier) = &self.modifier {
            write!(f, "{}", modifier)?;
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Token {
    Term(DiceTerm),
    Literal(Int),
    Op(BinaryOperator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term(term) => fmt::Display::fmt(term, f),
            Self::Literal(x) => fmt::Display::fmt(x, f),
            Self::Op(op) => fmt::Display::fmt(op, f),
        }
    }
}

/// A parsed command body.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub(crate) source: String,
    pub(crate) accuracy: Option<u32>,
    pub(crate) tokens: NonEmpty<Token>,
}

impl Expression {
    pub(crate) fn new(source: String, accuracy: Option<u32>, tokens: NonEmpty<Token>) -> Self {
        Self {
            source,
            accuracy,
            tokens,
        }
    }

    /// The words of the body after the accuracy flag, joined by single spaces.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The level given by a leading `-a<k>` flag, if any.
    pub fn accuracy(&self) -> Option<u32> {
        self.accuracy
    }

    pub fn tokens(&self) -> &[Token] {
        self.tokens.as_slice()
    }
}
