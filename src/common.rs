use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::num::{NonZeroU32, NonZeroUsize};

/// Signed type used for literals, term sums and scalar outcomes.
pub type Int = i64;
/// Type of a single die face.
pub type UInt = u32;
/// Number of faces on a die.
pub type NonZeroUInt = NonZeroU32;

pub type Float = f64;

/// Number of dice in a term.
pub type Num = NonZeroUsize;

pub type NonEmpty<T> = vec1::Vec1<T>;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    pub const fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}
