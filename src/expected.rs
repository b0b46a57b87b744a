//! Closed-form means of order statistics of a dice pool.
//!
//! For `n` dice of `s` sides the highest die averages `s·n/(n+1) + 1/2` and
//! the lowest `s/(n+1) + 1/2`. Both are exact for a single die and close to
//! the simulated mean otherwise.

use crate::common::*;
use crate::error::Result;
use crate::roll::RangeError;
use serde::{Deserialize, Serialize};

/// Which die of the pool to take.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Pick {
    Highest,
    Lowest,
}

pub fn expected_highest(count: Num, sides: NonZeroUInt) -> Float {
    let (n, s) = (count.get() as Float, Float::from(sides.get()));
    s * n / (n + 1.0) + 0.5
}

pub fn expected_lowest(count: Num, sides: NonZeroUInt) -> Float {
    let (n, s) = (count.get() as Float, Float::from(sides.get()));
    s / (n + 1.0) + 0.5
}

/// Expected value of the highest or lowest of `count` dice with `sides` sides.
pub fn expected_value(count: usize, sides: UInt, pick: Pick) -> Result<Float> {
    let count = Num::new(count).ok_or(RangeError::ZeroCount)?;
    let sides = NonZeroUInt::new(sides).ok_or(RangeError::ZeroSides)?;
    Ok(match pick {
        Pick::Highest => expected_highest(count, sides),
        Pick::Lowest => expected_lowest(count, sides),
    })
}
