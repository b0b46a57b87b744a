use super::{error::RangeError, roller::Roller};
use crate::common::*;
use crate::parse::ast::{DiceTerm, Modifier};

/// Bounds on the dice a single term may draw. Both depend only on the term,
/// so a term that passes [RollLimits::check] never fails while rolling.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RollLimits {
    /// Dice drawn up front.
    pub max_rolls: usize,
    /// Worst-case redraws, the dice count times the reroll passes.
    pub max_rerolls: usize,
}

impl RollLimits {
    pub fn check(&self, term: &DiceTerm) -> Result<(), RangeError> {
        let count = term.count.get();
        if count > self.max_rolls {
            return Err(RangeError::TooManyRolls {
                limit: self.max_rolls,
            });
        }
        if let Some(Modifier::Reroll(passes)) = term.modifier {
            if count.saturating_mul(passes) > self.max_rerolls {
                return Err(RangeError::TooManyRerolls {
                    limit: self.max_rerolls,
                });
            }
        }
        Ok(())
    }
}

/// Draws pools of dice for one evaluation within a set of [RollLimits].
pub struct RollContext<R: Roller> {
    roller: R,
    limits: RollLimits,
}

impl<R: Roller> RollContext<R> {
    pub fn new(roller: R, limits: RollLimits) -> Self {
        Self { roller, limits }
    }

    /// Rolls one pool of `term` and applies its modifier. Returns the faces
    /// and how many leading faces are kept. The limits are checked before
    /// anything is drawn.
    pub fn roll_pool(&mut self, term: &DiceTerm) -> Result<(Vec<UInt>, usize), RangeError> {
        self.limits.check(term)?;
        let mut faces = vec![0; term.count.get()];
        let kept = self.fill(term, &mut faces);
        Ok((faces, kept))
    }

    /// Like [RollContext::roll_pool] but into a caller-owned buffer of
    /// `term.count` faces, for a term already checked against the limits.
    pub(crate) fn fill(&mut self, term: &DiceTerm, faces: &mut [UInt]) -> usize {
        self.roller.roll_into(faces, term.sides);
        match &term.modifier {
            Some(modifier) => modifier.apply(faces, || self.roller.roll(term.sides)),
            None => faces.len(),
        }
    }
}
