use super::{ctx::RollContext, error::RangeError, roller::Roller};
use crate::common::*;
use crate::parse::ast::DiceTerm;

#[enum_dispatch::enum_dispatch]
pub trait Total {
    /// The contribution of this value to an outcome.
    fn total(&self) -> Int;
}

/// A value produced by one token of an expression.
#[derive(Debug, Clone, Eq, PartialEq)]
#[enum_dispatch::enum_dispatch(Total)]
pub enum Value {
    Scalar(Literal),
    Vector(RolledDice),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Literal(pub Int);

impl Total for Literal {
    fn total(&self) -> Int {
        self.0
    }
}

/// One concrete roll of a dice term.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RolledDice {
    pub term: DiceTerm,
    /// Faces remaining after the modifier, in the order the modifier left them.
    pub kept: Vec<UInt>,
    /// Faces discarded by keep-highest.
    pub dropped: Vec<UInt>,
}

impl RolledDice {
    pub fn roll<R: Roller>(ctx: &mut RollContext<R>, term: DiceTerm) -> Result<Self, RangeError> {
        let (mut faces, kept) = ctx.roll_pool(&term)?;
        tracing::trace!(%term, ?faces, kept, "rolled");
        let dropped = faces.split_off(kept);

        Ok(Self {
            term,
            kept: faces,
            dropped,
        })
    }
}

impl Total for RolledDice {
    fn total(&self) -> Int {
        self.kept.iter().map(|&x| Int::from(x)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ast::Modifier;
    use crate::roll::{RollLimits, ScriptRoller, StepRoller};

    const LIMITS: RollLimits = RollLimits {
        max_rolls: 10,
        max_rerolls: 100,
    };

    fn term(s: &str) -> DiceTerm {
        s.parse().unwrap()
    }

    #[test]
    fn test_roll_plain() {
        let mut ctx = RollContext::new(StepRoller::new(4, 1), LIMITS);
        let dice = RolledDice::roll(&mut ctx, term("3d6")).unwrap();
        assert_eq!(dice.kept, vec![4, 5, 6]);
        assert!(dice.dropped.is_empty());
        assert_eq!(Value::from(dice).total(), 15);
    }

    #[test]
    fn test_roll_keep_highest() {
        let mut ctx = RollContext::new(ScriptRoller::new([2, 6, 1, 5]), LIMITS);
        let dice = RolledDice::roll(&mut ctx, term("4d6kh3")).unwrap();
        assert_eq!(dice.kept, vec![6, 5, 2]);
        assert_eq!(dice.dropped, vec![1]);
        assert_eq!(dice.total(), 13);
    }

    #[test]
    fn test_roll_reroll() {
        let mut ctx = RollContext::new(ScriptRoller::new([1, 2, 1, 4]), LIMITS);
        let dice = RolledDice::roll(&mut ctx, term("2d20rr1")).unwrap();
        assert_eq!(dice.term.modifier, Some(Modifier::Reroll(1)));
        assert_eq!(dice.kept, vec![1, 2]);
        // One pass made exactly one redraw, leaving the last scripted face.
        assert_eq!(ctx.roll_pool(&term("1d20")), Ok((vec![4], 1)));
    }

    #[test]
    fn test_roll_clamp_max_default() {
        let mut ctx = RollContext::new(ScriptRoller::new([7, 8, 3]), LIMITS);
        let dice = RolledDice::roll(&mut ctx, term("3d8ma")).unwrap();
        assert_eq!(dice.kept, vec![7, 8, 3]);

        let mut ctx = RollContext::new(ScriptRoller::new([7, 8, 3]), LIMITS);
        let dice = RolledDice::roll(&mut ctx, term("3d8ma5")).unwrap();
        assert_eq!(dice.kept, vec![5, 5, 3]);
    }

    #[test]
    fn test_roll_budget() {
        let mut ctx = RollContext::new(StepRoller::new(1, 0), LIMITS);
        assert_eq!(
            RolledDice::roll(&mut ctx, term("20d6")),
            Err(RangeError::TooManyRolls { limit: 10 })
        );

        // A d1 rerolls into a 1 on every pass; the term is refused up front.
        assert_eq!(
            RolledDice::roll(&mut ctx, term("2d1rr100")),
            Err(RangeError::TooManyRerolls { limit: 100 })
        );
        let dice = RolledDice::roll(&mut ctx, term("2d1rr50")).unwrap();
        assert_eq!(dice.kept, vec![1, 1]);
    }
}
