use crate::common::{NonZeroUInt, UInt};
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// A source of die faces.
pub trait Roller {
    /// Draws one face uniformly from `1..=sides`.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;

    /// Fills `faces` with independent draws.
    fn roll_into(&mut self, faces: &mut [UInt], sides: NonZeroUInt) {
        for face in faces {
            *face = self.roll(sides);
        }
    }
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }

    fn roll_into(&mut self, faces: &mut [UInt], sides: NonZeroUInt) {
        let distr = Uniform::new_inclusive(1, sides.get());
        for (face, x) in faces.iter_mut().zip(distr.sample_iter(&mut *self)) {
            *face = x;
        }
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;

#[cfg(test)]
mod step {
    use super::*;

    /// Yields `initial, initial + step, ...`, wrapped into `1..=sides`.
    pub(crate) struct StepRoller {
        current: UInt,
        step: UInt,
    }

    impl StepRoller {
        pub fn new(initial: UInt, step: UInt) -> Self {
            Self {
                current: initial,
                step,
            }
        }
    }

    impl Roller for StepRoller {
        fn roll(&mut self, sides: NonZeroUInt) -> UInt {
            let ret = (self.current - 1) % sides.get() + 1;
            self.current += self.step;
            ret
        }
    }

    /// Yields a fixed sequence of faces, then panics.
    pub(crate) struct ScriptRoller(pub std::vec::IntoIter<UInt>);

    impl ScriptRoller {
        pub fn new(faces: impl Into<Vec<UInt>>) -> Self {
            Self(faces.into().into_iter())
        }
    }

    impl Roller for ScriptRoller {
        fn roll(&mut self, _: NonZeroUInt) -> UInt {
            self.0.next().expect("script exhausted")
        }
    }
}

#[cfg(test)]
pub(crate) use step::ScriptRoller;
