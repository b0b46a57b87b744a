use crate::common::UInt;
use crate::parse::ast::Modifier;

impl Modifier {
    /// Applies the modifier to one pool of faces in place and returns how
    /// many of the leading faces are kept.
    ///
    /// `redraw` produces a fresh face for a die being rerolled.
    pub(crate) fn apply(&self, faces: &mut [UInt], mut redraw: impl FnMut() -> UInt) -> usize {
        match *self {
            Self::KeepHighest(n) => {
                faces.sort_unstable_by(|a, b| b.cmp(a));
                n.min(faces.len())
            }
            Self::Reroll(passes) => {
                for pass in 0..passes {
                    let mut rerolled = 0usize;
                    for face in faces.iter_mut().filter(|face| **face == 1) {
                        *face = redraw();
                        rerolled += 1;
                    }
                    tracing::trace!(pass, rerolled, "reroll pass");
                    // Later passes would find no ones either.
                    if rerolled == 0 {
                        break;
                    }
                }
                faces.len()
            }
            Self::ClampMin(min) => {
                for face in faces.iter_mut() {
                    *face = (*face).max(min);
                }
                faces.len()
            }
            Self::ClampMax(max) => {
                for face in faces.iter_mut() {
                    *face = (*face).min(max);
                }
                faces.len()
            }
        }
    }
}
