use crate::common::*;
use crate::parse::ast::DiceTerm;
use crate::roll::{RangeError, RollContext, RollLimits};
use rand::{rngs::SmallRng, SeedableRng};
use rayon::prelude::*;

/// Trials simulated by one task, each task with its own generator.
pub(crate) const CHUNK_TRIALS: usize = 4096;

/// Derives the seed for the `index`-th token of an expression.
pub(crate) fn term_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64 + 1).wrapping_mul(0x9e3779b97f4a7c15)
}

/// Rolls `term` once per trial and returns each trial's sum of kept faces.
///
/// Trial `i` of chunk `c` always draws from the generator seeded with
/// `seed + c`, so the result does not depend on how chunks are scheduled.
/// The term is checked against `limits` once, before any trial is rolled.
pub(crate) fn roll_term(
    term: &DiceTerm,
    trials: usize,
    seed: u64,
    limits: RollLimits,
) -> Result<Vec<Int>, RangeError> {
    limits.check(term)?;

    let chunks = (trials + CHUNK_TRIALS - 1) / CHUNK_TRIALS;
    let sums = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let len = CHUNK_TRIALS.min(trials - chunk * CHUNK_TRIALS);
            let rng = SmallRng::seed_from_u64(seed.wrapping_add(chunk as u64));
            let mut ctx = RollContext::new(rng, limits);
            let mut faces = vec![0; term.count.get()];
            (0..len)
                .map(|_| {
                    let kept = ctx.fill(term, &mut faces);
                    faces[..kept].iter().map(|&x| Int::from(x)).sum()
                })
                .collect::<Vec<Int>>()
        })
        .collect::<Vec<_>>();

    tracing::trace!(%term, trials, chunks, "rolled term");
    Ok(sums.concat())
}
