//! Dice notation (`3d6 + 2`, `4d8kh2`, `2d20rr1`) rolled once, simulated over
//! many trials, or summarized in closed form.

mod common;
mod error;

pub mod config;
pub mod eval;
pub mod expected;
pub mod parse;
pub mod roll;
pub mod stats;

pub use common::{BinaryOperator, Float, Int, Num, NonZeroUInt, UInt};
pub use config::{AccuracyLadder, RollConfig};
pub use error::{Result, RollError};
pub use eval::ScalarRoll;
pub use expected::{expected_highest, expected_lowest, expected_value, Pick};
pub use parse::parse;
pub use stats::Distribution;

use roll::{RollContext, Roller};

/// Rolls `body` once with the thread-local generator.
pub fn roll(body: &str, config: &RollConfig) -> Result<ScalarRoll> {
    roll_with(body, config, rand::thread_rng())
}

/// Rolls `body` once, drawing faces from `roller`.
pub fn roll_with<R: Roller>(body: &str, config: &RollConfig, roller: R) -> Result<ScalarRoll> {
    let expr = parse(body)?;
    let mut ctx = RollContext::new(roller, config.limits());
    eval::evaluate(&expr, &mut ctx)
}

/// Simulates `body` and summarizes the outcomes.
///
/// A leading `-a<k>` flag in `body` takes precedence over `accuracy`; with
/// neither, `config.default_trials` trials are run.
pub fn roll_stats(body: &str, accuracy: Option<u32>, config: &RollConfig) -> Result<Distribution> {
    let expr = parse(body)?;
    let trials = config.trials(expr.accuracy(), accuracy)?;
    stats::simulate(&expr, trials, config)
}
