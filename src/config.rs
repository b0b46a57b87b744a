//! Per-request evaluation settings.
//!
//! Nothing here is global: callers build a [RollConfig] (usually once, via
//! [RollConfig::from_env]) and pass it to every entry point.

use crate::roll::{RangeError, RollLimits};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

pub const DEFAULT_TRIALS: usize = 1000;
pub const DEFAULT_MAX_ROLLS: usize = 10_000;
pub const DEFAULT_MAX_REROLLS: usize = 1_000_000;

/// Maps the digit of an `-a<k>` flag to a trial count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccuracyLadder(BTreeMap<u32, usize>);

impl AccuracyLadder {
    pub fn new(levels: impl IntoIterator<Item = (u32, usize)>) -> Self {
        Self(levels.into_iter().collect())
    }

    pub fn trials(&self, level: u32) -> Result<usize, RangeError> {
        self.0
            .get(&level)
            .copied()
            .ok_or_else(|| RangeError::UnknownAccuracy(level.to_string()))
    }
}

impl Default for AccuracyLadder {
    fn default() -> Self {
        Self::new([(1, 100), (2, 1000), (3, 10_000), (4, 50_000), (5, 100_000)])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollConfig {
    /// Trials used when neither a flag nor an explicit accuracy is given.
    pub default_trials: usize,
    pub accuracy: AccuracyLadder,
    /// Upper bound on the dice count of one term.
    pub max_rolls: usize,
    /// Upper bound on one term's dice count times its reroll passes.
    pub max_rerolls: usize,
    /// Footer text for presentation layers.
    pub credit: Option<String>,
    /// Fixes the simulation seed; a fresh one is drawn per request otherwise.
    pub seed: Option<u64>,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            default_trials: DEFAULT_TRIALS,
            accuracy: AccuracyLadder::default(),
            max_rolls: DEFAULT_MAX_ROLLS,
            max_rerolls: DEFAULT_MAX_REROLLS,
            credit: None,
            seed: None,
        }
    }
}

impl RollConfig {
    /// Reads `DICE_DEFAULT_TRIALS`, `DICE_MAX_ROLLS`, `DICE_MAX_REROLLS`,
    /// `DICE_CREDIT` and `DICE_SEED` over the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(x) = parse_var(&var, "DICE_DEFAULT_TRIALS") {
            config.default_trials = x;
        }
        if let Some(x) = parse_var(&var, "DICE_MAX_ROLLS") {
            config.max_rolls = x;
        }
        if let Some(x) = parse_var(&var, "DICE_MAX_REROLLS") {
            config.max_rerolls = x;
        }
        config.seed = parse_var(&var, "DICE_SEED");
        config.credit = var("DICE_CREDIT").filter(|s| !s.is_empty());
        config
    }

    pub fn limits(&self) -> RollLimits {
        RollLimits {
            max_rolls: self.max_rolls,
            max_rerolls: self.max_rerolls,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Picks the trial count: a flag in the body beats the explicit
    /// `accuracy`, which beats `default_trials`.
    pub fn trials(&self, flag: Option<u32>, accuracy: Option<u32>) -> Result<usize, RangeError> {
        let trials = match flag.or(accuracy) {
            Some(level) => self.accuracy.trials(level)?,
            None => self.default_trials,
        };
        if trials == 0 {
            Err(RangeError::ZeroTrials)
        } else {
            Ok(trials)
        }
    }
}

fn parse_var<T: FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = var(key)?;
    match raw.trim().parse() {
        Ok(x) => Some(x),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring malformed configuration value");
            None
        }
    }
}
