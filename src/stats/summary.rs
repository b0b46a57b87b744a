use crate::common::Float;
use serde::Serialize;

pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub mean: Float,
    /// Population variance.
    pub variance: Float,
    pub stddev: Float,
    pub min: Float,
    pub max: Float,
}

impl Summary {
    /// Summarizes `values`, which must not be empty.
    pub fn of(values: &[Float]) -> Self {
        let n = values.len() as Float;
        let mean = values.iter().sum::<Float>() / n;
        let variance = values.iter().map(|&x| (x - mean).powi(2)).sum::<Float>() / n;
        let (min, max) = values
            .iter()
            .fold((Float::INFINITY, Float::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        Self {
            mean,
            variance,
            stddev: variance.sqrt(),
            min,
            max,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: Float,
    pub upper: Float,
    pub count: usize,
    /// `count / (trials * width)`; densities integrate to 1 over the bins.
    pub density: Float,
}

/// The outcome of every simulated trial of an expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    expression: String,
    values: Vec<Float>,
    summary: Summary,
}

impl Distribution {
    pub(crate) fn new(expression: String, values: Vec<Float>) -> Self {
        let summary = Summary::of(&values);
        Self {
            expression,
            values,
            summary,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn values(&self) -> &[Float] {
        &self.values
    }

    pub fn trials(&self) -> usize {
        self.values.len()
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn mean(&self) -> Float {
        self.summary.mean
    }

    pub fn variance(&self) -> Float {
        self.summary.variance
    }

    pub fn stddev(&self) -> Float {
        self.summary.stddev
    }

    /// `"<trials> Simulations of: <expression without spaces>"`
    pub fn title(&self) -> String {
        let compact: String = self.expression.split_whitespace().collect();
        format!("{} Simulations of: {}", self.trials(), compact)
    }

    /// Splits `[min, max]` into `bins` equal-width bins. A distribution with
    /// a single distinct value gets one unit-wide bin centred on it.
    pub fn histogram(&self, bins: usize) -> Vec<HistogramBin> {
        let Summary { min, max, .. } = self.summary;
        let n = self.values.len() as Float;

        if bins == 0 {
            return Vec::new();
        }
        if min == max {
            return vec![HistogramBin {
                lower: min - 0.5,
                upper: max + 0.5,
                count: self.values.len(),
                density: 1.0,
            }];
        }

        let width = (max - min) / bins as Float;
        let mut counts = vec![0usize; bins];
        for &x in &self.values {
            let i = ((x - min) / width) as usize;
            counts[i.min(bins - 1)] += 1;
        }

        counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: min + width * i as Float,
                upper: min + width * (i + 1) as Float,
                count,
                density: count as Float / (n * width),
            })
            .collect()
    }
}
