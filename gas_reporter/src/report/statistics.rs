//!
//! The gas sample statistics.
//!

use itertools::Itertools;
use itertools::MinMaxResult;

///
/// The gas sample statistics.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Statistics {
    /// The minimal gas amount.
    pub min: u64,
    /// The maximal gas amount.
    pub max: u64,
    /// The mean gas amount, rounded to the nearest integer.
    pub mean: u64,
    /// The median gas amount. The lower middle sample for even counts.
    pub median: u64,
    /// The number of samples.
    pub count: usize,
}

impl Statistics {
    ///
    /// Computes the statistics of non-empty samples.
    ///
    pub fn from_samples(samples: &[u64]) -> Option<Self> {
        let (min, max) = match samples.iter().copied().minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(value) => (value, value),
            MinMaxResult::MinMax(min, max) => (min, max),
        };

        let count = samples.len();
        let sum: u128 = samples.iter().map(|sample| *sample as u128).sum();
        let mean = ((sum + (count as u128) / 2) / (count as u128)) as u64;

        let sorted = samples.iter().copied().sorted_unstable().collect::<Vec<u64>>();
        let median = sorted[(count - 1) / 2];

        Some(Self {
            min,
            max,
            mean,
            median,
            count,
        })
    }
}
