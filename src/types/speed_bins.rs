//! Equal-width speed bins spanning the observed range of wind speeds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single speed interval `[low, high)`.
///
/// The last bin of a [`SpeedBins`] set is closed at the top so that the fastest
/// observation is counted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedBin {
    pub low: f64,
    pub high: f64,
}

impl SpeedBin {
    /// Human readable label, e.g. `"0.00-1.25"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SpeedBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}-{:.2}", self.low, self.high)
    }
}

/// The set of speed bins used for one computation.
///
/// Built from the minimum and maximum observed speed and divided into `count`
/// bins of equal width. The edges are kept explicitly: edge `i` is
/// `low + i * width`, except the final edge, which is exactly the maximum speed.
///
/// # Examples
///
/// ```rust
/// use windrose::SpeedBins;
///
/// let bins = SpeedBins::new(0.0, 10.0, 4);
/// assert_eq!(bins.labels(), vec!["0.00-2.50", "2.50-5.00", "5.00-7.50", "7.50-10.00"]);
/// assert_eq!(bins.bin_of(2.5), 1);
/// assert_eq!(bins.bin_of(10.0), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedBins {
    edges: Vec<f64>,
}

impl SpeedBins {
    /// Splits `[low, high]` into `count` equal-width bins.
    ///
    /// `count` must be at least 1 and `low <= high`; the engine validates both
    /// before building bins. A zero-width range yields `count` identical bins.
    pub fn new(low: f64, high: f64, count: usize) -> Self {
        let count = count.max(1);
        let width = (high - low) / count as f64;
        let mut edges: Vec<f64> = (0..count).map(|i| low + i as f64 * width).collect();
        edges.push(high);
        Self { edges }
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.edges.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lower edge of the first bin.
    pub fn low(&self) -> f64 {
        self.edges[0]
    }

    /// Upper edge of the last bin.
    pub fn high(&self) -> f64 {
        self.edges[self.len()]
    }

    /// Bin edges, `len() + 1` values in ascending order.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn iter(&self) -> impl Iterator<Item = SpeedBin> + '_ {
        self.edges
            .windows(2)
            .map(|pair| SpeedBin { low: pair[0], high: pair[1] })
    }

    /// Labels of every bin in ascending speed order.
    pub fn labels(&self) -> Vec<String> {
        self.iter().map(|bin| bin.label()).collect()
    }

    /// Index of the bin containing `speed`.
    ///
    /// A speed on an interior edge belongs to the bin above it. Speeds at or above
    /// the top edge land in the last bin, speeds below the bottom edge in the first.
    /// When the range has zero width every speed lands in the last bin.
    pub fn bin_of(&self, speed: f64) -> usize {
        let last = self.len() - 1;
        let interior = &self.edges[1..self.len()];
        interior.partition_point(|edge| *edge <= speed).min(last)
    }
}
