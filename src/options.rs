//! Parameters controlling a wind statistics computation.

use crate::error::ConfigurationError;
use bon::Builder;
use serde::{Deserialize, Serialize};

/// Default number of speed bins. Most sequential colour scales have 9 or 10 steps.
pub const DEFAULT_BIN_COUNT: usize = 9;

/// Largest accepted number of speed bins.
pub const MAX_BIN_COUNT: usize = 10_000;

/// Options for [`crate::WindStatsEngine`].
///
/// # Examples
///
/// ```rust
/// use windrose::StatsOptions;
///
/// let defaults = StatsOptions::default();
/// assert_eq!(defaults.bin_count, 9);
/// assert!(defaults.normalize);
///
/// let counts = StatsOptions::builder().bin_count(6).normalize(false).build();
/// assert!(!counts.normalize);
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct StatsOptions {
    /// Number of equal-width speed bins, between 1 and [`MAX_BIN_COUNT`].
    #[builder(default = DEFAULT_BIN_COUNT)]
    pub bin_count: usize,

    /// Express each cell as a percentage of all samples instead of a raw count.
    #[builder(default = true)]
    pub normalize: bool,

    /// Emit a zero row for every empty (azimuth bin, speed bin) cell instead of
    /// leaving it out.
    #[builder(default)]
    pub fill_empty: bool,

    /// Round normalized frequencies to this many decimals. Counts are never rounded.
    pub precision: Option<u32>,
}

impl StatsOptions {
    pub(crate) fn validate(&self) -> Result<(), ConfigurationError> {
        if !(1..=MAX_BIN_COUNT).contains(&self.bin_count) {
            return Err(ConfigurationError::InvalidBinCount(self.bin_count));
        }
        Ok(())
    }
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
