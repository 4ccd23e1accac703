//! Wind rose statistics: bins wind speed and direction observations into 16 compass
//! sectors and equal-width speed bins, and aggregates them into a long-form table
//! ready for a polar stacked bar chart.
//!
//! ```rust
//! use windrose::{StatsOptions, WindSample, WindStatsEngine};
//!
//! # fn main() -> Result<(), windrose::WindStatsError> {
//! let samples: Vec<WindSample> = vec![(3.2, 225.0).into(), (5.1, 240.0).into(), (1.4, 10.0).into()];
//! let table = WindStatsEngine::new(StatsOptions::builder().bin_count(3).build()).compute(&samples)?;
//! for row in &table {
//!     println!("{:>3} {:>10} {:6.2}%", row.direction, row.speed, row.frequency);
//! }
//! # Ok(())
//! # }
//! ```

mod engine;
mod error;
mod frame;
mod options;
mod types;

pub use engine::WindStatsEngine;
pub use error::{ConfigurationError, InputError, WindStatsError};
pub use options::{StatsOptions, DEFAULT_BIN_COUNT, MAX_BIN_COUNT};

pub use types::azimuth::{AzimuthBin, AZIMUTH_BIN_COUNT, AZIMUTH_BIN_WIDTH};
pub use types::column_names::ColumnNames;
pub use types::compass::{CompassSector, ParseSectorError, COMPASS_ORDER, SECTOR_WIDTH};
pub use types::sample::WindSample;
pub use types::speed_bins::{SpeedBin, SpeedBins};
pub use types::stats_table::{SectorRow, WindStatsRow, WindStatsTable};
