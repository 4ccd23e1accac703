//! Bins wind observations by direction and speed and aggregates them into a
//! [`WindStatsTable`].
//!
//! Samples can be passed directly as a slice of [`WindSample`], or read from a
//! polars `DataFrame`/`LazyFrame` via [`WindStatsEngine::from_frame`] and
//! [`WindStatsEngine::from_lazy_frame`].

use crate::error::{InputError, WindStatsError};
use crate::frame::{collect_wind_columns, samples_from_frame};
use crate::options::StatsOptions;
use crate::types::azimuth::{AzimuthBin, AZIMUTH_BIN_COUNT};
use crate::types::column_names::ColumnNames;
use crate::types::sample::WindSample;
use crate::types::speed_bins::SpeedBins;
use crate::types::stats_table::{WindStatsRow, WindStatsTable};
use bon::bon;
use log::{debug, trace};
use polars::prelude::{DataFrame, LazyFrame};

/// Computes wind rose statistics.
///
/// The engine only holds its [`StatsOptions`]. Every call recomputes the speed bins
/// and the table from scratch, so one engine can be shared and reused freely.
///
/// # Examples
///
/// ```rust
/// use windrose::{StatsOptions, WindSample, WindStatsEngine};
///
/// # fn main() -> Result<(), windrose::WindStatsError> {
/// let samples = vec![
///     WindSample::new(2.0, 10.0),
///     WindSample::new(4.0, 95.0),
///     WindSample::new(6.0, 350.0),
///     WindSample::new(8.0, 180.0),
/// ];
///
/// let engine = WindStatsEngine::new(StatsOptions::builder().bin_count(2).build());
/// let table = engine.compute(&samples)?;
///
/// assert_eq!(table.speed_labels(), vec!["2.00-5.00", "5.00-8.00"]);
/// assert!((table.total() - 100.0).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindStatsEngine {
    options: StatsOptions,
}

#[bon]
impl WindStatsEngine {
    pub fn new(options: StatsOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &StatsOptions {
        &self.options
    }

    /// Bins `samples` and aggregates them into a long-form table.
    ///
    /// # Errors
    ///
    /// * [`WindStatsError::Configuration`] if the bin count is zero or above
    ///   [`crate::MAX_BIN_COUNT`].
    /// * [`WindStatsError::Input`] if `samples` is empty, a direction lies outside
    ///   `[0, 360)` or is NaN, or a speed is negative or not finite.
    pub fn compute(&self, samples: &[WindSample]) -> Result<WindStatsTable, WindStatsError> {
        self.options.validate()?;
        let (low, high) = validate_samples(samples)?;

        let bin_count = self.options.bin_count;
        let speed_bins = SpeedBins::new(low, high, bin_count);
        debug!(
            "Binning {} samples into {} azimuth x {} speed bins over [{}, {}]",
            samples.len(),
            AZIMUTH_BIN_COUNT,
            bin_count,
            low,
            high
        );

        // Row-major by azimuth bin, so iterating the grid yields the output order.
        let mut counts = vec![0u64; AZIMUTH_BIN_COUNT * bin_count];
        for (index, sample) in samples.iter().enumerate() {
            let azimuth = AzimuthBin::from_degrees(sample.direction).ok_or(
                InputError::DirectionOutOfRange {
                    index,
                    value: sample.direction,
                },
            )?;
            let speed = speed_bins.bin_of(sample.speed);
            counts[azimuth.index() * bin_count + speed] += 1;
        }

        let labels = speed_bins.labels();
        let total = samples.len() as f64;
        let rows: Vec<WindStatsRow> = AzimuthBin::all()
            .flat_map(|azimuth| (0..bin_count).map(move |speed| (azimuth, speed)))
            .filter_map(|(azimuth, speed)| {
                let count = counts[azimuth.index() * bin_count + speed];
                if count == 0 && !self.options.fill_empty {
                    return None;
                }
                Some(WindStatsRow {
                    direction: azimuth.sector(),
                    azimuth,
                    speed_bin: speed,
                    speed: labels[speed].clone(),
                    count,
                    frequency: self.frequency(count, total),
                })
            })
            .collect();

        trace!("Produced {} wind statistics rows", rows.len());
        Ok(WindStatsTable::new(
            rows,
            speed_bins,
            samples.len(),
            self.options.normalize,
        ))
    }

    fn frequency(&self, count: u64, total: f64) -> f64 {
        if !self.options.normalize {
            return count as f64;
        }
        let percent = count as f64 / total * 100.0;
        match self.options.precision {
            Some(decimals) => round_to(percent, decimals),
            None => percent,
        }
    }

    /// Computes statistics from the wind columns of a `DataFrame`.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.column_names(ColumnNames)`: names of the speed and direction columns.
    ///   Defaults to `ws` and `wd`.
    /// * `.drop_nulls(bool)`: skip rows with a missing speed or direction instead of
    ///   failing. Defaults to `false`.
    ///
    /// # Errors
    ///
    /// Everything [`WindStatsEngine::compute`] returns, plus
    /// [`WindStatsError::ColumnNotFound`] for an absent column and
    /// [`InputError::MissingValue`] for nulls when `drop_nulls` is off.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polars::prelude::*;
    /// use windrose::{ColumnNames, WindStatsEngine};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let df = df!(
    ///     "wind_speed" => [1.0, 2.0, 3.0],
    ///     "wind_direction" => [0.0, 120.0, 240.0]
    /// )?;
    ///
    /// let table = WindStatsEngine::default()
    ///     .from_frame(&df)
    ///     .column_names(ColumnNames::builder().speed("wind_speed").direction("wind_direction").build())
    ///     .call()?;
    ///
    /// println!("{}", table.to_frame()?);
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = from_frame)]
    #[doc(hidden)]
    pub fn build_from_frame(
        &self,
        #[builder(start_fn)] frame: &DataFrame,
        column_names: Option<ColumnNames>,
        #[builder(default)] drop_nulls: bool,
    ) -> Result<WindStatsTable, WindStatsError> {
        let names = column_names.unwrap_or_default();
        let samples = samples_from_frame(frame, &names, drop_nulls)?;
        self.compute(&samples)
    }

    /// Computes statistics from a `LazyFrame`, collecting only the two wind columns.
    ///
    /// Takes the same optional builder methods as [`WindStatsEngine::from_frame`].
    /// Filter or resample the frame before handing it over; the engine uses every
    /// remaining row.
    #[builder(start_fn = from_lazy_frame)]
    #[doc(hidden)]
    pub fn build_from_lazy_frame(
        &self,
        #[builder(start_fn)] frame: LazyFrame,
        column_names: Option<ColumnNames>,
        #[builder(default)] drop_nulls: bool,
    ) -> Result<WindStatsTable, WindStatsError> {
        let names = column_names.unwrap_or_default();
        let collected = collect_wind_columns(frame, &names)?;
        let samples = samples_from_frame(&collected, &names, drop_nulls)?;
        self.compute(&samples)
    }
}

/// Checks every sample and returns the minimum and maximum speed.
fn validate_samples(samples: &[WindSample]) -> Result<(f64, f64), InputError> {
    if samples.is_empty() {
        return Err(InputError::EmptyInput);
    }
    let mut low = f64::INFINITY;
    let mut high = f64::NEG_INFINITY;
    for (index, sample) in samples.iter().enumerate() {
        if !(0.0..360.0).contains(&sample.direction) {
            return Err(InputError::DirectionOutOfRange {
                index,
                value: sample.direction,
            });
        }
        if !sample.speed.is_finite() || sample.speed < 0.0 {
            return Err(InputError::InvalidSpeed {
                index,
                value: sample.speed,
            });
        }
        low = low.min(sample.speed);
        high = high.max(sample.speed);
    }
    Ok((low, high))
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
