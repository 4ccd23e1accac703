//! The long-form table of wind statistics produced by [`crate::WindStatsEngine`].

use crate::types::azimuth::AzimuthBin;
use crate::types::compass::CompassSector;
use crate::types::speed_bins::SpeedBins;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One (azimuth bin, speed bin) cell of a [`WindStatsTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindStatsRow {
    /// Compass label of the azimuth bin.
    pub direction: CompassSector,
    /// The 11.25° bin the samples fell into. North appears under two bins.
    pub azimuth: AzimuthBin,
    /// Position of the speed bin, 0 being the slowest.
    pub speed_bin: usize,
    /// Label of the speed bin, e.g. `"2.50-5.00"`.
    pub speed: String,
    /// Number of samples in the cell.
    pub count: u64,
    /// Percentage of all samples when normalized, otherwise the count.
    pub frequency: f64,
}

/// A row of [`WindStatsTable::by_sector`], one per (compass label, speed bin).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorRow {
    pub direction: CompassSector,
    pub speed_bin: usize,
    pub speed: String,
    pub count: u64,
    pub frequency: f64,
}

/// Wind statistics in long ("tidy") form, ready for a stacked polar bar chart.
///
/// Rows are ordered by azimuth bin, then by speed bin. North's two azimuth bins
/// (either side of 0°) produce separate rows that share the `N` label; sum them
/// with [`WindStatsTable::by_sector`] when a single value per label is needed.
///
/// Unless the table was computed with `fill_empty`, cells without samples are
/// absent. Consumers grouping or summing rows should treat missing cells as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindStatsTable {
    rows: Vec<WindStatsRow>,
    speed_bins: SpeedBins,
    sample_count: usize,
    normalized: bool,
}

impl WindStatsTable {
    pub(crate) fn new(
        rows: Vec<WindStatsRow>,
        speed_bins: SpeedBins,
        sample_count: usize,
        normalized: bool,
    ) -> Self {
        Self {
            rows,
            speed_bins,
            sample_count,
            normalized,
        }
    }

    pub fn rows(&self) -> &[WindStatsRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WindStatsRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of samples the table was computed from.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Whether frequencies are percentages (`true`) or raw counts (`false`).
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// The speed bins used for this table, including bins that received no samples.
    pub fn speed_bins(&self) -> &SpeedBins {
        &self.speed_bins
    }

    /// Labels of all speed bins in ascending order.
    pub fn speed_labels(&self) -> Vec<String> {
        self.speed_bins.labels()
    }

    /// Sum of the frequency column: 100 when normalized (up to rounding), the sample
    /// count otherwise.
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|row| row.frequency).sum()
    }

    /// Sums rows sharing a compass label and speed bin.
    ///
    /// This merges North's two azimuth bins. The result is ordered by compass
    /// bearing, then by speed bin.
    pub fn by_sector(&self) -> Vec<SectorRow> {
        let mut merged: BTreeMap<(CompassSector, usize), SectorRow> = BTreeMap::new();
        for row in &self.rows {
            merged
                .entry((row.direction, row.speed_bin))
                .and_modify(|acc| {
                    acc.count += row.count;
                    acc.frequency += row.frequency;
                })
                .or_insert_with(|| SectorRow {
                    direction: row.direction,
                    speed_bin: row.speed_bin,
                    speed: row.speed.clone(),
                    count: row.count,
                    frequency: row.frequency,
                });
        }
        merged.into_values().collect()
    }

    /// Converts the table to a `DataFrame` with `direction`, `speed` and `frequency`
    /// columns.
    ///
    /// `frequency` is `f64` for normalized tables and `u64` counts otherwise.
    ///
    /// # Errors
    ///
    /// Returns a [`PolarsError`] if the frame cannot be assembled.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let directions: Vec<&str> = self.rows.iter().map(|r| r.direction.label()).collect();
        let speeds: Vec<&str> = self.rows.iter().map(|r| r.speed.as_str()).collect();

        if self.normalized {
            let frequencies: Vec<f64> = self.rows.iter().map(|r| r.frequency).collect();
            df!(
                "direction" => directions,
                "speed" => speeds,
                "frequency" => frequencies
            )
        } else {
            let counts: Vec<u64> = self.rows.iter().map(|r| r.count).collect();
            df!(
                "direction" => directions,
                "speed" => speeds,
                "frequency" => counts
            )
        }
    }
}

impl<'a> IntoIterator for &'a WindStatsTable {
    type Item = &'a WindStatsRow;
    type IntoIter = std::slice::Iter<'a, WindStatsRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
