//! The 32 equal azimuth bins that directions are sorted into before they are labelled.
//!
//! Each compass sector owns two adjacent 11.25° bins. North is the exception in that
//! its two bins sit on either side of the 0/360 seam: bin 0 covers `[0, 11.25)` and
//! bin 31 covers `[348.75, 360)`. Both carry the label `N` and are kept apart in the
//! output table.

use crate::types::compass::CompassSector;
use serde::{Deserialize, Serialize};

/// Number of azimuth bins around the circle.
pub const AZIMUTH_BIN_COUNT: usize = 32;

/// Width in degrees of a single azimuth bin.
pub const AZIMUTH_BIN_WIDTH: f64 = 360.0 / AZIMUTH_BIN_COUNT as f64;

/// One 11.25° slice of the circle, identified by its position from 0°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AzimuthBin(u8);

impl AzimuthBin {
    /// Returns the bin at `index`, or `None` if `index >= 32`.
    pub fn new(index: usize) -> Option<Self> {
        (index < AZIMUTH_BIN_COUNT).then(|| Self(index as u8))
    }

    /// Finds the bin containing `degrees`.
    ///
    /// Bins are half-open, so a direction lying exactly on a bin edge belongs to the
    /// bin starting there. Returns `None` for values outside `[0, 360)` and for NaN.
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        if !(0.0..360.0).contains(&degrees) {
            return None;
        }
        // Compare against the exact edges instead of dividing by the bin width.
        let index = (1..AZIMUTH_BIN_COUNT)
            .map(|k| k as f64 * AZIMUTH_BIN_WIDTH)
            .take_while(|edge| *edge <= degrees)
            .count();
        Self::new(index)
    }

    /// Position of the bin, counting clockwise from 0°.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Lower edge of the bin in degrees (inclusive).
    pub fn start(self) -> f64 {
        self.index() as f64 * AZIMUTH_BIN_WIDTH
    }

    /// Upper edge of the bin in degrees (exclusive).
    pub fn end(self) -> f64 {
        (self.index() + 1) as f64 * AZIMUTH_BIN_WIDTH
    }

    /// The compass sector whose label this bin carries.
    pub fn sector(self) -> CompassSector {
        // Bins 2m-1 and 2m belong to sector m; bin 31 wraps back onto North.
        let sector = (self.index() + 1) / 2 % 16;
        CompassSector::ALL[sector]
    }

    /// Iterates over all 32 bins in order.
    pub fn all() -> impl Iterator<Item = AzimuthBin> {
        (0..AZIMUTH_BIN_COUNT as u8).map(AzimuthBin)
    }
}
