//! Defines the `CompassSector` enum, the 16-point compass used to label wind directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Width in degrees of a single compass sector.
pub const SECTOR_WIDTH: f64 = 22.5;

/// The 16 compass labels in bearing order, starting at North and turning clockwise.
///
/// Renderers can use this as the category order of the angular axis, since a
/// [`crate::WindStatsTable`] only contains the labels that received samples.
pub const COMPASS_ORDER: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// One of the 16 named 22.5° sectors of the compass.
///
/// Each sector is centred on its bearing, so [`CompassSector::North`] covers
/// `[348.75, 360) ∪ [0, 11.25)` and [`CompassSector::East`] covers `[78.75, 101.25)`.
/// Sectors serialize and display as their short label (`"N"`, `"NNE"`, ...).
///
/// # Examples
///
/// ```rust
/// use windrose::CompassSector;
///
/// let sector: CompassSector = "WSW".parse().unwrap();
/// assert_eq!(sector, CompassSector::WestSouthWest);
/// assert_eq!(sector.bearing(), 247.5);
/// assert_eq!(sector.to_string(), "WSW");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompassSector {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NNE")]
    NorthNorthEast,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "ENE")]
    EastNorthEast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "ESE")]
    EastSouthEast,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "SSE")]
    SouthSouthEast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SSW")]
    SouthSouthWest,
    #[serde(rename = "SW")]
    SouthWest,
    #[serde(rename = "WSW")]
    WestSouthWest,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "WNW")]
    WestNorthWest,
    #[serde(rename = "NW")]
    NorthWest,
    #[serde(rename = "NNW")]
    NorthNorthWest,
}

impl CompassSector {
    /// All sectors in bearing order.
    pub const ALL: [CompassSector; 16] = [
        CompassSector::North,
        CompassSector::NorthNorthEast,
        CompassSector::NorthEast,
        CompassSector::EastNorthEast,
        CompassSector::East,
        CompassSector::EastSouthEast,
        CompassSector::SouthEast,
        CompassSector::SouthSouthEast,
        CompassSector::South,
        CompassSector::SouthSouthWest,
        CompassSector::SouthWest,
        CompassSector::WestSouthWest,
        CompassSector::West,
        CompassSector::WestNorthWest,
        CompassSector::NorthWest,
        CompassSector::NorthNorthWest,
    ];

    /// Returns the sector at position `index` in bearing order, or `None` for `index >= 16`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this sector in bearing order (North is 0, NNW is 15).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The short compass label, e.g. `"NNE"`.
    pub fn label(self) -> &'static str {
        COMPASS_ORDER[self.index()]
    }

    /// The bearing in degrees the sector is centred on.
    pub fn bearing(self) -> f64 {
        self.index() as f64 * SECTOR_WIDTH
    }
}

impl fmt::Display for CompassSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{0}' is not a 16-point compass label")]
pub struct ParseSectorError(pub String);

impl FromStr for CompassSector {
    type Err = ParseSectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_uppercase();
        COMPASS_ORDER
            .iter()
            .position(|candidate| *candidate == label)
            .and_then(Self::from_index)
            .ok_or_else(|| ParseSectorError(s.to_string()))
    }
}
