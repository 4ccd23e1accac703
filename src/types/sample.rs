use serde::{Deserialize, Serialize};

/// A single wind observation.
///
/// `speed` is in whatever unit the caller measures in (m/s, km/h, knots); bins and
/// labels are expressed in the same unit. `direction` is the bearing the wind blows
/// from, in degrees within `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    pub speed: f64,
    pub direction: f64,
}

impl WindSample {
    pub fn new(speed: f64, direction: f64) -> Self {
        Self { speed, direction }
    }
}

impl From<(f64, f64)> for WindSample {
    /// Converts a `(speed, direction)` pair.
    fn from((speed, direction): (f64, f64)) -> Self {
        Self { speed, direction }
    }
}
