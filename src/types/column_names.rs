//! Column-name configuration used when reading wind samples from a DataFrame.

use bon::Builder;
use serde::{Deserialize, Serialize};

const DEFAULT_SPEED_COLUMN: &str = "ws";
const DEFAULT_DIRECTION_COLUMN: &str = "wd";

/// Names of the two DataFrame columns holding wind speed and wind direction.
///
/// Only these two keys are recognised. The defaults are `ws` for speed and `wd` for
/// direction; use the builder to point at differently named columns.
///
/// # Examples
///
/// ```rust
/// use windrose::ColumnNames;
///
/// let names = ColumnNames::builder()
///     .speed("wind_speed")
///     .direction("wind_direction")
///     .build();
/// assert_eq!(names.speed, "wind_speed");
///
/// // Only override one of them
/// let names = ColumnNames::builder().speed("gust").build();
/// assert_eq!(names.direction, "wd");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct ColumnNames {
    #[builder(into, default = DEFAULT_SPEED_COLUMN.to_string())]
    pub speed: String,
    #[builder(into, default = DEFAULT_DIRECTION_COLUMN.to_string())]
    pub direction: String,
}

impl ColumnNames {
    /// Column names used by Meteostat hourly data (`wspd`, `wdir`).
    pub fn meteostat() -> Self {
        Self {
            speed: "wspd".to_string(),
            direction: "wdir".to_string(),
        }
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self::builder().build()
    }
}
