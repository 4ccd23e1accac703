//! Reads wind samples out of a polars `DataFrame`.

use crate::error::{InputError, WindStatsError};
use crate::types::column_names::ColumnNames;
use crate::types::sample::WindSample;
use log::{debug, warn};
use polars::prelude::*;

/// Retrieves a column by name and casts it to `f64`.
fn get_f64_column(df: &DataFrame, name: &str) -> Result<Column, WindStatsError> {
    let column = df
        .column(name)
        .map_err(|e| WindStatsError::ColumnNotFound(name.to_string(), e))?;
    Ok(column.cast(&DataType::Float64)?)
}

/// Builds samples from the speed and direction columns named in `names`.
///
/// Rows with a null in either column fail with [`InputError::MissingValue`], or are
/// skipped when `drop_nulls` is set. Values are not range checked here; that is
/// left to the engine.
pub(crate) fn samples_from_frame(
    df: &DataFrame,
    names: &ColumnNames,
    drop_nulls: bool,
) -> Result<Vec<WindSample>, WindStatsError> {
    let speed_column = get_f64_column(df, &names.speed)?;
    let direction_column = get_f64_column(df, &names.direction)?;
    let speeds = speed_column.f64()?;
    let directions = direction_column.f64()?;

    let mut samples = Vec::with_capacity(df.height());
    let mut skipped = 0usize;
    for (index, (speed, direction)) in speeds.into_iter().zip(directions).enumerate() {
        match (speed, direction) {
            (Some(speed), Some(direction)) => samples.push(WindSample { speed, direction }),
            _ if drop_nulls => skipped += 1,
            (None, _) => {
                return Err(InputError::MissingValue {
                    column: names.speed.clone(),
                    index,
                }
                .into())
            }
            (_, None) => {
                return Err(InputError::MissingValue {
                    column: names.direction.clone(),
                    index,
                }
                .into())
            }
        }
    }

    if skipped > 0 {
        warn!(
            "Dropped {} of {} rows with missing '{}' or '{}' values",
            skipped,
            df.height(),
            names.speed,
            names.direction
        );
    }
    debug!(
        "Read {} wind samples from columns '{}' and '{}'",
        samples.len(),
        names.speed,
        names.direction
    );
    Ok(samples)
}

/// Selects only the two wind columns from `frame` and collects them.
///
/// Both columns are looked up in the frame's schema first, so an absent column is
/// reported as [`WindStatsError::ColumnNotFound`] like it is for eager frames.
pub(crate) fn collect_wind_columns(
    mut frame: LazyFrame,
    names: &ColumnNames,
) -> Result<DataFrame, WindStatsError> {
    let schema = frame.collect_schema()?;
    for name in [&names.speed, &names.direction] {
        schema
            .try_get(name)
            .map_err(|e| WindStatsError::ColumnNotFound(name.to_string(), e))?;
    }
    Ok(frame
        .select([col(names.speed.as_str()), col(names.direction.as_str())])
        .collect()?)
}
