use polars::error::PolarsError;
use thiserror::Error;

/// Problems with the observations handed to the engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("No wind samples were provided")]
    EmptyInput,

    #[error("Wind direction {value} at sample {index} is outside [0, 360)")]
    DirectionOutOfRange { index: usize, value: f64 },

    #[error("Wind speed {value} at sample {index} is negative or not finite")]
    InvalidSpeed { index: usize, value: f64 },

    #[error("Missing value in column '{column}' at row {index}")]
    MissingValue { column: String, index: usize },
}

/// Problems with the parameters a computation was asked to run with.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Speed bin count must be between 1 and {max}, got {0}", max = crate::options::MAX_BIN_COUNT)]
    InvalidBinCount(usize),
}

#[derive(Debug, Error)]
pub enum WindStatsError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
