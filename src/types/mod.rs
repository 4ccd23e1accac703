pub mod azimuth;
pub mod column_names;
pub mod compass;
pub mod sample;
pub mod speed_bins;
pub mod stats_table;
