use polars::prelude::*;
use std::env;
use windrose::{ColumnNames, StatsOptions, WindStatsEngine, WindStatsError, COMPASS_ORDER};

fn main() -> Result<(), WindStatsError> {
    configure_polars_display();

    // A day of hourly observations, in the shape a weather-data client returns them
    let hourly = df!(
        "hour" => (0i32..24).collect::<Vec<_>>(),
        "wspd" => [
            7.2, 9.4, 11.2, 10.8, 8.6, 6.1, 5.0, 4.3, 6.8, 12.6, 16.2, 18.7,
            21.6, 22.3, 19.8, 17.3, 14.4, 12.2, 10.1, 9.0, 8.3, 7.9, 7.6, 6.8
        ],
        "wdir" => [
            350.0, 355.0, 5.0, 10.0, 20.0, 40.0, 60.0, 90.0, 120.0, 180.0, 200.0, 220.0,
            230.0, 240.0, 245.0, 250.0, 250.0, 260.0, 270.0, 280.0, 300.0, 320.0, 340.0, 345.0
        ]
    )?;

    let engine = WindStatsEngine::new(StatsOptions::builder().bin_count(4).precision(2).build());
    let table = engine
        .from_lazy_frame(hourly.lazy())
        .column_names(ColumnNames::meteostat())
        .call()?;

    println!("Speed bins: {:?}", table.speed_labels());
    println!("Category order: {:?}", COMPASS_ORDER);
    println!("{}", table.to_frame()?);

    Ok(())
}

fn configure_polars_display() {
    env::set_var("POLARS_FMT_MAX_ROWS", "40");
}
