use windrose::{StatsOptions, WindSample, WindStatsEngine, WindStatsError};

fn main() -> Result<(), WindStatsError> {
    let samples: Vec<WindSample> = vec![
        (5.0, 0.0).into(),
        (5.0, 359.99).into(),
        (3.5, 352.0).into(),
        (8.0, 95.0).into(),
        (2.0, 181.0).into(),
    ];

    let table = WindStatsEngine::new(StatsOptions::builder().bin_count(2).normalize(false).build())
        .compute(&samples)?;

    println!("Per azimuth bin:");
    for row in &table {
        println!(
            "  {:>3} [{:6.2}, {:6.2})  {:>10}  {}",
            row.direction,
            row.azimuth.start(),
            row.azimuth.end(),
            row.speed,
            row.count
        );
    }

    println!("Per compass label:");
    for row in table.by_sector() {
        println!("  {:>3}  {:>10}  {}", row.direction, row.speed, row.count);
    }

    Ok(())
}
