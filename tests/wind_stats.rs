use polars::prelude::*;
use windrose::{
    ColumnNames, CompassSector, ConfigurationError, InputError, StatsOptions, WindSample,
    WindStatsEngine, WindStatsError,
};

/// Deterministic pseudo-random samples covering the whole circle.
fn synthetic_samples(n: usize) -> Vec<WindSample> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    (0..n)
        .map(|_| WindSample::new(next() * 25.0, next() * 360.0))
        .collect()
}

fn engine(bin_count: usize, normalize: bool) -> WindStatsEngine {
    WindStatsEngine::new(
        StatsOptions::builder()
            .bin_count(bin_count)
            .normalize(normalize)
            .build(),
    )
}

#[test]
fn test_frequencies_sum_to_100_or_sample_count() -> Result<(), WindStatsError> {
    let samples = synthetic_samples(1_000);
    for bin_count in [1, 2, 5, 9, 16] {
        let normalized = engine(bin_count, true).compute(&samples)?;
        assert!(
            (normalized.total() - 100.0).abs() < 1e-9,
            "normalized total was {} for {} bins",
            normalized.total(),
            bin_count
        );

        let counts = engine(bin_count, false).compute(&samples)?;
        assert_eq!(counts.total(), samples.len() as f64);
        assert_eq!(
            counts.iter().map(|row| row.count).sum::<u64>(),
            samples.len() as u64
        );
    }
    Ok(())
}

#[test]
fn test_north_covers_both_sides_of_the_seam() -> Result<(), WindStatsError> {
    let directions = [348.75, 350.0, 355.5, 359.999, 0.0, 5.0, 11.0, 11.2499];
    let samples: Vec<WindSample> = directions
        .iter()
        .map(|d| WindSample::new(3.0, *d))
        .collect();
    let table = engine(1, false).compute(&samples)?;
    assert!(table.iter().all(|row| row.direction == CompassSector::North));
    assert_eq!(table.total(), directions.len() as f64);

    let neighbours = [WindSample::new(3.0, 348.74), WindSample::new(3.0, 11.25)];
    let table = engine(1, false).compute(&neighbours)?;
    let labels: Vec<CompassSector> = table.iter().map(|row| row.direction).collect();
    assert_eq!(
        labels,
        vec![CompassSector::NorthNorthEast, CompassSector::NorthNorthWest]
    );
    Ok(())
}

#[test]
fn test_bin_count_sets_number_of_speed_bins() -> Result<(), WindStatsError> {
    let samples = synthetic_samples(500);
    for bin_count in [1, 3, 9, 12] {
        let table = engine(bin_count, true).compute(&samples)?;
        assert_eq!(table.speed_bins().len(), bin_count);
        assert_eq!(table.speed_bins().edges().len(), bin_count + 1);
        assert_eq!(table.speed_labels().len(), bin_count);
        assert!(table.iter().all(|row| row.speed_bin < bin_count));
    }
    Ok(())
}

#[test]
fn test_maximum_speed_lands_in_top_bin() -> Result<(), WindStatsError> {
    let samples = [
        WindSample::new(0.0, 45.0),
        WindSample::new(4.0, 45.0),
        WindSample::new(12.0, 135.0),
    ];
    let table = engine(3, false).compute(&samples)?;
    let top = table
        .iter()
        .find(|row| row.speed_bin == 2)
        .expect("top speed bin should not be empty");
    assert_eq!(top.count, 1);
    assert_eq!(top.direction, CompassSector::SouthEast);
    assert_eq!(top.speed, "8.00-12.00");
    assert_eq!(table.total(), 3.0);
    Ok(())
}

#[test]
fn test_recomputing_is_idempotent() -> Result<(), WindStatsError> {
    let samples = synthetic_samples(300);
    let engine = engine(7, true);
    let first = engine.compute(&samples)?;
    let second = engine.compute(&samples)?;
    assert_eq!(first, second);

    // A different parameter set is a full recompute, not an update of the first.
    let coarser = WindStatsEngine::new(StatsOptions::builder().bin_count(2).build())
        .compute(&samples)?;
    assert_eq!(coarser.speed_labels().len(), 2);
    assert_eq!(engine.compute(&samples)?, first);
    Ok(())
}

#[test]
fn test_column_mapping_matches_renamed_frame() -> Result<(), Box<dyn std::error::Error>> {
    let speeds = [1.0, 2.5, 7.0, 3.3, 9.9];
    let directions = [10.0, 100.0, 190.0, 280.0, 355.0];

    let custom = df!("wind_speed" => speeds, "wind_direction" => directions)?;
    let renamed = df!("ws" => speeds, "wd" => directions)?;

    let engine = engine(4, true);
    let names = ColumnNames::builder()
        .speed("wind_speed")
        .direction("wind_direction")
        .build();
    let mapped = engine.from_frame(&custom).column_names(names).call()?;
    let direct = engine.from_frame(&renamed).call()?;

    assert_eq!(mapped, direct);
    assert!(mapped.to_frame()?.equals(&direct.to_frame()?));
    Ok(())
}

#[test]
fn test_lazy_frame_with_meteostat_columns() -> Result<(), Box<dyn std::error::Error>> {
    let hourly = df!(
        "temp" => [11.0, 12.5, 13.0, 12.0],
        "wspd" => [Some(10.8), Some(14.4), None, Some(7.2)],
        "wdir" => [Some(230.0), Some(250.0), Some(240.0), Some(20.0)]
    )?;

    let table = engine(2, false)
        .from_lazy_frame(hourly.clone().lazy())
        .column_names(ColumnNames::meteostat())
        .drop_nulls(true)
        .call()?;
    assert_eq!(table.sample_count(), 3);

    let err = engine(2, false)
        .from_lazy_frame(hourly.lazy())
        .column_names(ColumnNames::meteostat())
        .call()
        .unwrap_err();
    assert!(matches!(
        err,
        WindStatsError::Input(InputError::MissingValue { index: 2, .. })
    ));
    Ok(())
}

#[test]
fn test_lazy_frame_missing_direction_column() -> Result<(), Box<dyn std::error::Error>> {
    let speeds_only = df!("ws" => [1.0, 2.0, 3.0])?;

    let eager = engine(2, true).from_frame(&speeds_only).call().unwrap_err();
    assert!(matches!(eager, WindStatsError::ColumnNotFound(ref name, _) if name == "wd"));

    let lazy = engine(2, true)
        .from_lazy_frame(speeds_only.lazy())
        .call()
        .unwrap_err();
    assert!(
        matches!(lazy, WindStatsError::ColumnNotFound(ref name, _) if name == "wd"),
        "expected a missing 'wd' column, got {:?}",
        lazy
    );
    Ok(())
}

#[test]
fn test_oversized_bin_count_is_a_configuration_error() {
    let err = engine(usize::MAX / 8, true)
        .compute(&[WindSample::new(3.0, 10.0), WindSample::new(6.0, 200.0)])
        .unwrap_err();
    assert!(matches!(
        err,
        WindStatsError::Configuration(ConfigurationError::InvalidBinCount(_))
    ));
}

#[test]
fn test_seam_boundary_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let samples = [WindSample::new(5.0, 0.0), WindSample::new(5.0, 359.99)];
    let table = engine(1, false).compute(&samples)?;

    assert_eq!(table.speed_labels(), vec!["5.00-5.00"]);
    assert_eq!(table.len(), 2);
    assert!(table.iter().all(|row| row.direction == CompassSector::North));

    let merged = table.by_sector();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].direction, CompassSector::North);
    assert_eq!(merged[0].count, 2);
    assert_eq!(merged[0].frequency, 2.0);

    let frame = table.to_frame()?;
    assert_eq!(frame.height(), 2);
    let directions = frame.column("direction")?.str()?;
    assert_eq!(directions.get(0), Some("N"));
    assert_eq!(directions.get(1), Some("N"));
    let counts = frame.column("frequency")?.u64()?;
    assert_eq!(counts.get(0), Some(1));
    Ok(())
}

#[test]
fn test_error_scenarios() {
    let engine = engine(9, true);

    for direction in [-10.0, 365.0] {
        let err = engine
            .compute(&[WindSample::new(3.0, direction)])
            .unwrap_err();
        assert!(
            matches!(err, WindStatsError::Input(InputError::DirectionOutOfRange { .. })),
            "direction {} should be rejected, got {:?}",
            direction,
            err
        );
    }

    let err = engine
        .compute(&[WindSample::new(3.0, 10.0), WindSample::new(-0.1, 20.0)])
        .unwrap_err();
    assert!(matches!(
        err,
        WindStatsError::Input(InputError::InvalidSpeed { index: 1, .. })
    ));

    let err = WindStatsEngine::new(StatsOptions::builder().bin_count(0).build())
        .compute(&[WindSample::new(3.0, 10.0)])
        .unwrap_err();
    assert!(matches!(
        err,
        WindStatsError::Configuration(ConfigurationError::InvalidBinCount(0))
    ));
}

#[test]
fn test_sparse_output_omits_empty_cells() -> Result<(), WindStatsError> {
    let samples = [WindSample::new(1.0, 90.0), WindSample::new(10.0, 90.0)];
    let table = engine(9, true).compute(&samples)?;
    assert_eq!(table.len(), 2);
    assert_eq!(table.speed_labels().len(), 9);

    let dense = WindStatsEngine::new(StatsOptions::builder().fill_empty(true).build())
        .compute(&samples)?;
    assert_eq!(dense.len(), 32 * 9);
    assert_eq!(dense.by_sector().len(), 16 * 9);
    Ok(())
}

#[test]
fn test_table_serializes_with_compass_labels() -> Result<(), Box<dyn std::error::Error>> {
    let table = engine(1, true).compute(&[WindSample::new(2.0, 180.0)])?;
    let json = serde_json::to_value(table.rows())?;
    assert_eq!(json[0]["direction"], "S");
    assert_eq!(json[0]["speed"], "2.00-2.00");
    assert_eq!(json[0]["frequency"], 100.0);
    Ok(())
}
