//! ---
//! bcms_section: "15-testing-qa"
//! bcms_subsection: "integration-tests"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "Integration tests for the telemetry core."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
use b_cms_telemetry::{
    classify, generate_sample, generate_series, KpiStatus, TelemetryGenerator, SERIES_POINTS,
};

#[test]
fn day_and_week_series_share_cardinality_with_proportional_spacing() {
    let mut generator = TelemetryGenerator::seeded(1001);
    let day = generator.series(24.0);
    let week = generator.series(168.0);

    assert_eq!(day.len(), SERIES_POINTS);
    assert_eq!(week.len(), SERIES_POINTS);
    assert_eq!(week.spacing_ms(), 7.0 * day.spacing_ms());
    assert_eq!(day.spacing_ms(), 24.0 * 3_600_000.0 / SERIES_POINTS as f64);
}

#[test]
fn every_draw_is_independent_of_the_previous_one() {
    // No hidden state between calls beyond the RNG stream: two series from
    // one engine and two from a fresh engine at the same seed agree pairwise.
    let mut continuous = TelemetryGenerator::seeded(7);
    let first = continuous.series(24.0);
    let second = continuous.series(24.0);

    let mut replay = TelemetryGenerator::seeded(7);
    let replay_first = replay.series(24.0);
    let replay_second = replay.series(24.0);

    for (a, b) in first.iter().zip(replay_first.iter()) {
        assert_eq!(a.efficiency_pct, b.efficiency_pct);
    }
    for (a, b) in second.iter().zip(replay_second.iter()) {
        assert_eq!(a.co2_mg_nm3, b.co2_mg_nm3);
    }
}

#[test]
fn ambient_interface_matches_the_engine_contract() {
    let sample = generate_sample();
    assert_eq!(sample.cofiring_ratio_pct, 5.0);
    assert!(
        (sample.biomass_flow_tph - sample.coal_flow_tph * 0.05).abs() < 1e-9,
        "biomass flow must follow coal flow at the fixed ratio"
    );

    let series = generate_series(12.0);
    assert_eq!(series.len(), SERIES_POINTS);
    let timestamps: Vec<i64> = series.iter().map(|s| s.timestamp).collect();
    assert!(timestamps.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn classification_table_from_the_operating_manual() {
    let cases = [
        (85.0, 700.0, KpiStatus::Warning),
        (83.0, 700.0, KpiStatus::Critical),
        (90.0, 750.0, KpiStatus::Optimal),
        (90.0, 830.0, KpiStatus::Warning),
        (85.0, 870.0, KpiStatus::Critical),
        (87.0, 820.0, KpiStatus::Optimal),
    ];
    for (efficiency, co2, expected) in cases {
        assert_eq!(
            classify(efficiency, co2),
            expected,
            "classify({efficiency}, {co2})"
        );
    }
}

#[test]
fn long_run_of_samples_never_leaves_the_documented_windows() {
    let mut generator = TelemetryGenerator::seeded(2024);
    for _ in 0..2_000 {
        let sample = generator.sample();
        assert!((82.0..=92.0).contains(&sample.efficiency_pct));
        assert!((700.0..=900.0).contains(&sample.co2_mg_nm3));
        assert!((150.0..=220.0).contains(&sample.nox_mg_nm3));
        assert!((25.0..=70.0).contains(&sample.co_ppm));
        assert_eq!(sample.cofiring_ratio_pct, 5.0);
    }
}
