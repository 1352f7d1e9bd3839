//! ---
//! bcms_section: "02-telemetry-core"
//! bcms_subsection: "module"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "Synthetic telemetry synthesis engine."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
use rand::prelude::*;

use b_cms_common::time::{hours_to_millis, now_millis};

use crate::kpi::KpiSnapshot;
use crate::sample::BoilerSample;
use crate::series::{TelemetrySeries, SERIES_POINTS};

/// Operating baselines, taken from commissioning data of the reference unit.
pub mod baseline {
    /// Unit load (MW).
    pub const LOAD_MW: f64 = 400.0;
    /// Coal mass flow (t/h).
    pub const COAL_FLOW_TPH: f64 = 360.0;
    /// Cofiring ratio ceiling (%). The ratio is pinned here, never sampled.
    pub const COFIRING_RATIO_PCT: f64 = 5.0;
    /// Primary air flow (t/h).
    pub const PRIMARY_AIR_TPH: f64 = 211.0;
    /// Secondary air flow (t/h).
    pub const SECONDARY_AIR_TPH: f64 = 451.0;
    /// Excess air (%).
    pub const EXCESS_AIR_PCT: f64 = 22.2;
    /// Main steam temperature (°C).
    pub const STEAM_TEMP_C: f64 = 538.1;
    /// Drum pressure (bar).
    pub const DRUM_PRESSURE_BAR: f64 = 248.3;
    /// O₂ flue-gas level (%).
    pub const O2_PCT: f64 = 3.42;
    /// Steam temperature reference used by the efficiency and NOₓ formulas (°C).
    pub const STEAM_TEMP_REF_C: f64 = 538.0;
    /// O₂ reference used by the efficiency and CO₂ formulas (%).
    pub const O2_REF_PCT: f64 = 3.45;
}

/// Clamp windows applied to derived and emission fields after noise.
pub mod bounds {
    /// Thermal efficiency window (%).
    pub const EFFICIENCY_PCT: (f64, f64) = (82.0, 92.0);
    /// CO₂ emission window (mg/Nm³).
    pub const CO2_MG_NM3: (f64, f64) = (700.0, 900.0);
    /// NOₓ window (mg/Nm³).
    pub const NOX_MG_NM3: (f64, f64) = (150.0, 220.0);
    /// CO window (ppm).
    pub const CO_PPM: (f64, f64) = (25.0, 70.0);
}

/// Synthesises boiler telemetry: single samples, fixed-cardinality series,
/// and classified KPI snapshots.
///
/// The engine owns its random source. Production call sites use
/// [`TelemetryGenerator::from_entropy`] (or the free functions in the crate
/// root); tests and replay tooling use [`TelemetryGenerator::seeded`] so a
/// run can be reproduced exactly.
#[derive(Debug)]
pub struct TelemetryGenerator {
    rng: StdRng,
}

impl TelemetryGenerator {
    /// Deterministic generator for reproducible output.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator drawing from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Produce one sample representing "now".
    ///
    /// Independent fields are drawn first from narrow uniform windows around
    /// the baselines; efficiency, CO₂, NOₓ and CO are derived from them plus
    /// independent noise, then clamped.
    pub fn sample(&mut self) -> BoilerSample {
        let timestamp = now_millis();

        let load_mw = baseline::LOAD_MW + self.rng.gen_range(-0.5..0.4); // 399.5 - 400.4 MW
        let coal_flow_tph = baseline::COAL_FLOW_TPH + self.rng.gen_range(-0.5..0.4); // 359.5 - 360.4 t/h
        let cofiring_ratio_pct = baseline::COFIRING_RATIO_PCT;
        let biomass_flow_tph = coal_flow_tph * cofiring_ratio_pct / 100.0;

        let primary_air_tph = baseline::PRIMARY_AIR_TPH + self.rng.gen_range(-0.5..0.6);
        let secondary_air_tph = baseline::SECONDARY_AIR_TPH + self.rng.gen_range(-0.5..0.7);
        let excess_air_pct = baseline::EXCESS_AIR_PCT + self.rng.gen_range(0.0..0.8); // 22.2 - 23.0 %
        let steam_temp_c = baseline::STEAM_TEMP_C + self.rng.gen_range(0.0..0.9); // 538.1 - 539.0 °C
        let drum_pressure_bar = baseline::DRUM_PRESSURE_BAR + self.rng.gen_range(0.0..0.8);
        let o2_pct = baseline::O2_PCT + self.rng.gen_range(0.0..0.06); // 3.42 - 3.48 %

        let efficiency_base = 87.0
            + cofiring_ratio_pct * 0.3
            + (steam_temp_c - baseline::STEAM_TEMP_REF_C) * 0.2
            + (baseline::O2_REF_PCT - o2_pct) * 0.5;
        let efficiency_pct = clamp(
            efficiency_base + self.rng.gen_range(-0.75..0.75),
            bounds::EFFICIENCY_PCT,
        );

        let co2_base =
            800.0 - cofiring_ratio_pct * 10.0 + (o2_pct - baseline::O2_REF_PCT) * 15.0;
        let co2_mg_nm3 = clamp(co2_base + self.rng.gen_range(-10.0..10.0), bounds::CO2_MG_NM3);

        let nox_mg_nm3 = clamp(
            180.0 + (steam_temp_c - baseline::STEAM_TEMP_REF_C) * 2.0
                + self.rng.gen_range(0.0..15.0),
            bounds::NOX_MG_NM3,
        );
        let co_ppm = clamp(40.0 + self.rng.gen_range(0.0..15.0), bounds::CO_PPM);

        BoilerSample {
            timestamp,
            steam_temp_c,
            drum_pressure_bar,
            coal_flow_tph,
            biomass_flow_tph,
            load_mw,
            primary_air_tph,
            secondary_air_tph,
            excess_air_pct,
            efficiency_pct,
            co2_mg_nm3,
            o2_pct,
            co_ppm,
            nox_mg_nm3,
            cofiring_ratio_pct,
        }
    }

    /// Produce a series spanning `span_hours`, always [`SERIES_POINTS`] points.
    ///
    /// Spacing is `span_hours * 3_600_000 / 100` ms; the duration only changes
    /// the spacing, never the cardinality. Each field follows a slow sinusoid
    /// (distinct period and phase per field) with uniform noise on top, so
    /// consecutive points read as an operating trend rather than white noise.
    ///
    /// Non-positive spans are not validated here; guard them at the call
    /// boundary.
    pub fn series(&mut self, span_hours: f64) -> TelemetrySeries {
        let now = now_millis();
        let spacing_ms = hours_to_millis(span_hours) / SERIES_POINTS as f64;

        let mut samples = Vec::with_capacity(SERIES_POINTS);
        for i in 0..SERIES_POINTS {
            let timestamp =
                now - ((SERIES_POINTS - i) as f64 * spacing_ms).round() as i64;
            samples.push(self.series_point(i, timestamp));
        }

        TelemetrySeries::new(samples, span_hours, spacing_ms)
    }

    fn series_point(&mut self, index: usize, timestamp: i64) -> BoilerSample {
        let x = index as f64;

        let load_mw = 400.0 + (x / 20.0).sin() * 0.3 + self.rng.gen_range(-0.25..0.25);
        let coal_flow_tph = 360.0 + (x / 15.0).sin() * 0.4 + self.rng.gen_range(-0.3..0.3);
        let cofiring_ratio_pct = baseline::COFIRING_RATIO_PCT;
        let biomass_flow_tph = coal_flow_tph * cofiring_ratio_pct / 100.0;

        let primary_air_tph = 211.0 + (x / 18.0).sin() * 0.5 + self.rng.gen_range(-0.4..0.4);
        let secondary_air_tph =
            451.0 + (x / 22.0).cos() * 0.6 + self.rng.gen_range(-0.45..0.45);
        let excess_air_pct = 22.5 + (x / 25.0).sin() * 0.4 + self.rng.gen_range(0.0..0.5);
        let steam_temp_c = 538.5 + (x / 12.0).sin() * 0.4 + self.rng.gen_range(-0.3..0.3);
        let drum_pressure_bar =
            248.7 + (x / 16.0).cos() * 0.35 + self.rng.gen_range(-0.25..0.25);
        let o2_pct = 3.45 + (x / 14.0).sin() * 0.02 + self.rng.gen_range(-0.02..0.02);

        // Historical traces clamp inside the live windows so chart scales stay put.
        let efficiency_pct = clamp(
            87.5 + (x / 20.0).sin() * 1.5
                + cofiring_ratio_pct * 0.3
                + self.rng.gen_range(-0.6..0.6),
            (83.0, 92.0),
        );
        let co2_mg_nm3 = clamp(
            800.0 - cofiring_ratio_pct * 10.0
                + (x / 18.0).sin() * 15.0
                + self.rng.gen_range(-9.0..9.0),
            (720.0, 880.0),
        );
        let nox_mg_nm3 = clamp(
            185.0 + (x / 16.0).sin() * 12.0 + self.rng.gen_range(0.0..10.0),
            (155.0, 215.0),
        );
        let co_ppm = clamp(42.0 + self.rng.gen_range(0.0..12.0), (28.0, 65.0));

        BoilerSample {
            timestamp,
            steam_temp_c,
            drum_pressure_bar,
            coal_flow_tph,
            biomass_flow_tph,
            load_mw,
            primary_air_tph,
            secondary_air_tph,
            excess_air_pct,
            efficiency_pct,
            co2_mg_nm3,
            o2_pct,
            co_ppm,
            nox_mg_nm3,
            cofiring_ratio_pct,
        }
    }

    /// Draw a fresh sample and reduce it to a classified KPI snapshot.
    ///
    /// "Current KPI" is a new stochastic draw, not a read of shared state.
    pub fn current_kpi(&mut self) -> KpiSnapshot {
        KpiSnapshot::from_sample(&self.sample())
    }
}

impl Default for TelemetryGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

fn clamp(value: f64, (min, max): (f64, f64)) -> f64 {
    value.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kpi::KpiStatus;

    fn assert_sample_invariants(sample: &BoilerSample) {
        assert_eq!(sample.cofiring_ratio_pct, 5.0);
        assert!(
            (sample.biomass_flow_tph - sample.coal_flow_tph * 5.0 / 100.0).abs() < 1e-9,
            "biomass must be derived from coal flow"
        );
        assert!((82.0..=92.0).contains(&sample.efficiency_pct));
        assert!((700.0..=900.0).contains(&sample.co2_mg_nm3));
        assert!((150.0..=220.0).contains(&sample.nox_mg_nm3));
        assert!((25.0..=70.0).contains(&sample.co_ppm));
    }

    #[test]
    fn samples_stay_inside_documented_windows() {
        let mut generator = TelemetryGenerator::seeded(42);
        for _ in 0..500 {
            assert_sample_invariants(&generator.sample());
        }
    }

    #[test]
    fn independent_fields_stay_near_baselines() {
        let mut generator = TelemetryGenerator::seeded(7);
        for _ in 0..200 {
            let sample = generator.sample();
            assert!((399.5..400.4).contains(&sample.load_mw));
            assert!((359.5..360.4).contains(&sample.coal_flow_tph));
            assert!((538.1..539.0).contains(&sample.steam_temp_c));
            assert!((248.3..249.1).contains(&sample.drum_pressure_bar));
            assert!((3.42..3.48).contains(&sample.o2_pct));
            assert!((22.2..23.0).contains(&sample.excess_air_pct));
        }
    }

    #[test]
    fn identical_seeds_reproduce_identical_numbers() {
        let mut a = TelemetryGenerator::seeded(1234);
        let mut b = TelemetryGenerator::seeded(1234);
        for _ in 0..10 {
            let (sa, sb) = (a.sample(), b.sample());
            assert_eq!(sa.load_mw, sb.load_mw);
            assert_eq!(sa.efficiency_pct, sb.efficiency_pct);
            assert_eq!(sa.co2_mg_nm3, sb.co2_mg_nm3);
        }
    }

    #[test]
    fn series_has_fixed_cardinality_and_ascending_timestamps() {
        let mut generator = TelemetryGenerator::seeded(9);
        for span in [0.5, 24.0, 168.0] {
            let series = generator.series(span);
            assert_eq!(series.len(), SERIES_POINTS);
            let timestamps: Vec<i64> =
                series.samples().iter().map(|s| s.timestamp).collect();
            assert!(
                timestamps.windows(2).all(|w| w[0] < w[1]),
                "timestamps must be strictly ascending for span {span}"
            );
            assert!(*timestamps.last().unwrap() <= now_millis());
        }
    }

    #[test]
    fn series_spacing_is_linear_in_span() {
        let mut generator = TelemetryGenerator::seeded(3);
        let day = generator.series(24.0);
        let week = generator.series(168.0);
        assert_eq!(day.spacing_ms(), 24.0 * 3_600_000.0 / 100.0);
        assert_eq!(week.spacing_ms(), 7.0 * day.spacing_ms());
        let doubled = generator.series(48.0);
        assert_eq!(doubled.spacing_ms(), 2.0 * day.spacing_ms());
    }

    #[test]
    fn series_first_timestamp_sits_a_full_span_back() {
        let before = now_millis();
        let series = TelemetryGenerator::seeded(5).series(24.0);
        let after = now_millis();
        let span_ms = (SERIES_POINTS as f64 * series.spacing_ms()) as i64;
        let first = series.samples().first().unwrap().timestamp;
        assert!(first >= before - span_ms);
        assert!(first <= after - span_ms);
    }

    #[test]
    fn series_points_honour_sample_invariants() {
        let series = TelemetryGenerator::seeded(21).series(24.0);
        for sample in series.samples() {
            assert_sample_invariants(sample);
        }
    }

    #[test]
    fn current_kpi_mirrors_a_fresh_draw() {
        let mut generator = TelemetryGenerator::seeded(77);
        let kpi = generator.current_kpi();
        assert!((82.0..=92.0).contains(&kpi.efficiency_pct));
        assert!((700.0..=900.0).contains(&kpi.co2_mg_nm3));
        assert_eq!(kpi.cofiring_ratio_pct, 5.0);
        // At these baselines efficiency stays above ~87.7 and CO2 below
        // ~761, so a fresh draw can never reach the critical thresholds.
        assert_ne!(kpi.status, KpiStatus::Critical);
    }
}
