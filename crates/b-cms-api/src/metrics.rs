//! ---
//! bcms_section: "03-logging"
//! bcms_subsection: "module"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "Prometheus metrics for the B-CMS service."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use prometheus::{Encoder, GaugeVec, IntCounter, IntCounterVec, IntGaugeVec, Opts, Registry, TextEncoder};
use tracing::error;

use b_cms_telemetry::KpiStatus;

/// Shared registry type used across services.
pub type SharedRegistry = Arc<Registry>;

/// Metrics recorded by the B-CMS service.
#[derive(Clone)]
pub struct ServiceMetrics {
    registry: SharedRegistry,
    requests_total: IntCounterVec,
    samples_generated_total: IntCounter,
    kpi_status: IntGaugeVec,
    build_info: GaugeVec,
}

impl ServiceMetrics {
    pub fn new() -> Result<Self> {
        let registry: SharedRegistry = Arc::new(Registry::new());

        let requests_total = IntCounterVec::new(
            Opts::new(
                "b_cms_api_requests_total",
                "API requests served, by route",
            ),
            &["route"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        let samples_generated_total = IntCounter::with_opts(Opts::new(
            "b_cms_samples_generated_total",
            "Telemetry samples synthesised since start",
        ))?;
        registry.register(Box::new(samples_generated_total.clone()))?;

        let kpi_status = IntGaugeVec::new(
            Opts::new(
                "b_cms_kpi_status",
                "Indicator (0/1) for the most recently classified KPI status",
            ),
            &["status"],
        )?;
        registry.register(Box::new(kpi_status.clone()))?;

        let build_info = GaugeVec::new(
            Opts::new("b_cms_build_info", "Build metadata for the running binary"),
            &["version"],
        )?;
        registry.register(Box::new(build_info.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            samples_generated_total,
            kpi_status,
            build_info,
        })
    }

    pub fn registry(&self) -> SharedRegistry {
        self.registry.clone()
    }

    pub fn record_request(&self, route: &str) {
        self.requests_total.with_label_values(&[route]).inc();
    }

    pub fn add_samples(&self, count: u64) {
        self.samples_generated_total.inc_by(count);
    }

    /// Mark `status` as the current classification, clearing the other two.
    pub fn set_kpi_status(&self, status: KpiStatus) {
        for candidate in [KpiStatus::Optimal, KpiStatus::Warning, KpiStatus::Critical] {
            let value = i64::from(candidate == status);
            self.kpi_status
                .with_label_values(&[candidate.as_str()])
                .set(value);
        }
    }

    pub fn set_build_info(&self, version: &str) {
        self.build_info.with_label_values(&[version]).set(1.0);
    }
}

/// Prometheus scrape endpoint.
pub async fn metrics_handler(registry: SharedRegistry) -> impl IntoResponse {
    let families = registry.gather();
    let encoder = TextEncoder::new();
    match encoder.encode_to_string(&families) {
        Ok(body) => (
            StatusCode::OK,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_str(encoder.format_type())
                    .unwrap_or_else(|_| HeaderValue::from_static("text/plain")),
            )],
            body,
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "failed to encode metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                String::from("metrics encoding error"),
            )
                .into_response()
        }
    }
}
