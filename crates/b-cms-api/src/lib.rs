//! ---
//! bcms_section: "05-networking-external-interfaces"
//! bcms_subsection: "module"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "HTTP API surface for dashboard consumers."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
//! JSON API serving the dashboard views: live KPI draws, single samples,
//! fixed-cardinality history series, and the recommendation/operator
//! fixtures, plus a Prometheus scrape endpoint.

use std::net::{SocketAddr, TcpListener as StdTcpListener};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::info;

use b_cms_common::config::AppConfig;
use b_cms_common::time::now_millis;
use b_cms_fixtures::{model_predictions, seed_alarms, Alarm, LogBook, ModelPrediction, OperatorLogEntry};
use b_cms_telemetry::{
    BoilerSample, KpiSnapshot, TelemetryGenerator, TelemetrySeries, SERIES_POINTS,
};

pub mod metrics;

pub use metrics::{ServiceMetrics, SharedRegistry};

/// Default span served when `/api/series` is called without `hours`.
const DEFAULT_SERIES_HOURS: f64 = 24.0;

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("query parameter `hours` must be a positive, finite number")]
    InvalidSpan,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Shared API state exposed to handlers and the daemon poll loop.
pub struct ApiState {
    generator: Mutex<TelemetryGenerator>,
    logbook: RwLock<LogBook>,
    metrics: ServiceMetrics,
    start: Instant,
    seeded: bool,
    version: &'static str,
}

impl ApiState {
    /// Build state from configuration. A fixed `random_seed` makes both the
    /// generator and the log book reproducible.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let now = now_millis();
        let (generator, logbook) = match config.telemetry.random_seed {
            Some(seed) => (
                TelemetryGenerator::seeded(seed),
                LogBook::seeded(seed, now),
            ),
            None => (
                TelemetryGenerator::from_entropy(),
                LogBook::from_entropy(now),
            ),
        };
        let metrics = ServiceMetrics::new().context("failed to build service metrics")?;
        let version = env!("CARGO_PKG_VERSION");
        metrics.set_build_info(version);
        Ok(Self {
            generator: Mutex::new(generator),
            logbook: RwLock::new(logbook),
            metrics,
            start: Instant::now(),
            seeded: config.telemetry.random_seed.is_some(),
            version,
        })
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.metrics
    }

    /// Draw one sample.
    pub fn sample(&self) -> BoilerSample {
        self.metrics.add_samples(1);
        self.generator.lock().sample()
    }

    /// Draw and classify a fresh KPI snapshot.
    pub fn kpi(&self) -> KpiSnapshot {
        self.metrics.add_samples(1);
        let kpi = self.generator.lock().current_kpi();
        self.metrics.set_kpi_status(kpi.status);
        kpi
    }

    /// Draw a full series over `span_hours`.
    pub fn series(&self, span_hours: f64) -> TelemetrySeries {
        self.metrics.add_samples(SERIES_POINTS as u64);
        self.generator.lock().series(span_hours)
    }

    /// Snapshot of the operator log, newest first.
    pub fn logs(&self) -> Vec<OperatorLogEntry> {
        self.logbook.read().entries().to_vec()
    }

    /// One daemon poll tick: classify a fresh draw and occasionally extend
    /// the operator log. Returns the snapshot so the caller can report it.
    pub fn poll_tick(&self) -> KpiSnapshot {
        let kpi = self.kpi();
        let _ = self.logbook.write().maybe_append_auto(now_millis(), true);
        kpi
    }

    fn status(&self) -> StatusResponse {
        StatusResponse {
            service: "b-cms",
            version: self.version,
            uptime_seconds: self.start.elapsed().as_secs(),
            series_points: SERIES_POINTS,
            seeded: self.seeded,
        }
    }
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    service: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    series_points: usize,
    seeded: bool,
}

#[derive(Debug, Deserialize)]
struct SeriesQuery {
    hours: Option<f64>,
}

/// Build the API router over shared state.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/sample", get(sample_handler))
        .route("/api/kpi", get(kpi_handler))
        .route("/api/series", get(series_handler))
        .route("/api/predictions", get(predictions_handler))
        .route("/api/alarms", get(alarms_handler))
        .route("/api/logs", get(logs_handler))
        .route("/metrics", get(scrape_handler))
        .with_state(state)
}

async fn status_handler(State(state): State<Arc<ApiState>>) -> Json<StatusResponse> {
    state.metrics.record_request("/api/status");
    Json(state.status())
}

async fn sample_handler(State(state): State<Arc<ApiState>>) -> Json<BoilerSample> {
    state.metrics.record_request("/api/sample");
    Json(state.sample())
}

async fn kpi_handler(State(state): State<Arc<ApiState>>) -> Json<KpiSnapshot> {
    state.metrics.record_request("/api/kpi");
    Json(state.kpi())
}

async fn series_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SeriesQuery>,
) -> Result<Json<TelemetrySeries>, ApiError> {
    state.metrics.record_request("/api/series");
    let hours = query.hours.unwrap_or(DEFAULT_SERIES_HOURS);
    if !hours.is_finite() || hours <= 0.0 {
        return Err(ApiError::InvalidSpan);
    }
    Ok(Json(state.series(hours)))
}

async fn predictions_handler(State(state): State<Arc<ApiState>>) -> Json<Vec<ModelPrediction>> {
    state.metrics.record_request("/api/predictions");
    Json(model_predictions())
}

async fn alarms_handler(State(state): State<Arc<ApiState>>) -> Json<Vec<Alarm>> {
    state.metrics.record_request("/api/alarms");
    Json(seed_alarms(now_millis()))
}

async fn logs_handler(State(state): State<Arc<ApiState>>) -> Json<Vec<OperatorLogEntry>> {
    state.metrics.record_request("/api/logs");
    Json(state.logs())
}

async fn scrape_handler(State(state): State<Arc<ApiState>>) -> Response {
    metrics::metrics_handler(state.metrics.registry())
        .await
        .into_response()
}

/// Handle to the running API server.
#[derive(Debug)]
pub struct ApiServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<Result<()>>,
}

impl ApiServer {
    /// Return the bound address for convenience.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Signal shutdown and await task completion.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        match self.task.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => Err(err),
            Err(join_err) => Err(anyhow::Error::new(join_err)),
        }
    }
}

/// Spawn the API server on `addr` with graceful shutdown.
pub fn spawn_api_server(state: Arc<ApiState>, addr: SocketAddr) -> Result<ApiServer> {
    let app = router(state).layer(TraceLayer::new_for_http());

    let std_listener = StdTcpListener::bind(addr)
        .with_context(|| format!("failed to bind api listener {}", addr))?;
    std_listener
        .set_nonblocking(true)
        .with_context(|| "failed to configure api listener as non-blocking")?;
    let listener = TcpListener::from_std(std_listener)
        .with_context(|| "failed to convert std listener into tokio listener")?;
    let bound = listener
        .local_addr()
        .with_context(|| "failed to resolve bound api address")?;

    info!(address = %bound, "api server starting");

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let service = app.into_make_service();
    let handle: JoinHandle<Result<()>> = tokio::spawn(async move {
        axum::serve(listener, service)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
            .context("api server encountered an error")?;
        Ok(())
    });

    Ok(ApiServer {
        addr: bound,
        shutdown: Some(shutdown_tx),
        task: handle,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_state() -> Arc<ApiState> {
        let mut config = AppConfig::default();
        config.telemetry.random_seed = Some(99);
        Arc::new(ApiState::new(&config).expect("state builds"))
    }

    #[test]
    fn state_draws_honour_core_invariants() {
        let state = seeded_state();
        let sample = state.sample();
        assert_eq!(sample.cofiring_ratio_pct, 5.0);
        let series = state.series(24.0);
        assert_eq!(series.len(), SERIES_POINTS);
        let kpi = state.kpi();
        assert!((82.0..=92.0).contains(&kpi.efficiency_pct));
    }

    #[test]
    fn poll_tick_reports_and_sometimes_extends_logs() {
        let state = seeded_state();
        let before = state.logs().len();
        for _ in 0..50 {
            let _ = state.poll_tick();
        }
        assert!(state.logs().len() >= before);
    }

    #[tokio::test]
    async fn series_handler_rejects_degenerate_spans() {
        let state = seeded_state();
        for bad in [Some(0.0), Some(-24.0), Some(f64::NAN)] {
            let result =
                series_handler(State(state.clone()), Query(SeriesQuery { hours: bad })).await;
            assert!(result.is_err());
        }
    }

    #[tokio::test]
    async fn series_handler_defaults_to_a_day() {
        let state = seeded_state();
        let Json(series) =
            series_handler(State(state.clone()), Query(SeriesQuery { hours: None }))
                .await
                .expect("default span serves");
        assert_eq!(series.span_hours(), 24.0);
        assert_eq!(series.len(), SERIES_POINTS);
    }

    #[tokio::test]
    async fn server_binds_an_ephemeral_port_and_shuts_down() {
        let state = seeded_state();
        let server =
            spawn_api_server(state, "127.0.0.1:0".parse().unwrap()).expect("server spawns");
        assert_ne!(server.addr().port(), 0);
        server.shutdown().await.expect("clean shutdown");
    }
}
