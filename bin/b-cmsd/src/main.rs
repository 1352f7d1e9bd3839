//! ---
//! bcms_section: "01-core-functionality"
//! bcms_subsection: "binary"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "Binary entrypoint for the B-CMS daemon."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use b_cms_analytics::RollingWindow;
use b_cms_api::{spawn_api_server, ApiState};
use b_cms_common::config::AppConfig;
use b_cms_common::logging::init_tracing;
use clap::{ArgAction, Parser};
use tokio::signal;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    author,
    disable_version_flag = true,
    about = "B-CMS daemon",
    long_about = None
)]
struct Cli {
    #[arg(long, value_name = "FILE", help = "Path to configuration file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Fixed random seed overriding the configured one")]
    seed: Option<u64>,

    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print version information and exit"
    )]
    version: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("b-cmsd {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut candidates = Vec::new();
    if let Some(path) = &cli.config {
        candidates.push(path.clone());
    }
    candidates.push(PathBuf::from("configs/example.prod.toml"));
    candidates.push(PathBuf::from("configs/example.dev.toml"));

    let loaded = AppConfig::load_with_source(&candidates)?;
    let mut config = loaded.config;
    if let Some(seed) = cli.seed {
        config.telemetry.random_seed = Some(seed);
    }

    init_tracing("b-cmsd", &config.logging)?;
    info!(config_path = %loaded.source.display(), seeded = config.telemetry.random_seed.is_some(), "configuration loaded");

    run_daemon(config).await
}

async fn run_daemon(config: AppConfig) -> Result<()> {
    let state = Arc::new(ApiState::new(&config)?);

    let api_server = if config.api.enabled {
        let server = spawn_api_server(state.clone(), config.api.listen)?;
        info!(address = %server.addr(), "api server listening");
        Some(server)
    } else {
        info!("api server disabled by configuration");
        None
    };

    let mut window = RollingWindow::new(config.telemetry.realtime_window);
    let mut ticker = tokio::time::interval(config.telemetry.poll_interval);
    info!(
        poll_interval_secs = config.telemetry.poll_interval.as_secs(),
        realtime_window = config.telemetry.realtime_window,
        "daemon running; waiting for termination signal"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let kpi = state.poll_tick();
                window.push(state.sample());
                info!(
                    status = %kpi.status,
                    efficiency_pct = kpi.efficiency_pct,
                    co2_mg_nm3 = kpi.co2_mg_nm3,
                    load_mw = kpi.load_mw,
                    window_len = window.len(),
                    "kpi refreshed"
                );
            }
            _ = signal::ctrl_c() => {
                info!("ctrl-c received; shutting down");
                break;
            }
        }
    }

    if let Some(server) = api_server {
        server.shutdown().await?;
    }

    Ok(())
}
