//! ---
//! bcms_section: "02-telemetry-core"
//! bcms_subsection: "binary"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "Telemetry export utility for dashboards and test fixtures."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use b_cms_telemetry::{TelemetryGenerator, TelemetrySeries};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    author,
    disable_version_flag = true,
    about = "Export synthetic boiler telemetry series for B-CMS dashboards",
    long_about = None
)]
struct Cli {
    /// Span of the exported series in hours (always 100 points)
    #[arg(long, default_value_t = 24.0)]
    hours: f64,

    /// Output file path. Use '-' for stdout.
    #[arg(long, default_value = "telemetry.csv")]
    output: PathBuf,

    /// Explicit output format when extension is ambiguous
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Print a classified KPI snapshot to stderr after the export
    #[arg(long, action = ArgAction::SetTrue)]
    kpi: bool,

    /// Print version information and exit
    #[arg(short = 'V', long = "version", action = ArgAction::SetTrue)]
    version: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("b-cms-gen {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    if !cli.hours.is_finite() || cli.hours <= 0.0 {
        return Err(anyhow!("hours must be a positive number"));
    }

    let format = determine_format(&cli.output, cli.format);
    let mut generator = build_generator(&cli);
    let series = generator.series(cli.hours);

    match format {
        OutputFormat::Csv => write_csv(&cli, &series)?,
        OutputFormat::Json => write_json(&cli, &series)?,
    }

    if cli.output.as_os_str() != "-" {
        eprintln!(
            "exported {} samples spanning {}h -> {}",
            series.len(),
            series.span_hours(),
            cli.output.display()
        );
    }

    if cli.kpi {
        let kpi = generator.current_kpi();
        eprintln!(
            "kpi: status={} efficiency={:.2}% co2={:.1} mg/Nm3 load={:.1} MW",
            kpi.status, kpi.efficiency_pct, kpi.co2_mg_nm3, kpi.load_mw
        );
    }

    Ok(())
}

fn build_generator(cli: &Cli) -> TelemetryGenerator {
    match cli.seed {
        Some(seed) => TelemetryGenerator::seeded(seed),
        None => TelemetryGenerator::from_entropy(),
    }
}

fn determine_format(path: &Path, override_format: Option<OutputFormat>) -> OutputFormat {
    if let Some(format) = override_format {
        return format;
    }
    if path.as_os_str() == "-" {
        return OutputFormat::Json;
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Csv,
    }
}

fn write_csv(cli: &Cli, series: &TelemetrySeries) -> Result<()> {
    let writer: Box<dyn Write> = if cli.output.as_os_str() == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(File::create(&cli.output).with_context(|| {
            format!("failed to create output file {}", cli.output.display())
        })?)
    };
    let mut writer = csv::Writer::from_writer(writer);
    for sample in series {
        writer.serialize(sample)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(cli: &Cli, series: &TelemetrySeries) -> Result<()> {
    if cli.output.as_os_str() == "-" {
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, series)?;
        stdout.write_all(b"\n")?;
    } else {
        let file = File::create(&cli.output)
            .with_context(|| format!("failed to create output file {}", cli.output.display()))?;
        serde_json::to_writer_pretty(file, series)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use b_cms_telemetry::SERIES_POINTS;
    use tempfile::NamedTempFile;

    fn base_cli() -> Cli {
        Cli {
            hours: 24.0,
            output: PathBuf::from("out.csv"),
            format: None,
            seed: Some(1),
            kpi: false,
            version: false,
        }
    }

    #[test]
    fn determine_format_defaults_csv() {
        let format = determine_format(Path::new("telemetry.data"), None);
        assert!(matches!(format, OutputFormat::Csv));
    }

    #[test]
    fn determine_format_for_stdout_defaults_json() {
        let format = determine_format(Path::new("-"), None);
        assert!(matches!(format, OutputFormat::Json));
    }

    #[test]
    fn determine_format_honours_override() {
        let format = determine_format(Path::new("telemetry.csv"), Some(OutputFormat::Json));
        assert!(matches!(format, OutputFormat::Json));
    }

    #[test]
    fn seeded_generator_produces_the_full_series() {
        let cli = base_cli();
        let mut generator = build_generator(&cli);
        let series = generator.series(cli.hours);
        assert_eq!(series.len(), SERIES_POINTS);
    }

    #[test]
    fn csv_export_writes_header_and_rows() {
        let mut cli = base_cli();
        let file = NamedTempFile::new().expect("temp file");
        cli.output = file.path().to_path_buf();
        let series = build_generator(&cli).series(cli.hours);
        write_csv(&cli, &series).expect("csv export");
        let contents = std::fs::read_to_string(file.path()).expect("read back");
        let mut lines = contents.lines();
        let header = lines.next().expect("header row");
        assert!(header.contains("steam_temp_c"));
        assert!(header.contains("cofiring_ratio_pct"));
        assert_eq!(lines.count(), SERIES_POINTS);
    }

    #[test]
    fn json_export_round_trips() {
        let mut cli = base_cli();
        let file = NamedTempFile::new().expect("temp file");
        cli.output = file.path().to_path_buf();
        let series = build_generator(&cli).series(cli.hours);
        write_json(&cli, &series).expect("json export");
        let contents = std::fs::read_to_string(file.path()).expect("read back");
        let parsed: TelemetrySeries = serde_json::from_str(&contents).expect("parse back");
        assert_eq!(parsed.len(), SERIES_POINTS);
        assert_eq!(parsed.span_hours(), 24.0);
    }
}
