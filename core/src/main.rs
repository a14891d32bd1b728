use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use blepower_core::cli::print_power_report;
use blepower_core::{load_config, plot, report, Metrics};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "blepower",
    version,
    about = "Decode a BLE notification log into power, cadence and rolling averages"
)]
struct Cli {
    /// BLE-logg (tekstfil)
    log: PathBuf,
    /// JSON-konfig (karakteristikk, markør, vinduer). Mangler den brukes default.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Skriv hele rapporten som JSON til stdout
    #[arg(long)]
    json: bool,
    /// Skriv linjerte serier til CSV
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Tegn serier til PNG
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Skriv prometheus-tellere til stderr etter kjøring
    #[arg(long)]
    metrics: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Default::default(),
    };

    let metrics = Metrics::new()?;
    let report = blepower_core::pipeline::run_file_with_metrics(&cli.log, &cfg, &metrics)
        .with_context(|| format!("failed to decode {}", cli.log.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        print_power_report(&report);
    }

    if let Some(path) = &cli.csv {
        let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        report::write_csv(&report, BufWriter::new(file))?;
    }

    if let Some(path) = &cli.plot {
        plot::render_png(&report, path)
            .map_err(|e| anyhow::anyhow!("failed to render {}: {e}", path.display()))?;
    }

    if cli.metrics {
        eprint!("{}", metrics.render()?);
    }
    Ok(())
}
