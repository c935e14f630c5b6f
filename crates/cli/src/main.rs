//! # electrify-cli
//!
//! Command-line front end for the electrification dashboard.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use electrify_facade::{
    load_config_or_default, render_text, DashboardBuilder, Metric, SelectionRequest, Upload,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "electrify")]
#[command(about = "Electrification access trends and forecasts", long_about = None)]
struct Cli {
    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the dashboard for one country
    Report {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Country to report on (default: first in sorted order)
        #[arg(short, long)]
        country: Option<String>,

        /// Metric column (electricity_access, rural_access, urban_access)
        #[arg(short, long)]
        metric: Option<Metric>,

        /// Forecast horizon in years
        #[arg(long)]
        horizon: Option<usize>,

        /// JSON dashboard configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Also write the report as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the countries in a CSV file
    Countries {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_upload(path: &Path) -> anyhow::Result<Upload> {
    let bytes = fs::read(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Upload::new(name, bytes))
}

struct ReportArgs {
    input: PathBuf,
    country: Option<String>,
    metric: Option<Metric>,
    horizon: Option<usize>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

/// Render the dashboard as text. A halted report is still a success.
fn run_report(args: ReportArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let config = load_config_or_default(args.config.as_deref())?;
    let dashboard = DashboardBuilder::new().config(config).build()?;
    let upload = read_upload(&args.input)?;

    let mut request = SelectionRequest::new();
    if let Some(country) = args.country {
        request = request.country(country);
    }
    if let Some(metric) = args.metric {
        request = request.metric(metric);
    }
    if let Some(horizon) = args.horizon {
        request = request.horizon(horizon);
    }

    let report = dashboard.render(Some(&upload), &request)?;
    if let Some(halt) = &report.halt {
        tracing::info!(message = halt.message(), "dashboard halted");
    }

    write!(out, "{}", render_text(&report))?;

    if let Some(path) = args.output {
        let mut file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(&mut file, &report).context("Failed to write JSON")?;
        tracing::info!(path = %path.display(), "report written");
    }

    Ok(())
}

fn run_countries(input: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let dashboard = DashboardBuilder::new().build()?;
    let controls = dashboard.controls(&read_upload(input)?)?;
    for country in &controls.countries {
        writeln!(out, "{}", country)?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stdout = io::stdout().lock();
    let result = match cli.command {
        Commands::Report {
            input,
            country,
            metric,
            horizon,
            config,
            output,
        } => run_report(
            ReportArgs {
                input,
                country,
                metric,
                horizon,
                config,
                output,
            },
            &mut stdout,
        ),

        Commands::Countries { input } => run_countries(&input, &mut stdout),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn csv_file(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    fn sample() -> NamedTempFile {
        let mut body = String::from("country,year,electricity_access,rural_access,urban_access\n");
        for (i, year) in (2013..=2022).enumerate() {
            let v = 92.0 + i as f64 * 0.5;
            body.push_str(&format!("Ghana,{},{},{},{}\n", year, v, v - 5.0, v + 3.0));
        }
        body.push_str("Benin,2022,42.0,18.0,67.0\n");
        csv_file(&body)
    }

    fn args(input: &Path) -> ReportArgs {
        ReportArgs {
            input: input.to_path_buf(),
            country: None,
            metric: None,
            horizon: None,
            config: None,
            output: None,
        }
    }

    #[test]
    fn test_cli_parses_report() {
        let cli = Cli::try_parse_from([
            "electrify", "-v", "report", "--input", "a.csv", "--metric", "rural_access",
            "--horizon", "7",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Report {
                metric, horizon, ..
            } => {
                assert_eq!(metric, Some(Metric::RuralAccess));
                assert_eq!(horizon, Some(7));
            }
            Commands::Countries { .. } => panic!("expected report"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_metric() {
        assert!(Cli::try_parse_from(["electrify", "report", "-i", "a.csv", "-m", "gdp"]).is_err());
    }

    #[test]
    fn test_countries_sorted() {
        let file = sample();
        let mut out = Vec::new();
        run_countries(file.path(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Benin\nGhana\n");
    }

    #[test]
    fn test_report_with_json_output() {
        let file = sample();
        let json = NamedTempFile::new().unwrap();
        let mut report_args = args(file.path());
        report_args.country = Some("Ghana".to_string());
        report_args.output = Some(json.path().to_path_buf());

        let mut out = Vec::new();
        run_report(report_args, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Ghana – Electrification Forecast"));

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(json.path()).unwrap()).unwrap();
        assert_eq!(value["sections"][0]["kind"], "title");
    }

    #[test]
    fn test_halted_report_is_success() {
        let file = sample();
        let mut out = Vec::new();
        run_report(args(file.path()), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[ERROR] Not enough data points for forecasting."));
    }

    #[test]
    fn test_missing_input_fails() {
        let mut out = Vec::new();
        assert!(run_report(args(Path::new("/no/such.csv")), &mut out).is_err());
    }
}
