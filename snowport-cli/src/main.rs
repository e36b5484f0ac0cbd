use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use snowport_convert::{convert_transactions, write_snowball_csv, ConversionSummary};
use snowport_ingest::read_scalable_capital_csv;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

mod config;
#[cfg(test)]
mod git_head;
mod logging;

use config::Config;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SNOWPORT_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "snowport",
    version = VERSION,
    about = "Converts a Scalable Capital CSV export to the Snowball Analytics CSV format"
)]
struct Cli {
    /// Input CSV file to be converted
    filename: PathBuf,

    /// Show debug log traces
    #[arg(short, long)]
    debug: bool,

    /// Output file; `{date}` is replaced with today's date (YYYYMMDD)
    #[arg(short, long)]
    output_file: Option<String>,

    /// Config file (default: ~/.snowport/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let cfg = match config::load_config(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            logging::init_tracing(cli.debug, "info");
            error!("{e:#}");
            return ExitCode::from(1);
        }
    };
    logging::init_tracing(cli.debug, &cfg.log_level);
    debug!("Starting program...");

    match run(&cli, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli, cfg: &Config) -> Result<()> {
    let input = &cli.filename;
    debug!(
        "Input file path = {}",
        std::path::absolute(input).unwrap_or_else(|_| input.clone()).display()
    );

    let rows = read_scalable_capital_csv(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let txns = convert_transactions(&rows)
        .with_context(|| format!("converting {}", input.display()))?;

    // Only touch the filesystem once the whole export converted cleanly
    let template = cli.output_file.as_deref().unwrap_or(&cfg.output_file);
    let today = chrono::Local::now().date_naive();
    let output = resolve_output_path(template, today);
    write_snowball_csv(&output, &txns)
        .with_context(|| format!("writing {}", output.display()))?;

    let summary = ConversionSummary::new(&txns, rows.len() - txns.len());
    println!(
        "Converted {} transactions from {} to {}",
        summary.total(),
        input.display(),
        output.display()
    );
    Ok(())
}

/// Substitute every `{date}` in the template with `date` as YYYYMMDD.
fn resolve_output_path(template: &str, date: NaiveDate) -> PathBuf {
    let stamp = date.format("%Y%m%d").to_string();
    PathBuf::from(template.replace("{date}", &stamp))
}
