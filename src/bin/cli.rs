/// file-search: find the lines of a file that contain a keyword
///
/// Matching is case-insensitive; each hit is printed with its line number.
use anyhow::{Context, Result};
use clap::Parser;
use file_search::cli::{OutputFormat, run_search, write_report};
use file_search::config::ServerConfig;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

#[derive(Parser)]
#[command(name = "file-search")]
#[command(about = "Case-insensitive keyword search over the lines of a file", long_about = None)]
#[command(version)]
struct Cli {
    /// File to search
    file: String,

    /// Keyword to look for
    keyword: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Optional log file path for debug logging
    #[arg(short, long)]
    log: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    file_search::logging::init_cli_logging(cli.log.as_ref())?;

    let config = ServerConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let start = Instant::now();
    let report = run_search(&cli.file, &cli.keyword, &config).await?;
    debug!(
        "Searched {} for '{}' in {:.2}ms",
        cli.file,
        cli.keyword,
        start.elapsed().as_secs_f64() * 1000.0
    );

    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &report, &cli.keyword, cli.format)?;

    Ok(())
}
