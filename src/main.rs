//! bytechart - Entry Point

use bytechart::config::{self, CliOverrides};
use bytechart::view::constants::MIN_CHART_DIMENSION;
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::info;

/// bytechart - throughput and chart for timestamped byte-count logs
#[derive(Parser, Debug)]
#[command(name = "bytechart")]
#[command(version)]
#[command(about = "Compute throughput and chart byte counts from a `Time: ...; Byte's: ...;` log")]
pub struct Args {
    /// Path to the log file (default: LogFile.txt)
    pub file: Option<PathBuf>,

    /// Render the chart as text instead of opening it in the terminal
    #[arg(long)]
    pub headless: bool,

    /// Write the headless chart to this file instead of stdout (implies --headless)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Headless chart width in cells
    #[arg(long, value_parser = clap::value_parser!(u16).range(i64::from(MIN_CHART_DIMENSION)..))]
    pub width: Option<u16>,

    /// Headless chart height in cells
    #[arg(long, value_parser = clap::value_parser!(u16).range(i64::from(MIN_CHART_DIMENSION)..))]
    pub height: Option<u16>,

    /// Chart title
    #[arg(long)]
    pub title: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// CLI values that override the config file and environment.
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            input: self.file.clone(),
            // Only override if flag was explicitly set
            headless: self.headless.then_some(true),
            output: self.output.clone(),
            chart_width: self.width,
            chart_height: self.height,
            title: self.title.clone(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, args.overrides())
    };

    // Logging is best-effort; the analysis still runs without it
    if let Err(err) = bytechart::logging::init(&config.log_file_path) {
        eprintln!("warning: logging disabled: {}", err);
    }

    info!(config = ?config, "Configuration loaded and resolved");

    let chart_options = config.chart_options(io::stdout().is_terminal());
    let mut stdout = io::stdout().lock();
    let summary = bytechart::pipeline::run(&config.input, &chart_options, &mut stdout)?;
    stdout.flush()?;

    info!(
        records = summary.records.len(),
        throughput = summary.throughput,
        "Run complete"
    );

    Ok(())
}
