use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mallocstat::{analyze_lines, write_report};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "mallocstat",
    about = "Aggregate call counts and a block-size histogram from a debug-allocator trace log"
)]
struct Cli {
    /// Trace log to analyze.
    #[arg(default_value = "LOGFILE")]
    logfile: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let contents = std::fs::read_to_string(&cli.logfile)
        .with_context(|| format!("failed to read trace log {}", cli.logfile.display()))?;

    let stats = analyze_lines(contents.lines())
        .with_context(|| format!("failed to analyze trace log {}", cli.logfile.display()))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, &stats).context("failed to write report")?;

    Ok(())
}
