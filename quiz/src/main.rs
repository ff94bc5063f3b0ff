//! Time-boxed quiz CLI.
//!
//! Loads the problem set, runs one interactive session against the configured
//! budget, and writes the date-named result report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;

use quiz::collect::StdinSource;
use quiz::io::config::{self, ConfigOverrides};
use quiz::io::problems::load_problems;
use quiz::io::report::write_report;
use quiz::logging;
use quiz::session::Session;

#[derive(Parser)]
#[command(name = "quiz", version, about = "Time-boxed quiz session runner")]
struct Cli {
    /// Config file supplying defaults for the flags below.
    #[arg(long, default_value = "quiz.toml")]
    config: PathBuf,

    /// Problem set file (`prompt,expected_answer` per row).
    #[arg(long)]
    problems: Option<PathBuf>,

    /// Total session budget in seconds.
    #[arg(long)]
    budget_secs: Option<u64>,

    /// Directory the final report is written into.
    #[arg(long)]
    report_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let cfg = config::load_config(&cli.config)?;
    let cfg = config::apply_overrides(
        cfg,
        &ConfigOverrides {
            problems: cli.problems,
            budget_secs: cli.budget_secs,
            report_dir: cli.report_dir,
        },
    )?;

    let problems = load_problems(&cfg.problems)?;
    info!(
        problems = problems.len(),
        budget_secs = cfg.budget_secs,
        "session configured"
    );

    let started_at = Utc::now();
    let session = Session::new(problems, cfg.budget())?;
    let report = session.run(StdinSource::new())?;

    let path = write_report(&cfg.report_dir, started_at, &report).context("persist report")?;
    println!("Final score: {}/{}", report.correct, report.total);
    println!("Report written to {}", path.display());
    Ok(())
}
