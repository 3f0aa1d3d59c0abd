//! Row Samples
//!
//! Solves ball spacing rows and prints one result per line: the minimal
//! number of single-cell moves, or -1 when no evenly spaced layout fits.
//! Without arguments the built-in sample rows are solved.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spacing::prelude::*;

/// Rows solved when none are given on the command line.
const SAMPLE_ROWS: [&str; 4] = [".B...B.BB", "BB.B.BBB...", ".BBB.B", "......B..B"];

#[derive(Parser, Debug)]
#[command(name = "row-samples")]
#[command(about = "Minimal moves to space balls one empty cell apart")]
struct Cli {
    /// Rows to solve, e.g. `BB.B.BBB...`; the sample rows when omitted
    rows: Vec<String>,

    /// Configuration file (TOML, or YAML for .yaml/.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat a progression starting before the row as infeasible
    #[arg(long)]
    reject_negative_start: bool,

    /// Print solver progress
    #[arg(short, long)]
    verbose: bool,
}

fn build_solver(cli: &Cli) -> Result<SpacingSolver> {
    let mut config = match &cli.config {
        Some(path) => SpacingConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => spacing::config_or_default(spacing::CONFIG_FILE),
    };
    if cli.reject_negative_start {
        config = config.with_left_boundary(LeftBoundaryPolicy::Reject);
    }
    Ok(SpacingSolver::new(config))
}

fn run(cli: &Cli) -> Result<Vec<SpacingOutcome>> {
    let solver = build_solver(cli)?;
    let rows: Vec<&str> = if cli.rows.is_empty() {
        SAMPLE_ROWS.to_vec()
    } else {
        cli.rows.iter().map(String::as_str).collect()
    };

    rows.into_iter()
        .map(|row| {
            solver
                .solve_str(row)
                .with_context(|| format!("solving row {row:?}"))
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        spacing_console::init();
    }

    for outcome in run(&cli)? {
        println!("{}", outcome);
    }
    Ok(())
}
