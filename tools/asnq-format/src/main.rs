//! ASNQ Formatter
//!
//! Converts a Natural Questions JSON Lines file into tab-separated
//! `question / answer / annotation` rows, one per candidate long answer.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use asnq_core::{Pipeline, PipelineConfig};
use clap::Parser;
use tracing::info;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "asnq-format")]
#[command(about = "Convert Natural Questions records into ASNQ-style TSV rows")]
#[command(version)]
struct Cli {
    /// Path of a JSON Lines file to convert
    #[arg(short, long)]
    file: PathBuf,

    /// Path to append the formatted rows to
    /// (default: <data-dir>/<input stem>_ansq_formatted.tsv)
    #[arg(short, long, alias = "output_file")]
    output_file: Option<PathBuf>,

    /// Base directory for derived output files
    #[arg(short = 'D', long)]
    data_dir: Option<PathBuf>,

    /// Print each record's extracted candidates as JSON instead of writing rows
    #[arg(long)]
    print_candidates: bool,
}

impl Cli {
    fn config(&self) -> PipelineConfig {
        match &self.data_dir {
            Some(dir) => PipelineConfig::new().with_data_dir(dir),
            None => PipelineConfig::new(),
        }
    }
}

fn print_candidates(pipeline: &Pipeline, input: &Path) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for record in pipeline.extracted(input)? {
        let record = record?;
        serde_json::to_writer(&mut out, &record)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let pipeline = Pipeline::new(cli.config()).context("Failed to build pipeline")?;

    if cli.print_candidates {
        return print_candidates(&pipeline, &cli.file)
            .with_context(|| format!("Failed to read {}", cli.file.display()));
    }

    let output = cli
        .output_file
        .clone()
        .unwrap_or_else(|| pipeline.config().default_output_path(&cli.file));

    info!("Converting {} -> {}", cli.file.display(), output.display());
    let summary = pipeline
        .run(&cli.file, &output)
        .with_context(|| format!("Failed to convert {}", cli.file.display()))?;

    println!("{summary} to {}", output.display());
    Ok(())
}
