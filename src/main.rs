// src/main.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use genomic_datagen::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_RECORD_COUNT};
use genomic_datagen::{GeneratorConfig, OutputWriter, RecordGenerator};

/// Generate synthetic genomic records and save them as Parquet and JSON Lines
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of records to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_RECORD_COUNT)]
    count: usize,

    /// Seed for reproducible output (default: time + OS entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory for the output files, created if missing
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let args = Args::parse();
    tracing::debug!("{:?}", args);

    let config = GeneratorConfig {
        count: args.count,
        seed: args.seed,
        ..GeneratorConfig::default()
    };
    let mut generator =
        RecordGenerator::new(config).context("invalid generator configuration")?;
    let records = generator.generate();

    let paths = OutputWriter::new(&args.output_dir)
        .write_all(&records)
        .with_context(|| format!("failed to save records to {}", args.output_dir.display()))?;

    println!(
        "✅ Genomic data saved to '{}' and '{}'",
        paths.parquet.display(),
        paths.json_lines.display()
    );
    Ok(())
}
