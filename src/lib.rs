pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::GeneratorConfig;
use crate::writer::Artifact;

pub fn run() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Codes(a) => {
            generate(&a.input, &[Artifact::Codes], a.output.as_deref(), &a.config)
        }
        Command::Messages(a) => {
            generate(&a.input, &[Artifact::Messages], a.output.as_deref(), &a.config)
        }
        Command::ShortMessages(a) => {
            generate(&a.input, &[Artifact::ShortMessages], a.output.as_deref(), &a.config)
        }
        Command::All(a) => generate(&a.input, &Artifact::ALL, Some(a.output.as_path()), &a.config),
        Command::Extract(a) => extract(&a.input, a.output.as_deref()),
    }
}

// Logs go to stderr: stdout may carry the generated file.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read the error table at `input` and write each of `artifacts`.
pub fn generate(
    input: &Path,
    artifacts: &[Artifact],
    out_dir: Option<&Path>,
    config: &GeneratorConfig,
) -> anyhow::Result<()> {
    // 1. ── Parse ──────────────────────────────────────────────────────
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("Reading {}", input.display()))?;
    let table = parser::load_from_json(&json)
        .with_context(|| format!("Parsing error table {}", input.display()))?;
    info!("Loaded {} error records", table.records.len());

    // 2. ── Process ────────────────────────────────────────────────────
    let processed = processor::run(&table, config);

    // 3. ── Write outputs ──────────────────────────────────────────────
    for &artifact in artifacts {
        writer::emit(artifact, &processed, config, out_dir)?;
    }

    Ok(())
}

/// Read a severity dump at `input` and write the normalized error table.
pub fn extract(input: &Path, out_dir: Option<&Path>) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("Reading {}", input.display()))?;
    let dump = parser::load_severity_dump(&json)
        .with_context(|| format!("Parsing severity dump {}", input.display()))?;

    let table = processor::severity::extract(&dump);
    info!(
        "Extracted {} of {} error records",
        table.records.len(),
        dump.entries.len()
    );

    writer::write_output(writer::json::TABLE_FILE, out_dir, |w| {
        writer::json::write_table(w, &table)
    })
    .with_context(|| format!("Writing {}", writer::json::TABLE_FILE))
}
