// src/bin/generate_periodic_table.rs
//
// Writes the element property table the viewer reads at startup.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use poscar3d::generate::{build_seeded, DEFAULT_SEED};
use poscar3d::io;
use poscar3d::utils::logger;

#[derive(Parser, Debug)]
#[command(name = "generate_periodic_table", version, about = "Generate the element property table")]
struct Args {
  /// Output path
  #[arg(short, long, default_value = "atomic_data.json")]
  output: PathBuf,

  /// Seed for the per-element colors
  #[arg(long, default_value_t = DEFAULT_SEED)]
  seed: u64,

  /// Increase logging (-v, -vv, -vvv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn main() -> anyhow::Result<()> {
  let args = Args::parse();
  // Warnings about skipped elements must always be visible.
  logger::init(logger::level_for(args.verbose.max(1)))
    .map_err(|e| anyhow::anyhow!("could not install logger: {}", e))?;

  let generated = build_seeded(args.seed);
  if !generated.skipped.is_empty() {
    log::warn!(
      "{} element(s) skipped: {}",
      generated.skipped.len(),
      generated
        .skipped
        .iter()
        .map(|e| e.symbol.as_str())
        .collect::<Vec<_>>()
        .join(", ")
    );
  }

  io::elements::save(&args.output, &generated.table)
    .with_context(|| format!("writing {:?}", args.output))?;

  log::info!("Atomic data JSON file has been created.");
  Ok(())
}
