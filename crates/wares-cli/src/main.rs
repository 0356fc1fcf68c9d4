//! `wares-seed` — builds the bundled sample commerce database.
//!
//! # Usage
//!
//! ```
//! wares-seed                          # seeds database/sample.db
//! wares-seed --db-path /tmp/demo.db
//! wares-seed --config wares.toml
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use wares_core::Dataset;
use wares_store_sqlite::SqliteStore;

/// Target used when neither a flag nor a config file names one.
const DEFAULT_DB_PATH: &str = "database/sample.db";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "wares-seed",
  about = "Build the Wares sample commerce database"
)]
struct Args {
  /// Path to a TOML config file (db_path).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Where the database file should live.
  #[arg(long, env = "WARES_DB_PATH")]
  db_path: Option<PathBuf>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  db_path: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides the default.
  let db_path = args
    .db_path
    .or(file_cfg.db_path)
    .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

  let mut store = SqliteStore::open(&db_path)
    .with_context(|| format!("opening database at {}", db_path.display()))?;

  let report = store
    .seed(&Dataset::builtin())
    .context("seeding sample data")?;

  tracing::info!(
    path = %db_path.display(),
    tables = report.table_count(),
    rows = report.total_rows(),
    inserted = report.total_inserted(),
    "seed complete"
  );
  println!("{report}");

  Ok(())
}
