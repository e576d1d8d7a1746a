//! `ine` — load INE statistical series into a SQLite star schema.
//!
//! # Usage
//!
//! ```text
//! ine ingest --code IPC raw/ipc.json
//! ine --config ine.toml run
//! ine summary
//! ```

mod run;
mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use settings::{IngestConfig, expand_tilde};
use ine_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about = "INE series ingester")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "ine.toml")]
  config: PathBuf,

  /// SQLite database path; overrides `store_path` from the config.
  #[arg(long, env = "INE_STORE")]
  store: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Ingest raw JSON files for a single source code.
  Ingest {
    /// Source code token, e.g. `IPC` or `TASA_PARO`.
    #[arg(long)]
    code:  String,
    #[arg(required = true)]
    files: Vec<PathBuf>,
  },
  /// Ingest every batch listed in the configuration file.
  Run,
  /// Print row counts for every table.
  Summary,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let cfg = IngestConfig::load(&cli.config)?;

  let store_path = expand_tilde(cli.store.as_ref().unwrap_or(&cfg.store_path));
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  match cli.command {
    Command::Ingest { code, files } => {
      let mut total = 0;
      for path in &files {
        total += run::ingest_file(&store, &code, path).await?;
      }
      tracing::info!(files = files.len(), rows = total, "ingest complete");
    }
    Command::Run => {
      if cfg.batches.is_empty() {
        tracing::warn!(config = %cli.config.display(), "no batches configured");
      }
      let total = run::run_batches(&store, &cfg.batches).await?;
      tracing::info!(batches = cfg.batches.len(), rows = total, "run complete");
    }
    Command::Summary => {
      for (table, rows) in run::summary(&store).await? {
        println!("{table:<14} {rows:>10}");
      }
    }
  }

  Ok(())
}
