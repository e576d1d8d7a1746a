//! Runtime configuration, layered from an optional TOML file and `INE_*`
//! environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// One raw batch to ingest: a source-code token and the JSON file holding
/// its series.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BatchSpec {
  /// Kept as the raw token so unknown codes reach the dispatcher's soft
  /// failure path instead of failing config parsing.
  pub code: String,
  pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  #[serde(default)]
  pub batches:    Vec<BatchSpec>,
}

fn default_store_path() -> PathBuf { PathBuf::from("proyecto_datos.db") }

impl IngestConfig {
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("INE"))
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?;

    settings
      .try_deserialize()
      .context("failed to deserialise IngestConfig")
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
