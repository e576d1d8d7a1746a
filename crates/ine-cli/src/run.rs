//! Batch ingestion: read raw JSON, normalise, bulk insert.

use std::path::Path;

use anyhow::Context as _;
use ine_core::{
  dimension::DimensionKind,
  fact::FactTable,
  series::RawSeries,
  store::FactSink,
};
use ine_store_sqlite::SqliteStore;
use serde::Deserialize;

use crate::settings::BatchSpec;

/// Raw files hold either the API's array of series or a single series.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
  Many(Vec<RawSeries>),
  One(RawSeries),
}

pub fn read_batch(path: &Path) -> anyhow::Result<Vec<RawSeries>> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("reading {}", path.display()))?;
  let payload: Payload = serde_json::from_str(&raw)
    .with_context(|| format!("parsing series JSON in {}", path.display()))?;

  Ok(match payload {
    Payload::Many(series) => series,
    Payload::One(series) => vec![series],
  })
}

/// Ingest one file; returns the number of fact rows written.
pub async fn ingest_file(
  store: &SqliteStore,
  code: &str,
  path: &Path,
) -> anyhow::Result<usize> {
  let batch = read_batch(path)?;
  let rows = ine_ingest::process(store, code, &batch)
    .await
    .with_context(|| format!("processing {code} batch {}", path.display()))?;
  let written = store
    .insert_facts(rows)
    .await
    .with_context(|| format!("inserting {code} facts from {}", path.display()))?;

  tracing::info!(code, path = %path.display(), rows = written, "ingested batch");
  Ok(written)
}

/// Ingest every configured batch in order. The first decode or storage
/// failure aborts the run.
pub async fn run_batches(
  store: &SqliteStore,
  batches: &[BatchSpec],
) -> anyhow::Result<usize> {
  let mut total = 0;
  for spec in batches {
    total += ingest_file(store, &spec.code, &spec.path).await?;
  }
  Ok(total)
}

/// Row counts for every table, in schema order.
pub async fn summary(
  store: &SqliteStore,
) -> anyhow::Result<Vec<(&'static str, i64)>> {
  let mut counts = Vec::new();
  for kind in
    [DimensionKind::Geography, DimensionKind::Indicator, DimensionKind::Period]
  {
    counts.push((kind.table(), store.count(kind).await?));
  }
  for table in [FactTable::Prices, FactTable::Wages, FactTable::Employment] {
    counts.push((table.table(), store.fact_count(table).await?));
  }
  Ok(counts)
}
