//! Routes a `(source code, batch)` pair to its family's normaliser.

use ine_core::{
  fact::FactRows,
  series::RawSeries,
  source::{Family, SourceCode},
  store::DimensionStore,
};
use ine_series::{SeriesMetadata, layout::Field};

use crate::{Error, Result, employment, prices, wages};

/// Normalise `batch` for the source code named by `token`.
///
/// An empty batch is a no-op. An unrecognised token is reported and yields
/// [`FactRows::Empty`] so one bad code never sinks a multi-batch run.
pub async fn process<S: DimensionStore>(
  store: &S,
  token: &str,
  batch: &[RawSeries],
) -> Result<FactRows> {
  if batch.is_empty() {
    return Ok(FactRows::Empty);
  }

  let Ok(code) = SourceCode::parse_token(token) else {
    tracing::warn!(
      code = token,
      series = batch.len(),
      "source code not mapped, skipping batch"
    );
    return Ok(FactRows::Empty);
  };

  process_code(store, code, batch).await
}

/// Typed entry point for callers that already hold a [`SourceCode`].
pub async fn process_code<S: DimensionStore>(
  store: &S,
  code: SourceCode,
  batch: &[RawSeries],
) -> Result<FactRows> {
  if batch.is_empty() {
    return Ok(FactRows::Empty);
  }

  let rows = match code.family() {
    Family::Prices => {
      FactRows::Prices(prices::normalize(store, code, batch).await?)
    }
    Family::Wages => {
      FactRows::Wages(wages::normalize(store, code, batch).await?)
    }
    Family::Employment => {
      FactRows::Employment(employment::normalize(store, code, batch).await?)
    }
  };

  tracing::info!(
    %code,
    series = batch.len(),
    rows = rows.len(),
    "normalised batch"
  );
  Ok(rows)
}

pub(crate) fn required<'m>(
  code: SourceCode,
  name: &str,
  field: Field,
  meta: &'m SeriesMetadata,
) -> Result<&'m str> {
  meta.get(field).ok_or_else(|| Error::MissingField {
    code,
    name: name.to_owned(),
    field,
  })
}
