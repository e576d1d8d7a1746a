//! Period resolution: `(year, period code)` → `tbl_periodo` id.

use ine_core::{dimension::NewDimension, store::DimensionStore};

use crate::{Error, Result};

/// Derive the observation's `YYYY-MM-01` date and get-or-create its period
/// row. Year, month and period code are only stored on first insert.
pub async fn resolve_period<S: DimensionStore>(
  store: &S,
  year: i32,
  period_code: Option<i64>,
) -> Result<i64> {
  let period = ine_series::derive_period(year, period_code)?;
  store
    .get_or_create(NewDimension::Period(period))
    .await
    .map_err(Error::store)
}
