//! Wage normaliser (`ETCL`, `EAES_OCUPACION`, `EAES_PERCENTILES`).
//!
//! Every wage series lands under one indicator. The sector column is left
//! empty for this family.

use ine_core::{
  dimension::NewDimension,
  fact::WageFact,
  series::RawSeries,
  source::SourceCode,
  store::DimensionStore,
};

use crate::{Error, Result, period::resolve_period};

pub const INDICATOR: &str = "Salario_Anual_Ocupacion";
pub const UNIT: &str = "Euros";

/// Used when a series name places no geography.
pub const DEFAULT_GEOGRAPHY: &str = "Total Nacional";

pub async fn normalize<S: DimensionStore>(
  store: &S,
  code: SourceCode,
  batch: &[RawSeries],
) -> Result<Vec<WageFact>> {
  let mut rows = Vec::new();

  for series in batch {
    let meta = ine_series::decode(code, &series.name)?;
    let geography = meta.geography.as_deref().unwrap_or(DEFAULT_GEOGRAPHY);

    let geography_id = store
      .get_or_create(NewDimension::geography(geography))
      .await
      .map_err(Error::store)?;
    let indicator_id = store
      .get_or_create(NewDimension::indicator(INDICATOR, UNIT))
      .await
      .map_err(Error::store)?;

    for obs in &series.data {
      let period_id = resolve_period(store, obs.year, obs.period_code).await?;
      rows.push(WageFact {
        period_id,
        indicator_id,
        geography_id,
        sex: meta.sex.clone(),
        sector: None,
        occupation: meta.occupation.clone(),
        value: obs.value,
      });
    }
  }

  Ok(rows)
}
