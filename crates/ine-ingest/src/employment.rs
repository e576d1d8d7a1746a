//! Employment normaliser (`TASA_PARO`, `TEMPORALIDAD`).

use ine_core::{
  dimension::NewDimension,
  fact::EmploymentFact,
  series::RawSeries,
  source::SourceCode,
  store::DimensionStore,
};
use ine_series::layout::Field;

use crate::{Error, Result, dispatch::required, period::resolve_period};

pub const UNIT: &str = "%";

pub fn indicator_name(code: SourceCode) -> &'static str {
  if code == SourceCode::TasaParo { "Tasa_Paro" } else { "Temporalidad" }
}

pub async fn normalize<S: DimensionStore>(
  store: &S,
  code: SourceCode,
  batch: &[RawSeries],
) -> Result<Vec<EmploymentFact>> {
  let mut rows = Vec::new();

  for series in batch {
    let meta = ine_series::decode(code, &series.name)?;
    let geography = required(code, &series.name, Field::Geography, &meta)?;

    let geography_id = store
      .get_or_create(NewDimension::geography(geography))
      .await
      .map_err(Error::store)?;
    let indicator_id = store
      .get_or_create(NewDimension::indicator(indicator_name(code), UNIT))
      .await
      .map_err(Error::store)?;

    for obs in &series.data {
      let period_id = resolve_period(store, obs.year, obs.period_code).await?;
      rows.push(EmploymentFact {
        period_id,
        indicator_id,
        geography_id,
        sex: meta.sex.clone(),
        age_group: meta.age_group.clone(),
        schedule_type: meta.schedule_type.clone(),
        contract_type: meta.contract_type.clone(),
        value: obs.value,
      });
    }
  }

  Ok(rows)
}
