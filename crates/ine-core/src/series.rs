//! Raw series records as delivered by the statistics API.
//!
//! Field names follow the API's JSON (`Nombre`, `Data`, `Anyo`, ...). Unknown
//! keys are ignored so full API payloads can be fed in unchanged.

use serde::{Deserialize, Serialize};

/// One named time series: a dot-delimited name encoding its dimensions plus
/// the dated observations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
  #[serde(rename = "Nombre", default)]
  pub name: String,
  #[serde(rename = "Data", default)]
  pub data: Vec<Observation>,
}

/// A single dated value within a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
  #[serde(rename = "Anyo")]
  pub year:        i32,
  /// Period code (`19`..`22` for quarters). Absent for annual series.
  #[serde(rename = "FK_Periodo", default)]
  pub period_code: Option<i64>,
  /// Passed through untouched; `null` stays `None`.
  #[serde(rename = "Valor", default)]
  pub value:       Option<f64>,
}

impl RawSeries {
  pub fn new(name: impl Into<String>, data: Vec<Observation>) -> Self {
    Self { name: name.into(), data }
  }
}

impl Observation {
  pub fn new(year: i32, period_code: Option<i64>, value: Option<f64>) -> Self {
    Self { year, period_code, value }
  }
}
