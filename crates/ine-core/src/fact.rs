//! Fact rows — one normalised observation tied to dimension ids.
//!
//! Facts are append-only. There is no update or delete path; re-ingesting the
//! same raw batch appends the rows again.

use serde::{Deserialize, Serialize};

/// A row for `T_precios`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceFact {
  pub period_id:    i64,
  pub indicator_id: i64,
  pub geography_id: i64,
  /// Expenditure category (`categoria_gasto`).
  pub category:     Option<String>,
  pub value:        Option<f64>,
}

/// A row for `T_salarios`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageFact {
  pub period_id:    i64,
  pub indicator_id: i64,
  pub geography_id: i64,
  pub sex:          Option<String>,
  /// Activity sector (`sector_cnae`). Present in the schema for sector-level
  /// sources; always `None` for the wage family as ingested today.
  pub sector:       Option<String>,
  pub occupation:   Option<String>,
  pub value:        Option<f64>,
}

/// A row for `T_empleo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentFact {
  pub period_id:     i64,
  pub indicator_id:  i64,
  pub geography_id:  i64,
  pub sex:           Option<String>,
  pub age_group:     Option<String>,
  pub schedule_type: Option<String>,
  pub contract_type: Option<String>,
  pub value:         Option<f64>,
}

/// The fact table a batch of rows lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactTable {
  Prices,
  Wages,
  Employment,
}

impl FactTable {
  pub fn table(self) -> &'static str {
    match self {
      Self::Prices => "T_precios",
      Self::Wages => "T_salarios",
      Self::Employment => "T_empleo",
    }
  }
}

/// The output of one dispatcher call. The shape is fixed per family.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FactRows {
  #[default]
  Empty,
  Prices(Vec<PriceFact>),
  Wages(Vec<WageFact>),
  Employment(Vec<EmploymentFact>),
}

impl FactRows {
  pub fn len(&self) -> usize {
    match self {
      Self::Empty => 0,
      Self::Prices(rows) => rows.len(),
      Self::Wages(rows) => rows.len(),
      Self::Employment(rows) => rows.len(),
    }
  }

  pub fn is_empty(&self) -> bool { self.len() == 0 }

  /// Destination table, or `None` for [`FactRows::Empty`].
  pub fn table(&self) -> Option<FactTable> {
    match self {
      Self::Empty => None,
      Self::Prices(_) => Some(FactTable::Prices),
      Self::Wages(_) => Some(FactTable::Wages),
      Self::Employment(_) => Some(FactTable::Employment),
    }
  }
}
