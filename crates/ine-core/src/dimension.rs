//! Dimension tables — geography, indicator and period lookups.
//!
//! Each dimension row is created once, on first reference, and is never
//! updated afterwards. The lookup column is the row's natural key.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which lookup table a dimension belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionKind {
  Geography,
  Indicator,
  Period,
}

impl DimensionKind {
  /// Short name used in the `tbl_<kind>` / `id_<kind>` naming convention.
  pub fn stem(self) -> &'static str {
    match self {
      Self::Geography => "geografia",
      Self::Indicator => "indicador",
      Self::Period => "periodo",
    }
  }

  pub fn table(self) -> &'static str {
    match self {
      Self::Geography => "tbl_geografia",
      Self::Indicator => "tbl_indicador",
      Self::Period => "tbl_periodo",
    }
  }

  pub fn id_column(self) -> &'static str {
    match self {
      Self::Geography => "id_geografia",
      Self::Indicator => "id_indicador",
      Self::Period => "id_periodo",
    }
  }

  /// The unique column a get-or-create matches on.
  pub fn lookup_column(self) -> &'static str {
    match self {
      Self::Geography | Self::Indicator => "nombre",
      Self::Period => "fecha_iso",
    }
  }
}

/// A calendar period ready for insertion into `tbl_periodo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPeriod {
  pub year:    i32,
  /// 1-based calendar month.
  pub month:   u32,
  /// The raw period code the month was derived from, if any.
  pub quarter: Option<i64>,
  /// Always the first day of `month`.
  pub date:    NaiveDate,
}

impl NewPeriod {
  /// `YYYY-MM-01`; the period's identity.
  pub fn iso_date(&self) -> String { self.date.format("%Y-%m-%d").to_string() }
}

/// A persisted `tbl_periodo` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
  pub period_id: i64,
  pub year:      i32,
  pub month:     u32,
  pub quarter:   Option<i64>,
  pub date:      NaiveDate,
}

/// Input to [`crate::store::DimensionStore::get_or_create`].
///
/// Only the lookup value decides identity; the remaining fields are stored
/// when the row is first inserted and ignored on every later lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewDimension {
  Geography { name: String },
  Indicator { name: String, unit: String },
  Period(NewPeriod),
}

impl NewDimension {
  pub fn geography(name: impl Into<String>) -> Self {
    Self::Geography { name: name.into() }
  }

  pub fn indicator(name: impl Into<String>, unit: impl Into<String>) -> Self {
    Self::Indicator { name: name.into(), unit: unit.into() }
  }

  pub fn kind(&self) -> DimensionKind {
    match self {
      Self::Geography { .. } => DimensionKind::Geography,
      Self::Indicator { .. } => DimensionKind::Indicator,
      Self::Period(_) => DimensionKind::Period,
    }
  }

  /// Value matched against [`DimensionKind::lookup_column`].
  pub fn lookup_value(&self) -> String {
    match self {
      Self::Geography { name } | Self::Indicator { name, .. } => name.clone(),
      Self::Period(p) => p.iso_date(),
    }
  }
}
