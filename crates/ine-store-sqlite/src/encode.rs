//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Period dates are stored as `YYYY-MM-DD` strings so they sort and compare
//! lexically.

use chrono::NaiveDate;
use ine_core::dimension::Period;

use crate::{Error, Result};

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Raw row types ───────────────────────────────────────────────────────────

/// A `tbl_periodo` row exactly as read from SQLite.
pub struct RawPeriod {
  pub period_id: i64,
  pub year:      i32,
  pub month:     u32,
  pub quarter:   Option<i64>,
  pub iso_date:  String,
}

impl RawPeriod {
  pub fn into_period(self) -> Result<Period> {
    Ok(Period {
      period_id: self.period_id,
      year:      self.year,
      month:     self.month,
      quarter:   self.quarter,
      date:      decode_date(&self.iso_date)?,
    })
  }
}
