//! Period derivation from `(year, period code)` pairs.
//!
//! Quarterly series carry codes 19..22; anything else (annual series, or no
//! code at all) is pinned to January.

use chrono::NaiveDate;
use ine_core::dimension::NewPeriod;

use crate::{Error, Result};

/// Period code → first calendar month of the quarter.
pub const QUARTER_MONTHS: [(i64, u32); 4] = [(19, 1), (20, 4), (21, 7), (22, 10)];

pub fn month_for(period_code: Option<i64>) -> u32 {
  period_code
    .and_then(|code| {
      QUARTER_MONTHS
        .iter()
        .find(|&&(c, _)| c == code)
        .map(|&(_, month)| month)
    })
    .unwrap_or(1)
}

pub(crate) fn derive(year: i32, period_code: Option<i64>) -> Result<NewPeriod> {
  let month = month_for(period_code);
  let date = NaiveDate::from_ymd_opt(year, month, 1)
    .ok_or(Error::InvalidPeriod { year, month })?;

  Ok(NewPeriod { year, month, quarter: period_code, date })
}
