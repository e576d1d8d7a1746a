//! Error types for the series-name codec.

use ine_core::source::SourceCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The name has fewer segments than the code's layout references. This
  /// means upstream data does not match the expected layout.
  #[error(
    "malformed {code} series name {name:?}: segment {index} requested, only \
     {segments} present"
  )]
  MalformedSeriesName {
    code:     SourceCode,
    name:     String,
    index:    usize,
    segments: usize,
  },

  #[error("invalid period: year {year}, month {month}")]
  InvalidPeriod { year: i32, month: u32 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
