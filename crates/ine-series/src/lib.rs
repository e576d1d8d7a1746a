//! Series-name codec for INE statistical series.
//!
//! Decodes the dot-delimited series names into typed [`SeriesMetadata`] and
//! derives calendar periods from period codes. Pure synchronous; no database
//! dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! use ine_core::source::SourceCode;
//! use ine_series::{decode, layout::Field};
//!
//! let meta = decode(SourceCode::Ipc, "Nacional . IPC General . Indice").unwrap();
//! assert_eq!(meta.get(Field::Category), Some("IPC General"));
//! ```

mod decode;
pub mod error;
pub mod layout;
mod period;

pub use decode::SeriesMetadata;
pub use error::{Error, Result};
use ine_core::{dimension::NewPeriod, source::SourceCode};
pub use period::{QUARTER_MONTHS, month_for};

// ─── Public API
// ───────────────────────────────────────────────────────────────

/// Decode `name` using the segment layout of `code`.
///
/// Fails with [`Error::MalformedSeriesName`] when `name` has fewer segments
/// than the layout references.
pub fn decode(code: SourceCode, name: &str) -> Result<SeriesMetadata> {
  decode::decode(code, name)
}

/// Like [`decode`], but takes a raw source-code token. An unrecognised token
/// yields empty metadata rather than an error.
pub fn decode_token(token: &str, name: &str) -> Result<SeriesMetadata> {
  match SourceCode::parse_token(token) {
    Ok(code) => decode::decode(code, name),
    Err(_) => Ok(SeriesMetadata::default()),
  }
}

/// Derive the period row for an observation: month from the period code,
/// day fixed at 1.
pub fn derive_period(year: i32, period_code: Option<i64>) -> Result<NewPeriod> {
  period::derive(year, period_code)
}
