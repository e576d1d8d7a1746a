//! Ingestion pipeline for INE statistical series.
//!
//! Turns raw series batches into normalised fact rows, creating geography,
//! indicator and period dimension rows on first reference through any
//! [`ine_core::store::DimensionStore`]. Writing the facts themselves is the
//! caller's job (see [`ine_core::store::FactSink`]).
//!
//! Batches are processed series by series and observation by observation,
//! in input order. Geography and indicator are resolved once per series;
//! the period once per observation.

pub mod dispatch;
pub mod employment;
pub mod error;
pub mod period;
pub mod prices;
pub mod wages;

pub use dispatch::{process, process_code};
pub use error::{Error, Result};
pub use period::resolve_period;

#[cfg(test)]
mod tests;
