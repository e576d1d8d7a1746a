//! The `DimensionStore` and `FactSink` traits.
//!
//! Both are implemented by storage backends (e.g. `ine-store-sqlite`). The
//! ingestion layer depends on these abstractions, not on any concrete backend.

use std::future::Future;

use crate::{dimension::NewDimension, fact::FactRows};

/// Idempotent get-or-create over the geography, indicator and period lookup
/// tables.
///
/// Implementations must guarantee that a lookup value is never inserted
/// twice: the first call for a value inserts one row, every later call
/// returns that row's id and inserts nothing. Auxiliary fields (indicator
/// unit, period year/month/quarter) are fixed by the first insert.
pub trait DimensionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return the id of the row whose lookup column equals
  /// `dimension.lookup_value()`, inserting it first if absent.
  fn get_or_create(
    &self,
    dimension: NewDimension,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;
}

/// Bulk, append-only writer for normalised fact rows.
pub trait FactSink: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Append every row in `rows` to its fact table and return the number of
  /// rows written. [`FactRows::Empty`] is a no-op.
  fn insert_facts(
    &self,
    rows: FactRows,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
