//! Error type for `ine-ingest`.

use ine_core::source::SourceCode;
use ine_series::layout::Field;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A series name did not match its code's layout. Aborts the batch.
  #[error("decode error: {0}")]
  Decode(#[from] ine_series::Error),

  #[error("{code} series {name:?} carries no {field}")]
  MissingField {
    code:  SourceCode,
    name:  String,
    field: Field,
  },

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
