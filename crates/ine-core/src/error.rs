//! Error types for `ine-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown source code: {0:?}")]
  UnknownSourceCode(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
