//! SQLite backend for the INE star schema.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a single dedicated
//! thread without blocking the async runtime. That thread is the only writer,
//! which keeps get-or-create free of lost-update races.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
