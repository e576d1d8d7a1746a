//! Core types and trait definitions for the INE star-schema ingester.
//!
//! This crate is deliberately free of database and I/O dependencies. The
//! codec, storage and ingestion crates all depend on it.

pub mod dimension;
pub mod error;
pub mod fact;
pub mod series;
pub mod source;
pub mod store;

pub use error::{Error, Result};
