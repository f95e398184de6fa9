//! HTTP backend for the labsite content store.
//!
//! Persists snapshots by speaking JSON to a remote labsite API
//! (`GET`/`PUT /api/snapshot`). Used when the admin panel runs against a
//! central server instead of a local file.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{HttpConfig, HttpStore};

#[cfg(test)]
mod tests;
