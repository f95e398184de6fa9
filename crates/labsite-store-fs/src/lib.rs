//! JSON-file backend for the labsite content store.
//!
//! The snapshot lives in a single pretty-printed JSON file, written
//! atomically (temp file + rename) so a crash mid-save never leaves a
//! truncated snapshot behind.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::FileStore;
