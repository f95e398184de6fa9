//! Core types and trait definitions for the labsite content store.
//!
//! This crate is deliberately free of HTTP, filesystem, and async-runtime
//! dependencies. All other crates depend on it; it depends on nothing
//! proprietary.

pub mod achievement;
pub mod alumni;
pub mod content;
pub mod course;
pub mod event;
pub mod instrument;
pub mod news;
pub mod person;
pub mod publication;
pub mod record;
pub mod seed;
pub mod snapshot;
pub mod store;

pub use record::EntityId;
pub use snapshot::Snapshot;
pub use store::{MemoryStore, SnapshotStore};
