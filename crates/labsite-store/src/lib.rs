//! The labsite content store — in-memory entity collections behind a shared
//! handle, with change subscription and asynchronous snapshot persistence.
//!
//! One [`ContentStore`] is constructed per running application and cloned
//! into every consumer (HTTP handlers, background jobs). Mutations are
//! synchronous and immediately visible through every clone; durability is
//! handled by a background task writing full snapshots to a
//! [`SnapshotStore`](labsite_core::SnapshotStore) backend.

mod persist;
mod store;

pub use persist::SaveOutcome;
pub use store::ContentStore;

#[cfg(test)]
mod tests;
