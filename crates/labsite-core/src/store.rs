//! The `SnapshotStore` trait and the in-memory reference backend.
//!
//! The trait is implemented by persistence adapters (`labsite-store-fs`,
//! `labsite-store-http`). The content store depends on this abstraction, not
//! on any concrete backend.

use std::{convert::Infallible, future::Future, sync::Mutex};

use crate::snapshot::Snapshot;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over durable snapshot storage.
///
/// Adapters always move whole snapshots: `save` replaces the previous one,
/// `load` returns the last one saved. A missing or unreadable snapshot is not
/// an error — `load` reports it as `Ok(None)` and the caller falls back to
/// seed data. `Err` is reserved for genuine I/O failures worth surfacing to
/// an operator.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes.
pub trait SnapshotStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return the last durably stored snapshot, or `Ok(None)` if none exists
  /// or the stored one is unusable.
  fn load(
    &self,
  ) -> impl Future<Output = Result<Option<Snapshot>, Self::Error>> + Send + '_;

  /// Durably store `snapshot`, replacing any previous one.
  fn save<'a>(
    &'a self,
    snapshot: &'a Snapshot,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

// ─── In-memory backend ───────────────────────────────────────────────────────

/// A [`SnapshotStore`] that keeps the snapshot in process memory.
///
/// Nothing survives the process; useful for tests and for embedding the
/// content store without durability. Cloning is cheap — clones share the
/// same stored snapshot.
#[derive(Clone, Default)]
pub struct MemoryStore {
  inner: std::sync::Arc<Mutex<Option<Snapshot>>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }
}

impl SnapshotStore for MemoryStore {
  type Error = Infallible;

  async fn load(&self) -> Result<Option<Snapshot>, Infallible> {
    Ok(self.inner.lock().expect("memory store mutex poisoned").clone())
  }

  async fn save(&self, snapshot: &Snapshot) -> Result<(), Infallible> {
    *self.inner.lock().expect("memory store mutex poisoned") =
      Some(snapshot.clone());
    Ok(())
  }
}
