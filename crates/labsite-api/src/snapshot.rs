//! Whole-snapshot transfer endpoints.
//!
//! `GET /snapshot` serves the complete current state; `PUT /snapshot`
//! replaces it. This pair is the server side of
//! `labsite-store-http`'s `HttpStore`, and doubles as export/import for
//! admin backups.

use axum::{Json, extract::State, http::StatusCode};
use labsite_core::{Snapshot, SnapshotStore};
use labsite_store::ContentStore;

/// `GET /snapshot`
pub async fn fetch<B>(State(store): State<ContentStore<B>>) -> Json<Snapshot>
where
  B: SnapshotStore + 'static,
{
  Json(store.snapshot())
}

/// `PUT /snapshot`
pub async fn replace<B>(
  State(store): State<ContentStore<B>>,
  Json(snapshot): Json<Snapshot>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.replace_snapshot(snapshot);
  StatusCode::NO_CONTENT
}
