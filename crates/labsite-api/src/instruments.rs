//! Handlers for `/instruments` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/instruments` | All records in insertion order |
//! | `POST`   | `/instruments` | Body: record without `id`; returns 201 + record |
//! | `GET`    | `/instruments/:id` | 404 if not found |
//! | `PATCH`  | `/instruments/:id` | Merge partial; 204 even when `id` is absent |
//! | `DELETE` | `/instruments/:id` | 204 even when `id` is absent |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use labsite_core::{
  EntityId, SnapshotStore,
  instrument::{Instrument, InstrumentPatch, NewInstrument},
};
use labsite_store::ContentStore;

use crate::error::ApiError;

/// `GET /instruments`
pub async fn list<B>(State(store): State<ContentStore<B>>) -> Json<Vec<Instrument>>
where
  B: SnapshotStore + 'static,
{
  Json(store.instruments())
}

/// `POST /instruments`
pub async fn create<B>(
  State(store): State<ContentStore<B>>,
  Json(body): Json<NewInstrument>,
) -> impl IntoResponse
where
  B: SnapshotStore + 'static,
{
  (StatusCode::CREATED, Json(store.add_instrument(body)))
}

/// `GET /instruments/:id`
pub async fn get_one<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
) -> Result<Json<Instrument>, ApiError>
where
  B: SnapshotStore + 'static,
{
  store
    .instruments()
    .into_iter()
    .find(|r| r.id == id)
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("instrument {id} not found")))
}

/// `PATCH /instruments/:id`
pub async fn update<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
  Json(patch): Json<InstrumentPatch>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.update_instrument(id, patch);
  StatusCode::NO_CONTENT
}

/// `DELETE /instruments/:id`
pub async fn remove<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.delete_instrument(id);
  StatusCode::NO_CONTENT
}
