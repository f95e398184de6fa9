//! Handlers for `/alumni` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/alumni` | All records in insertion order |
//! | `POST`   | `/alumni` | Body: record without `id`; returns 201 + record |
//! | `GET`    | `/alumni/:id` | 404 if not found |
//! | `PATCH`  | `/alumni/:id` | Merge partial; 204 even when `id` is absent |
//! | `DELETE` | `/alumni/:id` | 204 even when `id` is absent |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use labsite_core::{
  EntityId, SnapshotStore,
  alumni::{Alumni, AlumniPatch, NewAlumni},
};
use labsite_store::ContentStore;

use crate::error::ApiError;

/// `GET /alumni`
pub async fn list<B>(State(store): State<ContentStore<B>>) -> Json<Vec<Alumni>>
where
  B: SnapshotStore + 'static,
{
  Json(store.alumni())
}

/// `POST /alumni`
pub async fn create<B>(
  State(store): State<ContentStore<B>>,
  Json(body): Json<NewAlumni>,
) -> impl IntoResponse
where
  B: SnapshotStore + 'static,
{
  (StatusCode::CREATED, Json(store.add_alumni(body)))
}

/// `GET /alumni/:id`
pub async fn get_one<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
) -> Result<Json<Alumni>, ApiError>
where
  B: SnapshotStore + 'static,
{
  store
    .alumni()
    .into_iter()
    .find(|r| r.id == id)
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("alumni record {id} not found")))
}

/// `PATCH /alumni/:id`
pub async fn update<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
  Json(patch): Json<AlumniPatch>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.update_alumni(id, patch);
  StatusCode::NO_CONTENT
}

/// `DELETE /alumni/:id`
pub async fn remove<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.delete_alumni(id);
  StatusCode::NO_CONTENT
}
