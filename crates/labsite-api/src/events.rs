//! Handlers for `/events` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/events` | All records in insertion order |
//! | `POST`   | `/events` | Body: record without `id`; returns 201 + record |
//! | `GET`    | `/events/:id` | 404 if not found |
//! | `PATCH`  | `/events/:id` | Merge partial; 204 even when `id` is absent |
//! | `DELETE` | `/events/:id` | 204 even when `id` is absent |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use labsite_core::{
  EntityId, SnapshotStore,
  event::{Event, EventPatch, NewEvent},
};
use labsite_store::ContentStore;

use crate::error::ApiError;

/// `GET /events`
pub async fn list<B>(State(store): State<ContentStore<B>>) -> Json<Vec<Event>>
where
  B: SnapshotStore + 'static,
{
  Json(store.events())
}

/// `POST /events`
pub async fn create<B>(
  State(store): State<ContentStore<B>>,
  Json(body): Json<NewEvent>,
) -> impl IntoResponse
where
  B: SnapshotStore + 'static,
{
  (StatusCode::CREATED, Json(store.add_event(body)))
}

/// `GET /events/:id`
pub async fn get_one<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
) -> Result<Json<Event>, ApiError>
where
  B: SnapshotStore + 'static,
{
  store
    .events()
    .into_iter()
    .find(|r| r.id == id)
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("event {id} not found")))
}

/// `PATCH /events/:id`
pub async fn update<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
  Json(patch): Json<EventPatch>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.update_event(id, patch);
  StatusCode::NO_CONTENT
}

/// `DELETE /events/:id`
pub async fn remove<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.delete_event(id);
  StatusCode::NO_CONTENT
}
