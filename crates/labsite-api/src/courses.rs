//! Handlers for `/courses` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/courses` | All records in insertion order |
//! | `POST`   | `/courses` | Body: record without `id`; returns 201 + record |
//! | `GET`    | `/courses/:id` | 404 if not found |
//! | `PATCH`  | `/courses/:id` | Merge partial; 204 even when `id` is absent |
//! | `DELETE` | `/courses/:id` | 204 even when `id` is absent |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use labsite_core::{
  EntityId, SnapshotStore,
  course::{Course, CoursePatch, NewCourse},
};
use labsite_store::ContentStore;

use crate::error::ApiError;

/// `GET /courses`
pub async fn list<B>(State(store): State<ContentStore<B>>) -> Json<Vec<Course>>
where
  B: SnapshotStore + 'static,
{
  Json(store.courses())
}

/// `POST /courses`
pub async fn create<B>(
  State(store): State<ContentStore<B>>,
  Json(body): Json<NewCourse>,
) -> impl IntoResponse
where
  B: SnapshotStore + 'static,
{
  (StatusCode::CREATED, Json(store.add_course(body)))
}

/// `GET /courses/:id`
pub async fn get_one<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
) -> Result<Json<Course>, ApiError>
where
  B: SnapshotStore + 'static,
{
  store
    .courses()
    .into_iter()
    .find(|r| r.id == id)
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("course {id} not found")))
}

/// `PATCH /courses/:id`
pub async fn update<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
  Json(patch): Json<CoursePatch>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.update_course(id, patch);
  StatusCode::NO_CONTENT
}

/// `DELETE /courses/:id`
pub async fn remove<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.delete_course(id);
  StatusCode::NO_CONTENT
}
