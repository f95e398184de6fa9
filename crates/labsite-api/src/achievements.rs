//! Handlers for `/achievements` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/achievements` | All records in insertion order |
//! | `POST`   | `/achievements` | Body: record without `id`; returns 201 + record |
//! | `GET`    | `/achievements/:id` | 404 if not found |
//! | `PATCH`  | `/achievements/:id` | Merge partial; 204 even when `id` is absent |
//! | `DELETE` | `/achievements/:id` | 204 even when `id` is absent |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use labsite_core::{
  EntityId, SnapshotStore,
  achievement::{Achievement, AchievementPatch, NewAchievement},
};
use labsite_store::ContentStore;

use crate::error::ApiError;

/// `GET /achievements`
pub async fn list<B>(State(store): State<ContentStore<B>>) -> Json<Vec<Achievement>>
where
  B: SnapshotStore + 'static,
{
  Json(store.achievements())
}

/// `POST /achievements`
pub async fn create<B>(
  State(store): State<ContentStore<B>>,
  Json(body): Json<NewAchievement>,
) -> impl IntoResponse
where
  B: SnapshotStore + 'static,
{
  (StatusCode::CREATED, Json(store.add_achievement(body)))
}

/// `GET /achievements/:id`
pub async fn get_one<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
) -> Result<Json<Achievement>, ApiError>
where
  B: SnapshotStore + 'static,
{
  store
    .achievements()
    .into_iter()
    .find(|r| r.id == id)
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("achievement {id} not found")))
}

/// `PATCH /achievements/:id`
pub async fn update<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
  Json(patch): Json<AchievementPatch>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.update_achievement(id, patch);
  StatusCode::NO_CONTENT
}

/// `DELETE /achievements/:id`
pub async fn remove<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.delete_achievement(id);
  StatusCode::NO_CONTENT
}
