//! Handlers for `/news` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/news` | All records in insertion order |
//! | `POST`   | `/news` | Body: record without `id`; returns 201 + record |
//! | `GET`    | `/news/:id` | 404 if not found |
//! | `PATCH`  | `/news/:id` | Merge partial; 204 even when `id` is absent |
//! | `DELETE` | `/news/:id` | 204 even when `id` is absent |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use labsite_core::{
  EntityId, SnapshotStore,
  news::{NewNewsItem, NewsItem, NewsItemPatch},
};
use labsite_store::ContentStore;

use crate::error::ApiError;

/// `GET /news`
pub async fn list<B>(State(store): State<ContentStore<B>>) -> Json<Vec<NewsItem>>
where
  B: SnapshotStore + 'static,
{
  Json(store.news())
}

/// `POST /news`
pub async fn create<B>(
  State(store): State<ContentStore<B>>,
  Json(body): Json<NewNewsItem>,
) -> impl IntoResponse
where
  B: SnapshotStore + 'static,
{
  (StatusCode::CREATED, Json(store.add_news_item(body)))
}

/// `GET /news/:id`
pub async fn get_one<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
) -> Result<Json<NewsItem>, ApiError>
where
  B: SnapshotStore + 'static,
{
  store
    .news()
    .into_iter()
    .find(|r| r.id == id)
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("news item {id} not found")))
}

/// `PATCH /news/:id`
pub async fn update<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
  Json(patch): Json<NewsItemPatch>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.update_news_item(id, patch);
  StatusCode::NO_CONTENT
}

/// `DELETE /news/:id`
pub async fn remove<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.delete_news_item(id);
  StatusCode::NO_CONTENT
}
