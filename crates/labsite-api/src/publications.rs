//! Handlers for `/publications` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/publications` | Optional `?kind=journal\|conference\|book-chapter\|event` |
//! | `POST`   | `/publications` | Body: publication without `id` |
//! | `GET`    | `/publications/:id` | 404 if not found |
//! | `PATCH`  | `/publications/:id` | Merge partial; 204 even when absent |
//! | `DELETE` | `/publications/:id` | 204 even when absent |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use labsite_core::{
  EntityId, SnapshotStore,
  publication::{
    NewPublication, Publication, PublicationKind, PublicationPatch,
  },
};
use labsite_store::ContentStore;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub kind: Option<PublicationKind>,
}

/// `GET /publications[?kind=<kind>]`
pub async fn list<B>(
  State(store): State<ContentStore<B>>,
  Query(params): Query<ListParams>,
) -> Json<Vec<Publication>>
where
  B: SnapshotStore + 'static,
{
  Json(match params.kind {
    Some(kind) => store.publications_by_kind(kind),
    None => store.publications(),
  })
}

/// `POST /publications`
pub async fn create<B>(
  State(store): State<ContentStore<B>>,
  Json(body): Json<NewPublication>,
) -> impl IntoResponse
where
  B: SnapshotStore + 'static,
{
  (StatusCode::CREATED, Json(store.add_publication(body)))
}

/// `GET /publications/:id`
pub async fn get_one<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
) -> Result<Json<Publication>, ApiError>
where
  B: SnapshotStore + 'static,
{
  store
    .publications()
    .into_iter()
    .find(|p| p.id == id)
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("publication {id} not found")))
}

/// `PATCH /publications/:id`
pub async fn update<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
  Json(patch): Json<PublicationPatch>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.update_publication(id, patch);
  StatusCode::NO_CONTENT
}

/// `DELETE /publications/:id`
pub async fn remove<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.delete_publication(id);
  StatusCode::NO_CONTENT
}
