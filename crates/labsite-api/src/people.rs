//! Handlers for `/people` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/people` | All lab members in insertion order |
//! | `POST`   | `/people` | Body: person without `id`; returns 201 + record |
//! | `GET`    | `/people/:id` | 404 if not found |
//! | `PATCH`  | `/people/:id` | Merge partial; 204 even when `id` is absent |
//! | `DELETE` | `/people/:id` | 204 even when `id` is absent |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use labsite_core::{
  EntityId, SnapshotStore,
  person::{NewPerson, Person, PersonPatch},
};
use labsite_store::ContentStore;

use crate::error::ApiError;

/// `GET /people`
pub async fn list<B>(State(store): State<ContentStore<B>>) -> Json<Vec<Person>>
where
  B: SnapshotStore + 'static,
{
  Json(store.people())
}

/// `POST /people`
pub async fn create<B>(
  State(store): State<ContentStore<B>>,
  Json(body): Json<NewPerson>,
) -> impl IntoResponse
where
  B: SnapshotStore + 'static,
{
  (StatusCode::CREATED, Json(store.add_person(body)))
}

/// `GET /people/:id`
pub async fn get_one<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
) -> Result<Json<Person>, ApiError>
where
  B: SnapshotStore + 'static,
{
  store
    .people()
    .into_iter()
    .find(|p| p.id == id)
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("person {id} not found")))
}

/// `PATCH /people/:id`
pub async fn update<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
  Json(patch): Json<PersonPatch>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.update_person(id, patch);
  StatusCode::NO_CONTENT
}

/// `DELETE /people/:id`
pub async fn remove<B>(
  State(store): State<ContentStore<B>>,
  Path(id): Path<EntityId>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.delete_person(id);
  StatusCode::NO_CONTENT
}
