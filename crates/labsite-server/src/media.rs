//! Media upload, serving and deletion.
//!
//! Uploads land in the configured media directory under a
//! uuid-prefixed name so repeated uploads of the same file never
//! collide. The returned URL is relative to this server.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/media/:filename` | Raw body; 201 + `{"url": ...}`, 413 past the cap |
//! | `GET`    | `/media/:filename` | 404 if absent |
//! | `DELETE` | `/media/:filename` | 204 even when absent |

use std::io::ErrorKind;

use axum::{
  Json,
  extract::{Path, State},
  http::{StatusCode, header},
  response::IntoResponse,
};
use bytes::Bytes;
use labsite_core::SnapshotStore;
use serde_json::json;
use uuid::Uuid;

use crate::{AppState, Error};

/// Reject names that could escape the media directory.
fn checked_name(name: &str) -> Result<&str, Error> {
  if name.is_empty()
    || name == "."
    || name == ".."
    || name.contains('/')
    || name.contains('\\')
  {
    return Err(Error::BadFileName(name.to_string()));
  }
  Ok(name)
}

/// `POST /media/:filename`
pub async fn upload<B>(
  State(state): State<AppState<B>>,
  Path(filename): Path<String>,
  body: Bytes,
) -> Result<impl IntoResponse, Error>
where
  B: SnapshotStore + 'static,
{
  let filename = checked_name(&filename)?;

  let limit = state.config.max_upload_bytes;
  if body.len() > limit {
    return Err(Error::UploadTooLarge { limit, actual: body.len() });
  }

  let stored = format!("{}-{filename}", Uuid::new_v4());
  let dir = &state.config.media_dir;
  tokio::fs::create_dir_all(dir).await?;
  tokio::fs::write(dir.join(&stored), &body).await?;

  tracing::info!(name = %stored, bytes = body.len(), "stored media file");
  Ok((
    StatusCode::CREATED,
    Json(json!({ "url": format!("/media/{stored}") })),
  ))
}

/// `GET /media/:filename`
pub async fn serve<B>(
  State(state): State<AppState<B>>,
  Path(filename): Path<String>,
) -> Result<impl IntoResponse, Error>
where
  B: SnapshotStore + 'static,
{
  let filename = checked_name(&filename)?;

  let bytes = tokio::fs::read(state.config.media_dir.join(filename))
    .await
    .map_err(|e| match e.kind() {
      ErrorKind::NotFound => Error::NotFound,
      _ => Error::Io(e),
    })?;

  Ok((
    [(header::CONTENT_TYPE, "application/octet-stream")],
    bytes,
  ))
}

/// `DELETE /media/:filename`
pub async fn remove<B>(
  State(state): State<AppState<B>>,
  Path(filename): Path<String>,
) -> Result<StatusCode, Error>
where
  B: SnapshotStore + 'static,
{
  let filename = checked_name(&filename)?;

  match tokio::fs::remove_file(state.config.media_dir.join(filename)).await {
    Ok(()) => {}
    Err(e) if e.kind() == ErrorKind::NotFound => {}
    Err(e) => return Err(Error::Io(e)),
  }
  Ok(StatusCode::NO_CONTENT)
}
