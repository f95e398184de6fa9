//! HTTP server binary for the lab site.
//!
//! Mounts the content API from `labsite-api` under `/api`, adds media
//! upload and serving under `/media`, and persists everything through a
//! [`FileStore`](labsite_store_fs::FileStore) snapshot file.

pub mod error;
pub mod media;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use labsite_core::SnapshotStore;
use labsite_store::ContentStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
///
/// Every field has a default so the server runs with no config file at
/// all; any subset can be overridden from the file or from `LABSITE_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:             String,
  #[serde(default = "default_port")]
  pub port:             u16,
  /// Path of the JSON snapshot file.
  #[serde(default = "default_data_path")]
  pub data_path:        PathBuf,
  /// Directory uploaded media files are stored in.
  #[serde(default = "default_media_dir")]
  pub media_dir:        PathBuf,
  /// Upload size cap in bytes.
  #[serde(default = "default_max_upload_bytes")]
  pub max_upload_bytes: usize,
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8098 }
fn default_data_path() -> PathBuf { "labsite.json".into() }
fn default_media_dir() -> PathBuf { "media".into() }
fn default_max_upload_bytes() -> usize { 5 * 1024 * 1024 }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:             default_host(),
      port:             default_port(),
      data_path:        default_data_path(),
      media_dir:        default_media_dir(),
      max_upload_bytes: default_max_upload_bytes(),
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through the media handlers.
pub struct AppState<B: SnapshotStore> {
  pub store:  ContentStore<B>,
  pub config: Arc<ServerConfig>,
}

impl<B: SnapshotStore> Clone for AppState<B> {
  fn clone(&self) -> Self {
    Self {
      store:  self.store.clone(),
      config: Arc::clone(&self.config),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the complete application [`Router`].
pub fn router<B>(state: AppState<B>) -> Router
where
  B: SnapshotStore + 'static,
{
  // Accept bodies somewhat past the configured cap so oversized uploads
  // reach our handler and get the descriptive 413 instead of axum's.
  let body_limit = state.config.max_upload_bytes.saturating_mul(2);

  let api = labsite_api::api_router(state.store.clone());
  let media = Router::new()
    .route(
      "/media/{filename}",
      post(media::upload::<B>)
        .get(media::serve::<B>)
        .delete(media::remove::<B>),
    )
    .with_state(state);

  Router::new()
    .nest("/api", api)
    .merge(media)
    .layer(DefaultBodyLimit::max(body_limit))
    .layer(TraceLayer::new_for_http())
}
