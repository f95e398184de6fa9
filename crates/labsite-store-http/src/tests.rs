//! Tests for `HttpStore` against a throwaway local server.

use std::sync::{Arc, Mutex};

use axum::{
  Json, Router,
  http::{HeaderMap, StatusCode},
  routing::{get, put},
};
use labsite_core::{Snapshot, SnapshotStore};

use crate::{Error, HttpConfig, HttpStore};

async fn serve(router: Router) -> String {
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, router).await.unwrap();
  });
  format!("http://{addr}")
}

fn store(base_url: &str) -> HttpStore {
  HttpStore::new(HttpConfig {
    base_url: base_url.into(),
    username: String::new(),
    password: String::new(),
  })
  .unwrap()
}

#[tokio::test]
async fn missing_remote_snapshot_loads_as_none() {
  let base = serve(Router::new().route(
    "/api/snapshot",
    get(|| async { StatusCode::NOT_FOUND }),
  ))
  .await;

  assert!(store(&base).load().await.unwrap().is_none());
}

#[tokio::test]
async fn server_error_on_load_is_surfaced() {
  let base = serve(Router::new().route(
    "/api/snapshot",
    get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
  ))
  .await;

  match store(&base).load().await {
    Err(Error::Status(status)) => {
      assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    }
    other => panic!("expected status error, got {other:?}"),
  }
}

#[tokio::test]
async fn load_decodes_the_stored_snapshot() {
  let base = serve(Router::new().route(
    "/api/snapshot",
    get(|| async { Json(Snapshot::seed()) }),
  ))
  .await;

  let loaded = store(&base).load().await.unwrap().unwrap();
  assert_eq!(loaded, Snapshot::seed());
}

#[tokio::test]
async fn undecodable_remote_body_loads_as_none() {
  let base = serve(Router::new().route(
    "/api/snapshot",
    get(|| async { "{ not json" }),
  ))
  .await;

  assert!(store(&base).load().await.unwrap().is_none());
}

#[tokio::test]
async fn save_puts_the_whole_snapshot() {
  let received: Arc<Mutex<Option<Snapshot>>> = Arc::default();
  let sink = Arc::clone(&received);
  let base = serve(Router::new().route(
    "/api/snapshot",
    put(move |Json(snapshot): Json<Snapshot>| {
      let sink = Arc::clone(&sink);
      async move {
        *sink.lock().unwrap() = Some(snapshot);
        StatusCode::NO_CONTENT
      }
    }),
  ))
  .await;

  let snapshot = Snapshot::seed();
  store(&base).save(&snapshot).await.unwrap();

  assert_eq!(received.lock().unwrap().as_ref(), Some(&snapshot));
}

#[tokio::test]
async fn failed_save_is_surfaced() {
  let base = serve(Router::new().route(
    "/api/snapshot",
    put(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
  ))
  .await;

  match store(&base).save(&Snapshot::seed()).await {
    Err(Error::Status(status)) => {
      assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    }
    other => panic!("expected status error, got {other:?}"),
  }
}

#[tokio::test]
async fn credentials_are_sent_as_basic_auth() {
  let seen: Arc<Mutex<Option<String>>> = Arc::default();
  let sink = Arc::clone(&seen);
  let base = serve(Router::new().route(
    "/api/snapshot",
    get(move |headers: HeaderMap| {
      let sink = Arc::clone(&sink);
      async move {
        *sink.lock().unwrap() = headers
          .get("authorization")
          .map(|v| v.to_str().unwrap().to_string());
        StatusCode::NOT_FOUND
      }
    }),
  ))
  .await;

  let store = HttpStore::new(HttpConfig {
    base_url: base,
    username: "admin".into(),
    password: "s3cret".into(),
  })
  .unwrap();
  store.load().await.unwrap();

  // base64("admin:s3cret")
  assert_eq!(
    seen.lock().unwrap().as_deref(),
    Some("Basic YWRtaW46czNjcmV0")
  );
}

#[tokio::test]
async fn empty_username_sends_no_auth_header() {
  let seen: Arc<Mutex<Option<String>>> = Arc::default();
  let sink = Arc::clone(&seen);
  let base = serve(Router::new().route(
    "/api/snapshot",
    get(move |headers: HeaderMap| {
      let sink = Arc::clone(&sink);
      async move {
        *sink.lock().unwrap() = headers
          .get("authorization")
          .map(|v| v.to_str().unwrap().to_string());
        StatusCode::NOT_FOUND
      }
    }),
  ))
  .await;

  store(&base).load().await.unwrap();
  assert!(seen.lock().unwrap().is_none());
}
