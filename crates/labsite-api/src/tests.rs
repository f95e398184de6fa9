//! Integration tests for the API router over an in-memory store.

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use labsite_core::{MemoryStore, Snapshot};
use labsite_store::ContentStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

async fn router() -> Router {
  api_router(ContentStore::open(MemoryStore::new()).await)
}

async fn request(
  app: &Router,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> axum::response::Response {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(v) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };
  let req = builder.body(body).unwrap();
  app.clone().oneshot(req).await.unwrap()
}

async fn json_body(resp: axum::response::Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

fn sample_person() -> Value {
  json!({
    "name": "Test Person",
    "role": "PhD Scholar",
    "category": "research-scholar",
    "email": "test@lab.example.edu",
    "interests": ["batteries"],
    "bio": "",
    "image": ""
  })
}

// ─── Collections ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_people_returns_seed() {
  let app = router().await;
  let resp = request(&app, "GET", "/people", None).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let people = json_body(resp).await;
  assert_eq!(
    people.as_array().unwrap().len(),
    Snapshot::seed().people.len()
  );
}

#[tokio::test]
async fn create_person_returns_201_with_assigned_id() {
  let app = router().await;
  let resp = request(&app, "POST", "/people", Some(sample_person())).await;
  assert_eq!(resp.status(), StatusCode::CREATED);

  let created = json_body(resp).await;
  assert!(created["id"].as_u64().unwrap() > 0);
  assert_eq!(created["name"], "Test Person");
}

#[tokio::test]
async fn patch_person_then_get_reflects_change() {
  let app = router().await;
  let created =
    json_body(request(&app, "POST", "/people", Some(sample_person())).await)
      .await;
  let id = created["id"].as_u64().unwrap();

  let resp = request(
    &app,
    "PATCH",
    &format!("/people/{id}"),
    Some(json!({ "role": "Postdoc" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let fetched =
    json_body(request(&app, "GET", &format!("/people/{id}"), None).await)
      .await;
  assert_eq!(fetched["role"], "Postdoc");
  // Untouched fields survive the merge.
  assert_eq!(fetched["email"], "test@lab.example.edu");
}

#[tokio::test]
async fn patch_missing_id_is_a_204_noop() {
  let app = router().await;
  let before =
    json_body(request(&app, "GET", "/people", None).await).await;

  let resp = request(
    &app,
    "PATCH",
    "/people/999999",
    Some(json!({ "name": "Ghost" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let after = json_body(request(&app, "GET", "/people", None).await).await;
  assert_eq!(after, before);
}

#[tokio::test]
async fn get_missing_person_returns_404() {
  let app = router().await;
  let resp = request(&app, "GET", "/people/999999", None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_person_shrinks_list_by_one() {
  let app = router().await;
  let created =
    json_body(request(&app, "POST", "/people", Some(sample_person())).await)
      .await;
  let id = created["id"].as_u64().unwrap();
  let before = json_body(request(&app, "GET", "/people", None).await)
    .await
    .as_array()
    .unwrap()
    .len();

  let resp = request(&app, "DELETE", &format!("/people/{id}"), None).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let after = json_body(request(&app, "GET", "/people", None).await).await;
  let after = after.as_array().unwrap();
  assert_eq!(after.len(), before - 1);
  assert!(after.iter().all(|p| p["id"].as_u64() != Some(id)));
}

#[tokio::test]
async fn publications_filter_by_kind_query() {
  let app = router().await;
  request(
    &app,
    "POST",
    "/publications",
    Some(json!({
      "title": "C1",
      "authors": ["A"],
      "journal": "",
      "year": 2025,
      "type": "conference",
      "doi": "",
      "featured": false,
      "abstract": "",
      "paperUrl": "",
      "codeUrl": ""
    })),
  )
  .await;

  let resp =
    request(&app, "GET", "/publications?kind=conference", None).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let publications = json_body(resp).await;
  let publications = publications.as_array().unwrap();
  assert!(!publications.is_empty());
  assert!(publications.iter().all(|p| p["type"] == "conference"));
}

// ─── Singletons ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn about_patch_merges_history_only() {
  let app = router().await;
  let before = json_body(request(&app, "GET", "/about", None).await).await;

  let resp = request(
    &app,
    "PATCH",
    "/about",
    Some(json!({
      "history": { "title": "New", "content": "C", "startYear": "2020" }
    })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let after = json_body(request(&app, "GET", "/about", None).await).await;
  assert_eq!(after["history"]["title"], "New");
  assert_eq!(after["history"]["startYear"], "2020");
  assert_eq!(after["timeline"], before["timeline"]);
  assert_eq!(after["gallery"], before["gallery"]);
}

#[tokio::test]
async fn contact_patch_merges_supplied_fields() {
  let app = router().await;
  let before = json_body(request(&app, "GET", "/contact", None).await).await;

  request(
    &app,
    "PATCH",
    "/contact",
    Some(json!({ "phone": "+91 11 2659 9999" })),
  )
  .await;

  let after = json_body(request(&app, "GET", "/contact", None).await).await;
  assert_eq!(after["phone"], "+91 11 2659 9999");
  assert_eq!(after["email"], before["email"]);
  assert_eq!(after["address"], before["address"]);
}

// ─── Snapshot transfer ───────────────────────────────────────────────────────

#[tokio::test]
async fn snapshot_has_one_key_per_collection() {
  let app = router().await;
  let snapshot = json_body(request(&app, "GET", "/snapshot", None).await).await;
  let obj = snapshot.as_object().unwrap();
  for key in [
    "people", "publications", "achievements", "instruments", "courses",
    "homeContent", "news", "contactInfo", "events", "alumni",
    "aboutContent", "joinUsContent",
  ] {
    assert!(obj.contains_key(key), "missing snapshot key {key}");
  }
}

#[tokio::test]
async fn put_snapshot_replaces_state() {
  let app = router().await;
  let mut snapshot = json_body(request(&app, "GET", "/snapshot", None).await).await;
  snapshot["people"] = json!([]);

  let resp = request(&app, "PUT", "/snapshot", Some(snapshot)).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let people = json_body(request(&app, "GET", "/people", None).await).await;
  assert!(people.as_array().unwrap().is_empty());
}
