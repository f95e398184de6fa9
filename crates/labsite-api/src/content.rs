//! Handlers for the singleton content endpoints.
//!
//! Singletons always exist and support merge-update only, so each gets a
//! `GET` and a `PATCH` and nothing else.
//!
//! | Method  | Path | Singleton |
//! |---------|------|-----------|
//! | `GET`/`PATCH` | `/home` | [`HomeContent`] |
//! | `GET`/`PATCH` | `/contact` | [`ContactInfo`] |
//! | `GET`/`PATCH` | `/about` | [`AboutContent`] |
//! | `GET`/`PATCH` | `/join-us` | [`JoinUsContent`] |

use axum::{Json, extract::State, http::StatusCode};
use labsite_core::{
  SnapshotStore,
  content::{
    AboutContent, AboutContentPatch, ContactInfo, ContactInfoPatch,
    HomeContent, HomeContentPatch, JoinUsContent, JoinUsContentPatch,
  },
};
use labsite_store::ContentStore;

/// `GET /home`
pub async fn get_home<B>(
  State(store): State<ContentStore<B>>,
) -> Json<HomeContent>
where
  B: SnapshotStore + 'static,
{
  Json(store.home_content())
}

/// `PATCH /home`
pub async fn update_home<B>(
  State(store): State<ContentStore<B>>,
  Json(patch): Json<HomeContentPatch>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.update_home_content(patch);
  StatusCode::NO_CONTENT
}

/// `GET /contact`
pub async fn get_contact<B>(
  State(store): State<ContentStore<B>>,
) -> Json<ContactInfo>
where
  B: SnapshotStore + 'static,
{
  Json(store.contact_info())
}

/// `PATCH /contact`
pub async fn update_contact<B>(
  State(store): State<ContentStore<B>>,
  Json(patch): Json<ContactInfoPatch>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.update_contact_info(patch);
  StatusCode::NO_CONTENT
}

/// `GET /about`
pub async fn get_about<B>(
  State(store): State<ContentStore<B>>,
) -> Json<AboutContent>
where
  B: SnapshotStore + 'static,
{
  Json(store.about_content())
}

/// `PATCH /about`
pub async fn update_about<B>(
  State(store): State<ContentStore<B>>,
  Json(patch): Json<AboutContentPatch>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.update_about_content(patch);
  StatusCode::NO_CONTENT
}

/// `GET /join-us`
pub async fn get_join_us<B>(
  State(store): State<ContentStore<B>>,
) -> Json<JoinUsContent>
where
  B: SnapshotStore + 'static,
{
  Json(store.join_us_content())
}

/// `PATCH /join-us`
pub async fn update_join_us<B>(
  State(store): State<ContentStore<B>>,
  Json(patch): Json<JoinUsContentPatch>,
) -> StatusCode
where
  B: SnapshotStore + 'static,
{
  store.update_join_us_content(patch);
  StatusCode::NO_CONTENT
}
