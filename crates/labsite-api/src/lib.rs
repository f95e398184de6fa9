//! JSON REST API for the labsite content store.
//!
//! Exposes an axum [`Router`] backed by a [`ContentStore`] over any
//! [`labsite_core::SnapshotStore`] backend. Auth, TLS, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", labsite_api::api_router(store.clone()))
//! ```

pub mod achievements;
pub mod alumni;
pub mod content;
pub mod courses;
pub mod error;
pub mod events;
pub mod instruments;
pub mod news;
pub mod people;
pub mod publications;
pub mod snapshot;

use axum::{Router, routing::get};
use labsite_core::SnapshotStore;
use labsite_store::ContentStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<B>(store: ContentStore<B>) -> Router<()>
where
  B: SnapshotStore + 'static,
{
  Router::new()
    // Collections
    .route(
      "/people",
      get(people::list::<B>).post(people::create::<B>),
    )
    .route(
      "/people/{id}",
      get(people::get_one::<B>)
        .patch(people::update::<B>)
        .delete(people::remove::<B>),
    )
    .route(
      "/publications",
      get(publications::list::<B>).post(publications::create::<B>),
    )
    .route(
      "/publications/{id}",
      get(publications::get_one::<B>)
        .patch(publications::update::<B>)
        .delete(publications::remove::<B>),
    )
    .route(
      "/achievements",
      get(achievements::list::<B>).post(achievements::create::<B>),
    )
    .route(
      "/achievements/{id}",
      get(achievements::get_one::<B>)
        .patch(achievements::update::<B>)
        .delete(achievements::remove::<B>),
    )
    .route(
      "/instruments",
      get(instruments::list::<B>).post(instruments::create::<B>),
    )
    .route(
      "/instruments/{id}",
      get(instruments::get_one::<B>)
        .patch(instruments::update::<B>)
        .delete(instruments::remove::<B>),
    )
    .route(
      "/courses",
      get(courses::list::<B>).post(courses::create::<B>),
    )
    .route(
      "/courses/{id}",
      get(courses::get_one::<B>)
        .patch(courses::update::<B>)
        .delete(courses::remove::<B>),
    )
    .route("/news", get(news::list::<B>).post(news::create::<B>))
    .route(
      "/news/{id}",
      get(news::get_one::<B>)
        .patch(news::update::<B>)
        .delete(news::remove::<B>),
    )
    .route(
      "/events",
      get(events::list::<B>).post(events::create::<B>),
    )
    .route(
      "/events/{id}",
      get(events::get_one::<B>)
        .patch(events::update::<B>)
        .delete(events::remove::<B>),
    )
    .route(
      "/alumni",
      get(alumni::list::<B>).post(alumni::create::<B>),
    )
    .route(
      "/alumni/{id}",
      get(alumni::get_one::<B>)
        .patch(alumni::update::<B>)
        .delete(alumni::remove::<B>),
    )
    // Singletons
    .route(
      "/home",
      get(content::get_home::<B>).patch(content::update_home::<B>),
    )
    .route(
      "/contact",
      get(content::get_contact::<B>).patch(content::update_contact::<B>),
    )
    .route(
      "/about",
      get(content::get_about::<B>).patch(content::update_about::<B>),
    )
    .route(
      "/join-us",
      get(content::get_join_us::<B>).patch(content::update_join_us::<B>),
    )
    // Whole-snapshot transfer
    .route(
      "/snapshot",
      get(snapshot::fetch::<B>).put(snapshot::replace::<B>),
    )
    .with_state(store)
}

#[cfg(test)]
mod tests;
