//! [`HttpStore`] — the network implementation of [`SnapshotStore`].

use std::time::Duration;

use labsite_core::{Snapshot, SnapshotStore};
use reqwest::{Client, StatusCode};

use crate::{Error, Result};

/// Connection settings for a remote labsite API.
#[derive(Debug, Clone)]
pub struct HttpConfig {
  pub base_url: String,
  /// Basic-auth credentials; leave `username` empty to send none.
  pub username: String,
  pub password: String,
}

/// A snapshot store backed by a remote labsite API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpStore {
  client: Client,
  config: HttpConfig,
}

impl HttpStore {
  pub fn new(config: HttpConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, config })
  }

  fn url(&self) -> String {
    format!("{}/api/snapshot", self.config.base_url.trim_end_matches('/'))
  }

  fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    if self.config.username.is_empty() {
      req
    } else {
      req.basic_auth(&self.config.username, Some(&self.config.password))
    }
  }
}

impl SnapshotStore for HttpStore {
  type Error = Error;

  async fn load(&self) -> Result<Option<Snapshot>> {
    let resp = self.auth(self.client.get(self.url())).send().await?;

    if resp.status() == StatusCode::NOT_FOUND {
      return Ok(None);
    }
    if !resp.status().is_success() {
      return Err(Error::Status(resp.status()));
    }

    match resp.json().await {
      Ok(snapshot) => Ok(Some(snapshot)),
      Err(e) => {
        // An undecodable body is a corrupt snapshot, not a fatal error.
        tracing::warn!(error = %e, "remote snapshot is not parseable; treating as absent");
        Ok(None)
      }
    }
  }

  async fn save(&self, snapshot: &Snapshot) -> Result<()> {
    let resp = self
      .auth(self.client.put(self.url()))
      .json(snapshot)
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Error::Status(resp.status()));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config(base_url: &str) -> HttpConfig {
    HttpConfig {
      base_url: base_url.into(),
      username: String::new(),
      password: String::new(),
    }
  }

  #[test]
  fn url_joins_without_duplicate_slash() {
    let store = HttpStore::new(config("http://localhost:8098/")).unwrap();
    assert_eq!(store.url(), "http://localhost:8098/api/snapshot");

    let store = HttpStore::new(config("http://localhost:8098")).unwrap();
    assert_eq!(store.url(), "http://localhost:8098/api/snapshot");
  }
}
