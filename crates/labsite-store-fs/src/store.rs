//! [`FileStore`] — the JSON-file implementation of [`SnapshotStore`].

use std::path::{Path, PathBuf};

use labsite_core::{Snapshot, SnapshotStore};

use crate::{Error, Result};

/// A snapshot store backed by a single JSON file.
///
/// Cloning is cheap; clones point at the same path. A missing file loads as
/// `None` (first run); an unreadable or unparseable file also loads as
/// `None` with a logged warning, so corrupt state degrades to seed data
/// instead of taking the site down.
#[derive(Clone)]
pub struct FileStore {
  path: PathBuf,
}

impl FileStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path { &self.path }

  fn temp_path(&self) -> PathBuf {
    let mut name = self.path.file_name().unwrap_or_default().to_owned();
    name.push(".tmp");
    self.path.with_file_name(name)
  }
}

impl SnapshotStore for FileStore {
  type Error = Error;

  async fn load(&self) -> Result<Option<Snapshot>> {
    let bytes = match tokio::fs::read(&self.path).await {
      Ok(bytes) => bytes,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(Error::Io(e)),
    };

    match serde_json::from_slice(&bytes) {
      Ok(snapshot) => Ok(Some(snapshot)),
      Err(e) => {
        tracing::warn!(
          path = %self.path.display(),
          error = %e,
          "stored snapshot is not parseable; treating as absent"
        );
        Ok(None)
      }
    }
  }

  async fn save(&self, snapshot: &Snapshot) -> Result<()> {
    let json = serde_json::to_vec_pretty(snapshot)?;

    if let Some(parent) = self.path.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }

    // Write to a sibling temp file, then rename over the target so readers
    // never observe a partial snapshot.
    let temp = self.temp_path();
    tokio::fs::write(&temp, &json).await?;
    tokio::fs::rename(&temp, &self.path).await?;

    tracing::debug!(path = %self.path.display(), bytes = json.len(), "snapshot saved");
    Ok(())
  }
}
