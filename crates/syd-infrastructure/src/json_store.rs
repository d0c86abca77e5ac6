//! One-JSON-document-per-file storage.
//!
//! The local stand-in for the remote document store: each entity is a
//! single `<id>.json` file inside a collection directory. Writes replace
//! the whole document (last-write-wins, matching the upstream store's
//! merge-free usage here).

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use syd_core::error::{Result, SydError};
use tokio::fs;

/// A directory of JSON documents, one file per entity id.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn document_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    async fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Writes (or replaces) the document for `id`.
    pub async fn save<T: Serialize>(&self, id: &str, document: &T) -> Result<()> {
        self.ensure_dir().await?;
        let json = serde_json::to_string_pretty(document)?;
        fs::write(self.document_path(id), json).await?;
        Ok(())
    }

    /// Loads the document for `id`. `Ok(None)` when the file is absent.
    pub async fn load<T: DeserializeOwned>(&self, id: &str) -> Result<Option<T>> {
        let path = self.document_path(id);
        let json = match fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let document = serde_json::from_str(&json)
            .map_err(|err| SydError::data_access(format!("corrupt document {path:?}: {err}")))?;
        Ok(Some(document))
    }

    /// Loads every parseable document in the collection.
    ///
    /// A document that fails to parse is skipped with a warning rather than
    /// failing the whole listing.
    pub async fn load_all<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut documents = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match self.load_file(&path).await {
                Ok(document) => documents.push(document),
                Err(err) => {
                    tracing::warn!(?path, %err, "skipping unreadable document");
                }
            }
        }
        Ok(documents)
    }

    /// Deletes the document for `id`. Deleting an absent document is fine.
    pub async fn delete(&self, id: &str) -> Result<()> {
        match fs::remove_file(self.document_path(id)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    async fn load_file<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let json = fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&json)?)
    }
}
