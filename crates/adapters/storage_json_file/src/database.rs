//! Document store setup and shared handle.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use eventos_domain::evento::Evento;

use crate::document::Document;
use crate::error::StorageError;
use crate::evento_repo::COLLECTION;

/// Configuration for the JSON document store.
pub struct Config {
    /// Path of the backing JSON file (e.g. `db.json`).
    pub path: PathBuf,
}

impl Config {
    /// Build a [`Database`] from this configuration.
    ///
    /// Loads the document, creating the file and its parent directories when
    /// missing, and makes sure the `eventos` collection exists and every
    /// stored record is a well-formed evento.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file cannot be read, parsed or written,
    /// or if a stored record is malformed.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self.path).await
    }
}

/// Shared handle on the loaded document.
///
/// Cloning is cheap; every clone points at the same document. Each
/// repository operation holds the lock for its whole read-modify-persist
/// sequence, so writers never interleave.
#[derive(Clone)]
pub struct Database {
    document: Arc<Mutex<Document>>,
}

impl Database {
    async fn initialize(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut document = Document::load(path).await?;
        let file_missing = !tokio::fs::try_exists(path).await?;
        if document.ensure_collection(COLLECTION)? || file_missing {
            document.flush().await?;
        }
        let eventos: Vec<Evento> = document.collection(COLLECTION)?;
        tracing::info!(path = %path.display(), records = eventos.len(), "document store ready");

        Ok(Self {
            document: Arc::new(Mutex::new(document)),
        })
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, Document> {
        self.document.lock().await
    }
}
