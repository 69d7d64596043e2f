//! In-memory mirror of the JSON document file.
//!
//! The document is a single JSON object whose top-level keys name
//! collections. Every commit rewrites the whole file: the new content goes to
//! a sibling `.tmp` file which is then renamed over the target.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::StorageError;

#[derive(Debug)]
pub(crate) struct Document {
    path: PathBuf,
    root: Map<String, Value>,
}

impl Document {
    /// Read the document at `path`, or start an empty one if the file does not exist.
    pub(crate) async fn load(path: &Path) -> Result<Self, StorageError> {
        let root = match tokio::fs::read(path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Map::new(),
            Ok(bytes) => match serde_json::from_slice(&bytes)? {
                Value::Object(root) => root,
                _ => return Err(StorageError::RootNotAnObject),
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "document file not found, starting empty");
                Map::new()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path: path.to_path_buf(),
            root,
        })
    }

    /// Add an empty collection called `name` if the document lacks one.
    ///
    /// Returns `true` when the collection was added and the document needs a flush.
    pub(crate) fn ensure_collection(&mut self, name: &'static str) -> Result<bool, StorageError> {
        match self.root.get(name) {
            Some(Value::Array(_)) => Ok(false),
            Some(_) => Err(StorageError::CollectionNotAnArray { name }),
            None => {
                self.root.insert(name.to_string(), Value::Array(Vec::new()));
                Ok(true)
            }
        }
    }

    /// Deserialize every record of the collection `name`, in storage order.
    pub(crate) fn collection<T: DeserializeOwned>(
        &self,
        name: &'static str,
    ) -> Result<Vec<T>, StorageError> {
        match self.root.get(name) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    T::deserialize(item).map_err(|source| StorageError::InvalidRecord {
                        name,
                        index,
                        source,
                    })
                })
                .collect(),
            Some(_) => Err(StorageError::CollectionNotAnArray { name }),
        }
    }

    /// Replace the collection `name` with `records` and flush to disk.
    ///
    /// The in-memory document is left unchanged when the flush fails.
    pub(crate) async fn commit<T: Serialize>(
        &mut self,
        name: &'static str,
        records: &[T],
    ) -> Result<(), StorageError> {
        let value = serde_json::to_value(records)?;
        let previous = self.root.insert(name.to_string(), value);
        if let Err(err) = self.flush().await {
            match previous {
                Some(previous) => {
                    self.root.insert(name.to_string(), previous);
                }
                None => {
                    self.root.shift_remove(name);
                }
            }
            return Err(err);
        }
        Ok(())
    }

    /// Write the whole document to disk.
    pub(crate) async fn flush(&self) -> Result<(), StorageError> {
        let mut bytes = serde_json::to_vec_pretty(&self.root)?;
        bytes.push(b'\n');

        let tmp = temporary_path(&self.path);
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "document flushed");
        Ok(())
    }
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut tmp = OsString::from(path.as_os_str());
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
