//! # eventos-adapter-storage-json-file
//!
//! Flat-file persistence adapter: the whole store is one JSON document.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `eventos-app::ports::storage`
//! - Load the document on start, creating it with an empty `eventos`
//!   collection when missing
//! - Keep an in-memory mirror and write it through to disk on every mutation
//! - Map between domain types and JSON records
//!
//! ## Dependency rule
//! Depends on `eventos-app` (for port traits) and `eventos-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod database;
mod document;
mod error;
mod evento_repo;

pub use database::{Config, Database};
pub use error::StorageError;
pub use evento_repo::{COLLECTION, JsonEventoRepository};
