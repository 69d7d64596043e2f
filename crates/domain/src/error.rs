//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`EventosError`] via `From`.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum EventosError {
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("could not generate a unique id after {attempts} attempts")]
    IdGeneration { attempts: usize },

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Lookup of a record by identifier found nothing.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
