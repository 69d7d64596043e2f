//! Evento service: use-cases for the `eventos` collection.

use eventos_domain::error::{EventosError, NotFoundError};
use eventos_domain::evento::{Evento, Fields};
use eventos_domain::id::EventoId;

use crate::ports::EventoRepository;

/// How many generated ids are tried before giving up on a create.
pub const MAX_ID_ATTEMPTS: usize = 8;

/// Application service for evento CRUD operations.
pub struct EventoService<R> {
    repo: R,
}

impl<R: EventoRepository> EventoService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all eventos in storage order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_eventos(&self) -> Result<Vec<Evento>, EventosError> {
        self.repo.get_all().await
    }

    /// Look up an evento by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`EventosError::NotFound`] when no evento with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_evento(&self, id: &EventoId) -> Result<Evento, EventosError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Create a new evento from a request body and append it.
    ///
    /// An `id` in `fields` is honored as-is, whatever its JSON type, even
    /// when another record already uses it. Otherwise a fresh id is generated
    /// and the repository only stores the record if that id is unused.
    ///
    /// # Errors
    ///
    /// Returns [`EventosError::IdGeneration`] when every generated id
    /// collided, or a storage error from the repository.
    #[tracing::instrument(skip(self, fields))]
    pub async fn create_evento(&self, mut fields: Fields) -> Result<Evento, EventosError> {
        let created = match fields.take_id() {
            Some(id) => self.repo.append(Evento::create(id, fields)).await?,
            None => self.append_with_generated_id(fields).await?,
        };
        tracing::info!(id = %created.id(), "evento created");
        Ok(created)
    }

    /// Shallow-merge `fields` onto an existing evento.
    ///
    /// # Errors
    ///
    /// Returns [`EventosError::NotFound`] if the evento does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, fields), fields(id = %id))]
    pub async fn update_evento(
        &self,
        id: &EventoId,
        fields: Fields,
    ) -> Result<Evento, EventosError> {
        let updated = self
            .repo
            .merge_update(id, fields)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(new_id = %updated.id(), "evento updated");
        Ok(updated)
    }

    /// Delete every evento identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`EventosError::NotFound`] if nothing was removed, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self), fields(id = %id))]
    pub async fn delete_evento(&self, id: &EventoId) -> Result<(), EventosError> {
        let removed = self.repo.remove_all(id).await?;
        if removed == 0 {
            return Err(not_found(id));
        }
        tracing::debug!(removed, "evento deleted");
        Ok(())
    }

    async fn append_with_generated_id(&self, fields: Fields) -> Result<Evento, EventosError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let evento = Evento::create(EventoId::generate(), fields.clone());
            let id = evento.id().clone();
            if let Some(created) = self.repo.append_if_absent(evento).await? {
                return Ok(created);
            }
            tracing::warn!(%id, "generated evento id already in use");
        }
        Err(EventosError::IdGeneration {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

fn not_found(id: &EventoId) -> EventosError {
    NotFoundError {
        entity: "Evento",
        id: id.to_string(),
    }
    .into()
}
