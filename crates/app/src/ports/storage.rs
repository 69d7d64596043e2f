//! Storage port: repository trait for the `eventos` collection.

use std::future::Future;

use eventos_domain::error::EventosError;
use eventos_domain::evento::{Evento, Fields};
use eventos_domain::id::EventoId;

/// Repository for persisting and querying [`Evento`]s.
///
/// The collection is ordered: records come back in insertion order. Every
/// mutating method must have persisted its change before the returned future
/// resolves.
pub trait EventoRepository {
    /// Get every record, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Evento>, EventosError>> + Send;

    /// Get the first record whose id equals `id`.
    fn get_by_id(
        &self,
        id: &EventoId,
    ) -> impl Future<Output = Result<Option<Evento>, EventosError>> + Send;

    /// Append a record at the end of the collection.
    fn append(&self, evento: Evento) -> impl Future<Output = Result<Evento, EventosError>> + Send;

    /// Append a record unless one with a matching id is already stored.
    ///
    /// The check and the write happen atomically. Resolves to `None`, without
    /// writing, when the id is taken.
    fn append_if_absent(
        &self,
        evento: Evento,
    ) -> impl Future<Output = Result<Option<Evento>, EventosError>> + Send;

    /// Shallow-merge `fields` onto the first record whose id equals `id`.
    ///
    /// Resolves to the updated record, or `None` when no record matched.
    fn merge_update(
        &self,
        id: &EventoId,
        fields: Fields,
    ) -> impl Future<Output = Result<Option<Evento>, EventosError>> + Send;

    /// Remove every record whose id equals `id`, resolving to how many were removed.
    fn remove_all(&self, id: &EventoId) -> impl Future<Output = Result<usize, EventosError>> + Send;
}
