//! Shared application state for axum handlers.

use std::sync::Arc;

use eventos_app::ports::EventoRepository;
use eventos_app::services::evento_service::EventoService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Evento CRUD service.
    pub evento_service: Arc<EventoService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            evento_service: Arc::clone(&self.evento_service),
        }
    }
}

impl<R> AppState<R>
where
    R: EventoRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(evento_service: EventoService<R>) -> Self {
        Self {
            evento_service: Arc::new(evento_service),
        }
    }
}
