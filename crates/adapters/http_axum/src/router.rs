//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use eventos_app::ports::EventoRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the `/eventos` resource routes with the health check and the
/// OpenAPI document. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: EventoRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(crate::openapi::document))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
