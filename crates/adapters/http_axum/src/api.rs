//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod eventos;

use axum::Router;
use axum::routing::get;

use eventos_app::ports::EventoRepository;

use crate::state::AppState;

/// Build the `/eventos` resource routes.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: EventoRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/eventos",
            get(eventos::list::<R>).post(eventos::create::<R>),
        )
        .route(
            "/eventos/{id}",
            get(eventos::get::<R>)
                .put(eventos::update::<R>)
                .delete(eventos::delete::<R>),
        )
}
