//! OpenAPI description of the eventos resource, derived from the handlers.

use axum::Json;
use utoipa::OpenApi;

use eventos_domain::evento::{Evento, Fields};
use eventos_domain::id::EventoId;

use crate::error::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Eventos API",
        description = "Events and their cost, kept in a JSON document."
    ),
    paths(
        crate::api::eventos::list,
        crate::api::eventos::get,
        crate::api::eventos::create,
        crate::api::eventos::update,
        crate::api::eventos::delete
    ),
    components(schemas(Evento, Fields, EventoId, ErrorBody)),
    tags((name = "Eventos", description = "Event and cost management"))
)]
pub struct ApiDoc;

/// `GET /api-docs/openapi.json`
pub async fn document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
