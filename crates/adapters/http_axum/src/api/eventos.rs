//! JSON REST handlers for eventos.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use eventos_app::ports::EventoRepository;
use eventos_domain::evento::{Evento, Fields};
use eventos_domain::id::EventoId;

use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Evento>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get, create and update endpoints.
pub enum GetResponse {
    Ok(Json<Evento>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
        }
    }
}

/// `GET /eventos`: list all eventos in storage order.
#[utoipa::path(
    get,
    path = "/eventos",
    tag = "Eventos",
    responses(
        (status = 200, description = "Every evento, in storage order", body = Vec<Evento>),
        (status = 500, description = "The document store failed", body = ErrorBody),
    )
)]
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: EventoRepository + Send + Sync + 'static,
{
    let eventos = state.evento_service.list_eventos().await?;
    Ok(ListResponse::Ok(Json(eventos)))
}

/// `GET /eventos/:id`: get evento by id.
#[utoipa::path(
    get,
    path = "/eventos/{id}",
    tag = "Eventos",
    params(("id" = String, Path, description = "The evento id")),
    responses(
        (status = 200, description = "The first evento with this id", body = Evento),
        (status = 404, description = "No evento has this id", body = ErrorBody),
        (status = 500, description = "The document store failed", body = ErrorBody),
    )
)]
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: EventoRepository + Send + Sync + 'static,
{
    let id = EventoId::from(id);
    let evento = state.evento_service.get_evento(&id).await?;
    Ok(GetResponse::Ok(Json(evento)))
}

/// `POST /eventos`: create a new evento.
#[utoipa::path(
    post,
    path = "/eventos",
    tag = "Eventos",
    request_body = Fields,
    responses(
        (status = 200, description = "The created evento", body = Evento),
        (status = 400, description = "The body is not valid JSON", body = ErrorBody),
        (status = 415, description = "The body is not sent as application/json", body = ErrorBody),
        (status = 422, description = "The body is not a JSON object", body = ErrorBody),
        (status = 500, description = "The document store failed", body = ErrorBody),
    )
)]
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<Fields>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    R: EventoRepository + Send + Sync + 'static,
{
    let Json(fields) = body?;
    let created = state.evento_service.create_evento(fields).await?;
    Ok(GetResponse::Ok(Json(created)))
}

/// `PUT /eventos/:id`: merge the body onto an existing evento.
#[utoipa::path(
    put,
    path = "/eventos/{id}",
    tag = "Eventos",
    params(("id" = String, Path, description = "The evento id")),
    request_body = Fields,
    responses(
        (status = 200, description = "The evento after the merge", body = Evento),
        (status = 400, description = "The body is not valid JSON", body = ErrorBody),
        (status = 404, description = "No evento has this id", body = ErrorBody),
        (status = 415, description = "The body is not sent as application/json", body = ErrorBody),
        (status = 422, description = "The body is not a JSON object", body = ErrorBody),
        (status = 500, description = "The document store failed", body = ErrorBody),
    )
)]
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    body: Result<Json<Fields>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    R: EventoRepository + Send + Sync + 'static,
{
    let id = EventoId::from(id);
    let Json(fields) = body?;
    let updated = state.evento_service.update_evento(&id, fields).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /eventos/:id`: delete every evento with this id.
#[utoipa::path(
    delete,
    path = "/eventos/{id}",
    tag = "Eventos",
    params(("id" = String, Path, description = "The evento id")),
    responses(
        (status = 200, description = "Every evento with this id was deleted"),
        (status = 404, description = "No evento has this id", body = ErrorBody),
        (status = 500, description = "The document store failed", body = ErrorBody),
    )
)]
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: EventoRepository + Send + Sync + 'static,
{
    let id = EventoId::from(id);
    state.evento_service.delete_evento(&id).await?;
    Ok(DeleteResponse::Ok)
}
