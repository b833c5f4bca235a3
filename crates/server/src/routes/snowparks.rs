use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use models::snowpark::{NewSnowpark, Snowpark, SnowparkPatch};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{errors::JsonApiError, state::AppState};

/// Ids that do not parse can never have been issued, so they are reported as missing.
fn parse_id(raw: &str) -> Result<Uuid, JsonApiError> {
    Uuid::parse_str(raw).map_err(|_| JsonApiError::not_found(format!("snowpark {} not found", raw)))
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, JsonApiError> {
    payload
        .map(|Json(v)| v)
        .map_err(|e| JsonApiError::invalid_input(e.body_text()))
}

#[utoipa::path(
    get, path = "/snowparks", tag = "snowparks",
    responses((status = 200, description = "List OK", body = [crate::openapi::SnowparkDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Snowpark>> {
    let items = state.snowparks.list();
    debug!(count = items.len(), "list snowparks");
    Json(items)
}

#[utoipa::path(
    post, path = "/snowparks", tag = "snowparks",
    request_body = crate::openapi::CreateSnowparkDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::SnowparkDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewSnowpark>, JsonRejection>,
) -> Result<Response, JsonApiError> {
    let input = json_body(payload)?;
    let created = state.snowparks.create(input)?;
    info!(id = %created.id, name = %created.name, location = %created.location, "created snowpark");
    let location = format!("/snowparks/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)).into_response())
}

#[utoipa::path(
    get, path = "/snowparks/{id}", tag = "snowparks",
    params(("id" = Uuid, Path, description = "Snowpark ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::SnowparkDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Snowpark>, JsonApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.snowparks.get(id)?))
}

#[utoipa::path(
    patch, path = "/snowparks/{id}", tag = "snowparks",
    params(("id" = Uuid, Path, description = "Snowpark ID")),
    request_body = crate::openapi::SnowparkPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::SnowparkDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SnowparkPatch>, JsonRejection>,
) -> Result<Json<Snowpark>, JsonApiError> {
    let patch = json_body(payload)?;
    // empty or blank patches are rejected before the id is considered
    patch.validate().map_err(service::errors::ServiceError::from)?;
    let id = parse_id(&id)?;
    let updated = state.snowparks.update(id, &patch)?;
    info!(id = %updated.id, "updated snowpark");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/snowparks/{id}", tag = "snowparks",
    params(("id" = Uuid, Path, description = "Snowpark ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    let id = parse_id(&id)?;
    state.snowparks.delete(id)?;
    info!(id = %id, "deleted snowpark");
    Ok(StatusCode::NO_CONTENT)
}
