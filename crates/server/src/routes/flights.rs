use axum::{extract::{Path, State}, http::StatusCode, Json};
use models::flight::{self, FlightPayload, Model};
use tracing::{info, warn};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    post, path = "/flight/save", tag = "flight",
    request_body = crate::openapi::FlightPayloadDoc,
    responses(
        (status = 200, description = "Assigned flight id", body = i64),
        (status = 400, description = "Invalid Input")
    )
)]
pub async fn save(State(state): State<ServerState>, Json(input): Json<FlightPayload>) -> Result<Json<i64>, JsonApiError> {
    if let Err(e) = flight::validate_payload(&input) {
        warn!(rating = input.rating, reason = %e, "flight save rejected");
        return Err(e.into());
    }
    let id = state.flights.save(input).await?;
    Ok(Json(id))
}

#[utoipa::path(
    get, path = "/flight/listAll", tag = "flight",
    responses((status = 200, description = "All flights", body = [crate::openapi::FlightDoc]))
)]
pub async fn list_all(State(state): State<ServerState>) -> Result<Json<Vec<Model>>, JsonApiError> {
    let list = state.flights.list().await?;
    info!(count = list.len(), "list flights");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/flight/list/{id}", tag = "flight",
    params(("id" = i64, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::FlightDoc),
        (status = 404, description = "invalid Flight ID")
    )
)]
pub async fn list_by_id(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Model>, JsonApiError> {
    match state.flights.list_id(id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(JsonApiError::not_found()),
    }
}

#[utoipa::path(
    get, path = "/flight/topFlights", tag = "flight",
    responses((status = 202, description = "Flights at the highest rating", body = [crate::openapi::FlightDoc]))
)]
pub async fn top_flights(State(state): State<ServerState>) -> Result<(StatusCode, Json<Vec<Model>>), JsonApiError> {
    let list = state.flights.view_best_flight().await?;
    info!(count = list.len(), "top flights");
    Ok((StatusCode::ACCEPTED, Json(list)))
}

#[utoipa::path(
    put, path = "/flight", tag = "flight",
    request_body = crate::openapi::FlightPayloadDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::FlightDoc),
        (status = 400, description = "Invalid Input"),
        (status = 404, description = "invalid Flight ID")
    )
)]
pub async fn update(State(state): State<ServerState>, Json(input): Json<FlightPayload>) -> Result<Json<Model>, JsonApiError> {
    if input.id.is_none() {
        return Err(JsonApiError::invalid_input("idFlight is required for update"));
    }
    if let Err(e) = flight::validate_payload(&input) {
        warn!(id = ?input.id, rating = input.rating, reason = %e, "flight update rejected");
        return Err(e.into());
    }
    let m = state.flights.update(input).await?;
    info!(id = m.id, "updated flight");
    Ok(Json(m))
}

#[utoipa::path(
    delete, path = "/flight/{id}", tag = "flight",
    params(("id" = i64, Path, description = "Flight ID")),
    responses((status = 200, description = "Status message", body = String))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<String, JsonApiError> {
    Ok(state.flights.delete(id).await?)
}
