use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::dto::vehicle_dto::{CreatedResponse, MessageResponse, VehiclePayload, VehicleResponse};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/:id", get(get_vehicle).put(update_vehicle).delete(delete_vehicle))
}

// Los rechazos de los extractores se convierten en AppError para
// responder siempre con un body JSON.

async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<VehiclePayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(payload) = payload?;
    let response = state.vehicles.create(payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_vehicle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<VehicleResponse>> {
    let Path(id) = id?;
    let response = state.vehicles.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<VehicleResponse>>> {
    let response = state.vehicles.list().await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<VehiclePayload>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let response = state.vehicles.update(id, payload).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let response = state.vehicles.delete(id).await?;
    Ok(Json(response))
}
