//! Room handlers
//!
//! CRUD endpoints for rooms. Rooms are addressed by name rather than by a
//! numeric id, so the name doubles as the path parameter.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Room;
use crate::error::AppError;
use crate::AppState;

/// Request body for registering a room
#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
}

/// Response body for a room
#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub name: String,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self { name: room.name }
    }
}

/// GET /api/rooms
///
/// List every room. Responds 204 when none are registered.
pub async fn list_rooms(State(state): State<AppState>) -> Result<Response, AppError> {
    let rooms = state.rooms.find_all().await?;
    if rooms.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let body: Vec<RoomResponse> = rooms.into_iter().map(RoomResponse::from).collect();
    Ok(Json(body).into_response())
}

/// GET /api/rooms/:name
///
/// Fetch a single room by name.
pub async fn get_room(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RoomResponse>, AppError> {
    let room = state
        .rooms
        .find_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Room {} not found", name)))?;

    Ok(Json(room.into()))
}

/// POST /api/room
///
/// Register a room. The name is the primary key, so an empty or
/// already-taken name fails at the persistence layer.
pub async fn create_room(
    State(state): State<AppState>,
    payload: Result<Json<CreateRoomRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RoomResponse>), AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let room = state.rooms.save(&Room::new(request.name)).await?;

    Ok((StatusCode::CREATED, Json(room.into())))
}

/// DELETE /api/rooms/:name
///
/// Remove a room, failing with 404 when the name is unknown.
pub async fn delete_room(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    state
        .rooms
        .find_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Room {} not found", name)))?;

    state.rooms.delete_by_name(&name).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/rooms
///
/// Remove every room.
pub async fn delete_all_rooms(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.rooms.delete_all().await?;
    Ok(StatusCode::OK)
}
