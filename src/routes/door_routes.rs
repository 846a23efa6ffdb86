use crate::dto::door_dto::{
    CreateDoorRequest, DirectCommandRequest, DoorSummary, ToggleDoorRequest,
};
use crate::error::{Error, Result};
use crate::models::door::DoorStatus;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

pub async fn create_door(
    State(state): State<AppState>,
    Json(body): Json<CreateDoorRequest>,
) -> Result<impl IntoResponse> {
    let (name, user_id, arduino_ip) = match (body.name, body.user_id, body.arduino_ip) {
        (Some(n), Some(id), Some(ip)) if !n.is_empty() && !ip.is_empty() => (n, id, ip),
        _ => {
            return Err(Error::BadRequest(
                "'name', 'user_id' and 'arduino_ip' are required.".to_string(),
            ))
        }
    };

    let door = state.door_service.create(&name, user_id, &arduino_ip).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": format!("Door '{}' created successfully!", door.name) })),
    ))
}

pub async fn toggle_door(
    State(state): State<AppState>,
    Json(body): Json<ToggleDoorRequest>,
) -> Result<impl IntoResponse> {
    let Some(door_id) = body.door_id else {
        return Err(Error::BadRequest("A door_id is required.".to_string()));
    };

    let door = state
        .door_service
        .find_by_id(door_id)
        .await?
        .ok_or_else(|| Error::NotFound("Door not found.".to_string()))?;

    let new_status = door.status.toggled();
    let opened_at = (new_status == DoorStatus::Open).then(Utc::now);

    // Committed before the controller is contacted; a transport failure
    // leaves the new logical status in place (reference behavior).
    state
        .door_service
        .set_status(door.id, new_status, opened_at)
        .await?;
    let last_opened_at = opened_at.or(door.last_opened_at);

    let command = state
        .transport
        .toggle_command(body.comando.as_deref(), new_status);
    let reply = state
        .transport
        .send_command(&door.arduino_ip, &command)
        .await
        .map_err(|e| {
            tracing::warn!(door_id = door.id, error = %e, "controller call failed");
            Error::from(e)
        })?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": format!("Door '{}' is now {}.", door.name, new_status),
            "last_opened_at": last_opened_at,
            "arduino_response": { "message": reply },
        })),
    ))
}

pub async fn open_door_arduino(
    State(state): State<AppState>,
    Json(body): Json<DirectCommandRequest>,
) -> Result<impl IntoResponse> {
    send_direct(&state, body, "ON").await
}

pub async fn close_door_arduino(
    State(state): State<AppState>,
    Json(body): Json<DirectCommandRequest>,
) -> Result<impl IntoResponse> {
    send_direct(&state, body, "OFF").await
}

/// Sends a raw command to the controller without touching any door row.
async fn send_direct(
    state: &AppState,
    body: DirectCommandRequest,
    default_command: &str,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let command = body
        .comando
        .unwrap_or_else(|| default_command.to_string());
    let config = crate::config::get_config();
    let target = body
        .arduino_ip
        .or_else(|| config.arduino_ip.clone())
        .unwrap_or_default();

    let reply = state.transport.send_command(&target, &command).await?;
    Ok((StatusCode::OK, Json(json!({ "message": reply }))))
}

pub async fn list_doors(State(state): State<AppState>) -> Result<Json<Vec<DoorSummary>>> {
    let doors = state.door_service.list().await?;
    Ok(Json(doors.into_iter().map(DoorSummary::from).collect()))
}
