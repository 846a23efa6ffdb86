use crate::dto::user_dto::{RegisterRequest, UserSummary};
use crate::error::{Error, Result};
use crate::utils::crypto;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    let (username, password) = match (body.username, body.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => return Err(Error::BadRequest("Invalid request data!".to_string())),
    };

    let password_hash =
        crypto::hash_password(&password).map_err(|e| Error::Internal(e.to_string()))?;
    state.user_service.create(&username, &password_hash).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully!" })),
    ))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>> {
    let users = state.user_service.list().await?;
    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}
