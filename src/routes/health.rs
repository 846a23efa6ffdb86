use axum::{http::StatusCode, response::IntoResponse};

#[axum::debug_handler]
pub async fn home() -> impl IntoResponse {
    (StatusCode::OK, "Welcome to the door access control server!")
}
