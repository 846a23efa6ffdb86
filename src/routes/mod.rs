pub mod door_routes;
pub mod health;
pub mod user_routes;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home))
        .route("/register", post(user_routes::register))
        .route("/users", get(user_routes::list_users))
        .route("/create-door", post(door_routes::create_door))
        .route("/toggle-door", post(door_routes::toggle_door))
        .route("/open-door-arduino", post(door_routes::open_door_arduino))
        .route("/close-door-arduino", post(door_routes::close_door_arduino))
        .route("/doors", get(door_routes::list_doors))
        .with_state(state)
}
