pub mod door_service;
pub mod user_service;
