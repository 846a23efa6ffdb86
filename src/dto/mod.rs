pub mod door_dto;
pub mod user_dto;
