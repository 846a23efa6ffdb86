pub mod door;
pub mod user;
