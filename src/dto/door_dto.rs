use crate::models::door::{Door, DoorStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDoorRequest {
    pub name: Option<String>,
    pub user_id: Option<i64>,
    /// `arduino_channel` is the serial-deployment name for the same field.
    #[serde(alias = "arduino_channel")]
    pub arduino_ip: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToggleDoorRequest {
    pub door_id: Option<i64>,
    /// Serial deployments may override the command sent down the line.
    pub comando: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DirectCommandRequest {
    pub comando: Option<String>,
    pub arduino_ip: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorSummary {
    pub id: i64,
    pub name: String,
    pub status: DoorStatus,
    pub user_id: i64,
}

impl From<Door> for DoorSummary {
    fn from(door: Door) -> Self {
        Self {
            id: door.id,
            name: door.name,
            status: door.status,
            user_id: door.user_id,
        }
    }
}
