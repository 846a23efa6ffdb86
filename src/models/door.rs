use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum DoorStatus {
    Open,
    Closed,
}

impl DoorStatus {
    pub fn toggled(self) -> Self {
        match self {
            DoorStatus::Open => DoorStatus::Closed,
            DoorStatus::Closed => DoorStatus::Open,
        }
    }
}

impl std::fmt::Display for DoorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DoorStatus::Open => write!(f, "open"),
            DoorStatus::Closed => write!(f, "closed"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Door {
    pub id: i64,
    pub name: String,
    pub status: DoorStatus,
    pub user_id: i64,
    /// Controller target: an IP for the network transport, a channel label
    /// for the serial transport.
    pub arduino_ip: String,
    pub last_opened_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_inverts_between_the_two_states() {
        assert_eq!(DoorStatus::Closed.toggled(), DoorStatus::Open);
        assert_eq!(DoorStatus::Open.toggled(), DoorStatus::Closed);
        assert_eq!(DoorStatus::Closed.toggled().toggled(), DoorStatus::Closed);
    }
}
