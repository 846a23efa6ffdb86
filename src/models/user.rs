use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Argon2 digest, never the plaintext.
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}
