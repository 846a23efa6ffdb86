use crate::error::{Error, Result};
use crate::models::door::{Door, DoorStatus};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct DoorService {
    pool: SqlitePool,
}

impl DoorService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, user_id: i64, arduino_ip: &str) -> Result<Door> {
        let owner = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        if owner.is_none() {
            return Err(Error::NotFound("User not found!".to_string()));
        }

        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM doors WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(Error::Conflict(
                "A door with that name already exists!".to_string(),
            ));
        }

        let door = sqlx::query_as::<_, Door>(
            r#"
            INSERT INTO doors (name, status, user_id, arduino_ip)
            VALUES (?, 'closed', ?, ?)
            RETURNING id, name, status, user_id, arduino_ip, last_opened_at
            "#,
        )
        .bind(name)
        .bind(user_id)
        .bind(arduino_ip)
        .fetch_one(&self.pool)
        .await?;
        Ok(door)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Door>> {
        let door = sqlx::query_as::<_, Door>(
            "SELECT id, name, status, user_id, arduino_ip, last_opened_at FROM doors WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(door)
    }

    /// Single-row commit. `last_opened_at` is written only when the toggle
    /// opens the door; a closing toggle leaves the previous value in place.
    pub async fn set_status(
        &self,
        id: i64,
        status: DoorStatus,
        opened_at: Option<DateTime<Utc>>,
    ) -> Result<()> {
        match opened_at {
            Some(ts) => {
                sqlx::query("UPDATE doors SET status = ?, last_opened_at = ? WHERE id = ?")
                    .bind(status)
                    .bind(ts)
                    .bind(id)
                    .execute(&self.pool)
                    .await?;
            }
            None => {
                sqlx::query("UPDATE doors SET status = ? WHERE id = ?")
                    .bind(status)
                    .bind(id)
                    .execute(&self.pool)
                    .await?;
            }
        }
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Door>> {
        let doors = sqlx::query_as::<_, Door>(
            "SELECT id, name, status, user_id, arduino_ip, last_opened_at FROM doors ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(doors)
    }
}
