//! Attendance status lookup table

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::status::Status};

#[derive(Clone)]
pub struct StatusesRepository {
    pool: Pool<Postgres>,
}

impl StatusesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Status>> {
        let rows = sqlx::query_as::<_, Status>("SELECT id, name FROM attendance_statuses ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
