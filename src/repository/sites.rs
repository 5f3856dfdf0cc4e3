//! Sites repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::site::Site,
};

#[derive(Clone)]
pub struct SitesRepository {
    pool: Pool<Postgres>,
}

impl SitesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List active sites by name
    pub async fn list(&self) -> AppResult<Vec<Site>> {
        let rows = sqlx::query_as::<_, Site>("SELECT * FROM sites WHERE active = TRUE ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get an active site by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Site> {
        sqlx::query_as::<_, Site>("SELECT * FROM sites WHERE id = $1 AND active = TRUE")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::Validation(format!("Unknown site: {}", id)))
    }
}
