//! Staff members repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::staff::{CreateStaffMember, StaffMember},
};

#[derive(Clone)]
pub struct StaffRepository {
    pool: Pool<Postgres>,
}

impl StaffRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List active staff members, newest first
    pub async fn list(&self) -> AppResult<Vec<StaffMember>> {
        let rows = sqlx::query_as::<_, StaffMember>(
            "SELECT * FROM staff_members WHERE active = TRUE ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<StaffMember> {
        sqlx::query_as::<_, StaffMember>(
            "SELECT * FROM staff_members WHERE id = $1 AND active = TRUE",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Staff member {} not found", id)))
    }

    /// Create a staff member; a taken employee ID is a conflict and an unknown site is rejected
    pub async fn create(&self, data: &CreateStaffMember) -> AppResult<StaffMember> {
        sqlx::query_as::<_, StaffMember>(
            r#"
            INSERT INTO staff_members
                (employee_id, first_name, last_name, email, phone, position, department, site_id, hire_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(data.employee_id.trim())
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.position)
        .bind(&data.department)
        .bind(data.site_id)
        .bind(data.hire_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => AppError::Conflict(
                format!("Employee ID {} already exists", data.employee_id.trim()),
            ),
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::Validation(format!("Unknown site: {}", data.site_id.unwrap_or_default()))
            }
            other => AppError::Database(other),
        })
    }
}
