//! Attendance records repository: CRUD and report queries

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use super::report::{status_count, ReportFilter};
use crate::{
    error::{AppError, AppResult},
    models::{
        attendance::{AttendanceDetails, AttendanceRecord, AttendanceWrite},
        AttendanceStatus, StaffSummary,
    },
};

const FROM_JOINED: &str = r#"
    FROM staff_attendance_records r
    JOIN staff_members s ON s.id = r.staff_id AND s.active = TRUE
    JOIN sites si ON si.id = r.site_id
"#;

#[derive(Clone)]
pub struct AttendanceRepository {
    pool: Pool<Postgres>,
}

impl AttendanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List detailed attendance rows matching a filter, oldest first
    pub async fn list(&self, filter: &ReportFilter) -> AppResult<Vec<AttendanceDetails>> {
        let query = format!(
            r#"
            SELECT r.id, r.staff_id, s.employee_id, s.first_name, s.last_name,
                   r.date, r.status_id, r.check_in, r.check_out, r.break_time, r.other_hours,
                   r.hours, r.site_id, si.name AS site, r.travel_allowance, r.notes,
                   r.has_pending_request, r.approved_by, r.approved_at
            {}
            {}
            ORDER BY r.date, r.id
            "#,
            FROM_JOINED,
            filter.where_clause()
        );

        let rows = bind_filter!(sqlx::query_as::<_, AttendanceDetails>(&query), filter)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get an active attendance record by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<AttendanceRecord> {
        sqlx::query_as::<_, AttendanceRecord>(
            "SELECT * FROM staff_attendance_records WHERE id = $1 AND active = TRUE",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Attendance record {} not found", id)))
    }

    /// Insert a new attendance record
    pub async fn create(&self, data: &AttendanceWrite) -> AppResult<AttendanceRecord> {
        let row = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            INSERT INTO staff_attendance_records
                (staff_id, date, status_id, check_in, check_out, break_time, other_hours,
                 hours, site_id, travel_allowance, notes, has_pending_request, approved_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(data.staff_id)
        .bind(data.date)
        .bind(data.status_id)
        .bind(data.check_in)
        .bind(data.check_out)
        .bind(data.break_time)
        .bind(data.other_hours)
        .bind(data.hours)
        .bind(data.site_id)
        .bind(data.travel_allowance)
        .bind(&data.notes)
        .bind(data.has_pending_request)
        .bind(data.approved_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace an active attendance record
    pub async fn update(&self, id: i32, data: &AttendanceWrite) -> AppResult<AttendanceRecord> {
        sqlx::query_as::<_, AttendanceRecord>(
            r#"
            UPDATE staff_attendance_records SET
                staff_id = $1, date = $2, status_id = $3, check_in = $4, check_out = $5,
                break_time = $6, other_hours = $7, hours = $8, site_id = $9,
                travel_allowance = $10, notes = $11, has_pending_request = $12,
                approved_by = $13, approved_at = NOW(), updated_at = NOW()
            WHERE id = $14 AND active = TRUE
            RETURNING *
            "#,
        )
        .bind(data.staff_id)
        .bind(data.date)
        .bind(data.status_id)
        .bind(data.check_in)
        .bind(data.check_out)
        .bind(data.break_time)
        .bind(data.other_hours)
        .bind(data.hours)
        .bind(data.site_id)
        .bind(data.travel_allowance)
        .bind(&data.notes)
        .bind(data.has_pending_request)
        .bind(data.approved_by)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Attendance record {} not found", id)))
    }

    /// Flag an active record for admin review without touching its values
    pub async fn request_review(&self, id: i32) -> AppResult<AttendanceRecord> {
        sqlx::query_as::<_, AttendanceRecord>(
            r#"
            UPDATE staff_attendance_records SET has_pending_request = TRUE, updated_at = NOW()
            WHERE id = $1 AND active = TRUE
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Attendance record {} not found", id)))
    }

    /// Soft-delete an attendance record
    pub async fn deactivate(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE staff_attendance_records SET active = FALSE, updated_at = NOW() WHERE id = $1 AND active = TRUE",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Attendance record {} not found", id)));
        }
        Ok(())
    }

    /// Earliest record date matching the filter
    pub async fn earliest_date(&self, filter: &ReportFilter) -> AppResult<Option<NaiveDate>> {
        let query = filtered("SELECT MIN(r.date)", filter);
        let earliest = bind_filter!(sqlx::query_scalar::<_, Option<NaiveDate>>(&query), filter)
            .fetch_one(&self.pool)
            .await?;
        Ok(earliest)
    }

    /// Number of raw records matching the filter
    pub async fn count(&self, filter: &ReportFilter) -> AppResult<i64> {
        let query = filtered("SELECT COUNT(*)", filter);
        let total = bind_filter!(sqlx::query_scalar::<_, i64>(&query), filter)
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    /// Per-staff totals over the filtered records
    pub async fn staff_summaries(
        &self,
        filter: &ReportFilter,
        total_days: i64,
    ) -> AppResult<Vec<StaffSummary>> {
        let query = staff_summary_sql(filter);
        let rows = bind_filter!(sqlx::query_as::<_, StaffSummary>(&query), filter)
            .bind(total_days as f64)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

fn filtered(select: &str, filter: &ReportFilter) -> String {
    format!("{} {} {}", select, FROM_JOINED, filter.where_clause())
}

/// Grouped per-staff query; the period length binds to the placeholder after the filter's own
fn staff_summary_sql(filter: &ReportFilter) -> String {
    let present = status_count(AttendanceStatus::Present);
    let late = status_count(AttendanceStatus::Late);
    format!(
        r#"
        SELECT r.staff_id, s.employee_id, s.first_name, s.last_name,
               {present} AS sum_present,
               {late} AS sum_late,
               {absent} AS sum_absent,
               {training} AS sum_training,
               {off} AS sum_off,
               {local_leave} AS sum_local_leave,
               {sick_leave} AS sum_sick_leave,
               {extra_duty} AS sum_extra_duty,
               COALESCE(SUM(r.hours), 0)::float8 AS sum_hours,
               AVG(r.hours)::float8 AS avg_hours,
               COALESCE(SUM(r.travel_allowance), 0)::float8 AS sum_travel_allowance,
               STRING_AGG(DISTINCT si.name, ', ') AS sites,
               COALESCE(({present} + {late})::float8 / NULLIF(${days}, 0), 0)::float8 AS attendance_rate
        {from}
        {filter}
        GROUP BY r.staff_id, s.employee_id, s.first_name, s.last_name
        ORDER BY s.employee_id
        "#,
        absent = status_count(AttendanceStatus::Absent),
        training = status_count(AttendanceStatus::Training),
        off = status_count(AttendanceStatus::OffDuty),
        local_leave = status_count(AttendanceStatus::LocalLeave),
        sick_leave = status_count(AttendanceStatus::SickLeave),
        extra_duty = status_count(AttendanceStatus::ExtraDuty),
        days = filter.next_placeholder(),
        from = FROM_JOINED,
        filter = filter.where_clause(),
    )
}
