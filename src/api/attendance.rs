//! Attendance record endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{AttendanceDetails, AttendanceInput, AttendanceRecord, ReportCriteria},
    services::reports::DetailedStats,
    stats::DailyBreakdown,
    AppState,
};

use super::AuthenticatedUser;

/// List attendance records
#[utoipa::path(
    get,
    path = "/attendance",
    tag = "attendance",
    security(("bearer_auth" = [])),
    params(ReportCriteria),
    responses(
        (status = 200, description = "Matching attendance records", body = Vec<AttendanceDetails>),
        (status = 400, description = "Invalid criteria", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_attendance(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(criteria): Query<ReportCriteria>,
) -> AppResult<Json<Vec<AttendanceDetails>>> {
    let rows = state.services.attendance.list(&criteria).await?;
    Ok(Json(rows))
}

/// Statistics over individual attendance records
#[utoipa::path(
    get,
    path = "/attendance/stats",
    tag = "attendance",
    security(("bearer_auth" = [])),
    params(ReportCriteria),
    responses(
        (status = 200, description = "Attendance statistics", body = DetailedStats),
        (status = 400, description = "Invalid criteria", body = crate::error::ErrorResponse)
    )
)]
pub async fn attendance_stats(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(criteria): Query<ReportCriteria>,
) -> AppResult<Json<DetailedStats>> {
    let stats = state.services.reports.detailed_stats(&criteria).await?;
    Ok(Json(stats))
}

/// Status counts per date
#[utoipa::path(
    get,
    path = "/attendance/daily",
    tag = "attendance",
    security(("bearer_auth" = [])),
    params(ReportCriteria),
    responses(
        (status = 200, description = "Per-date status breakdown", body = Vec<DailyBreakdown>)
    )
)]
pub async fn attendance_daily(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(criteria): Query<ReportCriteria>,
) -> AppResult<Json<Vec<DailyBreakdown>>> {
    let days = state.services.reports.daily(&criteria).await?;
    Ok(Json(days))
}

/// Get an attendance record
#[utoipa::path(
    get,
    path = "/attendance/{id}",
    tag = "attendance",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Attendance record ID")),
    responses(
        (status = 200, description = "Attendance record", body = AttendanceRecord),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<AttendanceRecord>> {
    let record = state.services.attendance.get(id).await?;
    Ok(Json(record))
}

/// Record attendance
#[utoipa::path(
    post,
    path = "/attendance",
    tag = "attendance",
    security(("bearer_auth" = [])),
    request_body = AttendanceInput,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceRecord),
        (status = 400, description = "Invalid input or unknown site", body = crate::error::ErrorResponse),
        (status = 404, description = "Staff member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_attendance(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(input): Json<AttendanceInput>,
) -> AppResult<(StatusCode, Json<AttendanceRecord>)> {
    input.validate()?;
    let record = state.services.attendance.create(&input, claims.user_id).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Update an attendance record
///
/// Records older than two days are locked for non-admins, who can only resubmit them unchanged
/// with `has_pending_request` set.
#[utoipa::path(
    put,
    path = "/attendance/{id}",
    tag = "attendance",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Attendance record ID")),
    request_body = AttendanceInput,
    responses(
        (status = 200, description = "Attendance updated", body = AttendanceRecord),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 403, description = "Record locked", body = crate::error::ErrorResponse),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_attendance(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(input): Json<AttendanceInput>,
) -> AppResult<Json<AttendanceRecord>> {
    input.validate()?;
    let record = state.services.attendance.update(id, &input, &claims).await?;
    Ok(Json(record))
}

/// Deactivate an attendance record
#[utoipa::path(
    delete,
    path = "/attendance/{id}",
    tag = "attendance",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Attendance record ID")),
    responses(
        (status = 204, description = "Record deactivated"),
        (status = 403, description = "Insufficient rights", body = crate::error::ErrorResponse),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_attendance(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_manage_staff()?;
    state.services.attendance.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
