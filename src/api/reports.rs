//! Report endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{AttendanceReport, ReportCriteria},
    AppState,
};

use super::AuthenticatedUser;

/// Per-staff attendance report
#[utoipa::path(
    get,
    path = "/reports/attendance",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(ReportCriteria),
    responses(
        (status = 200, description = "Grouped attendance report", body = AttendanceReport),
        (status = 400, description = "Invalid criteria", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn attendance_report(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(criteria): Query<ReportCriteria>,
) -> AppResult<Json<AttendanceReport>> {
    let report = state.services.reports.attendance_report(&criteria).await?;
    Ok(Json(report))
}
