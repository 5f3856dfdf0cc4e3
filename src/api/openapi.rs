//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{attendance, health, reports, staff};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Staff Attendance API",
        version = "1.0.0",
        description = "Staff attendance recording and statistics REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Attendance
        attendance::list_attendance,
        attendance::attendance_stats,
        attendance::attendance_daily,
        attendance::get_attendance,
        attendance::create_attendance,
        attendance::update_attendance,
        attendance::delete_attendance,
        // Reports
        reports::attendance_report,
        // Staff
        staff::list_staff,
        staff::get_staff,
        staff::create_staff,
        staff::list_sites,
        staff::list_statuses,
    ),
    components(
        schemas(
            // Attendance
            crate::models::AttendanceRecord,
            crate::models::AttendanceDetails,
            crate::models::AttendanceInput,
            crate::models::AttendanceStatus,
            crate::models::ReportCriteria,
            // Statistics
            crate::stats::AttendanceStats,
            crate::stats::EmployeeTotals,
            crate::stats::DailyBreakdown,
            crate::stats::StatusShare,
            crate::services::reports::DetailedStats,
            // Reports
            crate::models::StaffSummary,
            crate::models::AttendanceReport,
            // Staff
            crate::models::StaffMember,
            crate::models::CreateStaffMember,
            crate::models::Site,
            crate::models::Status,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "attendance", description = "Attendance records and statistics"),
        (name = "reports", description = "Per-staff attendance reports"),
        (name = "staff", description = "Staff, sites and statuses")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
