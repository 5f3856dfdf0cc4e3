//! Staff, site and status directory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{CreateStaffMember, Site, StaffMember, Status},
    AppState,
};

use super::AuthenticatedUser;

/// List active staff members
#[utoipa::path(
    get,
    path = "/staff",
    tag = "staff",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Staff members", body = Vec<StaffMember>)
    )
)]
pub async fn list_staff(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<StaffMember>>> {
    let staff = state.services.staff.list().await?;
    Ok(Json(staff))
}

/// Get a staff member
#[utoipa::path(
    get,
    path = "/staff/{id}",
    tag = "staff",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Staff member ID")),
    responses(
        (status = 200, description = "Staff member", body = StaffMember),
        (status = 404, description = "Staff member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_staff(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<StaffMember>> {
    let member = state.services.staff.get(id).await?;
    Ok(Json(member))
}

/// Create a staff member
#[utoipa::path(
    post,
    path = "/staff",
    tag = "staff",
    security(("bearer_auth" = [])),
    request_body = CreateStaffMember,
    responses(
        (status = 201, description = "Staff member created", body = StaffMember),
        (status = 400, description = "Invalid input or unknown site", body = crate::error::ErrorResponse),
        (status = 403, description = "Insufficient rights", body = crate::error::ErrorResponse),
        (status = 409, description = "Employee ID already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_staff(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateStaffMember>,
) -> AppResult<(StatusCode, Json<StaffMember>)> {
    claims.require_manage_staff()?;
    data.validate()?;

    let member = state.services.staff.create(&data).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// List active sites
#[utoipa::path(
    get,
    path = "/sites",
    tag = "staff",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Sites", body = Vec<Site>)
    )
)]
pub async fn list_sites(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Site>>> {
    let sites = state.services.staff.sites().await?;
    Ok(Json(sites))
}

/// List attendance statuses
#[utoipa::path(
    get,
    path = "/statuses",
    tag = "staff",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Attendance statuses", body = Vec<Status>)
    )
)]
pub async fn list_statuses(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Status>>> {
    let statuses = state.services.staff.statuses().await?;
    Ok(Json(statuses))
}
