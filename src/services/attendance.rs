//! Attendance recording service

use std::str::FromStr;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::{
        attendance::{AttendanceDetails, AttendanceInput, AttendanceRecord, AttendanceWrite},
        AttendanceStatus, ReportCriteria, Role, UserClaims,
    },
    repository::{report::ReportFilter, Repository},
    stats::{compute_hours_from_times, parse_clock},
};

/// Days after which only an admin may rewrite a record; counted inclusively from the record date
pub const EDIT_WINDOW_DAYS: i64 = 2;

/// What a caller may do to an existing record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAccess {
    Full,
    /// Locked record; only the pending-request flag may be raised
    ReviewRequest,
}

#[derive(Clone)]
pub struct AttendanceService {
    repository: Repository,
    off_site_id: Option<i32>,
}

impl AttendanceService {
    pub fn new(repository: Repository, off_site_id: Option<i32>) -> Self {
        Self {
            repository,
            off_site_id,
        }
    }

    /// List detailed rows matching the criteria
    pub async fn list(&self, criteria: &ReportCriteria) -> AppResult<Vec<AttendanceDetails>> {
        let filter = ReportFilter::from_criteria(criteria, Local::now().date_naive())?;
        self.repository.attendance.list(&filter).await
    }

    pub async fn get(&self, id: i32) -> AppResult<AttendanceRecord> {
        self.repository.attendance.get_by_id(id).await
    }

    /// Staff member and site must both exist
    async fn check_references(&self, input: &AttendanceInput) -> AppResult<()> {
        self.repository.staff.get_by_id(input.staff_id).await?;
        self.repository.sites.get_by_id(input.site_id).await?;
        Ok(())
    }

    /// Record attendance on behalf of `approver_id`
    pub async fn create(&self, input: &AttendanceInput, approver_id: i32) -> AppResult<AttendanceRecord> {
        self.check_references(input).await?;
        let data = resolve_input(input, approver_id, self.off_site_id)?;
        let record = self.repository.attendance.create(&data).await?;
        tracing::info!(
            record_id = record.id,
            staff_id = record.staff_id,
            date = %record.date,
            status_id = data.status_id,
            "Attendance recorded"
        );
        Ok(record)
    }

    /// Rewrite a record, or only flag it for review when it is locked for the caller
    pub async fn update(
        &self,
        id: i32,
        input: &AttendanceInput,
        claims: &UserClaims,
    ) -> AppResult<AttendanceRecord> {
        let existing = self.repository.attendance.get_by_id(id).await?;
        self.check_references(input).await?;
        let data = resolve_input(input, claims.user_id, self.off_site_id)?;

        match edit_access(&existing, &data, claims.role, Local::now().date_naive())? {
            EditAccess::Full => {
                let record = self.repository.attendance.update(id, &data).await?;
                tracing::info!(record_id = id, status_id = data.status_id, "Attendance updated");
                Ok(record)
            }
            EditAccess::ReviewRequest => {
                let record = self.repository.attendance.request_review(id).await?;
                tracing::info!(record_id = id, user_id = claims.user_id, "Attendance review requested");
                Ok(record)
            }
        }
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.attendance.deactivate(id).await?;
        tracing::info!(record_id = id, "Attendance record deactivated");
        Ok(())
    }
}

/// Turn a request into storable values: hours are computed from the clock times and a
/// missing status is derived from them.
pub fn resolve_input(
    input: &AttendanceInput,
    approver_id: i32,
    off_site_id: Option<i32>,
) -> AppResult<AttendanceWrite> {
    let check_in = input.check_in.as_deref().and_then(parse_clock);
    let check_out = input.check_out.as_deref().and_then(parse_clock);
    let break_time = input.break_time.unwrap_or(0);
    let other_hours = input.other_hours.unwrap_or(0);

    let hours_text = compute_hours_from_times(check_in, check_out, Some(break_time), Some(other_hours));
    let hours = Decimal::from_str(&hours_text)
        .map_err(|e| AppError::Internal(format!("Unparseable hours {}: {}", hours_text, e)))?;

    let status = match input.status_id {
        Some(code) => AttendanceStatus::from_code(code)
            .ok_or_else(|| AppError::Validation(format!("Unknown attendance status: {}", code)))?,
        None => derive_status(hours, input.site_id, off_site_id),
    };

    Ok(AttendanceWrite {
        staff_id: input.staff_id,
        date: input.date,
        status_id: status.code(),
        check_in,
        check_out,
        break_time,
        other_hours,
        hours,
        site_id: input.site_id,
        travel_allowance: input.travel_allowance,
        notes: input.notes.clone().filter(|n| !n.trim().is_empty()),
        has_pending_request: input.has_pending_request.unwrap_or(false),
        approved_by: approver_id,
    })
}

/// Non-admins cannot change a record older than [`EDIT_WINDOW_DAYS`]; they may only request a
/// review by resubmitting it unchanged with the pending-request flag set.
pub fn edit_access(
    existing: &AttendanceRecord,
    data: &AttendanceWrite,
    role: Role,
    today: NaiveDate,
) -> AppResult<EditAccess> {
    let elapsed = (today - existing.date).num_days() + 1;
    if role == Role::Admin || elapsed <= EDIT_WINDOW_DAYS {
        return Ok(EditAccess::Full);
    }

    if data.has_pending_request && same_values(existing, data) {
        Ok(EditAccess::ReviewRequest)
    } else {
        Err(AppError::Authorization(format!(
            "Attendance older than {} days can only be changed by an admin",
            EDIT_WINDOW_DAYS
        )))
    }
}

fn same_values(existing: &AttendanceRecord, data: &AttendanceWrite) -> bool {
    existing.staff_id == data.staff_id
        && existing.date == data.date
        && existing.status_id == Some(data.status_id)
        && existing.check_in == data.check_in
        && existing.check_out == data.check_out
        && existing.break_time == data.break_time
        && existing.other_hours == data.other_hours
        && existing.hours.unwrap_or(Decimal::ZERO) == data.hours
        && existing.site_id == data.site_id
        && existing.travel_allowance.unwrap_or(Decimal::ZERO)
            == data.travel_allowance.unwrap_or(Decimal::ZERO)
        && existing.notes.as_deref().filter(|n| !n.trim().is_empty()) == data.notes.as_deref()
}

fn derive_status(hours: Decimal, site_id: i32, off_site_id: Option<i32>) -> AttendanceStatus {
    if hours >= Decimal::ONE {
        AttendanceStatus::Present
    } else if off_site_id == Some(site_id) {
        AttendanceStatus::OffDuty
    } else {
        AttendanceStatus::Absent
    }
}
