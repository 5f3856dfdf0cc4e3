//! Attendance record model and related types

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// One staff member's attendance for one date at one site
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AttendanceRecord {
    pub id: i32,
    pub staff_id: i32,
    pub date: NaiveDate,
    /// Status code (see `AttendanceStatus`)
    pub status_id: Option<i16>,
    #[schema(value_type = Option<String>, example = "08:00:00")]
    pub check_in: Option<NaiveTime>,
    #[schema(value_type = Option<String>, example = "17:00:00")]
    pub check_out: Option<NaiveTime>,
    /// Break duration in minutes
    pub break_time: i32,
    /// Extra minutes credited on top of the clocked time
    pub other_hours: i32,
    #[schema(value_type = Option<String>, example = "8.00")]
    pub hours: Option<Decimal>,
    pub site_id: i32,
    #[schema(value_type = Option<String>, example = "150.00")]
    pub travel_allowance: Option<Decimal>,
    pub notes: Option<String>,
    pub has_pending_request: Option<bool>,
    /// User who approved (recorded) the entry
    pub approved_by: i32,
    pub approved_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
}

/// Attendance record joined with staff identity and site name
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AttendanceDetails {
    pub id: i32,
    pub staff_id: i32,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date: NaiveDate,
    pub status_id: Option<i16>,
    #[schema(value_type = Option<String>)]
    pub check_in: Option<NaiveTime>,
    #[schema(value_type = Option<String>)]
    pub check_out: Option<NaiveTime>,
    pub break_time: i32,
    pub other_hours: i32,
    #[schema(value_type = Option<String>)]
    pub hours: Option<Decimal>,
    pub site_id: i32,
    /// Site name
    pub site: String,
    #[schema(value_type = Option<String>)]
    pub travel_allowance: Option<Decimal>,
    pub notes: Option<String>,
    pub has_pending_request: Option<bool>,
    pub approved_by: i32,
    pub approved_at: DateTime<Utc>,
}

/// Create or update attendance request.
///
/// `hours` is always computed server-side from the clock times. When `status_id` is omitted the
/// status is derived from the computed hours.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AttendanceInput {
    #[validate(range(min = 1, message = "Please select a staff member"))]
    pub staff_id: i32,
    pub date: NaiveDate,
    pub status_id: Option<i16>,
    /// Check-in clock time (HH:MM)
    #[schema(example = "08:00")]
    pub check_in: Option<String>,
    /// Check-out clock time (HH:MM)
    #[schema(example = "17:00")]
    pub check_out: Option<String>,
    #[validate(range(min = 0, max = 480, message = "Break time must be between 0 and 480 minutes"))]
    pub break_time: Option<i32>,
    #[validate(range(min = 0, max = 1440, message = "Other hours must be between 0 and 1440 minutes"))]
    pub other_hours: Option<i32>,
    #[validate(range(min = 1, message = "Please select a site"))]
    pub site_id: i32,
    #[schema(value_type = Option<String>)]
    pub travel_allowance: Option<Decimal>,
    pub notes: Option<String>,
    pub has_pending_request: Option<bool>,
}

/// Fully resolved attendance values ready to be persisted
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceWrite {
    pub staff_id: i32,
    pub date: NaiveDate,
    pub status_id: i16,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub break_time: i32,
    pub other_hours: i32,
    pub hours: Decimal,
    pub site_id: i32,
    pub travel_allowance: Option<Decimal>,
    pub notes: Option<String>,
    pub has_pending_request: bool,
    pub approved_by: i32,
}
