//! Attendance report criteria and grouped report rows

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::stats::AttendanceStats;

/// Filter criteria shared by the attendance list, statistics and report endpoints
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
pub struct ReportCriteria {
    /// Case-insensitive substring of employee id, first name or last name; `%` and `_` match
    /// literally
    pub employee: Option<String>,
    /// Exact date (ignored when a date range is given)
    pub date: Option<NaiveDate>,
    /// Inclusive range start
    pub date_from: Option<NaiveDate>,
    /// Inclusive range end
    pub date_to: Option<NaiveDate>,
    /// Month of the current year, 1-12 (ignored when a date or date range is given)
    pub month: Option<u32>,
    /// Restrict to a single site
    #[serde(alias = "siteId")]
    pub site_id: Option<i32>,
}

impl ReportCriteria {
    /// True when no criterion at all was supplied; a blank employee search counts as absent
    pub fn is_empty(&self) -> bool {
        self.employee.as_deref().map_or(true, |e| e.trim().is_empty())
            && self.date.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.month.is_none()
            && self.site_id.is_none()
    }

    pub fn has_range(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some()
    }
}

/// One staff member's totals over the report period
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StaffSummary {
    pub staff_id: i32,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub sum_present: i64,
    pub sum_late: i64,
    pub sum_absent: i64,
    pub sum_training: i64,
    pub sum_off: i64,
    pub sum_local_leave: i64,
    pub sum_sick_leave: i64,
    pub sum_extra_duty: i64,
    pub sum_hours: f64,
    pub avg_hours: Option<f64>,
    pub sum_travel_allowance: f64,
    /// Distinct site names, comma separated
    pub sites: Option<String>,
    /// (present + late) / total days, as a fraction
    pub attendance_rate: f64,
}

/// Grouped attendance report
#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceReport {
    /// Raw rows matching the filters
    pub total_records: i64,
    /// Days in the reporting period
    pub total_days: i64,
    /// Per-staff totals
    pub results: Vec<StaffSummary>,
    /// Totals across all staff
    pub stats: AttendanceStats,
}
