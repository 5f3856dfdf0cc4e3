//! Attendance status taxonomy

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Attendance status codes as stored in `staff_attendance_records.status_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum AttendanceStatus {
    Present = 1,
    Late = 2,
    Absent = 3,
    LocalLeave = 5,
    SickLeave = 6,
    OffDuty = 9,
    Training = 10,
    ExtraDuty = 11,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 8] = [
        AttendanceStatus::Present,
        AttendanceStatus::Late,
        AttendanceStatus::Absent,
        AttendanceStatus::LocalLeave,
        AttendanceStatus::SickLeave,
        AttendanceStatus::OffDuty,
        AttendanceStatus::Training,
        AttendanceStatus::ExtraDuty,
    ];

    /// Map a stored code to a status. Unknown codes map to `None`.
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(AttendanceStatus::Present),
            2 => Some(AttendanceStatus::Late),
            3 => Some(AttendanceStatus::Absent),
            5 => Some(AttendanceStatus::LocalLeave),
            6 => Some(AttendanceStatus::SickLeave),
            9 => Some(AttendanceStatus::OffDuty),
            10 => Some(AttendanceStatus::Training),
            11 => Some(AttendanceStatus::ExtraDuty),
            _ => None,
        }
    }

    pub fn code(self) -> i16 {
        self as i16
    }

    /// Statuses that count as attended: they feed the attendance rate and the working-day sets.
    pub fn is_working(self) -> bool {
        matches!(
            self,
            AttendanceStatus::Present | AttendanceStatus::Late | AttendanceStatus::Training
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Late => "late",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::LocalLeave => "local_leave",
            AttendanceStatus::SickLeave => "sick_leave",
            AttendanceStatus::OffDuty => "off_duty",
            AttendanceStatus::Training => "training",
            AttendanceStatus::ExtraDuty => "extra_duty",
        }
    }
}

impl From<AttendanceStatus> for i16 {
    fn from(s: AttendanceStatus) -> Self {
        s.code()
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Row of the `attendance_statuses` lookup table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Status {
    pub id: i16,
    pub name: String,
}
