//! Data models for the attendance server

pub mod attendance;
pub mod report;
pub mod site;
pub mod staff;
pub mod status;
pub mod user;

// Re-export commonly used types
pub use attendance::{AttendanceDetails, AttendanceInput, AttendanceRecord, AttendanceWrite};
pub use report::{AttendanceReport, ReportCriteria, StaffSummary};
pub use site::Site;
pub use staff::{CreateStaffMember, StaffMember};
pub use status::{AttendanceStatus, Status};
pub use user::{Role, UserClaims};
