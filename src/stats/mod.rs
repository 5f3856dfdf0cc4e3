//! Attendance statistics core
//!
//! Pure functions over attendance rows: worked-hours calculation, per-record
//! classification, aggregation into [`AttendanceStats`] and per-date breakdowns.
//! Nothing here touches the database.

pub mod aggregate;
pub mod classify;
pub mod daily;
pub mod hours;

pub use aggregate::{compute_stats, employee_totals, AttendanceStats, EmployeeTotals, StatsRows};
pub use classify::{classify, DailyRecord, DayKind, SiteKey};
pub use daily::{daily_breakdown, DailyBreakdown, StatusShare};
pub use hours::{compute_hours, compute_hours_from_times, parse_clock};
