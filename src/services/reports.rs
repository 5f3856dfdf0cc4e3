//! Attendance statistics and reports

use chrono::Local;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{AttendanceReport, ReportCriteria},
    repository::{report::ReportFilter, Repository},
    stats::{
        compute_stats, daily_breakdown, employee_totals, AttendanceStats, DailyBreakdown,
        DailyRecord, EmployeeTotals, StatsRows,
    },
};

/// Summary over detailed rows
#[derive(Debug, Serialize, ToSchema)]
pub struct DetailedStats {
    pub stats: AttendanceStats,
    /// Present when every matching row belongs to one staff member
    pub employee: Option<EmployeeTotals>,
}

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    fn filter(criteria: &ReportCriteria) -> AppResult<ReportFilter> {
        ReportFilter::from_criteria(criteria, Local::now().date_naive())
    }

    /// Grouped per-staff report with totals across staff
    pub async fn attendance_report(&self, criteria: &ReportCriteria) -> AppResult<AttendanceReport> {
        let filter = Self::filter(criteria)?;
        let repo = &self.repository.attendance;

        let earliest = repo.earliest_date(&filter).await?;
        let total_days = filter.period_days(earliest);
        let total_records = repo.count(&filter).await?;
        let results = repo.staff_summaries(&filter, total_days).await?;

        let stats = compute_stats(StatsRows::PreAggregated(&results), total_days);
        tracing::debug!(
            total_records,
            total_days,
            staff = results.len(),
            "Attendance report computed"
        );

        Ok(AttendanceReport {
            total_records,
            total_days,
            results,
            stats,
        })
    }

    /// Statistics over individual records
    pub async fn detailed_stats(&self, criteria: &ReportCriteria) -> AppResult<DetailedStats> {
        let records = self.daily_records(criteria).await?;
        Ok(DetailedStats {
            stats: compute_stats(StatsRows::Detailed(&records), 0),
            employee: employee_totals(&records),
        })
    }

    /// Status counts per date
    pub async fn daily(&self, criteria: &ReportCriteria) -> AppResult<Vec<DailyBreakdown>> {
        let records = self.daily_records(criteria).await?;
        Ok(daily_breakdown(&records))
    }

    async fn daily_records(&self, criteria: &ReportCriteria) -> AppResult<Vec<DailyRecord>> {
        let filter = Self::filter(criteria)?;
        let rows = self.repository.attendance.list(&filter).await?;
        Ok(rows.iter().map(DailyRecord::from).collect())
    }
}
