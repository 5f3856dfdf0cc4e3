//! Per-date status breakdown for attendance charts

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::classify::DailyRecord;
use crate::models::AttendanceStatus;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StatusShare {
    pub status: AttendanceStatus,
    pub count: i64,
    /// Rounded percentage of the day's rows
    pub percent: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailyBreakdown {
    pub date: NaiveDate,
    /// Rows recorded on this date
    pub total: i64,
    pub statuses: Vec<StatusShare>,
}

/// Group rows by date, oldest first. A staff member's first row on a date decides their status
/// for that date.
pub fn daily_breakdown(records: &[DailyRecord]) -> Vec<DailyBreakdown> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&DailyRecord>> = BTreeMap::new();
    for record in records {
        by_date.entry(record.date).or_default().push(record);
    }

    by_date
        .into_iter()
        .map(|(date, rows)| {
            let total = rows.len() as i64;
            let mut seen = HashSet::new();
            let mut counts: HashMap<AttendanceStatus, i64> = HashMap::new();

            for row in rows {
                if !seen.insert(row.staff_id) {
                    continue;
                }
                if let Some(status) = row.status_id.and_then(AttendanceStatus::from_code) {
                    *counts.entry(status).or_default() += 1;
                }
            }

            let statuses = AttendanceStatus::ALL
                .into_iter()
                .map(|status| {
                    let count = counts.get(&status).copied().unwrap_or(0);
                    StatusShare {
                        status,
                        count,
                        percent: percent_of(count, total),
                    }
                })
                .collect();

            DailyBreakdown {
                date,
                total,
                statuses,
            }
        })
        .collect()
}

fn percent_of(count: i64, total: i64) -> i64 {
    if total > 0 {
        (count as f64 / total as f64 * 100.0).round() as i64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(staff_id: i32, day: u32, status_id: i16) -> DailyRecord {
        DailyRecord {
            staff_id,
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            status_id: Some(status_id),
            ..Default::default()
        }
    }

    fn count(day: &DailyBreakdown, status: AttendanceStatus) -> i64 {
        day.statuses
            .iter()
            .find(|s| s.status == status)
            .map_or(0, |s| s.count)
    }

    #[test]
    fn test_grouped_and_sorted_by_date() {
        let rows = vec![row(1, 5, 1), row(2, 4, 3), row(3, 5, 2)];
        let days = daily_breakdown(&rows);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date.to_string(), "2024-03-04");
        assert_eq!(count(&days[0], AttendanceStatus::Absent), 1);
        assert_eq!(days[1].total, 2);
        assert_eq!(count(&days[1], AttendanceStatus::Present), 1);
        assert_eq!(count(&days[1], AttendanceStatus::Late), 1);
    }

    #[test]
    fn test_percentages_rounded() {
        let rows = vec![row(1, 5, 1), row(2, 5, 1), row(3, 5, 3)];
        let day = &daily_breakdown(&rows)[0];
        let present = day
            .statuses
            .iter()
            .find(|s| s.status == AttendanceStatus::Present)
            .unwrap();
        assert_eq!(present.percent, 67);
        let absent = day
            .statuses
            .iter()
            .find(|s| s.status == AttendanceStatus::Absent)
            .unwrap();
        assert_eq!(absent.percent, 33);
    }

    #[test]
    fn test_staff_counted_once_per_day() {
        let rows = vec![row(1, 5, 1), row(1, 5, 3), row(2, 5, 99)];
        let day = &daily_breakdown(&rows)[0];
        assert_eq!(day.total, 3);
        assert_eq!(count(day, AttendanceStatus::Present), 1);
        assert_eq!(count(day, AttendanceStatus::Absent), 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(daily_breakdown(&[]).is_empty());
        assert_eq!(percent_of(3, 0), 0);
    }
}
