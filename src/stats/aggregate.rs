//! Folding attendance rows into summary statistics

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::classify::{classify, site_keys, DailyRecord, DayKind, SiteKey};
use super::hours::format_hour_min;
use crate::models::{AttendanceStatus, StaffSummary};

/// Aggregated attendance statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct AttendanceStats {
    pub present: i64,
    pub absent: i64,
    pub late: i64,
    pub training: i64,
    pub off_duty: i64,
    pub local_leave: i64,
    pub sick_leave: i64,
    pub extra_duty: i64,
    /// Distinct sites seen
    pub sites: i64,
    pub hours: f64,
    /// (present + training + late) / days * 100
    pub attendance_rate: f64,
    pub travel_allowance: f64,
    /// Distinct staff minus every marked status count; negative over multi-day periods
    pub not_marked: i64,
    pub staff_count: i64,
    /// Distinct working dates falling Monday-Saturday
    pub weekday_days: i64,
    /// Distinct working dates falling on Sunday
    pub sunday_days: i64,
    pub working_days: i64,
    pub weekday_hours: f64,
    pub sunday_hours: f64,
    /// Distinct dates present in the input, whatever their status
    pub observed_days: i64,
}

impl AttendanceStats {
    fn bump(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::LocalLeave => self.local_leave += 1,
            AttendanceStatus::SickLeave => self.sick_leave += 1,
            AttendanceStatus::OffDuty => self.off_duty += 1,
            AttendanceStatus::Training => self.training += 1,
            AttendanceStatus::ExtraDuty => self.extra_duty += 1,
        }
    }

    fn attended(&self) -> i64 {
        self.present + self.training + self.late
    }

    fn marked(&self) -> i64 {
        self.present
            + self.absent
            + self.late
            + self.training
            + self.off_duty
            + self.local_leave
            + self.sick_leave
    }
}

/// Input rows, tagged with their shape
#[derive(Debug, Clone, Copy)]
pub enum StatsRows<'a> {
    /// One row per staff per day
    Detailed(&'a [DailyRecord]),
    /// One row per staff for the whole period, already summed
    PreAggregated(&'a [StaffSummary]),
}

#[derive(Default)]
struct Accumulator {
    stats: AttendanceStats,
    staff: HashSet<i32>,
    sites: HashSet<SiteKey>,
    working_dates: HashSet<NaiveDate>,
    observed_dates: HashSet<NaiveDate>,
}

impl Accumulator {
    fn see_sites(&mut self, keys: Vec<SiteKey>) {
        for key in keys {
            if self.sites.insert(key) {
                self.stats.sites += 1;
            }
        }
    }

    fn add_detailed(&mut self, record: &DailyRecord) {
        let class = classify(record);
        let hours = record.hours.unwrap_or(0.0);

        self.staff.insert(record.staff_id);
        self.observed_dates.insert(record.date);

        if let Some(status) = class.status {
            self.stats.bump(status);
        }

        if class.working {
            let new_date = self.working_dates.insert(record.date);
            match class.day {
                DayKind::Sunday => {
                    if new_date {
                        self.stats.sunday_days += 1;
                    }
                    self.stats.sunday_hours += hours;
                }
                DayKind::Weekday => {
                    if new_date {
                        self.stats.weekday_days += 1;
                    }
                    self.stats.weekday_hours += hours;
                }
            }
        }

        if let Some(allowance) = record.travel_allowance {
            self.stats.travel_allowance += allowance;
        }

        self.see_sites(class.sites);
        self.stats.hours += hours;
    }

    fn add_summary(&mut self, row: &StaffSummary) {
        // Duplicate rows for a staff member only contribute their hours and sites
        if self.staff.insert(row.staff_id) {
            let s = &mut self.stats;
            s.present += row.sum_present;
            s.absent += row.sum_absent;
            s.late += row.sum_late;
            s.training += row.sum_training;
            s.off_duty += row.sum_off;
            s.local_leave += row.sum_local_leave;
            s.sick_leave += row.sum_sick_leave;
            s.extra_duty += row.sum_extra_duty;
            s.travel_allowance += row.sum_travel_allowance;
        }

        self.see_sites(site_keys(row.sites.as_deref(), None));
        self.stats.hours += row.sum_hours;
    }

    fn finish(mut self, rate_days: i64) -> AttendanceStats {
        let s = &mut self.stats;
        s.working_days = s.weekday_days + s.sunday_days;
        s.observed_days = self.observed_dates.len() as i64;
        s.staff_count = self.staff.len() as i64;
        s.not_marked = s.staff_count - s.marked();
        s.attendance_rate = if rate_days > 0 {
            s.attended() as f64 / rate_days as f64 * 100.0
        } else {
            0.0
        };
        self.stats
    }
}

/// Compute summary statistics.
///
/// In detailed mode the rate is taken over the distinct working days observed and
/// `total_days_in_period` is ignored; in pre-aggregated mode it is taken over
/// `total_days_in_period`. Zero days yield a zero rate.
pub fn compute_stats(rows: StatsRows<'_>, total_days_in_period: i64) -> AttendanceStats {
    let mut acc = Accumulator::default();
    match rows {
        StatsRows::Detailed(records) => {
            for record in records {
                acc.add_detailed(record);
            }
            let working_days = acc.stats.weekday_days + acc.stats.sunday_days;
            acc.finish(working_days)
        }
        StatsRows::PreAggregated(summaries) => {
            for row in summaries {
                acc.add_summary(row);
            }
            acc.finish(total_days_in_period)
        }
    }
}

/// Footer totals for a single employee's detailed rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct EmployeeTotals {
    pub staff_id: i32,
    pub break_minutes: i64,
    pub other_minutes: i64,
    pub hours: f64,
    /// Hours rendered as `8h30min`
    pub hours_label: String,
    pub travel_allowance: f64,
}

/// Totals for rows that all belong to the same staff member; `None` otherwise.
pub fn employee_totals(records: &[DailyRecord]) -> Option<EmployeeTotals> {
    let first = records.first()?;
    if records.iter().any(|r| r.staff_id != first.staff_id) {
        return None;
    }

    let mut totals = records.iter().fold(
        EmployeeTotals {
            staff_id: first.staff_id,
            ..Default::default()
        },
        |mut acc, r| {
            acc.break_minutes += i64::from(r.break_minutes.unwrap_or(0));
            acc.other_minutes += i64::from(r.other_minutes.unwrap_or(0));
            acc.hours += r.hours.unwrap_or(0.0);
            acc.travel_allowance += r.travel_allowance.unwrap_or(0.0);
            acc
        },
    );
    totals.hours_label = format_hour_min(totals.hours);
    Some(totals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(staff_id: i32, day: NaiveDate, status_id: i16, hours: f64) -> DailyRecord {
        DailyRecord {
            staff_id,
            date: day,
            status_id: Some(status_id),
            hours: Some(hours),
            site_id: Some(1),
            ..Default::default()
        }
    }

    fn summary(staff_id: i32) -> StaffSummary {
        StaffSummary {
            staff_id,
            employee_id: format!("EMP{:03}", staff_id),
            sum_present: 10,
            sum_late: 2,
            sum_absent: 1,
            sum_training: 3,
            sum_off: 4,
            sum_local_leave: 1,
            sum_sick_leave: 2,
            sum_extra_duty: 1,
            sum_hours: 120.5,
            sum_travel_allowance: 300.0,
            sites: Some("Main".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_detailed_counts_and_rate() {
        let monday = date(2024, 6, 10);
        let rows = vec![
            record(1, monday, 1, 8.0),
            record(2, monday, 3, 0.0),
            record(3, monday, 2, 7.0),
        ];

        let stats = compute_stats(StatsRows::Detailed(&rows), 0);
        assert_eq!((stats.present, stats.absent, stats.late), (1, 1, 1));
        assert_eq!(stats.working_days, 1);
        assert_eq!(stats.attendance_rate, 200.0);
        assert_eq!(stats.hours, 15.0);
        assert_eq!(stats.weekday_hours, 15.0);
        assert_eq!(stats.staff_count, 3);
        assert_eq!(stats.not_marked, 0);
        assert_eq!(stats.sites, 1);
    }

    #[test]
    fn test_detailed_weekday_sunday_split() {
        let saturday = date(2024, 6, 8);
        let sunday = date(2024, 6, 9);
        let rows = vec![
            record(1, saturday, 1, 8.0),
            record(2, saturday, 2, 6.0),
            record(1, sunday, 10, 4.0),
            // absent on Sunday: counted, but not a working day
            record(2, sunday, 3, 0.0),
            record(3, date(2024, 6, 11), 6, 0.0),
        ];

        let stats = compute_stats(StatsRows::Detailed(&rows), 99);
        assert_eq!(stats.weekday_days, 1);
        assert_eq!(stats.sunday_days, 1);
        assert_eq!(stats.working_days, 2);
        assert_eq!(stats.weekday_hours, 14.0);
        assert_eq!(stats.sunday_hours, 4.0);
        assert_eq!(stats.observed_days, 3);
        // (1 present + 1 training + 1 late) / 2 working days
        assert_eq!(stats.attendance_rate, 150.0);
        // 3 staff, 5 marked statuses
        assert_eq!(stats.not_marked, -2);
    }

    #[test]
    fn test_detailed_unknown_status_ignored() {
        let rows = vec![record(1, date(2024, 6, 10), 12, 5.0)];
        let stats = compute_stats(StatsRows::Detailed(&rows), 0);
        assert_eq!(stats.present + stats.absent + stats.late + stats.extra_duty, 0);
        assert_eq!(stats.working_days, 0);
        assert_eq!(stats.attendance_rate, 0.0);
        assert_eq!(stats.not_marked, 1);
        // hours are totalled regardless of status
        assert_eq!(stats.hours, 5.0);
    }

    #[test]
    fn test_detailed_travel_allowance_only_when_present() {
        let monday = date(2024, 6, 10);
        let mut with_allowance = record(1, monday, 1, 8.0);
        with_allowance.travel_allowance = Some(25.5);
        let rows = vec![with_allowance, record(2, monday, 11, 3.0)];

        let stats = compute_stats(StatsRows::Detailed(&rows), 0);
        assert_eq!(stats.travel_allowance, 25.5);
        assert_eq!(stats.extra_duty, 1);
    }

    #[test]
    fn test_pre_aggregated_sums() {
        let rows = vec![summary(1), summary(2)];
        let stats = compute_stats(StatsRows::PreAggregated(&rows), 30);

        assert_eq!(stats.present, 20);
        assert_eq!(stats.late, 4);
        assert_eq!(stats.training, 6);
        assert_eq!(stats.off_duty, 8);
        assert_eq!(stats.extra_duty, 2);
        assert_eq!(stats.travel_allowance, 600.0);
        assert_eq!(stats.hours, 241.0);
        assert_eq!(stats.sites, 1);
        // (20 + 6 + 4) / 30 * 100
        assert_eq!(stats.attendance_rate, 100.0);
        assert_eq!(stats.not_marked, 2 - (20 + 2 + 4 + 6 + 8 + 2 + 4));
    }

    #[test]
    fn test_pre_aggregated_duplicate_staff_counted_once() {
        let once = compute_stats(StatsRows::PreAggregated(&[summary(1)]), 30);
        let twice = compute_stats(StatsRows::PreAggregated(&[summary(1), summary(1)]), 30);

        assert_eq!(twice.present, once.present);
        assert_eq!(twice.absent, once.absent);
        assert_eq!(twice.sick_leave, once.sick_leave);
        assert_eq!(twice.travel_allowance, once.travel_allowance);
        assert_eq!(twice.staff_count, 1);
    }

    #[test]
    fn test_site_names_deduplicated() {
        let mut a = summary(1);
        a.sites = Some("Main, main , MAIN".to_string());
        let mut b = summary(2);
        b.sites = Some("Main".to_string());
        let mut c = summary(3);
        c.sites = Some("Harbour, main".to_string());

        let stats = compute_stats(StatsRows::PreAggregated(&[a.clone(), b.clone()]), 1);
        assert_eq!(stats.sites, 1);

        let stats = compute_stats(StatsRows::PreAggregated(&[a, b, c]), 1);
        assert_eq!(stats.sites, 2);
    }

    #[test]
    fn test_zero_days_yield_zero_rate() {
        let stats = compute_stats(StatsRows::PreAggregated(&[summary(1)]), 0);
        assert!(stats.present > 0);
        assert_eq!(stats.attendance_rate, 0.0);

        let stats = compute_stats(StatsRows::Detailed(&[]), 0);
        assert_eq!(stats, AttendanceStats::default());
    }

    #[test]
    fn test_employee_totals() {
        let monday = date(2024, 6, 10);
        let mut a = record(4, monday, 1, 8.0);
        a.break_minutes = Some(30);
        a.other_minutes = Some(15);
        a.travel_allowance = Some(10.0);
        let mut b = record(4, date(2024, 6, 11), 2, 6.5);
        b.break_minutes = Some(45);

        let totals = employee_totals(&[a.clone(), b]).unwrap();
        assert_eq!(totals.staff_id, 4);
        assert_eq!(totals.break_minutes, 75);
        assert_eq!(totals.other_minutes, 15);
        assert_eq!(totals.hours, 14.5);
        assert_eq!(totals.hours_label, "14h30min");
        assert_eq!(totals.travel_allowance, 10.0);

        assert!(employee_totals(&[]).is_none());
        assert!(employee_totals(&[a, record(5, monday, 1, 8.0)]).is_none());
    }
}
