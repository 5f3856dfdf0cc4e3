//! Per-record classification into statistic buckets

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::prelude::ToPrimitive;

use crate::models::{AttendanceDetails, AttendanceStatus};

/// Detailed attendance row: one staff member, one date
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyRecord {
    pub staff_id: i32,
    pub date: NaiveDate,
    pub status_id: Option<i16>,
    pub hours: Option<f64>,
    pub travel_allowance: Option<f64>,
    pub break_minutes: Option<i32>,
    pub other_minutes: Option<i32>,
    pub site_id: Option<i32>,
    /// Comma-joined site names when the row spans several sites
    pub sites: Option<String>,
}

impl From<&AttendanceDetails> for DailyRecord {
    fn from(d: &AttendanceDetails) -> Self {
        Self {
            staff_id: d.staff_id,
            date: d.date,
            status_id: d.status_id,
            hours: d.hours.and_then(|h| h.to_f64()),
            travel_allowance: d.travel_allowance.and_then(|t| t.to_f64()),
            break_minutes: Some(d.break_time),
            other_minutes: Some(d.other_hours),
            site_id: Some(d.site_id),
            sites: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Weekday,
    Sunday,
}

impl DayKind {
    pub fn of(date: NaiveDate) -> Self {
        if date.weekday() == Weekday::Sun {
            DayKind::Sunday
        } else {
            DayKind::Weekday
        }
    }
}

/// Identity used to count distinct sites: names from a joined list, ids otherwise
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SiteKey {
    Name(String),
    Id(i32),
}

/// Site keys carried by a row.
///
/// A comma-joined `sites` list wins over `site_id`; names are trimmed and lower-cased.
pub fn site_keys(sites: Option<&str>, site_id: Option<i32>) -> Vec<SiteKey> {
    match sites {
        Some(list) if !list.trim().is_empty() => list
            .split(',')
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .map(SiteKey::Name)
            .collect(),
        _ => site_id.map(SiteKey::Id).into_iter().collect(),
    }
}

/// Buckets a detailed row contributes to
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// `None` for unrecognised status codes
    pub status: Option<AttendanceStatus>,
    /// Whether the row feeds the working-day sets and the weekday/Sunday hour split
    pub working: bool,
    pub day: DayKind,
    pub sites: Vec<SiteKey>,
}

pub fn classify(record: &DailyRecord) -> Classification {
    let status = record.status_id.and_then(AttendanceStatus::from_code);
    Classification {
        status,
        working: status.is_some_and(AttendanceStatus::is_working),
        day: DayKind::of(record.date),
        sites: site_keys(record.sites.as_deref(), record.site_id),
    }
}
