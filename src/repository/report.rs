//! Report filter construction
//!
//! Turns [`ReportCriteria`] into a parameterised WHERE clause over the aliases
//! `r` (staff_attendance_records), `s` (staff_members) and `si` (sites).

use chrono::{Datelike, NaiveDate};

use crate::{
    error::{AppError, AppResult},
    models::{AttendanceStatus, ReportCriteria},
};

/// Bind value for a numbered placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum FilterParam {
    Text(String),
    Date(NaiveDate),
    Int(i32),
}

/// Parameterised filter; placeholders are numbered from `$1` in `params` order
#[derive(Debug, Clone)]
pub struct ReportFilter {
    conditions: Vec<String>,
    params: Vec<FilterParam>,
    /// Explicit range length when both bounds are given
    range_days: Option<i64>,
    today: NaiveDate,
}

impl ReportFilter {
    /// Build the filter for `criteria`, with `today` anchoring month and year defaults.
    pub fn from_criteria(criteria: &ReportCriteria, today: NaiveDate) -> AppResult<Self> {
        let mut filter = Self {
            conditions: vec!["r.active = TRUE".to_string()],
            params: Vec::new(),
            range_days: None,
            today,
        };

        if let Some(employee) = criteria.employee.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
            let pattern = format!("%{}%", escape_like(&employee.to_lowercase()));
            let n = filter.push(FilterParam::Text(pattern));
            filter.conditions.push(format!(
                "(LOWER(s.employee_id) LIKE ${n} OR LOWER(s.first_name) LIKE ${n} OR LOWER(s.last_name) LIKE ${n})"
            ));
        }

        if let (Some(from), Some(to)) = (criteria.date_from, criteria.date_to) {
            if to < from {
                return Err(AppError::Validation(
                    "date_to must not be before date_from".to_string(),
                ));
            }
            filter.range_days = Some((to - from).num_days() + 1);
        }

        if criteria.has_range() {
            if let Some(from) = criteria.date_from {
                let n = filter.push(FilterParam::Date(from));
                filter.conditions.push(format!("r.date >= ${}", n));
            }
            if let Some(to) = criteria.date_to {
                let n = filter.push(FilterParam::Date(to));
                filter.conditions.push(format!("r.date <= ${}", n));
            }
        } else if let Some(date) = criteria.date {
            let n = filter.push(FilterParam::Date(date));
            filter.conditions.push(format!("r.date = ${}", n));
        } else if let Some(month) = criteria.month {
            let (start, end) = month_bounds(today.year(), month)?;
            filter.push_half_open(start, end);
        }

        if let Some(site_id) = criteria.site_id {
            let n = filter.push(FilterParam::Int(site_id));
            filter.conditions.push(format!("r.site_id = ${}", n));
        }

        if criteria.is_empty() {
            let (start, end) = year_bounds(today.year())?;
            filter.push_half_open(start, end);
        }

        Ok(filter)
    }

    fn push(&mut self, param: FilterParam) -> usize {
        self.params.push(param);
        self.params.len()
    }

    fn push_half_open(&mut self, start: NaiveDate, end: NaiveDate) {
        let a = self.push(FilterParam::Date(start));
        let b = self.push(FilterParam::Date(end));
        self.conditions.push(format!("r.date >= ${} AND r.date < ${}", a, b));
    }

    pub fn where_clause(&self) -> String {
        format!("WHERE {}", self.conditions.join(" AND "))
    }

    pub fn params(&self) -> &[FilterParam] {
        &self.params
    }

    /// Index of the next free placeholder
    pub fn next_placeholder(&self) -> usize {
        self.params.len() + 1
    }

    /// Days in the reporting period: the explicit range length when both bounds are given,
    /// otherwise the days from the earliest matching record through today.
    pub fn period_days(&self, earliest: Option<NaiveDate>) -> i64 {
        match (self.range_days, earliest) {
            (Some(days), _) => days,
            (None, Some(first)) => ((self.today - first).num_days() + 1).max(0),
            (None, None) => 0,
        }
    }
}

fn month_bounds(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::Validation(format!("Invalid month: {}", month));
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    Ok((start, end))
}

fn year_bounds(year: i32) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, _) = month_bounds(year, 1)?;
    let (end, _) = month_bounds(year + 1, 1)?;
    Ok((start, end))
}

/// Escape `LIKE` wildcards so the search text matches literally (backslash is the default escape)
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `COUNT(*) FILTER (...)` column for one status
pub(crate) fn status_count(status: AttendanceStatus) -> String {
    format!("COUNT(*) FILTER (WHERE r.status_id = {})", status.code())
}
