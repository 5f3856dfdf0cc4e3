//! Repository layer for database operations

/// Bind every [`report::FilterParam`] of a `ReportFilter`, in placeholder order.
macro_rules! bind_filter {
    ($query:expr, $filter:expr) => {{
        let mut query = $query;
        for param in $filter.params() {
            query = match param {
                $crate::repository::report::FilterParam::Text(v) => query.bind(v.clone()),
                $crate::repository::report::FilterParam::Date(d) => query.bind(*d),
                $crate::repository::report::FilterParam::Int(i) => query.bind(*i),
            };
        }
        query
    }};
}

pub mod attendance;
pub mod report;
pub mod sites;
pub mod staff;
pub mod statuses;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub attendance: attendance::AttendanceRepository,
    pub staff: staff::StaffRepository,
    pub sites: sites::SitesRepository,
    pub statuses: statuses::StatusesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            attendance: attendance::AttendanceRepository::new(pool.clone()),
            staff: staff::StaffRepository::new(pool.clone()),
            sites: sites::SitesRepository::new(pool.clone()),
            statuses: statuses::StatusesRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
