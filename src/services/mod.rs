//! Business logic services

pub mod attendance;
pub mod reports;
pub mod staff;

use crate::{config::AttendanceConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub attendance: attendance::AttendanceService,
    pub reports: reports::ReportsService,
    pub staff: staff::StaffService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, attendance_config: &AttendanceConfig) -> Self {
        Self {
            attendance: attendance::AttendanceService::new(
                repository.clone(),
                attendance_config.off_site_id,
            ),
            reports: reports::ReportsService::new(repository.clone()),
            staff: staff::StaffService::new(repository),
        }
    }
}
