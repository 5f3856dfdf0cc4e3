//! Staff and site directory service

use crate::{
    error::AppResult,
    models::{site::Site, staff::{CreateStaffMember, StaffMember}, status::Status},
    repository::Repository,
};

#[derive(Clone)]
pub struct StaffService {
    repository: Repository,
}

impl StaffService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<StaffMember>> {
        self.repository.staff.list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<StaffMember> {
        self.repository.staff.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateStaffMember) -> AppResult<StaffMember> {
        let member = self.repository.staff.create(data).await?;
        tracing::info!(staff_id = member.id, employee_id = %member.employee_id, "Staff member created");
        Ok(member)
    }

    /// Active sites
    pub async fn sites(&self) -> AppResult<Vec<Site>> {
        self.repository.sites.list().await
    }

    /// Attendance status lookup rows
    pub async fn statuses(&self) -> AppResult<Vec<Status>> {
        self.repository.statuses.list().await
    }

    /// Database round trip for readiness probes
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
