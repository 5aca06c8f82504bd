//! Task lifecycle — request decisions, volunteer assignment, status
//! updates, and remark logs.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use reliefhub_core::AppError;
use reliefhub_database::repositories::task::TaskRepository;
use reliefhub_database::repositories::task_request::TaskRequestRepository;
use reliefhub_database::repositories::user::UserRepository;
use reliefhub_entity::task::{CreateTaskRequest, Task, TaskRequest, TaskRequestStatus, TaskStatus};

/// Manages task requests and the tasks derived from them.
#[derive(Debug, Clone)]
pub struct TaskService {
    /// Task repository.
    task_repo: Arc<TaskRepository>,
    /// Task request repository.
    request_repo: Arc<TaskRequestRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl TaskService {
    /// Creates a new task service.
    pub fn new(
        task_repo: Arc<TaskRepository>,
        request_repo: Arc<TaskRequestRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            task_repo,
            request_repo,
            user_repo,
        }
    }

    // ── Task requests ────────────────────────────────────────

    /// Files a new task request. The status is always PENDING.
    pub async fn create_request(&self, data: CreateTaskRequest) -> Result<TaskRequest, AppError> {
        self.user_repo
            .find_by_id(data.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {} not found", data.user_id)))?;

        let request = self.request_repo.create(&data).await?;
        info!(request_id = %request.id, "Task request created");
        Ok(request)
    }

    /// Lists every task request.
    pub async fn all_requests(&self) -> Result<Vec<TaskRequest>, AppError> {
        self.request_repo.find_all().await
    }

    /// Lists task requests filed by a user.
    pub async fn requests_by_user(&self, user_id: Uuid) -> Result<Vec<TaskRequest>, AppError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;

        self.request_repo.find_by_user(user_id).await
    }

    /// Lists task requests with a given status.
    pub async fn requests_by_status(
        &self,
        status: TaskRequestStatus,
    ) -> Result<Vec<TaskRequest>, AppError> {
        self.request_repo.find_by_status(status).await
    }

    /// Approves a pending request, deriving its one-and-only task.
    pub async fn approve_request(&self, request_id: Uuid) -> Result<Task, AppError> {
        let task = self.request_repo.approve(request_id).await?;
        info!(request_id = %request_id, task_id = %task.id, "Task request approved");
        Ok(task)
    }

    /// Rejects a pending request.
    pub async fn reject_request(&self, request_id: Uuid) -> Result<TaskRequest, AppError> {
        let request = self.request_repo.reject(request_id).await?;
        info!(request_id = %request.id, "Task request rejected");
        Ok(request)
    }

    /// Deletes a task request.
    pub async fn delete_request(&self, request_id: Uuid) -> Result<(), AppError> {
        if !self.request_repo.delete(request_id).await? {
            return Err(AppError::not_found(format!(
                "Task request {request_id} not found"
            )));
        }
        info!(request_id = %request_id, "Task request deleted");
        Ok(())
    }

    // ── Tasks ────────────────────────────────────────────────

    /// Lists tasks open for volunteers: PENDING and unassigned.
    pub async fn available_tasks(&self) -> Result<Vec<Task>, AppError> {
        self.task_repo.find_available().await
    }

    /// Lists tasks assigned to a volunteer.
    pub async fn tasks_by_volunteer(&self, volunteer_id: Uuid) -> Result<Vec<Task>, AppError> {
        self.user_repo
            .find_by_id(volunteer_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Volunteer {volunteer_id} not found")))?;

        self.task_repo.find_by_volunteer(volunteer_id).await
    }

    /// Assigns a volunteer to a task.
    ///
    /// The task must be PENDING and unassigned, and the acting user must
    /// hold the volunteer role. The assignment itself is a guarded update
    /// so a concurrent accept cannot claim the same task twice.
    pub async fn accept_task(&self, task_id: Uuid, volunteer_id: Uuid) -> Result<Task, AppError> {
        let task = self
            .task_repo
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Task {task_id} not found")))?;

        let volunteer = self
            .user_repo
            .find_by_id(volunteer_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Volunteer {volunteer_id} not found")))?;

        task.check_acceptance(&volunteer)?;

        let assigned = self
            .task_repo
            .assign_volunteer(task_id, volunteer_id)
            .await?
            .ok_or_else(|| {
                // Someone else claimed the task between the read and the update.
                AppError::conflict("Task is already assigned to another volunteer")
            })?;

        info!(task_id = %task_id, volunteer_id = %volunteer_id, "Task accepted");
        Ok(assigned)
    }

    /// Overwrites a task's status. Transitions are intentionally
    /// unrestricted.
    pub async fn update_status(&self, task_id: Uuid, status: TaskStatus) -> Result<Task, AppError> {
        let task = self.task_repo.update_status(task_id, status).await?;
        info!(task_id = %task_id, status = %status, "Task status updated");
        Ok(task)
    }

    /// Appends a timestamped entry to the volunteer remark log.
    pub async fn add_volunteer_remarks(
        &self,
        task_id: Uuid,
        remarks: &str,
    ) -> Result<Task, AppError> {
        validate_remarks(remarks)?;
        self.task_repo.add_volunteer_remark(task_id, remarks).await
    }

    /// Appends a timestamped entry to the admin remark log.
    pub async fn add_admin_remarks(&self, task_id: Uuid, remarks: &str) -> Result<Task, AppError> {
        validate_remarks(remarks)?;
        self.task_repo.add_admin_remark(task_id, remarks).await
    }

    /// Returns both remark logs for a task.
    pub async fn remarks(
        &self,
        task_id: Uuid,
    ) -> Result<(Option<String>, Option<String>), AppError> {
        let task = self
            .task_repo
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Task {task_id} not found")))?;

        Ok((task.volunteer_remarks, task.admin_remarks))
    }
}

/// Remarks must be non-empty and bounded.
fn validate_remarks(remarks: &str) -> Result<(), AppError> {
    if remarks.trim().is_empty() {
        return Err(AppError::validation("Remarks cannot be empty"));
    }
    if remarks.len() > 1000 {
        return Err(AppError::validation("Remarks cannot exceed 1000 characters"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_remarks() {
        assert!(validate_remarks("Reached the site").is_ok());
        assert!(validate_remarks("   ").is_err());
        assert!(validate_remarks(&"x".repeat(1001)).is_err());
    }
}
