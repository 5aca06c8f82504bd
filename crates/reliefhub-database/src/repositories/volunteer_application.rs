//! Volunteer application repository, including the approve-and-promote
//! transition.

use sqlx::PgPool;
use uuid::Uuid;

use reliefhub_core::error::{AppError, ErrorKind};
use reliefhub_core::result::AppResult;
use reliefhub_entity::volunteer::{
    ApplicationStatus, ApplicationSummary, CreateVolunteerApplication, VolunteerApplication,
};

/// Repository for volunteer applications and their decisions.
#[derive(Debug, Clone)]
pub struct VolunteerApplicationRepository {
    pool: PgPool,
}

impl VolunteerApplicationRepository {
    /// Create a new volunteer application repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an application by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<VolunteerApplication>> {
        sqlx::query_as::<_, VolunteerApplication>(
            "SELECT * FROM volunteer_applications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find application", e))
    }

    /// Find an application joined with its applicant's contact details.
    pub async fn find_summary_by_id(&self, id: Uuid) -> AppResult<Option<ApplicationSummary>> {
        sqlx::query_as::<_, ApplicationSummary>(
            "SELECT a.id, a.user_id, a.description, a.status, a.application_date, \
                    u.name AS applicant_name, u.email AS applicant_email, \
                    u.phone_number AS applicant_phone, u.location AS applicant_location \
             FROM volunteer_applications a \
             JOIN users u ON u.id = a.user_id \
             WHERE a.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find application", e))
    }

    /// List all applications with applicant details, newest first.
    pub async fn find_all_summaries(&self) -> AppResult<Vec<ApplicationSummary>> {
        sqlx::query_as::<_, ApplicationSummary>(
            "SELECT a.id, a.user_id, a.description, a.status, a.application_date, \
                    u.name AS applicant_name, u.email AS applicant_email, \
                    u.phone_number AS applicant_phone, u.location AS applicant_location \
             FROM volunteer_applications a \
             JOIN users u ON u.id = a.user_id \
             ORDER BY a.application_date DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list applications", e))
    }

    /// File a new PENDING application.
    pub async fn create(
        &self,
        data: &CreateVolunteerApplication,
    ) -> AppResult<VolunteerApplication> {
        sqlx::query_as::<_, VolunteerApplication>(
            "INSERT INTO volunteer_applications (user_id, description) \
             VALUES ($1, $2) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create application", e))
    }

    /// Update an application's description.
    pub async fn update_description(
        &self,
        id: Uuid,
        description: &str,
    ) -> AppResult<VolunteerApplication> {
        sqlx::query_as::<_, VolunteerApplication>(
            "UPDATE volunteer_applications SET description = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update application", e))?
        .ok_or_else(|| AppError::not_found(format!("Volunteer application {id} not found")))
    }

    /// Approve a pending application and promote the applicant to the
    /// volunteer role in one transaction.
    ///
    /// Both writes commit together, so the application can never end up
    /// APPROVED with the user's role unchanged.
    pub async fn approve_and_promote(&self, id: Uuid) -> AppResult<VolunteerApplication> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let application = sqlx::query_as::<_, VolunteerApplication>(
            "SELECT * FROM volunteer_applications WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load application", e))?
        .ok_or_else(|| AppError::not_found(format!("Volunteer application {id} not found")))?;

        if application.status.is_decided() {
            return Err(AppError::conflict(format!(
                "Volunteer application {} has already been decided (status: {})",
                id, application.status
            )));
        }

        let approved = sqlx::query_as::<_, VolunteerApplication>(
            "UPDATE volunteer_applications SET status = 'approved' WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to approve application", e)
        })?;

        let promoted = sqlx::query("UPDATE users SET role = 'volunteer' WHERE id = $1")
            .bind(application.user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to promote applicant", e)
            })?;

        if promoted.rows_affected() == 0 {
            // Applicant vanished; abort so the approval does not stick.
            tx.rollback().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to roll back transaction", e)
            })?;
            return Err(AppError::not_found(format!(
                "Applicant {} not found",
                application.user_id
            )));
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit approval", e)
        })?;

        Ok(approved)
    }

    /// Reject a pending application. No side effect on the applicant.
    pub async fn reject(&self, id: Uuid) -> AppResult<VolunteerApplication> {
        let rejected = sqlx::query_as::<_, VolunteerApplication>(
            "UPDATE volunteer_applications SET status = 'rejected' \
             WHERE id = $1 AND status = 'pending' RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to reject application", e)
        })?;

        match rejected {
            Some(application) => Ok(application),
            None => match self.find_by_id(id).await? {
                Some(application) => Err(AppError::conflict(format!(
                    "Volunteer application {} has already been decided (status: {})",
                    id, application.status
                ))),
                None => Err(AppError::not_found(format!(
                    "Volunteer application {id} not found"
                ))),
            },
        }
    }

    /// Delete an application. Returns `true` if a row was deleted.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM volunteer_applications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete application", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Count applications with a given status.
    pub async fn count_by_status(&self, status: ApplicationStatus) -> AppResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM volunteer_applications WHERE status = $1")
                .bind(status)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count applications", e)
                })?;
        Ok(count as u64)
    }
}
