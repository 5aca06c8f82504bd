//! User accounts — CRUD and credential checks.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use reliefhub_auth::password::hasher::PasswordHasher;
use reliefhub_auth::password::validator::PasswordValidator;
use reliefhub_core::AppError;
use reliefhub_database::repositories::user::UserRepository;
use reliefhub_entity::user::model::{CreateUser, UpdateUser};
use reliefhub_entity::user::{User, UserRole};

/// Result of a credential check against an existing account.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// Credentials are valid and the account is active.
    Success(User),
    /// Credentials are valid but the account is blocked.
    Blocked(User),
}

/// Data accepted when registering a new account.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Full name.
    pub name: String,
    /// Email address, unique across accounts.
    pub email: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Home location.
    pub location: String,
    /// Requested role; defaults to citizen.
    pub role: Option<UserRole>,
}

/// Handles user CRUD and authentication.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
        }
    }

    /// Lists all users.
    pub async fn all_users(&self) -> Result<Vec<User>, AppError> {
        self.user_repo.find_all().await
    }

    /// Gets a user by ID.
    pub async fn user(&self, id: Uuid) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Registers a new account.
    pub async fn register(&self, registration: Registration) -> Result<User, AppError> {
        if self.user_repo.email_exists(&registration.email).await? {
            return Err(AppError::conflict("Email is already registered"));
        }

        self.validator.validate(&registration.password)?;
        let password_hash = self.hasher.hash_password(&registration.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name: registration.name,
                email: registration.email,
                password_hash,
                phone_number: registration.phone_number,
                role: registration.role.unwrap_or(UserRole::Citizen),
                location: registration.location,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Updates a user's profile fields.
    pub async fn update_user(&self, data: UpdateUser) -> Result<User, AppError> {
        let user = self.user_repo.update(&data).await?;
        info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    /// Deletes a user by ID.
    pub async fn delete_user(&self, id: Uuid) -> Result<(), AppError> {
        if !self.user_repo.delete(id).await? {
            return Err(AppError::not_found(format!("User {id} not found")));
        }
        info!(user_id = %id, "User deleted");
        Ok(())
    }

    /// Checks credentials for a login attempt.
    ///
    /// Unknown emails and wrong passwords both surface as the same
    /// unauthorized error; a valid login against a blocked account is
    /// reported separately so the API can answer 403 with the account
    /// status.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        if !user.can_login() {
            info!(user_id = %user.id, "Login refused: account blocked");
            return Ok(LoginOutcome::Blocked(user));
        }

        info!(user_id = %user.id, "Login successful");
        Ok(LoginOutcome::Success(user))
    }
}
