//! Business logic services for ReliefHub.
//!
//! Each service owns one slice of the domain and orchestrates the
//! repositories it needs; services are constructed once at startup and
//! shared through the application state.

pub mod account;
pub mod allocation;
pub mod disaster;
pub mod mail;
pub mod notification;
pub mod password_reset;
pub mod task;
pub mod volunteer;

pub use account::{AccountService, LoginOutcome, Registration};
pub use allocation::{AllocationOutcome, AllocationService};
pub use disaster::DisasterService;
pub use mail::Mailer;
pub use notification::NotificationService;
pub use password_reset::PasswordResetService;
pub use task::TaskService;
pub use volunteer::VolunteerApplicationService;
