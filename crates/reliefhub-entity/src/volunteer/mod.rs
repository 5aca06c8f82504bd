//! Volunteer application entity.

pub mod application;

pub use application::{
    ApplicationStatus, ApplicationSummary, CreateVolunteerApplication, VolunteerApplication,
};
