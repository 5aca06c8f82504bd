//! Domain entity models for ReliefHub.
//!
//! Every entity maps 1:1 to a database table; status and role columns are
//! closed enumerations backed by Postgres enum types.

pub mod disaster;
pub mod notification;
pub mod reset;
pub mod resource;
pub mod task;
pub mod user;
pub mod volunteer;
