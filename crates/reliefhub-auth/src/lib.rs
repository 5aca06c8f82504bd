//! Credential handling for ReliefHub: Argon2id password hashing, the
//! password policy, and password-reset token generation.

pub mod password;
pub mod reset;

pub use password::hasher::PasswordHasher;
pub use password::validator::PasswordValidator;
pub use reset::ResetTokenGenerator;
