//! Password-reset token entity.

pub mod token;

pub use token::PasswordResetToken;
