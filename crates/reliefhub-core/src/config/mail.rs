//! Outbound SMTP mail configuration.

use serde::{Deserialize, Serialize};

/// SMTP delivery settings for password-reset mail.
///
/// When `enabled` is false the mailer logs outgoing messages instead of
/// delivering them, which is the default for development environments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Whether SMTP delivery is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// SMTP relay host.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username (optional).
    #[serde(default)]
    pub username: Option<String>,
    /// SMTP password (optional).
    #[serde(default)]
    pub password: Option<String>,
    /// From address for outgoing mail.
    #[serde(default = "default_from_address")]
    pub from_address: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            username: None,
            password: None,
            from_address: default_from_address(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "noreply@reliefhub.local".to_string()
}
