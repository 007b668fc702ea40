//! Auth-related types and configuration.

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// JWT Claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,
    /// Display name, if the issuer knew one
    pub name: Option<String>,
    /// Always `jwt::ISSUER`
    pub iss: String,
    /// Always `jwt::AUDIENCE`
    pub aud: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Validated user from JWT
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
    pub name: Option<String>,
}

/// Auth configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Lowercased allowlist; empty admits any valid token.
    pub allowed_emails: Vec<String>,
    pub token_duration_days: i64,
    pub cookie_name: String,
}

impl AuthConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            allowed_emails: config
                .allowed_emails
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
            token_duration_days: config.token_duration_days,
            cookie_name: config.auth_cookie_name.clone(),
        }
    }

    /// Check if an email address is in the allowed list.
    pub fn is_email_allowed(&self, email: &str) -> bool {
        self.allowed_emails.is_empty() || self.allowed_emails.contains(&email.to_lowercase())
    }
}
