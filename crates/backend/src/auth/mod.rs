//! JWT bearer authentication.
//!
//! This module provides:
//! - issuing and verifying tokens scoped to this service
//! - the `AuthUser` extractor that gates protected routes
//! - email allowlist validation

mod jwt;
mod middleware;
pub mod types;

pub use jwt::{issue_token, verify_token, AUDIENCE, ISSUER};
pub use middleware::extract_auth_user;
pub use types::{AuthConfig, AuthUser};
