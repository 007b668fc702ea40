//! Authentication gate for protected routes.
//!
//! `AuthUser` is an extractor: listing it first in a handler's arguments
//! rejects the request before any other extraction or store access.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::error::ApiError;
use crate::AppState;

use super::jwt;
use super::types::{AuthConfig, AuthUser, Claims};

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = extract_auth_user(&parts.headers, &state.auth_config)?;
        tracing::debug!(email = %user.email, "authenticated request");
        Ok(user)
    }
}

fn extract_token_from_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;

    for cookie_str in cookie_header.split(';') {
        if let Ok(cookie) = cookie::Cookie::parse(cookie_str.trim()) {
            if cookie.name() == cookie_name {
                return Some(cookie.value().to_string());
            }
        }
    }

    None
}

fn extract_token_from_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extract and validate user from request headers.
///
/// Looks at the auth cookie first, then the `Authorization: Bearer` header.
pub fn extract_auth_user(headers: &HeaderMap, config: &AuthConfig) -> Result<AuthUser, ApiError> {
    let token = extract_token_from_cookie(headers, &config.cookie_name)
        .or_else(|| extract_token_from_header(headers))
        .ok_or_else(|| ApiError::Unauthorized("Missing authentication".to_string()))?;

    let claims: Claims = jwt::verify_token(config, &token)
        .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

    if !config.is_email_allowed(&claims.sub) {
        return Err(ApiError::Forbidden("Email not authorized".to_string()));
    }

    Ok(AuthUser {
        email: claims.sub,
        name: claims.name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "middleware-test-secret".to_string(),
            allowed_emails: vec!["test@example.com".to_string()],
            token_duration_days: 1,
            cookie_name: "auth_token".to_string(),
        }
    }

    #[test]
    fn test_missing_token_is_unauthorized() {
        let err = extract_auth_user(&HeaderMap::new(), &config()).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn test_bearer_header_accepted() {
        let config = config();
        let token = jwt::issue_token(&config, "test@example.com", None).unwrap().token;
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );

        let user = extract_auth_user(&headers, &config).unwrap();
        assert_eq!(user.email, "test@example.com");
    }

    #[test]
    fn test_cookie_accepted() {
        let config = config();
        let token = jwt::issue_token(&config, "test@example.com", None).unwrap().token;
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; auth_token={}", token)).unwrap(),
        );

        assert!(extract_auth_user(&headers, &config).is_ok());
    }

    #[test]
    fn test_disallowed_email_is_forbidden() {
        let config = config();
        let token = jwt::issue_token(&config, "other@example.com", None).unwrap().token;
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );

        let err = extract_auth_user(&headers, &config).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }
}
