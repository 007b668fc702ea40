//! Tokens for the events API.
//!
//! Only this service mints and accepts them: `iss` and `aud` are fixed, so a
//! token signed with the same secret for another service is refused.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use shared_types::IssuedToken;

use super::types::{AuthConfig, Claims};

pub const ISSUER: &str = "calendar-backend";
pub const AUDIENCE: &str = "calendar-events";
/// Allowed clock drift when checking `exp`, in seconds.
const LEEWAY_SECS: u64 = 30;

/// Sign a token for `email`, valid for `token_duration_days`.
pub fn issue_token(
    config: &AuthConfig,
    email: &str,
    name: Option<String>,
) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
    let issued_at = Utc::now();
    let expires_at = issued_at + Duration::days(config.token_duration_days);

    let claims = Claims {
        sub: email.to_lowercase(),
        name,
        iss: ISSUER.to_string(),
        aud: AUDIENCE.to_string(),
        iat: issued_at.timestamp(),
        exp: expires_at.timestamp(),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )?;

    Ok(IssuedToken { token, expires_at })
}

/// Check signature, expiry, issuer and audience.
pub fn verify_token(
    config: &AuthConfig,
    token: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = LEEWAY_SECS;
    validation.set_issuer(&[ISSUER]);
    validation.set_audience(&[AUDIENCE]);

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "events-signing-key".to_string(),
            allowed_emails: vec![],
            token_duration_days: 3,
            cookie_name: "auth_token".to_string(),
        }
    }

    fn sign(claims: &Claims) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(config().jwt_secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims_for(aud: &str, iss: &str, exp_offset_secs: i64) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: "ops@example.com".to_string(),
            name: None,
            iss: iss.to_string(),
            aud: aud.to_string(),
            iat: now,
            exp: now + exp_offset_secs,
        }
    }

    #[test]
    fn issued_token_carries_lowercased_subject_and_expiry() {
        let issued = issue_token(&config(), "Ops@Example.com", Some("Ops".to_string())).unwrap();

        let claims = verify_token(&config(), &issued.token).unwrap();
        assert_eq!(claims.sub, "ops@example.com");
        assert_eq!(claims.exp, issued.expires_at.timestamp());
        assert_eq!(claims.exp - claims.iat, 3 * 24 * 60 * 60);
    }

    #[test]
    fn token_for_another_audience_is_refused() {
        let token = sign(&claims_for("billing", ISSUER, 600));
        assert!(verify_token(&config(), &token).is_err());
    }

    #[test]
    fn token_from_another_issuer_is_refused() {
        let token = sign(&claims_for(AUDIENCE, "someone-else", 600));
        assert!(verify_token(&config(), &token).is_err());
    }

    #[test]
    fn expired_token_is_refused_beyond_leeway() {
        let stale = sign(&claims_for(AUDIENCE, ISSUER, -(LEEWAY_SECS as i64) - 60));
        assert!(verify_token(&config(), &stale).is_err());

        let within_leeway = sign(&claims_for(AUDIENCE, ISSUER, -5));
        assert!(verify_token(&config(), &within_leeway).is_ok());
    }

    #[test]
    fn token_signed_with_another_key_is_refused() {
        let mut other = config();
        other.jwt_secret = "rotated-key".to_string();
        let issued = issue_token(&other, "ops@example.com", None).unwrap();

        assert!(verify_token(&config(), &issued.token).is_err());
    }
}
