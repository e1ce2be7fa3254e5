//! Session-token validation.
//!
//! Access tokens are HS256 JWTs minted by the hosted auth service and signed
//! with the project's shared JWT secret.

use jsonwebtoken::{DecodingKey, Validation, decode};
use sanctuary_domain::id::UserId;
use serde::Deserialize;
#[cfg(any(feature = "test-support", test))]
use serde::Serialize;

/// Audience claim carried by tokens of signed-in users.
pub const AUTHENTICATED_AUDIENCE: &str = "authenticated";

/// Identity extracted from a validated access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub user_id: UserId,
    pub email: Option<String>,
    pub exp: u64,
}

/// Errors returned by [`validate_access_token`].
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload of a hosted-auth access token.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | user UUID |
/// | `email` | `email` | sign-in email, absent for phone users |
/// | `aud` | `aud` | always `authenticated` for signed-in users |
/// | `exp` | `exp` | expiration, seconds since epoch |
///
/// [`Serialize`] is only derived under the `test-support` feature; this
/// system never issues tokens itself.
#[derive(Debug, Deserialize)]
#[cfg_attr(any(feature = "test-support", test), derive(Serialize))]
pub struct SessionClaims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub aud: String,
    pub exp: u64,
}

/// HS256, exp checked with the default 60s leeway, `sub` + `exp` required.
fn decode_jwt(token: &str, secret: &str) -> Result<SessionClaims, TokenError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp", "sub"]);
    validation.set_audience(&[AUTHENTICATED_AUDIENCE]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    Ok(data.claims)
}

/// Validate an access-token cookie value, returning the parsed identity.
pub fn validate_access_token(cookie_value: &str, secret: &str) -> Result<TokenInfo, TokenError> {
    let claims = decode_jwt(cookie_value, secret)?;
    let user_id = claims
        .sub
        .parse::<UserId>()
        .map_err(|_| TokenError::Malformed)?;
    Ok(TokenInfo {
        user_id,
        email: claims.email,
        exp: claims.exp,
    })
}

/// Sign a session token the way the hosted auth service does.
#[cfg(any(feature = "test-support", test))]
pub fn issue_access_token(
    user_id: UserId,
    email: Option<&str>,
    exp: u64,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: email.map(str::to_owned),
        aud: AUTHENTICATED_AUDIENCE.to_owned(),
        exp,
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
}
