//! Request session context and its extractors.
//!
//! The session middleware resolves the cookie pair once per request and stores
//! a [`SessionContext`] in the request extensions. Handlers read it through
//! [`MaybeSession`] or [`RequireSession`]; neither touches cookies or tokens.

use axum::Json;
use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::request::Parts;
use sanctuary_domain::id::UserId;
use serde::Serialize;

use crate::token::TokenInfo;

/// An authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: UserId,
    pub email: Option<String>,
    /// Access-token expiry, seconds since epoch.
    pub expires_at: u64,
}

impl From<TokenInfo> for Session {
    fn from(info: TokenInfo) -> Self {
        Self {
            user_id: info.user_id,
            email: info.email,
            expires_at: info.exp,
        }
    }
}

/// The resolved session for one request. `None` means anonymous.
#[derive(Debug, Clone, Default)]
pub struct SessionContext(pub Option<Session>);

/// Extracts the session if there is one. Never rejects.
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<Session>);

/// Extracts the session, rejecting anonymous requests with 401.
#[derive(Debug, Clone)]
pub struct RequireSession(pub Session);

/// Rejection for [`RequireSession`], rendered as the platform's error body.
#[derive(Debug)]
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": "AUTHENTICATION_REQUIRED",
            "message": "authentication required",
        });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

fn session_from_parts(parts: &Parts) -> Option<Session> {
    parts
        .extensions
        .get::<SessionContext>()
        .and_then(|ctx| ctx.0.clone())
}

impl<S> FromRequestParts<S> for MaybeSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    // axum-core 0.5 declares `fn -> impl Future + Send`; read synchronously and
    // return a 'static block so the future does not borrow `parts`.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let session = session_from_parts(parts);
        async move { Ok(Self(session)) }
    }
}

impl<S> FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let session = session_from_parts(parts);
        async move { session.map(Self).ok_or(AuthenticationRequired) }
    }
}
