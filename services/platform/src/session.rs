//! Session resolution middleware.
//!
//! Runs once per request: reads the cookie pair, validates the access token,
//! refreshes an expired one through the auth service, and stores the outcome
//! as a [`SessionContext`] extension. Rotated or cleared cookies are written
//! onto the response unless the handler already set its own.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use http::header::SET_COOKIE;
use tracing::{debug, warn};

use sanctuary_auth_types::cookie::{
    SANCTUARY_ACCESS_TOKEN, SANCTUARY_REFRESH_TOKEN, clear_session_cookies, set_session_cookies,
};
use sanctuary_auth_types::session::{Session, SessionContext};
use sanctuary_auth_types::token::{TokenError, validate_access_token};

use crate::domain::repository::AuthServicePort;
use crate::domain::types::TokenPair;
use crate::state::AppState;

/// The access token behind the current session, for calls made on the
/// member's behalf (storage uploads, logout).
#[derive(Debug, Clone, Default)]
pub struct AccessToken(pub Option<String>);

/// Outcome of resolving one request's cookies.
#[derive(Debug)]
pub enum Resolution {
    Anonymous,
    Valid { session: Session, access_token: String },
    Refreshed { session: Session, tokens: TokenPair },
    /// The refresh grant failed; the stale cookies should be cleared.
    RefreshFailed,
}

impl Resolution {
    fn session(&self) -> Option<Session> {
        match self {
            Self::Valid { session, .. } | Self::Refreshed { session, .. } => Some(session.clone()),
            Self::Anonymous | Self::RefreshFailed => None,
        }
    }

    fn access_token(&self) -> Option<String> {
        match self {
            Self::Valid { access_token, .. } => Some(access_token.clone()),
            Self::Refreshed { tokens, .. } => Some(tokens.access_token.clone()),
            Self::Anonymous | Self::RefreshFailed => None,
        }
    }
}

pub async fn resolve_session<A: AuthServicePort>(
    auth: &A,
    jwt_secret: &str,
    access_token: Option<&str>,
    refresh_token: Option<&str>,
) -> Resolution {
    let Some(access_token) = access_token else {
        return Resolution::Anonymous;
    };

    match validate_access_token(access_token, jwt_secret) {
        Ok(info) => Resolution::Valid {
            session: info.into(),
            access_token: access_token.to_owned(),
        },
        Err(TokenError::Expired) => match refresh_token {
            Some(refresh_token) => refresh(auth, jwt_secret, refresh_token).await,
            None => {
                debug!("access token expired and no refresh token present");
                Resolution::Anonymous
            }
        },
        Err(e) => {
            debug!(error = %e, "rejecting session token");
            Resolution::Anonymous
        }
    }
}

async fn refresh<A: AuthServicePort>(auth: &A, jwt_secret: &str, refresh_token: &str) -> Resolution {
    let tokens = match auth.refresh(refresh_token).await {
        Ok(tokens) => tokens,
        Err(e) => {
            warn!(error = ?e, "session refresh failed");
            return Resolution::RefreshFailed;
        }
    };
    match validate_access_token(&tokens.access_token, jwt_secret) {
        Ok(info) => Resolution::Refreshed {
            session: info.into(),
            tokens,
        },
        Err(e) => {
            warn!(error = %e, "refreshed session token is not valid");
            Resolution::RefreshFailed
        }
    }
}

/// True when the response already carries a session cookie of its own
/// (sign-in, sign-out); the middleware must not overwrite it.
fn sets_session_cookie(response: &Response) -> bool {
    response.headers().get_all(SET_COOKIE).iter().any(|value| {
        value.to_str().is_ok_and(|v| {
            v.starts_with(&format!("{SANCTUARY_ACCESS_TOKEN}="))
                || v.starts_with(&format!("{SANCTUARY_REFRESH_TOKEN}="))
        })
    })
}

pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let access = jar.get(SANCTUARY_ACCESS_TOKEN).map(|c| c.value().to_owned());
    let refresh = jar.get(SANCTUARY_REFRESH_TOKEN).map(|c| c.value().to_owned());

    let resolution = resolve_session(
        &state.backend,
        &state.jwt_secret,
        access.as_deref(),
        refresh.as_deref(),
    )
    .await;

    request
        .extensions_mut()
        .insert(SessionContext(resolution.session()));
    request
        .extensions_mut()
        .insert(AccessToken(resolution.access_token()));

    let response = next.run(request).await;
    if sets_session_cookie(&response) {
        return response;
    }

    match resolution {
        Resolution::Refreshed { tokens, .. } => {
            let jar = set_session_cookies(
                CookieJar::new(),
                tokens.access_token,
                tokens.refresh_token,
                state.cookie_domain.clone(),
            );
            (jar, response).into_response()
        }
        Resolution::RefreshFailed => {
            let jar = clear_session_cookies(CookieJar::new(), state.cookie_domain.clone());
            (jar, response).into_response()
        }
        Resolution::Anonymous | Resolution::Valid { .. } => response,
    }
}
