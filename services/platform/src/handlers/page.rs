//! Page-boundary authorization: gate failures on pages become redirects.

use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;

use sanctuary_auth_types::session::Session;
use sanctuary_domain::admin_role::AdminRole;

use crate::domain::types::AdminGrant;
use crate::error::{AccessError, PlatformError};
use crate::state::AppState;

pub const LOGIN_PATH: &str = "/auth/login";
pub const ADMIN_HOME: &str = "/admin";
pub const ADMIN_ACCESS_MESSAGE: &str =
    "Admin access required. Please contact an administrator.";

#[derive(Serialize)]
struct LoginQuery<'a> {
    message: &'a str,
}

/// `/auth/login?message=...` with the message query-encoded.
pub fn login_with_message(message: &str) -> String {
    match serde_qs::to_string(&LoginQuery { message }) {
        Ok(query) => format!("{LOGIN_PATH}?{query}"),
        Err(e) => {
            tracing::warn!(error = %e, "failed to encode login message");
            LOGIN_PATH.to_owned()
        }
    }
}

/// Error of a page handler.
#[derive(Debug)]
pub enum PageError {
    /// 303 to the given location.
    Redirect(String),
    Platform(PlatformError),
}

impl From<PlatformError> for PageError {
    fn from(e: PlatformError) -> Self {
        Self::Platform(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(location) => Redirect::to(&location).into_response(),
            Self::Platform(e) => e.into_response(),
        }
    }
}

/// Admit an admin to a page. Below `minimum` goes back to the admin home;
/// every other refusal goes to the login page.
pub async fn admit_admin(
    state: &AppState,
    session: Option<&Session>,
    minimum: Option<AdminRole>,
) -> Result<AdminGrant, PageError> {
    state
        .access_gate()
        .require_access(session, minimum)
        .await
        .map_err(admin_page_redirect)
}

pub fn admin_page_redirect(e: AccessError) -> PageError {
    match e {
        AccessError::InsufficientPermissions => PageError::Redirect(ADMIN_HOME.to_owned()),
        AccessError::AuthenticationRequired | AccessError::AdminAccessRequired => {
            PageError::Redirect(login_with_message(ADMIN_ACCESS_MESSAGE))
        }
    }
}

/// Admit a signed-in member to a page, or send them to the login page.
pub fn admit_member(session: Option<Session>) -> Result<Session, PageError> {
    session.ok_or_else(|| PageError::Redirect(LOGIN_PATH.to_owned()))
}
