use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Why the access gate refused a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("authentication required")]
    AuthenticationRequired,
    #[error("admin access required")]
    AdminAccessRequired,
    #[error("insufficient permissions")]
    InsufficientPermissions,
}

impl AccessError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AuthenticationRequired => "AUTHENTICATION_REQUIRED",
            Self::AdminAccessRequired => "ADMIN_ACCESS_REQUIRED",
            Self::InsufficientPermissions => "INSUFFICIENT_PERMISSIONS",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            Self::AdminAccessRequired | Self::InsufficientPermissions => StatusCode::FORBIDDEN,
        }
    }
}

/// Platform service error variants.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("profile not found")]
    ProfileNotFound,
    #[error("post not found")]
    PostNotFound,
    #[error("content not found")]
    ContentNotFound,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("{0} must be a whole number")]
    InvalidNumber(&'static str),
    #[error("{0}")]
    InvalidValue(String),
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("password must be at least 6 characters")]
    PasswordTooShort,
    #[error("invalid login credentials")]
    InvalidCredentials,
    #[error("sign-up rejected: {0}")]
    SignUpRejected(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl PlatformError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Access(e) => e.kind(),
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::PostNotFound => "POST_NOT_FOUND",
            Self::ContentNotFound => "CONTENT_NOT_FOUND",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidNumber(_) => "INVALID_NUMBER",
            Self::InvalidValue(_) => "INVALID_VALUE",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::PasswordTooShort => "PASSWORD_TOO_SHORT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::SignUpRejected(_) => "SIGN_UP_REJECTED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<sanctuary_domain::content::UnknownVariant> for PlatformError {
    fn from(e: sanctuary_domain::content::UnknownVariant) -> Self {
        Self::InvalidValue(e.to_string())
    }
}

impl From<sanctuary_domain::journey::UnknownJourneyStage> for PlatformError {
    fn from(e: sanctuary_domain::journey::UnknownJourneyStage) -> Self {
        Self::InvalidValue(e.to_string())
    }
}

impl IntoResponse for PlatformError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Access(e) => e.status(),
            Self::ProfileNotFound | Self::PostNotFound | Self::ContentNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::MissingField(_)
            | Self::InvalidNumber(_)
            | Self::InvalidValue(_)
            | Self::PasswordMismatch
            | Self::PasswordTooShort
            | Self::SignUpRejected(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // TraceLayer already records every status; only internal errors carry a
        // cause worth logging.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
