use std::fmt::Display;

use axum::http::StatusCode;

/// Handler for `GET /healthz`. The process is up.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Maps a dependency probe to a readiness status. Services wrap this in their
/// own `GET /readyz` handler with whatever probe they depend on.
pub fn readiness<E: Display>(probe: Result<(), E>) -> StatusCode {
    match probe {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "readiness probe failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
