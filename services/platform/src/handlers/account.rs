use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use sanctuary_auth_types::cookie::{clear_session_cookies, set_session_cookies};
use sanctuary_auth_types::token::validate_access_token;
use sanctuary_domain::id::UserId;

use crate::error::PlatformError;
use crate::session::AccessToken;
use crate::state::AppState;
use crate::usecase::account::{SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase};

// ── POST /auth/sign-up ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignUpRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub repeat_password: String,
    #[serde(default)]
    pub display_name: String,
    pub bio: Option<String>,
    #[serde(default)]
    pub journey_stage: String,
}

#[derive(Serialize)]
pub struct SignUpResponse {
    /// Where the client goes next: the auth service emails a confirmation link.
    pub next: &'static str,
}

pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<SignUpResponse>), PlatformError> {
    let uc = SignUpUseCase {
        auth: state.backend.clone(),
        email_redirect_to: state.signup_redirect_url.clone(),
    };
    uc.execute(SignUpInput {
        email: body.email,
        password: body.password,
        repeat_password: body.repeat_password,
        display_name: body.display_name,
        bio: body.bio,
        journey_stage: body.journey_stage,
    })
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            next: "/auth/sign-up-success",
        }),
    ))
}

// ── POST /auth/login ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct SignInResponse {
    pub user_id: UserId,
    pub expires_at: u64,
}

pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<SignInRequest>,
) -> Result<impl IntoResponse, PlatformError> {
    let uc = SignInUseCase {
        auth: state.backend.clone(),
    };
    let tokens = uc.execute(&body.email, &body.password).await?;

    let info = validate_access_token(&tokens.access_token, &state.jwt_secret)
        .map_err(|e| anyhow::anyhow!("auth service issued an unusable token: {e}"))?;

    let jar = set_session_cookies(
        jar,
        tokens.access_token,
        tokens.refresh_token,
        state.cookie_domain.clone(),
    );
    Ok((
        StatusCode::OK,
        jar,
        Json(SignInResponse {
            user_id: info.user_id,
            expires_at: info.exp,
        }),
    ))
}

// ── POST /auth/sign-out ──────────────────────────────────────────────────────

pub async fn sign_out(
    State(state): State<AppState>,
    Extension(AccessToken(access_token)): Extension<AccessToken>,
    jar: CookieJar,
) -> impl IntoResponse {
    let uc = SignOutUseCase {
        auth: state.backend.clone(),
    };
    uc.execute(access_token.as_deref()).await;
    let jar = clear_session_cookies(jar, state.cookie_domain.clone());
    (StatusCode::NO_CONTENT, jar)
}
