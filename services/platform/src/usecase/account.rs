use sanctuary_domain::journey::JourneyStage;

use crate::domain::repository::AuthServicePort;
use crate::domain::types::{MIN_PASSWORD_LEN, SignUp, TokenPair};
use crate::error::PlatformError;
use crate::usecase::content::{optional_text, required_text};

// ── SignUp ───────────────────────────────────────────────────────────────────

pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub repeat_password: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub journey_stage: String,
}

/// Validate a sign-up form and forward it to the hosted auth service.
pub struct SignUpUseCase<A: AuthServicePort> {
    pub auth: A,
    pub email_redirect_to: Option<String>,
}

impl<A: AuthServicePort> SignUpUseCase<A> {
    pub async fn execute(&self, input: SignUpInput) -> Result<(), PlatformError> {
        let email = required_text("email", &input.email)?;
        if input.password != input.repeat_password {
            return Err(PlatformError::PasswordMismatch);
        }
        if input.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(PlatformError::PasswordTooShort);
        }
        let display_name = required_text("display_name", &input.display_name)?;
        let journey_stage: JourneyStage =
            required_text("journey_stage", &input.journey_stage)?.parse()?;

        self.auth
            .sign_up(&SignUp {
                email,
                password: input.password,
                display_name,
                bio: optional_text(input.bio),
                journey_stage,
                email_redirect_to: self.email_redirect_to.clone(),
            })
            .await
    }
}

// ── SignIn ───────────────────────────────────────────────────────────────────

pub struct SignInUseCase<A: AuthServicePort> {
    pub auth: A,
}

impl<A: AuthServicePort> SignInUseCase<A> {
    pub async fn execute(&self, email: &str, password: &str) -> Result<TokenPair, PlatformError> {
        let email = required_text("email", email)?;
        if password.is_empty() {
            return Err(PlatformError::MissingField("password"));
        }
        self.auth.sign_in_with_password(&email, password).await
    }
}

// ── SignOut ──────────────────────────────────────────────────────────────────

pub struct SignOutUseCase<A: AuthServicePort> {
    pub auth: A,
}

impl<A: AuthServicePort> SignOutUseCase<A> {
    /// Best-effort revocation; the caller clears cookies regardless.
    pub async fn execute(&self, access_token: Option<&str>) {
        let Some(token) = access_token else {
            return;
        };
        if let Err(e) = self.auth.sign_out(token).await {
            tracing::warn!(error = ?e, "auth service sign-out failed");
        }
    }
}
