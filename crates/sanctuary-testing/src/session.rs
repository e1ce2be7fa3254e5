//! Session cookies for integration tests.
//!
//! The hosted auth service issues the tokens in production. In tests,
//! `MockSession` signs equivalent tokens with the test secret so requests pass
//! through the real session middleware.

use std::time::{SystemTime, UNIX_EPOCH};

use sanctuary_auth_types::cookie::{SANCTUARY_ACCESS_TOKEN, SANCTUARY_REFRESH_TOKEN};
use sanctuary_auth_types::token::issue_access_token;
use sanctuary_domain::id::UserId;
use uuid::Uuid;

/// JWT secret shared by test configs and `MockSession`.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

/// Configurable identity carried by test requests.
pub struct MockSession {
    pub user_id: UserId,
    pub email: Option<String>,
}

impl MockSession {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            email: None,
        }
    }

    pub fn random() -> Self {
        Self::new(UserId(Uuid::new_v4()))
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_owned());
        self
    }

    /// A signed access token valid for one hour.
    pub fn access_token(&self) -> String {
        self.token_with_exp(now_secs() + 3600)
    }

    /// A signed access token that expired well outside the validation leeway.
    pub fn expired_access_token(&self) -> String {
        self.token_with_exp(now_secs() - 3600)
    }

    /// `Cookie` header value carrying a valid access token.
    pub fn cookie_header(&self) -> String {
        format!("{SANCTUARY_ACCESS_TOKEN}={}", self.access_token())
    }

    /// `Cookie` header value with an expired access token and a refresh token.
    pub fn expired_cookie_header(&self, refresh_token: &str) -> String {
        format!(
            "{SANCTUARY_ACCESS_TOKEN}={}; {SANCTUARY_REFRESH_TOKEN}={refresh_token}",
            self.expired_access_token()
        )
    }

    fn token_with_exp(&self, exp: u64) -> String {
        issue_access_token(self.user_id, self.email.as_deref(), exp, TEST_JWT_SECRET)
            .expect("test token signs")
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}
