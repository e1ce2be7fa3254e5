//! REST client for the hosted auth service and object storage.

use anyhow::{Context as _, anyhow};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::repository::{AuthServicePort, ObjectStorage};
use crate::domain::types::{SignUp, TokenPair};
use crate::error::PlatformError;

#[derive(Clone)]
pub struct BackendClient {
    pub http: Client,
    /// Without trailing slash.
    pub base_url: String,
    pub anon_key: String,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    display_name: &'a str,
    bio: Option<&'a str>,
    journey_stage: &'a str,
}

#[derive(Serialize)]
struct RedirectQuery<'a> {
    redirect_to: &'a str,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
}

/// Error body of the auth service. Field names differ per endpoint.
#[derive(Deserialize, Default)]
struct ErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
}

impl ErrorBody {
    async fn read(resp: Response) -> String {
        let body: ErrorBody = resp.json().await.unwrap_or_default();
        body.msg
            .or(body.error_description)
            .or(body.message)
            .unwrap_or_else(|| "request rejected".to_owned())
    }
}

impl BackendClient {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            anon_key: anon_key.to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Public URL of an object in a public bucket.
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        self.url(&format!("/storage/v1/object/public/{bucket}/{path}"))
    }

    async fn token_grant<B: Serialize>(
        &self,
        grant_type: &str,
        body: &B,
    ) -> Result<Response, PlatformError> {
        let resp = self
            .http
            .post(self.url(&format!("/auth/v1/token?grant_type={grant_type}")))
            .header("apikey", &self.anon_key)
            .json(body)
            .send()
            .await
            .with_context(|| format!("send {grant_type} grant"))?;
        Ok(resp)
    }
}

async fn read_tokens(resp: Response, what: &str) -> Result<TokenPair, PlatformError> {
    let tokens: TokenResponse = resp
        .json()
        .await
        .with_context(|| format!("decode {what} response"))?;
    Ok(TokenPair {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
    })
}

impl AuthServicePort for BackendClient {
    async fn sign_up(&self, request: &SignUp) -> Result<(), PlatformError> {
        let mut url = self.url("/auth/v1/signup");
        if let Some(redirect_to) = &request.email_redirect_to {
            let query = serde_qs::to_string(&RedirectQuery { redirect_to })
                .context("encode sign-up redirect")?;
            url = format!("{url}?{query}");
        }
        let body = SignUpBody {
            email: &request.email,
            password: &request.password,
            data: SignUpMetadata {
                display_name: &request.display_name,
                bio: request.bio.as_deref(),
                journey_stage: request.journey_stage.as_str(),
            },
        };
        let resp = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&body)
            .send()
            .await
            .context("send sign-up request")?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else if status.is_client_error() {
            Err(PlatformError::SignUpRejected(ErrorBody::read(resp).await))
        } else {
            Err(anyhow!("auth service returned {status} for sign-up").into())
        }
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<TokenPair, PlatformError> {
        let resp = self
            .token_grant("password", &PasswordGrant { email, password })
            .await?;
        match resp.status() {
            s if s.is_success() => read_tokens(resp, "password grant").await,
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => {
                Err(PlatformError::InvalidCredentials)
            }
            s => Err(anyhow!("auth service returned {s} for password grant").into()),
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, PlatformError> {
        let resp = self
            .token_grant("refresh_token", &RefreshGrant { refresh_token })
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("auth service returned {status} for refresh grant").into());
        }
        read_tokens(resp, "refresh grant").await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), PlatformError> {
        let resp = self
            .http
            .post(self.url("/auth/v1/logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .context("send logout request")?;
        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("auth service returned {status} for logout").into());
        }
        Ok(())
    }
}

impl ObjectStorage for BackendClient {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        access_token: &str,
    ) -> Result<String, PlatformError> {
        let resp = self
            .http
            .post(self.url(&format!("/storage/v1/object/{bucket}/{path}")))
            .header("apikey", &self.anon_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .bearer_auth(access_token)
            .body(bytes)
            .send()
            .await
            .context("upload object")?;
        let status = resp.status();
        if !status.is_success() {
            let reason = ErrorBody::read(resp).await;
            return Err(anyhow!("storage returned {status} for {bucket}/{path}: {reason}").into());
        }
        Ok(self.public_url(bucket, path))
    }
}
