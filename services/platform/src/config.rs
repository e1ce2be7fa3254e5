/// Errors raised while loading [`PlatformConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Platform service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// PostgreSQL connection URL of the hosted backend database.
    pub database_url: String,
    /// Base URL of the hosted backend (auth + storage), e.g. "https://xyz.backend.co".
    pub backend_url: String,
    /// Public (anon) API key sent with every backend request.
    pub backend_anon_key: String,
    /// HMAC secret the hosted auth service signs session tokens with.
    pub backend_jwt_secret: String,
    /// Cookie domain attribute (root domain, e.g. "example.com").
    pub cookie_domain: String,
    /// TCP port to listen on (default 3120). Env var: `PLATFORM_PORT`.
    pub platform_port: u16,
    /// Where confirmation emails send new members. Env var: `SIGNUP_REDIRECT_URL`.
    pub signup_redirect_url: Option<String>,
}

impl PlatformConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let platform_port = match lookup("PLATFORM_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PLATFORM_PORT",
                value,
            })?,
            None => 3120,
        };
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            backend_url: required("BACKEND_URL")?.trim_end_matches('/').to_owned(),
            backend_anon_key: required("BACKEND_ANON_KEY")?,
            backend_jwt_secret: required("BACKEND_JWT_SECRET")?,
            cookie_domain: required("COOKIE_DOMAIN")?,
            platform_port,
            signup_redirect_url: lookup("SIGNUP_REDIRECT_URL").filter(|v| !v.is_empty()),
        })
    }
}
