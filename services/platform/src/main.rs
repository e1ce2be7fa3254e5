use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use sanctuary_core::tracing::{DEFAULT_FILTER, init_tracing};
use sanctuary_platform::config::PlatformConfig;
use sanctuary_platform::infra::backend::BackendClient;
use sanctuary_platform::router::build_router;
use sanctuary_platform::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(DEFAULT_FILTER);

    let config = PlatformConfig::from_env().context("invalid configuration")?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let state = AppState {
        db: Arc::new(db),
        backend: BackendClient::new(&config.backend_url, &config.backend_anon_key),
        jwt_secret: config.backend_jwt_secret,
        cookie_domain: config.cookie_domain,
        signup_redirect_url: config.signup_redirect_url,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.platform_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("platform service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
