use color_eyre::eyre::Result;
use reqwest::Client as HttpClient;
use social_auth_adapters::{
    config::AuthServiceSetting, identity::FacebookIdentityResolver,
    persistence::PostgresAccountStore,
};
use social_auth_service::{AuthService, configure_postgresql, telemetry::init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = AuthServiceSetting::build()?;

    // Setup database connection pool and run migrations
    let pg_pool = configure_postgresql(&config.postgres).await?;
    let account_store = PostgresAccountStore::new(pg_pool);

    // Create identity provider client
    let http_client = HttpClient::builder()
        .timeout(config.facebook.timeout())
        .build()?;

    let identity_resolver = FacebookIdentityResolver::new(
        config.facebook.base_url.clone(),
        config.facebook.api_version.clone(),
        http_client,
    );

    let auth_service = AuthService::new(identity_resolver, account_store);

    let listener = TcpListener::bind(config.application.address.as_str()).await?;
    tracing::info!("Starting social auth service...");

    auth_service
        .run_standalone(listener, Some(config.application.allowed_origins.clone()))
        .await?;

    Ok(())
}
