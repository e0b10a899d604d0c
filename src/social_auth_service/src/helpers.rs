use secrecy::ExposeSecret;
use social_auth_adapters::config::PostgresSettings;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Configure and return a PostgreSQL connection pool
///
/// Connects with the configured URL and runs all pending migrations.
pub async fn configure_postgresql(settings: &PostgresSettings) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(settings.url.expose_secret(), settings.max_connections).await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}
