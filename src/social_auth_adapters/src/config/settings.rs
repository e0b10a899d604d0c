use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{DEFAULT_CONFIG_DIR, DEFAULT_ENVIRONMENT, env, prod};

#[derive(Debug, Clone, Deserialize)]
pub struct AuthServiceSetting {
    pub application: ApplicationSettings,
    pub postgres: PostgresSettings,
    pub facebook: FacebookSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacebookSettings {
    pub base_url: String,
    pub api_version: String,
    pub timeout_in_millis: u64,
}

impl FacebookSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

/// CORS origins permitted to call the service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }
}

impl AuthServiceSetting {
    /// Load settings for the current process.
    ///
    /// Sources, lowest precedence first: built-in defaults,
    /// `{APP_CONFIG_DIR}/base.*`, `{APP_CONFIG_DIR}/{APP_ENVIRONMENT}.*`,
    /// then `APP__SECTION__KEY` environment variables. A `.env` file is read
    /// into the environment beforehand when present.
    pub fn build() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config_dir = std::env::var(env::APP_CONFIG_DIR_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));
        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        Self::from_dir(&config_dir, &environment)
    }

    pub fn from_dir(config_dir: &Path, environment: &str) -> Result<Self, ConfigError> {
        let base = config_dir.join("base");
        let overrides = config_dir.join(environment);

        Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("postgres.max_connections", prod::POSTGRES_MAX_CONNECTIONS)?
            .set_default("facebook.base_url", prod::facebook::BASE_URL)?
            .set_default("facebook.api_version", prod::facebook::API_VERSION)?
            .set_default(
                "facebook.timeout_in_millis",
                prod::facebook::TIMEOUT_IN_MILLIS,
            )?
            .add_source(File::with_name(&base.to_string_lossy()).required(false))
            .add_source(File::with_name(&overrides.to_string_lossy()).required(false))
            .add_source(
                Environment::with_prefix(env::APP_ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("application.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
