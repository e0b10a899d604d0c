pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const APP_CONFIG_DIR_ENV_VAR: &str = "APP_CONFIG_DIR";
    pub const APP_ENV_PREFIX: &str = "APP";
}

pub const DEFAULT_ENVIRONMENT: &str = "local";
pub const DEFAULT_CONFIG_DIR: &str = "config";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const POSTGRES_MAX_CONNECTIONS: i64 = 5;

    pub mod facebook {
        pub const BASE_URL: &str = "https://graph.facebook.com/";
        pub const API_VERSION: &str = "v18.0";
        pub const TIMEOUT_IN_MILLIS: i64 = 10_000;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";

    pub mod facebook {
        use std::time::Duration;

        pub const API_VERSION: &str = "v18.0";
        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
