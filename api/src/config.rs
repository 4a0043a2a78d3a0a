use std::env;

/// Value `FixedDataService` hands out when `DATA_SERVICE_VALUE` is unset
pub const DEFAULT_DATA_SERVICE_VALUE: i32 = 21;

#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL URL; the in-memory user store is used when unset
    pub database_url: Option<String>,
    pub port: u16,
    /// What the data service reports from `retrieve_data`
    pub data_service_value: i32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            data_service_value: env::var("DATA_SERVICE_VALUE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DATA_SERVICE_VALUE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            port: 8080,
            data_service_value: DEFAULT_DATA_SERVICE_VALUE,
        }
    }
}
