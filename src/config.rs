use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

pub struct Config {
    pub database_url: String,

    /// Secret used to sign and verify bearer tokens.
    pub token_secret: String,
    pub token_ttl_hours: i64,

    pub bind_addr: String,

    /// Optional credentials for the startup admin seed. When both are set
    /// and no admin user exists, one is created on boot.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            token_secret: std::env::var("TOKEN_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("TOKEN_SECRET".to_string()))?,
            token_ttl_hours: match std::env::var("TOKEN_TTL_HOURS") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar("TOKEN_TTL_HOURS".to_string()))?,
                Err(_) => DEFAULT_TOKEN_TTL_HOURS,
            },
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        })
    }
}
