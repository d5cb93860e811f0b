//! Environment-based application configuration.

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:4000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24 * 7;
const MIN_JWT_SECRET_LEN: usize = 32;

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,

    pub bind_address: String,
    pub cors_origin: String,

    /// Insert demo data on startup when the catalog is empty.
    pub seed_database: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_secret = required("JWT_SECRET")?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::InvalidEnvVar {
                name: "JWT_SECRET".to_string(),
                reason: format!("must be at least {} characters", MIN_JWT_SECRET_LEN),
            }
            .into());
        }

        let jwt_expiry_hours = match std::env::var("JWT_EXPIRY_HOURS") {
            Ok(value) => value
                .parse::<i64>()
                .ok()
                .filter(|hours| *hours > 0)
                .ok_or_else(|| ConfigError::InvalidEnvVar {
                    name: "JWT_EXPIRY_HOURS".to_string(),
                    reason: format!("'{}' is not a positive number of hours", value),
                })?,
            Err(_) => DEFAULT_JWT_EXPIRY_HOURS,
        };

        let seed_database = match std::env::var("SEED_DATABASE") {
            Ok(value) => parse_bool("SEED_DATABASE", &value)?,
            Err(_) => false,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret,
            jwt_expiry_hours,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
            seed_database,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("'{}' is not a boolean", other),
        }),
    }
}
