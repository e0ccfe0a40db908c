use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "http://localhost:5010";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5010";
const DEFAULT_IMAGE_DIR: &str = "wwwroot/images";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5010,http://localhost:5042";

pub struct Config {
    pub database_url: String,

    /// Public base URL, used to build the URIs image files are served from.
    pub app_url: String,
    pub bind_address: String,
    /// Directory uploaded image files are written to.
    pub image_dir: PathBuf,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url: env_or("APP_URL", DEFAULT_APP_URL)
                .trim_end_matches('/')
                .to_string(),
            bind_address: env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            image_dir: PathBuf::from(env_or("IMAGE_DIR", DEFAULT_IMAGE_DIR)),
            cors_origins: parse_origins(&env_or("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)),
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Splits a comma separated origin list, dropping blanks.
fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
