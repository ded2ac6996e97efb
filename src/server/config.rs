use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Socket address the HTTP server binds to.
    pub server_address: SocketAddr,

    /// Origin allowed to make cross-origin requests; `None` disables CORS.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let server_address = std::env::var("SERVER_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_address: server_address.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidEnvVar {
                    name: "SERVER_ADDRESS".to_string(),
                    reason: e.to_string(),
                }
            })?,
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.is_empty()),
        })
    }
}
