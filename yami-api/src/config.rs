//! Configuration management for the API server
//!
//! Loads configuration from environment variables into a typed struct.
//!
//! # Environment Variables
//!
//! - `USER_POOL_ID`: Identity provider user pool id (required)
//! - `AWS_REGION`: Provider region (default: us-east-2)
//! - `CLIENT_ID_SECRET_NAME`: Secrets Manager entry holding the app client
//!   id (default: prod/yami/clientId)
//! - `API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `API_PORT`: Port to bind to (default: 8080)
//! - `RUST_LOG`: Log filter (default: info)

use serde::{Deserialize, Serialize};
use std::env;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Identity provider configuration
    pub pool: PoolConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

/// Identity provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// User pool id
    pub user_pool_id: String,

    /// Provider region (drives both the SDK and the JWKS URL)
    pub region: String,

    /// Secrets Manager entry holding the app client id
    pub client_id_secret_name: String,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `USER_POOL_ID` is missing or `API_PORT` is not a
    /// valid port number.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let api_port = env::var("API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()?;

        let user_pool_id = env::var("USER_POOL_ID")
            .map_err(|_| anyhow::anyhow!("USER_POOL_ID environment variable is required"))?;

        let region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-2".to_string());

        let client_id_secret_name =
            env::var("CLIENT_ID_SECRET_NAME").unwrap_or_else(|_| "prod/yami/clientId".to_string());

        Ok(Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
            },
            pool: PoolConfig {
                user_pool_id,
                region,
                client_id_secret_name,
            },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            pool: PoolConfig {
                user_pool_id: "us-east-2_AbCdEfGhI".to_string(),
                region: "us-east-2".to_string(),
                client_id_secret_name: "prod/yami/clientId".to_string(),
            },
        };

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
