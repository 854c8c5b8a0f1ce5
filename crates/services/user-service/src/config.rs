//! User service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig, DEFAULT_HOST};

/// Default gRPC port for the user service
pub const DEFAULT_PORT: u16 = 50052;

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// gRPC bind address
    pub server: ServiceConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            server: ServiceConfig {
                host: env::var("USER_SERVICE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
                port: env::var("USER_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
            },
            database: DatabaseConfig {
                url: env::var("USER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: env::var("USER_SERVICE_DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: env::var("USER_SERVICE_DB_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
        }
    }

    /// Override the bind address (from CLI flags).
    pub fn with_bind(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            server: ServiceConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            database: DatabaseConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_bind_overrides() {
        let config = UserServiceConfig::default().with_bind(Some("127.0.0.1".into()), Some(6000));
        assert_eq!(config.server.bind_address(), "127.0.0.1:6000");
    }

    #[test]
    fn test_with_bind_keeps_defaults() {
        let config = UserServiceConfig::default().with_bind(None, None);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.server.host, DEFAULT_HOST);
    }
}
