//! Configuration types and loading
//!
//! Defaults cover a local demo install; environment variables override them.

use serde::{Deserialize, Serialize};

use crate::types::StatusPrecedence;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub status: StatusConfig,
    pub auth: AuthConfig,
    pub instance: InstanceConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusConfig {
    /// Which pass wins when progress and deadline disagree
    pub precedence: StatusPrecedence,
    /// Run the recheck at startup, next local midnight and every 24h after
    pub daily_recheck: bool,
    /// Horizon for the dashboard's upcoming deadlines
    pub upcoming_days: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Storage key holding the serialized session user
    pub session_key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstanceConfig {
    pub app_title: String,
    pub currency_symbol: String,
    /// Load the demo projects, stock and users at startup
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            status: StatusConfig {
                precedence: StatusPrecedence::Progress,
                daily_recheck: true,
                upcoming_days: 7,
            },
            auth: AuthConfig {
                session_key: "projectManager_user".to_string(),
            },
            instance: InstanceConfig {
                app_title: "Print Shop CRM".to_string(),
                currency_symbol: "$".to_string(),
                seed_demo_data: true,
            },
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

fn parse_bool(v: &str) -> bool {
    matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup over the defaults.
    ///
    /// Unparsable numbers fall back to the default with a warning; an unknown
    /// status precedence is an error since it changes derived data.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Server
        if let Some(host) = lookup("HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.server.port = port.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %port, "Invalid PORT, using 8080");
                8080
            });
        }

        // Status derivation
        if let Some(precedence) = lookup("CRM_STATUS_PRECEDENCE") {
            config.status.precedence =
                precedence
                    .parse::<StatusPrecedence>()
                    .map_err(|message| ConfigError::InvalidValue {
                        key: "CRM_STATUS_PRECEDENCE".to_string(),
                        message,
                    })?;
        }
        if let Some(v) = lookup("CRM_DAILY_RECHECK") {
            config.status.daily_recheck = parse_bool(&v);
        }
        if let Some(days) = lookup("CRM_UPCOMING_DAYS") {
            config.status.upcoming_days = days.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %days, "Invalid CRM_UPCOMING_DAYS, using 7");
                7
            });
        }

        // Session
        if let Some(key) = lookup("CRM_SESSION_KEY") {
            config.auth.session_key = key;
        }

        // Instance
        if let Some(title) = lookup("CRM_APP_TITLE") {
            config.instance.app_title = title;
        }
        if let Some(symbol) = lookup("CRM_CURRENCY_SYMBOL") {
            config.instance.currency_symbol = symbol;
        }
        if let Some(v) = lookup("CRM_SEED_DEMO_DATA") {
            config.instance.seed_demo_data = parse_bool(&v);
        }

        Ok(config)
    }

    /// Get the server address
    pub fn server_addr(&self) -> std::net::SocketAddr {
        use std::net::SocketAddr;
        let ip: std::net::IpAddr = self.server.host.parse().unwrap_or([0, 0, 0, 0].into());
        SocketAddr::new(ip, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.status.precedence, StatusPrecedence::Progress);
        assert_eq!(config.auth.session_key, "projectManager_user");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "3000"),
            ("CRM_STATUS_PRECEDENCE", "deadline"),
            ("CRM_DAILY_RECHECK", "no"),
            ("CRM_SEED_DEMO_DATA", "0"),
        ]))
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.status.precedence, StatusPrecedence::Deadline);
        assert!(!config.status.daily_recheck);
        assert!(!config.instance.seed_demo_data);
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_unknown_precedence_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[("CRM_STATUS_PRECEDENCE", "coin")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_server_addr() {
        let config = AppConfig::default();
        let addr = config.server_addr();
        assert_eq!(addr.port(), 8080);
    }
}
