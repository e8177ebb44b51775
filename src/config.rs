// src/config.rs
use std::env;

/// Listening port used when `PORT` is unset or not a number.
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Read the listening port from the `PORT` environment variable.
    pub fn from_env() -> Self {
        Self::from_port_value(env::var("PORT").ok())
    }

    fn from_port_value(raw: Option<String>) -> Self {
        let port = raw.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT);
        Self { port }
    }

    /// Address the server binds to. Always all interfaces.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        assert_eq!(ServerConfig::from_port_value(None).port, DEFAULT_PORT);
    }

    #[test]
    fn defaults_when_not_numeric() {
        let config = ServerConfig::from_port_value(Some("eight thousand".to_string()));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn parses_numeric_port() {
        let config = ServerConfig::from_port_value(Some("9090".to_string()));
        assert_eq!(config.port, 9090);
        assert_eq!(config.bind_addr(), "0.0.0.0:9090");
    }
}
