//! Listener settings for the voting API
//!
//! Read from the `http` section of `votetally.json`; `PORT` overrides the
//! port after the file is loaded.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Interface the API listens on
    #[serde(default = "default_host")]
    pub host: String,

    /// 3001 unless configured
    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser origins allowed to call `/api`. Left empty, any origin may.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Defaults listening on `port`
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port` for the listener bind
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// No origin list means a permissive CORS layer
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listens_on_3001_by_default() {
        let config = HttpServerConfig::default();
        assert_eq!(config.socket_addr(), "0.0.0.0:3001");
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_port_override_keeps_host() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_origin_list_restricts_cors() {
        let config: HttpServerConfig =
            serde_json::from_str(r#"{"port": 4000, "cors_origins": ["http://localhost:3000"]}"#)
                .unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "0.0.0.0");
        assert!(!config.allows_any_origin());
    }
}
