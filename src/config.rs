//! Server configuration from the environment

use crate::dispatch::Flow;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8888;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Flow served on `/api/chat` and the legacy function path
    pub default_flow: Flow,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            default_flow: Flow::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Unusable values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("TYPE_GUIDE_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);

        let port = lookup("TYPE_GUIDE_PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(defaults.port);

        let default_flow = match lookup("TYPE_GUIDE_FLOW") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring TYPE_GUIDE_FLOW");
                defaults.default_flow
            }),
            None => defaults.default_flow,
        };

        Self {
            host,
            port,
            default_flow,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:8888");
        assert_eq!(config.default_flow, Flow::Guide);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("TYPE_GUIDE_HOST", "127.0.0.1"),
            ("TYPE_GUIDE_PORT", "9000"),
            ("TYPE_GUIDE_FLOW", "Palette"),
        ]);
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.default_flow, Flow::Palette);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config(&[
            ("TYPE_GUIDE_HOST", "  "),
            ("TYPE_GUIDE_PORT", "eighty"),
            ("TYPE_GUIDE_FLOW", "chat"),
        ]);
        assert_eq!(config, ServerConfig::default());
    }
}
