//! Client Configuration
//!
//! Resolved once at start-up from build-time environment.

use tracing::Level;

pub const DEFAULT_ENDPOINT: &str = "/graphql";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// GraphQL endpoint; a leading `/` is relative to the page origin
    pub endpoint: String,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read `TODO_GRAPHQL_ENDPOINT` and `TODO_LOG_LEVEL` as set when the
    /// bundle was built
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TODO_GRAPHQL_ENDPOINT"), option_env!("TODO_LOG_LEVEL"))
    }

    fn from_values(endpoint: Option<&str>, log_level: Option<&str>) -> Self {
        let pick = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };
        Self {
            endpoint: pick(endpoint, DEFAULT_ENDPOINT),
            log_level: pick(log_level, DEFAULT_LOG_LEVEL),
        }
    }

    /// Absolute endpoint URL for the HTTP client
    pub fn resolved_endpoint(&self, origin: Option<&str>) -> String {
        match origin {
            Some(origin) if self.endpoint.starts_with('/') => {
                format!("{}{}", origin.trim_end_matches('/'), self.endpoint)
            }
            _ => self.endpoint.clone(),
        }
    }

    /// Max log level; unknown names fall back to INFO
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset_or_blank() {
        assert_eq!(ClientConfig::from_values(None, None), ClientConfig::default());
        assert_eq!(ClientConfig::from_values(Some("  "), Some("")), ClientConfig::default());
    }

    #[test]
    fn test_values_override_defaults() {
        let config = ClientConfig::from_values(Some("https://api.example.com/gql"), Some("debug"));
        assert_eq!(config.endpoint, "https://api.example.com/gql");
        assert_eq!(config.level(), Level::DEBUG);
    }

    #[test]
    fn test_resolved_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(config.resolved_endpoint(Some("http://localhost:3000/")), "http://localhost:3000/graphql");
        assert_eq!(config.resolved_endpoint(None), "/graphql");

        let absolute = ClientConfig::from_values(Some("https://api.example.com/gql"), None);
        assert_eq!(absolute.resolved_endpoint(Some("http://localhost:3000")), "https://api.example.com/gql");
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = ClientConfig::from_values(None, Some("chatty"));
        assert_eq!(config.level(), Level::INFO);
    }
}
