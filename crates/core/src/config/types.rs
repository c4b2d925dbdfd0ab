use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Search client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Site base URL, with a trailing slash (default: "https://zooqle.com/")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// Overrides the User-Agent header sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: None,
        }
    }
}

fn default_base_url() -> String {
    "https://zooqle.com/".to_string()
}

fn default_timeout() -> u32 {
    30
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter when RUST_LOG is not set
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.client.base_url, "https://zooqle.com/");
        assert_eq!(config.client.timeout_secs, 30);
        assert!(config.client.user_agent.is_none());
        assert_eq!(config.logging.filter, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_deserialize_client_section() {
        let toml = r#"
[client]
base_url = "http://localhost:8080/"
timeout_secs = 5
user_agent = "my-agent/1.0"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.client.base_url, "http://localhost:8080/");
        assert_eq!(config.client.timeout_secs, 5);
        assert_eq!(config.client.user_agent.as_deref(), Some("my-agent/1.0"));
    }

    #[test]
    fn test_deserialize_logging_section() {
        let toml = r#"
[logging]
filter = "zooqle_core=debug"
json = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "zooqle_core=debug");
        assert!(config.logging.json);
        assert_eq!(config.client.timeout_secs, 30); // default
    }

    #[test]
    fn test_deserialize_wrong_type_fails() {
        let toml = r#"
[client]
timeout_secs = "soon"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
