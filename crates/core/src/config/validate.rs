use url::Url;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Client base URL is an absolute http(s) URL ending with '/'
/// - Client timeout is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let base_url = Url::parse(&config.client.base_url).map_err(|e| {
        ConfigError::ValidationError(format!(
            "client.base_url is not a valid URL ({}): {}",
            config.client.base_url, e
        ))
    })?;

    if !matches!(base_url.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError(format!(
            "client.base_url must use http or https, got {}",
            base_url.scheme()
        )));
    }

    if !config.client.base_url.ends_with('/') {
        return Err(ConfigError::ValidationError(
            "client.base_url must end with '/'".to_string(),
        ));
    }

    if config.client.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "client.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
