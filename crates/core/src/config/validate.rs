use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Catalog API key is non-empty when the section is present
/// - Export image base URL is a well-formed absolute URL
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Catalog validation
    if let Some(catalog) = &config.catalog {
        if catalog.api_key.is_empty() {
            return Err(ConfigError::ValidationError(
                "catalog.api_key cannot be empty".to_string(),
            ));
        }
    }

    // Export validation
    let image_base = reqwest::Url::parse(&config.export.image_base_url)
        .map_err(|e| ConfigError::ValidationError(format!("export.image_base_url: {}", e)))?;
    if image_base.host_str().is_none() {
        return Err(ConfigError::ValidationError(
            "export.image_base_url must have a host".to_string(),
        ));
    }

    if let Some(placeholder) = &config.export.placeholder_url {
        reqwest::Url::parse(placeholder)
            .map_err(|e| ConfigError::ValidationError(format!("export.placeholder_url: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CatalogConfig, ServerConfig};
    use std::net::IpAddr;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let config = Config {
            server: ServerConfig {
                host: "0.0.0.0".parse::<IpAddr>().unwrap(),
                port: 0,
                public_url: None,
            },
            ..Config::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_empty_api_key_fails() {
        let config = Config {
            catalog: Some(CatalogConfig {
                api_key: String::new(),
                base_url: None,
            }),
            ..Config::default()
        };
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_bad_image_base_url_fails() {
        let mut config = Config::default();
        config.export.image_base_url = "not a url".to_string();
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
