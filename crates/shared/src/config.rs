//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Graft price table configuration.
    #[serde(default)]
    pub pricing: PricingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Graft price table configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Path to the TOML price table document.
    #[serde(default = "default_table_path")]
    pub table_path: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            table_path: default_table_path(),
        }
    }
}

fn default_table_path() -> String {
    "config/price_table.toml".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("HEALWISE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            ["HEALWISE__SERVER__PORT", "HEALWISE__PRICING__TABLE_PATH"],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.pricing.table_path, "config/price_table.toml");
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("HEALWISE__SERVER__PORT", Some("9090")),
                ("HEALWISE__PRICING__TABLE_PATH", Some("/etc/healwise/prices.toml")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.pricing.table_path, "/etc/healwise/prices.toml");
            },
        );
    }
}
