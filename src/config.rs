use crate::search::SearchConfig;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Search engine configuration
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Built-in defaults are overridden by the TOML file at `CONFIG_PATH`
    /// (if present), which is overridden by `GLOBAL_SEARCH__`-prefixed
    /// environment variables (e.g. `GLOBAL_SEARCH__SEARCH__PER_MODEL_CAP`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default.toml".to_string());

        config::Config::builder()
            .add_source(config::File::with_name(&config_path).required(false))
            .add_source(
                config::Environment::with_prefix("GLOBAL_SEARCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8080
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.search.global_timeout_ms, 2000);
        assert_eq!(config.search.per_model_cap, 5);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nhttp_port = 9090\n\n[search]\nper_model_cap = 3\n"
        )
        .unwrap();

        std::env::set_var("CONFIG_PATH", file.path());
        let config = Config::load().unwrap();
        std::env::remove_var("CONFIG_PATH");

        assert_eq!(config.server.http_port, 9090);
        assert_eq!(config.search.per_model_cap, 3);
        // Unset values keep their defaults
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.search.global_timeout_ms, 2000);
    }
}
