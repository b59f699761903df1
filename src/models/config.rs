//! Configuration model loaded from external sources.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Signs the session and flash-message cookies; at least 64 bytes.
    pub secret: String,
}

impl ServerConfig {
    /// Layers `{config_dir}/default.yaml`, the optional
    /// `{config_dir}/{app_env}.yaml` and `APP_*` environment variables.
    pub fn load(config_dir: &Path, app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(config_dir.join("default")))
            .add_source(File::from(config_dir.join(app_env)).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const DEFAULT_YAML: &str = "\
domain: localhost
address: 127.0.0.1
port: 8080
templates_dir: templates/**/*
secret: default-secret
";

    #[test]
    fn profile_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.yaml"), DEFAULT_YAML).unwrap();
        fs::write(
            dir.path().join("production.yaml"),
            "domain: admin.example.com\nport: 9000\n",
        )
        .unwrap();

        let config = ServerConfig::load(dir.path(), "production").unwrap();

        assert_eq!(config.domain, "admin.example.com");
        assert_eq!(config.port, 9000);
        assert_eq!(config.address, "127.0.0.1");
    }

    #[test]
    fn missing_profile_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.yaml"), DEFAULT_YAML).unwrap();

        let config = ServerConfig::load(dir.path(), "local").unwrap();

        assert_eq!(config.templates_dir, "templates/**/*");
    }

    #[test]
    fn missing_default_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(ServerConfig::load(dir.path(), "local").is_err());
    }
}
