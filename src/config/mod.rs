//! Configuration loading and management
//!
//! ```yaml
//! bind_address: "0.0.0.0:5000"
//! log_filter: "wellness_api=debug,tower_http=info"
//! cors:
//!   permissive: true
//! seed_demo_data: false
//! ```
//!
//! Every key is optional. `WELLNESS_BIND_ADDRESS` overrides `bind_address`
//! after the file is read.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the bind address
pub const BIND_ADDRESS_ENV: &str = "WELLNESS_BIND_ADDRESS";

/// Looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "wellness.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// CORS behaviour of the HTTP server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allow any origin, method and header
    pub permissive: bool,
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,

    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub log_filter: String,

    pub cors: CorsConfig,

    /// Load the demo catalog into the in-memory storage at startup
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
            log_filter: "wellness_api=info,tower_http=info".to_string(),
            cors: CorsConfig::default(),
            seed_demo_data: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Resolve the configuration for the binary
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used if present, else the built-in defaults. Environment overrides are
    /// applied last.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_yaml_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        Ok(config.with_bind_address_override(std::env::var(BIND_ADDRESS_ENV).ok()))
    }

    /// Replace the bind address when an override is set and non-empty
    pub fn with_bind_address_override(mut self, bind_address: Option<String>) -> Self {
        if let Some(addr) = bind_address.filter(|a| !a.trim().is_empty()) {
            self.bind_address = addr;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1:5000");
        assert_eq!(config.log_filter, "wellness_api=info,tower_http=info");
        assert!(!config.cors.permissive);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ServerConfig::from_yaml_str("cors:\n  permissive: true\n").unwrap();
        assert!(config.cors.permissive);
        assert_eq!(config.bind_address, "127.0.0.1:5000");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            ServerConfig::from_yaml_str("  \n").unwrap(),
            ServerConfig::default()
        );
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
bind_address: "0.0.0.0:8080"
log_filter: "wellness_api=debug"
cors:
  permissive: true
seed_demo_data: false
"#;
        let config = ServerConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.log_filter, "wellness_api=debug");
        assert!(config.cors.permissive);
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = ServerConfig::from_yaml_str("seed_demo_data: [not, a, bool]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_address: \"127.0.0.1:9000\"").unwrap();

        let config = ServerConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");

        let err = ServerConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("nope.yaml"));
    }

    #[test]
    fn test_bind_address_override() {
        let config = ServerConfig::default().with_bind_address_override(Some("0.0.0.0:80".into()));
        assert_eq!(config.bind_address, "0.0.0.0:80");

        let config = ServerConfig::default().with_bind_address_override(Some("  ".into()));
        assert_eq!(config.bind_address, "127.0.0.1:5000");
    }
}
