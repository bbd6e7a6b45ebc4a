//! Configuration loading and typed config structures for the Nebula server.
//!
//! The configuration lives in `nebula-config.yaml` at the project root.
//! Every field has a default, so an empty or missing file yields a working
//! server on port 3000 with a four-system galaxy.

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use nebula_world::GalaxyConfig;
use nebula_world::constants::DEFAULT_SOLAR_SYSTEM_COUNT;
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is outside its accepted range.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Which value was rejected and why.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level server configuration.
///
/// Mirrors the structure of `nebula-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NebulaConfig {
    /// Galaxy generation settings.
    #[serde(default)]
    pub galaxy: GalaxySettings,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl NebulaConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override file values:
    /// - `PORT` overrides `server.port`
    /// - `NEBULA_SEED` overrides `galaxy.seed`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Load from `path` if it exists, otherwise start from defaults.
    ///
    /// Environment overrides apply in both cases.
    ///
    /// # Errors
    ///
    /// Same as [`NebulaConfig::from_file`].
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::from_file(path);
        }
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yml rejects an empty document; treat it as all defaults.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `PORT` and `NEBULA_SEED` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set but unparsable.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a value is set but unparsable.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("PORT") {
            self.server.port = val.trim().parse().ok().ok_or_else(|| ConfigError::Invalid {
                reason: format!("PORT must be a port number, got {val:?}"),
            })?;
        }
        if let Some(val) = lookup("NEBULA_SEED") {
            let seed = val.trim().parse().ok().ok_or_else(|| ConfigError::Invalid {
                reason: format!("NEBULA_SEED must be an unsigned integer, got {val:?}"),
            })?;
            self.galaxy.seed = Some(seed);
        }
        Ok(())
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.galaxy.generation_config().map(|_| ())
    }
}

/// Galaxy generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GalaxySettings {
    /// Number of solar systems in a freshly generated galaxy.
    #[serde(default = "default_solar_system_count")]
    pub solar_system_count: u32,

    /// Base seed for reproducible galaxies. Absent means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GalaxySettings {
    /// Validated generator configuration for these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the system count is above the
    /// generator's maximum.
    pub fn generation_config(&self) -> Result<GalaxyConfig, ConfigError> {
        GalaxyConfig::new(self.solar_system_count).map_err(|err| ConfigError::Invalid {
            reason: format!("galaxy.solar_system_count: {err}"),
        })
    }
}

impl Default for GalaxySettings {
    fn default() -> Self {
        Self {
            solar_system_count: default_solar_system_count(),
            seed: None,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built dashboard (`index.html` and assets).
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// Directory served under `/images`.
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_dir: default_public_dir(),
            images_dir: default_images_dir(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const fn default_solar_system_count() -> u32 {
    DEFAULT_SOLAR_SYSTEM_COUNT
}

const fn default_host() -> IpAddr {
    IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)
}

const fn default_port() -> u16 {
    3000
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use nebula_world::constants::MAX_SOLAR_SYSTEM_COUNT;

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn default_config_is_valid() {
        let config = NebulaConfig::default();
        assert_eq!(config.galaxy.solar_system_count, 4);
        assert_eq!(config.galaxy.seed, None);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.public_dir, PathBuf::from("public"));
        assert_eq!(config.server.images_dir, PathBuf::from("images"));
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
galaxy:
  solar_system_count: 12
  seed: 99

server:
  host: "127.0.0.1"
  port: 8080
  public_dir: "dist"
  images_dir: "assets/images"

logging:
  level: "debug"
"#;
        let config: Result<NebulaConfig, _> = serde_yml::from_str(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.galaxy.solar_system_count, 12);
        assert_eq!(config.galaxy.seed, Some(99));
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.public_dir, PathBuf::from("dist"));
        assert_eq!(config.logging.level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_minimal_yaml() {
        let config: Result<NebulaConfig, _> = serde_yml::from_str("galaxy:\n  seed: 7\n");
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.galaxy.seed, Some(7));
        assert_eq!(config.galaxy.solar_system_count, 4);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn parse_empty_yaml() {
        assert!(NebulaConfig::parse("").is_ok());
        assert!(NebulaConfig::parse("   \n").is_ok());
    }

    #[test]
    fn oversized_system_count_is_invalid() {
        let yaml = format!("galaxy:\n  solar_system_count: {}\n", MAX_SOLAR_SYSTEM_COUNT + 1);
        let config: Result<NebulaConfig, _> = serde_yml::from_str(&yaml);
        let config = config.ok().unwrap_or_default();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let result = NebulaConfig::parse("galaxy: [unterminated");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn overrides_replace_port_and_seed() {
        let env: BTreeMap<&str, &str> = [("PORT", "4100"), ("NEBULA_SEED", "12345")].into();
        let mut config = NebulaConfig::default();
        let result = config.apply_overrides(|key| env.get(key).map(|v| (*v).to_owned()));

        assert!(result.is_ok());
        assert_eq!(config.server.port, 4100);
        assert_eq!(config.galaxy.seed, Some(12345));
    }

    #[test]
    fn absent_overrides_change_nothing() {
        let mut config = NebulaConfig::default();
        assert!(config.apply_overrides(no_env).is_ok());
        assert_eq!(config, NebulaConfig::default());
    }

    #[test]
    fn unparsable_port_is_rejected() {
        let mut config = NebulaConfig::default();
        let result = config.apply_overrides(|key| (key == "PORT").then(|| "http".to_owned()));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn generation_config_carries_count() {
        let settings = GalaxySettings {
            solar_system_count: 9,
            seed: None,
        };
        let config = settings.generation_config().ok();
        assert_eq!(config.map(GalaxyConfig::solar_system_count), Some(9));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("nebula-config.yaml");
        if path.exists() {
            let config = NebulaConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
