use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;

/// Main configuration structure for the wildcard DNS backend
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub main: MainSection,

    pub soa: SoaSection,

    /// Name server name -> IPv4 address; bare labels are qualified with the
    /// zone domain when the snapshot is built
    pub nameservers: BTreeMap<String, String>,

    /// Static CNAME overrides, alias -> canonical target
    #[serde(default)]
    pub cnames: BTreeMap<String, String>,

    /// Static TXT overrides, fully-qualified name -> payload
    #[serde(default)]
    pub txt: BTreeMap<String, String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MainSection {
    /// Authoritative domain suffix
    pub domain: String,

    /// Address answered at the zone apex
    pub ipaddress: String,

    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SoaSection {
    pub ns: String,

    pub hostmaster: String,

    /// Record identity token, also the SOA serial
    pub id: String,
}

fn default_ttl() -> u32 {
    300
}

impl Config {
    /// Load configuration from file
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. wildcard-dns.toml in current directory
    /// 3. /etc/wildcard-dns/config.toml
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("wildcard-dns.toml").exists() {
            Self::from_file("wildcard-dns.toml")?
        } else if std::path::Path::new("/etc/wildcard-dns/config.toml").exists() {
            Self::from_file("/etc/wildcard-dns/config.toml")?
        } else {
            return Err(ConfigError::NotFound(
                "wildcard-dns.toml, /etc/wildcard-dns/config.toml".to_string(),
            ));
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.main.domain.is_empty() {
            return Err(ConfigError::Validation(
                "main.domain cannot be empty".to_string(),
            ));
        }

        if self.nameservers.is_empty() {
            return Err(ConfigError::Validation(
                "No name servers configured".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
}
