use tracing_subscriber::EnvFilter;
use wildcard_dns_domain::{CliOverrides, Config, ConfigError};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> Result<Config, ConfigError> {
    Config::load(path, overrides)
}

/// Initializes tracing. Everything goes to stderr: stdout belongs to the
/// pipe protocol and must carry nothing but protocol lines.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
