mod errors;
mod file;
mod logging;

pub use errors::ConfigError;
pub use file::{CliOverrides, Config, MainSection, SoaSection};
pub use logging::LoggingConfig;
