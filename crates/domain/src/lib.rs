//! Wildcard DNS Domain Layer
pub mod config;
pub mod embedded;
pub mod query;
pub mod record;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use embedded::parse_embedded_ipv4;
pub use query::{Question, QueryType};
pub use record::{Answer, RecordType};
pub use zone::Zone;
