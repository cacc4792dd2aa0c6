//! Configuration and logging utilities

pub mod config;
pub mod logging;

pub use config::{ConfigError, ConfigurationManager, LogLevel, TrackerConfig};
pub use logging::init_logging;
