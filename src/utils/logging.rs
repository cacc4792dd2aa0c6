//! Logger setup for binaries

use crate::utils::config::LogLevel;
use log::LevelFilter;

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::None => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
        }
    }
}

/// Install `env_logger` at the configured level. `RUST_LOG` still overrides
/// individual modules. Calling this twice is harmless.
pub fn init_logging(level: LogLevel) {
    let _ = env_logger::Builder::new()
        .filter_level(level.into())
        .parse_default_env()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(LevelFilter::from(LogLevel::None), LevelFilter::Off);
        assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::Warn);
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::Debug);
    }

    #[test]
    fn test_init_twice() {
        init_logging(LogLevel::Info);
        init_logging(LogLevel::Debug);
    }
}
