// File: src/logging.rs
// Purpose: tracing subscriber setup driven by LoggingConfig

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing::Level;

/// Parse the configured level name
pub fn parse_level(config: &LoggingConfig) -> Result<Level> {
    config
        .level
        .trim()
        .parse::<Level>()
        .with_context(|| format!("Invalid log level: {:?}", config.level))
}

/// Install a fmt subscriber at the configured level.
///
/// Returns `Ok(false)` when a global subscriber was already installed.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let level = parse_level(config)?;
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok();
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config(level: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
        }
    }

    #[rstest]
    #[case("info", Level::INFO)]
    #[case("DEBUG", Level::DEBUG)]
    #[case(" warn ", Level::WARN)]
    #[case("error", Level::ERROR)]
    #[case("trace", Level::TRACE)]
    fn test_parse_level(#[case] name: &str, #[case] expected: Level) {
        assert_eq!(parse_level(&config(name)).unwrap(), expected);
    }

    #[test]
    fn test_invalid_level() {
        let err = parse_level(&config("loud")).unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
        assert!(init(&config("loud")).is_err());
    }

    #[test]
    fn test_init_twice_is_not_an_error() {
        init(&config("debug")).unwrap();
        let second = init(&config("debug")).unwrap();
        assert!(!second);
    }
}
