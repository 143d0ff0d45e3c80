//! Logging setup
//!
//! Structured logging for research scripts, replacing ad-hoc prints. The
//! hosting application calls [`init`] once at startup with an explicit
//! [`LoggingConfig`]; the level can be overridden through an environment
//! variable named by the config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default verbosity when the environment variable is unset
    pub level: String,
    /// Name of the environment variable that overrides the level
    pub env_var: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            env_var: "LOG_LEVEL".to_string(),
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// The override variable is read once here. Invalid filter directives fall
/// back to `info`. Calling this more than once per process is harmless;
/// later calls leave the first subscriber in place.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = std::env::var(&config.env_var).unwrap_or_else(|_| config.level.clone());
    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init()
        .ok();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.env_var, "LOG_LEVEL");
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig::default();
        init(&config).unwrap();
        init(&config).unwrap();
    }

    #[test]
    fn test_init_with_invalid_level() {
        // Falls back to "info" instead of failing
        let config = LoggingConfig {
            level: "not-a-level!!".to_string(),
            ..Default::default()
        };
        init(&config).unwrap();
    }
}
