//! Application settings loaded from the environment.
//!
//! The binary reads two optional variables: `SHUTTERDESK_FIXTURES` pointing at
//! a TOML fixture file (the built-in sample data is used when unset) and
//! `SHUTTERDESK_DISPLAY_LIMIT` capping the dashboard's top-N lists.

use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Environment variable naming an optional TOML fixture file
const FIXTURES_ENV: &str = "SHUTTERDESK_FIXTURES";

/// Environment variable capping the dashboard's top-N lists
const DISPLAY_LIMIT_ENV: &str = "SHUTTERDESK_DISPLAY_LIMIT";

/// Default cap for top-client and upcoming-booking lists
const DEFAULT_DISPLAY_LIMIT: usize = 5;

/// Runtime configuration for the dashboard binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Optional path to a TOML fixture file; `None` uses the built-in sample data
    pub fixtures_path: Option<PathBuf>,
    /// Maximum entries shown in top-N dashboard lists
    pub display_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fixtures_path: None,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

/// Loads application configuration from the environment.
///
/// Both variables are optional; defaults apply when they are unset.
///
/// # Errors
/// Returns `Error::Config` if `SHUTTERDESK_DISPLAY_LIMIT` is set but is not a
/// positive integer.
pub fn load_app_configuration() -> Result<AppConfig> {
    let fixtures_path = std::env::var(FIXTURES_ENV).ok().map(PathBuf::from);
    let display_limit = match std::env::var(DISPLAY_LIMIT_ENV) {
        Ok(raw) => parse_display_limit(&raw)?,
        Err(_) => DEFAULT_DISPLAY_LIMIT,
    };

    Ok(AppConfig {
        fixtures_path,
        display_limit,
    })
}

/// Parses and validates a display-limit value.
fn parse_display_limit(raw: &str) -> Result<usize> {
    let limit: usize = raw.trim().parse().map_err(|e| Error::Config {
        message: format!("Invalid {DISPLAY_LIMIT_ENV} value '{raw}': {e}"),
    })?;

    if limit == 0 {
        return Err(Error::Config {
            message: format!("{DISPLAY_LIMIT_ENV} must be at least 1"),
        });
    }

    Ok(limit)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.fixtures_path.is_none());
        assert_eq!(config.display_limit, 5);
    }

    #[test]
    fn test_parse_display_limit_valid() {
        assert_eq!(parse_display_limit("3").unwrap(), 3);
        assert_eq!(parse_display_limit(" 10 ").unwrap(), 10);
    }

    #[test]
    fn test_parse_display_limit_rejects_garbage() {
        let result = parse_display_limit("five");
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            Error::Config { message: _ }
        ));
    }

    #[test]
    fn test_parse_display_limit_rejects_zero() {
        let result = parse_display_limit("0");
        assert!(result.is_err());
    }
}
