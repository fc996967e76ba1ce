//! Configuration Module
//!
//! Handles loading and managing cache limits from environment variables.

use std::env;

use crate::backend::{MAX_KEY_LENGTH, MAX_VALUE_SIZE};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. The library itself never reads the environment; `from_env`
/// exists for binary entry points.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum accepted key length in bytes
    pub max_key_length: usize,
    /// Maximum accepted value size in bytes
    pub max_value_size: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_KEY_LENGTH` - Maximum key length in bytes (default: 256)
    /// - `MAX_VALUE_SIZE` - Maximum value size in bytes (default: 1 MB)
    pub fn from_env() -> Self {
        Self {
            max_key_length: env::var("MAX_KEY_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(MAX_KEY_LENGTH),
            max_value_size: env::var("MAX_VALUE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(MAX_VALUE_SIZE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_key_length: MAX_KEY_LENGTH,
            max_value_size: MAX_VALUE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_key_length, MAX_KEY_LENGTH);
        assert_eq!(config.max_value_size, MAX_VALUE_SIZE);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("MAX_KEY_LENGTH");
        env::remove_var("MAX_VALUE_SIZE");

        let config = Config::from_env();
        assert_eq!(config.max_key_length, MAX_KEY_LENGTH);
        assert_eq!(config.max_value_size, MAX_VALUE_SIZE);
    }
}
