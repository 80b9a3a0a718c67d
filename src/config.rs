//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file picked up via `dotenvy`.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default storage file, created in the working directory.
pub const DEFAULT_STORAGE_PATH: &str = "address_book.dat";

/// Default page size for listing all contacts.
pub const DEFAULT_CHUNK_SIZE: usize = 5;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the address book file
    pub storage_path: PathBuf,

    /// Page size used internally when listing all contacts (default: 5)
    pub chunk_size: usize,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `ADDRESS_BOOK_PATH`: storage file path (default: `address_book.dat`)
    /// - `CHUNK_SIZE`: listing page size, at least 1 (default: 5)
    /// - `LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Pick up a .env file if present, without failing when absent.
        let _ = dotenvy::dotenv();

        let storage_path = env::var("ADDRESS_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH));

        let chunk_size = Self::parse_env_usize("CHUNK_SIZE", DEFAULT_CHUNK_SIZE)?;
        if chunk_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CHUNK_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            storage_path,
            chunk_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            chunk_size: DEFAULT_CHUNK_SIZE,
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.storage_path, PathBuf::from("address_book.dat"));
        assert_eq!(config.chunk_size, 5);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("ADDRESS_BOOK_PATH");
        env::remove_var("CHUNK_SIZE");
        env::remove_var("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.storage_path, PathBuf::from("address_book.dat"));
        assert_eq!(config.chunk_size, 5);
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PATH", "/tmp/contacts.dat");
        guard.set("CHUNK_SIZE", "3");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.storage_path, PathBuf::from("/tmp/contacts.dat"));
        assert_eq!(config.chunk_size, 3);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_rejects_zero_chunk_size() {
        let mut guard = EnvGuard::new();
        guard.set("CHUNK_SIZE", "0");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "CHUNK_SIZE");
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_non_numeric_chunk_size() {
        let mut guard = EnvGuard::new();
        guard.set("CHUNK_SIZE", "lots");

        assert!(Config::from_env().is_err());
    }
}
