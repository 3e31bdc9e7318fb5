//! Runtime configuration from environment variables.
//!
//! A `.env` file in the working directory is loaded first if present.
//! Command-line flags override anything set here.

use std::env;
use std::path::PathBuf;

use crate::error::{ConfigError, ConfigResult};

pub const DEFAULT_PHONEBOOK_NAME: &str = "Bradford Virtual Phonebook";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Shown in the welcome banner and listings.
    pub phonebook_name: String,

    /// Start with the six example people (default: true).
    pub seed_defaults: bool,

    /// JSON file of people to start from instead of the defaults.
    pub seed_file: Option<PathBuf>,

    /// Bad entries allowed per prompt before giving up; `None` asks forever.
    pub max_attempts: Option<usize>,

    /// Log level used when RUST_LOG is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Optional environment variables:
    /// - `PHONEBOOK_NAME` (default: "Bradford Virtual Phonebook")
    /// - `PHONEBOOK_SEED_DEFAULTS` (default: true)
    /// - `PHONEBOOK_SEED_FILE`
    /// - `PHONEBOOK_MAX_ATTEMPTS`, 0 for unlimited (default: unlimited)
    /// - `LOG_LEVEL` (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let phonebook_name = match env::var("PHONEBOOK_NAME") {
            Ok(name) if name.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "PHONEBOOK_NAME".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(name) => name.trim().to_string(),
            Err(_) => defaults.phonebook_name,
        };

        let seed_defaults = Self::parse_env_bool("PHONEBOOK_SEED_DEFAULTS", defaults.seed_defaults)?;
        let seed_file = env::var("PHONEBOOK_SEED_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let max_attempts = match Self::parse_env_usize("PHONEBOOK_MAX_ATTEMPTS", 0)? {
            0 => None,
            n => Some(n),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            phonebook_name,
            seed_defaults,
            seed_file,
            max_attempts,
            log_level,
        })
    }

    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            phonebook_name: DEFAULT_PHONEBOOK_NAME.to_string(),
            seed_defaults: true,
            seed_file: None,
            max_attempts: None,
            log_level: "warn".to_string(),
        }
    }
}
