//! Configuration management for the moodlog application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `MOODLOG_DIR`: Path to the data directory (defaults to ~/.moodlog)
//! - `MOODLOG_SEED`: Whether a first run fills the journal with sample records (defaults to true)
//! - `MOODLOG_TREND_DAYS`: Default number of days shown by `trend` (defaults to 30)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DATA_SUBDIR, DEFAULT_TREND_DAYS, ENV_VAR_HOME, ENV_VAR_MOODLOG_DIR,
    ENV_VAR_MOODLOG_SEED, ENV_VAR_MOODLOG_TREND_DAYS, MAX_TREND_DAYS, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the moodlog application.
///
/// # Examples
///
/// ```
/// use moodlog::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
///     seed_sample_data: false,
///     trend_days: 7,
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Directory holding the stored records and draft.
    pub data_dir: PathBuf,

    /// Whether an empty or unreadable store is filled with sample records.
    pub seed_sample_data: bool,

    /// Default trend window in days.
    pub trend_days: usize,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &REDACTED_PLACEHOLDER)
            .field("seed_sample_data", &self.seed_sample_data)
            .field("trend_days", &self.trend_days)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(""),
            seed_sample_data: true,
            trend_days: DEFAULT_TREND_DAYS,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory is expanded with `shellexpand`, so `~` and `$VARS`
    /// work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails or yields an empty path
    /// - `MOODLOG_SEED` is not a boolean
    /// - `MOODLOG_TREND_DAYS` is not a positive integer
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_MOODLOG_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let seed_sample_data = match env::var(ENV_VAR_MOODLOG_SEED) {
            Ok(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::Config(format!(
                    "{} must be true or false, got '{}'",
                    ENV_VAR_MOODLOG_SEED, raw
                ))
            })?,
            Err(_) => true,
        };

        let trend_days = match env::var(ENV_VAR_MOODLOG_TREND_DAYS) {
            Ok(raw) => raw.trim().parse::<usize>().map_err(|_| {
                AppError::Config(format!(
                    "{} must be a positive number of days, got '{}'",
                    ENV_VAR_MOODLOG_TREND_DAYS, raw
                ))
            })?,
            Err(_) => DEFAULT_TREND_DAYS,
        };

        Ok(Config {
            data_dir,
            seed_sample_data,
            trend_days,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory is empty or relative,
    /// or the trend window is zero or longer than `MAX_TREND_DAYS`.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        if self.trend_days == 0 {
            return Err(AppError::Config(
                "Trend window must be at least one day".to_string(),
            ));
        }

        if self.trend_days > MAX_TREND_DAYS {
            return Err(AppError::Config(format!(
                "Trend window must be at most {} days, got {}",
                MAX_TREND_DAYS, self.trend_days
            )));
        }

        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    struct EnvGuard {
        saved: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn clear() -> Self {
            let keys = [
                ENV_VAR_MOODLOG_DIR,
                ENV_VAR_MOODLOG_SEED,
                ENV_VAR_MOODLOG_TREND_DAYS,
                ENV_VAR_HOME,
            ];
            let saved = keys.iter().map(|k| (*k, env::var(k).ok())).collect();
            for key in keys {
                env::remove_var(key);
            }
            EnvGuard { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
        }
    }

    #[test]
    fn test_debug_impl_redacts_path() {
        let config = Config {
            data_dir: PathBuf::from("/home/username/private/moods"),
            ..Config::default()
        };

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains(REDACTED_PLACEHOLDER));
        assert!(!debug_output.contains("/home/username/private/moods"));
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        let _guard = EnvGuard::clear();
        let home = tempdir().unwrap();
        env::set_var(ENV_VAR_HOME, home.path());

        let config = Config::load().unwrap();

        assert_eq!(config.data_dir, home.path().join(".moodlog"));
        assert!(config.seed_sample_data);
        assert_eq!(config.trend_days, DEFAULT_TREND_DAYS);
    }

    #[test]
    #[serial]
    fn test_load_with_custom_values() {
        let _guard = EnvGuard::clear();
        let temp_dir = tempdir().unwrap();
        let dir_path = temp_dir.path().to_string_lossy().to_string();

        env::set_var(ENV_VAR_MOODLOG_DIR, &dir_path);
        env::set_var(ENV_VAR_MOODLOG_SEED, "false");
        env::set_var(ENV_VAR_MOODLOG_TREND_DAYS, "7");

        let config = Config::load().unwrap();

        assert_eq!(config.data_dir, PathBuf::from(dir_path));
        assert!(!config.seed_sample_data);
        assert_eq!(config.trend_days, 7);
    }

    #[test]
    #[serial]
    fn test_load_rejects_bad_seed_flag() {
        let _guard = EnvGuard::clear();
        env::set_var(ENV_VAR_MOODLOG_DIR, "/tmp/moodlog");
        env::set_var(ENV_VAR_MOODLOG_SEED, "maybe");

        match Config::load() {
            Err(AppError::Config(msg)) => assert!(msg.contains("MOODLOG_SEED")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_load_rejects_bad_trend_days() {
        let _guard = EnvGuard::clear();
        env::set_var(ENV_VAR_MOODLOG_DIR, "/tmp/moodlog");
        env::set_var(ENV_VAR_MOODLOG_TREND_DAYS, "a week");

        match Config::load() {
            Err(AppError::Config(msg)) => assert!(msg.contains("MOODLOG_TREND_DAYS")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_relative_dir() {
        let config = Config {
            data_dir: PathBuf::from("relative/path"),
            ..Config::default()
        };

        match config.validate() {
            Err(AppError::Config(message)) => {
                assert!(message.contains("must be an absolute path"))
            }
            _ => panic!("Expected Config error about relative path"),
        }
    }

    #[test]
    fn test_validate_empty_dir() {
        match Config::default().validate() {
            Err(AppError::Config(message)) => assert!(message.contains("path is empty")),
            _ => panic!("Expected Config error about empty path"),
        }
    }

    #[test]
    fn test_validate_zero_trend_days() {
        let config = Config {
            data_dir: PathBuf::from("/data"),
            trend_days: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_oversized_trend_days() {
        let config = Config {
            data_dir: PathBuf::from("/data"),
            trend_days: MAX_TREND_DAYS + 1,
            ..Config::default()
        };
        match config.validate() {
            Err(AppError::Config(message)) => assert!(message.contains("at most")),
            other => panic!("Expected Config error, got {:?}", other),
        }

        let at_limit = Config {
            trend_days: MAX_TREND_DAYS,
            ..config
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("2"), None);
    }
}
