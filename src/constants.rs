//! Constants used throughout the application.
//!
//! This module contains all constants used in moodlog, organized into logical
//! groups. Having constants centralized makes them easier to find, modify, and
//! reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodlog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A mood journal: record how you feel, see how it trends";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the data directory.
pub const ENV_VAR_MOODLOG_DIR: &str = "MOODLOG_DIR";
/// Environment variable toggling sample-data generation on first run.
pub const ENV_VAR_MOODLOG_SEED: &str = "MOODLOG_SEED";
/// Environment variable for the default trend window in days.
pub const ENV_VAR_MOODLOG_TREND_DAYS: &str = "MOODLOG_TREND_DAYS";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for the data directory within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".moodlog";

/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Persisted State
/// Blob key holding the serialized record collection.
pub const RECORDS_KEY: &str = "emotion_records";
/// Blob key holding the auto-saved in-progress draft.
pub const DRAFT_KEY: &str = "emotion_draft";
/// File extension for blobs stored on disk.
pub const BLOB_FILE_EXTENSION: &str = "json";
/// Name of the lock file guarding a data directory.
pub const LOCK_FILE_NAME: &str = "LOCK";

// File System Parameters
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Record Limits
/// Lowest accepted intensity level.
pub const MIN_INTENSITY: u8 = 1;
/// Highest accepted intensity level.
pub const MAX_INTENSITY: u8 = 5;
/// Intensity used when the caller does not pick one.
pub const DEFAULT_INTENSITY: u8 = 3;
/// Maximum number of characters in a diary body.
pub const MAX_DIARY_CHARS: usize = 1000;
/// Maximum number of photos attached to one record.
pub const MAX_PHOTOS: usize = 3;
/// Lowest valence an emotion can carry.
pub const MIN_VALENCE: u8 = 1;
/// Highest valence an emotion can carry.
pub const MAX_VALENCE: u8 = 10;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Date format used for dates older than a week in history listings.
pub const DATE_FORMAT_SHORT: &str = "%b %d";
/// Number of days covered by generated sample data.
pub const SEED_WINDOW_DAYS: i64 = 30;
/// Probability that a seeded day receives a record.
pub const SEED_RECORD_PROBABILITY: f64 = 0.8;

// Analytics
/// Default number of days in a trend series.
pub const DEFAULT_TREND_DAYS: usize = 30;
/// Longest trend series, about ten years.
pub const MAX_TREND_DAYS: usize = 3650;
/// Value plotted for days without a record.
pub const NEUTRAL_TREND_VALUE: u8 = 5;
/// Label for trend points without a record.
pub const NO_RECORD_LABEL: &str = "No record";
/// Color used for distribution entries with no catalog match.
pub const FALLBACK_EMOTION_COLOR: &str = "#E5E5E5";
/// Maximum number of keyword entries returned.
pub const MAX_KEYWORDS: usize = 50;
/// Length of diary previews in listings.
pub const PREVIEW_CHARS: usize = 60;

// Reset
/// Phrase the user must type to wipe all data.
pub const RESET_CONFIRMATION_PHRASE: &str = "reset data";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "moodlog";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
