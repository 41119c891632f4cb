/*!
# Moodlog

Moodlog is a mood journal: one record per day of how you felt, how strongly,
and a few words about it, plus the analytics that make a history of those
records useful.

## Core Features

- Record, update and delete daily emotion records (one per calendar day)
- Auto-saved drafts for today's entry
- Trend of emotional valence over a window of days
- Emotion distribution, diary keyword frequency and streak of recorded days
- First-run sample data so the analytics have something to show

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `catalog`: The fixed set of recordable emotions
- `record`: Record, draft and patch types with their validation rules
- `storage`: The `BlobStore` persistence port and its memory and file backends
- `store`: The record collection and its single-record operations
- `analytics`: Pure functions deriving trend, distribution, keywords and streak
- `ops`: Saving entries, confirmed reset, rendering and command dispatch
- `cli`, `config`, `logging`: Command line, environment configuration and tracing setup
- `errors`: Error handling infrastructure

## Usage Example

```rust,no_run
use chrono::Local;
use moodlog::storage::FileBlobStore;
use moodlog::store::{Bootstrap, RecordStore};
use moodlog::{Config, EmotionCatalog};

fn main() -> moodlog::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let catalog = EmotionCatalog::builtin();
    let mut store = RecordStore::new(FileBlobStore::open(&config.data_dir)?);
    store.initialize(Local::now().date_naive(), Bootstrap::SampleData(&catalog))?;

    println!("{} records", store.len());
    Ok(())
}
```
*/

/// Derived views: trend, distribution, keywords, streak
pub mod analytics;
/// The built-in emotion catalog
pub mod catalog;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Text helpers for labels, previews and relative dates
pub mod display;
/// Error types and utilities for error handling
pub mod errors;
/// Tracing subscriber initialization
pub mod logging;
/// High-level operations behind the command line
pub mod ops;
/// Record, draft and patch types
pub mod record;
/// Blob persistence backends
pub mod storage;
/// The record collection
pub mod store;

// Re-export important types for convenience
pub use catalog::{Emotion, EmotionCatalog};
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use record::{Draft, EmotionRecord, RecordDraft, RecordPatch};
pub use store::RecordStore;
