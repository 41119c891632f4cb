/*!
# Moodlog - A Mood Journal

Moodlog records one entry per day: the emotion you felt, how strongly, and a
short diary text. It keeps the history in a local data directory and derives
trends, emotion distribution, keyword frequency and streaks from it.

This file contains the main application flow, coordinating the various components
to implement the journal functionality.

## Usage

```
moodlog [OPTIONS] <COMMAND>

Commands:
  add       Record how you feel; replaces any record for the same day
  update    Change fields of an existing record
  delete    Delete a record by id
  show      Show the record for a day (defaults to today)
  list      List records, newest first
  trend     Day-by-day emotion values ending today
  stats     How often each emotion was recorded
  keywords  Most frequent diary keywords
  streak    Consecutive days recorded up to today
  summary   Record count, average intensity, top emotion and streak
  emotions  List the emotions that can be recorded
  draft     Work with today's unsaved draft
  reset     Delete every record and the draft

Options:
      --log-format <LOG_FORMAT>  Log output format on stderr [default: text] [possible values: text, json]
  -v, --verbose                  Print verbose (debug) logs
      --json                     Print results as JSON instead of text
```

## Configuration

- `MOODLOG_DIR`: The directory holding the data (defaults to "~/.moodlog")
- `MOODLOG_SEED`: Whether a first run generates sample records (defaults to true)
- `MOODLOG_TREND_DAYS`: Default trend window in days (defaults to 30)
*/

use chrono::Local;
use moodlog::cli::CliArgs;
use moodlog::config::Config;
use moodlog::errors::AppResult;
use moodlog::logging;
use moodlog::ops::{self, CommandContext};
use moodlog::storage::FileBlobStore;
use moodlog::store::{Bootstrap, BootstrapOutcome, RecordStore};
use moodlog::EmotionCatalog;
use tracing::{debug, error, info};

/// The main entry point for the moodlog application.
///
/// This function coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging and the invocation span
/// 3. Loads and validates configuration
/// 4. Opens (and locks) the data directory
/// 5. Loads the record collection, bootstrapping it on first run
/// 6. Runs the requested command and prints its output
///
/// # Errors
///
/// Any error is logged once here and returned, so the process exits non-zero.
fn main() -> AppResult<()> {
    // Obtain the current date once at the beginning
    let current_date = Local::now().date_naive();

    let args = CliArgs::parse();
    logging::init_tracing(&args.log_format, args.verbose)?;

    let span = logging::invocation_span();
    let _guard = span.enter();

    run(args, current_date).map_err(|e| {
        error!(error = %e, "moodlog failed");
        e
    })
}

fn run(args: CliArgs, current_date: chrono::NaiveDate) -> AppResult<()> {
    info!("Starting moodlog");
    debug!("CLI arguments: {:?}", args);

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let catalog = EmotionCatalog::builtin();
    let blobs = FileBlobStore::open(&config.data_dir)?;
    let mut store = RecordStore::new(blobs);

    let bootstrap = if config.seed_sample_data {
        Bootstrap::SampleData(&catalog)
    } else {
        Bootstrap::Empty
    };
    match store.initialize(current_date, bootstrap)? {
        BootstrapOutcome::Loaded(count) => debug!(count, "Records loaded"),
        BootstrapOutcome::Seeded(count) => info!(count, "First run: generated sample records"),
        BootstrapOutcome::Empty => debug!("Starting with an empty journal"),
    }

    let ctx = CommandContext {
        catalog: &catalog,
        today: current_date,
        default_trend_days: config.trend_days,
        json: args.json,
    };
    let output = ops::run_command(&mut store, args.command, &ctx)?;
    println!("{}", output);

    info!("Command completed successfully");
    Ok(())
}
