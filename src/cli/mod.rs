use crate::constants::{
    APP_DESCRIPTION, APP_NAME, DATE_FORMAT_COMPACT, DEFAULT_INTENSITY, LOG_FORMAT_JSON,
    LOG_FORMAT_TEXT,
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::str::FromStr;
use uuid::Uuid;

/// A mood journal: record how you feel, see how it trends
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Log output format on stderr
    #[clap(
        long,
        global = true,
        default_value = LOG_FORMAT_TEXT,
        value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON]
    )]
    pub log_format: String,

    /// Print verbose (debug) logs
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Print results as JSON instead of text
    #[clap(long, global = true)]
    pub json: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record how you feel; replaces any record for the same day
    Add(AddArgs),
    /// Change fields of an existing record
    Update(UpdateArgs),
    /// Delete a record by id
    Delete {
        /// Record id
        id: Uuid,
    },
    /// Show the record for a day (defaults to today)
    Show {
        /// Day to show (format: YYYY-MM-DD or YYYYMMDD)
        #[clap(short = 'd', long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// List records, newest first
    List {
        /// First day to include
        #[clap(long, value_parser = parse_date)]
        from: Option<NaiveDate>,
        /// Last day to include
        #[clap(long, value_parser = parse_date)]
        to: Option<NaiveDate>,
        /// Only records whose emotion or diary contains this text
        #[clap(short = 's', long)]
        search: Option<String>,
    },
    /// Day-by-day emotion values ending today
    Trend {
        /// Number of days to show
        #[clap(long, conflicts_with = "all")]
        days: Option<usize>,
        /// Cover as many days as there are records
        #[clap(long)]
        all: bool,
    },
    /// How often each emotion was recorded
    Stats,
    /// Most frequent diary keywords
    Keywords,
    /// Consecutive days recorded up to today
    Streak,
    /// Record count, average intensity, top emotion and streak
    Summary,
    /// List the emotions that can be recorded
    Emotions,
    /// Work with today's unsaved draft
    Draft {
        #[clap(subcommand)]
        action: DraftCommand,
    },
    /// Delete every record and the draft
    Reset {
        /// Type the confirmation phrase "reset data"
        #[clap(long)]
        confirm: String,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Emotion id (see `moodlog emotions`)
    #[clap(short = 'e', long)]
    pub emotion: String,

    /// Intensity from 1 to 5
    #[clap(short = 'i', long, default_value_t = DEFAULT_INTENSITY)]
    pub intensity: u8,

    /// Diary text
    #[clap(short = 't', long)]
    pub diary: String,

    /// Day of the record (format: YYYY-MM-DD or YYYYMMDD; defaults to today)
    #[clap(short = 'd', long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Encoded photo; may be repeated
    #[clap(long = "photo")]
    pub photos: Vec<String>,

    /// Encoded audio clip
    #[clap(long)]
    pub audio: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Record id
    pub id: Uuid,

    /// New emotion id
    #[clap(short = 'e', long)]
    pub emotion: Option<String>,

    /// New intensity from 1 to 5
    #[clap(short = 'i', long)]
    pub intensity: Option<u8>,

    /// New diary text
    #[clap(short = 't', long)]
    pub diary: Option<String>,

    /// Replace the photos; may be repeated
    #[clap(long = "photo", conflicts_with = "clear_photos")]
    pub photos: Vec<String>,

    /// Remove all photos
    #[clap(long)]
    pub clear_photos: bool,

    /// Replace the audio clip
    #[clap(long, conflicts_with = "clear_audio")]
    pub audio: Option<String>,

    /// Remove the audio clip
    #[clap(long)]
    pub clear_audio: bool,
}

#[derive(Subcommand, Debug)]
pub enum DraftCommand {
    /// Save fields into today's draft, keeping the ones not given
    Save(DraftSaveArgs),
    /// Show today's draft
    Show,
    /// Discard the draft
    Clear,
    /// Turn today's draft into a record
    Commit,
}

#[derive(Args, Debug)]
pub struct DraftSaveArgs {
    #[clap(short = 'e', long)]
    pub emotion: Option<String>,

    #[clap(short = 'i', long)]
    pub intensity: Option<u8>,

    #[clap(short = 't', long)]
    pub diary: Option<String>,

    #[clap(long = "photo")]
    pub photos: Vec<String>,

    #[clap(long)]
    pub audio: Option<String>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}

/// Parses a date in `YYYY-MM-DD` or `YYYYMMDD` format.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::from_str(date_str)
        .or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
}
