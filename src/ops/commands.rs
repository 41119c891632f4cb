//! Executes parsed CLI commands against a record store.

use super::entry::{reset_with_confirmation, save_entry, SavedEntry};
use super::render;
use crate::analytics::{
    emotion_distribution, keyword_frequency, search_records, streak_days, summarize, trend_series,
};
use crate::catalog::EmotionCatalog;
use crate::cli::{AddArgs, Command, DraftCommand, DraftSaveArgs, UpdateArgs};
use crate::constants::{DATE_FORMAT_ISO, MAX_TREND_DAYS};
use crate::errors::{AppError, AppResult};
use crate::record::{Draft, RecordPatch};
use crate::storage::BlobStore;
use crate::store::RecordStore;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

/// Everything a command needs besides the store.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    pub catalog: &'a EmotionCatalog,
    pub today: NaiveDate,
    /// Trend window used when `trend` gets no `--days`.
    pub default_trend_days: usize,
    /// Emit JSON instead of text.
    pub json: bool,
}

/// Runs `command` and returns the text to print on stdout.
///
/// # Errors
///
/// Returns `AppError::Validation` for bad input (unknown emotion, invalid
/// record fields, wrong reset phrase, empty update) and storage errors from
/// the store.
pub fn run_command<B: BlobStore>(
    store: &mut RecordStore<B>,
    command: Command,
    ctx: &CommandContext<'_>,
) -> AppResult<String> {
    debug!(?command, "Running command");

    match command {
        Command::Add(args) => add(store, args, ctx),
        Command::Update(args) => update(store, args, ctx),
        Command::Delete { id } => {
            let removed = store.delete_record(id)?;
            if ctx.json {
                return to_json(&serde_json::json!({ "id": id, "deleted": removed }));
            }
            Ok(if removed {
                format!("Deleted record {}", id)
            } else {
                format!("No record with id {}", id)
            })
        }
        Command::Show { date } => {
            let date = date.unwrap_or(ctx.today);
            let record = store.record_by_date(date);
            if ctx.json {
                return to_json(&record);
            }
            Ok(match record {
                Some(record) => render::render_record(record, ctx.today),
                None => format!("No record for {}", date.format(DATE_FORMAT_ISO)),
            })
        }
        Command::List { from, to, search } => list(store, from, to, search.as_deref(), ctx),
        Command::Trend { days, all } => {
            let window = if all {
                store.len()
            } else {
                days.unwrap_or(ctx.default_trend_days)
            };
            if !all && window == 0 {
                return Err(AppError::Validation(
                    "Trend window must be at least one day".to_string(),
                ));
            }
            if !all && window > MAX_TREND_DAYS {
                return Err(AppError::Validation(format!(
                    "Trend window must be at most {} days",
                    MAX_TREND_DAYS
                )));
            }
            let points = trend_series(store.records(), window, ctx.today);
            output(ctx, &points, || render::render_trend(&points))
        }
        Command::Stats => {
            let stats = emotion_distribution(store.records(), ctx.catalog);
            output(ctx, &stats, || render::render_distribution(&stats))
        }
        Command::Keywords => {
            let keywords = keyword_frequency(store.records());
            output(ctx, &keywords, || render::render_keywords(&keywords))
        }
        Command::Streak => {
            let days = streak_days(store.records(), ctx.today);
            output(ctx, &serde_json::json!({ "streakDays": days }), || {
                render::render_streak(days)
            })
        }
        Command::Summary => {
            let summary = summarize(store.records(), ctx.catalog, ctx.today);
            output(ctx, &summary, || render::render_summary(&summary))
        }
        Command::Emotions => output(ctx, ctx.catalog.emotions(), || {
            render::render_catalog(ctx.catalog)
        }),
        Command::Draft { action } => draft(store, action, ctx),
        Command::Reset { confirm } => {
            reset_with_confirmation(store, &confirm)?;
            Ok("All data has been reset.".to_string())
        }
    }
}

fn add<B: BlobStore>(
    store: &mut RecordStore<B>,
    args: AddArgs,
    ctx: &CommandContext<'_>,
) -> AppResult<String> {
    let draft = Draft {
        date: args.date.unwrap_or(ctx.today),
        emotion: Some(ctx.catalog.require(&args.emotion)?.clone()),
        intensity: args.intensity,
        diary: args.diary,
        photos: args.photos,
        audio: args.audio,
    };
    let saved = save_entry(store, draft)?;
    saved_output(&saved, ctx)
}

fn update<B: BlobStore>(
    store: &mut RecordStore<B>,
    args: UpdateArgs,
    ctx: &CommandContext<'_>,
) -> AppResult<String> {
    let emotion = match args.emotion.as_deref() {
        Some(id) => Some(ctx.catalog.require(id)?.clone()),
        None => None,
    };
    let photos = if args.clear_photos {
        Some(Vec::new())
    } else if args.photos.is_empty() {
        None
    } else {
        Some(args.photos)
    };
    let audio = if args.clear_audio {
        Some(None)
    } else {
        args.audio.map(Some)
    };

    let patch = RecordPatch {
        emotion,
        intensity: args.intensity,
        diary: args.diary.map(|d| d.trim().to_string()),
        photos,
        audio,
    };
    if patch.is_empty() {
        return Err(AppError::Validation("Nothing to update".to_string()));
    }
    patch.validate()?;

    let id = args.id;
    match store.update_record(id, patch)? {
        Some(record) if ctx.json => to_json(&record),
        Some(record) => Ok(format!(
            "Updated record\n\n{}",
            render::render_record(&record, ctx.today)
        )),
        None => Ok(format!("No record with id {}", id)),
    }
}

fn list<B: BlobStore>(
    store: &RecordStore<B>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    search: Option<&str>,
    ctx: &CommandContext<'_>,
) -> AppResult<String> {
    let start = from.unwrap_or(NaiveDate::MIN);
    let end = to.unwrap_or(NaiveDate::MAX);
    if start > end {
        return Err(AppError::Validation(format!(
            "--from {} is after --to {}",
            start.format(DATE_FORMAT_ISO),
            end.format(DATE_FORMAT_ISO)
        )));
    }

    let mut records = store.records_in_range(start, end);
    if let Some(query) = search {
        let hits: HashSet<Uuid> = search_records(store.records(), query)
            .iter()
            .map(|r| r.id)
            .collect();
        records.retain(|r| hits.contains(&r.id));
    }

    output(ctx, &records, || render::render_record_list(&records, ctx.today))
}

fn draft<B: BlobStore>(
    store: &mut RecordStore<B>,
    action: DraftCommand,
    ctx: &CommandContext<'_>,
) -> AppResult<String> {
    match action {
        DraftCommand::Save(args) => {
            let current = store
                .load_draft(ctx.today)?
                .unwrap_or_else(|| Draft::empty(ctx.today));
            let updated = merge_draft(current, args, ctx.catalog)?;
            store.save_draft(&updated)?;
            output(ctx, &updated, || render::render_draft(&updated))
        }
        DraftCommand::Show => {
            let current = store.load_draft(ctx.today)?;
            if ctx.json {
                return to_json(&current);
            }
            Ok(match current {
                Some(d) => render::render_draft(&d),
                None => "No draft for today.".to_string(),
            })
        }
        DraftCommand::Clear => {
            store.clear_draft()?;
            Ok("Draft discarded.".to_string())
        }
        DraftCommand::Commit => {
            let current = store
                .load_draft(ctx.today)?
                .ok_or_else(|| AppError::Validation("No draft for today".to_string()))?;
            let saved = save_entry(store, current)?;
            saved_output(&saved, ctx)
        }
    }
}

fn merge_draft(
    mut draft: Draft,
    args: DraftSaveArgs,
    catalog: &EmotionCatalog,
) -> AppResult<Draft> {
    if let Some(id) = args.emotion.as_deref() {
        draft.emotion = Some(catalog.require(id)?.clone());
    }
    if let Some(intensity) = args.intensity {
        draft.intensity = intensity;
    }
    if let Some(diary) = args.diary {
        draft.diary = diary;
    }
    if !args.photos.is_empty() {
        draft.photos = args.photos;
    }
    if args.audio.is_some() {
        draft.audio = args.audio;
    }
    Ok(draft)
}

fn saved_output(saved: &SavedEntry, ctx: &CommandContext<'_>) -> AppResult<String> {
    if ctx.json {
        return to_json(&saved.record);
    }
    let verb = if saved.updated { "Updated" } else { "Saved" };
    Ok(format!(
        "{} entry for {}\nid: {}",
        verb,
        saved.record.date.format(DATE_FORMAT_ISO),
        saved.record.id
    ))
}

fn output<T, F>(ctx: &CommandContext<'_>, value: &T, text: F) -> AppResult<String>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    if ctx.json {
        to_json(value)
    } else {
        Ok(text())
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
