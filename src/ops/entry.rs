//! Saving and wiping entries.

use crate::constants::RESET_CONFIRMATION_PHRASE;
use crate::errors::{AppError, AppResult};
use crate::record::{Draft, EmotionRecord, RecordPatch};
use crate::storage::BlobStore;
use crate::store::RecordStore;
use tracing::info;

/// Result of [`save_entry`].
#[derive(Debug, Clone, PartialEq)]
pub struct SavedEntry {
    pub record: EmotionRecord,
    /// `true` when an existing record for the day was overwritten.
    pub updated: bool,
}

/// Saves a composed entry as the record for its day.
///
/// # Flow
///
/// 1. Validate the draft (emotion picked, intensity, diary and photo limits)
/// 2. Update the day's existing record in place, keeping its id, or add a new one
/// 3. Discard the auto-saved draft
///
/// # Errors
///
/// Returns `AppError::Validation` for an invalid draft, or a storage error if
/// persisting fails.
pub fn save_entry<B: BlobStore>(
    store: &mut RecordStore<B>,
    draft: Draft,
) -> AppResult<SavedEntry> {
    let record_draft = draft.into_record_draft()?;
    let date = record_draft.date;

    let existing_id = store.record_by_date(date).map(|r| r.id);
    let updated = match existing_id {
        Some(id) => store.update_record(id, RecordPatch::from(record_draft.clone()))?,
        None => None,
    };
    let saved = match updated {
        Some(record) => SavedEntry {
            record,
            updated: true,
        },
        None => SavedEntry {
            record: store.add_record(record_draft)?,
            updated: false,
        },
    };

    store.clear_draft()?;
    info!(date = %date, updated = saved.updated, "Saved entry");
    Ok(saved)
}

/// Wipes all data, but only when `typed` is exactly the confirmation phrase.
///
/// # Errors
///
/// Returns `AppError::Validation` when the phrase does not match.
pub fn reset_with_confirmation<B: BlobStore>(
    store: &mut RecordStore<B>,
    typed: &str,
) -> AppResult<()> {
    if typed != RESET_CONFIRMATION_PHRASE {
        return Err(AppError::Validation(format!(
            "Type \"{}\" to confirm the reset",
            RESET_CONFIRMATION_PHRASE
        )));
    }
    store.reset_all_data()
}
