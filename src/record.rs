//! Diary records and the inputs that create or change them.
//!
//! `EmotionRecord` is the persisted shape. `RecordDraft` is what a caller hands
//! to the store to add a record, `RecordPatch` what it hands to update one, and
//! `Draft` is the auto-saved, possibly incomplete composition that survives a
//! restart. The store never validates; callers run the `validate` methods here
//! before touching it.

use crate::catalog::Emotion;
use crate::constants::{
    DEFAULT_INTENSITY, MAX_DIARY_CHARS, MAX_INTENSITY, MAX_PHOTOS, MIN_INTENSITY,
};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One emotion + diary entry for a single calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub emotion: Emotion,
    /// Intensity level, 1-5.
    pub intensity: u8,
    pub diary: String,
    /// Inline photo encodings (data URLs), at most three.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,
    /// Inline audio encoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The user-supplied fields of a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDraft {
    pub date: NaiveDate,
    pub emotion: Emotion,
    pub intensity: u8,
    pub diary: String,
    pub photos: Vec<String>,
    pub audio: Option<String>,
}

impl RecordDraft {
    pub fn new(date: NaiveDate, emotion: Emotion, intensity: u8, diary: impl Into<String>) -> Self {
        RecordDraft {
            date,
            emotion,
            intensity,
            diary: diary.into(),
            photos: Vec::new(),
            audio: None,
        }
    }

    /// Checks intensity range, diary presence and length, and photo count.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` describing the first violated rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use moodlog::catalog::EmotionCatalog;
    /// use moodlog::record::RecordDraft;
    /// use chrono::NaiveDate;
    ///
    /// let emotion = EmotionCatalog::builtin().find_by_id("calm").unwrap().clone();
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    ///
    /// assert!(RecordDraft::new(date, emotion.clone(), 3, "A quiet walk").validate().is_ok());
    /// assert!(RecordDraft::new(date, emotion, 6, "A quiet walk").validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        validate_intensity(self.intensity)?;
        validate_diary(&self.diary)?;
        validate_photos(&self.photos)
    }

    /// Builds the persisted record with the given identifier and timestamp.
    pub fn into_record(self, id: Uuid, now: DateTime<Utc>) -> EmotionRecord {
        EmotionRecord {
            id,
            date: self.date,
            emotion: self.emotion,
            intensity: self.intensity,
            diary: self.diary,
            photos: self.photos,
            audio: self.audio,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Fields to merge into an existing record. `None` leaves a field alone.
///
/// The date is deliberately absent: it is the record's natural key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPatch {
    pub emotion: Option<Emotion>,
    pub intensity: Option<u8>,
    pub diary: Option<String>,
    /// `Some(vec![])` removes all photos.
    pub photos: Option<Vec<String>>,
    /// `Some(None)` removes the audio clip.
    pub audio: Option<Option<String>>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.emotion.is_none()
            && self.intensity.is_none()
            && self.diary.is_none()
            && self.photos.is_none()
            && self.audio.is_none()
    }

    /// Validates only the fields the patch sets.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(intensity) = self.intensity {
            validate_intensity(intensity)?;
        }
        if let Some(diary) = &self.diary {
            validate_diary(diary)?;
        }
        if let Some(photos) = &self.photos {
            validate_photos(photos)?;
        }
        Ok(())
    }

    /// Merges the patch into `record` and stamps `updated_at`.
    pub fn apply(self, record: &mut EmotionRecord, now: DateTime<Utc>) {
        if let Some(emotion) = self.emotion {
            record.emotion = emotion;
        }
        if let Some(intensity) = self.intensity {
            record.intensity = intensity;
        }
        if let Some(diary) = self.diary {
            record.diary = diary;
        }
        if let Some(photos) = self.photos {
            record.photos = photos;
        }
        if let Some(audio) = self.audio {
            record.audio = audio;
        }
        record.updated_at = now;
    }
}

impl From<RecordDraft> for RecordPatch {
    fn from(draft: RecordDraft) -> Self {
        RecordPatch {
            emotion: Some(draft.emotion),
            intensity: Some(draft.intensity),
            diary: Some(draft.diary),
            photos: Some(draft.photos),
            audio: Some(draft.audio),
        }
    }
}

fn default_intensity() -> u8 {
    DEFAULT_INTENSITY
}

/// An in-progress composition, auto-saved so it survives a restart.
///
/// Unlike `RecordDraft` every field may still be missing or out of range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub date: NaiveDate,
    #[serde(default)]
    pub emotion: Option<Emotion>,
    #[serde(default = "default_intensity")]
    pub intensity: u8,
    #[serde(default)]
    pub diary: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

impl Draft {
    /// An empty draft for `date` with the default intensity.
    pub fn empty(date: NaiveDate) -> Self {
        Draft {
            date,
            emotion: None,
            intensity: DEFAULT_INTENSITY,
            diary: String::new(),
            photos: Vec::new(),
            audio: None,
        }
    }

    /// Turns the draft into a validated `RecordDraft`, trimming the diary.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if no emotion was picked or the result
    /// breaks a record rule.
    pub fn into_record_draft(self) -> AppResult<RecordDraft> {
        let emotion = self
            .emotion
            .ok_or_else(|| AppError::Validation("Please pick an emotion".to_string()))?;

        let draft = RecordDraft {
            date: self.date,
            emotion,
            intensity: self.intensity,
            diary: self.diary.trim().to_string(),
            photos: self.photos,
            audio: self.audio,
        };
        draft.validate()?;
        Ok(draft)
    }
}

fn validate_intensity(intensity: u8) -> AppResult<()> {
    if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity) {
        return Err(AppError::Validation(format!(
            "Intensity must be between {} and {}",
            MIN_INTENSITY, MAX_INTENSITY
        )));
    }
    Ok(())
}

fn validate_diary(diary: &str) -> AppResult<()> {
    if diary.trim().is_empty() {
        return Err(AppError::Validation(
            "Please write a few words in the diary".to_string(),
        ));
    }
    let chars = diary.chars().count();
    if chars > MAX_DIARY_CHARS {
        return Err(AppError::Validation(format!(
            "Diary is {} characters long; the limit is {}",
            chars, MAX_DIARY_CHARS
        )));
    }
    Ok(())
}

fn validate_photos(photos: &[String]) -> AppResult<()> {
    if photos.len() > MAX_PHOTOS {
        return Err(AppError::Validation(format!(
            "At most {} photos can be attached",
            MAX_PHOTOS
        )));
    }
    Ok(())
}
