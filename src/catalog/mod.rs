//! The fixed catalog of emotions a record can refer to.
//!
//! The catalog ships with the application and is never edited by users. Records
//! embed the emotion by value, and the distribution analytic groups records by
//! display name, so `EmotionCatalog::new` rejects catalogs whose names (or ids)
//! are not unique.

use crate::constants::{MAX_VALENCE, MIN_VALENCE};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One emotion category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emotion {
    /// Stable identifier, e.g. `happy`.
    pub id: String,
    /// Display name, unique within the catalog.
    pub name: String,
    /// Icon glyph shown next to the name.
    pub icon: String,
    /// Display color as a `#RRGGBB` string.
    pub color: String,
    /// Valence score (1-10) plotted in trend series.
    #[serde(rename = "value")]
    pub valence: u8,
}

impl Emotion {
    pub fn new(id: &str, name: &str, icon: &str, color: &str, valence: u8) -> Self {
        Emotion {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            valence,
        }
    }
}

/// A validated, immutable list of emotions.
///
/// # Examples
///
/// ```
/// use moodlog::catalog::EmotionCatalog;
///
/// let catalog = EmotionCatalog::builtin();
/// assert_eq!(catalog.len(), 10);
/// assert_eq!(catalog.find_by_id("calm").unwrap().valence, 6);
/// ```
#[derive(Debug, Clone)]
pub struct EmotionCatalog {
    emotions: Vec<Emotion>,
}

impl EmotionCatalog {
    /// Builds a catalog, enforcing unique ids, unique names and valence in range.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if the list is empty, an id or display name
    /// repeats, or a valence lies outside 1-10.
    pub fn new(emotions: Vec<Emotion>) -> AppResult<Self> {
        if emotions.is_empty() {
            return Err(AppError::Catalog(
                "Catalog must contain at least one emotion".to_string(),
            ));
        }

        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for emotion in &emotions {
            if !ids.insert(emotion.id.as_str()) {
                return Err(AppError::Catalog(format!(
                    "Duplicate emotion id '{}'",
                    emotion.id
                )));
            }
            if !names.insert(emotion.name.as_str()) {
                return Err(AppError::Catalog(format!(
                    "Duplicate emotion name '{}'",
                    emotion.name
                )));
            }
            if !(MIN_VALENCE..=MAX_VALENCE).contains(&emotion.valence) {
                return Err(AppError::Catalog(format!(
                    "Emotion '{}' has valence {} outside {}-{}",
                    emotion.id, emotion.valence, MIN_VALENCE, MAX_VALENCE
                )));
            }
        }

        Ok(EmotionCatalog { emotions })
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        EmotionCatalog {
            emotions: builtin_emotions(),
        }
    }

    pub fn emotions(&self) -> &[Emotion] {
        &self.emotions
    }

    pub fn len(&self) -> usize {
        self.emotions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emotions.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Emotion> {
        self.emotions.iter().find(|e| e.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Emotion> {
        self.emotions.iter().find(|e| e.name == name)
    }

    /// Looks up an emotion by id, turning a miss into a validation error that
    /// lists the valid ids.
    pub fn require(&self, id: &str) -> AppResult<&Emotion> {
        self.find_by_id(id).ok_or_else(|| {
            let known: Vec<&str> = self.emotions.iter().map(|e| e.id.as_str()).collect();
            AppError::Validation(format!(
                "Unknown emotion '{}'. Expected one of: {}",
                id,
                known.join(", ")
            ))
        })
    }
}

fn builtin_emotions() -> Vec<Emotion> {
    vec![
        Emotion::new("happy", "Happy", "😊", "#FFE4B5", 8),
        Emotion::new("sad", "Sad", "😢", "#E6E0F8", 3),
        Emotion::new("anxious", "Anxious", "😰", "#FFB6C1", 2),
        Emotion::new("calm", "Calm", "😌", "#E8F4FD", 6),
        Emotion::new("angry", "Angry", "😠", "#FFA07A", 1),
        Emotion::new("excited", "Excited", "🤩", "#98FB98", 9),
        Emotion::new("tired", "Tired", "😴", "#D3D3D3", 4),
        Emotion::new("grateful", "Grateful", "🙏", "#F0E68C", 7),
        Emotion::new("confused", "Confused", "😕", "#DDA0DD", 5),
        Emotion::new("hopeful", "Hopeful", "🌟", "#87CEEB", 8),
    ]
}
