//! Plain-text rendering of records and analytics for the terminal.
//!
//! Every function returns the full text to print, without a trailing newline.

use crate::analytics::{EmotionStat, KeywordCount, Summary, TrendPoint};
use crate::catalog::EmotionCatalog;
use crate::constants::{DATE_FORMAT_ISO, MAX_INTENSITY, MAX_VALENCE, PREVIEW_CHARS};
use crate::display::{intensity_label, relative_date_label, truncate_text};
use crate::record::{Draft, EmotionRecord};
use chrono::NaiveDate;

const BAR_CHAR: char = '#';

/// Full view of one record.
pub fn render_record(record: &EmotionRecord, today: NaiveDate) -> String {
    let mut lines = vec![
        format!(
            "{} ({})",
            record.date.format(DATE_FORMAT_ISO),
            relative_date_label(record.date, today)
        ),
        format!("{} {}", record.emotion.icon, record.emotion.name),
        format!(
            "Intensity: {}/{} ({})",
            record.intensity,
            MAX_INTENSITY,
            intensity_label(record.intensity)
        ),
        String::new(),
        record.diary.clone(),
    ];

    if !record.photos.is_empty() || record.audio.is_some() {
        lines.push(String::new());
        if !record.photos.is_empty() {
            lines.push(format!("Photos: {}", record.photos.len()));
        }
        if record.audio.is_some() {
            lines.push("Audio: attached".to_string());
        }
    }

    lines.push(String::new());
    lines.push(format!("id: {}", record.id));
    lines.join("\n")
}

/// One line per record: date, emotion, intensity and a diary preview.
pub fn render_record_list(records: &[&EmotionRecord], today: NaiveDate) -> String {
    if records.is_empty() {
        return "No records found.".to_string();
    }

    records
        .iter()
        .map(|r| {
            format!(
                "{}  {:<10} {} {:<9} {}/{}  {}",
                r.date.format(DATE_FORMAT_ISO),
                relative_date_label(r.date, today),
                r.emotion.icon,
                r.emotion.name,
                r.intensity,
                MAX_INTENSITY,
                truncate_text(&r.diary, PREVIEW_CHARS)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A horizontal bar per day, scaled to the valence range.
pub fn render_trend(points: &[TrendPoint]) -> String {
    if points.is_empty() {
        return "No days to show.".to_string();
    }

    points
        .iter()
        .map(|p| {
            let bar: String = std::iter::repeat(BAR_CHAR).take(usize::from(p.value)).collect();
            format!(
                "{}  {:<width$} {:>2}  {}",
                p.date.format(DATE_FORMAT_ISO),
                bar,
                p.value,
                p.emotion_name,
                width = usize::from(MAX_VALENCE)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_distribution(stats: &[EmotionStat]) -> String {
    if stats.is_empty() {
        return "No records yet.".to_string();
    }

    stats
        .iter()
        .map(|s| format!("{:<10} {:>4}  {:>3}%", s.emotion, s.count, s.percentage))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_keywords(keywords: &[KeywordCount]) -> String {
    if keywords.is_empty() {
        return "No keywords found.".to_string();
    }

    keywords
        .iter()
        .map(|k| format!("{:<12} {}", k.text, k.count))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_streak(days: usize) -> String {
    match days {
        0 => "No streak yet. Record today to start one.".to_string(),
        1 => "Current streak: 1 day".to_string(),
        n => format!("Current streak: {} days", n),
    }
}

pub fn render_summary(summary: &Summary) -> String {
    let average = summary
        .average_intensity
        .map(|avg| format!("{:.1}", avg))
        .unwrap_or_else(|| "-".to_string());
    let top = summary.most_frequent_emotion.as_deref().unwrap_or("-");

    [
        format!("Records:           {}", summary.total_records),
        format!("Average intensity: {}", average),
        format!("Most frequent:     {}", top),
        format!("Streak:            {} days", summary.streak_days),
    ]
    .join("\n")
}

/// The catalog as `id  icon name  valence` rows.
pub fn render_catalog(catalog: &EmotionCatalog) -> String {
    catalog
        .emotions()
        .iter()
        .map(|e| format!("{:<10} {} {:<9} {:>2}", e.id, e.icon, e.name, e.valence))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_draft(draft: &Draft) -> String {
    let emotion = draft
        .emotion
        .as_ref()
        .map(|e| format!("{} {}", e.icon, e.name))
        .unwrap_or_else(|| "(none)".to_string());

    let mut lines = vec![
        format!("Draft for {}", draft.date.format(DATE_FORMAT_ISO)),
        format!("Emotion:   {}", emotion),
        format!(
            "Intensity: {} ({})",
            draft.intensity,
            intensity_label(draft.intensity)
        ),
        format!("Diary:     {}", draft.diary),
    ];
    if !draft.photos.is_empty() {
        lines.push(format!("Photos:    {}", draft.photos.len()));
    }
    if draft.audio.is_some() {
        lines.push("Audio:     attached".to_string());
    }
    lines.join("\n")
}
