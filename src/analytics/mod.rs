//! Derived views over a snapshot of the record collection.
//!
//! Everything here is a pure function of its arguments: the same records and
//! the same `today` always give the same result, and empty input gives empty or
//! zeroed output. "Today" is passed in rather than read from the clock.

mod keywords;

pub use keywords::{keyword_frequency, VOCABULARY};

use crate::catalog::EmotionCatalog;
use crate::constants::{
    FALLBACK_EMOTION_COLOR, MAX_TREND_DAYS, NEUTRAL_TREND_VALUE, NO_RECORD_LABEL,
};
use crate::record::EmotionRecord;
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

/// One day of a trend series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Valence of the day's emotion, or the neutral value when there is no record.
    pub value: u8,
    pub emotion_name: String,
}

/// How often one emotion (by display name) appears.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionStat {
    pub emotion: String,
    pub count: usize,
    /// Share of all records, rounded to the nearest whole percent.
    pub percentage: u32,
    pub color: String,
}

/// Occurrences of one vocabulary term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordCount {
    pub text: String,
    pub count: usize,
}

/// Headline numbers for a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_records: usize,
    /// Mean intensity, `None` for an empty collection.
    pub average_intensity: Option<f64>,
    pub most_frequent_emotion: Option<String>,
    pub streak_days: usize,
}

/// Builds one point per day for the `window_days` days ending at `today`.
///
/// Points run oldest first. A day with a record plots that record's emotion
/// valence and name; a day without one plots `NEUTRAL_TREND_VALUE` labelled
/// `NO_RECORD_LABEL`. The length equals `window_days`, except that the window
/// is capped at `MAX_TREND_DAYS` and never reaches before the earliest
/// representable date.
///
/// # Examples
///
/// ```
/// use moodlog::analytics::trend_series;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let series = trend_series(&[], 7, today);
///
/// assert_eq!(series.len(), 7);
/// assert_eq!(series.last().unwrap().date, today);
/// assert!(series.iter().all(|p| p.value == 5));
/// ```
pub fn trend_series(
    records: &[EmotionRecord],
    window_days: usize,
    today: NaiveDate,
) -> Vec<TrendPoint> {
    (0..window_days.min(MAX_TREND_DAYS))
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset as u64)))
        .map(|date| match records.iter().find(|r| r.date == date) {
            Some(record) => TrendPoint {
                date,
                value: record.emotion.valence,
                emotion_name: record.emotion.name.clone(),
            },
            None => TrendPoint {
                date,
                value: NEUTRAL_TREND_VALUE,
                emotion_name: NO_RECORD_LABEL.to_string(),
            },
        })
        .collect()
}

/// Counts records per emotion display name.
///
/// Records are grouped by `emotion.name`, not by id, so two emotions sharing a
/// name would merge; the catalog rules that out for its own entries. Colors
/// come from the catalog entry with that name, falling back to
/// `FALLBACK_EMOTION_COLOR`. Sorted by count, highest first, ties in order of
/// first appearance.
pub fn emotion_distribution(
    records: &[EmotionRecord],
    catalog: &EmotionCatalog,
) -> Vec<EmotionStat> {
    let total = records.len();
    if total == 0 {
        return Vec::new();
    }

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        let name = record.emotion.name.as_str();
        let count = counts.entry(name).or_insert(0);
        if *count == 0 {
            order.push(name);
        }
        *count += 1;
    }

    let mut stats: Vec<EmotionStat> = order
        .into_iter()
        .map(|name| {
            let count = counts[name];
            EmotionStat {
                emotion: name.to_string(),
                count,
                percentage: ((count as f64 / total as f64) * 100.0).round() as u32,
                color: catalog
                    .find_by_name(name)
                    .map(|e| e.color.clone())
                    .unwrap_or_else(|| FALLBACK_EMOTION_COLOR.to_string()),
            }
        })
        .collect();

    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

/// Counts consecutive days with a record, walking back from `today`.
///
/// The newest record must be dated `today`, the next `today - 1`, and so on;
/// the walk stops at the first mismatch. Without a record for today the streak
/// is 0, however long the run before it.
///
/// # Examples
///
/// ```
/// use moodlog::analytics::streak_days;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(streak_days(&[], today), 0);
/// ```
pub fn streak_days(records: &[EmotionRecord], today: NaiveDate) -> usize {
    let mut dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
    dates.sort_by(|a, b| b.cmp(a));

    dates
        .iter()
        .enumerate()
        .take_while(|(offset, date)| {
            today.checked_sub_days(Days::new(*offset as u64)) == Some(**date)
        })
        .count()
}

/// Records whose emotion name or diary contains `query`, ignoring case.
///
/// An empty query matches everything.
pub fn search_records<'a>(records: &'a [EmotionRecord], query: &str) -> Vec<&'a EmotionRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| {
            needle.is_empty()
                || r.emotion.name.to_lowercase().contains(&needle)
                || r.diary.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Total count, mean intensity, most frequent emotion and current streak.
pub fn summarize(
    records: &[EmotionRecord],
    catalog: &EmotionCatalog,
    today: NaiveDate,
) -> Summary {
    let average_intensity = if records.is_empty() {
        None
    } else {
        let sum: u32 = records.iter().map(|r| u32::from(r.intensity)).sum();
        Some(f64::from(sum) / records.len() as f64)
    };

    Summary {
        total_records: records.len(),
        average_intensity,
        most_frequent_emotion: emotion_distribution(records, catalog)
            .into_iter()
            .next()
            .map(|s| s.emotion),
        streak_days: streak_days(records, today),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::Emotion;
    use crate::record::RecordDraft;
    use chrono::{Duration, TimeZone, Utc};
    use uuid::Uuid;

    pub(crate) fn record_on(date: NaiveDate, emotion_id: &str, diary: &str) -> EmotionRecord {
        let emotion = EmotionCatalog::builtin()
            .find_by_id(emotion_id)
            .unwrap()
            .clone();
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        RecordDraft::new(date, emotion, 3, diary).into_record(Uuid::new_v4(), now)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn days_ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    #[test]
    fn test_trend_series_length_matches_window() {
        let records = vec![record_on(today(), "happy", "")];
        for window in [0, 1, 7, 30, 90] {
            assert_eq!(trend_series(&records, window, today()).len(), window);
        }
    }

    #[test]
    fn test_trend_series_caps_oversized_window() {
        let series = trend_series(&[], 100_000_000, today());
        assert_eq!(series.len(), MAX_TREND_DAYS);
        assert_eq!(series.last().map(|p| p.date), Some(today()));
    }

    #[test]
    fn test_trend_series_stops_at_earliest_date() {
        let near_min = NaiveDate::MIN.checked_add_days(Days::new(2)).unwrap();
        let series = trend_series(&[], 30, near_min);

        let dates: Vec<NaiveDate> = series.iter().map(|p| p.date).collect();
        assert_eq!(dates.len(), 3);
        assert_eq!(dates[0], NaiveDate::MIN);
        assert_eq!(dates[2], near_min);
    }

    #[test]
    fn test_trend_series_values_and_order() {
        let records = vec![
            record_on(today(), "excited", ""),
            record_on(days_ago(2), "angry", ""),
        ];

        let series = trend_series(&records, 4, today());

        let dates: Vec<NaiveDate> = series.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![days_ago(3), days_ago(2), days_ago(1), today()]);

        assert_eq!(series[0].value, 5);
        assert_eq!(series[0].emotion_name, NO_RECORD_LABEL);
        assert_eq!(series[1].value, 1);
        assert_eq!(series[1].emotion_name, "Angry");
        assert_eq!(series[2].value, 5);
        assert_eq!(series[3].value, 9);
        assert_eq!(series[3].emotion_name, "Excited");
    }

    #[test]
    fn test_distribution_empty() {
        assert!(emotion_distribution(&[], &EmotionCatalog::builtin()).is_empty());
    }

    #[test]
    fn test_distribution_counts_and_sorts() {
        let records = vec![
            record_on(days_ago(0), "calm", ""),
            record_on(days_ago(1), "happy", ""),
            record_on(days_ago(2), "happy", ""),
            record_on(days_ago(3), "sad", ""),
        ];

        let stats = emotion_distribution(&records, &EmotionCatalog::builtin());

        let names: Vec<&str> = stats.iter().map(|s| s.emotion.as_str()).collect();
        assert_eq!(names, vec!["Happy", "Calm", "Sad"]);
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].percentage, 50);
        assert_eq!(stats[1].percentage, 25);
        assert_eq!(stats[0].color, "#FFE4B5");
    }

    #[test]
    fn test_distribution_percentages_sum_near_100() {
        let records = vec![
            record_on(days_ago(0), "calm", ""),
            record_on(days_ago(1), "happy", ""),
            record_on(days_ago(2), "sad", ""),
        ];

        let stats = emotion_distribution(&records, &EmotionCatalog::builtin());
        let sum: u32 = stats.iter().map(|s| s.percentage).sum();

        assert!((100 - stats.len() as u32..=100 + stats.len() as u32).contains(&sum));
        assert!(stats.iter().all(|s| s.percentage == 33));
    }

    #[test]
    fn test_distribution_groups_by_name_and_falls_back_on_color() {
        let mut odd = record_on(days_ago(0), "happy", "");
        odd.emotion = Emotion::new("glad", "Happy", "😁", "#000000", 8);
        let mut unknown = record_on(days_ago(1), "happy", "");
        unknown.emotion = Emotion::new("meh", "Meh", "😐", "#111111", 5);
        let records = vec![odd, record_on(days_ago(2), "happy", ""), unknown];

        let stats = emotion_distribution(&records, &EmotionCatalog::builtin());

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].emotion, "Happy");
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[1].color, FALLBACK_EMOTION_COLOR);
    }

    #[test]
    fn test_streak_today_and_yesterday() {
        let records = vec![
            record_on(today(), "calm", ""),
            record_on(days_ago(1), "calm", ""),
            record_on(days_ago(3), "calm", ""),
        ];
        assert_eq!(streak_days(&records, today()), 2);
    }

    #[test]
    fn test_streak_requires_today() {
        let records = vec![
            record_on(days_ago(1), "calm", ""),
            record_on(days_ago(2), "calm", ""),
            record_on(days_ago(3), "calm", ""),
        ];
        assert_eq!(streak_days(&records, today()), 0);
    }

    #[test]
    fn test_streak_ignores_input_order() {
        let records = vec![
            record_on(days_ago(2), "calm", ""),
            record_on(today(), "calm", ""),
            record_on(days_ago(1), "calm", ""),
        ];
        assert_eq!(streak_days(&records, today()), 3);
    }

    #[test]
    fn test_search_records() {
        let records = vec![
            record_on(days_ago(0), "grateful", "Dinner with family"),
            record_on(days_ago(1), "tired", "Long shift at work"),
        ];

        assert_eq!(search_records(&records, "").len(), 2);
        assert_eq!(search_records(&records, "FAMILY")[0].date, days_ago(0));
        assert_eq!(search_records(&records, "tired")[0].date, days_ago(1));
        assert!(search_records(&records, "beach").is_empty());
    }

    #[test]
    fn test_summarize() {
        let catalog = EmotionCatalog::builtin();
        let empty = summarize(&[], &catalog, today());
        assert_eq!(empty.total_records, 0);
        assert_eq!(empty.average_intensity, None);
        assert_eq!(empty.most_frequent_emotion, None);
        assert_eq!(empty.streak_days, 0);

        let mut strong = record_on(today(), "happy", "");
        strong.intensity = 5;
        let records = vec![
            strong,
            record_on(days_ago(1), "happy", ""),
            record_on(days_ago(2), "sad", ""),
        ];
        let summary = summarize(&records, &catalog, today());
        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.average_intensity, Some(11.0 / 3.0));
        assert_eq!(summary.most_frequent_emotion.as_deref(), Some("Happy"));
        assert_eq!(summary.streak_days, 3);
    }
}
