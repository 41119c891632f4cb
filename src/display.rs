//! Small text helpers used when rendering records.

use crate::constants::DATE_FORMAT_SHORT;
use chrono::NaiveDate;

const INTENSITY_LABELS: [&str; 5] = ["Very mild", "Mild", "Moderate", "Strong", "Very strong"];

/// Human label for an intensity level; out-of-range levels read as "Moderate".
pub fn intensity_label(intensity: u8) -> &'static str {
    match intensity {
        1..=5 => INTENSITY_LABELS[usize::from(intensity) - 1],
        _ => INTENSITY_LABELS[2],
    }
}

/// Cuts `text` to `max_chars` characters, appending `...` when something was cut.
///
/// # Examples
///
/// ```
/// use moodlog::display::truncate_text;
///
/// assert_eq!(truncate_text("short", 10), "short");
/// assert_eq!(truncate_text("a longer sentence", 8), "a longer...");
/// ```
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// "Today", "Yesterday", "N days ago" within a week, otherwise a short date.
pub fn relative_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (today - date).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        days @ 2..=7 => format!("{} days ago", days),
        _ => date.format(DATE_FORMAT_SHORT).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_intensity_label() {
        assert_eq!(intensity_label(1), "Very mild");
        assert_eq!(intensity_label(3), "Moderate");
        assert_eq!(intensity_label(5), "Very strong");
        assert_eq!(intensity_label(0), "Moderate");
        assert_eq!(intensity_label(9), "Moderate");
    }

    #[test]
    fn test_truncate_text_is_char_aware() {
        assert_eq!(truncate_text("", 3), "");
        assert_eq!(truncate_text("abc", 3), "abc");
        assert_eq!(truncate_text("abcd", 3), "abc...");
        assert_eq!(truncate_text("今天很平静", 2), "今天...");
    }

    #[test]
    fn test_relative_date_label() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert_eq!(relative_date_label(today, today), "Today");
        assert_eq!(relative_date_label(today - Duration::days(1), today), "Yesterday");
        assert_eq!(relative_date_label(today - Duration::days(7), today), "7 days ago");
        assert_eq!(relative_date_label(today - Duration::days(15), today), "Mar 05");
    }
}
