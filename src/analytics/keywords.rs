use super::KeywordCount;
use crate::constants::MAX_KEYWORDS;
use crate::record::EmotionRecord;

/// Terms counted by [`keyword_frequency`].
pub const VOCABULARY: [&str; 45] = [
    "today", "yesterday", "tomorrow", "work", "study", "family", "friend", "mood", "feel",
    "happy", "joy", "sad", "anxious", "calm", "angry", "excited", "tired", "grateful",
    "wonderful", "warm", "sunshine", "hope", "dream", "effort", "persist", "growth", "reward",
    "setback", "difficult", "challenge", "opportunity", "change", "progress", "reflect",
    "moved", "surprise", "relax", "rest", "exercise", "music", "movie", "book", "travel",
    "food", "nature",
];

/// Counts vocabulary terms across all diary bodies.
///
/// Matching is literal, non-overlapping substring counting on the lowercased
/// diary, so a term inside a longer word counts too ("rest" in "interest").
/// Terms with no hits are left out. The result is sorted by count, highest
/// first, with ties in vocabulary order, and holds at most `MAX_KEYWORDS`
/// entries.
///
/// # Examples
///
/// ```
/// use moodlog::analytics::keyword_frequency;
///
/// assert!(keyword_frequency(&[]).is_empty());
/// ```
pub fn keyword_frequency(records: &[EmotionRecord]) -> Vec<KeywordCount> {
    let bodies: Vec<String> = records.iter().map(|r| r.diary.to_lowercase()).collect();

    let mut counts: Vec<KeywordCount> = VOCABULARY
        .iter()
        .map(|term| KeywordCount {
            text: term.to_string(),
            count: bodies.iter().map(|body| body.matches(term).count()).sum(),
        })
        .filter(|k| k.count > 0)
        .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(MAX_KEYWORDS);
    counts
}
