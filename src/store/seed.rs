//! Sample data for first runs.

use crate::catalog::EmotionCatalog;
use crate::constants::{MAX_INTENSITY, MIN_INTENSITY, SEED_RECORD_PROBABILITY, SEED_WINDOW_DAYS};
use crate::record::EmotionRecord;
use chrono::{Duration, NaiveDate, NaiveTime};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

const SAMPLE_DIARIES: &[&str] = &[
    "A good mood today. Work went smoothly and I had a nice chat with friends.",
    "Feeling a bit anxious, there is an important meeting tomorrow. Hoping it goes well.",
    "A calm day. Took a walk in the park and watched a beautiful sunset.",
    "A little tired, but I finished a lot of tasks and feel a real sense of progress.",
    "Dinner with family felt warm. Grateful to have time like this.",
    "Ran into some setbacks today, but I learned a lot from them.",
    "In a great mood, listened to my favorite music and cooked a tasty dinner.",
    "Feeling a bit lost, not sure about the direction ahead. Need time to reflect.",
    "So excited today, got good news and want to share it with everyone.",
    "A peaceful day, read a good book and feel full inside.",
];

/// Generates records for the `SEED_WINDOW_DAYS` days ending at `today`.
///
/// Each day gets a record with probability `SEED_RECORD_PROBABILITY`, with a
/// random emotion, intensity and sample diary. Timestamps are midnight UTC of
/// the record's date. The result is sorted newest first.
pub fn generate_sample_records<R: Rng>(
    catalog: &EmotionCatalog,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<EmotionRecord> {
    let mut records = Vec::new();

    for offset in 0..SEED_WINDOW_DAYS {
        let date = today - Duration::days(offset);
        if !rng.gen_bool(SEED_RECORD_PROBABILITY) {
            continue;
        }

        let (Some(emotion), Some(diary)) = (
            catalog.emotions().choose(rng),
            SAMPLE_DIARIES.choose(rng),
        ) else {
            continue;
        };
        let timestamp = date.and_time(NaiveTime::MIN).and_utc();

        records.push(EmotionRecord {
            id: Uuid::new_v4(),
            date,
            emotion: emotion.clone(),
            intensity: rng.gen_range(MIN_INTENSITY..=MAX_INTENSITY),
            diary: diary.to_string(),
            photos: Vec::new(),
            audio: None,
            created_at: timestamp,
            updated_at: timestamp,
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_sample_records_stay_in_window() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let catalog = EmotionCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        let records = generate_sample_records(&catalog, today, &mut rng);

        assert!(!records.is_empty());
        assert!(records.len() <= SEED_WINDOW_DAYS as usize);

        let earliest = today - Duration::days(SEED_WINDOW_DAYS - 1);
        let mut dates = HashSet::new();
        for record in &records {
            assert!(record.date <= today && record.date >= earliest);
            assert!(dates.insert(record.date), "duplicate date {}", record.date);
            assert!((1..=5).contains(&record.intensity));
            assert!(catalog.find_by_id(&record.emotion.id).is_some());
            assert_eq!(record.created_at, record.updated_at);
        }

        assert!(records.windows(2).all(|w| w[0].date > w[1].date));
    }

    #[test]
    fn test_sample_records_deterministic_for_seed() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let catalog = EmotionCatalog::builtin();

        let dates = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_sample_records(&catalog, today, &mut rng)
                .into_iter()
                .map(|r| (r.date, r.emotion.id, r.intensity))
                .collect::<Vec<_>>()
        };

        assert_eq!(dates(42), dates(42));
    }
}
