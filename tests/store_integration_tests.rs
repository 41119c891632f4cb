use chrono::NaiveDate;
use moodlog::errors::AppResult;
use moodlog::ops::{reset_with_confirmation, save_entry};
use moodlog::storage::FileBlobStore;
use moodlog::store::{Bootstrap, BootstrapOutcome, RecordStore};
use moodlog::{Draft, EmotionCatalog, RecordDraft};
use std::fs;
use tempfile::tempdir;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
}

fn open(dir: &std::path::Path) -> AppResult<RecordStore<FileBlobStore>> {
    Ok(RecordStore::new(FileBlobStore::open(dir)?))
}

#[test]
fn test_records_survive_reopen_byte_for_byte() -> AppResult<()> {
    let dir = tempdir()?;
    let catalog = EmotionCatalog::builtin();

    let blob = {
        let mut store = open(dir.path())?;
        assert_eq!(
            store.initialize(day(10), Bootstrap::Empty)?,
            BootstrapOutcome::Empty
        );
        for (d, emotion, diary) in [
            (3, "sad", "Lost my keys"),
            (7, "happy", "Found them"),
            (5, "calm", "Tea"),
        ] {
            let emotion = catalog.require(emotion)?.clone();
            store.add_record(RecordDraft::new(day(d), emotion, 3, diary))?;
        }
        store.to_blob()?
    };

    let on_disk = fs::read_to_string(dir.path().join("emotion_records.json"))?;
    assert_eq!(on_disk, blob);

    let mut store = open(dir.path())?;
    assert_eq!(
        store.initialize(day(10), Bootstrap::SampleData(&catalog))?,
        BootstrapOutcome::Loaded(3)
    );
    assert_eq!(store.to_blob()?, blob);

    let dates: Vec<NaiveDate> = store.records().iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![day(7), day(5), day(3)]);
    Ok(())
}

#[test]
fn test_malformed_file_falls_back_to_sample_data() -> AppResult<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("emotion_records.json"), "{ not json")?;
    let catalog = EmotionCatalog::builtin();

    let mut store = open(dir.path())?;
    let outcome = store.initialize(day(30), Bootstrap::SampleData(&catalog))?;

    assert!(matches!(outcome, BootstrapOutcome::Seeded(_)));
    let rewritten = fs::read_to_string(dir.path().join("emotion_records.json"))?;
    assert!(serde_json::from_str::<serde_json::Value>(&rewritten)?.is_array());
    assert!(store.records().iter().all(|r| r.date <= day(30)));
    Ok(())
}

#[test]
fn test_draft_and_reset_on_disk() -> AppResult<()> {
    let dir = tempdir()?;
    let catalog = EmotionCatalog::builtin();
    let mut store = open(dir.path())?;
    store.initialize(day(12), Bootstrap::Empty)?;

    let draft = Draft {
        emotion: Some(catalog.require("hopeful")?.clone()),
        diary: "Planning the garden".to_string(),
        ..Draft::empty(day(12))
    };
    store.save_draft(&draft)?;
    assert!(dir.path().join("emotion_draft.json").exists());
    assert_eq!(store.load_draft(day(12))?, Some(draft.clone()));
    assert_eq!(store.load_draft(day(13))?, None);

    let saved = save_entry(&mut store, draft)?;
    assert!(!saved.updated);
    assert!(!dir.path().join("emotion_draft.json").exists());

    store.save_draft(&Draft::empty(day(12)))?;
    reset_with_confirmation(&mut store, "reset data")?;
    assert!(!dir.path().join("emotion_records.json").exists());
    assert!(!dir.path().join("emotion_draft.json").exists());
    assert!(store.is_empty());
    Ok(())
}
