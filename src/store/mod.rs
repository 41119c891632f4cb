//! The record store: sole owner of the persisted diary collection.
//!
//! `RecordStore` keeps the whole collection in memory and rewrites the full
//! records blob through its `BlobStore` after every mutation. There is at most
//! one record per calendar date; adding a record for a date that already has
//! one replaces it. The store never validates input, callers do that first
//! (see [`crate::record::RecordDraft::validate`]).
//!
//! The store also owns the auto-saved draft blob, which lives under its own
//! key and is independent of the record collection.

pub mod seed;

use crate::catalog::EmotionCatalog;
use crate::constants::{DRAFT_KEY, RECORDS_KEY};
use crate::errors::AppResult;
use crate::record::{Draft, EmotionRecord, RecordDraft, RecordPatch};
use crate::storage::BlobStore;
use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// What `initialize` does when no usable collection is stored.
#[derive(Debug, Clone, Copy)]
pub enum Bootstrap<'a> {
    /// Generate sample records from this catalog.
    SampleData(&'a EmotionCatalog),
    /// Start with an empty collection.
    Empty,
}

/// How `initialize` obtained the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// A stored collection was loaded as-is.
    Loaded(usize),
    /// Sample data was generated and persisted.
    Seeded(usize),
    /// An empty collection was persisted.
    Empty,
}

/// Owns the record collection and writes it through the persistence port.
///
/// # Examples
///
/// ```
/// use moodlog::catalog::EmotionCatalog;
/// use moodlog::record::RecordDraft;
/// use moodlog::storage::MemoryBlobStore;
/// use moodlog::store::{Bootstrap, RecordStore};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let mut store = RecordStore::new(MemoryBlobStore::new());
/// store.initialize(today, Bootstrap::Empty)?;
///
/// let calm = EmotionCatalog::builtin().find_by_id("calm").unwrap().clone();
/// store.add_record(RecordDraft::new(today, calm, 3, "A quiet walk"))?;
///
/// assert_eq!(store.record_by_date(today).unwrap().diary, "A quiet walk");
/// # Ok::<(), moodlog::AppError>(())
/// ```
#[derive(Debug)]
pub struct RecordStore<B: BlobStore> {
    blobs: B,
    records: Vec<EmotionRecord>,
}

impl<B: BlobStore> RecordStore<B> {
    /// Wraps a blob store. The collection is empty until `initialize` runs.
    pub fn new(blobs: B) -> Self {
        RecordStore {
            blobs,
            records: Vec::new(),
        }
    }

    /// Loads the stored collection, or bootstraps one if none is usable.
    ///
    /// A stored blob that parses is taken verbatim. A missing blob, or one that
    /// fails to parse, is replaced according to `bootstrap` and the result is
    /// persisted immediately. A malformed blob is only logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob store cannot be read or written.
    pub fn initialize(
        &mut self,
        today: NaiveDate,
        bootstrap: Bootstrap<'_>,
    ) -> AppResult<BootstrapOutcome> {
        if let Some(blob) = self.blobs.get(RECORDS_KEY)? {
            match serde_json::from_str::<Vec<EmotionRecord>>(&blob) {
                Ok(records) => {
                    info!(count = records.len(), "Loaded stored records");
                    self.records = records;
                    return Ok(BootstrapOutcome::Loaded(self.records.len()));
                }
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable records blob");
                }
            }
        }

        let outcome = match bootstrap {
            Bootstrap::SampleData(catalog) => {
                self.records =
                    seed::generate_sample_records(catalog, today, &mut rand::thread_rng());
                info!(count = self.records.len(), "Generated sample records");
                BootstrapOutcome::Seeded(self.records.len())
            }
            Bootstrap::Empty => {
                self.records.clear();
                BootstrapOutcome::Empty
            }
        };
        self.persist()?;
        Ok(outcome)
    }

    /// The collection, newest date first unless a loaded blob was ordered otherwise.
    pub fn records(&self) -> &[EmotionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Adds a record, replacing any record that already exists for its date.
    ///
    /// The new record gets a fresh id and identical created/updated timestamps.
    /// The collection is re-sorted newest date first and persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails; the in-memory collection keeps the
    /// new record in that case.
    pub fn add_record(&mut self, draft: RecordDraft) -> AppResult<EmotionRecord> {
        let record = draft.into_record(Uuid::new_v4(), Utc::now());
        debug!(id = %record.id, date = %record.date, "Adding record");

        self.records.retain(|r| r.date != record.date);
        self.records.insert(0, record.clone());
        sort_newest_first(&mut self.records);

        self.persist()?;
        Ok(record)
    }

    /// Merges `patch` into the record with `id` and refreshes its update time.
    ///
    /// Returns the record as stored after the merge. An unknown id leaves the
    /// collection untouched and returns `Ok(None)`. The collection is
    /// persisted either way.
    pub fn update_record(
        &mut self,
        id: Uuid,
        patch: RecordPatch,
    ) -> AppResult<Option<EmotionRecord>> {
        let updated = match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                patch.apply(record, Utc::now());
                debug!(%id, "Updated record");
                Some(record.clone())
            }
            None => {
                debug!(%id, "No record to update");
                None
            }
        };

        self.persist()?;
        Ok(updated)
    }

    /// Removes the record with `id`. Returns whether one was removed.
    pub fn delete_record(&mut self, id: Uuid) -> AppResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;
        debug!(%id, removed, "Deleted record");

        self.persist()?;
        Ok(removed)
    }

    pub fn record_by_id(&self, id: Uuid) -> Option<&EmotionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn record_by_date(&self, date: NaiveDate) -> Option<&EmotionRecord> {
        self.records.iter().find(|r| r.date == date)
    }

    /// Records dated within `start..=end`, in collection order.
    pub fn records_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&EmotionRecord> {
        self.records
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .collect()
    }

    /// Drops every record and deletes the stored records and draft blobs.
    ///
    /// There is no confirmation at this layer.
    pub fn reset_all_data(&mut self) -> AppResult<()> {
        info!(count = self.records.len(), "Resetting all data");
        self.records.clear();
        self.blobs.remove(RECORDS_KEY)?;
        self.blobs.remove(DRAFT_KEY)
    }

    /// Serializes the collection exactly as it is persisted.
    pub fn to_blob(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Stores the in-progress draft.
    pub fn save_draft(&mut self, draft: &Draft) -> AppResult<()> {
        let blob = serde_json::to_string(draft)?;
        self.blobs.set(DRAFT_KEY, &blob)?;
        debug!(date = %draft.date, "Saved draft");
        Ok(())
    }

    /// Returns the stored draft if it targets `today`.
    ///
    /// Drafts for other days and unreadable drafts are ignored.
    pub fn load_draft(&self, today: NaiveDate) -> AppResult<Option<Draft>> {
        let Some(blob) = self.blobs.get(DRAFT_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Draft>(&blob) {
            Ok(draft) if draft.date == today => Ok(Some(draft)),
            Ok(draft) => {
                debug!(date = %draft.date, "Ignoring draft for another day");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable draft");
                Ok(None)
            }
        }
    }

    pub fn clear_draft(&mut self) -> AppResult<()> {
        self.blobs.remove(DRAFT_KEY)
    }

    pub fn blob_store(&self) -> &B {
        &self.blobs
    }

    pub fn into_blob_store(self) -> B {
        self.blobs
    }

    fn persist(&mut self) -> AppResult<()> {
        let blob = self.to_blob()?;
        self.blobs.set(RECORDS_KEY, &blob)
    }
}

fn sort_newest_first(records: &mut [EmotionRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}
