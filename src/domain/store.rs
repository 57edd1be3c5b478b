//! Entry store: the date-keyed mapping and its write-through persistence

use super::entry::{Entry, EntryDate, EntryMap, TagSet};
use super::tags::is_valid_tag;
use crate::error::{JournalError, Result};
use crate::infrastructure::KeyValueStore;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Storage key holding the whole serialized mapping
pub const STORAGE_KEY: &str = "journalEntries";

/// All journal entries, one per date.
///
/// Every successful mutation is flushed to the persistence port before
/// returning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    entries: EntryMap,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the mapping from `storage`.
    ///
    /// Missing or undecodable data yields an empty store; only a failing port
    /// is reported. Decodable entries that break an entry invariant are
    /// repaired one by one, see [`EntryStore::parse`].
    pub fn load<S: KeyValueStore + ?Sized>(storage: &S) -> Result<Self> {
        let raw = match storage.read(STORAGE_KEY)? {
            Some(raw) => raw,
            None => {
                debug!("no stored entries, starting empty");
                return Ok(Self::new());
            }
        };

        match Self::parse(&raw) {
            Ok(entries) => {
                debug!(count = entries.len(), "loaded entries");
                Ok(EntryStore { entries })
            }
            Err(e) => {
                warn!(error = %e, "ignoring unreadable stored entries");
                Ok(Self::new())
            }
        }
    }

    /// Decode a stored mapping.
    ///
    /// Only undecodable structure is malformed. An `updatedAt` earlier than
    /// `createdAt` is raised to `createdAt`, and empty or over-length tags are
    /// dropped, so every loaded entry can be saved again unchanged.
    pub fn parse(raw: &str) -> Result<EntryMap> {
        let mut entries: EntryMap = serde_json::from_str(raw)
            .map_err(|e| JournalError::MalformedStoredData(e.to_string()))?;

        for (date, entry) in entries.iter_mut() {
            if entry.clamp_updated_at() {
                warn!(%date, "stored entry updated before it was created, clamping updatedAt");
            }
            let dropped = entry.retain_tags(is_valid_tag);
            if !dropped.is_empty() {
                warn!(%date, ?dropped, "dropping invalid stored tags");
            }
        }

        Ok(entries)
    }

    pub fn get(&self, date: &EntryDate) -> Option<&Entry> {
        self.entries.get(date)
    }

    pub fn entries(&self) -> &EntryMap {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create or update the entry for `date`, then flush.
    ///
    /// Text is stored trimmed and must not be empty. Tags are stored as given
    /// (normalizing them is the caller's job) but each must be 1 to 30
    /// characters. `created_at` survives updates.
    ///
    /// If the flush fails the in-memory change is kept and
    /// [`JournalError::StorageUnavailable`] is returned.
    pub fn upsert<S: KeyValueStore + ?Sized>(
        &mut self,
        storage: &mut S,
        date: EntryDate,
        text: &str,
        tags: &TagSet,
        now: DateTime<Utc>,
    ) -> Result<&Entry> {
        let text = text.trim();
        if text.is_empty() {
            return Err(JournalError::Validation(
                "empty entry: write something before saving".to_string(),
            ));
        }
        if let Some(bad) = tags.iter().find(|t| !is_valid_tag(t)) {
            return Err(JournalError::Validation(format!(
                "invalid tag '{}': tags must be 1 to 30 characters",
                bad
            )));
        }

        let entry = match self.entries.get(&date) {
            Some(existing) => existing.revised(text, tags.clone(), now),
            None => Entry::new(text, tags.clone(), now),
        };
        self.entries.insert(date, entry);
        debug!(%date, "saved entry");

        if let Err(e) = self.flush(storage) {
            warn!(error = %e, "entries kept in memory only");
            return Err(e);
        }

        Ok(&self.entries[&date])
    }

    fn flush<S: KeyValueStore + ?Sized>(&self, storage: &mut S) -> Result<()> {
        let json = serde_json::to_string(&self.entries)?;
        storage.write(STORAGE_KEY, &json)
    }
}

impl From<EntryMap> for EntryStore {
    fn from(entries: EntryMap) -> Self {
        EntryStore { entries }
    }
}
