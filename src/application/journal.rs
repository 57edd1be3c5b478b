//! Journal facade: the named operations any front end calls
//!
//! `JournalApp` owns the entry store, the persistence port and today's draft.
//! Front ends (the CLI, tests) drive it by direct calls and render whatever
//! it returns.

use crate::domain::query::{self, sorted_by_date_desc};
use crate::domain::tags;
use crate::domain::{Entry, EntryDate, EntryStore, Export, ExportFormat, ExportFormatter, TagSet};
use crate::error::Result;
use crate::infrastructure::{FileEmitter, KeyValueStore};
use chrono::{DateTime, Local, Utc};
use tracing::{debug, info};

/// Source of the current time and today's date
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> EntryDate;
}

/// Wall clock.
///
/// "Today" is the local calendar date, not the UTC one, so an entry written
/// late in the evening west of UTC (or early morning east of it) is keyed and
/// exported under the date shown on the user's own calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> EntryDate {
        EntryDate::new(Local::now().date_naive())
    }
}

/// Unsaved text and tags for today's entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub text: String,
    pub tags: TagSet,
}

/// Application facade over the journal
pub struct JournalApp<S, C = SystemClock> {
    storage: S,
    clock: C,
    store: EntryStore,
    draft: Draft,
}

impl<S: KeyValueStore, C: Clock> JournalApp<S, C> {
    /// Load stored entries and start a draft from today's entry, if any
    pub fn open(storage: S, clock: C) -> Result<Self> {
        let store = EntryStore::load(&storage)?;
        let mut app = JournalApp {
            storage,
            clock,
            store,
            draft: Draft::default(),
        };
        app.load_today_entry();
        Ok(app)
    }

    pub fn today(&self) -> EntryDate {
        self.clock.today()
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Reset the draft to today's saved entry, or to empty
    pub fn load_today_entry(&mut self) -> &Draft {
        self.draft = match self.store.get(&self.clock.today()) {
            Some(entry) => Draft {
                text: entry.text().to_string(),
                tags: entry.tags().clone(),
            },
            None => Draft::default(),
        };
        &self.draft
    }

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    /// Add comma-separated tags to the draft. Returns how many were new.
    pub fn add_tags(&mut self, raw: &str) -> usize {
        let merged = tags::add_tags(&self.draft.tags, raw);
        let added = merged.len() - self.draft.tags.len();
        self.draft.tags = merged;
        added
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.draft.tags = tags::remove_tag(&self.draft.tags, tag);
    }

    /// Empty the draft. A saved entry is never removed by this.
    pub fn clear_draft(&mut self) {
        self.draft = Draft::default();
    }

    /// Save the draft as today's entry
    pub fn save_entry(&mut self) -> Result<&Entry> {
        let today = self.clock.today();
        let now = self.clock.now();
        let entry = self.store.upsert(
            &mut self.storage,
            today,
            &self.draft.text,
            &self.draft.tags,
            now,
        )?;
        info!(date = %today, "entry saved");
        Ok(entry)
    }

    pub fn entry(&self, date: EntryDate) -> Option<&Entry> {
        self.store.get(&date)
    }

    /// All entries, newest first
    pub fn past_entries(&self) -> Vec<(EntryDate, Entry)> {
        sorted_by_date_desc(self.store.entries().clone())
    }

    pub fn entries_on(&self, date: EntryDate) -> Vec<(EntryDate, Entry)> {
        sorted_by_date_desc(query::by_date(self.store.entries(), date))
    }

    /// Entries carrying `tag`, newest first
    pub fn entries_tagged(&self, tag: &str) -> Vec<(EntryDate, Entry)> {
        sorted_by_date_desc(query::by_tag(self.store.entries(), tag))
    }

    /// Tags with entry counts, most used first
    pub fn tag_summary(&self) -> Vec<(String, usize)> {
        tags::sorted_by_frequency_desc(&tags::aggregate(self.store.entries()))
    }

    /// Export entries selected by date range and hand the file to `emitter`.
    ///
    /// Nothing is emitted when the selection is empty.
    pub fn export_data<E: FileEmitter + ?Sized>(
        &self,
        format: ExportFormat,
        start: Option<EntryDate>,
        end: Option<EntryDate>,
        emitter: &mut E,
    ) -> Result<Export> {
        let selected = query::by_date_range(self.store.entries(), start, end);
        debug!(count = selected.len(), %format, "export selection");

        let export = ExportFormatter::render(&selected, format, self.clock.today())?;
        emitter.emit(&export.content, &export.filename, export.mime_type)?;
        Ok(export)
    }

    /// Back up every entry as JSON
    pub fn backup_all_data<E: FileEmitter + ?Sized>(&self, emitter: &mut E) -> Result<Export> {
        let export = ExportFormatter::backup(self.store.entries(), self.clock.today())?;
        emitter.emit(&export.content, &export.filename, export.mime_type)?;
        Ok(export)
    }
}
