//! Domain layer - Entries, tags, queries and exports

pub mod entry;
pub mod export;
pub mod query;
pub mod store;
pub mod tags;

pub use entry::{Entry, EntryDate, EntryMap, TagSet};
pub use export::{Export, ExportFormat, ExportFormatter};
pub use store::{EntryStore, STORAGE_KEY};
pub use tags::TagCounts;
