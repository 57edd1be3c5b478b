//! dayjot - Terminal day journal
//!
//! One entry per calendar day, with tags, date and tag filters, and
//! JSON/CSV/text exports. Entries are kept as a single JSON mapping inside
//! the journal's `.dayjot` directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::JournalError;
