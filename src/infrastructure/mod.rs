//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod emitter;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use editor::EditorSession;
pub use emitter::{DirectoryEmitter, FileEmitter};
pub use repository::{FileSystemRepository, JournalRepository, JOURNAL_DIR};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
