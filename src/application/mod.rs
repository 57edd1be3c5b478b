//! Application layer - Use cases and orchestration

pub mod init;
pub mod journal;
pub mod manage_config;

pub use journal::{Clock, Draft, JournalApp, SystemClock};
pub use manage_config::ConfigService;
