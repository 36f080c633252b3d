//! Best-score persistence
//!
//! Features:
//! - Versioned JSON envelope
//! - Atomic replace (tmp → save)
//! - In-memory store for tests and headless runs

pub mod envelope;
pub mod store;

pub use envelope::{ENVELOPE_VERSION, ScoreEnvelope};
pub use store::{JsonFileStore, MemoryStore, ScoreStore};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported save version {0}")]
    UnsupportedVersion(u32),
}
