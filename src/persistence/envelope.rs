//! Versioned save envelope

use serde::{Deserialize, Serialize};

use super::PersistError;

/// Current envelope format
pub const ENVELOPE_VERSION: u32 = 1;

/// On-disk representation of the best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEnvelope {
    pub version: u32,
    pub best_score: u64,
}

impl ScoreEnvelope {
    pub fn new(best_score: u64) -> Self {
        Self {
            version: ENVELOPE_VERSION,
            best_score,
        }
    }

    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an envelope, rejecting versions newer than this build understands
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let envelope: ScoreEnvelope = serde_json::from_str(json)?;
        if envelope.version > ENVELOPE_VERSION {
            return Err(PersistError::UnsupportedVersion(envelope.version));
        }
        Ok(envelope)
    }
}
