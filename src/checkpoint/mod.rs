//! Checkpoint and resume for the vending controller.
//!
//! A [`Checkpoint`] captures a controller's current state together with its
//! full audit history, so a controller can outlive the process that ran it:
//! serialize, store, and rebuild later with [`Controller::restore`].
//!
//! Two encodings are offered: JSON for readability, bincode for compactness.
//! Decoding always validates; a checkpoint that contradicts the transition
//! rule is rejected rather than resumed.
//!
//! [`Controller::restore`]: crate::Controller::restore

use crate::core::{apply, History, VendState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for the checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a controller.
///
/// Carries everything needed to resume: the state the controller was in and
/// every request it had handled. The catalog is not part of the snapshot;
/// the caller picks one again on restore.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When the checkpoint was taken
    pub created_at: DateTime<Utc>,

    /// State the controller was in
    pub state: VendState,

    /// Complete audit history up to the capture point
    pub history: History,
}

impl Checkpoint {
    pub(crate) fn capture(state: VendState, history: History) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            state,
            history,
        }
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    /// Decode from JSON and validate.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            serde_json::from_str(json).map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    /// Decode from binary and validate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            bincode::deserialize(bytes).map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Check the checkpoint against the transition rule.
    ///
    /// A valid checkpoint has a supported version and a history that starts
    /// at [`VendState::INITIAL`], chains without gaps, agrees with
    /// [`apply`] on every step, and ends at the captured state.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if self.history.is_empty() {
            if self.state != VendState::INITIAL {
                return Err(CheckpointError::Inconsistent(format!(
                    "empty history but state is {}, expected {}",
                    self.state,
                    VendState::INITIAL
                )));
            }
            return Ok(());
        }

        let records = self.history.records();

        if let Some(first) = records.first() {
            if first.from != VendState::INITIAL {
                return Err(CheckpointError::Inconsistent(format!(
                    "history starts at {}, expected {}",
                    first.from,
                    VendState::INITIAL
                )));
            }
        }

        for pair in records.windows(2) {
            if pair[0].to != pair[1].from {
                return Err(CheckpointError::Inconsistent(format!(
                    "history jumps from {} to {}",
                    pair[0].to, pair[1].from
                )));
            }
        }

        for record in records {
            let expected = apply(record.from, record.request);
            if record.to != expected {
                return Err(CheckpointError::Inconsistent(format!(
                    "{} in {} leads to {}, but the history records {}",
                    record.request, record.from, expected, record.to
                )));
            }
        }

        if let Some(last) = records.last() {
            if last.to != self.state {
                return Err(CheckpointError::Inconsistent(format!(
                    "history ends at {} but state is {}",
                    last.to, self.state
                )));
            }
        }

        Ok(())
    }
}
