//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while encoding, decoding, or validating a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding to JSON or binary format failed
    #[error("Encoding failed: {0}")]
    Encode(String),

    /// Decoding from JSON or binary format failed
    #[error("Decoding failed: {0}")]
    Decode(String),

    /// Checkpoint was written by a format version this build does not read
    #[error("Checkpoint version {found} is not supported (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Checkpoint contradicts the transition rule or its own history
    #[error("Inconsistent checkpoint: {0}")]
    Inconsistent(String),
}
