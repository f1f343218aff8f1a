//! Error types for the commit-reveal protocol.

use thiserror::Error;

/// Result type for protocol operations.
pub type FairResult<T> = Result<T, FairError>;

/// Errors that can occur while committing, contributing, or revealing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FairError {
    /// A range size of zero has no values to choose from.
    #[error("invalid range size {0}: must be at least 1")]
    InvalidRange(u32),

    /// A contributed value falls outside `0..range`.
    #[error("value {value} is out of range 0..{range}")]
    ValueOutOfRange {
        /// The rejected value.
        value: u32,
        /// The exclusive upper bound.
        range: u32,
    },

    /// The secure entropy source failed. Never retried with a weaker source.
    #[error("secure entropy source failed: {0}")]
    Entropy(String),

    /// A contribution was offered before the digest was shown.
    #[error("commitment digest has not been disclosed yet")]
    NotDisclosed,

    /// A reveal was requested before the counterparty contributed.
    #[error("counterparty has not contributed a value yet")]
    NoContribution,

    /// The counterparty already contributed to this commitment.
    #[error("counterparty already contributed to this commitment")]
    AlreadyContributed,

    /// The commitment was already revealed.
    #[error("commitment has already been revealed")]
    AlreadyRevealed,

    /// A hex string could not be decoded.
    #[error("invalid hex in {field}: {reason}")]
    InvalidHex {
        /// Which input was malformed.
        field: &'static str,
        /// Decoder message.
        reason: String,
    },

    /// The MAC rejected the key length.
    #[error("invalid HMAC key length")]
    InvalidKeyLength,
}
