//! Error handling for the pedigree builder.

use std::io;

/// Specialized error type for pedigree parsing and assembly
#[derive(Debug, thiserror::Error)]
pub enum PedigreeError {
    /// A relationship description contains a word outside the vocabulary
    #[error("unrecognized token `{token}` in relationship description")]
    UnknownToken {
        /// The offending word, lowercased
        token: String,
    },

    /// A numeric token appeared without a preceding sibling/child/mate keyword
    #[error("index `{token}` does not follow a sibling, child or mate keyword")]
    UnexpectedIndex {
        /// The stray numeric token
        token: String,
    },

    /// An index token outside the 1-based range
    #[error("invalid index `{token}`: indices are 1-based")]
    InvalidIndex {
        /// The rejected numeric token
        token: String,
    },

    /// A family group that violates a structural invariant
    #[error("malformed family group `{group}`: {reason}")]
    MalformedGroup {
        /// Group identifier
        group: String,
        /// Which invariant failed
        reason: String,
    },

    /// A full worklist pass attached no candidates
    #[error("family group `{group}` stalled with {remaining} unplaced person(s)")]
    UnresolvedPlacement {
        /// Group identifier
        group: String,
        /// Number of persons still on the worklist
        remaining: usize,
    },

    /// A record field failed vocabulary or format mapping
    #[error("invalid {field} field: `{value}`")]
    InvalidField {
        /// Which column of the record
        field: &'static str,
        /// The raw value as read
        value: String,
    },

    /// Error opening or reading a family file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error writing the JSON snapshot
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PedigreeError {
    /// Whether this error came from relationship-text parsing
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownToken { .. } | Self::UnexpectedIndex { .. } | Self::InvalidIndex { .. }
        )
    }
}

/// Result type for pedigree operations
pub type Result<T> = std::result::Result<T, PedigreeError>;
