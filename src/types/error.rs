//! Error types for the Lexigraph library.

use thiserror::Error;

/// All errors that can occur in the Lexigraph library.
#[derive(Error, Debug)]
pub enum LexError {
    /// A query argument was rejected (negative distance, malformed pattern, unknown type tag).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The graph store could not hand out a snapshot.
    #[error("Graph store unavailable: {0}")]
    Unavailable(String),

    /// Vertex not found by ID.
    #[error("Vertex ID {0} not found")]
    VertexNotFound(u64),

    /// Two vertices were supplied with the same ID.
    #[error("Duplicate vertex ID: {0}")]
    DuplicateVertex(u64),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot file could not be parsed or written.
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Engine configuration could not be loaded or is out of range.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of [`LexError`] for callers deciding what to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied a bad argument. Retrying will not help.
    InvalidArgument,
    /// Transient store failure. Retry policy belongs to the caller.
    Unavailable,
    /// The snapshot data, its file, or the configuration is broken.
    Data,
}

impl LexError {
    /// Build an [`LexError::InvalidArgument`] from anything displayable.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Unavailable(_) => ErrorKind::Unavailable,
            Self::VertexNotFound(_)
            | Self::DuplicateVertex(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::Config(_) => ErrorKind::Data,
        }
    }
}

/// Convenience result type for Lexigraph operations.
pub type LexResult<T> = Result<T, LexError>;
