//! Lexeme vertices — stored word-form occurrences.

use serde::{Deserialize, Serialize};

/// One word-form occurrence. Several lexemes may share a `form` (homographs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexeme {
    /// Unique identifier, stable for the lifetime of the vertex.
    pub id: u64,
    /// Canonical (already normalized) text used for all matching.
    pub form: String,
}

impl Lexeme {
    /// Create a lexeme.
    pub fn new(id: u64, form: impl Into<String>) -> Self {
        Self {
            id,
            form: form.into(),
        }
    }
}
