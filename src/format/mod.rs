//! Snapshot file I/O.
//!
//! Snapshots are produced by the ingestion side and consumed here as JSON.

pub mod reader;
pub mod writer;

pub use reader::SnapshotReader;
pub use writer::SnapshotWriter;

use serde::{Deserialize, Serialize};

use crate::types::{Edge, Lexeme, MeaningNode};

/// On-disk layout of a snapshot file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotFile {
    #[serde(default)]
    pub lexemes: Vec<Lexeme>,
    #[serde(default)]
    pub meanings: Vec<MeaningNode>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}
