//! Reads JSON snapshot files into an in-memory graph.

use std::io::Read;
use std::path::Path;

use crate::graph::LexicalGraph;
use crate::types::LexResult;

use super::SnapshotFile;

/// Reader for JSON snapshot files.
pub struct SnapshotReader;

impl SnapshotReader {
    /// Read a snapshot file into a LexicalGraph.
    pub fn read_from_file(path: &Path) -> LexResult<LexicalGraph> {
        let data = std::fs::read(path)?;
        log::debug!("read {} bytes from {}", data.len(), path.display());
        Self::read_from(&mut std::io::Cursor::new(data))
    }

    /// Read from any reader into a LexicalGraph.
    pub fn read_from(reader: &mut impl Read) -> LexResult<LexicalGraph> {
        let file: SnapshotFile = serde_json::from_reader(reader)?;
        LexicalGraph::from_parts(file.lexemes, file.meanings, file.edges)
    }
}
