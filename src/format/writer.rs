//! Writes an in-memory graph out as a JSON snapshot file.

use std::io::Write;
use std::path::Path;

use crate::graph::LexicalGraph;
use crate::types::LexResult;

use super::SnapshotFile;

/// Writer for JSON snapshot files.
pub struct SnapshotWriter {
    pretty: bool,
}

impl SnapshotWriter {
    /// Create a writer producing compact JSON.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a writer producing indented JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Write a graph to a file.
    pub fn write_to_file(&self, graph: &LexicalGraph, path: &Path) -> LexResult<()> {
        let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
        self.write_to(graph, &mut file)?;
        file.flush()?;
        Ok(())
    }

    /// Write a graph to any writer.
    pub fn write_to(&self, graph: &LexicalGraph, writer: &mut impl Write) -> LexResult<()> {
        let file = SnapshotFile {
            lexemes: graph.lexemes().to_vec(),
            meanings: graph.meanings().to_vec(),
            edges: graph.edges().to_vec(),
        };
        if self.pretty {
            serde_json::to_writer_pretty(writer, &file)?;
        } else {
            serde_json::to_writer(writer, &file)?;
        }
        Ok(())
    }
}

impl Default for SnapshotWriter {
    fn default() -> Self {
        Self::new()
    }
}
