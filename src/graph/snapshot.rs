//! Versioned snapshot handle.
//!
//! Ingestion (outside this crate) publishes whole new graphs; readers take an
//! `Arc` to whichever graph is current and keep reading it for the rest of their
//! query, regardless of later publishes.

use std::ops::Deref;
use std::sync::{Arc, RwLock};

use crate::types::{now_micros, LexError, LexResult};

use super::LexicalGraph;

/// A point-in-time view of the graph.
#[derive(Clone)]
pub struct Snapshot {
    version: u64,
    published_at: u64,
    graph: Arc<LexicalGraph>,
}

impl Snapshot {
    /// Monotonic version number, starting at 1.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// When this snapshot was published (Unix epoch microseconds).
    pub fn published_at(&self) -> u64 {
        self.published_at
    }

    /// The graph itself.
    pub fn graph(&self) -> &LexicalGraph {
        &self.graph
    }
}

impl Deref for Snapshot {
    type Target = LexicalGraph;

    fn deref(&self) -> &LexicalGraph {
        &self.graph
    }
}

/// Holds the current snapshot and hands it out to concurrent readers.
pub struct SnapshotStore {
    current: RwLock<Option<Snapshot>>,
}

impl SnapshotStore {
    /// Create a store with nothing published yet.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// Create a store with `graph` already published as version 1.
    pub fn with_graph(graph: LexicalGraph) -> Self {
        Self {
            current: RwLock::new(Some(Snapshot {
                version: 1,
                published_at: now_micros(),
                graph: Arc::new(graph),
            })),
        }
    }

    /// Publish a new graph, returning its version. Readers holding an older
    /// snapshot are unaffected.
    pub fn publish(&self, graph: LexicalGraph) -> LexResult<u64> {
        let mut current = self
            .current
            .write()
            .map_err(|_| LexError::Unavailable("snapshot lock poisoned".to_string()))?;
        let version = current.as_ref().map(|s| s.version + 1).unwrap_or(1);
        *current = Some(Snapshot {
            version,
            published_at: now_micros(),
            graph: Arc::new(graph),
        });
        log::debug!("published snapshot version {}", version);
        Ok(version)
    }

    /// Take the current snapshot.
    pub fn snapshot(&self) -> LexResult<Snapshot> {
        let current = self
            .current
            .read()
            .map_err(|_| LexError::Unavailable("snapshot lock poisoned".to_string()))?;
        current
            .clone()
            .ok_or_else(|| LexError::Unavailable("no snapshot has been published".to_string()))
    }

    /// Version of the current snapshot, if any.
    pub fn version(&self) -> Option<u64> {
        self.current
            .read()
            .ok()
            .and_then(|c| c.as_ref().map(|s| s.version))
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
