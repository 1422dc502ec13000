//! In-memory graph store — the immutable snapshot every query reads from.

pub mod builder;
pub mod lexical_graph;
pub mod snapshot;
pub mod traversal;

pub use builder::GraphBuilder;
pub use lexical_graph::LexicalGraph;
pub use snapshot::{Snapshot, SnapshotStore};
pub use traversal::{walk_paths, PathSpec, TraversalDirection, TraversalPath, Uniqueness};
