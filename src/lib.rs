//! Lexigraph — query engine over a lexical semantic graph.
//!
//! Lexemes (word-forms) are linked to meaning trees through `MeaningRoot` edges
//! and meaning nodes are linked to each other through `MeaningGraph` edges.
//! Three read queries run against an immutable snapshot of that graph: fuzzy
//! lookup by edit distance, wildcard lookup, and meaning resolution.

pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{EngineConfig, FuzzyConfig, RootMultiplicity, TraversalConfig};
pub use engine::{levenshtein, MeaningMatch, QueryEngine, RootPath, WildcardPattern};
pub use format::{SnapshotFile, SnapshotReader, SnapshotWriter};
pub use graph::{
    GraphBuilder, LexicalGraph, PathSpec, Snapshot, SnapshotStore, TraversalDirection,
    TraversalPath, Uniqueness,
};
pub use index::{FormIndex, FormTree, MeaningTypeIndex};
pub use types::{
    now_micros, Edge, ErrorKind, LexError, LexResult, Lexeme, MeaningNode, MeaningNodeBuilder,
    MeaningType, Relation, Vertex, MAX_MEANING_DEPTH, ROOT_HOPS, ROOT_SENTINEL,
};
