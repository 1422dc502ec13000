//! Edge relations and the core edge struct.

use serde::{Deserialize, Serialize};

/// The two edge relations of the lexical graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Relation {
    /// Chains a lexeme up to the root of its meaning tree (walked inbound from the lexeme).
    MeaningRoot = 0,
    /// Connects meaning nodes into a possibly cyclic graph (walked outbound from a root).
    MeaningGraph = 1,
}

impl Relation {
    /// Convert a u8 value to a Relation, returning None for invalid values.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::MeaningRoot),
            1 => Some(Self::MeaningGraph),
            _ => None,
        }
    }

    /// Return a human-readable name for this relation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MeaningRoot => "meaning_root",
            Self::MeaningGraph => "meaning_graph",
        }
    }

    /// Parse a relation from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "meaning_root" | "meaningroot" => Some(Self::MeaningRoot),
            "meaning_graph" | "meaninggraph" => Some(Self::MeaningGraph),
            _ => None,
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A directed edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex ID.
    pub source: u64,
    /// Target vertex ID.
    pub target: u64,
    /// Which relation this edge belongs to.
    pub relation: Relation,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: u64, target: u64, relation: Relation) -> Self {
        Self {
            source,
            target,
            relation,
        }
    }

    /// Shorthand for a `MeaningRoot` edge.
    pub fn meaning_root(source: u64, target: u64) -> Self {
        Self::new(source, target, Relation::MeaningRoot)
    }

    /// Shorthand for a `MeaningGraph` edge.
    pub fn meaning_graph(source: u64, target: u64) -> Self {
        Self::new(source, target, Relation::MeaningGraph)
    }
}
