//! Meaning-node types and the core meaning-node struct.

use serde::{Deserialize, Serialize};

use super::ROOT_SENTINEL;
use crate::types::error::{LexError, LexResult};

/// The semantic role of a meaning node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum MeaningType {
    /// One sense of a word.
    Sense = 0,
    /// A grouping node, typically the root of a meaning tree.
    Category = 1,
    /// A textual definition attached to a sense.
    Definition = 2,
    /// A usage example.
    Example = 3,
    /// A typed link to another meaning (synonymy, hypernymy, ...).
    Relation = 4,
}

impl MeaningType {
    /// Every meaning type, in tag order.
    pub const ALL: [MeaningType; 5] = [
        Self::Sense,
        Self::Category,
        Self::Definition,
        Self::Example,
        Self::Relation,
    ];

    /// Convert a u8 value to a MeaningType, returning None for invalid values.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Sense),
            1 => Some(Self::Category),
            2 => Some(Self::Definition),
            3 => Some(Self::Example),
            4 => Some(Self::Relation),
            _ => None,
        }
    }

    /// Convert a raw integer tag, failing with `InvalidArgument` when it is out of range.
    pub fn from_code(code: i64) -> LexResult<Self> {
        u8::try_from(code)
            .ok()
            .and_then(Self::from_u8)
            .ok_or_else(|| LexError::invalid(format!("unknown meaning type tag {code}")))
    }

    /// Return a human-readable name for this meaning type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sense => "sense",
            Self::Category => "category",
            Self::Definition => "definition",
            Self::Example => "example",
            Self::Relation => "relation",
        }
    }

    /// Parse a meaning type from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "sense" => Some(Self::Sense),
            "category" => Some(Self::Category),
            "definition" | "def" => Some(Self::Definition),
            "example" => Some(Self::Example),
            "relation" => Some(Self::Relation),
            _ => None,
        }
    }

    /// Parse either a name (`sense`) or a numeric tag (`0`).
    pub fn parse(input: &str) -> LexResult<Self> {
        let input = input.trim();
        if let Ok(code) = input.parse::<i64>() {
            return Self::from_code(code);
        }
        Self::from_name(input)
            .ok_or_else(|| LexError::invalid(format!("unknown meaning type {input:?}")))
    }
}

impl std::fmt::Display for MeaningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A vertex of the meaning graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeaningNode {
    /// Unique identifier.
    pub id: u64,
    /// Semantic role of this node.
    #[serde(rename = "type")]
    pub meaning_type: MeaningType,
    /// Payload emitted by meaning resolution. Nodes without one are never emitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_rep: Option<String>,
    /// Root marker. Equal to the root sentinel on meaning-tree roots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

impl MeaningNode {
    /// Whether this node is a meaning-tree root under the given sentinel.
    pub fn is_root_with(&self, sentinel: i64) -> bool {
        self.parent_id == Some(sentinel)
    }

    /// Whether this node is a meaning-tree root under [`ROOT_SENTINEL`].
    pub fn is_root(&self) -> bool {
        self.is_root_with(ROOT_SENTINEL)
    }
}

/// Builder for constructing MeaningNode instances ergonomically.
pub struct MeaningNodeBuilder {
    meaning_type: MeaningType,
    internal_rep: Option<String>,
    parent_id: Option<i64>,
}

impl MeaningNodeBuilder {
    /// Create a new builder with the required fields.
    pub fn new(meaning_type: MeaningType) -> Self {
        Self {
            meaning_type,
            internal_rep: None,
            parent_id: None,
        }
    }

    /// Set the internal representation.
    pub fn internal_rep(mut self, rep: impl Into<String>) -> Self {
        self.internal_rep = Some(rep.into());
        self
    }

    /// Set the parent marker.
    pub fn parent_id(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Mark this node as a meaning-tree root.
    pub fn root(self) -> Self {
        self.parent_id(ROOT_SENTINEL)
    }

    /// Build the MeaningNode with an explicit id.
    pub fn build(self, id: u64) -> MeaningNode {
        MeaningNode {
            id,
            meaning_type: self.meaning_type,
            internal_rep: self.internal_rep,
            parent_id: self.parent_id,
        }
    }
}
