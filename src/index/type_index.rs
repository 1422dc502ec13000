//! Index by meaning type — maps each MeaningType to sorted node IDs.

use std::collections::HashMap;

use crate::types::{MeaningNode, MeaningType};

/// Maps each MeaningType to a sorted list of meaning-node IDs.
pub struct MeaningTypeIndex {
    index: HashMap<MeaningType, Vec<u64>>,
}

impl MeaningTypeIndex {
    /// Create a new, empty type index.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
        }
    }

    /// Get all node IDs of a given type.
    pub fn get(&self, meaning_type: MeaningType) -> &[u64] {
        self.index
            .get(&meaning_type)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Count nodes of a given type.
    pub fn count(&self, meaning_type: MeaningType) -> usize {
        self.index.get(&meaning_type).map(|v| v.len()).unwrap_or(0)
    }

    /// Rebuild the entire index from a slice of nodes.
    pub fn rebuild(&mut self, nodes: &[MeaningNode]) {
        self.index.clear();
        for node in nodes {
            self.index
                .entry(node.meaning_type)
                .or_default()
                .push(node.id);
        }
        for list in self.index.values_mut() {
            list.sort_unstable();
        }
    }

    /// Number of total entries across all types.
    pub fn len(&self) -> usize {
        self.index.values().map(|v| v.len()).sum()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MeaningTypeIndex {
    fn default() -> Self {
        Self::new()
    }
}
