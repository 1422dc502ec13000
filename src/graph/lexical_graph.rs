//! Core graph structure — lexemes, meaning nodes and edges with per-relation adjacency indexes.

use std::collections::HashMap;

use crate::index::{FormIndex, FormTree, MeaningTypeIndex};
use crate::types::{Edge, LexError, LexResult, Lexeme, MeaningNode, Relation, Vertex};

#[derive(Debug, Clone, Copy)]
enum VertexSlot {
    Lexeme(usize),
    Meaning(usize),
}

/// Edge positions per vertex for a single relation, in insertion order.
#[derive(Default)]
struct Adjacency {
    outbound: HashMap<u64, Vec<usize>>,
    inbound: HashMap<u64, Vec<usize>>,
}

/// An immutable lexical graph. Once built it is never mutated; a new version
/// is a new `LexicalGraph`.
pub struct LexicalGraph {
    /// All lexemes, in insertion order.
    lexemes: Vec<Lexeme>,
    /// All meaning nodes, in insertion order.
    meanings: Vec<MeaningNode>,
    /// Vertex ID -> position in `lexemes` or `meanings`.
    slots: HashMap<u64, VertexSlot>,
    /// All edges, in insertion order. An edge's position is its identity.
    edges: Vec<Edge>,
    /// Adjacency per relation.
    adjacency: HashMap<Relation, Adjacency>,
    /// Canonical form index.
    form_index: FormIndex,
    /// Meaning type index.
    type_index: MeaningTypeIndex,
    /// Metric tree over distinct forms.
    form_tree: FormTree,
}

impl LexicalGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            lexemes: Vec::new(),
            meanings: Vec::new(),
            slots: HashMap::new(),
            edges: Vec::new(),
            adjacency: HashMap::new(),
            form_index: FormIndex::new(),
            type_index: MeaningTypeIndex::new(),
            form_tree: FormTree::new(),
        }
    }

    /// Build a graph from its parts, validating IDs and building every index.
    pub fn from_parts(
        lexemes: Vec<Lexeme>,
        meanings: Vec<MeaningNode>,
        edges: Vec<Edge>,
    ) -> LexResult<Self> {
        let mut slots = HashMap::with_capacity(lexemes.len() + meanings.len());
        for (pos, lexeme) in lexemes.iter().enumerate() {
            if slots.insert(lexeme.id, VertexSlot::Lexeme(pos)).is_some() {
                return Err(LexError::DuplicateVertex(lexeme.id));
            }
        }
        for (pos, node) in meanings.iter().enumerate() {
            if slots.insert(node.id, VertexSlot::Meaning(pos)).is_some() {
                return Err(LexError::DuplicateVertex(node.id));
            }
        }

        let mut adjacency: HashMap<Relation, Adjacency> = HashMap::new();
        for (pos, edge) in edges.iter().enumerate() {
            if !slots.contains_key(&edge.source) {
                return Err(LexError::VertexNotFound(edge.source));
            }
            if !slots.contains_key(&edge.target) {
                return Err(LexError::VertexNotFound(edge.target));
            }
            let adj = adjacency.entry(edge.relation).or_default();
            adj.outbound.entry(edge.source).or_default().push(pos);
            adj.inbound.entry(edge.target).or_default().push(pos);
        }

        let mut form_index = FormIndex::new();
        form_index.rebuild(&lexemes);
        let mut type_index = MeaningTypeIndex::new();
        type_index.rebuild(&meanings);
        let form_tree = FormTree::from_forms(form_index.forms());

        log::debug!(
            "built lexical graph: {} lexemes ({} distinct forms), {} meaning nodes, {} edges",
            lexemes.len(),
            form_index.len(),
            meanings.len(),
            edges.len()
        );

        Ok(Self {
            lexemes,
            meanings,
            slots,
            edges,
            adjacency,
            form_index,
            type_index,
            form_tree,
        })
    }

    /// Number of lexemes.
    pub fn lexeme_count(&self) -> usize {
        self.lexemes.len()
    }

    /// Number of meaning nodes.
    pub fn meaning_count(&self) -> usize {
        self.meanings.len()
    }

    /// Number of vertices of either kind.
    pub fn vertex_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges in one relation.
    pub fn relation_count(&self, relation: Relation) -> usize {
        self.adjacency
            .get(&relation)
            .map(|adj| adj.outbound.values().map(|v| v.len()).sum())
            .unwrap_or(0)
    }

    /// Get any vertex by ID.
    pub fn vertex(&self, id: u64) -> Option<Vertex<'_>> {
        match self.slots.get(&id)? {
            VertexSlot::Lexeme(pos) => Some(Vertex::Lexeme(&self.lexemes[*pos])),
            VertexSlot::Meaning(pos) => Some(Vertex::Meaning(&self.meanings[*pos])),
        }
    }

    /// Get a lexeme by ID.
    pub fn lexeme(&self, id: u64) -> Option<&Lexeme> {
        self.vertex(id).and_then(|v| v.as_lexeme())
    }

    /// Get a meaning node by ID.
    pub fn meaning(&self, id: u64) -> Option<&MeaningNode> {
        self.vertex(id).and_then(|v| v.as_meaning())
    }

    /// All lexemes.
    pub fn lexemes(&self) -> &[Lexeme] {
        &self.lexemes
    }

    /// All meaning nodes.
    pub fn meanings(&self) -> &[MeaningNode] {
        &self.meanings
    }

    /// Meaning nodes carrying the root marker `sentinel`.
    pub fn roots_with(&self, sentinel: i64) -> impl Iterator<Item = &MeaningNode> {
        self.meanings
            .iter()
            .filter(move |m| m.is_root_with(sentinel))
    }

    /// All edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get an edge by its position.
    pub fn edge(&self, pos: usize) -> Option<&Edge> {
        self.edges.get(pos)
    }

    /// Positions of edges in `relation` leaving `id`.
    pub fn outbound_edge_ids(&self, id: u64, relation: Relation) -> &[usize] {
        self.adjacency
            .get(&relation)
            .and_then(|adj| adj.outbound.get(&id))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Positions of edges in `relation` arriving at `id`.
    pub fn inbound_edge_ids(&self, id: u64, relation: Relation) -> &[usize] {
        self.adjacency
            .get(&relation)
            .and_then(|adj| adj.inbound.get(&id))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Edges in `relation` leaving `id`.
    pub fn outbound_edges(&self, id: u64, relation: Relation) -> impl Iterator<Item = &Edge> {
        self.outbound_edge_ids(id, relation)
            .iter()
            .map(move |&pos| &self.edges[pos])
    }

    /// Edges in `relation` arriving at `id`.
    pub fn inbound_edges(&self, id: u64, relation: Relation) -> impl Iterator<Item = &Edge> {
        self.inbound_edge_ids(id, relation)
            .iter()
            .map(move |&pos| &self.edges[pos])
    }

    /// Get the canonical form index.
    pub fn form_index(&self) -> &FormIndex {
        &self.form_index
    }

    /// Get the meaning type index.
    pub fn type_index(&self) -> &MeaningTypeIndex {
        &self.type_index
    }

    /// Get the metric tree over distinct forms.
    pub fn form_tree(&self) -> &FormTree {
        &self.form_tree
    }
}

impl Default for LexicalGraph {
    fn default() -> Self {
        Self::new()
    }
}
