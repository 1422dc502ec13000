//! Fluent API for building LexicalGraph instances.

use crate::types::{Edge, LexResult, Lexeme, MeaningNode, MeaningNodeBuilder, MeaningType};

use super::LexicalGraph;

/// Fluent builder for constructing a LexicalGraph.
///
/// IDs are assigned sequentially across both vertex kinds, starting at 1.
pub struct GraphBuilder {
    lexemes: Vec<Lexeme>,
    meanings: Vec<MeaningNode>,
    edges: Vec<Edge>,
    next_id: u64,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            lexemes: Vec::new(),
            meanings: Vec::new(),
            edges: Vec::new(),
            next_id: 1,
        }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a lexeme.
    pub fn add_lexeme(&mut self, form: &str) -> u64 {
        let id = self.take_id();
        self.lexemes.push(Lexeme::new(id, form));
        id
    }

    /// Add a meaning node from a prepared builder.
    pub fn add_meaning(&mut self, node: MeaningNodeBuilder) -> u64 {
        let id = self.take_id();
        self.meanings.push(node.build(id));
        id
    }

    /// Add a meaning-tree root with no payload.
    pub fn add_root(&mut self, meaning_type: MeaningType) -> u64 {
        self.add_meaning(MeaningNodeBuilder::new(meaning_type).root())
    }

    /// Add a meaning node carrying a payload.
    pub fn add_node(&mut self, meaning_type: MeaningType, rep: &str) -> u64 {
        self.add_meaning(MeaningNodeBuilder::new(meaning_type).internal_rep(rep))
    }

    /// Add a meaning node without a payload.
    pub fn add_bare_node(&mut self, meaning_type: MeaningType) -> u64 {
        self.add_meaning(MeaningNodeBuilder::new(meaning_type))
    }

    /// Add a `MeaningRoot` edge.
    pub fn link_root(&mut self, source: u64, target: u64) -> &mut Self {
        self.edges.push(Edge::meaning_root(source, target));
        self
    }

    /// Add a `MeaningGraph` edge.
    pub fn link_meaning(&mut self, source: u64, target: u64) -> &mut Self {
        self.edges.push(Edge::meaning_graph(source, target));
        self
    }

    /// Connect `lexeme` to `root` through two fresh intermediate nodes, so that
    /// `root` sits exactly three inbound `MeaningRoot` hops from the lexeme:
    /// `root -> upper -> lower -> lexeme`. Returns `(lower, upper)`.
    pub fn attach_root(&mut self, lexeme: u64, root: u64) -> (u64, u64) {
        let lower = self.add_bare_node(MeaningType::Category);
        let upper = self.add_bare_node(MeaningType::Category);
        self.link_root(root, upper)
            .link_root(upper, lower)
            .link_root(lower, lexeme);
        (lower, upper)
    }

    /// Build the final LexicalGraph.
    pub fn build(self) -> LexResult<LexicalGraph> {
        LexicalGraph::from_parts(self.lexemes, self.meanings, self.edges)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
