//! Path-enumerating graph traversal.
//!
//! Unlike a BFS over vertices, this walker reports every distinct path within
//! the depth window. Visited tracking is local to the current path, so a vertex
//! reachable along two paths is reported twice. The depth bound alone
//! guarantees termination on cyclic graphs.

use serde::{Deserialize, Serialize};

use crate::types::{LexError, LexResult, Relation};

use super::LexicalGraph;

/// Direction for graph traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalDirection {
    /// Follow outgoing edges (source -> target).
    Forward,
    /// Follow incoming edges (target <- source).
    Backward,
    /// Follow edges in both directions.
    Both,
}

/// What may not repeat within a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Uniqueness {
    /// A vertex appears at most once per path.
    #[default]
    PathVertices,
    /// An edge appears at most once per path; vertices may be revisited.
    PathEdges,
    /// Nothing is tracked; only the depth bound stops the walk.
    None,
}

/// Shape of a path walk.
#[derive(Debug, Clone, Copy)]
pub struct PathSpec {
    /// Which relation to follow.
    pub relation: Relation,
    /// Which way to follow it.
    pub direction: TraversalDirection,
    /// Shortest path (in edges) reported to the visitor.
    pub min_depth: u32,
    /// Longest path (in edges) explored.
    pub max_depth: u32,
    /// Per-path repetition rule.
    pub uniqueness: Uniqueness,
}

/// A path from the start vertex: `vertices.len() == edges.len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalPath {
    vertices: Vec<u64>,
    edges: Vec<usize>,
}

impl TraversalPath {
    fn new(start: u64) -> Self {
        Self {
            vertices: vec![start],
            edges: Vec::new(),
        }
    }

    /// Number of edges on the path.
    pub fn depth(&self) -> u32 {
        self.edges.len() as u32
    }

    /// The start vertex.
    pub fn first(&self) -> u64 {
        self.vertices[0]
    }

    /// The vertex the path ends at.
    pub fn last(&self) -> u64 {
        self.vertices[self.vertices.len() - 1]
    }

    /// Vertex IDs from start to end.
    pub fn vertices(&self) -> &[u64] {
        &self.vertices
    }

    /// Edge positions from start to end.
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    fn push(&mut self, edge: usize, vertex: u64) {
        self.edges.push(edge);
        self.vertices.push(vertex);
    }

    fn pop(&mut self) {
        self.edges.pop();
        self.vertices.pop();
    }
}

/// Depth-first enumeration of every path from `start` matching `spec`.
///
/// `visit` is called once per path whose depth lies in
/// `spec.min_depth..=spec.max_depth`, in depth-first order with edges taken in
/// insertion order. Returns the number of paths reported.
pub fn walk_paths<F>(
    graph: &LexicalGraph,
    start: u64,
    spec: &PathSpec,
    mut visit: F,
) -> LexResult<usize>
where
    F: FnMut(&TraversalPath),
{
    if graph.vertex(start).is_none() {
        return Err(LexError::VertexNotFound(start));
    }
    if spec.min_depth > spec.max_depth {
        return Ok(0);
    }

    let mut path = TraversalPath::new(start);
    let mut reported = 0;
    descend(graph, spec, &mut path, &mut visit, &mut reported);
    Ok(reported)
}

fn descend<F>(
    graph: &LexicalGraph,
    spec: &PathSpec,
    path: &mut TraversalPath,
    visit: &mut F,
    reported: &mut usize,
) where
    F: FnMut(&TraversalPath),
{
    let depth = path.depth();
    if depth >= spec.min_depth {
        visit(path);
        *reported += 1;
    }
    if depth >= spec.max_depth {
        return;
    }

    for (edge, next) in neighbors(graph, path.last(), spec) {
        let repeated = match spec.uniqueness {
            Uniqueness::PathVertices => path.vertices.contains(&next),
            Uniqueness::PathEdges => path.edges.contains(&edge),
            Uniqueness::None => false,
        };
        if repeated {
            continue;
        }
        path.push(edge, next);
        descend(graph, spec, path, visit, reported);
        path.pop();
    }
}

/// `(edge position, neighbor id)` pairs reachable from `current` in one hop.
fn neighbors(graph: &LexicalGraph, current: u64, spec: &PathSpec) -> Vec<(usize, u64)> {
    let mut out = Vec::new();
    if matches!(
        spec.direction,
        TraversalDirection::Forward | TraversalDirection::Both
    ) {
        for &pos in graph.outbound_edge_ids(current, spec.relation) {
            if let Some(edge) = graph.edge(pos) {
                out.push((pos, edge.target));
            }
        }
    }
    if matches!(
        spec.direction,
        TraversalDirection::Backward | TraversalDirection::Both
    ) {
        for &pos in graph.inbound_edge_ids(current, spec.relation) {
            if let Some(edge) = graph.edge(pos) {
                out.push((pos, edge.source));
            }
        }
    }
    out
}
