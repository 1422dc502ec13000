//! Query executor — fuzzy lookup, pattern lookup and meaning resolution.

use std::collections::{BTreeSet, HashSet};

use crate::config::{EngineConfig, RootMultiplicity};
use crate::graph::{walk_paths, LexicalGraph, PathSpec, TraversalDirection};
use crate::types::{LexError, LexResult, MeaningType, Relation};

use super::edit_distance::within_distance;
use super::pattern::WildcardPattern;

/// A root path found during root discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootPath {
    /// The lexeme the path starts from.
    pub lexeme_id: u64,
    /// The root-marked vertex at the far end.
    pub root_id: u64,
    /// Vertex IDs from the lexeme to the root.
    pub vertices: Vec<u64>,
}

/// One emission of meaning resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeaningMatch {
    /// The root the outbound walk started from.
    pub root_id: u64,
    /// The node whose representation was emitted.
    pub node_id: u64,
    /// Outbound depth of the node on this path (0 = the root itself).
    pub depth: u32,
    /// Vertex IDs from the root to the node.
    pub path: Vec<u64>,
    /// The emitted internal representation.
    pub internal_rep: String,
}

/// The query engine. Holds configuration only; every query reads the graph it
/// is handed and keeps nothing between calls.
pub struct QueryEngine {
    config: EngineConfig,
}

impl QueryEngine {
    /// Create a query engine with default configuration.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Create a query engine with explicit configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Every distinct form within `max_distance` edits of `word`, except `word` itself.
    pub fn fuzzy_match(
        &self,
        graph: &LexicalGraph,
        word: &str,
        max_distance: i64,
    ) -> LexResult<BTreeSet<String>> {
        if max_distance < 0 {
            return Err(LexError::invalid(format!(
                "max distance must be non-negative, got {max_distance}"
            )));
        }
        let max_distance = usize::try_from(max_distance).unwrap_or(usize::MAX);

        let matches: BTreeSet<String> = if self.config.fuzzy.use_metric_index {
            graph
                .form_tree()
                .find_within(word, max_distance)
                .into_iter()
                .filter(|(form, _)| *form != word)
                .map(|(form, _)| form.to_string())
                .collect()
        } else {
            let query: Vec<char> = word.chars().collect();
            graph
                .form_index()
                .forms()
                .filter(|form| *form != word)
                .filter(|form| {
                    let chars: Vec<char> = form.chars().collect();
                    within_distance(&query, &chars, max_distance)
                })
                .map(str::to_string)
                .collect()
        };

        log::debug!(
            "fuzzy {:?} <= {}: {} of {} forms",
            word,
            max_distance,
            matches.len(),
            graph.form_index().len()
        );
        Ok(matches)
    }

    /// Every distinct form matching the wildcard `pattern`.
    pub fn pattern_match(&self, graph: &LexicalGraph, pattern: &str) -> LexResult<BTreeSet<String>> {
        let compiled = WildcardPattern::compile(pattern)?;
        let matches: BTreeSet<String> = matching_entries(graph, &compiled)
            .into_iter()
            .map(|(form, _)| form.to_string())
            .collect();
        log::debug!("pattern {:?}: {} forms", pattern, matches.len());
        Ok(matches)
    }

    /// Root discovery: every root path from a lexeme matching `word` (as a pattern).
    ///
    /// A root path is exactly `root_hops` inbound `MeaningRoot` hops long and
    /// ends on a meaning node carrying the root sentinel. Paths are returned in
    /// lexeme order, then depth-first order.
    pub fn find_meaning_roots(&self, graph: &LexicalGraph, word: &str) -> LexResult<Vec<RootPath>> {
        let compiled = WildcardPattern::compile(word)?;
        let traversal = &self.config.traversal;
        let spec = PathSpec {
            relation: Relation::MeaningRoot,
            direction: TraversalDirection::Backward,
            min_depth: traversal.root_hops,
            max_depth: traversal.root_hops,
            uniqueness: traversal.root_uniqueness,
        };

        let mut roots = Vec::new();
        let mut start_count = 0usize;
        for (_, lexeme_ids) in matching_entries(graph, &compiled) {
            for &lexeme_id in lexeme_ids {
                start_count += 1;
                walk_paths(graph, lexeme_id, &spec, |path| {
                    let end = path.last();
                    let is_root = graph
                        .meaning(end)
                        .map(|node| node.is_root_with(traversal.root_sentinel))
                        .unwrap_or(false);
                    if is_root {
                        log::trace!("root path {:?}", path.vertices());
                        roots.push(RootPath {
                            lexeme_id,
                            root_id: end,
                            vertices: path.vertices().to_vec(),
                        });
                    }
                })?;
            }
        }

        log::debug!(
            "root discovery {:?}: {} start lexemes, {} root paths",
            word,
            start_count,
            roots.len()
        );
        Ok(roots)
    }

    /// The roots meaning resolution walks from, honoring root multiplicity.
    pub fn meaning_roots(&self, graph: &LexicalGraph, word: &str) -> LexResult<Vec<u64>> {
        let paths = self.find_meaning_roots(graph, word)?;
        let roots = match self.config.traversal.root_multiplicity {
            RootMultiplicity::PerPath => paths.into_iter().map(|p| p.root_id).collect(),
            RootMultiplicity::Distinct => {
                let mut seen = HashSet::new();
                paths
                    .into_iter()
                    .map(|p| p.root_id)
                    .filter(|id| seen.insert(*id))
                    .collect()
            }
        };
        Ok(roots)
    }

    /// Meaning resolution with per-emission detail.
    ///
    /// Every path of depth `0..=max_meaning_depth` from every root that ends on
    /// a node of `meaning_type` carrying an internal representation produces one
    /// [`MeaningMatch`]. Nothing is deduplicated.
    pub fn resolve_detailed(
        &self,
        graph: &LexicalGraph,
        word: &str,
        meaning_type: MeaningType,
    ) -> LexResult<Vec<MeaningMatch>> {
        let roots = self.meaning_roots(graph, word)?;
        let traversal = &self.config.traversal;
        let spec = PathSpec {
            relation: Relation::MeaningGraph,
            direction: TraversalDirection::Forward,
            min_depth: 0,
            max_depth: traversal.max_meaning_depth,
            uniqueness: traversal.uniqueness,
        };

        let mut matches = Vec::new();
        for &root_id in &roots {
            let walked = walk_paths(graph, root_id, &spec, |path| {
                let Some(node) = graph.meaning(path.last()) else {
                    return;
                };
                if node.meaning_type != meaning_type {
                    return;
                }
                if let Some(rep) = &node.internal_rep {
                    matches.push(MeaningMatch {
                        root_id,
                        node_id: node.id,
                        depth: path.depth(),
                        path: path.vertices().to_vec(),
                        internal_rep: rep.clone(),
                    });
                }
            })?;
            log::trace!("root {}: {} outbound paths", root_id, walked);
        }

        log::debug!(
            "resolve {:?} as {}: {} roots, {} emissions",
            word,
            meaning_type,
            roots.len(),
            matches.len()
        );
        Ok(matches)
    }

    /// Internal representations of every `meaning_type` node reachable from
    /// `word`'s meaning roots, once per qualifying path.
    pub fn resolve_meanings(
        &self,
        graph: &LexicalGraph,
        word: &str,
        meaning_type: MeaningType,
    ) -> LexResult<Vec<String>> {
        Ok(self
            .resolve_detailed(graph, word, meaning_type)?
            .into_iter()
            .map(|m| m.internal_rep)
            .collect())
    }

    /// [`Self::resolve_meanings`] for callers holding a raw integer type tag.
    pub fn resolve_meanings_raw(
        &self,
        graph: &LexicalGraph,
        word: &str,
        type_code: i64,
    ) -> LexResult<Vec<String>> {
        let meaning_type = MeaningType::from_code(type_code)?;
        self.resolve_meanings(graph, word, meaning_type)
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// `(form, lexeme ids)` entries whose form matches `pattern`, in form order.
fn matching_entries<'g>(
    graph: &'g LexicalGraph,
    pattern: &WildcardPattern,
) -> Vec<(&'g str, &'g [u64])> {
    let index = graph.form_index();
    if pattern.is_literal() {
        return index
            .entry(&pattern.literal_prefix())
            .into_iter()
            .collect();
    }

    let prefix = pattern.literal_prefix();
    index
        .with_prefix(&prefix)
        .filter(|(form, _)| pattern.matches(form))
        .collect()
}
