//! BK-tree over distinct canonical forms, keyed by Levenshtein distance.
//!
//! Levenshtein distance is a metric, so for a query `q`, a node `n` at distance
//! `d = lev(q, n)` and a radius `r`, only children whose edge label lies in
//! `[d - r, d + r]` can hold matches. Everything else is pruned without
//! computing a distance.

use crate::engine::edit_distance::levenshtein_chars;

struct FormTreeNode {
    form: String,
    chars: Vec<char>,
    /// (distance to this node, child index)
    children: Vec<(usize, usize)>,
}

/// Metric tree answering "all forms within distance r of q".
pub struct FormTree {
    nodes: Vec<FormTreeNode>,
}

impl FormTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Build a tree from an iterator of forms. Duplicates are ignored.
    pub fn from_forms<'a>(forms: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tree = Self::new();
        for form in forms {
            tree.insert(form);
        }
        tree
    }

    /// Insert a form. Returns false if it was already present.
    pub fn insert(&mut self, form: &str) -> bool {
        let chars: Vec<char> = form.chars().collect();
        if self.nodes.is_empty() {
            self.push(form, chars);
            return true;
        }

        let mut current = 0;
        loop {
            let dist = levenshtein_chars(&self.nodes[current].chars, &chars);
            if dist == 0 {
                return false;
            }
            let next = self.nodes[current]
                .children
                .iter()
                .find(|(d, _)| *d == dist)
                .map(|&(_, idx)| idx);
            match next {
                Some(idx) => current = idx,
                None => {
                    let idx = self.push(form, chars);
                    self.nodes[current].children.push((dist, idx));
                    return true;
                }
            }
        }
    }

    fn push(&mut self, form: &str, chars: Vec<char>) -> usize {
        self.nodes.push(FormTreeNode {
            form: form.to_string(),
            chars,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// All forms whose distance to `query` is at most `max_distance`, with their distances.
    pub fn find_within(&self, query: &str, max_distance: usize) -> Vec<(&str, usize)> {
        let mut found = Vec::new();
        if self.nodes.is_empty() {
            return found;
        }

        let query: Vec<char> = query.chars().collect();
        let mut stack = vec![0usize];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            let dist = levenshtein_chars(&node.chars, &query);
            if dist <= max_distance {
                found.push((node.form.as_str(), dist));
            }
            let low = dist.saturating_sub(max_distance);
            let high = dist.saturating_add(max_distance);
            for &(edge, child) in &node.children {
                if edge >= low && edge <= high {
                    stack.push(child);
                }
            }
        }
        found
    }

    /// Number of distinct forms in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for FormTree {
    fn default() -> Self {
        Self::new()
    }
}
