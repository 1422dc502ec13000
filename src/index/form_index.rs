//! Index by canonical form — maps each distinct form to the lexemes carrying it.

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::types::Lexeme;

/// Maps each distinct canonical form to a sorted list of lexeme IDs.
///
/// Forms are kept in a `BTreeMap` so iteration is ordered and a literal prefix
/// can be answered with a range scan.
pub struct FormIndex {
    index: BTreeMap<String, Vec<u64>>,
}

impl FormIndex {
    /// Create a new, empty form index.
    pub fn new() -> Self {
        Self {
            index: BTreeMap::new(),
        }
    }

    /// Get all lexeme IDs carrying exactly this form.
    pub fn get(&self, form: &str) -> &[u64] {
        self.index.get(form).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Whether any lexeme carries this form.
    pub fn contains(&self, form: &str) -> bool {
        self.index.contains_key(form)
    }

    /// Iterate distinct forms in sorted order.
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(|k| k.as_str())
    }

    /// Iterate `(form, lexeme ids)` pairs in form order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[u64])> {
        self.index.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// The `(form, lexeme ids)` entry for exactly this form.
    pub fn entry(&self, form: &str) -> Option<(&str, &[u64])> {
        self.index
            .get_key_value(form)
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Iterate `(form, lexeme ids)` pairs whose form starts with `prefix`.
    pub fn with_prefix<'a>(
        &'a self,
        prefix: &str,
    ) -> impl Iterator<Item = (&'a str, &'a [u64])> + 'a {
        let owned = prefix.to_string();
        self.index
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(k, _)| k.starts_with(owned.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Rebuild the entire index from a slice of lexemes.
    pub fn rebuild(&mut self, lexemes: &[Lexeme]) {
        self.index.clear();
        for lexeme in lexemes {
            self.index
                .entry(lexeme.form.clone())
                .or_default()
                .push(lexeme.id);
        }
        for list in self.index.values_mut() {
            list.sort_unstable();
        }
    }

    /// Number of distinct forms.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of lexemes across all forms.
    pub fn lexeme_count(&self) -> usize {
        self.index.values().map(|v| v.len()).sum()
    }
}

impl Default for FormIndex {
    fn default() -> Self {
        Self::new()
    }
}
