//! Session-scoped categorical encoding.

use std::collections::HashMap;

/// Stable string→id mapping for one categorical field.
///
/// Ids are dense integers assigned `0, 1, 2, ...` in the order distinct
/// names are first seen. Comparison is exact string match: no case folding,
/// no whitespace trimming. A fresh encoder is created for every training
/// run; once the run completes the encoder travels inside the model bundle
/// and is only read from there.
///
/// Ids are positional, not content-hashed: retraining on the same rows in a
/// different order yields different ids.
#[derive(Debug, Clone, Default)]
pub struct CategoryEncoder {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl CategoryEncoder {
    /// Create an empty encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, allocating the next sequential id on first
    /// sight.
    pub fn lookup_or_insert(&mut self, name: &str) -> usize {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.names.len();
        self.index.insert(name.to_owned(), id);
        self.names.push(name.to_owned());
        id
    }

    /// Read-only lookup; never allocates a new id.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Distinct names in id order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of distinct names seen.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no name has been encoded yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_first_occurrence_ordered() {
        let mut encoder = CategoryEncoder::new();
        assert_eq!(encoder.lookup_or_insert("Delhi"), 0);
        assert_eq!(encoder.lookup_or_insert("Mumbai"), 1);
        assert_eq!(encoder.lookup_or_insert("Delhi"), 0);
        assert_eq!(encoder.lookup_or_insert("Chennai"), 2);
        assert_eq!(encoder.names(), ["Delhi", "Mumbai", "Chennai"]);
        assert_eq!(encoder.len(), 3);
    }

    #[test]
    fn comparison_is_exact_string_match() {
        let mut encoder = CategoryEncoder::new();
        let a = encoder.lookup_or_insert("Delhi");
        let b = encoder.lookup_or_insert("delhi");
        let c = encoder.lookup_or_insert("Delhi ");
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(encoder.len(), 3);
    }

    #[test]
    fn get_never_inserts() {
        let mut encoder = CategoryEncoder::new();
        encoder.lookup_or_insert("Delhi");
        assert_eq!(encoder.get("Delhi"), Some(0));
        assert_eq!(encoder.get("Mumbai"), None);
        assert_eq!(encoder.len(), 1);
    }
}
