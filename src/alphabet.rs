use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Interns strings to dense ids in first-seen order.
///
/// Tags and words are both kept in an `Alphabet`. Ids are assigned in the
/// order symbols are first inserted, and iteration over ids follows that
/// order, which makes argmax tie-breaking over the tag inventory
/// reproducible.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Alphabet {
    syms: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Alphabet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `sym`, inserting it if unseen.
    pub fn intern(&mut self, sym: &str) -> usize {
        if let Some(&id) = self.index.get(sym) {
            return id;
        }
        let id = self.syms.len();
        self.index.insert(sym.to_string(), id);
        self.syms.push(sym.to_string());
        id
    }

    /// Looks up an already-interned symbol without mutating the table.
    pub fn id_of(&self, sym: &str) -> Option<usize> {
        self.index.get(sym).copied()
    }

    pub fn resolve(&self, id: usize) -> Option<&str> {
        self.syms.get(id).map(|s| s.as_str())
    }

    pub fn contains(&self, sym: &str) -> bool {
        self.index.contains_key(sym)
    }

    pub fn len(&self) -> usize {
        self.syms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syms.is_empty()
    }

    /// Rebuilds the lookup index after deserialization.
    pub(crate) fn reindex(&mut self) {
        self.index = self
            .syms
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_is_idempotent() {
        let mut al = Alphabet::new();
        for (s, id) in [("DET", 0), ("NOUN", 1), ("VERB", 2), ("NOUN", 1), ("DET", 0)] {
            assert_eq!(id, al.intern(s), "{} != {}", s, id);
        }
        assert_eq!(al.len(), 3);
    }

    #[test]
    fn resolve_by_id() {
        let mut al = Alphabet::new();
        al.intern("DET");
        al.intern("NOUN");
        assert_eq!(al.resolve(0), Some("DET"));
        assert_eq!(al.resolve(1), Some("NOUN"));
        assert_eq!(al.resolve(2), None);
    }

    #[test]
    fn lookup_does_not_insert() {
        let mut al = Alphabet::new();
        al.intern("DET");
        assert_eq!(al.id_of("NOUN"), None);
        assert_eq!(al.len(), 1);
    }

    #[test]
    fn first_seen_order_survives_reindex() {
        let mut al = Alphabet::new();
        al.intern("b");
        al.intern("a");
        al.reindex();
        assert_eq!(al.id_of("b"), Some(0));
        assert_eq!(al.id_of("a"), Some(1));
    }
}
