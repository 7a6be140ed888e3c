//! Immutable entry store
//!
//! The store is created once at process start from the external loader and
//! is read-only for the process lifetime. Iteration order is load order, so
//! query output is deterministic across runs against the same data.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entry::{Entry, EntryId};

/// Errors raised while assembling the store from loader output.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("duplicate entry id '{0}'")]
    DuplicateId(EntryId),
}

/// The immutable dictionary: entries keyed by ID plus the set of locale
/// codes present in the data.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Dictionary {
    entries: IndexMap<EntryId, Entry>,
    locales: Vec<String>,
}

impl Dictionary {
    /// Build the store from loader output. Entry IDs must be unique.
    pub fn new(
        entries: impl IntoIterator<Item = (EntryId, Entry)>,
        locales: Vec<String>,
    ) -> Result<Self, StoreError> {
        let mut map = IndexMap::new();
        for (id, entry) in entries {
            if map.insert(id.clone(), entry).is_some() {
                return Err(StoreError::DuplicateId(id));
            }
        }
        Ok(Self {
            entries: map,
            locales,
        })
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Entries in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&EntryId, &Entry)> {
        self.entries.iter()
    }

    /// Locale codes present in the data, e.g. `["en", "fi"]`.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> Entry {
        Entry {
            name: name.to_string(),
            simple_pos: "n".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_store_preserves_load_order() {
        let dict = Dictionary::new(
            vec![
                ("b:n".to_string(), entry("b")),
                ("a:n".to_string(), entry("a")),
            ],
            vec!["en".to_string()],
        )
        .unwrap();
        let ids: Vec<_> = dict.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["b:n", "a:n"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Dictionary::new(
            vec![
                ("a:n".to_string(), entry("a")),
                ("a:n".to_string(), entry("a")),
            ],
            vec![],
        );
        assert!(matches!(result, Err(StoreError::DuplicateId(id)) if id == "a:n"));
    }
}
