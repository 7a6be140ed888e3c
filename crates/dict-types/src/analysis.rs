//! Records crossing the external-analyzer seam
//!
//! Morphological analysis and grammar checking are external collaborators;
//! only their result shapes live here.

use serde::{Deserialize, Serialize};

use crate::entry::EntryId;

/// One morphological decomposition of a word: the ordered list of
/// component entry IDs (prefixes, root, suffixes).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub parts: Vec<EntryId>,
}

impl Analysis {
    pub fn new(parts: impl IntoIterator<Item = impl Into<EntryId>>) -> Self {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }
}

/// One grammar error reported by the external checker. Offsets are byte
/// positions into the checked text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrammarError {
    pub location: usize,
    pub end_location: usize,
    pub message: String,
}
