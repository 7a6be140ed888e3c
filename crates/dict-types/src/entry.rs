//! Dictionary entry record
//!
//! One `Entry` is one sense of one lexical item. Entries are produced by the
//! external data loader and never mutated afterwards; every engine operation
//! is a pure function over them.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Composite entry identifier: canonical name plus sense discriminator,
/// e.g. `"tlhIngan:n"` or `"ghob:v:2"`. The substring before the first `:`
/// is the canonical name (the merge pass groups components by it).
pub type EntryId = String;

/// A single dictionary entry.
///
/// Text-valued fields (`definition`, `notes`, `examples`) map a locale code
/// to raw text that may contain embedded `{...}` link markup and the
/// not-yet-translated sentinels handled by the renderer. The free-text
/// fields (`synonyms` .. `hidden_notes`) are optional raw text, also with
/// link markup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Canonical spelling of the headword.
    pub name: String,

    /// Coarse part-of-speech code: `v`, `n`, `ques`, `adv`, `conj`, `excl`, `sen`.
    pub simple_pos: String,

    /// Short string markers: transitivity (`t`, `t_c`, `i`, `i_c`, `is`),
    /// register (`slang`, `reg`, `archaic`, `hyp`), homonym digits, affix
    /// markers (`pref`, `suff`), inherent-number markers, etc.
    #[serde(default)]
    pub tags: HashSet<String>,

    /// Locale code -> definition text.
    #[serde(default)]
    pub definition: HashMap<String, String>,

    /// Locale code -> usage notes.
    #[serde(default)]
    pub notes: HashMap<String, String>,

    /// Locale code -> example text.
    #[serde(default)]
    pub examples: HashMap<String, String>,

    /// Locale code -> alternate search strings for that locale.
    #[serde(default)]
    pub search_tags: HashMap<String, Vec<String>>,

    #[serde(default)]
    pub synonyms: Option<String>,

    #[serde(default)]
    pub antonyms: Option<String>,

    #[serde(default)]
    pub see_also: Option<String>,

    /// Morphological make-up of the headword, as link markup.
    #[serde(default)]
    pub components: Option<String>,

    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub hidden_notes: Option<String>,
}

impl Entry {
    /// Check whether a tag is present.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// First homonym digit tag (`1`..`9`) on this entry, if any.
    pub fn homonym_digit(&self) -> Option<u8> {
        (1..=9u8).find(|d| self.tags.contains(&d.to_string()))
    }
}
