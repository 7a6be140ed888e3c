//! Rendered presentation record
//!
//! The output shape produced per matched entry. Optional fields serialize
//! only when populated, so the JSON surface carries exactly the fields the
//! source data has. `components` and `inflections` are mutually exclusive;
//! the renderer enforces that.

use serde::{Deserialize, Serialize};

/// Presentation record for one matched entry in one display locale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedEntry {
    /// Canonical headword.
    pub name: String,

    /// Headword with spaces folded to `+`, for query URLs.
    pub url_name: String,

    /// Transliterated headword for external wiki references.
    pub wiki_name: String,

    /// Human-readable part-of-speech label (English label key; locale
    /// tables translate it at the presentation boundary).
    pub pos: String,

    /// Coarse POS code; reported as `affix` for hyphenated headwords.
    pub simple_pos: String,

    /// Badge tags in fixed order: slang, regional, archaic, hypothetical.
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub homonym: Option<u8>,

    /// Definition in the display locale, falling back to English.
    pub definition: String,

    /// English definition, present only when the display locale is not
    /// English.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<String>,

    /// Inflection hint, or a locale-labeled cross-reference for
    /// plural-only/singular-only nouns. Replaces `components` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflections: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub antonyms: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub see_also: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_notes: Option<String>,
}
