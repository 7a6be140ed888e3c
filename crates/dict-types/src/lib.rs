//! dict-types: Pure dictionary data structures
//!
//! This crate contains the foundation types shared by the lookup engine and
//! its callers, with no engine logic:
//! - `Entry`: one sense of one lexical item, as handed over by the loader
//! - `Dictionary`: the immutable, insertion-ordered entry store
//! - `RenderedEntry`: the presentation record produced per matched entry
//! - `Analysis` / `GrammarError`: records crossing the analyzer seam
//!
//! The query engine, renderers and transliteration live in dict-core.

pub mod analysis;
pub mod dictionary;
pub mod entry;
pub mod rendered;

// Re-export commonly used types
pub use analysis::{Analysis, GrammarError};
pub use dictionary::{Dictionary, StoreError};
pub use entry::{Entry, EntryId};
pub use rendered::RenderedEntry;
