//! qawhaq: dictionary lookup engine for the Klingon corpus
//!
//! Facade crate tying the engine together for embedders and the CLI:
//! resolves free-form queries through morphological decomposition and the
//! boolean query DSL, and renders matched entries for display. The actual
//! logic lives in `dict-core`; the data model lives in `dict-types`.

pub use dict_core::{
    accent, annotate, normalize, render_entry, resolve_links, AccentError, Annotated,
    LinkFormat, LookupEngine, MorphAnalyzer, NullAnalyzer, OperatorRegistry,
};
pub use dict_types::{Analysis, Dictionary, Entry, EntryId, GrammarError, RenderedEntry};
