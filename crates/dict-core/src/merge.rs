//! Morphological merge
//!
//! Resolves a query directly as a word (or phrase) of the language by
//! asking the external analyzer for decompositions and flattening the
//! component entry IDs into one ordered, deduplicated list. Components are
//! grouped by their role tag (the ID substring before its first colon) in
//! first-seen order, so for example the prefix components of several
//! candidate analyses stay together ahead of the suffix components.

use dict_types::{Analysis, EntryId};

/// External morphological analyzer seam. Implementations are expected to
/// be pure and synchronous; the engine calls them with normalized text.
pub trait MorphAnalyzer: Send + Sync {
    /// Decompose a word into zero or more candidate analyses.
    fn analyze(&self, word: &str) -> Vec<Analysis>;
}

/// Analyzer that never finds anything; DSL evaluation still works.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAnalyzer;

impl MorphAnalyzer for NullAnalyzer {
    fn analyze(&self, _word: &str) -> Vec<Analysis> {
        Vec::new()
    }
}

/// Flatten analyses into component IDs: collected in first-seen order,
/// stable-sorted by the first-seen index of each component's role tag,
/// deduplicated.
pub fn order_analysis_parts(analyses: &[Analysis]) -> Vec<EntryId> {
    let mut role_order: Vec<&str> = Vec::new();
    let mut parts: Vec<&EntryId> = Vec::new();
    for part in analyses.iter().flat_map(|a| &a.parts) {
        role_order.push(role_tag(part));
        if !parts.contains(&part) {
            parts.push(part);
        }
    }
    parts.sort_by_key(|part| {
        role_order
            .iter()
            .position(|role| *role == role_tag(part))
            .unwrap_or(usize::MAX)
    });
    parts.into_iter().cloned().collect()
}

/// The ID substring before the first colon: the component's surface name.
fn role_tag(id: &str) -> &str {
    id.split(':').next().unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn analysis(parts: &[&str]) -> Analysis {
        Analysis::new(parts.iter().copied())
    }

    #[test]
    fn test_parts_grouped_by_first_seen_role() {
        // two candidate analyses of the same word disagree on the suffix;
        // both suffix candidates group after the shared root
        let analyses = vec![
            analysis(&["Qong:v", "-taH:v:suff"]),
            analysis(&["Qong:v", "-ta':v:suff"]),
        ];
        assert_eq!(
            order_analysis_parts(&analyses),
            vec!["Qong:v", "-taH:v:suff", "-ta':v:suff"]
        );
    }

    #[test]
    fn test_same_role_groups_across_analyses() {
        // the second analysis introduces a prefix; its root groups back
        // with the first analysis's root
        let analyses = vec![
            analysis(&["legh:v", "-pu':v:suff"]),
            analysis(&["vI-:v:pref", "legh:v"]),
        ];
        assert_eq!(
            order_analysis_parts(&analyses),
            vec!["legh:v", "-pu':v:suff", "vI-:v:pref"]
        );
    }

    #[test]
    fn test_duplicates_removed_order_kept() {
        let analyses = vec![
            analysis(&["tlhIngan:n", "Hol:n"]),
            analysis(&["tlhIngan:n"]),
        ];
        assert_eq!(
            order_analysis_parts(&analyses),
            vec!["tlhIngan:n", "Hol:n"]
        );
    }

    #[test]
    fn test_empty_analyses_yield_nothing() {
        assert_eq!(order_analysis_parts(&[]), Vec::<EntryId>::new());
    }
}
