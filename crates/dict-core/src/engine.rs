//! Lookup engine facade
//!
//! Owns the immutable store, the operator registry built from the store's
//! locale list, and the external analyzer, and runs the full query flow:
//!
//! 1. analyze the whole query as a word of the language
//! 2. when the query carries no colon, analyze each space-separated word
//! 3. render the merged component entries
//! 4. tokenize/parse the query as a DSL expression and scan the store,
//!    skipping entries the morphological pass already produced
//!
//! Everything is a pure function of (store, query, locale); concurrent
//! queries need no locking.

use std::collections::HashSet;

use tracing::{debug, instrument};

use dict_types::{Dictionary, EntryId, RenderedEntry};

use crate::links::LinkFormat;
use crate::merge::{order_analysis_parts, MorphAnalyzer};
use crate::operators::OperatorRegistry;
use crate::orthography::normalize;
use crate::parser::parse;
use crate::render::render_entry;
use crate::scanner::Scanner;
use crate::tokenizer::{pre_normalize, tokenize};

pub struct LookupEngine {
    dictionary: Dictionary,
    registry: OperatorRegistry,
    analyzer: Box<dyn MorphAnalyzer>,
}

impl LookupEngine {
    /// Build the engine; the operator registry is derived from the
    /// store's locale list once, here.
    pub fn new(dictionary: Dictionary, analyzer: Box<dyn MorphAnalyzer>) -> Self {
        let registry = OperatorRegistry::new(dictionary.locales());
        Self {
            dictionary,
            registry,
            analyzer,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// Resolve a query into rendered entries: morphological matches first
    /// (in role-grouped order), then DSL matches in store order.
    #[instrument(skip(self))]
    pub fn dictionary_query(
        &self,
        query: &str,
        locale: &str,
        format: LinkFormat,
    ) -> Vec<RenderedEntry> {
        if query.is_empty() {
            return Vec::new();
        }
        let query = pre_normalize(query);

        let mut parts: Vec<EntryId> = Vec::new();
        let analyses = self.analyzer.analyze(&normalize(&query));
        if !analyses.is_empty() {
            parts.extend(order_analysis_parts(&analyses));
        }

        // a colon marks the query as a DSL expression, not a phrase
        if !query.contains(':') {
            let mut word_analyses = Vec::new();
            for word in query.split(' ') {
                word_analyses.extend(self.analyzer.analyze(&normalize(word)));
            }
            if !word_analyses.is_empty() {
                parts.extend(order_analysis_parts(&word_analyses));
            }
        }

        let mut included: HashSet<EntryId> = HashSet::new();
        let mut results = Vec::new();
        for id in parts {
            if !included.insert(id.clone()) {
                continue;
            }
            match self.dictionary.get(&id) {
                Some(entry) => results.push(render_entry(entry, locale, format)),
                None => debug!(entry = %id, "analyzer produced an id the store does not have"),
            }
        }

        let expr = parse(&tokenize(&query));
        let mut scanner = Scanner::new(&self.registry, locale);
        let (matches, faults) = scanner.scan(&self.dictionary, &expr, |id| included.contains(id));
        if !faults.is_empty() {
            debug!(suppressed = faults.len(), "scan completed with suppressed predicate faults");
        }
        results.extend(
            matches
                .into_iter()
                .map(|(_, entry)| render_entry(entry, locale, format)),
        );
        results
    }
}
