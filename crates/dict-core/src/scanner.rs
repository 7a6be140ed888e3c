//! Query evaluation over the entry store
//!
//! Applies a parsed query tree to entries. Every predicate evaluation has
//! three outcomes: match, no-match, or fault; a fault (in practice a
//! malformed user regex) is confined to the entry being tested, logged,
//! and counted as no-match, so one bad term never aborts the scan.
//! `And`/`Or` short-circuit before touching their right operand, which
//! means a fault hiding in an unreached operand is never raised.
//!
//! User-supplied patterns are compiled at most once per scan and the
//! compiled form (or the compile error) is reused for every entry.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};
use thiserror::Error;
use tracing::warn;

use dict_types::{Dictionary, Entry, EntryId};

use crate::ast::QueryExpr;
use crate::operators::{FieldOp, OperatorRegistry, TextField};
use crate::orthography::normalize;

/// A predicate fault, suppressed to no-match for the entry it hit.
#[derive(Error, Debug, Clone)]
pub enum QueryFault {
    #[error("invalid pattern '{pattern}': {source}")]
    BadPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// One suppressed fault from a store scan.
#[derive(Debug, Clone)]
pub struct ScanFault {
    pub entry_id: EntryId,
    pub fault: QueryFault,
}

/// Evaluates one parsed query against entries, caching compiled patterns
/// for the duration of the scan.
pub struct Scanner<'a> {
    registry: &'a OperatorRegistry,
    locale: &'a str,
    patterns: HashMap<(String, bool), Result<Regex, regex::Error>>,
}

impl<'a> Scanner<'a> {
    pub fn new(registry: &'a OperatorRegistry, locale: &'a str) -> Self {
        Self {
            registry,
            locale,
            patterns: HashMap::new(),
        }
    }

    /// Scan the whole store, skipping IDs already produced by the
    /// morphological pass. Returns matching entries in store order plus
    /// the fault log.
    pub fn scan<'d>(
        &mut self,
        dictionary: &'d Dictionary,
        expr: &QueryExpr,
        included: impl Fn(&str) -> bool,
    ) -> (Vec<(&'d EntryId, &'d Entry)>, Vec<ScanFault>) {
        let mut matches = Vec::new();
        let mut faults = Vec::new();
        for (id, entry) in dictionary.iter() {
            if included(id) {
                continue;
            }
            match self.eval(expr, entry) {
                Ok(true) => matches.push((id, entry)),
                Ok(false) => {}
                Err(fault) => {
                    warn!(entry = %id, error = %fault, "query predicate fault");
                    faults.push(ScanFault {
                        entry_id: id.clone(),
                        fault,
                    });
                }
            }
        }
        (matches, faults)
    }

    /// Evaluate the tree against one entry.
    pub fn eval(&mut self, expr: &QueryExpr, entry: &Entry) -> Result<bool, QueryFault> {
        match expr {
            QueryExpr::Or(left, right) => {
                if self.eval(left, entry)? {
                    Ok(true)
                } else {
                    self.eval(right, entry)
                }
            }
            QueryExpr::And(left, right) => {
                if self.eval(left, entry)? {
                    self.eval(right, entry)
                } else {
                    Ok(false)
                }
            }
            QueryExpr::Field { op, arg } => self.eval_field(op, arg, entry),
            QueryExpr::Plain(token) => Ok(self.eval_plain(token, entry)),
            QueryExpr::All => Ok(true),
        }
    }

    fn eval_field(&mut self, op: &str, arg: &str, entry: &Entry) -> Result<bool, QueryFault> {
        let Some(op) = self.registry.get(op) else {
            // unknown operator: silent no-match by design
            return Ok(false);
        };
        match op {
            FieldOp::Name => {
                let pattern = normalize(arg);
                Ok(self.pattern(&pattern, false)?.is_match(&entry.name))
            }
            FieldOp::Notes {
                locale,
                case_insensitive,
            } => {
                let text = entry.notes.get(locale).map(String::as_str).unwrap_or("");
                Ok(self.pattern(arg, *case_insensitive)?.is_match(text))
            }
            FieldOp::Examples { locale } => {
                let text = entry
                    .examples
                    .get(locale)
                    .map(String::as_str)
                    .unwrap_or("");
                Ok(self.pattern(arg, false)?.is_match(text))
            }
            FieldOp::PosTags => Ok(arg
                .split(',')
                .all(|tag| tag == entry.simple_pos || entry.tags.contains(tag))),
            FieldOp::FreeText(field) => {
                let text = free_text(entry, *field).unwrap_or("");
                let pattern = normalize(arg);
                Ok(self.pattern(&pattern, false)?.is_match(text))
            }
            FieldOp::Definition { locale } => {
                let regex = self.pattern(arg, false)?;
                let matched = match entry.definition.get(locale) {
                    Some(text) => regex.is_match(text),
                    None => false,
                };
                Ok(matched
                    || entry
                        .search_tags
                        .get(locale)
                        .is_some_and(|tags| tags.iter().any(|tag| tag == arg)))
            }
        }
    }

    /// Plain term: headword substring (normalized), search-tag prefix
    /// (case-insensitive), or display-locale definition substring
    /// (case-insensitive).
    fn eval_plain(&self, token: &str, entry: &Entry) -> bool {
        if entry.name.contains(&normalize(token)) {
            return true;
        }
        let lowered = token.to_lowercase();
        if entry
            .search_tags
            .get(self.locale)
            .is_some_and(|tags| tags.iter().any(|tag| tag.to_lowercase().starts_with(&lowered)))
        {
            return true;
        }
        entry
            .definition
            .get(self.locale)
            .is_some_and(|text| text.to_lowercase().contains(&lowered))
    }

    fn pattern(&mut self, pattern: &str, case_insensitive: bool) -> Result<&Regex, QueryFault> {
        let key = (pattern.to_string(), case_insensitive);
        let compiled = self
            .patterns
            .entry(key)
            .or_insert_with(|| {
                RegexBuilder::new(pattern)
                    .case_insensitive(case_insensitive)
                    .build()
            });
        match compiled {
            Ok(regex) => Ok(regex),
            Err(source) => Err(QueryFault::BadPattern {
                pattern: pattern.to_string(),
                source: source.clone(),
            }),
        }
    }
}

fn free_text(entry: &Entry, field: TextField) -> Option<&str> {
    match field {
        TextField::Antonyms => entry.antonyms.as_deref(),
        TextField::Synonyms => entry.synonyms.as_deref(),
        TextField::Components => entry.components.as_deref(),
        TextField::SeeAlso => entry.see_also.as_deref(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parser::parse;
    use crate::tokenizer::tokenize;

    fn entry(name: &str, simple_pos: &str, tags: &[&str], definition_en: &str) -> Entry {
        Entry {
            name: name.to_string(),
            simple_pos: simple_pos.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            definition: [("en".to_string(), definition_en.to_string())]
                .into_iter()
                .collect(),
            ..Default::default()
        }
    }

    fn registry() -> OperatorRegistry {
        OperatorRegistry::new(&["en".to_string(), "fi".to_string()])
    }

    fn eval(query: &str, entry: &Entry) -> Result<bool, QueryFault> {
        let registry = registry();
        let mut scanner = Scanner::new(&registry, "en");
        scanner.eval(&parse(&tokenize(query)), entry)
    }

    fn matches_query(query: &str, entry: &Entry) -> bool {
        eval(query, entry).unwrap()
    }

    #[test]
    fn test_plain_term_matches_normalized_name_substring() {
        let e = entry("tlhIngan", "n", &[], "Klingon");
        assert!(matches_query("xifan", &e));
        assert!(matches_query("ngan", &e));
        assert!(!matches_query("Hol", &e));
    }

    #[test]
    fn test_plain_term_matches_definition_case_insensitively() {
        let e = entry("tlhIngan", "n", &[], "Klingon");
        assert!(matches_query("kLINgon", &e));
    }

    #[test]
    fn test_plain_term_matches_search_tag_prefix() {
        let mut e = entry("Qong", "v", &[], "sleep");
        e.search_tags
            .insert("en".to_string(), vec!["Sleeping".to_string()]);
        assert!(matches_query("sleep", &e));
        assert!(!matches_query("eeping", &e));
    }

    #[test]
    fn test_name_operator_takes_normalized_regex() {
        let e = entry("tlhIngan", "n", &[], "Klingon");
        assert!(matches_query("tlh:^xifan$", &e));
        assert!(!matches_query("tlh:^ngan", &e));
    }

    #[test]
    fn test_pos_operator_is_a_subset_test() {
        let both = entry("HoH", "v", &["t_c"], "kill");
        let only_tag = entry("legh", "n", &["t_c"], "see");
        assert!(matches_query("pos:v,t_c", &both));
        assert!(!matches_query("pos:v,t_c", &only_tag));
        assert!(matches_query("pos:t_c", &only_tag));
    }

    #[test]
    fn test_locale_operator_searches_definition_and_tags() {
        let mut e = entry("bIQ", "n", &[], "water");
        e.definition.insert("fi".to_string(), "vesi".to_string());
        e.search_tags
            .insert("fi".to_string(), vec!["neste".to_string()]);
        assert!(matches_query("fi:vesi", &e));
        assert!(matches_query("fi:neste", &e));
        // membership is exact, not prefix
        assert!(!matches_query("fi:nest", &e));
    }

    #[test]
    fn test_notes_operator_case_sensitivity() {
        let mut e = entry("Qong", "v", &[], "sleep");
        e.notes.insert("en".to_string(), "Canon example".to_string());
        assert!(matches_query("notes:canon", &e));
        assert!(!matches_query("ennotes:canon", &e));
        assert!(matches_query("ennotes:Canon", &e));
    }

    #[test]
    fn test_unknown_operator_is_silent_no_match() {
        let e = entry("Qong", "v", &[], "sleep");
        assert!(!matches_query("bogus:arg", &e));
        // and it stays a silent false inside a wider expression
        assert!(!matches_query("Qong bogus:arg", &e));
    }

    #[test]
    fn test_malformed_regex_is_a_fault() {
        let e = entry("Qong", "v", &[], "sleep");
        assert!(matches!(
            eval("notes:[", &e),
            Err(QueryFault::BadPattern { .. })
        ));
    }

    #[test]
    fn test_short_circuit_skips_faulting_operand() {
        let e = entry("Qong", "v", &[], "sleep");
        // left side of OR matches, right side would fault
        assert!(matches_query("Qong OR notes:[", &e));
        // left side of AND fails, right side would fault
        assert!(!matches_query("nothere notes:[", &e));
    }

    #[test]
    fn test_and_or_set_semantics() {
        let water = entry("bIQ", "n", &[], "water");
        let sleep = entry("Qong", "v", &[], "sleep");
        for e in [&water, &sleep] {
            let a = eval("water", e).unwrap();
            let b = eval("sleep", e).unwrap();
            assert_eq!(eval("water OR sleep", e).unwrap(), a || b);
            assert_eq!(eval("water sleep", e).unwrap(), a && b);
        }
    }

    #[test]
    fn test_scan_skips_included_and_collects_faults() {
        let dict = Dictionary::new(
            vec![
                ("bIQ:n".to_string(), entry("bIQ", "n", &[], "water")),
                ("Qong:v".to_string(), entry("Qong", "v", &[], "sleep")),
            ],
            vec!["en".to_string()],
        )
        .unwrap();
        let registry = registry();

        let mut scanner = Scanner::new(&registry, "en");
        let expr = parse(&tokenize("bIQ OR Qong"));
        let (matches, faults) = scanner.scan(&dict, &expr, |id| id == "bIQ:n");
        let ids: Vec<_> = matches.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["Qong:v"]);
        assert!(faults.is_empty());

        let mut scanner = Scanner::new(&registry, "en");
        let expr = parse(&tokenize("tlh:["));
        let (matches, faults) = scanner.scan(&dict, &expr, |_| false);
        assert!(matches.is_empty());
        assert_eq!(faults.len(), 2);
    }
}
