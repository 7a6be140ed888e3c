//! Query tokenizer
//!
//! Splits a raw query into atomic tokens. Double quotes group spaces and
//! parentheses into one token (the quote characters themselves are
//! dropped); outside quotes a space ends the current token and each
//! parenthesis is a token of its own. Empty tokens appear around
//! parentheses; the parser treats them as always-true plain terms.

use once_cell::sync::Lazy;
use regex::Regex;

static SINGLE_QUOTES: Lazy<Regex> =
    Lazy::new(|| Regex::new("[\u{2019}`\u{2018}]").expect("single quote pattern is valid"));

static DOUBLE_QUOTES: Lazy<Regex> =
    Lazy::new(|| Regex::new("[\u{201d}\u{201c}]").expect("double quote pattern is valid"));

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Fold typographic quotes to their ASCII forms, collapse whitespace runs
/// to a single space, and trim. Runs on the raw query before tokenization
/// and before morphological analysis.
pub fn pre_normalize(query: &str) -> String {
    let query = SINGLE_QUOTES.replace_all(query, "'");
    let query = DOUBLE_QUOTES.replace_all(&query, "\"");
    let query = WHITESPACE_RUNS.replace_all(&query, " ");
    query.trim().to_string()
}

/// Split a pre-normalized query into tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for c in query.chars() {
        if !quoted && c == ' ' {
            tokens.push(std::mem::take(&mut current));
            continue;
        }
        if !quoted && (c == '(' || c == ')') {
            tokens.push(std::mem::take(&mut current));
            tokens.push(c.to_string());
            continue;
        }
        if c == '"' {
            quoted = !quoted;
            continue;
        }
        current.push(c);
    }
    tokens.push(current);
    tokens
}
