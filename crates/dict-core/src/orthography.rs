//! Orthography normalizer
//!
//! Rewrites informal "xifan hol" romanization into canonical spelling before
//! any name matching or morphological analysis. The rewrite is an ordered
//! sequence of rules, each operating on the output of the previous one; it
//! is lossy by design (two informal spellings may normalize to the same
//! canonical form) and deliberately not idempotent.

use once_cell::sync::Lazy;
use regex::Regex;

/// `h` becomes the distinct grapheme `H` unless it is the second half of
/// `ch`, `gh` or `tlh`. A preceding `l` only protects the `h` when that `l`
/// is itself preceded by `t`.
static H_RULE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([^cgl]|[^t]l|^)h").expect("h rule pattern is valid")
});

/// Normalize informal romanization to canonical spelling.
///
/// Canonical text passes through unchanged: the rules only touch letters
/// the canonical alphabet does not use in that position.
pub fn normalize(text: &str) -> String {
    let text = text.replace('i', "I").replace('d', "D").replace('s', "S");
    let text = H_RULE.replace_all(&text, "${1}H").into_owned();
    let text = text.replace('x', "tlh").replace('f', "ng");
    let text = expand_c(&text);
    expand_g(&text)
}

/// `c` not already followed by `h` expands to the digraph `ch`.
///
/// The regex crate has no look-ahead, and a capture-based rewrite consumes
/// the following letter (so `cc` would miss the second `c`); a direct scan
/// keeps the original one-letter-at-a-time semantics.
fn expand_c(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == 'c' && chars.peek() != Some(&'h') {
            out.push_str("ch");
        } else {
            out.push(c);
        }
    }
    out
}

/// `g` not preceded by `n` and not followed by `h` expands to `gh`.
/// Adjacency is judged on the input, not on already-rewritten output.
fn expand_g(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut prev: Option<char> = None;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == 'g' && prev != Some('n') && chars.peek() != Some(&'h') {
            out.push_str("gh");
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}
