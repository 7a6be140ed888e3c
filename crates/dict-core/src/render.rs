//! Entry renderer
//!
//! Assembles the presentation record for one entry in one display locale:
//! POS classification, badge tags, homonym number, translated-field
//! fallback, components/inflections, and link resolution over every
//! free-text field.

use std::collections::HashMap;

use dict_types::{Entry, RenderedEntry};

use crate::letters::split_letters;
use crate::links::{resolve_links, LinkFormat};
use crate::locales::label;

/// Sentinel substring/value marking a translation that has not been done
/// yet; such text falls back to English.
const AUTOTRANSLATED: &str = "AUTOTRANSLATED";
const TRANSLATE: &str = "TRANSLATE";

/// Render one entry for one display locale.
pub fn render_entry(entry: &Entry, locale: &str, format: LinkFormat) -> RenderedEntry {
    let mut out = RenderedEntry {
        name: entry.name.clone(),
        url_name: entry.name.replace(' ', "+"),
        wiki_name: wiki_name(&entry.name),
        pos: pos_label(entry).to_string(),
        simple_pos: if entry.name.contains('-') {
            "affix".to_string()
        } else {
            entry.simple_pos.clone()
        },
        tags: badge_tags(entry),
        homonym: entry.homonym_digit(),
        ..Default::default()
    };

    out.definition = resolve_links(&unless_translated(&entry.definition, locale), format);
    if locale != "en" {
        let english = entry.definition.get("en").map(String::as_str).unwrap_or("");
        out.english = Some(resolve_links(english, format));
    }
    if !entry.notes.is_empty() {
        out.notes = Some(resolve_links(&unless_translated(&entry.notes, locale), format));
    }
    if !entry.examples.is_empty() {
        out.examples = Some(resolve_links(
            &unless_translated(&entry.examples, locale),
            format,
        ));
    }

    let components = entry
        .components
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(|text| resolve_links(text, format));
    out.components = components.clone();

    if entry.simple_pos == "n" {
        if entry.has_tag("inhps") && components.is_some() {
            // plural-only noun: the components field names the singular's
            // plural counterpart
            out.inflections = components.map(|c| format!("{}: {}", label(locale, "plural"), c));
            out.components = None;
        } else if entry.has_tag("inhpl") && components.is_some() {
            out.inflections = components.map(|c| format!("{}: {}", label(locale, "singular"), c));
            out.components = None;
        } else if !entry.has_tag("suff") && !entry.has_tag("inhpl") {
            if entry.has_tag("body") {
                out.inflections = Some("-Du'".to_string());
            } else if entry.has_tag("being") {
                out.inflections = Some("-pu', -mey".to_string());
            }
        }
    }

    // remaining free-text fields, in fixed order
    let free_text = [
        (&entry.synonyms, &mut out.synonyms),
        (&entry.antonyms, &mut out.antonyms),
        (&entry.see_also, &mut out.see_also),
        (&entry.source, &mut out.source),
        (&entry.hidden_notes, &mut out.hidden_notes),
    ];
    for (source, target) in free_text {
        if let Some(text) = source.as_deref().filter(|text| !text.is_empty()) {
            *target = Some(resolve_links(text, format));
        }
    }

    out
}

/// POS label by fixed precedence over the simple POS code and the tag set.
fn pos_label(entry: &Entry) -> &'static str {
    match entry.simple_pos.as_str() {
        "v" => {
            if entry.has_tag("is") {
                "adjective"
            } else if entry.has_tag("t_c") {
                "transitive verb"
            } else if entry.has_tag("t") {
                "possibly transitive verb"
            } else if entry.has_tag("i_c") {
                "intransitive verb"
            } else if entry.has_tag("i") {
                "possibly intransitive verb"
            } else if entry.has_tag("pref") {
                "verb prefix"
            } else if entry.has_tag("suff") {
                "verb suffix"
            } else {
                "verb"
            }
        }
        "n" => {
            if entry.has_tag("suff") {
                "noun suffix"
            } else {
                "noun"
            }
        }
        "ques" => "question word",
        "adv" => "adverb",
        "conj" => "conjunction",
        "excl" => "exclamation",
        "sen" => "sentence",
        _ => "unknown",
    }
}

/// Badge tags in fixed display order.
fn badge_tags(entry: &Entry) -> Vec<String> {
    [
        ("slang", "slang"),
        ("reg", "regional"),
        ("archaic", "archaic"),
        ("hyp", "hypothetical"),
    ]
    .iter()
    .filter(|(tag, _)| entry.has_tag(tag))
    .map(|(_, badge)| badge.to_string())
    .collect()
}

/// Display-locale text unless it is absent, empty, or still carrying a
/// translation sentinel; English otherwise.
fn unless_translated(texts: &HashMap<String, String>, locale: &str) -> String {
    let english = || texts.get("en").cloned().unwrap_or_default();
    match texts.get(locale) {
        None => english(),
        Some(text) if text.is_empty() => english(),
        Some(text) if text.contains(AUTOTRANSLATED) || text == TRANSLATE => english(),
        Some(text) => text.clone(),
    }
}

/// Wiki transliteration of a headword: spaces removed, `q` becomes `k`,
/// the glottal stop becomes a hyphen, then the whole word is capitalized.
fn wiki_name(name: &str) -> String {
    let squeezed = name.replace(' ', "");
    let mut out = String::with_capacity(squeezed.len());
    for letter in split_letters(&squeezed) {
        match letter {
            "q" => out.push('k'),
            "'" => out.push('-'),
            _ => out.push_str(letter),
        }
    }
    capitalize(&out)
}

/// First character uppercased, the rest lowercased.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
