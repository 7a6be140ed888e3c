//! Locale label tables
//!
//! Static string tables for the user-facing labels the renderer and the
//! presentation layer need: POS label translations, badge labels, field
//! headings, and the singular/plural labels used by inflection
//! cross-references. Lookup falls back to English for locales or keys
//! that are missing.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("id", "en"),
        ("dictionary", "Dictionary"),
        ("proofreader", "Proofreader"),
        ("corpus", "Corpus"),
        ("check", "Check"),
        ("no_errors", "No errors were found."),
        ("errors_marked", "Detected errors are marked on the text below."),
        ("adjective", "stative verb"),
        ("transitive verb", "tr. verb"),
        ("possibly transitive verb", "possibly tr. verb"),
        ("intransitive verb", "itr. verb"),
        ("possibly intransitive verb", "possibly itr. verb"),
        ("verb prefix", "prefix"),
        ("verb suffix", "verb suffix"),
        ("verb", "verb"),
        ("noun suffix", "noun suffix"),
        ("noun", "noun"),
        ("question word", "ques."),
        ("adverb", "adverb"),
        ("conjunction", "conj."),
        ("exclamation", "excl."),
        ("sentence", "sent."),
        ("slang", "slang"),
        ("regional", "reg."),
        ("archaic", "archaic"),
        ("hypothetical", "hyp."),
        ("examples", "Examples"),
        ("components", "Components"),
        ("synonyms", "Synonyms"),
        ("antonyms", "Antonyms"),
        ("see_also", "See also"),
        ("source", "Sources"),
        ("singular", "singular"),
        ("plural", "plural"),
        ("dictionary_info", "About the dictionary"),
        ("search", "Search"),
    ])
});

static FI: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("id", "fi"),
        ("dictionary", "Sanakirja"),
        ("proofreader", "Kielentarkistin"),
        ("corpus", "Korpus"),
        ("check", "Tarkista"),
        ("no_errors", "Virheitä ei löytynyt."),
        ("errors_marked", "Löydetyt virheet on merkitty alla olevaan tekstiin."),
        ("adjective", "adjektiivi"),
        ("transitive verb", "tr. verbi"),
        ("possibly transitive verb", "todn. tr. verbi"),
        ("intransitive verb", "itr. verbi"),
        ("possibly intransitive verb", "todn. itr. verbi"),
        ("verb prefix", "etuliite"),
        ("verb suffix", "pääte"),
        ("verb", "verbi"),
        ("noun suffix", "liite"),
        ("noun", "substantiivi"),
        ("question word", "kysymyssana"),
        ("adverb", "adverbi"),
        ("conjunction", "konjunktio"),
        ("exclamation", "huudahdus"),
        ("sentence", "esimerkkilause"),
        ("slang", "slangia"),
        ("regional", "alueel."),
        ("archaic", "vanh."),
        ("hypothetical", "hyp."),
        ("examples", "Esimerkkejä"),
        ("components", "Osat"),
        ("synonyms", "Synonyymi"),
        ("antonyms", "Antonyymi"),
        ("see_also", "Katso myös"),
        ("source", "Lähteet"),
        ("singular", "yksikkö"),
        ("plural", "monikko"),
        ("dictionary_info", "Tietoa sanakirjasta"),
        ("search", "Hae"),
    ])
});

/// Look up a label in the locale's table, falling back to English, then to
/// the key itself for keys no table carries.
pub fn label<'a>(locale: &str, key: &'a str) -> &'a str {
    table(locale)
        .get(key)
        .or_else(|| EN.get(key))
        .copied()
        .unwrap_or(key)
}

fn table(locale: &str) -> &'static HashMap<&'static str, &'static str> {
    match locale {
        "fi" => &FI,
        _ => &EN,
    }
}
