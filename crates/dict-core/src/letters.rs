//! Canonical alphabet segmentation
//!
//! Splits canonical text into the language's letters, some of which are
//! multi-character graphemes (`ch`, `gh`, `ng`, `tlh`), and groups letters
//! into syllables for the accent renderer. A bare `h` is not a letter, so
//! the `ngh` sequence always reads as `n` + `gh`.

/// Split a word into canonical letters by longest match.
///
/// Characters outside the alphabet (digits, hyphens, foreign letters) come
/// back as single-character graphemes and are passed through by callers.
pub fn split_letters(word: &str) -> Vec<&str> {
    let mut letters = Vec::new();
    let mut rest = word;
    while !rest.is_empty() {
        let len = if rest.starts_with("tlh") {
            3
        } else if rest.starts_with("ch") || rest.starts_with("gh") {
            2
        } else if rest.starts_with("ng") && !rest.starts_with("ngh") {
            2
        } else {
            rest.chars().next().map(char::len_utf8).unwrap_or(1)
        };
        letters.push(&rest[..len]);
        rest = &rest[len..];
    }
    letters
}

/// Vowel letters of the canonical alphabet. `I` is the canonical form;
/// lowercase `i` is accepted for robustness against informal input.
pub fn is_vowel(letter: &str) -> bool {
    matches!(letter, "a" | "e" | "I" | "i" | "o" | "u")
}

/// Split a word into syllables.
///
/// Syllables follow the language's onset-vowel-coda structure: each begins
/// with a consonant run up to and including the first vowel. Of the
/// consonants between two vowels, the last one opens the next syllable and
/// the rest close the current one (multi-letter codas such as `y'` or `rgh`
/// stay together this way); a word-final consonant run joins the last
/// syllable. A word with no vowel comes back as one syllable.
pub fn syllabify(word: &str) -> Vec<Vec<&str>> {
    let letters = split_letters(word);
    let mut syllables = Vec::new();
    let mut i = 0;
    while i < letters.len() {
        let mut syllable = Vec::new();
        // onset and nucleus
        while i < letters.len() && !is_vowel(letters[i]) {
            syllable.push(letters[i]);
            i += 1;
        }
        if i < letters.len() {
            syllable.push(letters[i]);
            i += 1;
        }
        // consonant run up to the next vowel or the end of the word
        let run_start = i;
        while i < letters.len() && !is_vowel(letters[i]) {
            i += 1;
        }
        if i >= letters.len() {
            syllable.extend_from_slice(&letters[run_start..]);
        } else if i > run_start {
            syllable.extend_from_slice(&letters[run_start..i - 1]);
            i -= 1;
        }
        syllables.push(syllable);
    }
    syllables
}
