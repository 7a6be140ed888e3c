//! Accent renderer
//!
//! Converts canonical spelling into the accented display romanization used
//! for glossed names and link text. Each syllable is remapped to the
//! single-letter romanization, then its glottal stops are folded into
//! diacritics: a stop on both sides of a short vowel becomes a caron, a
//! leading stop becomes a grave on the vowel, a trailing stop becomes an
//! acute on the final letter.

use thiserror::Error;

use crate::letters::syllabify;

/// An apostrophe sat next to a grapheme that has no accented form. The
/// input was not canonical text.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("no accented form for '{grapheme}' in syllable '{syllable}'")]
pub struct AccentError {
    pub grapheme: String,
    pub syllable: String,
}

/// Digraph/trigraph -> single-letter romanization. Letters not listed pass
/// through unchanged.
fn remap(letter: &str) -> &str {
    match letter {
        "ch" => "c",
        "D" => "d",
        "gh" => "g",
        "H" => "h",
        "I" => "i",
        "q" => "k",
        "Q" => "q",
        "S" => "s",
        "tlh" => "z",
        other => other,
    }
}

fn caron(vowel: &str) -> Option<&'static str> {
    Some(match vowel {
        "a" => "ǎ",
        "e" => "ě",
        "i" => "ǐ",
        "o" => "ǒ",
        "u" => "ǔ",
        _ => return None,
    })
}

fn grave(vowel: &str) -> Option<&'static str> {
    Some(match vowel {
        "a" => "à",
        "e" => "è",
        "i" => "ì",
        "o" => "ò",
        "u" => "ù",
        _ => return None,
    })
}

fn acute(letter: &str) -> Option<&'static str> {
    Some(match letter {
        "a" => "á",
        "e" => "é",
        "i" => "í",
        "o" => "ó",
        "u" => "ú",
        "y" => "ý",
        "w" => "ẃ",
        _ => return None,
    })
}

fn is_plain_vowel(letter: &str) -> bool {
    matches!(letter, "a" | "e" | "i" | "o" | "u")
}

/// Render the accented display form of canonical text.
///
/// Operates word by word (split on literal spaces) and syllable by
/// syllable; see the module docs for the diacritic rules. Fails with
/// [`AccentError`] when an apostrophe-adjacent grapheme is outside the
/// accent tables, which only happens on malformed input.
pub fn accent(text: &str) -> Result<String, AccentError> {
    let mut words = Vec::new();
    for word in text.split(' ') {
        let mut rendered = String::new();
        for syllable in syllabify(word) {
            rendered.push_str(&accent_syllable(&syllable)?);
        }
        words.push(rendered);
    }
    Ok(words.join(" ").trim_end().to_string())
}

fn accent_syllable(syllable: &[&str]) -> Result<String, AccentError> {
    if syllable.len() <= 1 {
        return Ok(syllable.concat());
    }

    let mapped: Vec<&str> = syllable.iter().map(|l| remap(l)).collect();
    let fault = |grapheme: &str| AccentError {
        grapheme: grapheme.to_string(),
        syllable: syllable.concat(),
    };

    // glottal-stop-bounded short vowel: 'V' -> caron, stops dropped
    if mapped.len() == 3 && mapped[0] == "'" && mapped[2] == "'" {
        return Ok(caron(mapped[1]).ok_or_else(|| fault(mapped[1]))?.to_string());
    }

    // leading stop: drop it, grave-accent the first vowel
    if mapped[0] == "'" {
        let rest = &mapped[1..];
        let vowel_at = rest
            .iter()
            .position(|l| is_plain_vowel(l))
            .ok_or_else(|| fault(rest.first().copied().unwrap_or("'")))?;
        let mut out = String::new();
        for (i, letter) in rest.iter().enumerate() {
            if i == vowel_at {
                out.push_str(grave(letter).ok_or_else(|| fault(letter))?);
            } else {
                out.push_str(letter);
            }
        }
        return Ok(out);
    }

    // trailing stop: drop it, acute-accent the new final letter
    if mapped[mapped.len() - 1] == "'" {
        let rest = &mapped[..mapped.len() - 1];
        let last = rest.len() - 1;
        let mut out = String::new();
        for (i, letter) in rest.iter().enumerate() {
            if i == last {
                out.push_str(acute(letter).ok_or_else(|| fault(letter))?);
            } else {
                out.push_str(letter);
            }
        }
        return Ok(out);
    }

    Ok(mapped.concat())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_remap_without_stops() {
        assert_eq!(accent("tlhIngan").unwrap(), "zingan");
        assert_eq!(accent("ghItlh").unwrap(), "giz");
        assert_eq!(accent("Qong").unwrap(), "qong");
        assert_eq!(accent("qach").unwrap(), "kac");
    }

    #[test]
    fn test_trailing_stop_becomes_acute() {
        assert_eq!(accent("Qapla'").unwrap(), "kaplá");
        assert_eq!(accent("be'").unwrap(), "bé");
    }

    #[test]
    fn test_trailing_stop_on_glide_letters() {
        assert_eq!(accent("may'").unwrap(), "maý");
        assert_eq!(accent("jaw'").unwrap(), "jaẃ");
    }

    #[test]
    fn test_leading_stop_becomes_grave() {
        assert_eq!(accent("'ej").unwrap(), "èj");
        assert_eq!(accent("'ach").unwrap(), "àc");
    }

    #[test]
    fn test_stop_bounded_vowel_becomes_caron() {
        assert_eq!(accent("'a'").unwrap(), "ǎ");
        assert_eq!(accent("'I'").unwrap(), "ǐ");
    }

    #[test]
    fn test_multiple_words_joined_with_single_spaces() {
        assert_eq!(accent("tlhIngan maH").unwrap(), "zingan mah");
    }

    #[test]
    fn test_multi_syllable_word_concatenated() {
        // second syllable carries the trailing stop
        assert_eq!(accent("Heghlu'meH").unwrap(), "heglúmeh");
    }

    #[test]
    fn test_single_letter_syllable_passes_through() {
        assert_eq!(accent("I").unwrap(), "I");
    }

    #[test]
    fn test_malformed_stop_adjacency_is_an_error() {
        let err = accent("pagh'").unwrap_err();
        assert_eq!(err.grapheme, "g");
    }
}
