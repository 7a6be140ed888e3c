//! Proofread annotation
//!
//! Wraps the words flagged by the external grammar checker in error spans
//! so the presentation layer can highlight them. The checker itself is an
//! external collaborator; this module only consumes its error records.

use dict_types::GrammarError;

/// Annotated text plus the number of errors reported by the checker.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotated {
    pub error_count: usize,
    pub markup: String,
}

/// Mark each flagged word with an error span carrying the checker's
/// message. A span runs from the error location to the next space; an
/// error in the final word runs to the end of the text. Errors are
/// processed in location order; an error starting inside an already
/// emitted span is dropped rather than emitted twice.
pub fn annotate(text: &str, errors: &[GrammarError]) -> Annotated {
    let mut sorted: Vec<&GrammarError> = errors.iter().collect();
    sorted.sort_by_key(|error| error.location);

    let mut out = String::new();
    let mut consumed = 0;
    for error in sorted {
        if error.location < consumed {
            continue;
        }
        // a location off a character boundary means the checker and this
        // text disagree; skip the error rather than fail the render
        let Some(before) = text.get(consumed..error.location) else {
            continue;
        };
        out.push_str(before);
        let rest = &text[error.location..];
        match rest.find(' ') {
            None => {
                out.push_str(&error_span(rest, &error.message));
                return Annotated {
                    error_count: errors.len(),
                    markup: out,
                };
            }
            Some(offset) => {
                out.push_str(&error_span(&rest[..offset], &error.message));
                consumed = error.location + offset;
            }
        }
    }
    out.push_str(text.get(consumed..).unwrap_or(""));
    Annotated {
        error_count: errors.len(),
        markup: out,
    }
}

fn error_span(word: &str, message: &str) -> String {
    format!("<span class=error title=\"{message}\">{word}</span>")
}
