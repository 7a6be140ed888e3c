//! Boolean query parser
//!
//! Recursive descent over the token sequence:
//!
//! ```text
//! OrExpr   := AndExpr ( ("OR"|"TAI") AndExpr )*
//! AndExpr  := Term ( ("AND"|"JA")? Term )*      juxtaposition implies AND
//! Term     := "(" OrExpr ")" | FieldTerm | PlainTerm
//! ```
//!
//! Each sub-parser takes the token slice and a cursor index and returns the
//! node together with the next cursor position; no shared mutable parser
//! state. A missing closing parenthesis is tolerated: the sub-expression
//! simply runs to the end of the input. An exhausted token sequence at a
//! term position yields the always-true term.

use crate::ast::QueryExpr;

/// Parse a full token sequence into a query tree.
pub fn parse(tokens: &[String]) -> QueryExpr {
    let (expr, _) = parse_or(tokens, 0);
    expr
}

pub(crate) fn parse_or(tokens: &[String], pos: usize) -> (QueryExpr, usize) {
    let (mut expr, mut pos) = parse_and(tokens, pos);
    while matches!(tokens.get(pos).map(String::as_str), Some("OR") | Some("TAI")) {
        let (right, next) = parse_and(tokens, pos + 1);
        expr = QueryExpr::or(expr, right);
        pos = next;
    }
    (expr, pos)
}

pub(crate) fn parse_and(tokens: &[String], pos: usize) -> (QueryExpr, usize) {
    let (mut expr, mut pos) = parse_term(tokens, pos);
    loop {
        match tokens.get(pos).map(String::as_str) {
            None | Some(")") | Some("OR") | Some("TAI") => break,
            Some("AND") | Some("JA") => pos += 1,
            Some(_) => {}
        }
        let (right, next) = parse_term(tokens, pos);
        expr = QueryExpr::and(expr, right);
        pos = next;
    }
    (expr, pos)
}

pub(crate) fn parse_term(tokens: &[String], pos: usize) -> (QueryExpr, usize) {
    let Some(token) = tokens.get(pos) else {
        return (QueryExpr::All, pos);
    };
    let pos = pos + 1;

    if token == "(" {
        let (expr, mut pos) = parse_or(tokens, pos);
        if pos < tokens.len() {
            pos += 1; // closing paren
        }
        return (expr, pos);
    }

    match token.split_once(':') {
        Some((op, arg)) => (QueryExpr::field(op, arg), pos),
        None => (QueryExpr::plain(token.clone()), pos),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tokenizer::tokenize;

    fn parse_query(query: &str) -> QueryExpr {
        parse(&tokenize(query))
    }

    #[test]
    fn test_juxtaposition_is_and() {
        assert_eq!(
            parse_query("a b"),
            QueryExpr::and(QueryExpr::plain("a"), QueryExpr::plain("b"))
        );
        assert_eq!(parse_query("a AND b"), parse_query("a b"));
        assert_eq!(parse_query("a JA b"), parse_query("a b"));
    }

    #[test]
    fn test_or_binds_looser_than_and() {
        // a OR b c  ==  a OR (b AND c)
        assert_eq!(
            parse_query("a OR b c"),
            QueryExpr::or(
                QueryExpr::plain("a"),
                QueryExpr::and(QueryExpr::plain("b"), QueryExpr::plain("c"))
            )
        );
        assert_eq!(parse_query("a TAI b"), parse_query("a OR b"));
    }

    #[test]
    fn test_parens_override_precedence() {
        // the inner Or sits under the And; the empty tokens the tokenizer
        // emits around parentheses ride along as vacuous plain terms
        let parsed = parse_query("(a OR b) c");
        let grouped = QueryExpr::and(
            QueryExpr::and(
                QueryExpr::and(
                    QueryExpr::plain(""),
                    QueryExpr::or(QueryExpr::plain("a"), QueryExpr::plain("b")),
                ),
                QueryExpr::plain(""),
            ),
            QueryExpr::plain("c"),
        );
        assert_eq!(parsed, grouped);
    }

    #[test]
    fn test_field_term_splits_on_first_colon() {
        assert_eq!(parse_query("en:fire"), QueryExpr::field("en", "fire"));
        // argument keeps any further colons
        assert_eq!(
            parse(&["tlh:a:b".to_string()]),
            QueryExpr::field("tlh", "a:b")
        );
    }

    #[test]
    fn test_empty_input_is_always_true() {
        assert_eq!(parse(&[]), QueryExpr::All);
    }

    #[test]
    fn test_empty_token_is_a_plain_term() {
        assert_eq!(parse(&["".to_string()]), QueryExpr::plain(""));
    }

    #[test]
    fn test_missing_close_paren_tolerated() {
        assert_eq!(
            parse_query("(a b"),
            QueryExpr::and(
                QueryExpr::plain(""),
                QueryExpr::and(QueryExpr::plain("a"), QueryExpr::plain("b"))
            )
        );
    }

    #[test]
    fn test_trailing_and_keyword_tolerated() {
        assert_eq!(
            parse_query("a AND"),
            QueryExpr::and(QueryExpr::plain("a"), QueryExpr::All)
        );
    }
}
