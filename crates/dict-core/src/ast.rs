//! Query AST
//!
//! A binary tree of boolean combinators over leaf predicates, built once
//! per query and never mutated. Evaluation against entries lives in the
//! scanner; the tree itself is plain data so sub-parsers can be tested in
//! isolation.

use serde::{Deserialize, Serialize};

/// One node of the parsed query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum QueryExpr {
    /// Either side matches.
    Or(Box<QueryExpr>, Box<QueryExpr>),

    /// Both sides match; the right side is not evaluated when the left
    /// side fails.
    And(Box<QueryExpr>, Box<QueryExpr>),

    /// `field:argument` term, resolved against the operator registry at
    /// evaluation time. An unknown field name never matches.
    Field { op: String, arg: String },

    /// Bare token: headword substring / search-tag prefix / definition
    /// substring match.
    Plain(String),

    /// Empty term position; matches every entry (the AND identity).
    All,
}

impl QueryExpr {
    pub fn or(left: QueryExpr, right: QueryExpr) -> Self {
        QueryExpr::Or(Box::new(left), Box::new(right))
    }

    pub fn and(left: QueryExpr, right: QueryExpr) -> Self {
        QueryExpr::And(Box::new(left), Box::new(right))
    }

    pub fn field(op: impl Into<String>, arg: impl Into<String>) -> Self {
        QueryExpr::Field {
            op: op.into(),
            arg: arg.into(),
        }
    }

    pub fn plain(token: impl Into<String>) -> Self {
        QueryExpr::Plain(token.into())
    }
}
