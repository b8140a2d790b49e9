//! # Query Values
//!
//! The semantic value carried on the parse stack. Tokens arrive from the
//! lexer as [`QlNode::Word`]; reduction hooks replace them with statement
//! records ([`QlNode::Select`]).

use crate::Span;
use smartstring::alias::String;

/// One `SELECT FROM WHERE` statement.
///
/// Keywords are kept as written, so `select From WHERE` round-trips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Select {
    /// Covers the statement from the first keyword to the last.
    pub span: Span,
    pub select: String,
    pub from: String,
    pub where_: String,
}

impl std::fmt::Display for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.select, self.from, self.where_)
    }
}

/// Payload of a [`QlValue`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QlNode {
    /// Nothing: end of input, statement lists and error frames.
    #[default]
    None,

    /// Text of a lexed token.
    Word(String),

    /// A finished statement.
    Select(Select),
}

/// A value on the parse stack: a node and the source range it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QlValue {
    pub span: Span,
    pub node: QlNode,
}

impl QlValue {
    pub fn new(span: Span, node: QlNode) -> Self {
        Self { span, node }
    }

    /// Text of a token value, or `""` for anything else.
    pub fn text(&self) -> &str {
        match &self.node {
            QlNode::Word(text) => text.as_str(),
            _ => "",
        }
    }
}
