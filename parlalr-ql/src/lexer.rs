//! # Query Lexer
//!
//! Tokenizes query text for [`QL_TABLES`](crate::QL_TABLES). Keywords are
//! matched case-insensitively. Any other run of word characters, and any
//! character the lexer does not recognise, becomes a `LEX_ERROR` token so
//! that the parser reports it in context.
//!
//! The lexer also collects the diagnostics the parser sends back through
//! [`parlalr::Lexer::error`], each tagged with the span of the most recent
//! token.

use crate::tables::{END, FROM, LEX_ERROR, SELECT, WHERE};
use crate::{Position, QlNode, QlValue, Span};
use logos::Logos;
use smartstring::alias::String;

/// Raw tokens recognized by the `logos`-based lexer.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\f]+")]
enum LogosToken {
    /// Line break; tracked for positions, never returned.
    #[regex(r"\n")]
    LineFeed,

    /// `--` comment to end of line.
    #[regex(r"--[^\n]*")]
    Comment,

    #[token("select", ignore(case))]
    Select,

    #[token("from", ignore(case))]
    From,

    #[token("where", ignore(case))]
    Where,

    /// Any other word; not part of the language.
    #[regex(r"[A-Za-z0-9_]+")]
    Word,
}

/// A message reported by the parser, with the span of the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub span: Span,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.start.line + 1,
            self.span.start.column + 1,
            self.message
        )
    }
}

/// Source-level lexer for query text.
pub struct QlLexer<'source> {
    inner: logos::Lexer<'source, LogosToken>,

    /// 0-based line of the current token.
    line: usize,

    /// Byte offset where the current line starts.
    line_start: usize,

    /// Span of the token returned last.
    last: Span,

    diagnostics: Vec<Diagnostic>,
}

impl<'source> QlLexer<'source> {
    pub fn new(input: &'source str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            line: 0,
            line_start: 0,
            last: Span::default(),
            diagnostics: Vec::new(),
        }
    }

    /// Diagnostics received so far, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn position(&self, offset: usize) -> Position {
        Position::new(self.line, offset - self.line_start)
    }

    fn current_span(&self) -> Span {
        let range = self.inner.span();
        Span::new(self.position(range.start), self.position(range.end))
    }

    fn word(&mut self, code: i32) -> (i32, QlValue) {
        let span = self.current_span();
        self.last = span;
        let value = QlValue::new(span, QlNode::Word(String::from(self.inner.slice())));
        (code, value)
    }
}

impl parlalr::Lexer for QlLexer<'_> {
    type Value = QlValue;

    fn lex(&mut self) -> (i32, QlValue) {
        while let Some(kind) = self.inner.next() {
            return match kind {
                Ok(LogosToken::LineFeed) => {
                    self.line += 1;
                    self.line_start = self.inner.span().end;
                    continue;
                }
                Ok(LogosToken::Comment) => continue,
                Ok(LogosToken::Select) => self.word(SELECT),
                Ok(LogosToken::From) => self.word(FROM),
                Ok(LogosToken::Where) => self.word(WHERE),
                Ok(LogosToken::Word) | Err(_) => {
                    log::trace!("unrecognised input {:?}", self.inner.slice());
                    self.word(LEX_ERROR)
                }
            };
        }
        let end = self.position(self.inner.source().len());
        self.last = Span::at(end);
        (END, QlValue::new(self.last, QlNode::None))
    }

    fn error(&mut self, msg: &str) {
        log::debug!("{}: {}", self.last, msg);
        self.diagnostics.push(Diagnostic {
            span: self.last,
            message: String::from(msg),
        });
    }
}
