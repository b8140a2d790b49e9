//! The lexer capability and the single-token lookahead buffer.
//!
//! The engine pulls tokens lazily: a [`Lookahead`] is filled only when the
//! driver needs to look at the next token, and it holds at most one token at
//! a time. Raw codes are translated to internal ids through
//! [`Tables::translate`] as they are pulled.

use crate::tables::Tables;

/// A token source supplied by the caller.
///
/// `lex` must eventually return a code `<= 0` (end of input); the engine keeps
/// asking for tokens until the parse accepts or aborts. `error` receives one
/// message per reported syntax error and its result is ignored.
pub trait Lexer {
    /// Semantic value attached to each token.
    type Value;

    /// Produces the next raw token code and its semantic value.
    fn lex(&mut self) -> (i32, Self::Value);

    /// Receives a diagnostic message.
    fn error(&mut self, msg: &str);
}

/// The buffered lookahead token of a running parse.
#[derive(Debug)]
pub struct Lookahead<V> {
    slot: Option<Buffered<V>>,
}

#[derive(Debug)]
struct Buffered<V> {
    raw: i32,
    token: i32,
    value: V,
}

impl<V> Default for Lookahead<V> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<V> Lookahead<V> {
    /// Pulls and translates a token unless one is already buffered, and
    /// returns its internal id.
    pub fn fill<L>(&mut self, lexer: &mut L, tables: &Tables, debug: u8) -> i32
    where
        L: Lexer<Value = V>,
    {
        if let Some(buffered) = &self.slot {
            return buffered.token;
        }
        let (raw, value) = lexer.lex();
        let token = tables.translate(raw);
        if debug >= 3 {
            log::debug!("lex {}({})", tables.token_name(token), raw as u32);
        }
        self.slot = Some(Buffered { raw, token, value });
        token
    }

    /// Internal id of the buffered token, if any.
    #[inline]
    pub fn peek(&self) -> Option<i32> {
        self.slot.as_ref().map(|b| b.token)
    }

    /// Raw code of the buffered token, if any.
    #[inline]
    pub fn raw(&self) -> Option<i32> {
        self.slot.as_ref().map(|b| b.raw)
    }

    /// Consumes the buffered token, returning its semantic value.
    #[inline]
    pub fn take(&mut self) -> Option<V> {
        self.slot.take().map(|b| b.value)
    }

    /// Drops the buffered token so the next [`fill`](Self::fill) pulls again.
    #[inline]
    pub fn discard(&mut self) {
        self.slot = None;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_tables::{RECOVER_TABLES, VecLexer};

    #[test]
    fn fill_pulls_once() {
        let mut lexer = VecLexer::new(&[57346, 57347]);
        let mut la = Lookahead::default();
        assert!(la.is_empty());
        assert_eq!(la.fill(&mut lexer, &RECOVER_TABLES, 0), 4);
        assert_eq!(la.fill(&mut lexer, &RECOVER_TABLES, 0), 4);
        assert_eq!(lexer.pulled(), 1);
        assert_eq!(la.peek(), Some(4));
        assert_eq!(la.raw(), Some(57346));
    }

    #[test]
    fn take_consumes_and_discard_clears() {
        let mut lexer = VecLexer::new(&[57346, 57347]);
        let mut la = Lookahead::default();
        la.fill(&mut lexer, &RECOVER_TABLES, 0);
        assert_eq!(la.take(), Some(vec![0]));
        assert!(la.is_empty());
        assert_eq!(la.fill(&mut lexer, &RECOVER_TABLES, 0), 5);
        la.discard();
        assert_eq!(la.peek(), None);
        // exhausted lexer keeps returning end of input
        assert_eq!(la.fill(&mut lexer, &RECOVER_TABLES, 0), 1);
        assert_eq!(la.raw(), Some(0));
    }
}
