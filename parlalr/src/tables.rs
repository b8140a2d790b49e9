//! Static LALR(1) parse tables and the lookups the driver performs on them.
//!
//! A [`Tables`] value is the output of an offline grammar compiler in the
//! goyacc layout: a packed `act`/`chk` pair indexed through per-state bases
//! (`pact`) and per-nonterminal bases (`pgo`), a default-action column
//! (`def`), sparse exception rows, production metadata (`r1`, `r2`) and three
//! token translation tables. The data is immutable and `Sync`, so one
//! `static` instance can serve any number of concurrent parses.
//!
//! Numbering conventions:
//!
//! - internal token ids start at 1: `$end` is 1, `error` is 2, `$unk` is 3 and
//!   grammar tokens start at [`Tables::TOK_START`];
//! - nonterminals are numbered from 1 and appear negated in `chk`;
//! - production 0 is reserved for acceptance of the start symbol.

use crate::error::TableError;
use smartstring::alias::String;

/// Sentinel in `def` meaning "consult the exception table".
const DEFER: i32 = -2;

/// Decoded default or exception action of a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Syntax error: no shift, reduction or override applies.
    Error,
    /// The start symbol has been recognised at end of input.
    Accept,
    /// Reduce by the given production.
    Reduce(usize),
}

impl Action {
    /// Decodes a raw `def` or exception entry: negative accepts, zero is an
    /// error, positive names a production.
    #[inline]
    fn decode(raw: i32) -> Self {
        match raw {
            n if n < 0 => Action::Accept,
            0 => Action::Error,
            n => Action::Reduce(n as usize),
        }
    }
}

/// What the default column says about a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultAction {
    /// The state's action does not depend on the lookahead.
    Fixed(Action),
    /// The action depends on the lookahead; see [`Tables::exception`].
    Deferred,
}

/// One run of the sparse exception table.
///
/// This is the typed form of a goyacc `-1, state, tok, act, ..., -2, fallback`
/// run. `overrides` is searched front to back and the first matching token
/// wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExceptionRow {
    pub state: usize,
    pub overrides: &'static [(i32, i32)],
    pub fallback: i32,
}

/// Grammar-supplied diagnostic text for a specific (state, lookahead) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorMessage {
    pub state: usize,
    pub token: i32,
    pub msg: &'static str,
}

/// Immutable parse tables for one grammar.
#[derive(Debug)]
pub struct Tables {
    /// Token names indexed by internal id minus one.
    pub toknames: &'static [&'static str],
    /// Optional state names, indexed by state.
    pub statenames: &'static [&'static str],
    pub exca: &'static [ExceptionRow],
    pub act: &'static [i32],
    pub pact: &'static [i32],
    pub pgo: &'static [i32],
    /// Left-hand-side nonterminal of each production.
    pub r1: &'static [i32],
    /// Right-hand-side length of each production.
    pub r2: &'static [i32],
    pub chk: &'static [i32],
    pub def: &'static [i32],
    /// Translation of raw codes below `tok1.len()`; `tok1[0]` is `$end`.
    pub tok1: &'static [i32],
    /// Translation of raw codes starting at `private`.
    pub tok2: &'static [i32],
    /// Remaining `(raw, internal)` pairs.
    pub tok3: &'static [(i32, i32)],
    pub error_messages: &'static [ErrorMessage],
    /// Number of entries in `act`.
    pub last: i32,
    /// First raw code of grammar-declared tokens.
    pub private: i32,
    pub eof_code: i32,
    pub err_code: i32,
    pub initial_stack_size: usize,
}

impl Tables {
    /// `pact` values at or below this mark states with only a default action.
    pub const FLAG: i32 = -1000;

    /// Lowest internal id of a real grammar token.
    pub const TOK_START: i32 = 4;

    /// Internal id of `$unk`, used when `tok2` has no unknown slot.
    pub const UNK: i32 = 3;

    /// Maps a raw lexer code to an internal token id.
    ///
    /// The mapping is total: codes `<= 0` are end of input, small codes go
    /// through `tok1`, private codes through `tok2`, anything else through
    /// `tok3`, and whatever is left (or maps to 0) becomes `$unk`.
    pub fn translate(&self, raw: i32) -> i32 {
        let token = if raw <= 0 {
            self.tok1.first().copied().unwrap_or(self.eof_code)
        } else if (raw as usize) < self.tok1.len() {
            self.tok1[raw as usize]
        } else if raw >= self.private && ((raw - self.private) as usize) < self.tok2.len() {
            self.tok2[(raw - self.private) as usize]
        } else {
            self.tok3
                .iter()
                .find(|&&(code, _)| code == raw)
                .map(|&(_, token)| token)
                .unwrap_or(0)
        };
        if token == 0 {
            self.unknown_token()
        } else {
            token
        }
    }

    /// Internal id of the unknown-character token.
    #[inline]
    pub fn unknown_token(&self) -> i32 {
        self.tok2.get(1).copied().unwrap_or(Self::UNK)
    }

    /// Returns `true` if `state` never needs a lookahead to decide.
    #[inline]
    pub fn is_simple(&self, state: usize) -> bool {
        self.pact[state] <= Self::FLAG
    }

    /// Returns the target state if `token` is a valid shift from `state`.
    #[inline]
    pub fn shift(&self, state: usize, token: i32) -> Option<usize> {
        let n = self.pact[state] + token;
        if n < 0 || n >= self.last {
            return None;
        }
        let target = self.act[n as usize];
        (self.chk[target as usize] == token).then_some(target as usize)
    }

    /// Reads the default column for `state`.
    #[inline]
    pub fn default_action(&self, state: usize) -> DefaultAction {
        match self.def[state] {
            DEFER => DefaultAction::Deferred,
            raw => DefaultAction::Fixed(Action::decode(raw)),
        }
    }

    /// Finds the exception row for `state`, if it has one.
    pub fn exception_row(&self, state: usize) -> Option<&ExceptionRow> {
        self.exca.iter().find(|row| row.state == state)
    }

    /// Resolves a deferred state's action for the given lookahead.
    ///
    /// A state without a row is treated as an error.
    pub fn exception(&self, state: usize, token: i32) -> Action {
        let Some(row) = self.exception_row(state) else {
            log::warn!("state {} defers to a missing exception row", state);
            return Action::Error;
        };
        let raw = row
            .overrides
            .iter()
            .find(|&&(tok, _)| tok == token)
            .map(|&(_, action)| action)
            .unwrap_or(row.fallback);
        Action::decode(raw)
    }

    /// State entered after reducing to `nonterminal` with `exposed` on top.
    pub fn goto(&self, exposed: usize, nonterminal: usize) -> usize {
        let g = self.pgo[nonterminal];
        let j = g + exposed as i32 + 1;
        let fallback = self.act[g as usize] as usize;
        if j >= self.last {
            return fallback;
        }
        let state = self.act[j as usize] as usize;
        if self.chk[state] == -(nonterminal as i32) {
            state
        } else {
            fallback
        }
    }

    /// Number of stack frames production `prod` consumes.
    #[inline]
    pub fn rhs_len(&self, prod: usize) -> usize {
        self.r2[prod] as usize
    }

    /// Left-hand-side nonterminal of production `prod`.
    #[inline]
    pub fn lhs(&self, prod: usize) -> usize {
        self.r1[prod] as usize
    }

    /// Grammar-supplied message for `(state, token)`, if any.
    pub fn error_message(&self, state: usize, token: i32) -> Option<&'static str> {
        self.error_messages
            .iter()
            .find(|e| e.state == state && e.token == token)
            .map(|e| e.msg)
    }

    pub fn token_name(&self, token: i32) -> String {
        if token >= 1 {
            if let Some(name) = self.toknames.get(token as usize - 1) {
                if !name.is_empty() {
                    return String::from(*name);
                }
            }
        }
        String::from(format!("tok-{}", token))
    }

    pub fn state_name(&self, state: usize) -> String {
        match self.statenames.get(state) {
            Some(name) if !name.is_empty() => String::from(*name),
            _ => String::from(format!("state-{}", state)),
        }
    }

    /// Checks that the arrays agree in shape.
    ///
    /// This catches truncated or mismatched generated data; it does not prove
    /// the automaton itself is sound.
    pub fn check(&self) -> Result<(), TableError> {
        if self.last < 0 || self.last as usize != self.act.len() {
            return Err(TableError::BadLast {
                last: self.last,
                len: self.act.len(),
            });
        }
        same_len("pact", self.pact, "def", self.def)?;
        same_len("r1", self.r1, "r2", self.r2)?;
        min_len("tok1", self.tok1.len(), 1)?;
        min_len("tok2", self.tok2.len(), 2)?;
        min_len("chk", self.chk.len(), self.pact.len())?;
        min_len("pgo", self.pgo.len(), 1)?;
        for (state, &raw) in self.def.iter().enumerate() {
            if raw == DEFER && self.exception_row(state).is_none() {
                return Err(TableError::MissingException {
                    state: state as i32,
                });
            }
        }
        Ok(())
    }
}

fn same_len(
    left: &'static str,
    a: &[i32],
    right: &'static str,
    b: &[i32],
) -> Result<(), TableError> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(TableError::LengthMismatch {
            left,
            left_len: a.len(),
            right,
            right_len: b.len(),
        })
    }
}

fn min_len(table: &'static str, len: usize, min: usize) -> Result<(), TableError> {
    if len >= min {
        Ok(())
    } else {
        Err(TableError::TooShort { table, min, len })
    }
}
