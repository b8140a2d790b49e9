//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! Table-driven LALR(1) parsing engine.
//!
//! `parlalr` executes parse tables produced offline by a yacc-style grammar
//! compiler. A grammar crate supplies three things:
//!
//!  * a `static` [`Tables`] value (the generated automaton),
//!  * a [`Lexer`] yielding raw token codes and semantic values,
//!  * an [`Actions`] implementation with one reduction hook per production.
//!
//! [`Parser::parse`] drives the shift/reduce loop, reports syntax errors
//! through [`Lexer::error`], performs panic-mode recovery on grammars with
//! `error` productions, and returns an [`Outcome`].
//!
//! ```text
//! let mut parser = Parser::new(&TABLES, Config::default().with_verbose_errors(true));
//! let outcome = parser.parse(&mut lexer, &mut actions)?;
//! assert_eq!(outcome.status.code(), 0);
//! ```

mod diagnostics;
mod error;
mod lexer;
mod parser;
mod stack;
mod tables;

#[cfg(test)]
mod test_tables;

pub use crate::diagnostics::{MAX_EXPECTED, syntax_error};
pub use crate::error::{ParseError, TableError};
pub use crate::lexer::{Lexer, Lookahead};
pub use crate::parser::{
    Actions, Config, DefaultActions, Outcome, Parser, ParserStats, Reduction, Status,
};
pub use crate::stack::ParseStack;
pub use crate::tables::{Action, DefaultAction, ErrorMessage, ExceptionRow, Tables};
