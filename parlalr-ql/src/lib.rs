//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! A small query language on top of [`parlalr`].
//!
//! The grammar accepts one or more `SELECT FROM WHERE` statements:
//!
//! ```text
//! stmts  : stmt | stmts stmt
//! stmt   : select
//! select : SELECT FROM WHERE
//! ```
//!
//! The crate shows the pieces a grammar crate supplies to the engine: the
//! generated [`QL_TABLES`], a `logos`-based [`QlLexer`], and the
//! [`QlActions`] reduction hooks. [`QlParser`] ties them together.

mod error;
mod lexer;
mod parser;
mod span;
mod tables;
mod value;

pub use crate::error::QlError;
pub use crate::lexer::{Diagnostic, QlLexer};
pub use crate::parser::{QlActions, QlParser, QlReport};
pub use crate::span::{Position, Span};
pub use crate::tables::{END, FROM, LEX_ERROR, ProdID, QL_TABLES, SELECT, WHERE};
pub use crate::value::{QlNode, QlValue, Select};
pub use parlalr::{Config, Status};
