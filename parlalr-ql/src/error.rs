//! # Query Error Type
//!
//! [`QlError`] covers the failures of [`QlParser`](crate::QlParser) that are
//! not syntax errors. Syntax errors never surface here; they end up in
//! [`QlReport::diagnostics`](crate::QlReport::diagnostics).
use parlalr::{ParseError, TableError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QlError {
    /// The engine ran out of stack.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The query tables failed their shape check.
    #[error("table error: {0}")]
    Table(#[from] TableError),
}
