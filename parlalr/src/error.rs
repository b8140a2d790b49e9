//! Error types surfaced by the engine.
//!
//! Syntax errors are *not* represented here: they are reported through
//! [`Lexer::error`](crate::Lexer::error), counted, and recovered from (or they
//! end the parse with [`Status::Aborted`](crate::Status::Aborted)). The types
//! below cover the failures that sit outside that protocol:
//!
//! - [`ParseError`]: fatal resource failures while a parse is running,
//! - [`TableError`]: inconsistencies found by the optional
//!   [`Tables::check`](crate::Tables::check) shape check.
use thiserror::Error;

/// A fatal, non-syntactic failure of a running parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The parse stack could not grow past `capacity` frames.
    #[error("parse stack exhausted at capacity {capacity}")]
    StackExhausted {
        /// Capacity at the moment the reservation failed.
        capacity: usize,
    },
}

/// A shape inconsistency in a set of parse tables.
///
/// The engine itself never validates its tables; malformed tables are a
/// configuration error. [`Tables::check`](crate::Tables::check) exists so that
/// grammar crates can assert their generated data once, typically in a test.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two arrays that must be indexed in lockstep differ in length.
    #[error("table {left} has {left_len} entries but {right} has {right_len}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    /// A table is shorter than the engine requires.
    #[error("table {table} needs at least {min} entries, has {len}")]
    TooShort {
        table: &'static str,
        min: usize,
        len: usize,
    },

    /// The declared `last` bound does not match the `act` array.
    #[error("last is {last} but act has {len} entries")]
    BadLast { last: i32, len: usize },

    /// A state with `def == -2` has no exception row.
    #[error("state {state} defers to the exception table but has no row")]
    MissingException { state: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}

    #[test]
    fn errors_are_send_sync_static() {
        _assert_send_sync_static::<ParseError>();
        _assert_send_sync_static::<TableError>();
    }

    #[test]
    fn display_mentions_capacity() {
        let err = ParseError::StackExhausted { capacity: 64 };
        assert_eq!(err.to_string(), "parse stack exhausted at capacity 64");
    }

    #[test]
    fn display_names_tables() {
        let err = TableError::LengthMismatch {
            left: "r1",
            left_len: 3,
            right: "r2",
            right_len: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("r1"));
        assert!(msg.contains("r2"));
    }
}
