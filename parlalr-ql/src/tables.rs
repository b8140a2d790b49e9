//! Parse tables for the query grammar.
//!
//! ```text
//! stmts  : stmt               -- Stmts1
//!        | stmts stmt         -- Stmts2
//! stmt   : select             -- Stmt
//! select : SELECT FROM WHERE  -- Select
//! ```
//!
//! The arrays are the grammar compiler's output and must not be edited by
//! hand.

use parlalr::{ExceptionRow, Tables};

/// Raw code the lexer returns for unrecognised input.
pub const LEX_ERROR: i32 = 57346;
pub const SELECT: i32 = 57347;
pub const FROM: i32 = 57348;
pub const WHERE: i32 = 57349;

/// Raw code for end of input.
pub const END: i32 = 0;

/// Production numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ProdID {
    Start = 0,
    Stmts1 = 1,
    Stmts2 = 2,
    Stmt = 3,
    Select = 4,
}

impl ProdID {
    pub const LABELS: &'static [&'static str] = &["start", "stmts1", "stmts2", "stmt", "select"];

    pub fn from_index(prod: usize) -> Option<Self> {
        match prod {
            0 => Some(ProdID::Start),
            1 => Some(ProdID::Stmts1),
            2 => Some(ProdID::Stmts2),
            3 => Some(ProdID::Stmt),
            4 => Some(ProdID::Select),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        ProdID::LABELS[*self as usize]
    }
}

pub static QL_TABLES: Tables = Tables {
    toknames: &[
        "$end",
        "error",
        "$unk",
        "LEX_ERROR",
        "SELECT",
        "FROM",
        "WHERE",
    ],
    statenames: &[],
    exca: &[ExceptionRow {
        state: 1,
        overrides: &[(1, -1)],
        fallback: 0,
    }],
    act: &[7, 6, 4, 2, 3, 5, 1],
    pact: &[-3, -3, -1000, -1000, -5, -1000, -7, -1000],
    pgo: &[0, 6, 3, 4],
    r1: &[0, 1, 1, 2, 3],
    r2: &[0, 1, 2, 1, 3],
    chk: &[-1000, -1, -2, -3, 5, -2, 6, 7],
    def: &[0, -2, 1, 3, 0, 2, 0, 4],
    tok1: &[1],
    tok2: &[2, 3, 4, 5, 6, 7],
    tok3: &[],
    error_messages: &[],
    last: 7,
    private: 57344,
    eof_code: 1,
    err_code: 2,
    initial_stack_size: 16,
};
