//! Small hand-packed grammars used by the unit tests.
//!
//! Raw codes follow goyacc numbering: grammar tokens start at `PRIVATE + 2`.

use crate::lexer::Lexer;
use crate::tables::{ExceptionRow, Tables};

pub const PRIVATE: i32 = 57344;
pub const A: i32 = PRIVATE + 2;
pub const B: i32 = PRIVATE + 3;
pub const C: i32 = PRIVATE + 4;
pub const D: i32 = PRIVATE + 5;
pub const E: i32 = PRIVATE + 6;

const ACCEPT_ON_END: [ExceptionRow; 1] = [ExceptionRow {
    state: 1,
    overrides: &[(1, -1)],
    fallback: 0,
}];

/// ```text
/// stmts : stmt            (1)
///       | stmts stmt      (2)
/// stmt  : A B C           (3)
///       | error C         (4)
/// ```
pub const RECOVER_TABLES: Tables = Tables {
    toknames: &["$end", "error", "$unk", "A", "B", "C"],
    statenames: &[],
    exca: &ACCEPT_ON_END,
    act: &[4, 6, 3, 7, 1, 8, 2, 0, 5],
    pact: &[-2, -2, -1000, -4, -3, -1000, -1, -1000, -1000],
    pgo: &[0, 4, 6],
    r1: &[0, 1, 1, 2, 2],
    r2: &[0, 1, 2, 3, 2],
    chk: &[-1000, -1, -2, 4, 2, -2, 5, 6, 6],
    def: &[0, -2, 1, 0, 0, 2, 0, 4, 3],
    tok1: &[1],
    tok2: &[2, 3, 4, 5, 6],
    tok3: &[],
    error_messages: &[],
    last: 9,
    private: PRIVATE,
    eof_code: 1,
    err_code: 2,
    initial_stack_size: 16,
};

const fn char_tok1() -> [i32; 128] {
    let mut t = [0; 128];
    t[0] = 1;
    t[b';' as usize] = 4;
    t
}

const CHAR_TOK1: [i32; 128] = char_tok1();

/// ```text
/// x : ';' | KW | X | Y    (1..4)
/// ```
///
/// `';'` is a literal character token, `KW` a private token and `X`/`Y` come
/// through `tok3` as raw codes 1000 and 1002.
pub const CHAR_TABLES: Tables = Tables {
    toknames: &["$end", "error", "$unk", "';'", "KW", "X", "Y"],
    statenames: &[],
    exca: &ACCEPT_ON_END,
    act: &[2, 3, 4, 5, 1],
    pact: &[-4, -1000, -1000, -1000, -1000, -1000],
    pgo: &[0, 4],
    r1: &[0, 1, 1, 1, 1],
    r2: &[0, 1, 1, 1, 1],
    chk: &[-1000, -1, 4, 5, 6, 7],
    def: &[0, -2, 1, 2, 3, 4],
    tok1: &CHAR_TOK1,
    tok2: &[2, 3, 5],
    tok3: &[(1000, 6), (1002, 7)],
    error_messages: &[],
    last: 5,
    private: PRIVATE,
    eof_code: 1,
    err_code: 2,
    initial_stack_size: 16,
};

/// ```text
/// x : A | B | C | D | E   (1..5)
/// ```
pub const CAP_TABLES: Tables = Tables {
    toknames: &["$end", "error", "$unk", "A", "B", "C", "D", "E"],
    statenames: &[],
    exca: &ACCEPT_ON_END,
    act: &[2, 3, 4, 5, 6, 1],
    pact: &[-4, -1000, -1000, -1000, -1000, -1000, -1000],
    pgo: &[0, 5],
    r1: &[0, 1, 1, 1, 1, 1],
    r2: &[0, 1, 1, 1, 1, 1],
    chk: &[-1000, -1, 4, 5, 6, 7, 8],
    def: &[0, -2, 1, 2, 3, 4, 5],
    tok1: &[1],
    tok2: &[2, 3, 4, 5, 6, 7, 8],
    tok3: &[],
    error_messages: &[],
    last: 6,
    private: PRIVATE,
    eof_code: 1,
    err_code: 2,
    initial_stack_size: 16,
};

/// Right-recursive list; every `A` stays on the stack until end of input.
///
/// ```text
/// list : A list           (1)
///      | A                (2)
/// ```
pub const DEEP_TABLES: Tables = Tables {
    toknames: &["$end", "error", "$unk", "A"],
    statenames: &["start", "accept", "after-a", "list"],
    exca: &ACCEPT_ON_END,
    act: &[2, 1, 0, 0, 3],
    pact: &[-4, -1000, -4, -1000],
    pgo: &[0, 1],
    r1: &[0, 1, 1],
    r2: &[0, 2, 1],
    chk: &[-1000, -1, 4, -1],
    def: &[0, -2, 2, 1],
    tok1: &[1],
    tok2: &[2, 3, 4],
    tok3: &[],
    error_messages: &[],
    last: 5,
    private: PRIVATE,
    eof_code: 1,
    err_code: 2,
    initial_stack_size: 16,
};

/// Semantic value used by the tests: positions of the tokens a frame covers.
pub type Trail = Vec<usize>;

/// Replays a fixed list of raw codes, then end of input forever.
#[derive(Debug, Default)]
pub struct VecLexer {
    codes: Vec<i32>,
    pos: usize,
    pub errors: Vec<String>,
}

impl VecLexer {
    pub fn new(codes: &[i32]) -> Self {
        Self {
            codes: codes.to_vec(),
            ..Self::default()
        }
    }

    /// Number of `lex` calls so far.
    pub fn pulled(&self) -> usize {
        self.pos
    }
}

impl Lexer for VecLexer {
    type Value = Trail;

    fn lex(&mut self) -> (i32, Trail) {
        let pos = self.pos;
        self.pos += 1;
        (self.codes.get(pos).copied().unwrap_or(0), vec![pos])
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
