//! Syntax error messages.
//!
//! In verbose mode the message names the offending token and, when the
//! candidates fit, up to [`MAX_EXPECTED`] tokens that would have been
//! accepted:
//!
//! ```text
//! syntax error: unexpected FROM, expecting SELECT
//! ```
//!
//! Candidates are tokens with a valid shift from the failing state, followed
//! by tokens the state's exception row accepts or reduces on. When a fifth
//! candidate turns up the list is dropped entirely, as Bison does.

use crate::tables::{DefaultAction, Tables};
use smartstring::alias::String;

/// Most expected tokens a message will list.
pub const MAX_EXPECTED: usize = 4;

const PLAIN: &str = "syntax error";

/// Builds the message reported for a syntax error in `state` on `token`.
pub fn syntax_error(tables: &Tables, state: usize, token: i32, verbose: bool) -> String {
    if !verbose {
        return String::from(PLAIN);
    }

    if let Some(msg) = tables.error_message(state, token) {
        return String::from(format!("{}: {}", PLAIN, msg));
    }

    let mut res = String::from(PLAIN);
    res.push_str(": unexpected ");
    res.push_str(&tables.token_name(token));

    match expected_tokens(tables, state) {
        Some(expected) => {
            for (i, tok) in expected.iter().enumerate() {
                res.push_str(if i == 0 { ", expecting " } else { " or " });
                res.push_str(&tables.token_name(*tok));
            }
            res
        }
        None => res,
    }
}

/// Tokens acceptable in `state`, or `None` if they cannot be listed.
fn expected_tokens(tables: &Tables, state: usize) -> Option<Vec<i32>> {
    let mut expected = Vec::with_capacity(MAX_EXPECTED);
    let mut add = |tok: i32| {
        if expected.len() == MAX_EXPECTED {
            return false;
        }
        expected.push(tok);
        true
    };

    let mut tok = Tables::TOK_START;
    while ((tok - 1) as usize) < tables.toknames.len() {
        if tables.shift(state, tok).is_some() && !add(tok) {
            return None;
        }
        tok += 1;
    }

    if tables.default_action(state) == DefaultAction::Deferred {
        if let Some(row) = tables.exception_row(state) {
            for &(tok, action) in row.overrides {
                if tok < Tables::TOK_START || action == 0 {
                    continue;
                }
                if !add(tok) {
                    return None;
                }
            }
            // the state reduces or accepts on anything else
            if row.fallback != 0 {
                return None;
            }
        }
    }

    Some(expected)
}
