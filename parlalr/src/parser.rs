//! The shift-reduce driver.
//!
//! [`Parser::parse`] runs the automaton described by a [`Tables`] value over
//! the tokens of a [`Lexer`], calling an [`Actions`] hook for every reduction.
//! The loop is a dispatch over the parser mode:
//!
//! - `Shifting`: consult the shift table (pulling a lookahead only if the
//!   state needs one) and push the target state;
//! - `Defaulting`: read the default column, resolving deferred states
//!   through the exception table; this yields accept, reduce or error;
//! - `Reducing`: pop the right-hand side, run the hook, push the goto state;
//! - `Recovering`: panic-mode recovery driven by a counter that starts at 3
//!   after an error and decays by one on every ordinary shift.
//!
//! Syntax errors are reported through [`Lexer::error`] once per burst. A parse
//! ends either accepted (possibly after recovered errors) or aborted.

use crate::diagnostics;
use crate::error::ParseError;
use crate::lexer::{Lexer, Lookahead};
use crate::stack::ParseStack;
use crate::tables::{Action, DefaultAction, Tables};

/// Shifts needed after an error before a new error is reported again.
const RECOVERY_SHIFTS: u8 = 3;

/// Per-parser settings.
///
/// `debug` follows the classic yacc levels and is emitted through `log`:
/// 1 reports the state and token of each new error, 2 adds reductions and
/// recovery pops/discards, 3 adds every token read, 4 adds every pushed state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub debug: u8,
    /// Name the offending and expected tokens in error messages.
    pub verbose_errors: bool,
    /// Overrides [`Tables::initial_stack_size`].
    pub initial_stack_size: Option<usize>,
}

impl Config {
    pub fn with_debug(mut self, level: u8) -> Self {
        self.debug = level;
        self
    }

    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    pub fn with_initial_stack_size(mut self, frames: usize) -> Self {
        self.initial_stack_size = Some(frames);
        self
    }
}

/// How a parse ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Accepted,
    Aborted,
}

impl Status {
    /// The yacc result code: 0 for accepted, 1 for aborted.
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            Status::Accepted => 0,
            Status::Aborted => 1,
        }
    }
}

/// Result of one call to [`Parser::parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome<V> {
    pub status: Status,
    /// Syntax errors reported during the parse.
    pub errors: usize,
    /// Semantic value of the start symbol, present only when accepted.
    pub value: Option<V>,
}

impl<V> Outcome<V> {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.status == Status::Accepted
    }
}

/// Everything a reduction hook gets to see.
#[derive(Debug)]
pub struct Reduction<'a, V> {
    /// Production being reduced.
    pub prod: usize,
    /// Values of the right-hand-side symbols, leftmost first.
    pub values: &'a [V],
    /// State the reduction happens in.
    pub state: usize,
    /// Raw code of the buffered lookahead, if one has been read.
    pub lookahead: Option<i32>,
}

/// Semantic actions, one per production.
pub trait Actions<V> {
    /// Builds the value of the left-hand side from the right-hand side.
    fn reduce(&mut self, reduction: Reduction<'_, V>) -> V;
}

impl<V, F> Actions<V> for F
where
    F: FnMut(Reduction<'_, V>) -> V,
{
    fn reduce(&mut self, reduction: Reduction<'_, V>) -> V {
        self(reduction)
    }
}

/// The yacc default action `$$ = $1`; ε-productions get `V::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultActions;

impl<V: Clone + Default> Actions<V> for DefaultActions {
    fn reduce(&mut self, reduction: Reduction<'_, V>) -> V {
        reduction.values.first().cloned().unwrap_or_default()
    }
}

/// Counters for the most recent parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserStats {
    /// Tokens pulled from the lexer.
    pub tokens: usize,
    pub shifts: usize,
    pub reductions: usize,
    pub errors: usize,
    /// Tokens dropped during recovery.
    pub discards: usize,
    /// Largest stack height reached, bottom frame included.
    pub max_depth: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Shifting,
    Defaulting,
    Reducing(usize),
    Recovering,
}

/// An LALR(1) parser over a fixed set of tables.
///
/// A `Parser` may be reused for any number of sequential parses; its stack and
/// lookahead are reset on entry to and on every exit from [`parse`](Self::parse).
/// The tables are shared, so independent parsers over the same grammar can
/// run on different threads.
pub struct Parser<V> {
    tables: &'static Tables,
    config: Config,
    stack: ParseStack<V>,
    lookahead: Lookahead<V>,
    stats: ParserStats,
}

impl<V> Parser<V>
where
    V: Default,
{
    pub fn new(tables: &'static Tables, config: Config) -> Self {
        Self {
            tables,
            stack: ParseStack::with_capacity(Self::stack_size(tables, &config)),
            config,
            lookahead: Lookahead::default(),
            stats: ParserStats::default(),
        }
    }

    fn stack_size(tables: &Tables, config: &Config) -> usize {
        config.initial_stack_size.unwrap_or(tables.initial_stack_size)
    }

    pub fn tables(&self) -> &'static Tables {
        self.tables
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Counters of the last parse.
    pub fn stats(&self) -> ParserStats {
        self.stats.clone()
    }

    /// Raw code of the buffered lookahead token.
    ///
    /// Always `None` outside of a parse.
    pub fn lookahead(&self) -> Option<i32> {
        self.lookahead.raw()
    }

    /// Parses the whole token stream of `lexer`.
    ///
    /// Returns `Ok` with [`Status::Accepted`] or [`Status::Aborted`] for every
    /// input; `Err` is reserved for resource failures.
    pub fn parse<L, A>(&mut self, lexer: &mut L, actions: &mut A) -> Result<Outcome<V>, ParseError>
    where
        L: Lexer<Value = V>,
        A: Actions<V>,
    {
        self.stack = ParseStack::with_capacity(Self::stack_size(self.tables, &self.config));
        self.lookahead.discard();
        self.stats = ParserStats::default();

        let result = self.run(lexer, actions);

        self.stack.clear();
        self.lookahead.discard();
        match &result {
            Ok(outcome) => log::debug!(
                "parse {:?} with {} error(s): {:?}",
                outcome.status,
                outcome.errors,
                self.stats
            ),
            Err(err) => log::debug!("parse failed: {}", err),
        }
        result
    }

    fn run<L, A>(&mut self, lexer: &mut L, actions: &mut A) -> Result<Outcome<V>, ParseError>
    where
        L: Lexer<Value = V>,
        A: Actions<V>,
    {
        let tables = self.tables;
        let mut recovery: u8 = 0;
        let mut errors = 0;

        self.push(0, V::default())?;
        let mut mode = Mode::Shifting;

        loop {
            let state = self.stack.top_state();
            mode = match mode {
                Mode::Shifting => {
                    if tables.is_simple(state) {
                        Mode::Defaulting
                    } else {
                        let token = self.fill(lexer);
                        match tables.shift(state, token) {
                            Some(next) => {
                                let value = self.lookahead.take().unwrap_or_default();
                                self.stats.shifts += 1;
                                recovery = recovery.saturating_sub(1);
                                self.push(next, value)?;
                                Mode::Shifting
                            }
                            None => Mode::Defaulting,
                        }
                    }
                }

                Mode::Defaulting => {
                    let action = match tables.default_action(state) {
                        DefaultAction::Fixed(action) => action,
                        DefaultAction::Deferred => {
                            let token = self.fill(lexer);
                            tables.exception(state, token)
                        }
                    };
                    match action {
                        Action::Accept => {
                            log::trace!("accept in {}", tables.state_name(state));
                            return Ok(Outcome {
                                status: Status::Accepted,
                                errors,
                                value: self.stack.pop_value(),
                            });
                        }
                        Action::Error => Mode::Recovering,
                        Action::Reduce(prod) => Mode::Reducing(prod),
                    }
                }

                Mode::Reducing(prod) => {
                    self.reduce(prod, actions)?;
                    Mode::Shifting
                }

                Mode::Recovering => {
                    let token = self.fill(lexer);
                    if recovery < RECOVERY_SHIFTS {
                        if recovery == 0 {
                            let msg = diagnostics::syntax_error(
                                tables,
                                state,
                                token,
                                self.config.verbose_errors,
                            );
                            lexer.error(&msg);
                            errors += 1;
                            self.stats.errors += 1;
                            if self.config.debug >= 1 {
                                log::debug!(
                                    "{} saw {}",
                                    tables.state_name(state),
                                    tables.token_name(token)
                                );
                            }
                        }
                        recovery = RECOVERY_SHIFTS;

                        match self.find_error_shift() {
                            Some((len, next)) => {
                                self.stack.truncate(len);
                                self.push(next, V::default())?;
                                Mode::Shifting
                            }
                            None => return Ok(self.abort(errors)),
                        }
                    } else {
                        if self.config.debug >= 2 {
                            log::debug!("error recovery discards {}", tables.token_name(token));
                        }
                        if token == tables.eof_code {
                            return Ok(self.abort(errors));
                        }
                        self.lookahead.discard();
                        self.stats.discards += 1;
                        Mode::Shifting
                    }
                }
            };
        }
    }

    /// Buffers a lookahead if none is pending and returns its internal id.
    fn fill<L>(&mut self, lexer: &mut L) -> i32
    where
        L: Lexer<Value = V>,
    {
        if self.lookahead.is_empty() {
            self.stats.tokens += 1;
        }
        self.lookahead.fill(lexer, self.tables, self.config.debug)
    }

    fn push(&mut self, state: usize, value: V) -> Result<(), ParseError> {
        if self.config.debug >= 4 {
            let token = self.lookahead.peek().unwrap_or(-1);
            log::trace!(
                "char {} in {}",
                self.tables.token_name(token),
                self.tables.state_name(state)
            );
        }
        self.stack.push(state, value)?;
        self.stats.max_depth = self.stats.max_depth.max(self.stack.len());
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("stack <{}>", self.stack.dump());
        }
        Ok(())
    }

    fn reduce<A>(&mut self, prod: usize, actions: &mut A) -> Result<(), ParseError>
    where
        A: Actions<V>,
    {
        let tables = self.tables;
        let state = self.stack.top_state();
        if self.config.debug >= 2 {
            log::debug!("reduce {} in:\n\t{}", prod, tables.state_name(state));
        }

        let len = tables.rhs_len(prod);
        let value = actions.reduce(Reduction {
            prod,
            values: self.stack.values(len),
            state,
            lookahead: self.lookahead.raw(),
        });
        self.stack.pop(len);

        let next = tables.goto(self.stack.top_state(), tables.lhs(prod));
        self.stats.reductions += 1;
        self.push(next, value)
    }

    /// Finds the topmost frame whose state shifts `error`.
    ///
    /// Returns the stack length that leaves that frame on top and the state
    /// the error token leads to.
    fn find_error_shift(&self) -> Option<(usize, usize)> {
        for (len, state) in self.stack.states_from_top() {
            if let Some(next) = self.tables.shift(state, self.tables.err_code) {
                return Some((len, next));
            }
            if self.config.debug >= 2 {
                log::debug!("error recovery pops state {}", state);
            }
        }
        None
    }

    fn abort(&self, errors: usize) -> Outcome<V> {
        log::trace!("abort after {} error(s)", errors);
        Outcome {
            status: Status::Aborted,
            errors,
            value: None,
        }
    }
}
