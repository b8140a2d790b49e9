//! # Query Parser
//!
//! [`QlParser`] runs the generic engine over [`QL_TABLES`] with a
//! [`QlLexer`] and the [`QlActions`] reduction hooks, and packages the result
//! as a [`QlReport`].

use crate::tables::{ProdID, QL_TABLES};
use crate::{Diagnostic, QlError, QlLexer, QlNode, QlValue, Select};
use parlalr::{Actions, Config, Parser, ParserStats, Reduction, Status};
use smartstring::alias::String;

/// Reduction hooks for the query grammar.
///
/// Completed statements are collected in source order as `stmt` is reduced,
/// so statements finished before a syntax error are kept even if the parse
/// aborts.
#[derive(Debug, Default)]
pub struct QlActions {
    statements: Vec<Select>,
}

impl QlActions {
    pub fn statements(&self) -> &[Select] {
        &self.statements
    }

    pub fn into_statements(self) -> Vec<Select> {
        self.statements
    }
}

fn keyword(value: &QlValue) -> String {
    String::from(value.text())
}

impl Actions<QlValue> for QlActions {
    fn reduce(&mut self, r: Reduction<'_, QlValue>) -> QlValue {
        let Some(prod) = ProdID::from_index(r.prod) else {
            log::warn!("reduction by unknown production {}", r.prod);
            return QlValue::default();
        };
        log::trace!("reduce {} in state {}", prod.label(), r.state);

        match (prod, r.values) {
            (ProdID::Select, [select, from, where_]) => {
                let span = select.span.merge(&where_.span);
                QlValue::new(
                    span,
                    QlNode::Select(Select {
                        span,
                        select: keyword(select),
                        from: keyword(from),
                        where_: keyword(where_),
                    }),
                )
            }
            (ProdID::Stmt, [stmt]) => {
                if let QlNode::Select(select) = &stmt.node {
                    self.statements.push(select.clone());
                }
                QlValue::new(stmt.span, QlNode::None)
            }
            (ProdID::Stmts1, [stmt]) => QlValue::new(stmt.span, QlNode::None),
            (ProdID::Stmts2, [stmts, stmt]) => QlValue::new(stmts.span.merge(&stmt.span), QlNode::None),
            (prod, values) => {
                log::warn!(
                    "production {} reduced with {} values",
                    prod.label(),
                    values.len()
                );
                QlValue::default()
            }
        }
    }
}

/// What a parse of query text produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QlReport {
    pub status: Status,
    /// Syntax errors reported.
    pub errors: usize,
    /// Messages reported through the lexer, with positions.
    pub diagnostics: Vec<Diagnostic>,
    /// Statements completed, in source order.
    pub statements: Vec<Select>,
}

impl QlReport {
    pub fn is_accepted(&self) -> bool {
        self.status == Status::Accepted
    }
}

/// Parser for query text.
///
/// # Example
/// ```rust
/// # use parlalr_ql::{Config, QlParser};
/// let mut parser = QlParser::try_new(Config::default().with_verbose_errors(true))?;
///
/// let report = parser.parse("SELECT FROM WHERE")?;
/// assert!(report.is_accepted());
/// assert_eq!(report.statements.len(), 1);
///
/// let report = parser.parse("SELECT FROM")?;
/// assert!(!report.is_accepted());
/// assert_eq!(
///     report.diagnostics[0].message.as_str(),
///     "syntax error: unexpected $end, expecting WHERE"
/// );
/// # Ok::<(), parlalr_ql::QlError>(())
/// ```
pub struct QlParser {
    parser: Parser<QlValue>,
}

impl QlParser {
    /// Creates a parser, checking the query tables first.
    pub fn try_new(config: Config) -> Result<Self, QlError> {
        QL_TABLES.check()?;
        Ok(Self {
            parser: Parser::new(&QL_TABLES, config),
        })
    }

    pub fn parse(&mut self, input: &str) -> Result<QlReport, QlError> {
        let mut lexer = QlLexer::new(input);
        let mut actions = QlActions::default();
        let outcome = self.parser.parse(&mut lexer, &mut actions)?;
        Ok(QlReport {
            status: outcome.status,
            errors: outcome.errors,
            diagnostics: lexer.into_diagnostics(),
            statements: actions.into_statements(),
        })
    }

    /// Counters of the last parse.
    pub fn stats(&self) -> ParserStats {
        self.parser.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, span};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn verbose() -> QlParser {
        init();
        QlParser::try_new(Config::default().with_verbose_errors(true)).unwrap()
    }

    fn messages(report: &QlReport) -> Vec<&str> {
        report.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    #[test]
    fn accepts_single_statement() {
        let mut parser = verbose();
        let report = parser.parse("SELECT FROM WHERE").unwrap();
        assert!(report.is_accepted());
        assert_eq!(report.status.code(), 0);
        assert_eq!(report.errors, 0);
        assert!(report.diagnostics.is_empty());
        assert_eq!(
            report.statements,
            vec![Select {
                span: span!(0, 0, 0, 17),
                select: "SELECT".into(),
                from: "FROM".into(),
                where_: "WHERE".into(),
            }]
        );
    }

    #[test]
    fn accepts_statement_list_in_order() {
        let mut parser = verbose();
        let report = parser
            .parse("SELECT FROM WHERE\nselect from where -- again\n")
            .unwrap();
        assert!(report.is_accepted());
        assert_eq!(report.statements.len(), 2);
        assert_eq!(report.statements[0].select.as_str(), "SELECT");
        assert_eq!(report.statements[1].select.as_str(), "select");
        assert_eq!(report.statements[1].span, span!(1, 0, 1, 17));
        let stats = parser.stats();
        assert_eq!(stats.shifts, 6);
        assert_eq!(stats.reductions, 6);
        assert_eq!(stats.errors, 0);
    }

    #[test]
    fn reductions_follow_derivation_order() {
        init();
        let mut trail = Vec::new();
        let mut parser = Parser::new(&QL_TABLES, Config::default());
        let mut lexer = QlLexer::new("SELECT FROM WHERE SELECT FROM WHERE");
        let mut record = |r: Reduction<'_, QlValue>| {
            trail.push(r.prod);
            QlValue::default()
        };
        let outcome = parser.parse(&mut lexer, &mut record).unwrap();
        assert!(outcome.is_accepted());
        assert_eq!(trail, vec![4, 3, 1, 4, 3, 2]);
    }

    #[test]
    fn missing_where_at_end_of_input() {
        let mut parser = verbose();
        let report = parser.parse("SELECT FROM").unwrap();
        assert_eq!(report.status, Status::Aborted);
        assert_eq!(report.status.code(), 1);
        assert_eq!(report.errors, 1);
        assert_eq!(
            messages(&report),
            vec!["syntax error: unexpected $end, expecting WHERE"]
        );
        assert_eq!(report.diagnostics[0].span.start, Position::new(0, 11));
        assert!(report.statements.is_empty());
    }

    #[test]
    fn statement_must_start_with_select() {
        let mut parser = verbose();
        let report = parser.parse("FROM").unwrap();
        assert_eq!(report.status, Status::Aborted);
        assert_eq!(
            messages(&report),
            vec!["syntax error: unexpected FROM, expecting SELECT"]
        );
        assert_eq!(report.diagnostics[0].span, span!(0, 0, 0, 4));
    }

    #[test]
    fn empty_input_is_an_error() {
        let mut parser = verbose();
        let report = parser.parse("  -- nothing here\n").unwrap();
        assert_eq!(report.status, Status::Aborted);
        assert_eq!(
            messages(&report),
            vec!["syntax error: unexpected $end, expecting SELECT"]
        );
    }

    #[test]
    fn unknown_words_are_reported_in_context() {
        let mut parser = verbose();
        let report = parser.parse("SELECT users FROM WHERE").unwrap();
        assert_eq!(report.status, Status::Aborted);
        assert_eq!(
            messages(&report),
            vec!["syntax error: unexpected LEX_ERROR, expecting FROM"]
        );
        assert_eq!(report.diagnostics[0].span, span!(0, 7, 0, 12));
    }

    #[test]
    fn completed_statements_survive_abort() {
        let mut parser = verbose();
        let report = parser.parse("SELECT FROM WHERE\nFROM").unwrap();
        assert_eq!(report.status, Status::Aborted);
        assert_eq!(report.statements.len(), 1);
        assert_eq!(
            report.diagnostics[0].to_string(),
            "2:1: syntax error: unexpected FROM, expecting SELECT"
        );
    }

    #[test]
    fn plain_messages_without_verbose() {
        init();
        let mut parser = QlParser::try_new(Config::default()).unwrap();
        let report = parser.parse("SELECT WHERE").unwrap();
        assert_eq!(messages(&report), vec!["syntax error"]);
    }

    #[test]
    fn parser_is_reusable() {
        let mut parser = verbose();
        assert!(!parser.parse("WHERE").unwrap().is_accepted());
        let report = parser.parse("SELECT FROM WHERE").unwrap();
        assert!(report.is_accepted());
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn long_statement_lists_from_a_tiny_stack() {
        init();
        let input = "SELECT FROM WHERE\n".repeat(200);
        let mut parser = QlParser::try_new(
            Config::default()
                .with_verbose_errors(true)
                .with_initial_stack_size(1),
        )
        .unwrap();
        let report = parser.parse(&input).unwrap();
        assert!(report.is_accepted());
        assert_eq!(report.statements.len(), 200);
    }
}
