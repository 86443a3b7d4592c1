//! SQL Dialect support.
//!
//! The expression and type grammars hand two constructs to the dialect:
//! the column list inside `Nested(...)` and parenthesized sub-queries.
//! Both hooks receive the live [`Parser`] and drive it through its public
//! primitives.

mod generic;

pub use generic::GenericDialect;

use crate::ast::{ColumnDef, Expr};
use crate::lexer::TokenKind;
use crate::parser::{ParseError, Parser};

/// Trait for SQL dialect-specific behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Parses the column definitions of a `Nested(...)` type.
    ///
    /// Called just after the opening `(`; must stop before the closing
    /// `)`, which the caller consumes.
    fn parse_table_columns(&self, parser: &mut Parser<'_>) -> Result<Vec<ColumnDef>, ParseError> {
        parser.parse_column_def_list()
    }

    /// Parses a sub-query.
    ///
    /// Called with the current token on the opening `(` whose next token
    /// is `SELECT`; must consume through the matching `)`.
    fn parse_select_query(&self, parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
        capture_subquery(parser)
    }
}

/// Consumes a balanced parenthesized group and returns its raw text as an
/// [`Expr::Subquery`].
///
/// # Errors
///
/// Returns `UnexpectedEof` if the group is never closed.
pub fn capture_subquery(parser: &mut Parser<'_>) -> Result<Expr, ParseError> {
    let open = parser.expect(TokenKind::LeftParen)?;
    let mut depth = 1usize;
    loop {
        let token = parser.current();
        match token.kind {
            TokenKind::Eof => return Err(ParseError::unexpected("')'", token)),
            TokenKind::LeftParen => depth += 1,
            TokenKind::RightParen => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
        parser.advance()?;
    }
    let close = parser.advance()?;

    let sql = parser.source()[open.span.end..close.span.start].to_string();
    let span = open.span.merge(close.span);
    tracing::debug!(target: "chsql::parser", %span, len = sql.len(), "captured sub-query");
    Ok(Expr::Subquery { sql, span })
}
