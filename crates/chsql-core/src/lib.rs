//! # chsql-core
//!
//! A tokenizer and recursive-descent parser for ClickHouse-flavoured SQL
//! expressions and column types.
//!
//! This crate provides:
//! - A hand-written lexer with checkpoint/restore lookahead
//! - An expression grammar with one method per precedence tier
//! - A column type grammar covering scalar, parametric, complex, nested
//!   and enum types, plus compression codecs and column definitions
//!
//! Every AST node carries the span of the source text it came from. Parsing
//! stops at the first error.
//!
//! ## Parsing an expression
//!
//! ```rust
//! use chsql_core::ast::{BinaryOp, Expr};
//!
//! let expr = chsql_core::parse_expression("a AND b OR c").unwrap();
//! assert!(matches!(expr, Expr::Binary { op: BinaryOp::Or, .. }));
//! ```
//!
//! ## Parsing a column type
//!
//! ```rust
//! use chsql_core::ast::ColumnType;
//!
//! let ty = chsql_core::parse_column_type("Enum8('a' = 1, 'b' = 2)").unwrap();
//! let ColumnType::Enum { values, .. } = ty else { unreachable!() };
//! assert_eq!(values[1].label.value, "b");
//! ```
//!
//! ## Custom dialects
//!
//! Sub-queries and `Nested(...)` column lists are delegated to a
//! [`Dialect`]; see [`Parser::with_dialect`].

pub mod ast;
pub mod dialect;
pub mod lexer;
pub mod parser;

pub use ast::{ColumnDef, ColumnType, Expr};
pub use dialect::{Dialect, GenericDialect};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ParseError, Parser};

/// Parses `sql` as one expression, requiring end of input after it.
///
/// # Errors
///
/// Returns the first lexical or syntax error.
pub fn parse_expression(sql: &str) -> Result<Expr, ParseError> {
    parse_all("expression", sql, Parser::parse_expr)
}

/// Parses `sql` as one column type, requiring end of input after it.
///
/// # Errors
///
/// Returns the first lexical or syntax error.
pub fn parse_column_type(sql: &str) -> Result<ColumnType, ParseError> {
    parse_all("column_type", sql, Parser::parse_column_type)
}

/// Parses `sql` as one column definition, requiring end of input after it.
///
/// # Errors
///
/// Returns the first lexical or syntax error.
pub fn parse_column_def(sql: &str) -> Result<ColumnDef, ParseError> {
    parse_all("column_def", sql, Parser::parse_column_def)
}

fn parse_all<'a, T>(
    entry: &'static str,
    sql: &'a str,
    parse: impl FnOnce(&mut Parser<'a>) -> Result<T, ParseError>,
) -> Result<T, ParseError> {
    let _span = tracing::debug_span!(target: "chsql::parser", "parse", entry, len = sql.len()).entered();

    let result = Parser::new(sql).and_then(|mut parser| {
        let node = parse(&mut parser)?;
        parser.expect_end()?;
        Ok(node)
    });
    if let Err(err) = &result {
        tracing::debug!(target: "chsql::parser", error = %err, span = %err.span(), "parse failed");
    }
    result
}
