//! Abstract Syntax Tree (AST) types for expressions and column types.
//!
//! Every node carries the [`Span`](crate::lexer::Span) of the source text it
//! was parsed from, and owns its children.

mod expression;
mod types;

pub use expression::{
    BinaryOp, DateLiteral, DateLiteralKind, Expr, ExprList, FunctionCall, Ident, NumberKind,
    NumberLiteral, ParamList, StringLiteral, UnaryOp, WhenClause,
};
pub use types::{
    ColumnDef, ColumnProperty, ColumnPropertyKind, ColumnType, CompressionCodec, EnumValue,
    Literal,
};
