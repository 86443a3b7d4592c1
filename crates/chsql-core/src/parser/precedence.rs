//! Token to operator tables for each precedence tier.
//!
//! Tiers, loosest first: OR, AND, prefix NOT, IS [NOT] NULL, comparison,
//! additive, multiplicative (with `->`, `::` and the ternary `?`), unary.

use crate::ast::{BinaryOp, UnaryOp};
use crate::lexer::{Keyword, TokenKind};

/// Operators accepted once at comparison position.
#[must_use]
pub const fn comparison_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Eq => Some(BinaryOp::Eq),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::LtEq => Some(BinaryOp::LtEq),
        TokenKind::GtEq => Some(BinaryOp::GtEq),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::DoubleEq => Some(BinaryOp::DoubleEq),
        TokenKind::NotEq => Some(BinaryOp::NotEq),
        TokenKind::LtGt => Some(BinaryOp::LtGt),
        TokenKind::Question => Some(BinaryOp::Query),
        _ => membership_op(kind),
    }
}

/// Operators that may follow `NOT` or `GLOBAL` at comparison position.
#[must_use]
pub const fn membership_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Keyword(Keyword::In) => Some(BinaryOp::In),
        TokenKind::Keyword(Keyword::Like) => Some(BinaryOp::Like),
        TokenKind::Keyword(Keyword::Ilike) => Some(BinaryOp::ILike),
        _ => None,
    }
}

/// Left-associative additive operators.
#[must_use]
pub const fn additive_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

/// Left-associative multiplicative operators, `->` and `::` included.
#[must_use]
pub const fn multiplicative_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Percent => Some(BinaryOp::Mod),
        TokenKind::Arrow => Some(BinaryOp::Arrow),
        TokenKind::Cast => Some(BinaryOp::Cast),
        _ => None,
    }
}

/// Unary prefix operators.
#[must_use]
pub const fn unary_op(kind: TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Plus => Some(UnaryOp::Plus),
        TokenKind::Minus => Some(UnaryOp::Minus),
        TokenKind::Keyword(Keyword::Not) => Some(UnaryOp::Not),
        _ => None,
    }
}
