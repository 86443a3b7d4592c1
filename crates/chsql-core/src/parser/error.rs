//! Parser error types.

use crate::lexer::{Keyword, LexError, Span, Token, TokenKind};

/// A parse error.
///
/// Parsing stops at the first error, which is returned unchanged to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The scanner rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token that does not fit the grammar at this position.
    #[error("unexpected token {found} `{text}` at {span}: expected {expected}")]
    UnexpectedToken {
        /// What the grammar was looking for.
        expected: String,
        /// The kind of the offending token.
        found: TokenKind,
        /// The text of the offending token.
        text: String,
        /// Location of the offending token.
        span: Span,
    },

    /// Input ended where the grammar needed more.
    #[error("unexpected end of input at {span}: expected {expected}")]
    UnexpectedEof {
        /// What the grammar was looking for.
        expected: String,
        /// The end-of-input position.
        span: Span,
    },

    /// `INTERVAL` or `EXTRACT` with a unit not in the interval-unit table.
    #[error("unknown interval unit `{unit}` at {span}")]
    UnknownIntervalUnit {
        /// The unit as written.
        unit: String,
        /// Location of the unit.
        span: Span,
    },

    /// `NOT` or `GLOBAL` at comparison position not followed by
    /// `IN`, `LIKE` or `ILIKE`.
    #[error("expected IN, LIKE or ILIKE after {keyword}, found {found} `{text}` at {span}")]
    ExpectedMembershipOperator {
        /// `NOT` or `GLOBAL`.
        keyword: Keyword,
        /// The kind of the offending token.
        found: TokenKind,
        /// The text of the offending token.
        text: String,
        /// Location of the offending token.
        span: Span,
    },

    /// A parenthesized type argument list that starts with a token no
    /// type form accepts.
    #[error("unexpected {found} `{text}` in arguments of type `{type_name}` at {span}")]
    UnexpectedTypeArgument {
        /// The outer type name.
        type_name: String,
        /// The kind of the offending token.
        found: TokenKind,
        /// The text of the offending token.
        text: String,
        /// Location of the offending token.
        span: Span,
    },

    /// Expressions or types nested deeper than the parser allows.
    #[error("nesting deeper than {limit} levels at {span}")]
    TooDeeplyNested {
        /// The nesting limit that was hit.
        limit: usize,
        /// The token that would have opened one level too many.
        span: Span,
    },
}

impl ParseError {
    /// Creates an "expected X" error for `found`.
    ///
    /// At end of input this is [`ParseError::UnexpectedEof`], otherwise
    /// [`ParseError::UnexpectedToken`].
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: Token<'_>) -> Self {
        if found.is_eof() {
            Self::unexpected_eof(expected, found.span)
        } else {
            Self::UnexpectedToken {
                expected: expected.into(),
                found: found.kind,
                text: found.text.to_string(),
                span: found.span,
            }
        }
    }

    /// Creates an "unexpected end of input" error.
    #[must_use]
    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        Self::UnexpectedEof {
            expected: expected.into(),
            span,
        }
    }

    /// Returns the location of the error.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Lex(err) => err.span(),
            Self::UnexpectedToken { span, .. }
            | Self::UnexpectedEof { span, .. }
            | Self::UnknownIntervalUnit { span, .. }
            | Self::ExpectedMembershipOperator { span, .. }
            | Self::UnexpectedTypeArgument { span, .. }
            | Self::TooDeeplyNested { span, .. } => *span,
        }
    }
}
