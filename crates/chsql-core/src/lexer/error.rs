//! Lexical errors.

use super::Span;

/// An error raised while scanning source text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A numeric literal with no digits, a second `.` or exponent, or an
    /// identifier character glued to its end.
    #[error("invalid number `{text}` at {span}")]
    InvalidNumber {
        /// The text scanned so far.
        text: String,
        /// Location of the literal.
        span: Span,
    },

    /// An exponent marker not followed by at least one digit.
    #[error("exponent part of `{text}` should contain at least one digit at {span}")]
    MalformedExponent {
        /// The text scanned so far.
        text: String,
        /// Location of the literal.
        span: Span,
    },

    /// A backtick-quoted identifier with no closing backtick.
    #[error("unterminated quoted identifier `{text}` at {span}")]
    UnterminatedQuotedIdent {
        /// The text after the opening backtick.
        text: String,
        /// From the opening backtick to end of input.
        span: Span,
    },

    /// A string literal with no closing quote.
    #[error("unterminated string literal at {span}")]
    UnterminatedString {
        /// From the opening quote to end of input.
        span: Span,
    },

    /// A `.` that neither follows an identifier nor starts a number.
    #[error("'.' should follow an identifier at {span}")]
    MisplacedDot {
        /// Location of the dot.
        span: Span,
    },

    /// The token after a field-access `.` does not start an identifier.
    #[error("'.' should be followed by an identifier, found '{found}' at {span}")]
    ExpectedIdentAfterDot {
        /// The offending character.
        found: char,
        /// Location of the offending character.
        span: Span,
    },
}

impl LexError {
    /// Returns the location of the error.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::InvalidNumber { span, .. }
            | Self::MalformedExponent { span, .. }
            | Self::UnterminatedQuotedIdent { span, .. }
            | Self::UnterminatedString { span }
            | Self::MisplacedDot { span }
            | Self::ExpectedIdentAfterDot { span, .. } => *span,
        }
    }
}
