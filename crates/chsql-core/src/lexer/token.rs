//! Token types for the SQL lexer.

use core::fmt;

use super::{Keyword, Span};

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// End of input.
    Eof,

    // Identifiers and keywords
    /// Identifier, bare or backtick-quoted.
    Ident,
    /// Reserved word.
    Keyword(Keyword),

    // Literals
    /// Integer literal (e.g., 42, -7, 0x1F)
    Integer,
    /// Float literal (e.g., 3.14, .5)
    Float,
    /// String literal, single- or double-quoted
    String,

    // Two-character operators
    /// ::
    Cast,
    /// ->
    Arrow,
    /// ||
    Concat,
    /// ==
    DoubleEq,
    /// !=
    NotEq,
    /// <>
    LtGt,
    /// <=
    LtEq,
    /// >=
    GtEq,

    // Single-character operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// =
    Eq,
    /// <
    Lt,
    /// >
    Gt,
    /// ?
    Question,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,
    /// :
    Colon,

    /// Any other single character (`!`, `|`, `@`, `{`, ...).
    Symbol(char),
}

impl TokenKind {
    /// Maps a single punctuation character to its token kind.
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        match c {
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Star,
            '/' => Self::Slash,
            '%' => Self::Percent,
            '=' => Self::Eq,
            '<' => Self::Lt,
            '>' => Self::Gt,
            '?' => Self::Question,
            '(' => Self::LeftParen,
            ')' => Self::RightParen,
            '[' => Self::LeftBracket,
            ']' => Self::RightBracket,
            ',' => Self::Comma,
            ';' => Self::Semicolon,
            '.' => Self::Dot,
            ':' => Self::Colon,
            other => Self::Symbol(other),
        }
    }

    /// Returns true for integer and float literals.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eof => f.write_str("<eof>"),
            Self::Ident => f.write_str("<ident>"),
            Self::Keyword(kw) => write!(f, "<keyword {kw}>"),
            Self::Integer => f.write_str("<int>"),
            Self::Float => f.write_str("<float>"),
            Self::String => f.write_str("<string>"),
            Self::Cast => f.write_str("'::'"),
            Self::Arrow => f.write_str("'->'"),
            Self::Concat => f.write_str("'||'"),
            Self::DoubleEq => f.write_str("'=='"),
            Self::NotEq => f.write_str("'!='"),
            Self::LtGt => f.write_str("'<>'"),
            Self::LtEq => f.write_str("'<='"),
            Self::GtEq => f.write_str("'>='"),
            Self::Plus => f.write_str("'+'"),
            Self::Minus => f.write_str("'-'"),
            Self::Star => f.write_str("'*'"),
            Self::Slash => f.write_str("'/'"),
            Self::Percent => f.write_str("'%'"),
            Self::Eq => f.write_str("'='"),
            Self::Lt => f.write_str("'<'"),
            Self::Gt => f.write_str("'>'"),
            Self::Question => f.write_str("'?'"),
            Self::LeftParen => f.write_str("'('"),
            Self::RightParen => f.write_str("')'"),
            Self::LeftBracket => f.write_str("'['"),
            Self::RightBracket => f.write_str("']'"),
            Self::Comma => f.write_str("','"),
            Self::Semicolon => f.write_str("';'"),
            Self::Dot => f.write_str("'.'"),
            Self::Colon => f.write_str("':'"),
            Self::Symbol(c) => write!(f, "'{c}'"),
        }
    }
}

/// A token with its span in the source code.
///
/// Tokens borrow their text from the input, so they are `Copy` and a
/// scanner checkpoint costs no allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The token text. Quotes are stripped from strings and quoted
    /// identifiers; everything else is the raw source slice.
    pub text: &'a str,
    /// The location in the source code, delimiters included.
    pub span: Span,
    /// Numeric base (10 or 16). Only meaningful for numeric kinds.
    pub base: u32,
    /// True for backtick-quoted identifiers, which never scan as keywords.
    pub quoted: bool,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self {
            kind,
            text,
            span,
            base: 10,
            quoted: false,
        }
    }

    /// Creates an end-of-input token at `pos`.
    #[must_use]
    pub const fn eof(pos: usize) -> Self {
        Self::new(TokenKind::Eof, "", Span::point(pos))
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this is a keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self.kind, TokenKind::Keyword(_))
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }
}
