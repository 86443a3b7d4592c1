//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written lexer for ClickHouse-flavoured SQL
//! that produces tokens on demand, with checkpoint/restore for lookahead.

mod error;
mod keywords;
mod span;
mod token;
mod tokenizer;

pub use error::LexError;
pub use keywords::{IntervalUnit, Keyword};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use tokenizer::{Checkpoint, Lexer};
