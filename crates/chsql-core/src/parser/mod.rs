//! SQL Parser
//!
//! A hand-written recursive descent parser: one method per precedence tier
//! for expressions, plus the column type and column definition grammar.

mod error;
mod parser;
mod precedence;
mod types;

pub use error::ParseError;
pub use parser::{Parser, MAX_NESTING_DEPTH};
