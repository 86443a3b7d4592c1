//! Generic SQL dialect.

use super::Dialect;

/// The default dialect: column lists go through
/// [`Parser::parse_column_def_list`](crate::Parser::parse_column_def_list)
/// and sub-queries are captured as raw text.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }
}
