//! Column type, codec and column definition grammar.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    ColumnDef, ColumnProperty, ColumnPropertyKind, ColumnType, CompressionCodec, EnumValue,
    Ident, NumberLiteral,
};
use crate::lexer::{Keyword, TokenKind};

/// Codecs whose name may be followed by a parenthesized level.
const CODECS_WITH_LEVEL: [&str; 2] = ["ZSTD", "LZ4HC"];

impl Parser<'_> {
    /// Parses `<name> ['(' <type arguments> ')']`.
    ///
    /// The first token inside the parentheses picks the form: an
    /// identifier gives a nested column list (for `Nested`) or type
    /// arguments, a string followed by `=` gives enum values, and a
    /// string or integer gives literal parameters.
    pub fn parse_column_type(&mut self) -> Result<ColumnType, ParseError> {
        self.nested(Self::parse_column_type_inner)
    }

    fn parse_column_type_inner(&mut self) -> Result<ColumnType, ParseError> {
        let name = self.parse_name("type name")?;
        if self.try_consume(TokenKind::LeftParen)?.is_none() {
            return Ok(ColumnType::Scalar { name });
        }

        let first = self.current();
        match first.kind {
            TokenKind::Ident | TokenKind::Keyword(_) if name.name == "Nested" => {
                self.parse_nested_type(name)
            }
            TokenKind::Ident | TokenKind::Keyword(_) => self.parse_complex_type(name),
            TokenKind::String if self.peek()?.kind == TokenKind::Eq => self.parse_enum_type(name),
            TokenKind::String | TokenKind::Integer => self.parse_parametric_type(name),
            _ => Err(ParseError::UnexpectedTypeArgument {
                type_name: name.name,
                found: first.kind,
                text: first.text.to_string(),
                span: first.span,
            }),
        }
    }

    /// Parses a bare name used in a column-property position.
    pub fn parse_column_property_type(&mut self) -> Result<ColumnType, ParseError> {
        let name = self.parse_name("property name")?;
        Ok(ColumnType::Property { name })
    }

    fn parse_nested_type(&mut self, name: Ident) -> Result<ColumnType, ParseError> {
        let dialect = self.dialect();
        let columns = dialect.parse_table_columns(self)?;
        self.expect(TokenKind::RightParen)?;
        Ok(ColumnType::Nested {
            span: self.span_from(name.span.start),
            name,
            columns,
        })
    }

    fn parse_complex_type(&mut self, name: Ident) -> Result<ColumnType, ParseError> {
        let mut types = vec![];
        while !self.check(TokenKind::RightParen) && !self.is_at_end() {
            types.push(self.parse_column_type()?);
            if self.try_consume(TokenKind::Comma)?.is_none() {
                break;
            }
        }
        self.expect(TokenKind::RightParen)?;
        Ok(ColumnType::Complex {
            span: self.span_from(name.span.start),
            name,
            types,
        })
    }

    fn parse_enum_type(&mut self, name: Ident) -> Result<ColumnType, ParseError> {
        let mut values = vec![];
        while !self.check(TokenKind::RightParen) && !self.is_at_end() {
            let label = self.parse_string()?;
            self.expect(TokenKind::Eq)?;
            let value = self.parse_enum_value()?;
            values.push(EnumValue {
                span: label.span.merge(value.span),
                label,
                value,
            });
            if self.try_consume(TokenKind::Comma)?.is_none() {
                break;
            }
        }
        self.expect(TokenKind::RightParen)?;
        Ok(ColumnType::Enum {
            span: self.span_from(name.span.start),
            name,
            values,
        })
    }

    fn parse_enum_value(&mut self) -> Result<NumberLiteral, ParseError> {
        if !self.check(TokenKind::Integer) {
            return Err(ParseError::unexpected("integer enum value", self.current()));
        }
        self.parse_number()
    }

    fn parse_parametric_type(&mut self, name: Ident) -> Result<ColumnType, ParseError> {
        let mut params = vec![self.parse_literal()?];
        while self.try_consume(TokenKind::Comma)?.is_some() {
            params.push(self.parse_literal()?);
        }
        self.expect(TokenKind::RightParen)?;
        Ok(ColumnType::Parametric {
            span: self.span_from(name.span.start),
            name,
            params,
        })
    }

    /// Parses an optional `CODEC(<name>[(<level>)])` clause.
    pub fn parse_codec(&mut self) -> Result<Option<CompressionCodec>, ParseError> {
        let Some(codec) = self.try_consume_keyword(Keyword::Codec)? else {
            return Ok(None);
        };
        self.expect(TokenKind::LeftParen)?;
        let name = self.parse_ident()?;

        let takes_level = CODECS_WITH_LEVEL
            .iter()
            .any(|known| known.eq_ignore_ascii_case(&name.name));
        let level = if takes_level && self.try_consume(TokenKind::LeftParen)?.is_some() {
            let level = self.parse_number()?;
            self.expect(TokenKind::RightParen)?;
            Some(level)
        } else {
            None
        };

        self.expect(TokenKind::RightParen)?;
        Ok(Some(CompressionCodec {
            name,
            level,
            span: self.span_from(codec.span.start),
        }))
    }

    /// Parses an optional `DEFAULT`, `MATERIALIZED` or `ALIAS` clause.
    pub fn parse_column_property(&mut self) -> Result<Option<ColumnProperty>, ParseError> {
        let kind = match self.current().as_keyword() {
            Some(Keyword::Default) => ColumnPropertyKind::Default,
            Some(Keyword::Materialized) => ColumnPropertyKind::Materialized,
            Some(Keyword::Alias) => ColumnPropertyKind::Alias,
            _ => return Ok(None),
        };
        let start = self.advance()?.span.start;
        let expr = self.parse_expr()?;
        Ok(Some(ColumnProperty {
            kind,
            expr,
            span: self.span_from(start),
        }))
    }

    /// Parses `<name> [type] [DEFAULT|MATERIALIZED|ALIAS <expr>] [CODEC(...)] [COMMENT '...']`.
    pub fn parse_column_def(&mut self) -> Result<ColumnDef, ParseError> {
        let name = self.parse_name("column name")?;
        let column_type = if self.at_column_clause() {
            None
        } else {
            Some(self.parse_column_type()?)
        };
        let property = self.parse_column_property()?;
        let codec = self.parse_codec()?;
        let comment = if self.try_consume_keyword(Keyword::Comment)?.is_some() {
            Some(self.parse_string()?)
        } else {
            None
        };

        Ok(ColumnDef {
            span: self.span_from(name.span.start),
            name,
            column_type,
            property,
            codec,
            comment,
        })
    }

    /// Parses comma-separated column definitions up to, not including, `)`.
    pub fn parse_column_def_list(&mut self) -> Result<Vec<ColumnDef>, ParseError> {
        let mut columns = vec![];
        while !self.check(TokenKind::RightParen) && !self.is_at_end() {
            columns.push(self.parse_column_def()?);
            if self.try_consume(TokenKind::Comma)?.is_none() {
                break;
            }
        }
        Ok(columns)
    }

    /// True when the column type is omitted.
    fn at_column_clause(&self) -> bool {
        matches!(
            self.current().kind,
            TokenKind::Keyword(
                Keyword::Default
                    | Keyword::Materialized
                    | Keyword::Alias
                    | Keyword::Codec
                    | Keyword::Comment
            ) | TokenKind::Comma
                | TokenKind::RightParen
                | TokenKind::Eof
        )
    }
}
