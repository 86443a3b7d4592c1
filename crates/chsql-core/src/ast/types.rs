//! Column type and column definition AST types.

use crate::lexer::Span;

use super::{Expr, Ident, NumberLiteral, StringLiteral};

/// A literal type parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Literal {
    /// Numeric parameter, `FixedString(16)`.
    Number(NumberLiteral),
    /// String parameter, `DateTime('UTC')`.
    String(StringLiteral),
}

impl Literal {
    /// Returns the source span of the literal.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Number(number) => number.span,
            Self::String(string) => string.span,
        }
    }
}

/// One `'label' = value` pair of an enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnumValue {
    /// The label.
    pub label: StringLiteral,
    /// The integer value.
    pub value: NumberLiteral,
    /// From the label to the value.
    pub span: Span,
}

/// A column type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ColumnType {
    /// A bare name, `Int32`.
    Scalar {
        /// The type name.
        name: Ident,
    },

    /// A name with literal parameters, `FixedString(16)`, `Decimal(10, 2)`.
    Parametric {
        /// The type name.
        name: Ident,
        /// The parameters, at least one.
        params: Vec<Literal>,
        /// Source span.
        span: Span,
    },

    /// A name with type arguments, `Array(Int32)`, `Map(String, UInt64)`.
    Complex {
        /// The type name.
        name: Ident,
        /// The type arguments.
        types: Vec<ColumnType>,
        /// Source span.
        span: Span,
    },

    /// `Nested(<column definitions>)`
    Nested {
        /// The type name.
        name: Ident,
        /// The nested columns.
        columns: Vec<ColumnDef>,
        /// Source span.
        span: Span,
    },

    /// `Enum8('a' = 1, 'b' = 2)`
    Enum {
        /// The type name.
        name: Ident,
        /// The label/value pairs.
        values: Vec<EnumValue>,
        /// Source span.
        span: Span,
    },

    /// A bare name in a column-property position.
    Property {
        /// The property name.
        name: Ident,
    },
}

impl ColumnType {
    /// Returns the type name.
    #[must_use]
    pub const fn name(&self) -> &Ident {
        match self {
            Self::Scalar { name }
            | Self::Parametric { name, .. }
            | Self::Complex { name, .. }
            | Self::Nested { name, .. }
            | Self::Enum { name, .. }
            | Self::Property { name } => name,
        }
    }

    /// Returns the source span of the type.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Scalar { name } | Self::Property { name } => name.span,
            Self::Parametric { span, .. }
            | Self::Complex { span, .. }
            | Self::Nested { span, .. }
            | Self::Enum { span, .. } => *span,
        }
    }
}

/// `CODEC(<name>[(<level>)])`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompressionCodec {
    /// The codec name.
    pub name: Ident,
    /// Compression level, for codecs that take one.
    pub level: Option<NumberLiteral>,
    /// From CODEC to the closing parenthesis.
    pub span: Span,
}

/// How a column's value is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ColumnPropertyKind {
    /// DEFAULT
    Default,
    /// MATERIALIZED
    Materialized,
    /// ALIAS
    Alias,
}

impl ColumnPropertyKind {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Materialized => "MATERIALIZED",
            Self::Alias => "ALIAS",
        }
    }
}

/// `DEFAULT <expr>`, `MATERIALIZED <expr>` or `ALIAS <expr>`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnProperty {
    /// Which property.
    pub kind: ColumnPropertyKind,
    /// The value expression.
    pub expr: Expr,
    /// Source span.
    pub span: Span,
}

/// A column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnDef {
    /// Column name.
    pub name: Ident,
    /// Column type, absent when a property supplies the value.
    pub column_type: Option<ColumnType>,
    /// DEFAULT / MATERIALIZED / ALIAS clause.
    pub property: Option<ColumnProperty>,
    /// CODEC clause.
    pub codec: Option<CompressionCodec>,
    /// COMMENT clause.
    pub comment: Option<StringLiteral>,
    /// Source span.
    pub span: Span,
}
