//! Expression AST types.

use crate::lexer::{IntervalUnit, Span};

use super::ColumnType;

/// An identifier, bare or backtick-quoted.
///
/// The wildcard `*` is represented as an unquoted identifier named `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ident {
    /// The identifier text, without quotes.
    pub name: String,
    /// Whether the identifier was written in backticks.
    pub quoted: bool,
    /// Source span, quotes included.
    pub span: Span,
}

impl Ident {
    /// Creates an unquoted identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            quoted: false,
            span,
        }
    }

    /// Creates the wildcard identifier `*`.
    #[must_use]
    pub fn wildcard(span: Span) -> Self {
        Self::new("*", span)
    }

    /// Returns true for the wildcard `*`.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        !self.quoted && self.name == "*"
    }
}

/// Whether a numeric literal is integer or float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NumberKind {
    /// No decimal point.
    Integer,
    /// Contains a decimal point.
    Float,
}

/// A numeric literal, kept as raw source text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumberLiteral {
    /// Raw text, sign and base prefix included.
    pub text: String,
    /// Integer or float.
    pub kind: NumberKind,
    /// 10 or 16.
    pub base: u32,
    /// Source span.
    pub span: Span,
}

impl NumberLiteral {
    /// Splits the raw text into its sign and its digits, dropping any `0x`.
    fn sign_and_digits(&self) -> (&str, &str) {
        let (sign, rest) = match self.text.as_bytes().first() {
            Some(b'+' | b'-') => self.text.split_at(1),
            _ => ("", self.text.as_str()),
        };
        if self.base == 16 {
            (sign, rest.get(2..).unwrap_or_default())
        } else {
            (sign, rest)
        }
    }

    /// Decodes an integer literal.
    ///
    /// Returns `None` for floats, exponent forms and out-of-range values.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        if self.kind == NumberKind::Float {
            return None;
        }
        let (sign, digits) = self.sign_and_digits();
        i64::from_str_radix(&format!("{sign}{digits}"), self.base).ok()
    }

    /// Decodes the literal as a float.
    ///
    /// Hexadecimal floats are not decoded.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        if self.base == 16 {
            return match self.kind {
                NumberKind::Integer => self.as_i64().map(|v| v as f64),
                NumberKind::Float => None,
            };
        }
        self.text.replace(['p', 'P'], "e").parse().ok()
    }
}

/// A single- or double-quoted string literal. No escapes are processed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StringLiteral {
    /// The text between the quotes.
    pub value: String,
    /// Source span, quotes included.
    pub span: Span,
}

/// The keyword introducing a typed date/time literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DateLiteralKind {
    /// `DATE '...'`
    Date,
    /// `TIMESTAMP '...'`
    Timestamp,
}

/// `DATE '2024-01-01'` or `TIMESTAMP '2024-01-01 00:00:00'`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DateLiteral {
    /// Which keyword was used.
    pub kind: DateLiteralKind,
    /// The string literal.
    pub value: StringLiteral,
    /// From the keyword to the closing quote.
    pub span: Span,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BinaryOp {
    // Logical
    Or,
    And,

    // Comparison
    Eq,
    DoubleEq,
    NotEq,
    LtGt,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Query,

    // Membership and pattern matching
    In,
    Like,
    ILike,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Lambda / map access and cast
    Arrow,
    Cast,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Or => "OR",
            Self::And => "AND",
            Self::Eq => "=",
            Self::DoubleEq => "==",
            Self::NotEq => "!=",
            Self::LtGt => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Query => "?",
            Self::In => "IN",
            Self::Like => "LIKE",
            Self::ILike => "ILIKE",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Arrow => "->",
            Self::Cast => "::",
        }
    }

    /// Returns true for operators that may carry the `NOT`/`GLOBAL` flags.
    #[must_use]
    pub const fn is_membership(&self) -> bool {
        matches!(self, Self::In | Self::Like | Self::ILike)
    }
}

/// Unary prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum UnaryOp {
    /// +
    Plus,
    /// -
    Minus,
    /// NOT, in unary position
    Not,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Not => "NOT",
        }
    }
}

/// A comma-separated expression list between brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExprList {
    /// The items, possibly none.
    pub items: Vec<Expr>,
    /// Whether the list opened with `DISTINCT`.
    pub distinct: bool,
    /// From the opening to the closing bracket.
    pub span: Span,
}

/// A parenthesized list, optionally followed by a second one.
///
/// The second list carries the arguments of a parametric aggregate:
/// in `quantile(0.5)(x)`, `0.5` is a parameter and `x` an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParamList {
    /// The first parenthesized list.
    pub params: ExprList,
    /// The second parenthesized list, if any.
    pub args: Option<ExprList>,
    /// Source span, covering both lists.
    pub span: Span,
}

/// A function call expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FunctionCall {
    /// The function name.
    pub name: Ident,
    /// Parameters and optional arguments.
    pub params: ParamList,
    /// Source span.
    pub span: Span,
}

impl FunctionCall {
    /// Returns the expressions of the final parenthesized list.
    #[must_use]
    pub fn args(&self) -> &[Expr] {
        self.params
            .args
            .as_ref()
            .map_or(&self.params.params.items, |args| &args.items)
    }
}

/// One `WHEN <condition> THEN <result>` arm of a CASE expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WhenClause {
    /// The value compared against the CASE subject.
    pub condition: Expr,
    /// The result when it matches.
    pub result: Expr,
    /// From WHEN to the end of the result.
    pub span: Span,
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expr {
    /// An identifier or the wildcard `*`.
    Ident(Ident),

    /// A qualified name, `db.table.column`.
    Path {
        /// The dotted parts, at least two.
        parts: Vec<Ident>,
        /// Source span.
        span: Span,
    },

    /// A numeric literal.
    Number(NumberLiteral),

    /// A string literal.
    String(StringLiteral),

    /// A typed date/time literal.
    Date(DateLiteral),

    /// `<expr> AS <alias>`
    Alias {
        /// The aliased expression.
        expr: Box<Expr>,
        /// The alias.
        alias: Ident,
        /// Source span.
        span: Span,
    },

    /// A unary prefix expression.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
        /// Source span.
        span: Span,
    },

    /// A binary expression.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expr>,
        /// `NOT IN`, `NOT LIKE`, `NOT ILIKE`.
        negated: bool,
        /// `GLOBAL IN`, `GLOBAL LIKE`, `GLOBAL ILIKE`.
        global: bool,
        /// Source span.
        span: Span,
    },

    /// Prefix logical negation, `NOT <expr>`.
    Not {
        /// The negated expression.
        expr: Box<Expr>,
        /// Source span.
        span: Span,
    },

    /// `<expr> IS NULL`
    IsNull {
        /// The expression to check.
        expr: Box<Expr>,
        /// Source span.
        span: Span,
    },

    /// `<expr> IS NOT NULL`
    IsNotNull {
        /// The expression to check.
        expr: Box<Expr>,
        /// Source span.
        span: Span,
    },

    /// `<condition> ? <then> : <else>`
    Ternary {
        /// The condition.
        condition: Box<Expr>,
        /// Result when true.
        then_expr: Box<Expr>,
        /// Result when false.
        else_expr: Box<Expr>,
        /// Source span.
        span: Span,
    },

    /// `CASE <subject> WHEN ... THEN ... [ELSE ...] END`
    Case {
        /// The subject compared against each WHEN value.
        subject: Box<Expr>,
        /// WHEN/THEN arms, in order.
        when_clauses: Vec<WhenClause>,
        /// ELSE result.
        else_clause: Option<Box<Expr>>,
        /// Source span.
        span: Span,
    },

    /// `CAST(<expr> AS <type>)`
    Cast {
        /// Expression to cast.
        expr: Box<Expr>,
        /// Target type.
        data_type: ColumnType,
        /// Source span.
        span: Span,
    },

    /// `EXTRACT(<unit> FROM <expr>)`
    Extract {
        /// The extracted unit.
        unit: IntervalUnit,
        /// Location of the unit name.
        unit_span: Span,
        /// The source expression.
        from: Box<Expr>,
        /// Source span.
        span: Span,
    },

    /// `INTERVAL <expr> <unit>`
    Interval {
        /// The magnitude.
        value: Box<Expr>,
        /// The unit.
        unit: IntervalUnit,
        /// Location of the unit name.
        unit_span: Span,
        /// Source span.
        span: Span,
    },

    /// A function call.
    Function(FunctionCall),

    /// A parenthesized list, `(a)`, `(a, b)` or `()`.
    Params(ParamList),

    /// An array literal, `[a, b]`.
    Array(ExprList),

    /// `<expr>[<index>, ...]`
    Subscript {
        /// The subscripted expression.
        expr: Box<Expr>,
        /// The bracketed index list.
        index: ExprList,
        /// Source span.
        span: Span,
    },

    /// A parenthesized sub-query, kept as raw text.
    Subquery {
        /// Source text between the outer parentheses.
        sql: String,
        /// Source span, parentheses included.
        span: Span,
    },
}

impl Expr {
    /// Returns the source span of the expression.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Ident(ident) => ident.span,
            Self::Number(number) => number.span,
            Self::String(string) => string.span,
            Self::Date(date) => date.span,
            Self::Function(call) => call.span,
            Self::Params(list) => list.span,
            Self::Array(list) => list.span,
            Self::Path { span, .. }
            | Self::Alias { span, .. }
            | Self::Unary { span, .. }
            | Self::Binary { span, .. }
            | Self::Not { span, .. }
            | Self::IsNull { span, .. }
            | Self::IsNotNull { span, .. }
            | Self::Ternary { span, .. }
            | Self::Case { span, .. }
            | Self::Cast { span, .. }
            | Self::Extract { span, .. }
            | Self::Interval { span, .. }
            | Self::Subscript { span, .. }
            | Self::Subquery { span, .. } => *span,
        }
    }

    /// Returns the identifier if this is a bare identifier.
    #[must_use]
    pub const fn as_ident(&self) -> Option<&Ident> {
        match self {
            Self::Ident(ident) => Some(ident),
            _ => None,
        }
    }
}
