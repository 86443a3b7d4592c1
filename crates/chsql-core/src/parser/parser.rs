//! SQL Parser implementation.

use super::error::ParseError;
use super::precedence::{additive_op, comparison_op, membership_op, multiplicative_op, unary_op};
use crate::ast::{
    BinaryOp, DateLiteral, DateLiteralKind, Expr, ExprList, FunctionCall, Ident, Literal,
    NumberKind, NumberLiteral, ParamList, StringLiteral, WhenClause,
};
use crate::dialect::{Dialect, GenericDialect};
use crate::lexer::{IntervalUnit, Keyword, Lexer, Span, Token, TokenKind};

/// How deep expressions and types may nest before parsing gives up.
///
/// Each level costs a chain of grammar frames, so this keeps a parse of
/// hostile input inside a default 2 MiB thread stack.
pub const MAX_NESTING_DEPTH: usize = 48;

/// SQL Parser.
///
/// Holds the scanner and a one-token lookahead. Every `parse_*` method
/// either returns a complete node or the first error it hits.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    dialect: &'a dyn Dialect,
    current: Token<'a>,
    previous: Token<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input using [`GenericDialect`].
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the first token cannot be scanned.
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        Self::with_dialect(input, &GenericDialect)
    }

    /// Creates a new parser that delegates sub-grammars to `dialect`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the first token cannot be scanned.
    pub fn with_dialect(input: &'a str, dialect: &'a dyn Dialect) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            dialect,
            current,
            previous: Token::eof(0),
            depth: 0,
        })
    }

    // --- Primitives ---

    /// Returns the current (not yet consumed) token.
    #[must_use]
    pub const fn current(&self) -> Token<'a> {
        self.current
    }

    /// Returns the most recently consumed token.
    #[must_use]
    pub const fn previous(&self) -> Token<'a> {
        self.previous
    }

    /// Returns the dialect this parser delegates to.
    #[must_use]
    pub fn dialect(&self) -> &'a dyn Dialect {
        self.dialect
    }

    /// Returns the whole input.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.lexer.source()
    }

    /// Returns the token after the current one without consuming anything.
    pub fn peek(&mut self) -> Result<Token<'a>, ParseError> {
        Ok(self.lexer.peek_token()?)
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> Result<Token<'a>, ParseError> {
        let next = self.lexer.next_token()?;
        self.previous = core::mem::replace(&mut self.current, next);
        Ok(self.previous)
    }

    /// Checks if the current token is of the given kind.
    #[must_use]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Checks if the current token is the given keyword.
    #[must_use]
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        self.check(TokenKind::Keyword(keyword))
    }

    /// Returns true once every token has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.current.is_eof()
    }

    /// Consumes the current token if it is of the given kind.
    pub fn try_consume(&mut self, kind: TokenKind) -> Result<Option<Token<'a>>, ParseError> {
        if self.check(kind) {
            self.advance().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Consumes the current token if it is the given keyword.
    pub fn try_consume_keyword(&mut self, keyword: Keyword) -> Result<Option<Token<'a>>, ParseError> {
        self.try_consume(TokenKind::Keyword(keyword))
    }

    /// Expects the current token to be the given kind and consumes it.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(ParseError::unexpected(kind.to_string(), self.current))
        }
    }

    /// Expects the current token to be the given keyword and consumes it.
    pub fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token<'a>, ParseError> {
        if self.check_keyword(keyword) {
            self.advance()
        } else {
            Err(ParseError::unexpected(keyword.as_str(), self.current))
        }
    }

    /// Fails unless every token has been consumed.
    pub fn expect_end(&self) -> Result<(), ParseError> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(ParseError::unexpected("end of input", self.current))
        }
    }

    /// Parses an identifier token.
    pub fn parse_ident(&mut self) -> Result<Ident, ParseError> {
        if !self.check(TokenKind::Ident) {
            return Err(ParseError::unexpected("identifier", self.current));
        }
        Ok(ident_from(self.advance()?))
    }

    /// Parses an identifier, also accepting a keyword token by its text.
    pub(super) fn parse_name(&mut self, expected: &str) -> Result<Ident, ParseError> {
        match self.current.kind {
            TokenKind::Ident | TokenKind::Keyword(_) => Ok(ident_from(self.advance()?)),
            _ => Err(ParseError::unexpected(expected, self.current)),
        }
    }

    /// Parses a string literal.
    pub fn parse_string(&mut self) -> Result<StringLiteral, ParseError> {
        if !self.check(TokenKind::String) {
            return Err(ParseError::unexpected("string literal", self.current));
        }
        let token = self.advance()?;
        Ok(StringLiteral {
            value: token.text.to_string(),
            span: token.span,
        })
    }

    /// Parses an integer or float literal.
    pub fn parse_number(&mut self) -> Result<NumberLiteral, ParseError> {
        let kind = match self.current.kind {
            TokenKind::Integer => NumberKind::Integer,
            TokenKind::Float => NumberKind::Float,
            _ => return Err(ParseError::unexpected("number", self.current)),
        };
        let token = self.advance()?;
        Ok(NumberLiteral {
            text: token.text.to_string(),
            kind,
            base: token.base,
            span: token.span,
        })
    }

    /// Parses a string or numeric literal.
    pub fn parse_literal(&mut self) -> Result<Literal, ParseError> {
        match self.current.kind {
            TokenKind::String => Ok(Literal::String(self.parse_string()?)),
            kind if kind.is_number() => Ok(Literal::Number(self.parse_number()?)),
            _ => Err(ParseError::unexpected("literal", self.current)),
        }
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// Fails with [`ParseError::TooDeeplyNested`] at the current token once
    /// [`MAX_NESTING_DEPTH`] levels are open.
    pub(super) fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            tracing::debug!(target: "chsql::parser", depth = self.depth, span = %self.current.span, "nesting limit reached");
            return Err(ParseError::TooDeeplyNested {
                limit: MAX_NESTING_DEPTH,
                span: self.current.span,
            });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Span from `start` to the end of the last consumed token.
    pub(super) const fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.previous.span.end)
    }

    // --- Expression grammar ---

    /// Parses one expression, optionally followed by `AS <alias>`.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_or()?;
        if self.try_consume_keyword(Keyword::As)?.is_none() {
            return Ok(expr);
        }
        let alias = self.parse_ident()?;
        let span = expr.span().merge(alias.span);
        Ok(Expr::Alias {
            expr: Box::new(expr),
            alias,
            span,
        })
    }

    /// Parses an expression without the alias suffix.
    pub fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_and()?;
        while self.try_consume_keyword(Keyword::Or)?.is_some() {
            let right = self.parse_and()?;
            expr = binary(expr, BinaryOp::Or, right);
        }
        Ok(expr)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_not()?;
        while self.try_consume_keyword(Keyword::And)?.is_some() {
            let right = self.parse_not()?;
            expr = binary(expr, BinaryOp::And, right);
        }
        Ok(expr)
    }

    /// Every nested expression passes through here, so this is where
    /// nesting depth is counted.
    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        self.nested(|parser| {
            let Some(not) = parser.try_consume_keyword(Keyword::Not)? else {
                return parser.parse_is_null();
            };
            let expr = parser.parse_not()?;
            let span = not.span.merge(expr.span());
            Ok(Expr::Not {
                expr: Box::new(expr),
                span,
            })
        })
    }

    fn parse_is_null(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_compare()?;
        if self.try_consume_keyword(Keyword::Is)?.is_none() {
            return Ok(expr);
        }
        let negated = self.try_consume_keyword(Keyword::Not)?.is_some();
        self.expect_keyword(Keyword::Null)?;

        let span = self.span_from(expr.span().start);
        let expr = Box::new(expr);
        Ok(if negated {
            Expr::IsNotNull { expr, span }
        } else {
            Expr::IsNull { expr, span }
        })
    }

    /// Comparison position: a subscript, or at most one comparison.
    fn parse_compare(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_add_sub()?;

        if self.check(TokenKind::LeftBracket) {
            let index = self.parse_bracketed(TokenKind::LeftBracket, TokenKind::RightBracket)?;
            let span = left.span().merge(index.span);
            return Ok(Expr::Subscript {
                expr: Box::new(left),
                index,
                span,
            });
        }

        let (op, negated, global) = match self.current.kind {
            TokenKind::Keyword(keyword @ (Keyword::Not | Keyword::Global)) => {
                self.advance()?;
                let Some(op) = membership_op(self.current.kind) else {
                    return Err(ParseError::ExpectedMembershipOperator {
                        keyword,
                        found: self.current.kind,
                        text: self.current.text.to_string(),
                        span: self.current.span,
                    });
                };
                (op, keyword == Keyword::Not, keyword == Keyword::Global)
            }
            kind => match comparison_op(kind) {
                Some(op) => (op, false, false),
                None => return Ok(left),
            },
        };
        self.advance()?;

        let right = self.parse_add_sub()?;
        let span = left.span().merge(right.span());
        Ok(Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
            negated,
            global,
            span,
        })
    }

    fn parse_add_sub(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_mul_div_mod()?;
        while let Some(op) = additive_op(self.current.kind) {
            self.advance()?;
            let right = self.parse_mul_div_mod()?;
            expr = binary(expr, op, right);
        }
        Ok(expr)
    }

    /// `*`, `/`, `%`, `->` and `::`, or a ternary once `?` shows up.
    fn parse_mul_div_mod(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_unary()?;
        loop {
            if self.check(TokenKind::Question) {
                return self.parse_ternary(expr);
            }
            let Some(op) = multiplicative_op(self.current.kind) else {
                return Ok(expr);
            };
            self.advance()?;
            let right = self.parse_unary()?;
            expr = binary(expr, op, right);
        }
    }

    fn parse_ternary(&mut self, condition: Expr) -> Result<Expr, ParseError> {
        self.expect(TokenKind::Question)?;
        let then_expr = self.parse_expr()?;
        self.expect(TokenKind::Colon)?;
        let else_expr = self.parse_expr()?;
        let span = self.span_from(condition.span().start);
        Ok(Expr::Ternary {
            condition: Box::new(condition),
            then_expr: Box::new(then_expr),
            else_expr: Box::new(else_expr),
            span,
        })
    }

    /// A prefix `+`, `-` or `NOT`.
    ///
    /// When the operand starts with an identifier or `(`, the whole
    /// expression that follows becomes the operand, so `-x + 1` is
    /// `-(x + 1)`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let Some(op) = unary_op(self.current.kind) else {
            return self.parse_column_expr();
        };
        let start = self.advance()?.span.start;
        let operand = if matches!(self.current.kind, TokenKind::Ident | TokenKind::LeftParen) {
            self.parse_expr()?
        } else {
            self.parse_column_expr()?
        };
        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
            span: self.span_from(start),
        })
    }

    /// Parses a primary expression.
    fn parse_column_expr(&mut self) -> Result<Expr, ParseError> {
        let token = self.current;
        match token.kind {
            TokenKind::Keyword(Keyword::Interval) => self.parse_interval(),
            TokenKind::Keyword(keyword @ (Keyword::Date | Keyword::Timestamp)) => {
                if self.peek()?.kind == TokenKind::String {
                    self.parse_date_literal(keyword)
                } else {
                    self.parse_ident_or_function()
                }
            }
            TokenKind::Keyword(Keyword::Cast) => self.parse_cast(),
            TokenKind::Keyword(Keyword::Case) => self.parse_case(),
            TokenKind::Keyword(Keyword::Extract) => self.parse_extract(),
            TokenKind::Ident => self.parse_ident_or_function(),
            TokenKind::String => Ok(Expr::String(self.parse_string()?)),
            TokenKind::Integer | TokenKind::Float => Ok(Expr::Number(self.parse_number()?)),
            TokenKind::LeftParen => {
                if self.peek()?.kind == TokenKind::Keyword(Keyword::Select) {
                    let dialect = self.dialect;
                    dialect.parse_select_query(self)
                } else {
                    Ok(Expr::Params(self.parse_param_list()?))
                }
            }
            TokenKind::Star => {
                self.advance()?;
                Ok(Expr::Ident(Ident::wildcard(token.span)))
            }
            TokenKind::LeftBracket => Ok(Expr::Array(
                self.parse_bracketed(TokenKind::LeftBracket, TokenKind::RightBracket)?,
            )),
            _ => Err(ParseError::unexpected("expression", token)),
        }
    }

    /// `INTERVAL <expr> <unit>`
    fn parse_interval(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect_keyword(Keyword::Interval)?.span.start;
        let value = self.parse_expr()?;
        let (unit, unit_span) = self.parse_interval_unit()?;
        Ok(Expr::Interval {
            value: Box::new(value),
            unit,
            unit_span,
            span: self.span_from(start),
        })
    }

    /// `EXTRACT(<unit> FROM <expr>)`
    fn parse_extract(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect_keyword(Keyword::Extract)?.span.start;
        self.expect(TokenKind::LeftParen)?;
        let (unit, unit_span) = self.parse_interval_unit()?;
        self.expect_keyword(Keyword::From)?;
        let from = self.parse_expr()?;
        self.expect(TokenKind::RightParen)?;
        Ok(Expr::Extract {
            unit,
            unit_span,
            from: Box::new(from),
            span: self.span_from(start),
        })
    }

    fn parse_interval_unit(&mut self) -> Result<(IntervalUnit, Span), ParseError> {
        let ident = self.parse_ident()?;
        match IntervalUnit::from_str(&ident.name) {
            Some(unit) => Ok((unit, ident.span)),
            None => Err(ParseError::UnknownIntervalUnit {
                unit: ident.name,
                span: ident.span,
            }),
        }
    }

    /// `DATE '...'` or `TIMESTAMP '...'`
    fn parse_date_literal(&mut self, keyword: Keyword) -> Result<Expr, ParseError> {
        let kind = if keyword == Keyword::Date {
            DateLiteralKind::Date
        } else {
            DateLiteralKind::Timestamp
        };
        let start = self.advance()?.span.start;
        let value = self.parse_string()?;
        Ok(Expr::Date(DateLiteral {
            kind,
            value,
            span: self.span_from(start),
        }))
    }

    /// `CAST(<expr> AS <type>)`
    fn parse_cast(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect_keyword(Keyword::Cast)?.span.start;
        self.expect(TokenKind::LeftParen)?;
        // Below the alias level, so AS introduces the type.
        let expr = self.parse_or()?;
        self.expect_keyword(Keyword::As)?;
        let data_type = self.parse_column_type()?;
        self.expect(TokenKind::RightParen)?;
        Ok(Expr::Cast {
            expr: Box::new(expr),
            data_type,
            span: self.span_from(start),
        })
    }

    /// `CASE <subject> (WHEN <expr> THEN <expr>)* [ELSE <expr>] END`
    fn parse_case(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect_keyword(Keyword::Case)?.span.start;
        let subject = self.parse_expr()?;

        let mut when_clauses = vec![];
        while let Some(when) = self.try_consume_keyword(Keyword::When)? {
            let condition = self.parse_expr()?;
            self.expect_keyword(Keyword::Then)?;
            let result = self.parse_expr()?;
            when_clauses.push(WhenClause {
                condition,
                result,
                span: self.span_from(when.span.start),
            });
        }

        let else_clause = if self.try_consume_keyword(Keyword::Else)?.is_some() {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };

        self.expect_keyword(Keyword::End)?;

        Ok(Expr::Case {
            subject: Box::new(subject),
            when_clauses,
            else_clause,
            span: self.span_from(start),
        })
    }

    /// A name, a dotted path, or a function call.
    fn parse_ident_or_function(&mut self) -> Result<Expr, ParseError> {
        let name = self.parse_name("identifier")?;

        if self.check(TokenKind::LeftParen) {
            let params = self.parse_param_list()?;
            let span = name.span.merge(params.span);
            return Ok(Expr::Function(FunctionCall { name, params, span }));
        }

        if !self.check(TokenKind::Dot) {
            return Ok(Expr::Ident(name));
        }
        let start = name.span.start;
        let mut parts = vec![name];
        while self.try_consume(TokenKind::Dot)?.is_some() {
            parts.push(self.parse_name("identifier after '.'")?);
        }
        Ok(Expr::Path {
            parts,
            span: self.span_from(start),
        })
    }

    /// `(<list>)` optionally followed by a second `(<list>)`.
    fn parse_param_list(&mut self) -> Result<ParamList, ParseError> {
        let params = self.parse_bracketed(TokenKind::LeftParen, TokenKind::RightParen)?;
        let args = if self.check(TokenKind::LeftParen) {
            Some(self.parse_bracketed(TokenKind::LeftParen, TokenKind::RightParen)?)
        } else {
            None
        };
        let start = params.span.start;
        Ok(ParamList {
            params,
            args,
            span: self.span_from(start),
        })
    }

    /// `open [DISTINCT] [expr (, expr)*] close`
    fn parse_bracketed(&mut self, open: TokenKind, close: TokenKind) -> Result<ExprList, ParseError> {
        let start = self.expect(open)?.span.start;
        let distinct = self.try_consume_keyword(Keyword::Distinct)?.is_some();

        let mut items = vec![];
        while !self.check(close) && !self.is_at_end() {
            items.push(self.parse_expr()?);
            if self.try_consume(TokenKind::Comma)?.is_none() {
                break;
            }
        }
        self.expect(close)?;

        Ok(ExprList {
            items,
            distinct,
            span: self.span_from(start),
        })
    }
}

fn ident_from(token: Token<'_>) -> Ident {
    Ident {
        name: token.text.to_string(),
        quoted: token.quoted,
        span: token.span,
    }
}

fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    let span = left.span().merge(right.span());
    Expr::Binary {
        left: Box::new(left),
        op,
        right: Box::new(right),
        negated: false,
        global: false,
        span,
    }
}
