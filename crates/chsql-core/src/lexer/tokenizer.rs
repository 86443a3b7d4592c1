//! SQL tokenizer implementation.

use memchr::{memchr, memchr2, memmem};

use super::{Keyword, LexError, Span, Token, TokenKind};

/// Saved scanner state, taken by [`Lexer::checkpoint`] and handed back to
/// [`Lexer::restore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint<'a> {
    pos: usize,
    last: Option<Token<'a>>,
}

/// A lexer that tokenizes SQL input on demand.
///
/// The lexer remembers the last token it produced: the `.` rules depend on
/// it, and it is part of the state a [`Checkpoint`] captures.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The most recently scanned token.
    last: Option<Token<'a>>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            last: None,
        }
    }

    /// Returns the whole input buffer.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.input
    }

    /// Returns the most recently scanned token.
    #[must_use]
    pub const fn last(&self) -> Option<Token<'a>> {
        self.last
    }

    /// Returns true once the cursor has reached the end of the buffer.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Saves the scanner state.
    #[must_use]
    pub const fn checkpoint(&self) -> Checkpoint<'a> {
        Checkpoint {
            pos: self.pos,
            last: self.last,
        }
    }

    /// Rewinds the scanner to a saved state.
    pub fn restore(&mut self, checkpoint: Checkpoint<'a>) {
        self.pos = checkpoint.pos;
        self.last = checkpoint.last;
    }

    /// Scans the next token without consuming it.
    ///
    /// The scanner state is restored whether or not scanning succeeds.
    pub fn peek_token(&mut self) -> Result<Token<'a>, LexError> {
        let saved = self.checkpoint();
        let result = self.next_token();
        self.restore(saved);
        result
    }

    /// Skips whitespace and comments, then scans and consumes one token.
    ///
    /// At end of input this returns an [`TokenKind::Eof`] token, as many
    /// times as it is called.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        let prev = self.last.take();
        self.skip_whitespace_and_comments();
        let token = self.scan(prev)?;
        tracing::trace!(
            target: "chsql::lexer",
            kind = %token.kind,
            start = token.span.start,
            end = token.span.end,
            "token"
        );
        self.last = Some(token);
        Ok(token)
    }

    /// Tokenizes the rest of the input, up to and including end-of-input.
    pub fn tokenize(&mut self) -> Result<Vec<Token<'a>>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character `n` places after the current one.
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(n)
    }

    /// Skips whitespace and comments until neither applies.
    fn skip_whitespace_and_comments(&mut self) {
        let input = self.input;
        loop {
            while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
                self.pos += c.len_utf8();
            }

            let rest = &input.as_bytes()[self.pos..];

            // -- to end of line
            if rest.starts_with(b"--") {
                self.pos = memchr2(b'\n', b'\r', rest).map_or(input.len(), |i| self.pos + i);
                continue;
            }

            // /* ... */, or to end of input when unclosed
            if rest.starts_with(b"/*") {
                self.pos = memmem::find(&rest[2..], b"*/")
                    .map_or(input.len(), |i| self.pos + 2 + i + 2);
                continue;
            }

            break;
        }
    }

    /// Consumes a fixed-width token of `len` bytes.
    fn fixed(&mut self, kind: TokenKind, len: usize) -> Token<'a> {
        let start = self.pos;
        self.pos += len;
        Token::new(kind, &self.input[start..self.pos], Span::new(start, self.pos))
    }

    /// Scans the token starting at the cursor.
    fn scan(&mut self, prev: Option<Token<'a>>) -> Result<Token<'a>, LexError> {
        let start = self.pos;
        let Some(c) = self.peek() else {
            return Ok(Token::eof(start));
        };

        if prev.is_some_and(|t| t.kind == TokenKind::Dot) && !starts_identifier(c) {
            return Err(LexError::ExpectedIdentAfterDot {
                found: c,
                span: Span::new(start, start + c.len_utf8()),
            });
        }

        match c {
            '>' | '<' | '!' | '=' | '|' => Ok(self.scan_operator(c)),
            '+' | '-' => {
                if self.peek_nth(1).is_some_and(|n| n.is_ascii_digit()) {
                    self.scan_number()
                } else if c == '-' && self.peek_nth(1) == Some('>') {
                    Ok(self.fixed(TokenKind::Arrow, 2))
                } else {
                    Ok(self.fixed(TokenKind::from_char(c), 1))
                }
            }
            ':' if self.peek_nth(1) == Some(':') => Ok(self.fixed(TokenKind::Cast, 2)),
            '.' => {
                if self.peek_nth(1).is_some_and(|n| n.is_ascii_digit()) {
                    self.scan_number()
                } else if prev.is_some_and(|t| t.kind == TokenKind::Ident) {
                    Ok(self.fixed(TokenKind::Dot, 1))
                } else {
                    Err(LexError::MisplacedDot {
                        span: Span::new(start, start + 1),
                    })
                }
            }
            '0'..='9' => self.scan_number(),
            '`' => self.scan_quoted_identifier(),
            '\'' => self.scan_string(b'\''),
            '"' => self.scan_string(b'"'),
            c if c == '$' || is_ident_start(c) => Ok(self.scan_identifier()),
            _ => Ok(self.fixed(TokenKind::from_char(c), c.len_utf8())),
        }
    }

    /// Scans `||`, `<>`, `==`, `>=`, `<=`, `!=`, or the lone first character.
    ///
    /// `|` only pairs with a second `|`; `|=` scans as two tokens.
    fn scan_operator(&mut self, c: char) -> Token<'a> {
        let pair = match (c, self.peek_nth(1)) {
            ('|', Some('|')) => Some(TokenKind::Concat),
            ('<', Some('>')) => Some(TokenKind::LtGt),
            ('=', Some('=')) => Some(TokenKind::DoubleEq),
            ('>', Some('=')) => Some(TokenKind::GtEq),
            ('<', Some('=')) => Some(TokenKind::LtEq),
            ('!', Some('=')) => Some(TokenKind::NotEq),
            _ => None,
        };
        match pair {
            Some(kind) => self.fixed(kind, 2),
            None => self.fixed(TokenKind::from_char(c), 1),
        }
    }

    /// Scans a number: `[+-]? (0x)? digits [.digits] [(e|p)[+-]?digits]`.
    ///
    /// Exponents are only recognised in base 10. Only a `.` makes the
    /// literal a float.
    fn scan_number(&mut self) -> Result<Token<'a>, LexError> {
        let input = self.input;
        let bytes = input.as_bytes();
        let start = self.pos;
        let mut i = start;

        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let mut base = 10;
        if bytes.get(i) == Some(&b'0') && bytes.get(i + 1) == Some(&b'x') {
            i += 2;
            base = 16;
        }

        let mut kind = TokenKind::Integer;
        let mut digits = 0usize;
        let mut seen_exponent = false;
        loop {
            match bytes.get(i).copied() {
                Some(b) if (base == 10 && b.is_ascii_digit()) || (base == 16 && b.is_ascii_hexdigit()) => {
                    i += 1;
                    digits += 1;
                }
                Some(b'.') => {
                    if kind == TokenKind::Float || seen_exponent {
                        return Err(invalid_number(input, start, i + 1));
                    }
                    kind = TokenKind::Float;
                    i += 1;
                }
                Some(b'e' | b'E' | b'p' | b'P') if base == 10 => {
                    if seen_exponent {
                        return Err(invalid_number(input, start, i + 1));
                    }
                    i += 1;
                    if matches!(bytes.get(i), Some(b'+' | b'-')) {
                        i += 1;
                    }
                    if !bytes.get(i).is_some_and(u8::is_ascii_digit) {
                        return Err(LexError::MalformedExponent {
                            text: input[start..i].to_string(),
                            span: Span::new(start, i),
                        });
                    }
                    seen_exponent = true;
                }
                _ => break,
            }
        }

        if let Some(c) = input[i..].chars().next().filter(|&c| c == '$' || is_ident_start(c)) {
            return Err(invalid_number(input, start, i + c.len_utf8()));
        }
        if digits == 0 {
            return Err(invalid_number(input, start, i));
        }

        self.pos = i;
        let mut token = Token::new(kind, &input[start..i], Span::new(start, i));
        token.base = base;
        Ok(token)
    }

    /// Scans an unquoted identifier or keyword, with an optional leading `$`.
    fn scan_identifier(&mut self) -> Token<'a> {
        let start = self.pos;
        let rest = &self.input[start..];
        let prefix = usize::from(rest.starts_with('$'));
        let len = rest[prefix..]
            .char_indices()
            .find(|&(_, c)| !is_ident_part(c))
            .map_or(rest.len(), |(i, _)| prefix + i);
        let text = &rest[..len];
        self.pos = start + len;

        let kind = Keyword::from_str(text).map_or(TokenKind::Ident, TokenKind::Keyword);
        Token::new(kind, text, Span::new(start, self.pos))
    }

    /// Scans a backtick-quoted identifier. The text is taken verbatim.
    fn scan_quoted_identifier(&mut self) -> Result<Token<'a>, LexError> {
        let start = self.pos;
        let body = start + 1;
        let Some(offset) = memchr(b'`', &self.input.as_bytes()[body..]) else {
            return Err(LexError::UnterminatedQuotedIdent {
                text: self.input[body..].to_string(),
                span: Span::new(start, self.input.len()),
            });
        };
        let end = body + offset;
        self.pos = end + 1;

        let mut token = Token::new(TokenKind::Ident, &self.input[body..end], Span::new(start, self.pos));
        token.quoted = true;
        Ok(token)
    }

    /// Scans a string literal up to the matching quote. No escapes.
    fn scan_string(&mut self, quote: u8) -> Result<Token<'a>, LexError> {
        let start = self.pos;
        let body = start + 1;
        // Quotes are ASCII, so the byte search lands on a char boundary.
        let Some(offset) = memchr(quote, &self.input.as_bytes()[body..]) else {
            return Err(LexError::UnterminatedString {
                span: Span::new(start, self.input.len()),
            });
        };
        let end = body + offset;
        self.pos = end + 1;
        Ok(Token::new(TokenKind::String, &self.input[body..end], Span::new(start, self.pos)))
    }
}

fn invalid_number(input: &str, start: usize, end: usize) -> LexError {
    let end = end.min(input.len());
    LexError::InvalidNumber {
        text: input[start..end].to_string(),
        span: Span::new(start, end),
    }
}

/// Characters that can begin an unquoted identifier (besides `$`).
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Characters that can begin any identifier token, quoted or not.
fn starts_identifier(c: char) -> bool {
    is_ident_start(c) || c == '$' || c == '`'
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tokenize(input: &str) -> Vec<Token<'_>> {
        Lexer::new(input)
            .tokenize()
            .unwrap_or_else(|e| panic!("failed to tokenize {input:?}: {e}"))
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn token_texts(input: &str) -> Vec<&str> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    fn lex_err(input: &str) -> LexError {
        Lexer::new(input)
            .tokenize()
            .expect_err(&format!("expected lexical error for {input:?}"))
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(token_kinds("   \n\t\u{a0}\u{2003} "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut lexer = Lexer::new("a");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Ident);
        assert!(lexer.next_token().unwrap().is_eof());
        assert!(lexer.next_token().unwrap().is_eof());
        assert!(lexer.at_end());
    }

    #[test]
    fn test_single_line_comment() {
        assert_eq!(
            token_kinds("a -- comment\nb"),
            vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]
        );
        assert_eq!(token_kinds("a -- trailing"), vec![TokenKind::Ident, TokenKind::Eof]);
    }

    #[test]
    fn test_multi_line_comment() {
        assert_eq!(
            token_kinds("a /* one\ntwo */ b"),
            vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]
        );
        assert_eq!(token_kinds("a /* never closed"), vec![TokenKind::Ident, TokenKind::Eof]);
    }

    #[test]
    fn test_comments_and_whitespace_alternate() {
        assert_eq!(
            token_kinds("/* a */ -- b\n  /* c */\n-- d\n x"),
            vec![TokenKind::Ident, TokenKind::Eof]
        );
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            token_kinds("select FROM wHeRe"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Keyword(Keyword::Where),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(token_texts("foo bar_baz _qux $1 $name 名前"), vec![
            "foo", "bar_baz", "_qux", "$1", "$name", "名前", ""
        ]);
        assert!(tokenize("foo").iter().all(|t| !t.quoted));
    }

    #[test]
    fn test_quoted_identifier_is_never_keyword() {
        let tokens = tokenize("`select` `column name`");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].text, "select");
        assert!(tokens[0].quoted);
        assert_eq!(tokens[0].span, Span::new(0, 8));
        assert_eq!(tokens[1].text, "column name");
    }

    #[test]
    fn test_unterminated_quoted_identifier() {
        assert!(matches!(
            lex_err("`abc"),
            LexError::UnterminatedQuotedIdent { ref text, span } if text == "abc" && span == Span::new(0, 4)
        ));
    }

    #[test]
    fn test_integers() {
        let tokens = tokenize("42 0 -7 +3 0x1F");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Integer; 5].into_iter().chain([TokenKind::Eof]).collect::<Vec<_>>());
        assert_eq!(tokens[2].text, "-7");
        assert_eq!(tokens[3].text, "+3");
        assert_eq!(tokens[4].base, 16);
        assert_eq!(tokens[0].base, 10);
    }

    #[test]
    fn test_floats() {
        assert_eq!(
            token_kinds("3.14 0.5 .5 1. -2.5e-3"),
            vec![
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Eof,
            ]
        );
        assert_eq!(token_texts("-2.5e-3"), vec!["-2.5e-3", ""]);
    }

    #[test]
    fn test_exponent_without_dot_stays_integer() {
        let tokens = tokenize("1e5 2P3");
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[0].text, "1e5");
        assert_eq!(tokens[1].text, "2P3");
    }

    #[test]
    fn test_hex_has_no_exponent() {
        let tokens = tokenize("0x1e5");
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[0].text, "0x1e5");
        assert_eq!(tokens[0].base, 16);
    }

    #[test]
    fn test_malformed_exponent() {
        assert!(matches!(lex_err("1e"), LexError::MalformedExponent { .. }));
        assert!(matches!(lex_err("1e+"), LexError::MalformedExponent { .. }));
        assert!(matches!(lex_err("2.5E-x"), LexError::MalformedExponent { .. }));
    }

    #[test]
    fn test_duplicate_exponent() {
        assert!(matches!(lex_err("1e5e3"), LexError::InvalidNumber { .. }));
    }

    #[test]
    fn test_number_followed_by_identifier_char() {
        assert!(matches!(
            lex_err("123abc"),
            LexError::InvalidNumber { ref text, .. } if text == "123a"
        ));
        assert!(matches!(lex_err("7_"), LexError::InvalidNumber { .. }));
        assert!(matches!(lex_err("0x1g"), LexError::InvalidNumber { .. }));
    }

    #[test]
    fn test_number_without_digits() {
        assert!(matches!(lex_err("0x"), LexError::InvalidNumber { .. }));
        assert!(matches!(lex_err("0x )"), LexError::InvalidNumber { .. }));
    }

    #[test]
    fn test_hex_prefix_is_lower_case_only() {
        assert!(matches!(lex_err("0X1F"), LexError::InvalidNumber { ref text, .. } if text == "0X"));
    }

    #[test]
    fn test_second_dot_is_invalid() {
        assert!(matches!(lex_err("1.2.3"), LexError::InvalidNumber { ref text, .. } if text == "1.2."));
        assert!(matches!(lex_err("1e2.5"), LexError::InvalidNumber { .. }));
    }

    #[test]
    fn test_sign_folds_into_number() {
        assert_eq!(
            token_kinds("1 -2 - 3"),
            vec![
                TokenKind::Integer,
                TokenKind::Integer,
                TokenKind::Minus,
                TokenKind::Integer,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_strings() {
        let tokens = tokenize(r#"'hello' "world" ''"#);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].span, Span::new(0, 7));
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "");
    }

    #[test]
    fn test_string_has_no_escapes() {
        let tokens = tokenize(r"'a\' b");
        assert_eq!(tokens[0].text, r"a\");
        assert_eq!(tokens[1].text, "b");
    }

    #[test]
    fn test_unterminated_string() {
        assert!(matches!(lex_err("'abc"), LexError::UnterminatedString { span } if span == Span::new(0, 4)));
        assert!(matches!(lex_err("\"abc'"), LexError::UnterminatedString { .. }));
    }

    #[test]
    fn test_comparison_operators() {
        assert_eq!(
            token_kinds("= == != <> < <= > >= ||"),
            vec![
                TokenKind::Eq,
                TokenKind::DoubleEq,
                TokenKind::NotEq,
                TokenKind::LtGt,
                TokenKind::Lt,
                TokenKind::LtEq,
                TokenKind::Gt,
                TokenKind::GtEq,
                TokenKind::Concat,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_pipe_only_pairs_with_pipe() {
        assert_eq!(
            token_kinds("|= | !"),
            vec![
                TokenKind::Symbol('|'),
                TokenKind::Eq,
                TokenKind::Symbol('|'),
                TokenKind::Symbol('!'),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_arrow_and_cast() {
        assert_eq!(
            token_kinds("x -> x :: : -"),
            vec![
                TokenKind::Ident,
                TokenKind::Arrow,
                TokenKind::Ident,
                TokenKind::Cast,
                TokenKind::Colon,
                TokenKind::Minus,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            token_kinds("( ) [ ] , ; * / % ? @"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Question,
                TokenKind::Symbol('@'),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_field_access_dot() {
        assert_eq!(
            token_kinds("a.b.`c`"),
            vec![
                TokenKind::Ident,
                TokenKind::Dot,
                TokenKind::Ident,
                TokenKind::Dot,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_dot_must_follow_identifier() {
        assert!(matches!(lex_err(". a"), LexError::MisplacedDot { span } if span == Span::new(0, 1)));
        assert!(matches!(lex_err("f(x).y"), LexError::MisplacedDot { .. }));
        assert!(matches!(lex_err("SELECT.x"), LexError::MisplacedDot { .. }));
    }

    #[test]
    fn test_dot_must_precede_identifier() {
        assert!(matches!(
            lex_err("a.*"),
            LexError::ExpectedIdentAfterDot { found: '*', .. }
        ));
        assert!(matches!(lex_err("a.(b)"), LexError::ExpectedIdentAfterDot { .. }));
    }

    #[test]
    fn test_span_tracking() {
        let tokens = tokenize("SELECT  id");
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(8, 10));
        assert_eq!(tokens[2].span, Span::point(10));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut lexer = Lexer::new("a + b");
        let a = lexer.next_token().unwrap();
        let peeked = lexer.peek_token().unwrap();
        assert_eq!(peeked.kind, TokenKind::Plus);
        assert_eq!(lexer.last(), Some(a));
        assert_eq!(lexer.next_token().unwrap(), peeked);
    }

    #[test]
    fn test_failed_peek_restores_state() {
        let mut lexer = Lexer::new("a 'open");
        lexer.next_token().unwrap();
        let before = lexer.checkpoint();
        assert!(lexer.peek_token().is_err());
        assert_eq!(lexer.checkpoint(), before);
        assert!(matches!(lexer.next_token(), Err(LexError::UnterminatedString { .. })));
    }

    #[test]
    fn test_checkpoint_restore() {
        let mut lexer = Lexer::new("x y z");
        lexer.next_token().unwrap();
        let saved = lexer.checkpoint();
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        lexer.restore(saved);
        assert_eq!(lexer.next_token().unwrap().text, "y");
    }

    proptest! {
        #[test]
        fn test_integer_literals_scan_as_one_token(n in any::<i64>()) {
            let text = n.to_string();
            let tokens = tokenize(&text);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenKind::Integer);
            prop_assert_eq!(tokens[0].text, text.as_str());
        }

        #[test]
        fn test_float_literals_scan_as_one_token(int in 0u32..100_000, frac in 0u32..100_000, exp in proptest::option::of(-30i32..30)) {
            let mut text = format!("{int}.{frac}");
            if let Some(exp) = exp {
                text.push_str(&format!("e{exp}"));
            }
            let tokens = tokenize(&text);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenKind::Float);
            prop_assert_eq!(tokens[0].span.len(), text.len());
        }

        #[test]
        fn test_hex_literals_scan_as_one_token(n in any::<u32>()) {
            let text = format!("0x{n:X}");
            let tokens = tokenize(&text);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].base, 16);
            prop_assert_eq!(tokens[0].text, text.as_str());
        }

        #[test]
        fn test_number_glued_to_identifier_is_rejected(n in 0u32..1_000_000, suffix in "[a-df-oq-zA-DF-OQ-Z_$][a-z0-9]{0,4}") {
            let text = format!("{n}{suffix}");
            prop_assert!(Lexer::new(&text).tokenize().is_err());
        }
    }
}
