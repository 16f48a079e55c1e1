use crate::operators::operator_kind;
use crate::token::{ColumnRef, Token, TokenKind};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

static LINE_CONTROL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\x0C\r\n]").expect("line control pattern is valid"));

/// Tokenizes `expression`, adding `offset` to every reported position.
///
/// Top-level callers pass `0`. Positions always index characters of
/// `expression` as given, including any tabs or line breaks the scanner
/// skips.
pub fn tokenize(expression: &str, offset: usize) -> Vec<Token> {
    Lexer::with_offset(expression, offset).tokenize()
}

/// One-shot scanner over a single expression.
///
/// A function's arguments are scanned as a region that ends at the first `)`
/// after the name (or at the end of the enclosing region). Regions share the
/// input; nothing is copied per call.
pub struct Lexer<'a> {
    expression: &'a str,
    /// Characters left after stripping tab, form feed, CR and LF.
    input: Vec<char>,
    /// Index in `expression` of each character of `input`.
    source_index: Vec<usize>,
    position: usize,
    offset: usize,
    /// First `)` at or after the cursor, `input.len()` if there is none.
    next_close: Option<usize>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(expression: &'a str) -> Self {
        Lexer::with_offset(expression, 0)
    }

    pub fn with_offset(expression: &'a str, offset: usize) -> Self {
        let mut input = Vec::new();
        let mut source_index = Vec::new();
        let mut index = 0;
        let mut kept_from = 0;

        let mut keep = |text: &str, index: &mut usize| {
            for ch in text.chars() {
                input.push(ch);
                source_index.push(*index);
                *index += 1;
            }
        };
        for stripped in LINE_CONTROL.find_iter(expression) {
            keep(&expression[kept_from..stripped.start()], &mut index);
            index += 1;
            kept_from = stripped.end();
        }
        keep(&expression[kept_from..], &mut index);

        Lexer {
            expression,
            input,
            source_index,
            position: 0,
            offset,
            next_close: None,
            tokens: Vec::new(),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn char_before(&self, end: usize) -> Option<char> {
        if self.position < end {
            self.current_char()
        } else {
            None
        }
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn emit(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Absolute `(start, end)` of `input[from..to]` in the original expression.
    fn span(&self, from: usize, to: usize) -> (usize, usize) {
        (
            self.offset + self.source_index[from],
            self.offset + self.source_index[to - 1] + 1,
        )
    }

    /// Runs the scan to completion and returns the tokens, always terminated
    /// by a single end-of-input token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let end = self.input.len();
        self.scan_region(end);
        self.emit(Token::end_of_input());
        self.tokens
    }

    /// Scans `input[position..end]`. An unexpected character abandons the
    /// rest of the region; the cursor is left at `end` either way.
    fn scan_region(&mut self, end: usize) {
        while let Some(ch) = self.char_before(end) {
            if ch.is_whitespace() {
                self.advance();
                continue;
            }

            // Single-character lookup only, so `>=` scans as `>` then `=`.
            if let Some(kind) = operator_kind(ch.encode_utf8(&mut [0u8; 4])) {
                self.emit(Token::with_text(kind, ch));
                self.advance();
                continue;
            }

            match ch {
                // Swapped kinds are part of the token contract.
                ')' => {
                    self.emit(Token::new(TokenKind::OpenParenthesis));
                    self.advance();
                }
                '(' => {
                    self.emit(Token::new(TokenKind::CloseParenthesis));
                    self.advance();
                }
                ',' => {
                    self.emit(Token::with_text(TokenKind::ArgumentSeparator, ","));
                    self.advance();
                }
                c if c.is_ascii_digit() => self.read_number(end),
                '[' => self.read_column(end),
                '"' | '\'' => self.read_string(ch, end),
                c if is_function_char(c) => self.read_function(end),
                _ => {
                    warn!(
                        character = %ch,
                        expression = %self.expression,
                        position = self.offset + self.source_index[self.position],
                        "Unexpected character '{}' while tokenizing expression",
                        ch
                    );
                    break;
                }
            }
        }

        self.position = end;
    }

    fn read_number(&mut self, end: usize) {
        let mut number = String::new();

        while let Some(ch) = self.char_before(end) {
            let is_fraction_point = ch == '.'
                && self.position + 1 < end
                && self.input[self.position + 1].is_ascii_digit();
            if ch.is_ascii_digit() || is_fraction_point {
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        self.emit(Token::with_text(TokenKind::Number, number));
    }

    fn read_column(&mut self, end: usize) {
        self.emit(Token::new(TokenKind::OpenSquareBracket));
        self.advance(); // Consume '['

        let text_start = self.position;
        while let Some(ch) = self.char_before(end) {
            if ch == ']' {
                break;
            }
            self.advance();
        }

        if self.position > text_start {
            let text: String = self.input[text_start..self.position].iter().collect();
            let (start, stop) = self.span(text_start, self.position);
            self.emit(Token::column(ColumnRef::parse(&text), start, stop));
        }

        if self.char_before(end) == Some(']') {
            self.emit(Token::new(TokenKind::CloseSquareBracket));
            self.advance();
        }
    }

    /// Unterminated strings are dropped without a token.
    fn read_string(&mut self, quote: char, end: usize) {
        self.advance(); // Consume opening quote

        let mut result = String::new();
        while let Some(ch) = self.char_before(end) {
            if ch == quote {
                self.advance();
                self.emit(Token::with_text(TokenKind::String, result));
                return;
            }
            result.push(ch);
            self.advance();
        }
    }

    fn read_function(&mut self, end: usize) {
        let name_start = self.position;
        while self.char_before(end).is_some_and(is_function_char) {
            self.advance();
        }
        let name: String = self.input[name_start..self.position].iter().collect();
        let (start, stop) = self.span(name_start, self.position);
        self.emit(Token::function(name, start, stop));

        if self.char_before(end) == Some('(') {
            self.emit(Token::new(TokenKind::OpenParenthesis));
            self.advance();
        }

        // Arguments end at the first ')', not the balancing one. Without a
        // ')' in this region they run to its end, which is where the current
        // scan stops anyway, so scanning simply carries on.
        if let Some(close) = self.first_close_paren(end) {
            self.scan_region(close);
            self.emit(Token::new(TokenKind::CloseParenthesis));
            self.advance();
        }
    }

    /// First `)` in `input[position..end]`.
    ///
    /// No `)` lies between the cursor and a cached hit, so the cache stays
    /// valid until the cursor passes it.
    fn first_close_paren(&mut self, end: usize) -> Option<usize> {
        let position = self.position;
        let close = match self.next_close {
            Some(close) if close >= position => close,
            _ => {
                let close = self.input[position..]
                    .iter()
                    .position(|&c| c == ')')
                    .map_or(self.input.len(), |i| position + i);
                self.next_close = Some(close);
                close
            }
        };
        (close < end).then_some(close)
    }
}

/// Characters allowed in function names.
fn is_function_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

#[test]
fn test_function_offsets_are_absolute() {
    let tokens = tokenize("1 + ROUND([amount], 2)", 0);
    assert_eq!(tokens[2], Token::function("ROUND", 4, 9));
    assert_eq!(
        tokens[5],
        Token::column(ColumnRef::parse("amount"), 11, 17)
    );
}

#[test]
fn test_strips_line_control_characters() {
    let tokens = tokenize("1\t+\r\n2", 0);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number,
            TokenKind::OperatorAdd,
            TokenKind::Number,
            TokenKind::EndOfInput
        ]
    );
}

#[test]
fn test_offsets_index_unstripped_text() {
    let tokens = tokenize("1 +\nSUM([a])", 0);
    assert_eq!(tokens[2], Token::function("SUM", 4, 7));
    assert_eq!(tokens[5], Token::column(ColumnRef::parse("a"), 9, 10));
}

#[test]
fn test_stripped_characters_inside_a_column() {
    let tokens = tokenize("[orders.\ntotal]", 0);
    assert_eq!(
        tokens[1],
        Token::column(ColumnRef::parse("orders.total"), 1, 14)
    );
}
