//! Token data model for column expressions.
//!
//! A token is a classified run of expression text. Every token has a
//! [`TokenKind`]; data-carrying kinds also hold a [`TokenValue`], and the
//! kinds a highlighter cares about (`COLUMN` and `FUNCTION`) carry absolute
//! character offsets into the top-level expression.
//!
//! Tokens serialize to the JSON shape the front-end parser consumes:
//!
//! ```text
//! {"type": "COLUMN", "value": {"table": "orders", "column": "total"}, "start": 1, "end": 13}
//! {"type": "OPERATOR_ADD", "value": "+"}
//! {"type": "END_OF_INPUT"}
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Terminates every token sequence, exactly once.
    #[serde(alias = "EOF")]
    EndOfInput,

    // Literals
    /// Numeric literal, kept as text
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// ```
    Number,

    /// Quoted literal, single or double quotes, no escapes
    ///
    /// # Examples
    /// ```text
    /// "paid"
    /// 'Sales Invoice'
    /// ```
    String,

    // Delimiters
    OpenParenthesis,
    CloseParenthesis,
    OpenSquareBracket,
    CloseSquareBracket,

    /// Comma between function arguments
    ArgumentSeparator,

    // Operators
    /// `+`
    OperatorAdd,
    /// `-`
    OperatorSub,
    /// `*`
    OperatorMul,
    /// `/`
    OperatorDiv,
    /// `>`
    OperatorGt,
    /// `<`
    OperatorLt,
    /// `=`
    OperatorEq,
    /// `!=`, known to the operator table but never scanned
    OperatorNeq,
    /// `>=`, known to the operator table but never scanned
    OperatorGte,
    /// `<=`, known to the operator table but never scanned
    OperatorLte,

    // References
    /// Bracketed column reference
    ///
    /// # Examples
    /// ```text
    /// [orders.total]
    /// [price]
    /// ```
    Column,

    /// Function name
    ///
    /// # Examples
    /// ```text
    /// SUM([amount])
    /// NOW()
    /// ```
    Function,

    /// Reserved for parsers; the tokenizer never produces it.
    FunctionArguments,
}

impl TokenKind {
    pub const ALL: [TokenKind; 21] = [
        TokenKind::EndOfInput,
        TokenKind::Number,
        TokenKind::OpenParenthesis,
        TokenKind::CloseParenthesis,
        TokenKind::OperatorAdd,
        TokenKind::OperatorSub,
        TokenKind::OperatorMul,
        TokenKind::OperatorDiv,
        TokenKind::OperatorGt,
        TokenKind::OperatorLt,
        TokenKind::OperatorEq,
        TokenKind::OperatorNeq,
        TokenKind::OperatorGte,
        TokenKind::OperatorLte,
        TokenKind::OpenSquareBracket,
        TokenKind::CloseSquareBracket,
        TokenKind::Column,
        TokenKind::Function,
        TokenKind::ArgumentSeparator,
        TokenKind::FunctionArguments,
        TokenKind::String,
    ];

    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "END_OF_INPUT",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::OpenParenthesis => "OPEN_PARENTHESIS",
            TokenKind::CloseParenthesis => "CLOSE_PARENTHESIS",
            TokenKind::OpenSquareBracket => "OPEN_SQUARE_BRACKET",
            TokenKind::CloseSquareBracket => "CLOSE_SQUARE_BRACKET",
            TokenKind::ArgumentSeparator => "ARGUMENT_SEPARATOR",
            TokenKind::OperatorAdd => "OPERATOR_ADD",
            TokenKind::OperatorSub => "OPERATOR_SUB",
            TokenKind::OperatorMul => "OPERATOR_MUL",
            TokenKind::OperatorDiv => "OPERATOR_DIV",
            TokenKind::OperatorGt => "OPERATOR_GT",
            TokenKind::OperatorLt => "OPERATOR_LT",
            TokenKind::OperatorEq => "OPERATOR_EQ",
            TokenKind::OperatorNeq => "OPERATOR_NEQ",
            TokenKind::OperatorGte => "OPERATOR_GTE",
            TokenKind::OperatorLte => "OPERATOR_LTE",
            TokenKind::Column => "COLUMN",
            TokenKind::Function => "FUNCTION",
            TokenKind::FunctionArguments => "FUNCTION_ARGUMENTS",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown token kind: '{0}'")]
pub struct UnknownTokenKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "EOF" {
            return Ok(TokenKind::EndOfInput);
        }
        TokenKind::ALL
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownTokenKind(s.to_string()))
    }
}

/// A `[table.column]` or `[column]` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    pub table: Option<String>,
    pub column: String,
}

impl ColumnRef {
    /// Splits bracket text on its first `.`.
    ///
    /// An empty column part (`orders.`) is treated as absent, so the text
    /// before the dot becomes the column name.
    pub fn parse(text: &str) -> Self {
        match text.split_once('.') {
            Some((table, column)) if !column.is_empty() => ColumnRef {
                table: Some(table.to_string()),
                column: column.to_string(),
            },
            Some((table, _)) => ColumnRef {
                table: None,
                column: table.to_string(),
            },
            None => ColumnRef {
                table: None,
                column: text.to_string(),
            },
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{}.{}", table, self.column),
            None => f.write_str(&self.column),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Text(String),
    Column(ColumnRef),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<TokenValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

impl Token {
    /// A token without a value or offsets.
    pub fn new(kind: TokenKind) -> Self {
        Token {
            kind,
            value: None,
            start: None,
            end: None,
        }
    }

    pub fn end_of_input() -> Self {
        Token::new(TokenKind::EndOfInput)
    }

    pub fn with_text(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            value: Some(TokenValue::Text(text.into())),
            ..Token::new(kind)
        }
    }

    pub fn column(column: ColumnRef, start: usize, end: usize) -> Self {
        Token {
            kind: TokenKind::Column,
            value: Some(TokenValue::Column(column)),
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn function(name: impl Into<String>, start: usize, end: usize) -> Self {
        Token {
            kind: TokenKind::Function,
            value: Some(TokenValue::Text(name.into())),
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// String value of text-carrying tokens.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn column_ref(&self) -> Option<&ColumnRef> {
        match &self.value {
            Some(TokenValue::Column(column)) => Some(column),
            _ => None,
        }
    }

    /// `(start, end)` offsets, present on `COLUMN` and `FUNCTION` tokens.
    pub fn span(&self) -> Option<(usize, usize)> {
        self.start.zip(self.end)
    }

    /// Exact value of a `NUMBER` token.
    ///
    /// The scanner accepts literals such as `1.2.3`; those yield `None`.
    pub fn as_decimal(&self) -> Option<Decimal> {
        if self.kind != TokenKind::Number {
            return None;
        }
        self.text().and_then(|text| Decimal::from_str(text).ok())
    }
}

#[test]
fn test_column_ref_split() {
    assert_eq!(
        ColumnRef::parse("orders.total"),
        ColumnRef {
            table: Some("orders".to_string()),
            column: "total".to_string()
        }
    );
    assert_eq!(ColumnRef::parse("price").table, None);
    assert_eq!(ColumnRef::parse("a.b.c").column, "b.c");
    assert_eq!(
        ColumnRef::parse("orders."),
        ColumnRef {
            table: None,
            column: "orders".to_string()
        }
    );
}

#[test]
fn test_kind_names_round_trip() {
    for kind in TokenKind::ALL {
        assert_eq!(kind.as_str().parse::<TokenKind>(), Ok(kind));
    }
    assert_eq!("EOF".parse::<TokenKind>(), Ok(TokenKind::EndOfInput));
    assert!("PLUS".parse::<TokenKind>().is_err());
}

#[test]
fn test_as_decimal() {
    let number = Token::with_text(TokenKind::Number, "1.50");
    assert_eq!(number.as_decimal(), Some(Decimal::new(150, 2)));
    assert_eq!(Token::with_text(TokenKind::Number, "1.2.3").as_decimal(), None);
    assert_eq!(Token::with_text(TokenKind::String, "7").as_decimal(), None);
}
