//! Rendering of token streams.
//!
//! - **JSON** via [`to_json()`] / [`to_json_pretty()`] - the wire shape the
//!   front-end parser consumes
//! - **Text** via [`to_text()`] - one token per line, for terminals
//!
//! # Examples
//!
//! ```
//! use colexpr::{tokenize, output::to_text};
//!
//! let tokens = tokenize("[price] * 2", 0);
//! assert_eq!(
//!     to_text(&tokens),
//!     "OPEN_SQUARE_BRACKET\nCOLUMN price @1..6\nCLOSE_SQUARE_BRACKET\nOPERATOR_MUL *\nNUMBER 2\nEND_OF_INPUT\n"
//! );
//! ```

use crate::token::{Token, TokenValue};
use serde::Serialize;

/// Compact JSON, no whitespace.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// JSON with 2-space indentation.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// One line per token: kind, value, then `@start..end` when the token has
/// offsets.
pub fn to_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(token.kind.as_str());
        match &token.value {
            Some(TokenValue::Text(text)) => {
                out.push(' ');
                out.push_str(text);
            }
            Some(TokenValue::Column(column)) => {
                out.push(' ');
                out.push_str(&column.to_string());
            }
            None => {}
        }
        if let Some((start, end)) = token.span() {
            out.push_str(&format!(" @{}..{}", start, end));
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_json_wire_shape() {
    let tokens = vec![
        Token::column(crate::token::ColumnRef::parse("orders.total"), 1, 13),
        Token::with_text(crate::token::TokenKind::OperatorAdd, "+"),
        Token::end_of_input(),
    ];
    assert_eq!(
        to_json(&tokens).unwrap(),
        r#"[{"type":"COLUMN","value":{"table":"orders","column":"total"},"start":1,"end":13},{"type":"OPERATOR_ADD","value":"+"},{"type":"END_OF_INPUT"}]"#
    );
}

#[test]
fn test_json_accepts_eof_alias() {
    let tokens: Vec<Token> =
        serde_json::from_str(r#"[{"type":"STRING","value":"paid"},{"type":"EOF"}]"#).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::with_text(crate::token::TokenKind::String, "paid"),
            Token::end_of_input()
        ]
    );
}

#[test]
fn test_text_null_table() {
    let tokens = vec![Token::column(crate::token::ColumnRef::parse("price"), 1, 6)];
    assert_eq!(to_text(&tokens), "COLUMN price @1..6\n");
}
