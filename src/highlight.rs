//! Highlight spans for editors.
//!
//! Only `COLUMN` and `FUNCTION` tokens carry offsets, so those are the only
//! ranges a highlighter can colour from a token stream.

use crate::token::{Token, TokenKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightKind {
    Column,
    Function,
}

/// A `[start, end)` character range of the expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub kind: HighlightKind,
    pub start: usize,
    pub end: usize,
    /// Function name, or the column as `table.column`
    pub label: String,
}

impl HighlightSpan {
    /// Text covered by the span in the expression that was tokenized, or
    /// `None` if the range falls outside it.
    pub fn slice(&self, expression: &str) -> Option<String> {
        if self.start > self.end || self.end > expression.chars().count() {
            return None;
        }
        Some(
            expression
                .chars()
                .skip(self.start)
                .take(self.end - self.start)
                .collect(),
        )
    }
}

/// Spans of every offset-carrying token, in source order.
pub fn spans(tokens: &[Token]) -> Vec<HighlightSpan> {
    tokens
        .iter()
        .filter_map(|token| {
            let (start, end) = token.span()?;
            let (kind, label) = match token.kind {
                TokenKind::Column => (HighlightKind::Column, token.column_ref()?.to_string()),
                TokenKind::Function => (HighlightKind::Function, token.text()?.to_string()),
                _ => return None,
            };
            Some(HighlightSpan {
                kind,
                start,
                end,
                label,
            })
        })
        .collect()
}

#[test]
fn test_spans_in_source_order() {
    let expression = "IF([orders.total] > 100, 'big', 'small')";
    let found = spans(&crate::tokenize(expression, 0));

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].kind, HighlightKind::Function);
    assert_eq!(found[0].slice(expression).as_deref(), Some("IF"));
    assert_eq!(found[1].kind, HighlightKind::Column);
    assert_eq!(found[1].label, "orders.total");
    assert_eq!(found[1].slice(expression).as_deref(), Some("orders.total"));
}

#[test]
fn test_slice_out_of_range() {
    let span = HighlightSpan {
        kind: HighlightKind::Function,
        start: 2,
        end: 9,
        label: "SUM".to_string(),
    };
    assert_eq!(span.slice("SUM"), None);
}

#[test]
fn test_spans_slice_multi_line_expressions() {
    let expression = "1 +\nSUM([a])";
    let found = spans(&crate::tokenize(expression, 0));

    assert_eq!(found[0].slice(expression).as_deref(), Some("SUM"));
    assert_eq!(found[1].slice(expression).as_deref(), Some("a"));
}
