use crate::token::TokenKind;

/// Operator symbols and the token kinds they map to.
///
/// The two-character entries are part of the table so parsers and
/// highlighters can resolve them, but the scanner only ever looks up a
/// single character.
pub const OPERATORS: [(&str, TokenKind); 10] = [
    ("+", TokenKind::OperatorAdd),
    ("-", TokenKind::OperatorSub),
    ("*", TokenKind::OperatorMul),
    ("/", TokenKind::OperatorDiv),
    (">", TokenKind::OperatorGt),
    ("<", TokenKind::OperatorLt),
    ("=", TokenKind::OperatorEq),
    ("!=", TokenKind::OperatorNeq),
    (">=", TokenKind::OperatorGte),
    ("<=", TokenKind::OperatorLte),
];

/// Token kind of an operator symbol.
pub fn operator_kind(symbol: &str) -> Option<TokenKind> {
    OPERATORS
        .iter()
        .find(|(candidate, _)| *candidate == symbol)
        .map(|(_, kind)| *kind)
}

#[test]
fn test_single_char_lookup() {
    assert_eq!(operator_kind("+"), Some(TokenKind::OperatorAdd));
    assert_eq!(operator_kind("="), Some(TokenKind::OperatorEq));
    assert_eq!(operator_kind("%"), None);
    assert_eq!(operator_kind("!"), None);
}

#[test]
fn test_multi_char_entries() {
    assert_eq!(operator_kind("!="), Some(TokenKind::OperatorNeq));
    assert_eq!(operator_kind(">="), Some(TokenKind::OperatorGte));
    assert_eq!(operator_kind("<="), Some(TokenKind::OperatorLte));
    assert_eq!(operator_kind("=="), None);
}
