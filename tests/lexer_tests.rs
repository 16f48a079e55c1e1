// tests/lexer_tests.rs

use colexpr::lexer::{tokenize, Lexer};
use colexpr::token::{ColumnRef, Token, TokenKind};
use pretty_assertions::assert_eq;

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input, 0).iter().map(|t| t.kind).collect()
}

fn open() -> Token {
    Token::new(TokenKind::OpenSquareBracket)
}

fn close() -> Token {
    Token::new(TokenKind::CloseSquareBracket)
}

fn eoi() -> Token {
    Token::end_of_input()
}

// ============================================================================
// End of Input
// ============================================================================

#[test]
fn test_empty_expression() {
    assert_eq!(tokenize("", 0), vec![eoi()]);
}

#[test]
fn test_whitespace_only() {
    assert_eq!(tokenize("   ", 0), vec![eoi()]);
    assert_eq!(tokenize("\t\r\n", 0), vec![eoi()]);
}

#[test]
fn test_single_end_of_input_with_nested_calls() {
    let tokens = tokenize("A(B(C([x])))", 0);
    let count = tokens.iter().filter(|t| t.is_end_of_input()).count();
    assert_eq!(count, 1);
    assert!(tokens.last().unwrap().is_end_of_input());
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_single_char_operators() {
    let test_cases = vec![
        ("+", TokenKind::OperatorAdd),
        ("-", TokenKind::OperatorSub),
        ("*", TokenKind::OperatorMul),
        ("/", TokenKind::OperatorDiv),
        (">", TokenKind::OperatorGt),
        ("<", TokenKind::OperatorLt),
        ("=", TokenKind::OperatorEq),
    ];

    for (input, expected) in test_cases {
        let tokens = tokenize(input, 0);
        assert_eq!(
            tokens,
            vec![Token::with_text(expected, input), eoi()],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_simple_addition() {
    assert_eq!(
        tokenize("1+2", 0),
        vec![
            Token::with_text(TokenKind::Number, "1"),
            Token::with_text(TokenKind::OperatorAdd, "+"),
            Token::with_text(TokenKind::Number, "2"),
            eoi(),
        ]
    );
}

#[test]
fn test_two_char_operators_scan_per_character() {
    assert_eq!(
        kinds("1 >= 2"),
        vec![
            TokenKind::Number,
            TokenKind::OperatorGt,
            TokenKind::OperatorEq,
            TokenKind::Number,
            TokenKind::EndOfInput,
        ]
    );
    assert_eq!(
        kinds("1 <= 2"),
        vec![
            TokenKind::Number,
            TokenKind::OperatorLt,
            TokenKind::OperatorEq,
            TokenKind::Number,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_not_equal_is_never_emitted() {
    // '!' is not a recognised character, so the scan stops there.
    assert_eq!(
        kinds("1 != 2"),
        vec![TokenKind::Number, TokenKind::EndOfInput]
    );
}

// ============================================================================
// Parentheses
// ============================================================================

#[test]
fn test_bare_parentheses_are_swapped() {
    assert_eq!(
        kinds("(1)"),
        vec![
            TokenKind::CloseParenthesis,
            TokenKind::Number,
            TokenKind::OpenParenthesis,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_argument_separator() {
    assert_eq!(
        tokenize("1,2", 0),
        vec![
            Token::with_text(TokenKind::Number, "1"),
            Token::with_text(TokenKind::ArgumentSeparator, ","),
            Token::with_text(TokenKind::Number, "2"),
            eoi(),
        ]
    );
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numbers() {
    let test_cases = vec![
        ("0", "0"),
        ("42", "42"),
        ("1.5", "1.5"),
        ("3.14159", "3.14159"),
        ("1.2.3", "1.2.3"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            tokenize(input, 0),
            vec![Token::with_text(TokenKind::Number, expected), eoi()],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_trailing_dot_not_consumed() {
    // The dot is then an unexpected character.
    assert_eq!(
        tokenize("1.", 0),
        vec![Token::with_text(TokenKind::Number, "1"), eoi()]
    );
}

#[test]
fn test_number_followed_by_name() {
    assert_eq!(
        tokenize("2x", 0),
        vec![
            Token::with_text(TokenKind::Number, "2"),
            Token::function("x", 1, 2),
            eoi(),
        ]
    );
}

#[test]
fn test_negative_number_is_operator_then_number() {
    assert_eq!(
        kinds("-5"),
        vec![TokenKind::OperatorSub, TokenKind::Number, TokenKind::EndOfInput]
    );
}

// ============================================================================
// Columns
// ============================================================================

#[test]
fn test_table_column() {
    assert_eq!(
        tokenize("[orders.total]", 0),
        vec![
            open(),
            Token::column(
                ColumnRef {
                    table: Some("orders".to_string()),
                    column: "total".to_string(),
                },
                1,
                13,
            ),
            close(),
            eoi(),
        ]
    );
}

#[test]
fn test_column_without_table() {
    assert_eq!(
        tokenize("[price]", 0),
        vec![
            open(),
            Token::column(
                ColumnRef {
                    table: None,
                    column: "price".to_string(),
                },
                1,
                6,
            ),
            close(),
            eoi(),
        ]
    );
}

#[test]
fn test_column_text_is_verbatim() {
    let tokens = tokenize("[Sales Invoice.grand total]", 0);
    let column = tokens[1].column_ref().unwrap();
    assert_eq!(column.table.as_deref(), Some("Sales Invoice"));
    assert_eq!(column.column, "grand total");
}

#[test]
fn test_empty_brackets() {
    assert_eq!(tokenize("[]", 0), vec![open(), close(), eoi()]);
}

#[test]
fn test_unterminated_bracket() {
    assert_eq!(
        tokenize("[orders.total", 0),
        vec![
            open(),
            Token::column(ColumnRef::parse("orders.total"), 1, 13),
            eoi(),
        ]
    );
}

#[test]
fn test_lone_open_bracket() {
    assert_eq!(tokenize("[", 0), vec![open(), eoi()]);
}

#[test]
fn test_column_arithmetic() {
    assert_eq!(
        kinds("[a] * [b.c] - 1"),
        vec![
            TokenKind::OpenSquareBracket,
            TokenKind::Column,
            TokenKind::CloseSquareBracket,
            TokenKind::OperatorMul,
            TokenKind::OpenSquareBracket,
            TokenKind::Column,
            TokenKind::CloseSquareBracket,
            TokenKind::OperatorSub,
            TokenKind::Number,
            TokenKind::EndOfInput,
        ]
    );
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_strings() {
    let test_cases = vec![
        (r#""paid""#, "paid"),
        ("'draft'", "draft"),
        (r#""it's""#, "it's"),
        (r#"'say "hi"'"#, r#"say "hi""#),
        (r#""a\n""#, r"a\n"),
        ("''", ""),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            tokenize(input, 0),
            vec![Token::with_text(TokenKind::String, expected), eoi()],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_unterminated_string() {
    assert_eq!(tokenize(r#""abc"#, 0), vec![eoi()]);
    assert_eq!(
        tokenize("1 + 'abc", 0),
        vec![
            Token::with_text(TokenKind::Number, "1"),
            Token::with_text(TokenKind::OperatorAdd, "+"),
            eoi(),
        ]
    );
}

#[test]
fn test_string_comparison() {
    assert_eq!(
        tokenize("[status] = 'Paid'", 0),
        vec![
            open(),
            Token::column(ColumnRef::parse("status"), 1, 7),
            close(),
            Token::with_text(TokenKind::OperatorEq, "="),
            Token::with_text(TokenKind::String, "Paid"),
            eoi(),
        ]
    );
}

// ============================================================================
// Functions
// ============================================================================

#[test]
fn test_function_with_column_arguments() {
    assert_eq!(
        tokenize("SUM([a],[b])", 0),
        vec![
            Token::function("SUM", 0, 3),
            Token::new(TokenKind::OpenParenthesis),
            open(),
            Token::column(ColumnRef::parse("a"), 5, 6),
            close(),
            Token::with_text(TokenKind::ArgumentSeparator, ","),
            open(),
            Token::column(ColumnRef::parse("b"), 9, 10),
            close(),
            Token::new(TokenKind::CloseParenthesis),
            eoi(),
        ]
    );
}

#[test]
fn test_function_without_arguments() {
    assert_eq!(
        tokenize("NOW()", 0),
        vec![
            Token::function("NOW", 0, 3),
            Token::new(TokenKind::OpenParenthesis),
            Token::new(TokenKind::CloseParenthesis),
            eoi(),
        ]
    );
}

#[test]
fn test_function_name_chars() {
    let tokens = tokenize("$fn_2()", 0);
    assert_eq!(tokens[0], Token::function("$fn_2", 0, 5));
}

#[test]
fn test_bare_identifier() {
    assert_eq!(tokenize("total", 0), vec![Token::function("total", 0, 5), eoi()]);
}

#[test]
fn test_function_missing_parenthesis_then_operator() {
    assert_eq!(
        tokenize("abs + 1", 0),
        vec![
            Token::function("abs", 0, 3),
            Token::with_text(TokenKind::OperatorAdd, "+"),
            Token::with_text(TokenKind::Number, "1"),
            eoi(),
        ]
    );
}

#[test]
fn test_unclosed_function_call() {
    assert_eq!(
        tokenize("SUM([a]", 0),
        vec![
            Token::function("SUM", 0, 3),
            Token::new(TokenKind::OpenParenthesis),
            open(),
            Token::column(ColumnRef::parse("a"), 5, 6),
            close(),
            eoi(),
        ]
    );
}

#[test]
fn test_nested_call_offsets() {
    let tokens = tokenize("ROUND(AVG([x.y]), 2)", 0);
    assert_eq!(tokens[0], Token::function("ROUND", 0, 5));
    assert_eq!(tokens[2], Token::function("AVG", 6, 9));
    assert_eq!(tokens[5], Token::column(ColumnRef::parse("x.y"), 11, 14));
}

#[test]
fn test_arguments_end_at_first_close_paren() {
    // ROUND's arguments are "AVG([x.y]"; AVG consumes the first ')' and the
    // rest is scanned at the outer level.
    assert_eq!(
        kinds("ROUND(AVG([x.y]), 2)"),
        vec![
            TokenKind::Function,
            TokenKind::OpenParenthesis,
            TokenKind::Function,
            TokenKind::OpenParenthesis,
            TokenKind::OpenSquareBracket,
            TokenKind::Column,
            TokenKind::CloseSquareBracket,
            TokenKind::CloseParenthesis,
            TokenKind::ArgumentSeparator,
            TokenKind::Number,
            TokenKind::OpenParenthesis,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_long_chain_of_bare_names() {
    let tokens = tokenize(&"a+".repeat(5000), 0);
    assert_eq!(tokens.len(), 10_001);
    assert_eq!(tokens[9998], Token::function("a", 9998, 9999));
    assert!(tokens.last().unwrap().is_end_of_input());
}

#[test]
fn test_long_chain_of_bare_names_closed_once() {
    let input = format!("{}1)", "total+".repeat(4000));
    let tokens = tokenize(&input, 0);
    assert_eq!(tokens.len(), 8_003);
    assert_eq!(
        tokens[8_000..].to_vec(),
        vec![
            Token::with_text(TokenKind::Number, "1"),
            Token::new(TokenKind::CloseParenthesis),
            eoi(),
        ]
    );
}

#[test]
fn test_bare_name_region_closes_at_first_paren() {
    assert_eq!(
        kinds("x a) + 1"),
        vec![
            TokenKind::Function,
            TokenKind::Function,
            TokenKind::CloseParenthesis,
            TokenKind::OperatorAdd,
            TokenKind::Number,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_function_in_expression() {
    assert_eq!(
        kinds("[orders.total] + SUM([col], 2)"),
        vec![
            TokenKind::OpenSquareBracket,
            TokenKind::Column,
            TokenKind::CloseSquareBracket,
            TokenKind::OperatorAdd,
            TokenKind::Function,
            TokenKind::OpenParenthesis,
            TokenKind::OpenSquareBracket,
            TokenKind::Column,
            TokenKind::CloseSquareBracket,
            TokenKind::ArgumentSeparator,
            TokenKind::Number,
            TokenKind::CloseParenthesis,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_function_arguments_kind_never_produced() {
    let tokens = tokenize("IF([a] > 1, 'x', COALESCE([b], 0))", 0);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::FunctionArguments));
}

// ============================================================================
// Unexpected Characters
// ============================================================================

#[test]
fn test_unexpected_character_truncates() {
    assert_eq!(
        tokenize("1 + 2 # 3", 0),
        vec![
            Token::with_text(TokenKind::Number, "1"),
            Token::with_text(TokenKind::OperatorAdd, "+"),
            Token::with_text(TokenKind::Number, "2"),
            eoi(),
        ]
    );
}

#[test]
fn test_unexpected_character_inside_arguments_only_drops_arguments() {
    assert_eq!(
        tokenize("F(1 % 2) + 3", 0),
        vec![
            Token::function("F", 0, 1),
            Token::new(TokenKind::OpenParenthesis),
            Token::with_text(TokenKind::Number, "1"),
            Token::new(TokenKind::CloseParenthesis),
            Token::with_text(TokenKind::OperatorAdd, "+"),
            Token::with_text(TokenKind::Number, "3"),
            eoi(),
        ]
    );
}

// ============================================================================
// Offsets and Lexer
// ============================================================================

#[test]
fn test_base_offset_is_added() {
    let tokens = tokenize("[a] + F()", 10);
    assert_eq!(tokens[1].span(), Some((11, 12)));
    assert_eq!(tokens[4].span(), Some((16, 17)));
}

#[test]
fn test_offsets_count_stripped_characters() {
    let input = "1 +\n\tSUM([a],\r\n[t.b])";
    let tokens = tokenize(input, 0);
    assert_eq!(tokens[2], Token::function("SUM", 5, 8));
    assert_eq!(tokens[5], Token::column(ColumnRef::parse("a"), 10, 11));
    assert_eq!(tokens[9], Token::column(ColumnRef::parse("t.b"), 16, 19));
}

#[test]
fn test_only_columns_and_functions_have_offsets() {
    for token in tokenize("F([a], 'b', 1) + 2", 0) {
        let has_span = token.span().is_some();
        let expects_span = matches!(token.kind, TokenKind::Column | TokenKind::Function);
        assert_eq!(has_span, expects_span, "Unexpected offsets on {:?}", token);
    }
}

#[test]
fn test_lexer_matches_tokenize() {
    let input = "MAX([t.a], [t.b]) / 2";
    assert_eq!(Lexer::new(input).tokenize(), tokenize(input, 0));
    assert_eq!(Lexer::with_offset(input, 4).tokenize(), tokenize(input, 4));
}

#[test]
fn test_idempotent() {
    let input = "[orders.total] + SUM([col], 2) = 'x'";
    assert_eq!(tokenize(input, 0), tokenize(input, 0));
}
