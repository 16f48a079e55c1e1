//! Documentation content for the colexpr CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Tokens,
    Limitations,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" => Some(Self::Syntax),
            "tokens" | "token" | "kinds" => Some(Self::Tokens),
            "limitations" | "limits" | "quirks" => Some(Self::Limitations),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"COLEXPR DOCUMENTATION

colexpr splits column expressions such as [orders.total] + SUM([tax], 2) into
the flat token stream consumed by the expression parser and the editor
highlighter.

DOCUMENTATION CATEGORIES

  syntax            Column references, functions, literals and operators
  tokens            Every token kind and the JSON shape it is emitted in
  limitations       Scanner behaviors that parsers must tolerate

QUICK REFERENCE

  [column]          Column of the current table
  [table.column]    Column of a named table
  NAME(args)        Function call
  1.5  "text"       Number and string literals
  + - * / > < =     Operators

Run 'colexpr doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Tokens) => Ok(TOKENS_DOC),
        Some(DocCategory::Limitations) => Ok(LIMITATIONS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Expression Notation

COLUMN REFERENCES
  [column]
  [table.column]
    Text between brackets is split on its first '.'. Without a dot the table
    is null and the whole text names the column.

    Example:
      colexpr tokenize '[orders.total]'
      => COLUMN {"table": "orders", "column": "total"}, start 1, end 13

FUNCTIONS
  NAME(arguments)
    Names use letters, digits, '_' and '$' and must not start with a digit.
    Arguments are tokenized as a nested expression; their offsets still
    point into the full expression.

    Example:
      colexpr tokenize 'SUM([a],[b])'

LITERALS
  42  3.14          Numbers, kept as text
  "paid"  'draft'   Strings, no escape sequences

OPERATORS
  +  -  *  /        Arithmetic
  >  <  =           Comparison

WHITESPACE
  Spaces separate tokens. Tabs, form feeds and line breaks are removed before
  scanning. Offsets still count every character of the expression as
  written, so they stay valid for multi-line input.
"#;

const TOKENS_DOC: &str = r#"TOKENS - Kinds and JSON Shape

Each token is emitted as {"type": KIND, "value": ..., "start": n, "end": n}.
"value" appears only on kinds that carry data, "start"/"end" only on COLUMN
and FUNCTION.

  END_OF_INPUT            Last token of every stream (alias: EOF)
  NUMBER                  value: literal text, e.g. "1.5"
  STRING                  value: text between the quotes
  OPEN_PARENTHESIS
  CLOSE_PARENTHESIS
  OPEN_SQUARE_BRACKET
  CLOSE_SQUARE_BRACKET
  COLUMN                  value: {"table": string|null, "column": string}
  FUNCTION                value: function name
  ARGUMENT_SEPARATOR      value: ","
  OPERATOR_ADD            value: "+"
  OPERATOR_SUB            value: "-"
  OPERATOR_MUL            value: "*"
  OPERATOR_DIV            value: "/"
  OPERATOR_GT             value: ">"
  OPERATOR_LT             value: "<"
  OPERATOR_EQ             value: "="
  OPERATOR_NEQ            reserved, see 'colexpr doc limitations'
  OPERATOR_GTE            reserved
  OPERATOR_LTE            reserved
  FUNCTION_ARGUMENTS      reserved, never emitted
"#;

const LIMITATIONS_DOC: &str = r#"LIMITATIONS - Behaviors Parsers Must Tolerate

ONE CHARACTER PER OPERATOR
  '>=' is emitted as OPERATOR_GT followed by OPERATOR_EQ, '<=' likewise.
  '!' is not a recognised character, so '!=' stops the scan.

BARE PARENTHESES ARE SWAPPED
  Outside a function call, ')' is emitted as OPEN_PARENTHESIS and '(' as
  CLOSE_PARENTHESIS. Parentheses that belong to a function call are emitted
  correctly.

ARGUMENTS END AT THE FIRST ')'
  A function's arguments run to the first ')' after the name, not the
  matching one. In 'A(B(1), 2)' the arguments of A are 'B(1'.

TRUNCATION INSTEAD OF ERRORS
  Unterminated string      no STRING token, scanning resumes at the end
  Unterminated bracket     COLUMN without CLOSE_SQUARE_BRACKET
  Unexpected character     warning logged, rest of the fragment dropped

  Streams may therefore be shorter than the input; END_OF_INPUT is always
  present.
"#;
