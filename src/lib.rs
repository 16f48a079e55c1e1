pub mod cli;
pub mod highlight;
pub mod lexer;
pub mod operators;
pub mod output;
pub mod token;

pub use highlight::{HighlightKind, HighlightSpan};
pub use lexer::{tokenize, Lexer};
pub use output::{to_json, to_json_pretty, to_text};
pub use token::{ColumnRef, Token, TokenKind, TokenValue};
