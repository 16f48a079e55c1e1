//! Tokenize expressions from the command line

use super::CliError;
use crate::highlight;
use crate::output::{to_json, to_json_pretty, to_text};

/// How tokens are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Options for the tokenize command
#[derive(Debug, Clone, Default)]
pub struct TokenizeOptions {
    /// The expression to tokenize
    pub expression: Option<String>,
    /// Added to every reported offset
    pub offset: usize,
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Emit highlight spans instead of tokens
    pub highlights: bool,
}

/// Tokenize the expression and render the result
pub fn execute_tokenize(options: &TokenizeOptions) -> Result<String, CliError> {
    let expression = options.expression.as_deref().ok_or(CliError::NoInput)?;

    let tokens = crate::tokenize(expression, options.offset);

    if options.highlights {
        let spans = highlight::spans(&tokens);
        return match options.format {
            OutputFormat::Json if options.pretty => Ok(to_json_pretty(&spans)?),
            OutputFormat::Json => Ok(to_json(&spans)?),
            OutputFormat::Text => Ok(spans
                .iter()
                .map(|span| format!("{:?} {} @{}..{}\n", span.kind, span.label, span.start, span.end))
                .collect()),
        };
    }

    match options.format {
        OutputFormat::Json if options.pretty => Ok(to_json_pretty(&tokens)?),
        OutputFormat::Json => Ok(to_json(&tokens)?),
        OutputFormat::Text => Ok(to_text(&tokens)),
    }
}
