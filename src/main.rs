use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use colexpr::cli::{self, CliError, OutputFormat, TokenizeOptions};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "colexpr")]
#[command(about = "colexpr - Tokenize column expressions such as [orders.total] + SUM([tax], 2)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Text => OutputFormat::Text,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize an expression
    Tokenize {
        /// The expression (reads from stdin if not provided)
        expression: Option<String>,

        /// Added to every reported offset
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Print highlight spans instead of tokens
        #[arg(long)]
        highlights: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'colexpr docs' to list categories)
        category: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tokenize {
            expression,
            offset,
            format,
            pretty,
            highlights,
        } => run_tokenize(expression, offset, format, pretty, highlights),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_tokenize(
    expression: Option<String>,
    offset: usize,
    format: Format,
    pretty: bool,
    highlights: bool,
) -> Result<(), CliError> {
    let expression = match expression {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = TokenizeOptions {
        expression,
        offset,
        format: format.into(),
        pretty,
        highlights,
    };

    let rendered = cli::execute_tokenize(&options)?;
    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }
    Ok(())
}
