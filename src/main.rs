use std::{
    io::{self, Read},
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use querylex::{
    lexer::{
        lexer::Lexer,
        options::{GreaterThanMode, LexerOptions, LineBreakPolicy, UnknownCharacterPolicy},
        tokens::Token,
    },
    render_error,
};
use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

/// Tokenize a query and print one `KIND:text` token per line.
#[derive(Parser, Debug)]
#[command(name = "querylex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a query string", long_about = None)]
struct Cli {
    /// Query to tokenize; read from stdin when omitted
    query: Option<String>,

    /// Reject characters outside the query language instead of dropping them
    #[arg(long, env = "QUERYLEX_STRICT")]
    strict: bool,

    /// Emit `<`/`<=` for `>`/`>=` like older releases did
    #[arg(long, env = "QUERYLEX_LEGACY_GT")]
    legacy_gt: bool,

    /// Treat line breaks as whitespace instead of dropping them
    #[arg(long, env = "QUERYLEX_SEPARATE_LINES")]
    separate_lines: bool,

    /// Report every error and keep the tokens that survive
    #[arg(long)]
    recover: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> LexerOptions {
        let mut options = LexerOptions::default();
        if self.strict {
            options = options.with_unknown_characters(UnknownCharacterPolicy::Reject);
        }
        if self.legacy_gt {
            options = options.with_greater_than(GreaterThanMode::Legacy);
        }
        if self.separate_lines {
            options = options.with_line_breaks(LineBreakPolicy::Separate);
        }
        options
    }
}

fn init_logging(verbose: bool) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{}", token);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(error) = init_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", error);
        return ExitCode::FAILURE;
    }

    let query = match &cli.query {
        Some(query) => query.clone(),
        None => {
            let mut buffer = String::new();
            if let Err(error) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Failed to read query from stdin: {}", error);
                return ExitCode::FAILURE;
            }
            buffer
        }
    };
    let source_name = if cli.query.is_some() { "query" } else { "<stdin>" };

    let lexer = Lexer::new(cli.options());
    let start = Instant::now();

    if cli.recover {
        let (tokens, errors) = lexer.tokenize_recovering(&query);
        eprintln!("Tokenized in {:?}", start.elapsed());

        for error in &errors {
            eprintln!("{}", render_error(error, &query, source_name));
        }
        print_tokens(&tokens);

        return if errors.is_empty() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    match lexer.tokenize(&query) {
        Ok(tokens) => {
            eprintln!("Tokenized in {:?}", start.elapsed());
            print_tokens(&tokens);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", render_error(&error, &query, source_name));
            ExitCode::FAILURE
        }
    }
}
