use clap::Parser;
use itertools::Itertools as _;
use sqlfmt::{FormatterRegistry, Language, Result, config};
use std::{io::Read as _, path::PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Pretty-print SQL read from a file or stdin.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// SQL file to format, stdin when omitted
    path: Option<PathBuf>,

    /// Dialect: sql, pl/sql, n1ql or db2 (overrides SQLFMT_LANGUAGE)
    #[arg(short, long)]
    language: Option<String>,

    /// Indent unit repeated per level (overrides SQLFMT_INDENT)
    #[arg(short, long)]
    indent: Option<String>,

    /// Upper-case reserved words
    #[arg(short, long)]
    uppercase: bool,

    /// Print the token stream instead of the formatted query
    #[arg(long)]
    tokens: bool,
}

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut options = config()?.options()?;
    if let Some(language) = cli.language.as_deref() {
        options.language = language.parse::<Language>()?;
    }
    if let Some(indent) = cli.indent {
        options.indent = indent;
    }
    options.uppercase |= cli.uppercase;

    let sql = match &cli.path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    debug!("Read {} bytes of {} input", sql.len(), options.language);

    let registry = FormatterRegistry::new();
    if cli.tokens {
        let dump = registry
            .tokenize(&sql, options.language)
            .iter()
            .map(|t| format!("{:<18} {:?}", t.kind.to_string(), t.value))
            .join("\n");
        println!("{dump}");
    } else {
        println!("{}", registry.format(&sql, &options));
    }
    Ok(())
}
