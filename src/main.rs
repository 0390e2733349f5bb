//! Castgrep CLI entry point

use castgrep::cli::Cli;
use castgrep::console::QueryConsole;
use castgrep::core::config::LOG_ENV;
use castgrep::core::error::Result;
use castgrep::scan;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Failures are reported on stderr even without an explicit filter
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let root = match cli.root {
        Some(root) => root,
        None => prompt_root(&mut input, &mut output)?,
    };

    writeln!(output, "Analyzing {}...", root.display())?;
    output.flush()?;
    let index = scan::scan_tree(&root);

    if index.is_empty() {
        writeln!(output, "No casts found under {}.", root.display())?;
    }

    QueryConsole::new(&index, input, output).run()
}

fn prompt_root(input: &mut impl BufRead, output: &mut impl Write) -> Result<PathBuf> {
    write!(output, "Enter the directory path to analyze: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}
