//! Phonebook Binary
//!
//! Loads a phonebook file, dumps the hash table and prints its collision rate.

use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use phonebook::config::DEFAULT_TABLE_SIZE;
use phonebook::{Config, Phonebook, PhonebookError, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Phonebook hash table report
#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(about = "Load `name - number` records and report hash bucket distribution")]
#[command(version)]
struct Args {
    /// Input file, one `name - number` record per line
    file: PathBuf,

    /// Number of hash buckets
    #[arg(short, long, default_value_t = DEFAULT_TABLE_SIZE)]
    table_size: usize,
}

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument
            ) =>
        {
            tracing::debug!("Argument error: {}", e);
            tracing::error!("{}", PhonebookError::Usage("No filename".to_string()));
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::error!("{}", PhonebookError::Usage(e.to_string()));
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::builder().table_size(args.table_size).build();

    let (phonebook, summary) = Phonebook::open(&args.file, config)?;
    tracing::info!(
        "Loaded {} records from {} ({} lines skipped)",
        summary.loaded,
        args.file.display(),
        summary.skipped
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    phonebook.write_report(&mut out)?;
    out.flush()?;
    Ok(())
}
