//! Command-line interface for the query parser.
//!
//! Reads query text from a file or standard input, prints each parsed
//! statement with its source range, and reports syntax errors on standard
//! error. The exit code is the parse status code: 0 when accepted, 1 when
//! aborted.

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use parlalr_ql::{Config, QlParser};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parses query statements
    Parse {
        /// Input file; standard input if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Name the offending and expected tokens in error messages
        #[arg(short, long)]
        verbose: bool,

        /// Parser trace level (0-4), logged at debug level
        #[arg(short, long, default_value_t = 0)]
        debug: u8,
    },
}

fn read_input(path: Option<&Path>) -> Result<String> {
    let mut source = String::new();
    match path {
        Some(path) => {
            std::fs::File::open(path)
                .with_context(|| format!("can't open {:?}", path))?
                .read_to_string(&mut source)
                .with_context(|| format!("can't read {:?}", path))?;
        }
        None => {
            std::io::stdin()
                .read_to_string(&mut source)
                .context("can't read standard input")?;
        }
    }
    Ok(source)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Parse {
            input,
            verbose,
            debug,
        } => {
            let source = read_input(input.as_deref())?;
            let config = Config::default()
                .with_verbose_errors(verbose)
                .with_debug(debug);
            let mut parser = QlParser::try_new(config).context("can't create parser")?;
            let report = parser.parse(&source)?;

            for diagnostic in &report.diagnostics {
                eprintln!("{}", diagnostic);
            }
            for statement in &report.statements {
                println!("{}\t{}", statement.span, statement);
            }
            log::info!("{:?}", parser.stats());

            if !report.is_accepted() {
                std::process::exit(report.status.code());
            }
        }
    }
    Ok(())
}
