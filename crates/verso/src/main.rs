use std::{io::IsTerminal, process::ExitCode};

use anstream::eprintln;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use miette::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use verso_version::ComparisonOperator;

pub mod commands;

use commands::{OutputFormat, compare::compare, filter::filter, sort::sort};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(
        long,
        value_enum,
        global = true,
        default_value = "text",
        env = "VERSO_FORMAT"
    )]
    format: OutputFormat,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        about = "Check whether a relation holds between two versions",
        long_about = "Check whether a relation holds between two versions.\n\nExits with status 0 when it holds and 1 when it does not."
    )]
    Compare {
        /// Version on the left of the operator
        left: String,

        /// One of ==, >=, <=, <, >
        operator: ComparisonOperator,

        /// Version on the right of the operator
        right: String,
    },

    #[command(about = "Sort versions from lowest to highest precedence")]
    Sort {
        /// Print the highest precedence first
        #[arg(long)]
        reverse: bool,

        /// Versions to sort, read one per line from stdin when omitted
        versions: Vec<String>,
    },

    #[command(about = "Print the versions for which `<VERSIONS> <OPERATOR> <VERSION>` holds")]
    Filter {
        /// One of ==, >=, <=, <, >
        operator: ComparisonOperator,

        /// Version every candidate is compared against
        version: String,

        /// Candidate versions, read one per line from stdin when omitted
        versions: Vec<String>,
    },
}

/// Logs go to stderr. `VERSO_LOG` takes `RUST_LOG` style directives and
/// overrides the level picked by `-v`/`-q`.
fn init_tracing(verbosity: &Verbosity<WarnLevel>) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity.tracing_level_filter().into())
        .with_env_var("VERSO_LOG")
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .without_time()
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let format = cli.format;

    let success = match cli.command {
        Commands::Compare {
            left,
            operator,
            right,
        } => compare(&left, operator, &right, format)?,
        Commands::Sort { reverse, versions } => {
            sort(versions, reverse, format)?;
            true
        }
        Commands::Filter {
            operator,
            version,
            versions,
        } => filter(operator, &version, versions, format)? > 0,
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:?}");
            ExitCode::from(2)
        }
    }
}
