use std::io::{self, BufRead};

use anstream::println;
use serde::Serialize;
use tracing::debug;

pub mod compare;
pub mod filter;
pub mod sort;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(
        code(verso::version),
        help("versions look like MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD], e.g. 1.2.3-rc.1")
    )]
    VersionError(#[from] verso_version::VersionError),
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
    #[error(transparent)]
    IoError(#[from] io::Error),
}

type Result<T> = miette::Result<T, Error>;

/// Uses `versions` when given, otherwise reads one version per line from
/// stdin, skipping blank lines.
fn versions_or_stdin(versions: Vec<String>) -> io::Result<Vec<String>> {
    if !versions.is_empty() {
        return Ok(versions);
    }

    debug!("No versions given, reading them from stdin");
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

fn print_versions<T: Serialize + std::fmt::Display>(
    versions: &[T],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(io::stdout(), versions)?;
            println!();
        }
        OutputFormat::Text => {
            for version in versions {
                println!("{version}");
            }
        }
    }
    Ok(())
}
