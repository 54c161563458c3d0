use std::io;

use anstream::println;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};
use verso_version::ComparisonOperator;

use super::{OutputFormat, Result};

#[derive(Serialize)]
struct Comparison<'a> {
    left: &'a str,
    operator: ComparisonOperator,
    right: &'a str,
    holds: bool,
}

/// Prints whether `left <operator> right` holds and returns it.
#[instrument(skip(format))]
pub fn compare(
    left: &str,
    operator: ComparisonOperator,
    right: &str,
    format: OutputFormat,
) -> Result<bool> {
    let holds = verso_version::compare(left, operator, right)?;
    debug!(holds, "Compared versions");

    match format {
        OutputFormat::Json => {
            let comparison = Comparison {
                left,
                operator,
                right,
                holds,
            };
            serde_json::to_writer_pretty(io::stdout(), &comparison)?;
            println!();
        }
        OutputFormat::Text if holds => println!("{}", "true".green()),
        OutputFormat::Text => println!("{}", "false".red()),
    }

    Ok(holds)
}
