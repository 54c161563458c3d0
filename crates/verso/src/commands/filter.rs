use tracing::{debug, instrument};
use verso_version::ComparisonOperator;

use super::{OutputFormat, Result, print_versions, versions_or_stdin};

/// Prints the candidates `v` for which `v <operator> target` holds, in input
/// order, and returns how many there were.
#[instrument(skip(versions, format))]
pub fn filter(
    operator: ComparisonOperator,
    target: &str,
    versions: Vec<String>,
    format: OutputFormat,
) -> Result<usize> {
    let matching = matching(operator, target, versions_or_stdin(versions)?)?;
    debug!("{} versions matched", matching.len());
    print_versions(&matching, format)?;
    Ok(matching.len())
}

fn matching(
    operator: ComparisonOperator,
    target: &str,
    versions: Vec<String>,
) -> Result<Vec<String>> {
    let mut matching = Vec::new();
    for version in versions {
        if verso_version::compare(&version, operator, target)? {
            matching.push(version);
        }
    }
    Ok(matching)
}
