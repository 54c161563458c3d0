use tracing::{debug, instrument};
use verso_version::Version;

use super::{OutputFormat, Result, print_versions, versions_or_stdin};

/// Prints `versions` ordered by precedence. Versions of equal precedence
/// (`1.0` and `1.0.0+build`) keep their input order.
#[instrument(skip(versions, format))]
pub fn sort(versions: Vec<String>, reverse: bool, format: OutputFormat) -> Result<()> {
    let versions = sorted(versions_or_stdin(versions)?, reverse)?;
    debug!("Sorted {} versions", versions.len());
    print_versions(&versions, format)
}

fn sorted(versions: Vec<String>, reverse: bool) -> Result<Vec<Version>> {
    let mut versions = versions
        .iter()
        .map(Version::new)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if reverse {
        versions.sort_by(|a, b| b.cmp(a));
    } else {
        versions.sort();
    }

    Ok(versions)
}
