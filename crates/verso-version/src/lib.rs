//! Semantic version parsing and comparison.
//!
//! ```
//! use verso_version::{ComparisonOperator, compare, satisfies};
//!
//! assert!(compare("1.2.3-beta.11", ComparisonOperator::Less, "1.2.3-rc.1").unwrap());
//! assert!(satisfies("1.2.3+20140101", "==", "1.2.3"));
//! assert!(!satisfies("1.2.3", "!=", "2.0.0"));
//! ```

use tracing::debug;

mod error;
mod operator;
mod prerelease;
mod version;

pub use error::VersionError;
pub use operator::ComparisonOperator;
pub use prerelease::PrereleaseIdentifier;
pub use version::Version;

/// Drops build metadata (everything from the first `+`) from a version string.
pub fn strip_build_metadata(version: &str) -> &str {
    version
        .split_once('+')
        .map_or(version, |(version, _build)| version)
}

/// Checks whether `left <operator> right` holds.
///
/// When the operator admits equality and both strings are identical once
/// build metadata is removed, this returns `true` without parsing either
/// side.
pub fn compare(
    left: &str,
    operator: ComparisonOperator,
    right: &str,
) -> Result<bool, VersionError> {
    let left = strip_build_metadata(left);
    let right = strip_build_metadata(right);

    if operator.admits_equal() && left == right {
        return Ok(true);
    }

    let left = Version::new(left)?;
    let right = Version::new(right)?;

    Ok(operator.evaluate(left.cmp(&right)))
}

/// Like [`compare`], with the operator given as text.
///
/// Unknown operators and unparseable versions make the relation `false`.
pub fn satisfies(left: &str, operator: &str, right: &str) -> bool {
    operator
        .parse::<ComparisonOperator>()
        .and_then(|operator| compare(left, operator, right))
        .unwrap_or_else(|err| {
            debug!(left, operator, right, "treating comparison as false: {err}");
            false
        })
}
