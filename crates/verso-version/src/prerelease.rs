use std::str::FromStr;

use crate::VersionError;

/// One dot-separated identifier from the prerelease label of a version,
/// e.g. `rc` and `1` in `1.2.3-rc.1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrereleaseIdentifier {
    Numeric(u64),
    Alphanumeric(String),
}

impl PrereleaseIdentifier {
    pub fn new(identifier: impl AsRef<str>) -> Result<Self, VersionError> {
        let identifier = identifier.as_ref();

        if identifier.is_empty() || !identifier.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(VersionError::InvalidIdentifier {
                identifier: identifier.to_string(),
            });
        }

        if identifier.chars().all(|c| c.is_ascii_digit()) {
            identifier
                .parse::<u64>()
                .map(Self::Numeric)
                .map_err(|_| VersionError::NumberTooLarge {
                    segment: identifier.to_string(),
                })
        } else {
            Ok(Self::Alphanumeric(identifier.to_string()))
        }
    }

    /// The value this identifier is ordered by.
    ///
    /// Numeric identifiers rank as their value. Alphanumeric identifiers rank
    /// as the code point of their *first character only*, so `alpha` and
    /// `apple` share a rank, and `200` outranks `beta` (98). This is looser
    /// than SemVer's full ASCII ordering of string identifiers.
    pub fn rank(&self) -> u64 {
        match self {
            Self::Numeric(n) => *n,
            Self::Alphanumeric(s) => s.chars().next().map_or(0, u64::from),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

impl std::fmt::Display for PrereleaseIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Alphanumeric(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for PrereleaseIdentifier {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        Self::new(s)
    }
}
