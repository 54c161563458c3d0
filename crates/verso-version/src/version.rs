use std::{cmp::Ordering, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{PrereleaseIdentifier, VersionError, strip_build_metadata};

/// A parsed `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` version.
///
/// Parsing is lenient in the same places version strings in the wild tend to
/// be: a missing minor or patch number counts as `0`, and anything after the
/// recognised prefix (`2.0.2.rc1`, `1.0.0-beta_3`) is kept for display but
/// does not take part in comparison. Build metadata never does either.
#[derive(Debug, Clone, Eq, SerializeDisplay, DeserializeFromStr)]
pub struct Version {
    pub version: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<PrereleaseIdentifier>,
    pub build: Option<String>,
}

impl Version {
    pub fn new(version: impl AsRef<str>) -> Result<Self, VersionError> {
        let version = version.as_ref().trim();
        let core = strip_build_metadata(version);
        let build = version
            .split_once('+')
            .map(|(_, build)| build.to_string());

        let malformed = || VersionError::InvalidFormat {
            version: version.to_string(),
        };

        let (digits, mut rest) = split_number(core).ok_or_else(malformed)?;
        let mut numbers = [parse_number(digits)?, 0, 0];

        for number in &mut numbers[1..] {
            let Some((digits, tail)) = rest.strip_prefix('.').and_then(split_number) else {
                break;
            };
            *number = parse_number(digits)?;
            rest = tail;
        }

        let prerelease = match rest.strip_prefix('-').map(prerelease_label) {
            Some(label) if !label.is_empty() => label
                .split('.')
                .map(PrereleaseIdentifier::new)
                .collect::<Result<Vec<_>, _>>()?,
            _ => Vec::new(),
        };

        let [major, minor, patch] = numbers;
        Ok(Self {
            version: version.to_string(),
            major,
            minor,
            patch,
            prerelease,
            build,
        })
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// The release this version leads up to, i.e. the numeric core alone.
    pub fn release(&self) -> Self {
        Self {
            version: format!("{}.{}.{}", self.major, self.minor, self.patch),
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            prerelease: Vec::new(),
            build: None,
        }
    }

    fn prerelease_ranks(&self) -> impl Iterator<Item = u64> + '_ {
        self.prerelease.iter().map(PrereleaseIdentifier::rank)
    }

    fn cmp_prerelease(&self, other: &Self) -> Ordering {
        match (self.is_prerelease(), other.is_prerelease()) {
            (false, false) => Ordering::Equal,
            // A release outranks every prerelease of itself
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (true, true) => {
                let mut ours = self.prerelease_ranks();
                let mut theirs = other.prerelease_ranks();

                loop {
                    // `None` (an exhausted label) sorts below any present identifier.
                    match (ours.next(), theirs.next()) {
                        (None, None) => return Ordering::Equal,
                        (a, b) => match a.cmp(&b) {
                            Ordering::Equal => continue,
                            other => return other,
                        },
                    }
                }
            }
        }
    }
}

/// Splits a leading run of ASCII digits off `input`, if there is one.
fn split_number(input: &str) -> Option<(&str, &str)> {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    (end > 0).then(|| input.split_at(end))
}

fn parse_number(digits: &str) -> Result<u64, VersionError> {
    digits.parse().map_err(|_| VersionError::NumberTooLarge {
        segment: digits.to_string(),
    })
}

/// The longest prefix made of ASCII alphanumerics and dots.
fn prerelease_label(input: &str) -> &str {
    let end = input
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '.'))
        .unwrap_or(input.len());
    &input[..end]
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl std::hash::Hash for Version {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease_ranks().collect::<Vec<_>>().hash(state);
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.version)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| self.cmp_prerelease(other))
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        Version::new(s)
    }
}
