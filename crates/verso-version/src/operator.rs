use std::{cmp::Ordering, str::FromStr};

#[cfg(test)]
use proptest_derive::Arbitrary;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::VersionError;

/// The relation asked about when comparing two versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum ComparisonOperator {
    Equal,
    GreaterEqual,
    LessEqual,
    Less,
    Greater,
}

impl ComparisonOperator {
    pub fn all() -> [Self; 5] {
        [
            Self::Equal,
            Self::GreaterEqual,
            Self::LessEqual,
            Self::Less,
            Self::Greater,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::Less => "<",
            Self::Greater => ">",
        }
    }

    /// Whether identical versions satisfy this operator.
    pub fn admits_equal(self) -> bool {
        matches!(self, Self::Equal | Self::GreaterEqual | Self::LessEqual)
    }

    /// Whether `left <op> right` holds, given `left.cmp(&right)`.
    pub fn evaluate(self, ordering: Ordering) -> bool {
        match self {
            Self::Equal => ordering.is_eq(),
            Self::GreaterEqual => ordering.is_ge(),
            Self::LessEqual => ordering.is_le(),
            Self::Less => ordering.is_lt(),
            Self::Greater => ordering.is_gt(),
        }
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonOperator {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        Self::all()
            .into_iter()
            .find(|operator| operator.as_str() == s.trim())
            .ok_or_else(|| VersionError::UnknownOperator {
                operator: s.to_string(),
            })
    }
}
