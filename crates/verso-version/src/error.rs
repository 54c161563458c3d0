#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("Malformed version number string {version}")]
    InvalidFormat { version: String },
    #[error("Version number does not fit in 64 bits: {segment}")]
    NumberTooLarge { segment: String },
    #[error("Invalid prerelease identifier: {identifier:?}")]
    InvalidIdentifier { identifier: String },
    #[error("Unknown comparison operator: {operator}")]
    UnknownOperator { operator: String },
}
