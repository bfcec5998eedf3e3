//! Error types for version comparison

use thiserror::Error;

/// Error raised when a version string cannot be compared
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version string \"{version}\": {reason}")]
    Malformed { version: String, reason: String },
    #[error("Version string is {version_len} characters long, at most {max} are allowed")]
    TooLong { version_len: usize, max: usize },
}

impl VersionError {
    pub(crate) fn malformed(version: &str, err: semver::Error) -> Self {
        VersionError::Malformed {
            version: version.to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message() {
        let err = semver::Version::parse("1.0").unwrap_err();
        let err = VersionError::malformed("1.0", err);
        assert!(err.to_string().starts_with("Invalid version string \"1.0\": "));
    }

    #[test]
    fn test_too_long_message() {
        let err = VersionError::TooLong { version_len: 300, max: 256 };
        assert_eq!(
            err.to_string(),
            "Version string is 300 characters long, at most 256 are allowed"
        );
    }
}
