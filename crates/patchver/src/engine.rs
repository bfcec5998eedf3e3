//! Standard semantic versioning engine used underneath the comparator

use std::cmp::Ordering;

use semver::Version;

use crate::VersionError;

/// Longest version string the standard engine accepts
pub const MAX_VERSION_LENGTH: usize = 256;

/// Structural view of a version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Prerelease identifiers, in order
    pub pre: Vec<String>,
    /// Build metadata identifiers, in order
    pub build: Vec<String>,
}

impl ParsedVersion {
    /// Build metadata identifiers joined with `.`, empty when absent
    pub fn build_tag(&self) -> String {
        self.build.join(".")
    }

    pub fn has_build(&self) -> bool {
        !self.build.is_empty()
    }

    /// `major.minor.patch[-prerelease]` with build metadata stripped
    pub fn normalized(&self) -> String {
        let mut normalized = format!("{}.{}.{}", self.major, self.minor, self.patch);
        if !self.pre.is_empty() {
            normalized.push('-');
            normalized.push_str(&self.pre.join("."));
        }
        normalized
    }
}

impl From<&Version> for ParsedVersion {
    fn from(version: &Version) -> Self {
        ParsedVersion {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            pre: split_identifiers(version.pre.as_str()),
            build: split_identifiers(version.build.as_str()),
        }
    }
}

fn split_identifiers(joined: &str) -> Vec<String> {
    if joined.is_empty() {
        return Vec::new();
    }
    joined.split('.').map(str::to_string).collect()
}

/// Operations the comparator needs from a semantic versioning implementation
pub trait SemverEngine {
    /// Standard precedence of `a` and `b`, ignoring build metadata.
    ///
    /// Fails when either input is not a valid version.
    fn standard_compare(&self, a: &str, b: &str) -> Result<Ordering, VersionError>;

    /// Parse a version, returning `None` instead of failing
    fn parse(&self, version: &str) -> Option<ParsedVersion>;

    /// Normalized form of a valid version, `None` otherwise
    fn validate(&self, version: &str) -> Option<String> {
        self.parse(version).map(|parsed| parsed.normalized())
    }
}

/// Engine backed by the `semver` crate.
///
/// Accepts the strict grammar plus surrounding whitespace and a single
/// leading `v`, the same inputs node-semver accepts in non-loose mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEngine;

impl StandardEngine {
    pub fn new() -> Self {
        StandardEngine
    }

    pub(crate) fn parse_version(&self, version: &str) -> Result<Version, VersionError> {
        if version.len() > MAX_VERSION_LENGTH {
            return Err(VersionError::TooLong {
                version_len: version.len(),
                max: MAX_VERSION_LENGTH,
            });
        }

        let trimmed = version.trim();
        let unprefixed = trimmed.strip_prefix('v').unwrap_or(trimmed);
        Version::parse(unprefixed).map_err(|err| VersionError::malformed(version, err))
    }
}

impl SemverEngine for StandardEngine {
    fn standard_compare(&self, a: &str, b: &str) -> Result<Ordering, VersionError> {
        let a = self.parse_version(a)?;
        let b = self.parse_version(b)?;
        Ok(precedence(&a, &b))
    }

    fn parse(&self, version: &str) -> Option<ParsedVersion> {
        self.parse_version(version)
            .ok()
            .map(|parsed| ParsedVersion::from(&parsed))
    }
}

// `Version: Ord` also orders by build metadata, so the core and prerelease
// are compared field by field.
pub(crate) fn precedence(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| a.pre.cmp(&b.pre))
}
