//! Owned version value ordered with patch and hotfix revisions

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::comparator::total_order_build_tags;
use crate::engine::{precedence, ParsedVersion, StandardEngine};
use crate::VersionError;

/// A validated version string.
///
/// Ordering and equality follow [`Comparator`](crate::Comparator), so
/// `7.0.0+patch.1` and `7.0.0+patch.1.0` are equal while `7.0.0+patch.1`
/// sorts above `7.0.0`. The original text is kept for display.
///
/// `Comparator::compare` is not transitive when build metadata without a
/// patch identifier meets a tag that merely contains one
/// (`1.0.0+zzz == 1.0.0 < 1.0.0+foo.patch.1 < 1.0.0+zzz`). `Ord` here breaks
/// that cycle by ranking any tag with an identifier above any tag without
/// one, and otherwise agrees with the comparator.
#[derive(Debug, Clone)]
pub struct PatchVersion {
    raw: String,
    version: Version,
}

impl PatchVersion {
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let parsed = StandardEngine::new().parse_version(version)?;
        Ok(PatchVersion {
            raw: version.to_string(),
            version: parsed,
        })
    }

    /// The version exactly as it was given
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn into_string(self) -> String {
        self.raw
    }

    /// `major.minor.patch[-prerelease]`, build metadata stripped
    pub fn normalized(&self) -> String {
        ParsedVersion::from(&self.version).normalized()
    }

    pub fn build_tag(&self) -> &str {
        self.version.build.as_str()
    }
}

impl FromStr for PatchVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatchVersion::parse(s)
    }
}

impl fmt::Display for PatchVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Ord for PatchVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        precedence(&self.version, &other.version)
            .then_with(|| total_order_build_tags(self.build_tag(), other.build_tag()))
    }
}

impl PartialOrd for PatchVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PatchVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PatchVersion {}
