//! Semver facade providing high-level version operations

use std::cmp::Ordering;

use crate::{Comparator, PatchVersion, VersionError};

/// Main facade for patch-aware versioning operations
pub struct Semver;

impl Semver {
    /// Compare two versions, see [`Comparator::compare`]
    pub fn compare(version1: &str, version2: &str) -> Result<Ordering, VersionError> {
        Comparator::new().compare(version1, version2)
    }

    pub fn gt(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Comparator::new().gt(version1, version2)
    }

    pub fn lt(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Comparator::new().lt(version1, version2)
    }

    pub fn eq(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Comparator::new().eq(version1, version2)
    }

    pub fn neq(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Comparator::new().neq(version1, version2)
    }

    pub fn gte(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Comparator::new().gte(version1, version2)
    }

    pub fn lte(version1: &str, version2: &str) -> Result<bool, VersionError> {
        Comparator::new().lte(version1, version2)
    }

    /// Normalized version with build metadata stripped, `None` if invalid
    pub fn valid(version: &str) -> Option<String> {
        Comparator::new().valid(version)
    }

    /// Sort versions in ascending order.
    ///
    /// Uses the total order of [`PatchVersion`], which agrees with
    /// [`Semver::compare`] except that build metadata containing a patch
    /// identifier always sorts above metadata without one.
    pub fn sort(versions: &[&str]) -> Result<Vec<String>, VersionError> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Result<Vec<String>, VersionError> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Result<Vec<String>, VersionError> {
        let mut parsed = versions
            .iter()
            .map(|v| PatchVersion::parse(v))
            .collect::<Result<Vec<_>, _>>()?;

        // Stable, so equal versions keep their input order in both directions
        parsed.sort_by(|a, b| if ascending { a.cmp(b) } else { b.cmp(a) });

        Ok(parsed.into_iter().map(PatchVersion::into_string).collect())
    }
}
