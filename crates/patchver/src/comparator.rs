//! Version comparison utilities

use std::cmp::Ordering;

use crate::build_tag::{compare_revisions, has_patch_identifier, leading_identifier, LeadingIdentifier};
use crate::engine::{SemverEngine, StandardEngine};
use crate::VersionError;

/// Comparator for version strings whose build metadata may carry a
/// `patch` or `hotfix` revision.
///
/// Standard precedence always decides first. Only when it reports equality
/// are build tags consulted, and only if at least one of them contains a
/// patch identifier; other build metadata never affects ordering.
#[derive(Debug, Clone, Default)]
pub struct Comparator<E = StandardEngine> {
    engine: E,
}

impl Comparator<StandardEngine> {
    pub fn new() -> Self {
        Comparator {
            engine: StandardEngine::new(),
        }
    }
}

impl<E: SemverEngine> Comparator<E> {
    /// Create a comparator on top of a custom engine
    pub fn with_engine(engine: E) -> Self {
        Comparator { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Compare version1 to version2.
    ///
    /// Fails only if the engine rejects either version.
    pub fn compare(&self, version1: &str, version2: &str) -> Result<Ordering, VersionError> {
        let standard = self.engine.standard_compare(version1, version2)?;
        if standard.is_ne() {
            return Ok(standard);
        }

        let (parsed1, parsed2) = match (self.engine.parse(version1), self.engine.parse(version2)) {
            (Some(parsed1), Some(parsed2)) => (parsed1, parsed2),
            _ => {
                log::debug!(
                    "Could not parse {} or {}, keeping standard precedence",
                    version1,
                    version2
                );
                return Ok(standard);
            }
        };

        Ok(compare_build_tags(&parsed1.build_tag(), &parsed2.build_tag()))
    }

    /// Check if version1 > version2
    pub fn gt(&self, version1: &str, version2: &str) -> Result<bool, VersionError> {
        Ok(self.compare(version1, version2)?.is_gt())
    }

    /// Check if version1 < version2
    pub fn lt(&self, version1: &str, version2: &str) -> Result<bool, VersionError> {
        Ok(self.compare(version1, version2)?.is_lt())
    }

    /// Check if version1 == version2
    pub fn eq(&self, version1: &str, version2: &str) -> Result<bool, VersionError> {
        Ok(self.compare(version1, version2)?.is_eq())
    }

    /// Check if version1 != version2
    pub fn neq(&self, version1: &str, version2: &str) -> Result<bool, VersionError> {
        Ok(self.compare(version1, version2)?.is_ne())
    }

    /// Check if version1 >= version2
    pub fn gte(&self, version1: &str, version2: &str) -> Result<bool, VersionError> {
        Ok(self.compare(version1, version2)?.is_ge())
    }

    /// Check if version1 <= version2
    pub fn lte(&self, version1: &str, version2: &str) -> Result<bool, VersionError> {
        Ok(self.compare(version1, version2)?.is_le())
    }

    /// Normalized `major.minor.patch[-prerelease]` form, or `None` if invalid
    pub fn valid(&self, version: &str) -> Option<String> {
        self.engine.validate(version)
    }
}

/// Order the build tags of two versions with equal standard precedence.
///
/// An empty tag means the version has no build metadata.
pub(crate) fn compare_build_tags(tag1: &str, tag2: &str) -> Ordering {
    let has_patch1 = has_patch_identifier(tag1);
    let has_patch2 = has_patch_identifier(tag2);

    if !has_patch1 && !has_patch2 {
        return Ordering::Equal;
    }

    // Containment is enough here, the identifier does not have to lead
    if has_patch1 && tag2.is_empty() {
        log::trace!("+{} outranks a bare release", tag1);
        return Ordering::Greater;
    }
    if tag1.is_empty() && has_patch2 {
        log::trace!("+{} outranks a bare release", tag2);
        return Ordering::Less;
    }

    if tag1 == tag2 {
        return Ordering::Equal;
    }

    match (leading_identifier(tag1), leading_identifier(tag2)) {
        (Some(lead1), Some(lead2)) if lead1.identifier != lead2.identifier => {
            log::trace!("Ordering +{} and +{} by identifier", tag1, tag2);
            lead1.identifier.cmp(lead2.identifier)
        }
        (Some(lead1), Some(lead2)) => {
            log::trace!("Ordering +{} and +{} by revision", tag1, tag2);
            compare_revisions(lead1.revision, lead2.revision)
        }
        (Some(_), None) => {
            log::trace!("+{} leads with an identifier, +{} does not", tag1, tag2);
            Ordering::Greater
        }
        (None, Some(_)) => {
            log::trace!("+{} leads with an identifier, +{} does not", tag2, tag1);
            Ordering::Less
        }
        (None, None) => {
            log::trace!("Ordering +{} and +{} lexically", tag1, tag2);
            tag1.cmp(tag2)
        }
    }
}

enum TagClass<'a> {
    Plain,
    Contains(&'a str),
    Leading(LeadingIdentifier<'a>),
}

fn classify(tag: &str) -> TagClass<'_> {
    if let Some(lead) = leading_identifier(tag) {
        TagClass::Leading(lead)
    } else if has_patch_identifier(tag) {
        TagClass::Contains(tag)
    } else {
        TagClass::Plain
    }
}

/// Total order over build tags, used for sorting and by `PatchVersion`.
///
/// Agrees with [`compare_build_tags`] except when a tag without any patch
/// identifier meets one that only contains it. `compare_build_tags` orders
/// that pair lexically, which can form a cycle with a bare release; here the
/// tag containing the identifier is always greater.
pub(crate) fn total_order_build_tags(tag1: &str, tag2: &str) -> Ordering {
    match (classify(tag1), classify(tag2)) {
        (TagClass::Plain, TagClass::Plain) => Ordering::Equal,
        (TagClass::Plain, _) => Ordering::Less,
        (_, TagClass::Plain) => Ordering::Greater,
        (TagClass::Contains(a), TagClass::Contains(b)) => a.cmp(b),
        (TagClass::Contains(_), TagClass::Leading(_)) => Ordering::Less,
        (TagClass::Leading(_), TagClass::Contains(_)) => Ordering::Greater,
        (TagClass::Leading(a), TagClass::Leading(b)) => a
            .identifier
            .cmp(b.identifier)
            .then_with(|| compare_revisions(a.revision, b.revision)),
    }
}
