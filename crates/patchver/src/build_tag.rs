//! Patch and hotfix identifiers inside build metadata

use std::cmp::Ordering;

use lazy_static::lazy_static;
use regex::Regex;

/// Build metadata identifiers that mark an internal revision of a release
pub const PATCH_IDENTIFIERS: &[&str] = &["patch", "hotfix"];

lazy_static! {
    static ref IDENTIFIER_ALTERNATION: String = PATCH_IDENTIFIERS
        .iter()
        .map(|identifier| regex::escape(identifier))
        .collect::<Vec<_>>()
        .join("|");

    // An identifier bounded by `.` or the ends of the tag. `-` is not a boundary.
    static ref DELIMITED_IDENTIFIER_RE: Regex = Regex::new(&format!(
        r"(?:^|\.)(?:{})(?:\.|$)",
        *IDENTIFIER_ALTERNATION
    )).unwrap();

    static ref LEADING_IDENTIFIER_RE: Regex = Regex::new(&format!(
        r"^(?P<identifier>{})\.(?P<revision>.+)$",
        *IDENTIFIER_ALTERNATION
    )).unwrap();
}

/// A build tag that starts with a patch identifier, e.g. `patch.10.1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadingIdentifier<'a> {
    /// The identifier itself (`patch` or `hotfix`)
    pub identifier: &'a str,
    /// Everything after `<identifier>.`
    pub revision: &'a str,
}

/// Check if a build tag contains a patch identifier as a whole segment.
///
/// `foo.patch.1` and `hotfix` match; `dispatcher.1`, `patchwork`,
/// `pre-patch.1` and `PATCH.1` do not.
pub fn has_patch_identifier(tag: &str) -> bool {
    DELIMITED_IDENTIFIER_RE.is_match(tag)
}

/// Split a build tag whose first segment is a patch identifier followed by `.`
pub fn leading_identifier(tag: &str) -> Option<LeadingIdentifier<'_>> {
    let captures = LEADING_IDENTIFIER_RE.captures(tag)?;
    Some(LeadingIdentifier {
        identifier: captures.name("identifier")?.as_str(),
        revision: captures.name("revision")?.as_str(),
    })
}

/// Compare two dotted revisions such as `1`, `10.1` or `1.0.0`.
///
/// Missing trailing segments count as `0`, so `1`, `1.0` and `1.0.0` are
/// equal. Numeric segments compare by value and sort below alphanumeric
/// ones, which compare by code point.
pub fn compare_revisions(a: &str, b: &str) -> Ordering {
    let a: Vec<&str> = a.split('.').collect();
    let b: Vec<&str> = b.split('.').collect();

    (0..a.len().max(b.len()))
        .map(|i| {
            compare_segments(
                a.get(i).copied().unwrap_or("0"),
                b.get(i).copied().unwrap_or("0"),
            )
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn compare_segments(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => {
            // Build identifiers may carry leading zeros and need not fit in a u64
            let a = a.trim_start_matches('0');
            let b = b.trim_start_matches('0');
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_patch_identifier() {
        assert!(has_patch_identifier("patch"));
        assert!(has_patch_identifier("patch.1"));
        assert!(has_patch_identifier("hotfix.10.2"));
        assert!(has_patch_identifier("foo.patch.1"));
        assert!(has_patch_identifier("contains.hotfix"));
        assert!(has_patch_identifier("a.patch"));

        assert!(!has_patch_identifier(""));
        assert!(!has_patch_identifier("build.1"));
        assert!(!has_patch_identifier("dispatcher.1"));
        assert!(!has_patch_identifier("patchwork"));
        assert!(!has_patch_identifier("notpatch.1"));
        assert!(!has_patch_identifier("hotfixes.2"));
        assert!(!has_patch_identifier("pre-patch.1"));
        assert!(!has_patch_identifier("patch-1"));
    }

    #[test]
    fn test_has_patch_identifier_is_case_sensitive() {
        assert!(!has_patch_identifier("PATCH.1"));
        assert!(!has_patch_identifier("Patch.1"));
        assert!(!has_patch_identifier("foo.HotFix"));
    }

    #[test]
    fn test_leading_identifier() {
        assert_eq!(
            leading_identifier("patch.10.1"),
            Some(LeadingIdentifier { identifier: "patch", revision: "10.1" })
        );
        assert_eq!(
            leading_identifier("hotfix.2"),
            Some(LeadingIdentifier { identifier: "hotfix", revision: "2" })
        );
        assert_eq!(
            leading_identifier("patch.something"),
            Some(LeadingIdentifier { identifier: "patch", revision: "something" })
        );

        assert_eq!(leading_identifier("patch"), None);
        assert_eq!(leading_identifier("patchwork.1"), None);
        assert_eq!(leading_identifier("foo.patch.1"), None);
        assert_eq!(leading_identifier("PATCH.1"), None);
        assert_eq!(leading_identifier(""), None);
    }

    #[test]
    fn test_compare_revisions_numeric() {
        assert_eq!(compare_revisions("1", "10"), Ordering::Less);
        assert_eq!(compare_revisions("10", "10.1"), Ordering::Less);
        assert_eq!(compare_revisions("2", "1.2"), Ordering::Greater);
        assert_eq!(compare_revisions("1.2", "1.1"), Ordering::Greater);
        assert_eq!(compare_revisions("0", "1"), Ordering::Less);
    }

    #[test]
    fn test_compare_revisions_padding() {
        assert_eq!(compare_revisions("1", "1.0"), Ordering::Equal);
        assert_eq!(compare_revisions("1", "1.0.0"), Ordering::Equal);
        assert_eq!(compare_revisions("1.0.0.0", "1"), Ordering::Equal);
        assert_eq!(compare_revisions("1", "1.0.0.1"), Ordering::Less);
    }

    #[test]
    fn test_compare_revisions_large_and_zero_padded() {
        assert_eq!(compare_revisions("01", "1"), Ordering::Equal);
        assert_eq!(compare_revisions("007", "10"), Ordering::Less);
        assert_eq!(
            compare_revisions("99999999999999999999999", "100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_revisions_alphanumeric() {
        assert_eq!(compare_revisions("1", "rc1"), Ordering::Less);
        assert_eq!(compare_revisions("rc1", "rc2"), Ordering::Less);
        assert_eq!(compare_revisions("1.b", "1.a"), Ordering::Greater);
        assert_eq!(compare_revisions("1.x", "1"), Ordering::Greater);
    }
}
