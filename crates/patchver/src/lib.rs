//! Semantic version ordering with patch and hotfix build tag revisions
//!
//! Versions are ordered by standard semantic version precedence. When that
//! reports a tie, build metadata carrying a `patch` or `hotfix` revision
//! breaks it: `7.0.0 < 7.0.0+hotfix.10 < 7.0.0+patch.1 < 7.0.0+patch.10`.
//! Any other build metadata is ignored, as semver requires.

pub mod build_tag;
mod comparator;
pub mod engine;
mod error;
mod facade;
mod version;

pub use build_tag::PATCH_IDENTIFIERS;
pub use comparator::Comparator;
pub use engine::{ParsedVersion, SemverEngine, StandardEngine, MAX_VERSION_LENGTH};
pub use error::VersionError;
pub use facade::Semver;
pub use version::PatchVersion;
