//! Parsing, ordering and segment arithmetic for free-form version strings
//! such as `5.0.a.1.4.5`, `1.2.3-SNAPSHOT` or `2.0-beta-1`.
//!
//! The functions at the crate root use the default ordering. Pick another
//! one through [`ComparisonMethod::comparator`].

use std::cmp::Ordering;

pub mod comparator;
pub mod increment;
pub mod level;
mod maven;
mod mercury;
pub mod segment;
pub mod token;
pub mod version;

pub use comparator::{ComparisonMethod, MavenComparator, MercuryComparator, VersionComparator};
pub use level::SegmentLevel;
pub use segment::{Number, Qualifier, QualifierKind, Segment};
pub use version::{SNAPSHOT_SUFFIX, Version};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("Cannot increment the {level} segment of version {version}")]
    InvalidSegmentLevel { level: SegmentLevel, version: String },
}

/// A segment level or comparison method name that is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown segment level: {name}")]
    UnknownSegmentLevel { name: String },
    #[error("Unknown comparison method: {name}")]
    UnknownComparisonMethod { name: String },
}

pub fn parse_version(text: &str) -> Version {
    Version::parse(text)
}

pub fn segment_count(version: &Version) -> usize {
    MavenComparator.segment_count(version)
}

pub fn compare(a: &Version, b: &Version) -> Ordering {
    MavenComparator.compare(a, b)
}

pub fn segment_level(a: &Version, b: &Version) -> Option<SegmentLevel> {
    MavenComparator.segment_level(a, b)
}

pub fn increment(version: &Version, level: SegmentLevel) -> Result<Version, VersionError> {
    MavenComparator.increment(version, level)
}
