use std::cmp::Ordering;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::increment::increment_segment;
use crate::segment::Segment;
use crate::{ParseError, SegmentLevel, Version, VersionError};

pub use crate::maven::MavenComparator;
pub use crate::mercury::MercuryComparator;

/// An ordering over versions plus the segment arithmetic that goes with it.
///
/// Implementations only decide how two segments at the same position
/// compare; walking the positions, counting and incrementing are shared.
/// Every method is a pure function of its arguments.
pub trait VersionComparator: std::fmt::Debug + Send + Sync {
    /// Orders two segments found at the same position. `None` stands for a
    /// position past the end of the shorter version.
    fn compare_segments(&self, a: Option<&Segment>, b: Option<&Segment>) -> Ordering;

    fn compare(&self, a: &Version, b: &Version) -> Ordering {
        first_difference(self, a, b).map_or(Ordering::Equal, |(_, ordering)| ordering)
    }

    fn segment_count(&self, version: &Version) -> usize {
        version.segment_count()
    }

    /// The most significant level at which `a` and `b` differ, or `None`
    /// when they compare equal.
    fn segment_level(&self, a: &Version, b: &Version) -> Option<SegmentLevel> {
        first_difference(self, a, b).map(|(index, _)| SegmentLevel::from_index(index))
    }

    /// The first version of the next line at `level`, as a snapshot.
    /// See [`increment_segment`].
    fn increment(&self, version: &Version, level: SegmentLevel) -> Result<Version, VersionError> {
        increment_segment(version, level)
    }
}

fn first_difference<C>(comparator: &C, a: &Version, b: &Version) -> Option<(usize, Ordering)>
where
    C: VersionComparator + ?Sized,
{
    let (a, b) = (a.segments(), b.segments());
    (0..a.len().max(b.len())).find_map(|index| {
        match comparator.compare_segments(a.get(index), b.get(index)) {
            Ordering::Equal => None,
            ordering => Some((index, ordering)),
        }
    })
}

/// Selects which [`VersionComparator`] implementation to use.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, DeserializeFromStr, SerializeDisplay,
)]
pub enum ComparisonMethod {
    #[default]
    Maven,
    Mercury,
}

impl ComparisonMethod {
    pub fn comparator(self) -> &'static dyn VersionComparator {
        match self {
            ComparisonMethod::Maven => &MavenComparator,
            ComparisonMethod::Mercury => &MercuryComparator,
        }
    }
}

impl std::fmt::Display for ComparisonMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComparisonMethod::Maven => f.write_str("maven"),
            ComparisonMethod::Mercury => f.write_str("mercury"),
        }
    }
}

impl FromStr for ComparisonMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "maven" => Ok(ComparisonMethod::Maven),
            "mercury" => Ok(ComparisonMethod::Mercury),
            other => Err(ParseError::UnknownComparisonMethod {
                name: other.to_string(),
            }),
        }
    }
}
