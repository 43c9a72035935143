use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::ParseError;

/// The semantic meaning of a segment position.
///
/// The first four positions of a version are major, minor, incremental and
/// subincremental; every later position is a qualifier. Variants are declared
/// most significant first, so `Major < Minor` in the derived ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, DeserializeFromStr, SerializeDisplay,
)]
pub enum SegmentLevel {
    Major,
    Minor,
    Incremental,
    Subincremental,
    Qualifier,
}

impl SegmentLevel {
    pub const ALL: [SegmentLevel; 5] = [
        SegmentLevel::Major,
        SegmentLevel::Minor,
        SegmentLevel::Incremental,
        SegmentLevel::Subincremental,
        SegmentLevel::Qualifier,
    ];

    /// The raw segment position this level addresses.
    pub fn index(self) -> usize {
        match self {
            SegmentLevel::Major => 0,
            SegmentLevel::Minor => 1,
            SegmentLevel::Incremental => 2,
            SegmentLevel::Subincremental => 3,
            SegmentLevel::Qualifier => 4,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => SegmentLevel::Major,
            1 => SegmentLevel::Minor,
            2 => SegmentLevel::Incremental,
            3 => SegmentLevel::Subincremental,
            _ => SegmentLevel::Qualifier,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SegmentLevel::Major => "major",
            SegmentLevel::Minor => "minor",
            SegmentLevel::Incremental => "incremental",
            SegmentLevel::Subincremental => "subincremental",
            SegmentLevel::Qualifier => "qualifier",
        }
    }
}

impl std::fmt::Display for SegmentLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SegmentLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        SegmentLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == name)
            .ok_or(ParseError::UnknownSegmentLevel { name })
    }
}
