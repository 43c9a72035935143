use std::cmp::Ordering;
use std::convert::Infallible;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::comparator::{MavenComparator, VersionComparator};
use crate::segment::Segment;
use crate::token::tokenize;

/// Matches `-SNAPSHOT` and deployed timestamp snapshots such as
/// `1.0-20240102.030405-7`.
static SNAPSHOT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+)-((SNAPSHOT)|(\d{8}\.\d{6}-\d+))$").unwrap());

pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// A parsed version string.
///
/// Parsing never fails. Equality, ordering and hashing follow the default
/// ([`MavenComparator`]) ordering rather than the text, so `1.0`, `1` and
/// `1-ga` are all equal.
#[derive(Debug, Clone, DeserializeFromStr, SerializeDisplay)]
pub struct Version {
    raw: String,
    segments: Vec<Segment>,
    separators: Vec<String>,
}

impl Version {
    pub fn parse(text: impl AsRef<str>) -> Self {
        let raw = text.as_ref();
        let tokens = tokenize(raw);

        let separators = tokens.iter().map(|t| t.separator.to_string()).collect();
        let segments = tokens.iter().map(|t| Segment::parse(t.text)).collect();

        Self {
            raw: raw.to_string(),
            segments,
            separators,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Separator text preceding each segment; parallel to [`Version::segments`].
    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// Number of raw tokens, not normalized levels: `5.0.a.1.4.5` has six.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_snapshot(&self) -> bool {
        SNAPSHOT_REGEX.is_match(&self.raw)
    }

    /// The version with any snapshot marker removed, or `None` if this is
    /// not a snapshot.
    pub fn release_part(&self) -> Option<&str> {
        SNAPSHOT_REGEX
            .captures(&self.raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// A timestamped snapshot such as `1.0-20240102.030405-7` maps back to
    /// `1.0-SNAPSHOT`; every other version maps to itself.
    pub fn base_version(&self) -> Version {
        match SNAPSHOT_REGEX.captures(&self.raw) {
            Some(caps) if caps.get(4).is_some() => {
                Version::parse(format!("{}{SNAPSHOT_SUFFIX}", &caps[1]))
            }
            _ => self.clone(),
        }
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Version::parse(s))
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Version::parse(s)
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Version::parse(s)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        MavenComparator.hash_version(self, state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        MavenComparator.compare(self, other)
    }
}
