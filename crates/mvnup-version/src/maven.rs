use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::comparator::VersionComparator;
use crate::segment::{Number, QualifierKind, Segment};
use crate::Version;

/// The default ordering, following conventional Maven release numbering.
///
/// Each segment maps onto one chain, lowest first:
///
/// blank < alpha < beta < milestone < rc < unknown words < snapshot
/// < release (`ga`, `final`, `release`, `0`, or nothing at all) < sp < 1 < 2 < ...
///
/// Aliases (`a`, `b`, `m`, `cr`) fold into their families and unknown words
/// compare case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct MavenComparator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Rank<'a> {
    Blank,
    Alpha,
    Beta,
    Milestone,
    ReleaseCandidate,
    Other(&'a str),
    Snapshot,
    Release,
    ServicePack,
    Number(&'a Number),
}

fn rank(segment: Option<&Segment>) -> Rank<'_> {
    match segment {
        None => Rank::Release,
        Some(Segment::Numeric(n)) if n.is_zero() => Rank::Release,
        Some(Segment::Numeric(n)) => Rank::Number(n),
        Some(Segment::Qualifier(q)) => match q.kind() {
            QualifierKind::Blank => Rank::Blank,
            QualifierKind::Alpha => Rank::Alpha,
            QualifierKind::Beta => Rank::Beta,
            QualifierKind::Milestone => Rank::Milestone,
            QualifierKind::ReleaseCandidate => Rank::ReleaseCandidate,
            QualifierKind::Snapshot => Rank::Snapshot,
            QualifierKind::Release => Rank::Release,
            QualifierKind::ServicePack => Rank::ServicePack,
            QualifierKind::Other => Rank::Other(q.normalized()),
        },
    }
}

impl MavenComparator {
    /// Hashes the ranks that decide equality. Trailing release ranks are
    /// skipped because a missing position compares as release.
    pub(crate) fn hash_version<H: Hasher>(&self, version: &Version, state: &mut H) {
        let ranks: Vec<Rank<'_>> = version.segments().iter().map(|s| rank(Some(s))).collect();
        let significant = ranks
            .iter()
            .rposition(|r| *r != Rank::Release)
            .map_or(0, |i| i + 1);
        ranks[..significant].hash(state);
    }
}

impl VersionComparator for MavenComparator {
    fn compare_segments(&self, a: Option<&Segment>, b: Option<&Segment>) -> Ordering {
        rank(a).cmp(&rank(b))
    }
}
