use std::cmp::Ordering;

use crate::comparator::VersionComparator;
use crate::segment::{Number, Segment};

/// The older ordering kept for builds that still rely on it.
///
/// Only the full words `alpha`, `beta`, `milestone`, `rc` and `snapshot`
/// carry meaning (in any case). Every other word, including `ga`, `sp` and
/// the one-letter aliases, ranks above a release and below any non-zero
/// number, and words compare case-sensitively among themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct MercuryComparator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank<'a> {
    Blank,
    Alpha,
    Beta,
    Milestone,
    ReleaseCandidate,
    Snapshot,
    Release,
    Word(&'a str),
    Number(&'a Number),
}

fn rank(segment: Option<&Segment>) -> Rank<'_> {
    match segment {
        None => Rank::Release,
        Some(Segment::Numeric(n)) if n.is_zero() => Rank::Release,
        Some(Segment::Numeric(n)) => Rank::Number(n),
        Some(Segment::Qualifier(q)) => match q.normalized() {
            "" => Rank::Blank,
            "alpha" => Rank::Alpha,
            "beta" => Rank::Beta,
            "milestone" => Rank::Milestone,
            "rc" => Rank::ReleaseCandidate,
            "snapshot" => Rank::Snapshot,
            _ => Rank::Word(q.text()),
        },
    }
}

impl VersionComparator for MercuryComparator {
    fn compare_segments(&self, a: Option<&Segment>, b: Option<&Segment>) -> Ordering {
        rank(a).cmp(&rank(b))
    }
}
