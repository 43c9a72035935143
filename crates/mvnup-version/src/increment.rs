use std::cmp::Ordering;

use crate::segment::Segment;
use crate::version::SNAPSHOT_SUFFIX;
use crate::{SegmentLevel, Version, VersionError};

/// Produces the first snapshot of the next line at `level`.
///
/// Any snapshot marker on `version` is dropped first. The segment at `level`
/// is then advanced: numbers by one, qualifiers one rung up the
/// `alpha → beta → milestone → rc` ladder. Every later segment becomes `0`,
/// separators are kept, and `-SNAPSHOT` is appended, so `5.0.1` at
/// [`SegmentLevel::Minor`] becomes `5.1.0-SNAPSHOT`.
///
/// Fails with [`VersionError::InvalidSegmentLevel`] when the version has no
/// segment at `level`, or when that segment is a qualifier off the ladder.
pub fn increment_segment(version: &Version, level: SegmentLevel) -> Result<Version, VersionError> {
    let invalid = || VersionError::InvalidSegmentLevel {
        level,
        version: version.to_string(),
    };

    let base = match version.release_part() {
        Some(release) => Version::parse(release),
        None => version.clone(),
    };

    let target = level.index();
    if target >= base.segment_count() {
        return Err(invalid());
    }

    let mut next = String::with_capacity(base.as_str().len() + SNAPSHOT_SUFFIX.len() + 1);
    let mut previous_numeric = None;

    for (index, (separator, segment)) in base.separators().iter().zip(base.segments()).enumerate() {
        let (text, numeric) = match index.cmp(&target) {
            Ordering::Less => (segment.to_string(), segment.is_numeric()),
            Ordering::Equal => match segment {
                Segment::Numeric(n) => (n.successor().to_string(), true),
                Segment::Qualifier(q) => (q.successor().ok_or_else(invalid)?, false),
            },
            Ordering::Greater => ("0".to_string(), true),
        };

        // A digit/letter boundary has no separator text; two numbers need one.
        if separator.is_empty() && previous_numeric == Some(true) && numeric {
            next.push('.');
        } else {
            next.push_str(separator);
        }
        next.push_str(&text);
        previous_numeric = Some(numeric);
    }

    next.push_str(SNAPSHOT_SUFFIX);
    Ok(Version::parse(next))
}
