//! Picking updates for a version out of a list of candidates, limited by
//! range restrictions and by which segments are allowed to change.

pub mod policy;
pub mod range;
pub mod restriction;
pub mod selector;

pub use mvnup_version::{
    ComparisonMethod, ParseError, SegmentLevel, Version, VersionComparator, VersionError,
    compare, increment, parse_version, segment_count, segment_level,
};
pub use policy::UpdatePolicy;
pub use range::{RangeError, VersionRange};
pub use restriction::Restriction;
pub use selector::UpdateSelector;

/// Keeps the candidates inside `restriction`, in their original order.
pub fn filter_by_restriction<'a>(
    candidates: &'a [Version],
    restriction: &Restriction,
) -> Vec<&'a Version> {
    restriction.filter(candidates, &mvnup_version::MavenComparator)
}

pub fn unchanged_segment_level(policy: &UpdatePolicy) -> Option<SegmentLevel> {
    policy.unchanged_segment()
}

pub fn oldest_update<'a>(
    current: &Version,
    candidates: &'a [Version],
    policy: &UpdatePolicy,
    level: Option<SegmentLevel>,
) -> Result<Option<&'a Version>, VersionError> {
    let selector = UpdateSelector::new(current.clone(), candidates, *policy)?;
    Ok(selector.oldest_update(level))
}

pub fn newest_update<'a>(
    current: &Version,
    candidates: &'a [Version],
    policy: &UpdatePolicy,
    level: Option<SegmentLevel>,
) -> Result<Option<&'a Version>, VersionError> {
    let selector = UpdateSelector::new(current.clone(), candidates, *policy)?;
    Ok(selector.newest_update(level))
}

pub fn all_updates<'a>(
    current: &Version,
    candidates: &'a [Version],
    policy: &UpdatePolicy,
    level: Option<SegmentLevel>,
) -> Result<Vec<&'a Version>, VersionError> {
    let selector = UpdateSelector::new(current.clone(), candidates, *policy)?;
    Ok(selector.all_updates(level))
}
