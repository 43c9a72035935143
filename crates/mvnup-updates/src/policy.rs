use mvnup_version::{SegmentLevel, Version, VersionComparator, VersionError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::Restriction;

/// Which kinds of change an update is allowed to make.
///
/// Disallowing a level implies disallowing every more significant one, so
/// `allow_minor_updates: false` also pins the major segment regardless of
/// `allow_major_updates`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePolicy {
    pub allow_major_updates: bool,
    pub allow_minor_updates: bool,
    pub allow_incremental_updates: bool,
    /// Whether the ordinary update queries may return snapshot versions.
    pub allow_snapshots: bool,
}

impl Default for UpdatePolicy {
    fn default() -> Self {
        Self {
            allow_major_updates: true,
            allow_minor_updates: true,
            allow_incremental_updates: true,
            allow_snapshots: false,
        }
    }
}

impl UpdatePolicy {
    /// The most significant level that must stay the same, or `None` when
    /// anything may change.
    pub fn unchanged_segment(&self) -> Option<SegmentLevel> {
        if self.allow_major_updates {
            None
        } else if self.allow_minor_updates {
            Some(SegmentLevel::Major)
        } else if self.allow_incremental_updates {
            Some(SegmentLevel::Minor)
        } else {
            Some(SegmentLevel::Incremental)
        }
    }

    /// The window of versions this policy accepts as updates of `current`.
    ///
    /// Returns `Ok(None)` when `current` is too short to have the pinned
    /// segment, in which case nothing qualifies.
    pub fn restriction_for(
        &self,
        current: &Version,
        comparator: &dyn VersionComparator,
    ) -> Result<Option<Restriction>, VersionError> {
        let Some(unchanged) = self.unchanged_segment() else {
            return Ok(Some(Restriction::newer_than(current.clone())));
        };

        if unchanged.index() >= comparator.segment_count(current) {
            info!(
                version = %current,
                segment = %unchanged,
                "Ignoring version as the version number is too short"
            );
            return Ok(None);
        }

        let upper = comparator.increment(current, unchanged)?;
        debug!(%current, %upper, "Restricting updates");
        Ok(Some(Restriction::between(current.clone(), upper)))
    }

    /// Whether `candidate` leaves every pinned segment of `current` alone.
    pub fn keeps_pinned_segments(
        &self,
        current: &Version,
        candidate: &Version,
        comparator: &dyn VersionComparator,
    ) -> bool {
        match (self.unchanged_segment(), comparator.segment_level(current, candidate)) {
            (None, _) => true,
            (Some(_), None) => true,
            (Some(unchanged), Some(level)) => level > unchanged,
        }
    }
}
