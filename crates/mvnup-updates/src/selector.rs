use std::collections::BTreeMap;

use mvnup_version::{MavenComparator, SegmentLevel, Version, VersionComparator, VersionError};
use tracing::debug;

use crate::{Restriction, UpdatePolicy};

/// Answers update queries for one current version against a set of
/// candidates.
///
/// A candidate is an update when it lies inside the policy's restriction,
/// leaves the pinned segments alone, and (unless the policy allows them) is
/// not a snapshot. A scoped query additionally requires the first change to
/// be at the scope level or a less significant one.
#[derive(Debug, Clone)]
pub struct UpdateSelector<'a> {
    current: Version,
    candidates: &'a [Version],
    policy: UpdatePolicy,
    comparator: &'a dyn VersionComparator,
    restriction: Option<Restriction>,
}

impl<'a> UpdateSelector<'a> {
    pub fn new(
        current: Version,
        candidates: &'a [Version],
        policy: UpdatePolicy,
    ) -> Result<Self, VersionError> {
        Self::with_comparator(current, candidates, policy, &MavenComparator)
    }

    pub fn with_comparator(
        current: Version,
        candidates: &'a [Version],
        policy: UpdatePolicy,
        comparator: &'a dyn VersionComparator,
    ) -> Result<Self, VersionError> {
        let restriction = policy.restriction_for(&current, comparator)?;
        debug!(
            %current,
            candidates = candidates.len(),
            restriction = ?restriction.as_ref().map(ToString::to_string),
            "Selecting updates"
        );
        Ok(Self {
            current,
            candidates,
            policy,
            comparator,
            restriction,
        })
    }

    pub fn current(&self) -> &Version {
        &self.current
    }

    pub fn policy(&self) -> &UpdatePolicy {
        &self.policy
    }

    /// The window updates must fall in, or `None` when nothing can qualify.
    pub fn restriction(&self) -> Option<&Restriction> {
        self.restriction.as_ref()
    }

    fn qualifying(
        &self,
        scope: Option<SegmentLevel>,
        snapshots: bool,
    ) -> impl Iterator<Item = &'a Version> + '_ {
        self.candidates
            .iter()
            .filter(move |candidate| self.qualifies(candidate, scope, snapshots))
    }

    fn qualifies(&self, candidate: &Version, scope: Option<SegmentLevel>, snapshots: bool) -> bool {
        let Some(restriction) = &self.restriction else {
            return false;
        };
        if !restriction.contains(candidate, self.comparator) {
            return false;
        }
        let Some(level) = self.comparator.segment_level(&self.current, candidate) else {
            return false;
        };
        if !self
            .policy
            .keeps_pinned_segments(&self.current, candidate, self.comparator)
        {
            return false;
        }
        if let Some(scope) = scope
            && level < scope
        {
            return false;
        }
        snapshots || !candidate.is_snapshot()
    }

    /// Every update in `scope`, oldest first. Equal versions keep their input order.
    pub fn all_updates(&self, scope: Option<SegmentLevel>) -> Vec<&'a Version> {
        let mut updates: Vec<_> = self.qualifying(scope, self.policy.allow_snapshots).collect();
        updates.sort_by(|a, b| self.comparator.compare(a, b));
        updates
    }

    pub fn oldest_update(&self, scope: Option<SegmentLevel>) -> Option<&'a Version> {
        self.qualifying(scope, self.policy.allow_snapshots)
            .min_by(|a, b| self.comparator.compare(a, b))
    }

    pub fn newest_update(&self, scope: Option<SegmentLevel>) -> Option<&'a Version> {
        self.qualifying(scope, self.policy.allow_snapshots)
            .max_by(|a, b| self.comparator.compare(a, b))
    }

    /// The newest snapshot in `scope`, whatever the policy says about snapshots.
    pub fn newest_snapshot(&self, scope: Option<SegmentLevel>) -> Option<&'a Version> {
        self.qualifying(scope, true)
            .filter(|candidate| candidate.is_snapshot())
            .max_by(|a, b| self.comparator.compare(a, b))
    }

    /// Every update grouped by the level at which it first differs from the
    /// current version, each group oldest first.
    pub fn updates_by_level(&self) -> BTreeMap<SegmentLevel, Vec<&'a Version>> {
        let mut grouped: BTreeMap<SegmentLevel, Vec<&'a Version>> = BTreeMap::new();
        for update in self.all_updates(None) {
            if let Some(level) = self.comparator.segment_level(&self.current, update) {
                grouped.entry(level).or_default().push(update);
            }
        }
        grouped
    }

    pub fn is_update_available(&self) -> bool {
        self.qualifying(None, self.policy.allow_snapshots)
            .next()
            .is_some()
    }
}
