use std::cmp::Ordering;

use mvnup_version::{Version, VersionComparator};

/// A single interval of versions. A missing bound is unbounded on that side.
///
/// Bounds are only checked for order when parsed from a range spec. A
/// restriction built by hand with its lower bound above its upper bound
/// simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Restriction {
    pub lower_bound: Option<Version>,
    pub lower_inclusive: bool,
    pub upper_bound: Option<Version>,
    pub upper_inclusive: bool,
}

impl Restriction {
    pub fn new(
        lower_bound: Option<Version>,
        lower_inclusive: bool,
        upper_bound: Option<Version>,
        upper_inclusive: bool,
    ) -> Self {
        Self {
            lower_bound,
            lower_inclusive,
            upper_bound,
            upper_inclusive,
        }
    }

    /// `(,)`
    pub fn everything() -> Self {
        Self::default()
    }

    /// `[v]`
    pub fn exactly(version: Version) -> Self {
        Self::new(Some(version.clone()), true, Some(version), true)
    }

    /// `(v,)`
    pub fn newer_than(version: Version) -> Self {
        Self::new(Some(version), false, None, false)
    }

    /// `(lower,upper)`
    pub fn between(lower: Version, upper: Version) -> Self {
        Self::new(Some(lower), false, Some(upper), false)
    }

    pub fn contains(&self, version: &Version, comparator: &dyn VersionComparator) -> bool {
        let above_lower = self.lower_bound.as_ref().is_none_or(|lower| {
            match comparator.compare(version, lower) {
                Ordering::Greater => true,
                Ordering::Equal => self.lower_inclusive,
                Ordering::Less => false,
            }
        });
        let below_upper = self.upper_bound.as_ref().is_none_or(|upper| {
            match comparator.compare(version, upper) {
                Ordering::Less => true,
                Ordering::Equal => self.upper_inclusive,
                Ordering::Greater => false,
            }
        });
        above_lower && below_upper
    }

    /// Keeps the candidates inside this restriction, in their original order.
    pub fn filter<'a, I>(&self, candidates: I, comparator: &dyn VersionComparator) -> Vec<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        candidates
            .into_iter()
            .filter(|candidate| self.contains(candidate, comparator))
            .collect()
    }

    pub(crate) fn is_exact(&self) -> bool {
        self.lower_inclusive
            && self.upper_inclusive
            && self.lower_bound.is_some()
            && self.lower_bound.as_ref().map(Version::as_str)
                == self.upper_bound.as_ref().map(Version::as_str)
    }
}

impl std::fmt::Display for Restriction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_exact()
            && let Some(version) = &self.lower_bound
        {
            return write!(f, "[{version}]");
        }

        f.write_str(if self.lower_inclusive { "[" } else { "(" })?;
        if let Some(lower) = &self.lower_bound {
            write!(f, "{lower}")?;
        }
        f.write_str(",")?;
        if let Some(upper) = &self.upper_bound {
            write!(f, "{upper}")?;
        }
        f.write_str(if self.upper_inclusive { "]" } else { ")" })
    }
}
