use std::cmp::Ordering;
use std::str::FromStr;

use mvnup_version::{MavenComparator, Version, VersionComparator};

use crate::Restriction;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("Empty version range")]
    Empty,
    #[error("Unbounded range: {spec}")]
    Unbalanced { spec: String },
    #[error("Single version must be surrounded by []: {spec}")]
    ExactVersionNotInclusive { spec: String },
    #[error("Invalid restriction, expected at most two bounds: {spec}")]
    TooManyBounds { spec: String },
    #[error("Range defies version ordering: {spec}")]
    BoundsOutOfOrder { spec: String },
    #[error("Ranges overlap: {spec}")]
    Overlapping { spec: String },
    #[error("Only fully-qualified sets allowed in multiple set scenario: {spec}")]
    TrailingText { spec: String },
}

/// A parsed range spec such as `[1.0,2.0)`, `(,1.0],[1.2,)` or a bare `1.5`.
///
/// A bare version is a soft requirement: it is remembered as the
/// recommended version and restricts nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    recommended: Option<Version>,
    restrictions: Vec<Restriction>,
}

impl VersionRange {
    pub fn parse(spec: &str) -> Result<Self, RangeError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(RangeError::Empty);
        }

        if !spec.starts_with(['[', '(']) {
            return Ok(Self {
                recommended: Some(Version::parse(spec)),
                restrictions: vec![Restriction::everything()],
            });
        }

        let mut restrictions: Vec<Restriction> = Vec::new();
        let mut rest = spec;
        while rest.starts_with(['[', '(']) {
            let Some(close) = rest.find([']', ')']) else {
                return Err(RangeError::Unbalanced {
                    spec: spec.to_string(),
                });
            };
            let restriction = parse_restriction(&rest[..=close])?;

            if let Some(previous) = restrictions.last()
                && overlaps(previous, &restriction)
            {
                return Err(RangeError::Overlapping {
                    spec: spec.to_string(),
                });
            }
            restrictions.push(restriction);

            rest = rest[close + 1..].trim_start();
            if let Some(after_comma) = rest.strip_prefix(',') {
                rest = after_comma.trim_start();
            }
        }

        if !rest.is_empty() {
            return Err(RangeError::TrailingText {
                spec: spec.to_string(),
            });
        }

        Ok(Self {
            recommended: None,
            restrictions,
        })
    }

    pub fn recommended(&self) -> Option<&Version> {
        self.recommended.as_ref()
    }

    pub fn restrictions(&self) -> &[Restriction] {
        &self.restrictions
    }

    /// True when the range narrows anything down, i.e. it was not a bare version.
    pub fn has_restrictions(&self) -> bool {
        self.recommended.is_none()
    }

    pub fn contains(&self, version: &Version, comparator: &dyn VersionComparator) -> bool {
        self.restrictions
            .iter()
            .any(|restriction| restriction.contains(version, comparator))
    }

    /// Keeps the candidates inside any of the restrictions, in their original order.
    pub fn filter<'a, I>(&self, candidates: I, comparator: &dyn VersionComparator) -> Vec<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        candidates
            .into_iter()
            .filter(|candidate| self.contains(candidate, comparator))
            .collect()
    }
}

fn parse_restriction(spec: &str) -> Result<Restriction, RangeError> {
    let error_spec = || spec.to_string();
    let lower_inclusive = spec.starts_with('[');
    let upper_inclusive = spec.ends_with(']');
    let inner = spec[1..spec.len() - 1].trim();

    let Some((lower, upper)) = inner.split_once(',') else {
        if !lower_inclusive || !upper_inclusive || inner.is_empty() {
            return Err(RangeError::ExactVersionNotInclusive { spec: error_spec() });
        }
        return Ok(Restriction::exactly(Version::parse(inner)));
    };

    if upper.contains(',') {
        return Err(RangeError::TooManyBounds { spec: error_spec() });
    }

    let bound = |text: &str| {
        let text = text.trim();
        (!text.is_empty()).then(|| Version::parse(text))
    };
    let (lower_bound, upper_bound) = (bound(lower), bound(upper));

    if let (Some(lower), Some(upper)) = (&lower_bound, &upper_bound)
        && MavenComparator.compare(upper, lower) == Ordering::Less
    {
        return Err(RangeError::BoundsOutOfOrder { spec: error_spec() });
    }

    Ok(Restriction::new(
        lower_bound,
        lower_inclusive,
        upper_bound,
        upper_inclusive,
    ))
}

fn overlaps(previous: &Restriction, next: &Restriction) -> bool {
    let (Some(upper), Some(lower)) = (&previous.upper_bound, &next.lower_bound) else {
        return true;
    };
    match MavenComparator.compare(upper, lower) {
        Ordering::Greater => true,
        Ordering::Equal => previous.upper_inclusive && next.lower_inclusive,
        Ordering::Less => false,
    }
}

impl FromStr for VersionRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for VersionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(recommended) = &self.recommended {
            return write!(f, "{recommended}");
        }
        for (index, restriction) in self.restrictions.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{restriction}")?;
        }
        Ok(())
    }
}
