use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Known qualifier spellings and the family each one belongs to.
///
/// Lookups happen on the lower-cased token, and only whole tokens match:
/// `a` is an alias of `alpha`, `ab` is not.
pub const QUALIFIER_ALIASES: &[(&str, QualifierKind)] = &[
    ("alpha", QualifierKind::Alpha),
    ("a", QualifierKind::Alpha),
    ("beta", QualifierKind::Beta),
    ("b", QualifierKind::Beta),
    ("milestone", QualifierKind::Milestone),
    ("m", QualifierKind::Milestone),
    ("rc", QualifierKind::ReleaseCandidate),
    ("cr", QualifierKind::ReleaseCandidate),
    ("snapshot", QualifierKind::Snapshot),
    ("ga", QualifierKind::Release),
    ("final", QualifierKind::Release),
    ("release", QualifierKind::Release),
    ("sp", QualifierKind::ServicePack),
];

/// Pre-release ladder used when a qualifier segment is incremented.
const QUALIFIER_SUCCESSORS: &[(&str, &str)] = &[
    ("alpha", "beta"),
    ("beta", "milestone"),
    ("milestone", "rc"),
    ("a", "b"),
    ("b", "m"),
    ("m", "rc"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualifierKind {
    /// Zero-length token left behind by a leading or trailing separator.
    Blank,
    Alpha,
    Beta,
    Milestone,
    ReleaseCandidate,
    Snapshot,
    Release,
    ServicePack,
    /// Any word not listed in [`QUALIFIER_ALIASES`].
    Other,
}

impl QualifierKind {
    pub fn of(normalized: &str) -> Self {
        if normalized.is_empty() {
            return Self::Blank;
        }
        QUALIFIER_ALIASES
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map_or(Self::Other, |(_, kind)| *kind)
    }
}

/// A run of decimal digits of any length.
///
/// Equality, ordering and hashing ignore leading zeros, so `007` and `7`
/// are the same number. The original spelling is kept for display.
#[derive(Debug, Clone)]
pub struct Number {
    digits: String,
}

impl Number {
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            digits: digits.to_string(),
        })
    }

    /// The digits without leading zeros; `"0"` for zero.
    pub fn significant(&self) -> &str {
        let trimmed = self.digits.trim_start_matches('0');
        if trimmed.is_empty() { "0" } else { trimmed }
    }

    pub fn is_zero(&self) -> bool {
        self.significant() == "0"
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// The next integer, computed in decimal so no input can overflow.
    pub fn successor(&self) -> Self {
        let mut digits: Vec<char> = self.significant().chars().collect();
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == '9' {
                *digit = '0';
            } else {
                *digit = char::from(*digit as u8 + 1);
                carry = false;
                break;
            }
        }

        let mut digits: String = digits.into_iter().collect();
        if carry {
            digits.insert(0, '1');
        }
        Self { digits }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.significant(), other.significant());
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.digits)
    }
}

/// A non-numeric token such as `beta`, `SNAPSHOT` or `jre`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Qualifier {
    text: String,
    normalized: String,
}

impl Qualifier {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            normalized: text.to_ascii_lowercase(),
        }
    }

    /// The token as written in the version string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The token with ASCII letters lower-cased, used for alias lookups and
    /// case-insensitive ordering. Other characters are left as written.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn kind(&self) -> QualifierKind {
        QualifierKind::of(&self.normalized)
    }

    /// The next rung on the pre-release ladder, spelled like this one.
    ///
    /// Returns `None` for qualifiers that are not on the ladder, including
    /// `rc` which has nowhere left to go.
    pub fn successor(&self) -> Option<String> {
        let (_, next) = QUALIFIER_SUCCESSORS
            .iter()
            .find(|(from, _)| *from == self.normalized)?;

        let shouting = self.text.chars().all(|c| c.is_ascii_uppercase());
        Some(if shouting {
            next.to_ascii_uppercase()
        } else {
            next.to_string()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Numeric(Number),
    Qualifier(Qualifier),
}

impl Segment {
    /// Classifies a single token. Tokens made only of ASCII digits are numeric,
    /// everything else (including the empty token) is a qualifier.
    pub fn parse(token: &str) -> Self {
        match Number::parse(token) {
            Some(number) => Self::Numeric(number),
            None => Self::Qualifier(Qualifier::new(token)),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    pub fn is_qualifier(&self) -> bool {
        matches!(self, Self::Qualifier(_))
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Numeric(n) => write!(f, "{n}"),
            Segment::Qualifier(q) => f.write_str(q.text()),
        }
    }
}
