use std::fmt;

/// Semantic version parsed from a tag
///
/// Ordered by semver precedence, which for plain `X.Y.Z` versions is the
/// lexicographic order on (major, minor, patch).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(semver::Version);

impl Version {
    /// Create a new version without pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version(semver::Version::new(major, minor, patch))
    }

    /// Parse a version from the unprefixed part of a tag (e.g., "v1.2.3" -> Version(1,2,3))
    ///
    /// A leading `v` or `V` is optional. Short cores such as `v1` or `v1.2` are
    /// padded with zeros and leading zeros (`v01.2.3`) are dropped before
    /// handing the text to the semver parser.
    pub fn parse(text: &str) -> Result<Self, semver::Error> {
        let clean = text.strip_prefix(|c: char| c == 'v' || c == 'V').unwrap_or(text);

        let split = clean.find(|c: char| c == '-' || c == '+').unwrap_or(clean.len());
        let (core, rest) = clean.split_at(split);

        let components: Vec<&str> = core.split('.').map(trim_leading_zeros).collect();
        let core = components.join(".");

        let normalized = match components.len() {
            1 if !core.is_empty() => format!("{}.0.0{}", core, rest),
            2 => format!("{}.0{}", core, rest),
            _ => format!("{}{}", core, rest),
        };

        semver::Version::parse(&normalized).map(Version)
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// Bump version according to bump kind
    ///
    /// Pre-release and build metadata never survive a bump. A pre-release
    /// patch bump yields the release it precedes (`1.2.3-rc.1` -> `1.2.3`).
    /// Returns `None` when the incremented component would overflow.
    pub fn bump(&self, kind: BumpKind) -> Option<Self> {
        let is_prerelease = !self.0.pre.is_empty();

        let next = match kind {
            BumpKind::Minor => Version::new(self.0.major, self.0.minor.checked_add(1)?, 0),
            BumpKind::Patch if is_prerelease => {
                Version::new(self.0.major, self.0.minor, self.0.patch)
            }
            BumpKind::Patch => {
                Version::new(self.0.major, self.0.minor, self.0.patch.checked_add(1)?)
            }
        };
        Some(next)
    }
}

/// "007" -> "7", "0" and non-numeric components unchanged
fn trim_leading_zeros(component: &str) -> &str {
    if component.len() > 1 && component.bytes().all(|b| b.is_ascii_digit()) {
        let trimmed = component.trim_start_matches('0');
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    } else {
        component
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which component of the version to increment
///
/// No major kind: major versions only change through the module path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpKind {
    Minor,
    #[default]
    Patch,
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpKind::Minor => write!(f, "minor"),
            BumpKind::Patch => write!(f, "patch"),
        }
    }
}
