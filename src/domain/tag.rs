use crate::domain::Version;

/// Namespace prepended to tag names (e.g., "api/" in "api/v1.2.3")
///
/// An empty prefix matches every tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPrefix {
    pub prefix: String,
}

impl TagPrefix {
    /// Create a new tag prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        TagPrefix {
            prefix: prefix.into(),
        }
    }

    /// Remove the prefix from a raw tag name
    ///
    /// Returns `None` for tags that do not contain the prefix at all. Only the
    /// first occurrence is removed, wherever it appears in the name.
    pub fn strip(&self, tag: &str) -> Option<String> {
        if !tag.contains(&self.prefix) {
            return None;
        }

        Some(tag.replacen(&self.prefix, "", 1))
    }

    /// Compose the tag name for a version
    /// Example: prefix="api/", version="1.2.3" -> "api/v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        format!("{}v{}", self.prefix, version)
    }
}
