//! Next-tag resolution.
//!
//! Pure over its inputs: the caller loads the tag list and the module major
//! beforehand, so resolution never touches git or the filesystem.

use tracing::debug;

use crate::domain::{BumpKind, TagPrefix, Version};
use crate::error::{BumpyError, Result};

/// Everything needed to compute the next tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveRequest {
    /// Tag namespace, possibly empty
    pub prefix: TagPrefix,
    /// Raw tag names as enumerated from the repository, in any order
    pub tags: Vec<String>,
    /// Major version declared by the module path, if any
    pub module_major: Option<u64>,
    pub bump: BumpKind,
}

/// Outcome of a resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Full tag name including prefix, e.g. "api/v1.4.0"
    pub tag: String,
    pub version: Version,
    /// The existing tag version the result was bumped from
    pub previous: Option<Version>,
    pub bumped: bool,
}

/// Parse every tag under `prefix` into a version, lowest first.
///
/// Tags without the prefix and tags that are not semantic versions are
/// skipped. The sort is stable, so equal versions keep enumeration order.
pub fn collect_versions(prefix: &TagPrefix, tags: &[String]) -> Vec<Version> {
    let mut versions: Vec<Version> = tags
        .iter()
        .filter_map(|tag| {
            let stripped = prefix.strip(tag)?;
            match Version::parse(&stripped) {
                Ok(version) => Some(version),
                Err(e) => {
                    debug!(tag = %tag, error = %e, "Skipping tag that is not a semantic version");
                    None
                }
            }
        })
        .collect();

    versions.sort();
    versions
}

/// Compute the next tag for a request.
///
/// | tags      | module major          | baseline            | bump? |
/// |-----------|-----------------------|---------------------|-------|
/// | none      | none                  | 0.0.0               | no    |
/// | none      | M                     | M.0.0               | no    |
/// | some      | none                  | highest tag         | yes   |
/// | some      | M, tagged             | highest M.x.y tag   | yes   |
/// | some      | M, never tagged       | M.0.0               | no    |
///
/// Fails only when bumping the baseline would overflow a version component.
pub fn resolve(request: &ResolveRequest) -> Result<Resolution> {
    let versions = collect_versions(&request.prefix, &request.tags);

    let previous = match request.module_major {
        Some(major) => versions.iter().rev().find(|v| v.major() == major),
        None => versions.last(),
    }
    .cloned();

    let (version, bumped) = match (&previous, request.module_major) {
        (Some(latest), _) => {
            let next = latest.bump(request.bump).ok_or_else(|| {
                BumpyError::version_overflow(request.prefix.format(latest), request.bump)
            })?;
            (next, true)
        }
        (None, Some(major)) => (Version::new(major, 0, 0), false),
        (None, None) => (Version::new(0, 0, 0), false),
    };

    Ok(Resolution {
        tag: request.prefix.format(&version),
        version,
        previous,
        bumped,
    })
}
