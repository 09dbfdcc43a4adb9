use regex::Regex;
use std::sync::OnceLock;

/// Matches the `/vN` suffix segment of a module path
fn major_suffix() -> &'static Regex {
    static MAJOR_SUFFIX: OnceLock<Regex> = OnceLock::new();
    MAJOR_SUFFIX.get_or_init(|| Regex::new(r"^v(\d+)$").expect("static regex is valid"))
}

/// Extract the major version encoded in a module path's final segment.
///
/// `example.com/lib/v3` yields `Some(3)`. Paths without a `vN` segment yield
/// `None`, as do `v0` and `v1`, which are never spelled out in module paths.
///
/// # Example
/// ```
/// use bumpy::domain::module_major;
/// assert_eq!(module_major("github.com/acme/widgets/v5"), Some(5));
/// assert_eq!(module_major("github.com/acme/widgets"), None);
/// ```
pub fn module_major(module_path: &str) -> Option<u64> {
    let last_segment = module_path.rsplit('/').next()?;
    let captures = major_suffix().captures(last_segment)?;
    let major = captures.get(1)?.as_str().parse::<u64>().ok()?;

    (major >= 2).then_some(major)
}
