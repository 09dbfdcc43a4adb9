use std::fmt;

/// Non-fatal issues hit while bumping. Reported to the user, never abort the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The tag was created locally but could not be pushed
    PushFailed {
        tag: String,
        remote: String,
        reason: String,
    },
    /// The module declares a major version that has no tags yet
    NewModuleLineage { major: u64, tag: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::PushFailed {
                tag,
                remote,
                reason,
            } => {
                write!(
                    f,
                    "Tag '{}' was created locally but pushing to '{}' failed: {}",
                    tag, remote, reason
                )
            }
            BoundaryWarning::NewModuleLineage { major, tag } => {
                write!(
                    f,
                    "No tags found for module major version v{}, starting at '{}'",
                    major, tag
                )
            }
        }
    }
}
