use thiserror::Error;

/// Unified error type for bumpy operations
#[derive(Error, Debug)]
pub enum BumpyError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Failed to parse module file {path}: {reason}")]
    ModuleParse { path: String, reason: String },

    #[error("Cannot bump {bump} of {tag}: version component overflows")]
    VersionOverflow { tag: String, bump: String },

    #[error("Push failed: {0}")]
    Push(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in bumpy
pub type Result<T> = std::result::Result<T, BumpyError>;

impl BumpyError {
    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        BumpyError::Repository(msg.into())
    }

    /// Create a module parse error for the file at `path`
    pub fn module_parse(path: impl Into<String>, reason: impl Into<String>) -> Self {
        BumpyError::ModuleParse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an overflow error for a tag whose bump would wrap around
    pub fn version_overflow(tag: impl Into<String>, bump: impl ToString) -> Self {
        BumpyError::VersionOverflow {
            tag: tag.into(),
            bump: bump.to_string(),
        }
    }

    /// Create a push error with context
    pub fn push(msg: impl Into<String>) -> Self {
        BumpyError::Push(msg.into())
    }

    /// Create a missing argument error
    pub fn missing_argument(msg: impl Into<String>) -> Self {
        BumpyError::MissingArgument(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpyError::Config(msg.into())
    }
}
