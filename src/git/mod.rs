//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the handful of Git
//! operations bumpy needs, allowing the bump workflow to run against a real
//! repository or against a mock in tests.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations are:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use bumpy::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let head = repo.head_oid()?;
//! repo.create_tag("v1.0.0", head)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Common git operation trait for abstraction
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map failures
/// to [crate::error::BumpyError::Repository], except [Repository::push_tag]
/// which reports [crate::error::BumpyError::Push] so callers can treat it as
/// non-fatal.
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// Returns short names (`v1.0.0`, not `refs/tags/v1.0.0`). The order is
    /// unspecified; callers must sort what they need.
    ///
    /// # Example
    /// ```rust
    /// # use bumpy::git::Repository;
    /// # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
    /// for tag in repo.list_tags()? {
    ///     println!("Tag: {}", tag);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Get the OID of the commit HEAD points to
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the HEAD commit
    /// * `Err` - If HEAD is unborn or cannot be resolved to a commit
    fn head_oid(&self) -> Result<Oid>;

    /// Create a lightweight tag at given OID
    ///
    /// # Arguments
    /// * `name` - Name for the new tag
    /// * `oid` - Object ID of the commit to tag
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists, OID doesn't exist, or Git error occurs
    fn create_tag(&self, name: &str, oid: Oid) -> Result<()>;

    /// Push a single tag to a remote
    ///
    /// Pushes `refs/tags/<name>:refs/tags/<name>`.
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin", "upstream")
    /// * `tag_name` - Tag to push
    ///
    /// # Example
    /// ```rust
    /// # use bumpy::git::Repository;
    /// # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
    /// repo.push_tag("origin", "v1.0.1")?;
    /// # Ok(())
    /// # }
    /// ```
    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()>;
}

/// Refspec that pushes a local tag to the same name on a remote
pub fn tag_refspec(tag_name: &str) -> String {
    format!("refs/tags/{}:refs/tags/{}", tag_name, tag_name)
}
