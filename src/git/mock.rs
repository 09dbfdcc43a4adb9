use crate::error::{BumpyError, Result};
use crate::git::Repository;
use git2::Oid;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: RefCell<HashMap<String, Oid>>,
    head: Option<Oid>,
    remotes: Vec<String>,
    pushed: RefCell<Vec<(String, String)>>,
}

impl MockRepository {
    /// Create a new empty mock repository with HEAD at a fixed commit
    pub fn new() -> Self {
        MockRepository {
            tags: RefCell::new(HashMap::new()),
            head: Some(Oid::from_bytes(&[0xab; 20]).unwrap_or_else(|_| Oid::zero())),
            remotes: Vec::new(),
            pushed: RefCell::new(Vec::new()),
        }
    }

    /// Create a mock repository holding the given tags, all at HEAD
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let repo = Self::new();
        for tag in tags {
            repo.add_tag(tag, repo.head.unwrap_or_else(Oid::zero));
        }
        repo
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&self, name: impl Into<String>, oid: Oid) {
        self.tags.borrow_mut().insert(name.into(), oid);
    }

    /// Register a remote that accepts pushes
    pub fn add_remote(&mut self, name: impl Into<String>) {
        self.remotes.push(name.into());
    }

    /// Simulate an unborn HEAD
    pub fn clear_head(&mut self) {
        self.head = None;
    }

    /// Whether a tag with this name exists
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.borrow().contains_key(name)
    }

    /// (remote, tag) pairs pushed so far
    pub fn pushed(&self) -> Vec<(String, String)> {
        self.pushed.borrow().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.borrow().keys().cloned().collect())
    }

    fn head_oid(&self) -> Result<Oid> {
        self.head
            .ok_or_else(|| BumpyError::repository("Cannot resolve HEAD: unborn branch"))
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<()> {
        if self.has_tag(name) {
            return Err(BumpyError::repository(format!(
                "Cannot create tag '{}': tag already exists",
                name
            )));
        }
        self.add_tag(name, oid);
        Ok(())
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        if !self.remotes.iter().any(|r| r == remote) {
            return Err(BumpyError::push(format!("Cannot find remote '{}'", remote)));
        }
        self.pushed
            .borrow_mut()
            .push((remote.to_string(), tag_name.to_string()));
        Ok(())
    }
}
