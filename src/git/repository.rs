use crate::error::{BumpyError, Result};
use crate::git::tag_refspec;
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository rooted at `path`
    ///
    /// Parent directories are not searched: `path` itself must be a
    /// repository (or its `.git` directory).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::open(path).map_err(|e| {
            BumpyError::repository(format!(
                "Failed to open repository '{}': {}",
                path.display(),
                e.message()
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn credentials_callbacks<'a>() -> git2::RemoteCallbacks<'a> {
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            let username = username_from_url.unwrap_or("git");

            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username) {
                    return Ok(cred);
                }

                if let Some(home) = dirs::home_dir() {
                    for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                        let path = home.join(".ssh").join(key);
                        if path.exists() {
                            if let Ok(cred) = git2::Cred::ssh_key(username, None, &path, None) {
                                return Ok(cred);
                            }
                        }
                    }
                }
            }

            git2::Cred::default()
        });
        callbacks
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self
            .repo
            .tag_names(None)
            .map_err(|e| BumpyError::repository(format!("Cannot list tags: {}", e.message())))?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn head_oid(&self) -> Result<Oid> {
        let commit = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| BumpyError::repository(format!("Cannot resolve HEAD: {}", e.message())))?;

        Ok(commit.id())
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<()> {
        let object = self
            .repo
            .find_object(oid, None)
            .map_err(|e| BumpyError::repository(format!("Cannot find object: {}", e.message())))?;

        self.repo.tag_lightweight(name, &object, false).map_err(|e| {
            BumpyError::repository(format!("Cannot create tag '{}': {}", name, e.message()))
        })?;

        Ok(())
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        let mut remote = self.repo.find_remote(remote).map_err(|e| {
            BumpyError::push(format!("Cannot find remote '{}': {}", remote, e.message()))
        })?;

        let mut callbacks = Self::credentials_callbacks();
        callbacks.push_update_reference(|refname, status| match status {
            Some(status) => Err(git2::Error::from_str(&format!(
                "remote rejected {}: {}",
                refname, status
            ))),
            None => Ok(()),
        });

        let mut push_options = git2::PushOptions::new();
        push_options.remote_callbacks(callbacks);

        let refspec = tag_refspec(tag_name);
        debug!(refspec = %refspec, "Pushing refspec");

        remote
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| match e.class() {
                git2::ErrorClass::Net => {
                    BumpyError::push(format!("Network error during push: {}", e.message()))
                }
                _ => BumpyError::push(format!("Failed to push tag '{}': {}", tag_name, e.message())),
            })?;

        Ok(())
    }
}
