//! Main workflow orchestration logic
//!
//! Ties the collaborators together: tag enumeration, module file, resolver,
//! tag creation and push. Kept separate from `main.rs` so the workflow can be
//! driven programmatically and against a mock repository.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{module_major, BumpKind, TagPrefix, Version};
use crate::error::Result;
use crate::git::{Git2Repository, Repository};
use crate::module_file::read_module_path;
use crate::resolver::{resolve, ResolveRequest};

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Repository to tag
    pub directory: PathBuf,

    /// Module file, or directory holding `go.mod`
    pub module_path: PathBuf,

    /// Tag prefix
    pub prefix: String,

    pub bump: BumpKind,

    /// Remote to push the new tag to
    pub push_remote: Option<String>,

    /// Preview mode - don't create tags or push
    pub dry_run: bool,
}

impl BumpWorkflowArgs {
    /// Patch bump of `directory`, reading the module file from the same place
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        let directory = directory.into();
        BumpWorkflowArgs {
            module_path: directory.clone(),
            directory,
            prefix: String::new(),
            bump: BumpKind::Patch,
            push_remote: None,
            dry_run: false,
        }
    }

    /// Take prefix, push remote and module location from a config file.
    ///
    /// A relative module location is resolved against the repository directory.
    pub fn with_config(mut self, config: &Config) -> Self {
        if let Some(prefix) = &config.prefix {
            self.prefix = prefix.clone();
        }
        if let Some(remote) = &config.push {
            self.push_remote = Some(remote.clone());
        }
        if let Some(module) = &config.module {
            self.module_path = self.directory.join(module);
        }
        self
    }
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The tag that was resolved (and created unless dry run)
    pub tag: String,

    /// The existing version the tag was bumped from
    pub previous: Option<Version>,

    /// Whether the bump kind was applied
    pub bumped: bool,

    /// Whether the tag was created locally
    pub created: bool,

    /// Whether the tag was pushed to remote
    pub pushed: bool,

    /// Non-fatal issues encountered along the way
    pub warnings: Vec<BoundaryWarning>,
}

/// Open the repository at `args.directory` and run the bump workflow on it.
pub fn run(args: &BumpWorkflowArgs) -> Result<WorkflowResult> {
    let repo = Git2Repository::open(&args.directory)?;
    run_bump_workflow(&repo, args)
}

/// Main bump workflow
///
/// 1. Enumerate tags
/// 2. Read the module major from the module file
/// 3. Resolve the next tag
/// 4. Create it at HEAD
/// 5. Optionally push it; a failed push is reported as a warning
pub fn run_bump_workflow<R: Repository>(
    repo: &R,
    args: &BumpWorkflowArgs,
) -> Result<WorkflowResult> {
    info!(
        "Bumping {} version in {}",
        args.bump,
        args.directory.display()
    );

    let tags = repo.list_tags()?;

    let module_major = read_module_path(&args.module_path)?
        .as_deref()
        .and_then(module_major);

    let resolution = resolve(&ResolveRequest {
        prefix: TagPrefix::new(args.prefix.clone()),
        tags,
        module_major,
        bump: args.bump,
    })?;

    let mut warnings = Vec::new();
    if let (Some(major), None) = (module_major, &resolution.previous) {
        warnings.push(BoundaryWarning::NewModuleLineage {
            major,
            tag: resolution.tag.clone(),
        });
    }

    let mut result = WorkflowResult {
        tag: resolution.tag,
        previous: resolution.previous,
        bumped: resolution.bumped,
        created: false,
        pushed: false,
        warnings,
    };

    if args.dry_run {
        info!("Dry run, not creating tag {}", result.tag);
        return Ok(result);
    }

    let head = repo.head_oid()?;

    info!("Creating tag {}", result.tag);
    repo.create_tag(&result.tag, head)?;
    result.created = true;

    if let Some(remote) = &args.push_remote {
        info!("Pushing tag {} to {}", result.tag, remote);
        match repo.push_tag(remote, &result.tag) {
            Ok(()) => result.pushed = true,
            Err(e) => {
                warn!(error = %e, "Failed to push tag {}", result.tag);
                result.warnings.push(BoundaryWarning::PushFailed {
                    tag: result.tag.clone(),
                    remote: remote.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(result)
}
