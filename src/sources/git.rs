//! Git inspection of checked-out projects.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use git2::{BranchType, Repository};

use crate::core::Revision;
use crate::sources::inspect::{RepoInspector, RepoState};

/// Inspects git checkouts with libgit2.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitInspector;

impl GitInspector {
    /// Create a new git inspector.
    pub fn new() -> Self {
        GitInspector
    }

    fn read_state(repo: &Repository) -> Result<RepoState, git2::Error> {
        let head_ref = repo.head()?;
        let head = head_ref.peel_to_commit()?.id();

        let head_branch = if head_ref.is_branch() {
            head_ref.shorthand().map(str::to_string)
        } else {
            None
        };

        let mut branches = BTreeMap::new();
        for branch in repo.branches(Some(BranchType::Local))? {
            let (branch, _) = branch?;
            let Some(name) = branch.name()? else {
                continue;
            };
            if let Ok(commit) = branch.get().peel_to_commit() {
                branches.insert(name.to_string(), Revision::new(commit.id().to_string()));
            }
        }

        let mut tags = BTreeMap::new();
        for name in repo.tag_names(None)?.iter().flatten() {
            let reference = repo.find_reference(&format!("refs/tags/{}", name))?;
            // Tags on trees or blobs are not versions of the checkout.
            if let Ok(commit) = reference.peel_to_commit() {
                tags.insert(name.to_string(), Revision::new(commit.id().to_string()));
            }
        }

        Ok(RepoState {
            head: Revision::new(head.to_string()),
            head_branch,
            branches,
            tags,
        })
    }
}

impl RepoInspector for GitInspector {
    fn name(&self) -> &str {
        "git"
    }

    fn inspect(&self, dir: &Path) -> Result<RepoState> {
        let repo = Repository::open(dir)
            .with_context(|| format!("failed to open repository at {}", dir.display()))?;

        if repo.workdir().map_or(true, |workdir| !same_dir(workdir, dir)) {
            bail!("{} is not the root of a git checkout", dir.display());
        }

        Self::read_state(&repo)
            .with_context(|| format!("failed to read HEAD, branches and tags of {}", dir.display()))
    }
}

/// Compare two directories, tolerating trailing separators and symlinks.
fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a.components().eq(b.components()),
    }
}
