//! Repository inspection and version classification.
//!
//! A [`RepoInspector`] reports the local state of a checkout; [`classify`]
//! turns that state into the most specific [`Version`] that describes it.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use crate::core::version::parse_semver_tag;
use crate::core::{Revision, Version};

/// Local state of a repository checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoState {
    /// The checked-out commit
    pub head: Revision,

    /// Branch HEAD is attached to, if it is not detached
    pub head_branch: Option<String>,

    /// Local branch name -> tip commit
    pub branches: BTreeMap<String, Revision>,

    /// Tag name -> commit it points at
    pub tags: BTreeMap<String, Revision>,
}

/// Reports the checked-out state of a repository directory.
///
/// Implementations inspect local state only and never touch the network.
pub trait RepoInspector {
    /// Name of the version-control system (for messages).
    fn name(&self) -> &str;

    /// Inspect the repository rooted exactly at `dir`.
    fn inspect(&self, dir: &Path) -> Result<RepoState>;
}

/// Classify a checkout, most specific first: branch, semver tag, revision.
pub fn classify(state: &RepoState) -> Version {
    let head = &state.head;

    let branch = state
        .head_branch
        .as_ref()
        .filter(|name| state.branches.get(*name).map_or(true, |tip| tip == head))
        .or_else(|| {
            state
                .branches
                .iter()
                .find(|(_, tip)| *tip == head)
                .map(|(name, _)| name)
        });

    if let Some(name) = branch {
        tracing::debug!("{} is the tip of branch {}", head, name);
        return Version::branch(name.clone()).is(head.clone());
    }

    let tag = state
        .tags
        .iter()
        .filter(|(_, rev)| *rev == head)
        .filter_map(|(name, _)| parse_semver_tag(name).map(|v| (v, name)))
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, name)| name);

    if let Some(name) = tag {
        tracing::debug!("{} carries semver tag {}", head, name);
        return Version::tag(name.clone()).is(head.clone());
    }

    tracing::debug!("{} has no branch or semver tag", head);
    Version::Revision(head.clone())
}
