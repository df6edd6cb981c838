//! Report the version of a project that is checked out in the workspace.

use crate::core::{ProjectRoot, Version, WorkspaceContext, WorkspaceError};
use crate::sources::{classify, GitInspector, RepoInspector};

/// Determine the version checked out for `root`, using git.
pub fn version_in_workspace(
    ctx: &WorkspaceContext,
    root: &ProjectRoot,
) -> Result<Version, WorkspaceError> {
    version_in_workspace_with(ctx, root, &GitInspector::new())
}

/// Determine the version checked out for `root` with a specific inspector.
pub fn version_in_workspace_with(
    ctx: &WorkspaceContext,
    root: &ProjectRoot,
    inspector: &dyn RepoInspector,
) -> Result<Version, WorkspaceError> {
    let dir = ctx.absolute_project_root(root)?;

    let state = inspector
        .inspect(&dir)
        .map_err(|source| WorkspaceError::VcsQuery {
            path: dir.clone(),
            vcs: inspector.name().to_string(),
            source,
        })?;

    let version = classify(&state);
    tracing::debug!("{} is at {} {}", root, version.kind(), version);
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Revision, VersionKind};
    use crate::sources::RepoState;
    use crate::test_support::{GitFixture, TestWorkspace};
    use anyhow::Context;
    use std::path::Path;

    struct BrokenInspector;

    impl RepoInspector for BrokenInspector {
        fn name(&self) -> &str {
            "broken"
        }

        fn inspect(&self, _dir: &Path) -> anyhow::Result<RepoState> {
            Err(anyhow::anyhow!("corrupted object database")).context("failed to read HEAD")
        }
    }

    struct FixedInspector(RepoState);

    impl RepoInspector for FixedInspector {
        fn name(&self) -> &str {
            "fixed"
        }

        fn inspect(&self, _dir: &Path) -> anyhow::Result<RepoState> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_tagged_checkout() {
        let ws = TestWorkspace::new();
        let dir = ws.dir("src/github.com/pkg/errors");
        let git = GitFixture::init(&dir, "master");
        let tagged = git.commit("v0.8.0 release");
        git.tag("v0.8.0", &tagged);
        git.commit("work after release");
        git.checkout_detached(&tagged);

        let root = ProjectRoot::new("github.com/pkg/errors").unwrap();
        let v = version_in_workspace(&ws.context(), &root).unwrap();

        assert_eq!(v.kind(), VersionKind::Tag);
        assert_eq!(v, Version::tag("v0.8.0").is(tagged.clone()));
        assert_eq!(v.underlying_revision(), Some(&tagged));
    }

    #[test]
    fn test_arbitrary_commit() {
        let ws = TestWorkspace::new();
        let dir = ws.dir("src/github.com/Sirupsen/logrus");
        let git = GitFixture::init(&dir, "master");
        let middle = {
            git.commit("one");
            let middle = git.commit("two");
            git.commit("three");
            middle
        };
        git.checkout_detached(&middle);

        let root = ProjectRoot::new("github.com/Sirupsen/logrus").unwrap();
        let v = version_in_workspace(&ws.context(), &root).unwrap();

        assert_eq!(v.kind(), VersionKind::Revision);
        assert_eq!(v, Version::Revision(middle));
    }

    #[test]
    fn test_default_branch_checkout() {
        let ws = TestWorkspace::new();
        let dir = ws.dir("src/github.com/rsc/go-get-default-branch");
        let git = GitFixture::init(&dir, "another-branch");
        let tip = git.commit("tip");

        let root = ProjectRoot::new("github.com/rsc/go-get-default-branch").unwrap();
        let v = version_in_workspace(&ws.context(), &root).unwrap();

        assert_eq!(v.kind(), VersionKind::Branch);
        assert_eq!(v.name(), "another-branch");
        assert_eq!(v.underlying_revision(), Some(&tip));
    }

    #[test]
    fn test_not_a_repository() {
        let ws = TestWorkspace::new();
        ws.dir("src/plain/dir");

        let root = ProjectRoot::new("plain/dir").unwrap();
        let err = version_in_workspace(&ws.context(), &root).unwrap_err();
        match err {
            WorkspaceError::VcsQuery { vcs, source, .. } => {
                assert_eq!(vcs, "git");
                assert!(source.downcast_ref::<git2::Error>().is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_project_root() {
        let ws = TestWorkspace::new();

        let root = ProjectRoot::new("not/there").unwrap();
        let err = version_in_workspace(&ws.context(), &root).unwrap_err();
        assert!(matches!(err, WorkspaceError::ProjectRootNotFound { .. }));
    }

    #[test]
    fn test_inspector_failure_is_vcs_error() {
        let ws = TestWorkspace::new();
        ws.dir("src/a/b");

        let root = ProjectRoot::new("a/b").unwrap();
        let err = version_in_workspace_with(&ws.context(), &root, &BrokenInspector).unwrap_err();
        let output = err.to_diagnostic().format(false);
        match err {
            WorkspaceError::VcsQuery { vcs, source, .. } => {
                assert_eq!(vcs, "broken");
                assert_eq!(format!("{source:#}"), "failed to read HEAD: corrupted object database");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(output.contains("= note: failed to read HEAD: corrupted object database"));
    }

    #[test]
    fn test_custom_inspector() {
        let ws = TestWorkspace::new();
        ws.dir("src/a/b");

        let state = RepoState {
            head: Revision::new("abc123"),
            ..RepoState::default()
        };
        let root = ProjectRoot::new("a/b").unwrap();
        let v = version_in_workspace_with(&ws.context(), &root, &FixedInspector(state)).unwrap();
        assert_eq!(v, Version::revision("abc123"));
    }
}
