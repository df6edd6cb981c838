//! Test fixtures for Berth unit tests.
//!
//! [`TestWorkspace`] builds a throwaway workspace tree in a temporary
//! directory; [`GitFixture`] creates real git history in it with libgit2, so
//! no `git` binary or network access is needed.
//!
//! ```rust,ignore
//! let ws = TestWorkspace::new();
//! ws.file("src/test1/manifest.json", MANIFEST_JSON);
//! let git = GitFixture::init(&ws.dir("src/test1"), "master");
//! let rev = git.commit("initial");
//! ```

use std::path::{Path, PathBuf};

use git2::{Commit, Oid, Repository, RepositoryInitOptions, Signature};
use tempfile::TempDir;

use crate::core::{Revision, WorkspaceContext};

/// Minimal manifest with no dependencies.
pub const MANIFEST_JSON: &str = r#"{"dependencies":{}}"#;

/// Minimal lock with a memo and no projects.
pub const LOCK_JSON: &str = r#"{"memo":"cdafe8641b28cd16fe025df278b0a49b9416859345d8b6ba0ace0272b74925ee","projects":[]}"#;

/// A workspace root in a temporary directory.
#[derive(Debug)]
pub struct TestWorkspace {
    tmp: TempDir,
}

impl TestWorkspace {
    /// Create an empty workspace with a `src` directory.
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("failed to create temp dir");
        std::fs::create_dir(tmp.path().join("src")).expect("failed to create src dir");
        TestWorkspace { tmp }
    }

    /// The workspace root.
    pub fn path(&self) -> &Path {
        self.tmp.path()
    }

    /// A context rooted at this workspace.
    pub fn context(&self) -> WorkspaceContext {
        WorkspaceContext::new(self.path())
    }

    /// Create a directory (and its parents) relative to the workspace root.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path().join(rel);
        std::fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("failed to create {}: {e}", path.display()));
        path
    }

    /// Write a file relative to the workspace root, creating parents.
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("failed to create {}: {e}", parent.display()));
        }
        std::fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
        path
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// A git repository with helpers to build history.
pub struct GitFixture {
    repo: Repository,
}

impl GitFixture {
    /// Initialise a repository whose unborn HEAD points at `branch`.
    pub fn init(path: &Path, branch: &str) -> Self {
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head(branch);
        let repo = Repository::init_opts(path, &opts)
            .unwrap_or_else(|e| panic!("failed to init repository at {}: {e}", path.display()));
        GitFixture { repo }
    }

    fn signature() -> Signature<'static> {
        Signature::now("Berth Tests", "tests@berth.invalid").expect("invalid signature")
    }

    /// Commit a change on top of HEAD and return the new revision.
    pub fn commit(&self, message: &str) -> Revision {
        let workdir = self.repo.workdir().expect("bare repository");
        std::fs::write(workdir.join("README"), message).expect("failed to write README");

        let mut index = self.repo.index().expect("no index");
        index.add_path(Path::new("README")).expect("failed to stage README");
        index.write().expect("failed to write index");
        let tree_id = index.write_tree().expect("failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("missing tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&Commit> = parent.iter().collect();

        let sig = Self::signature();
        let oid = self
            .repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("failed to commit");
        Revision::new(oid.to_string())
    }

    /// Create an annotated tag pointing at `rev`.
    pub fn tag(&self, name: &str, rev: &Revision) {
        let object = self
            .repo
            .find_object(oid(rev), None)
            .expect("missing tagged object");
        self.repo
            .tag(name, &object, &Self::signature(), name, false)
            .expect("failed to tag");
    }

    /// Create a local branch pointing at `rev` without checking it out.
    pub fn branch(&self, name: &str, rev: &Revision) {
        let commit = self.repo.find_commit(oid(rev)).expect("missing commit");
        self.repo
            .branch(name, &commit, false)
            .expect("failed to create branch");
    }

    /// Detach HEAD at `rev` and update the working tree.
    pub fn checkout_detached(&self, rev: &Revision) {
        self.repo
            .set_head_detached(oid(rev))
            .expect("failed to detach HEAD");
        self.repo
            .checkout_head(Some(git2::build::CheckoutBuilder::new().force()))
            .expect("failed to check out HEAD");
    }
}

fn oid(rev: &Revision) -> Oid {
    Oid::from_str(rev.as_str()).expect("invalid revision")
}
