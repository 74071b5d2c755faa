//! Commit and tag operations

use tracing::{info, instrument};

use gantry_core::error::GitError;

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Stage every change in the working tree and commit it.
    ///
    /// Uses the repository's configured signature. Pre-commit hooks do not
    /// run here (the equivalent of `git commit --no-verify`).
    #[instrument(skip(self), fields(message))]
    pub fn commit_all(&self, message: &str) -> Result<git2::Oid> {
        let mut index = self.repo.index()?;
        index.add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let signature = self.repo.signature()?;
        let parent = self.head_commit()?;

        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )?;

        info!(%oid, message, "created commit");
        Ok(oid)
    }

    /// Create an annotated tag at HEAD
    #[instrument(skip(self), fields(name))]
    pub fn create_tag(&self, name: &str, message: &str) -> Result<git2::Oid> {
        if self
            .repo
            .find_reference(&format!("refs/tags/{}", name))
            .is_ok()
        {
            return Err(GitError::TagExists(name.to_string()));
        }

        let head = self.head_commit()?;
        let signature = self.repo.signature()?;

        let oid = self
            .repo
            .tag(name, head.as_object(), &signature, message, false)?;

        info!(tag = name, %oid, "created annotated tag");
        Ok(oid)
    }
}
