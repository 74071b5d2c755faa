//! Branch operations

use tracing::{debug, info, instrument};

use gantry_core::error::GitError;

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Check out an existing local branch
    #[instrument(skip(self), fields(name))]
    pub fn checkout_branch(&self, name: &str) -> Result<()> {
        let refname = format!("refs/heads/{}", name);
        let obj = self
            .repo
            .revparse_single(&refname)
            .map_err(|_| GitError::BranchNotFound(name.to_string()))?;

        self.repo.checkout_tree(&obj, None)?;
        self.repo.set_head(&refname)?;

        info!(branch = name, "checked out branch");
        Ok(())
    }

    /// Create a branch at HEAD and check it out
    #[instrument(skip(self), fields(name))]
    pub fn create_and_checkout_branch(&self, name: &str) -> Result<()> {
        if self.repo.find_branch(name, git2::BranchType::Local).is_ok() {
            return Err(GitError::BranchExists(name.to_string()));
        }

        let head = self.head_commit()?;
        self.repo.branch(name, &head, false)?;
        self.checkout_branch(name)?;

        info!(branch = name, "created release branch");
        Ok(())
    }

    /// Fetch `branch` from `remote` and fast-forward the local branch to it.
    ///
    /// A diverged local branch is an error; this never merges or rebases.
    #[instrument(skip(self), fields(remote_name, branch))]
    pub fn fetch_and_fast_forward(&self, remote_name: &str, branch: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote_name)
            .map_err(|_| GitError::RemoteNotFound(remote_name.to_string()))?;

        let refspec = format!("refs/heads/{}", branch);
        remote.fetch(&[&refspec], None, None)?;

        let fetch_head = self.repo.find_reference("FETCH_HEAD")?;
        let fetch_commit = self.repo.reference_to_annotated_commit(&fetch_head)?;

        let (analysis, _) = self.repo.merge_analysis(&[&fetch_commit])?;

        if analysis.is_up_to_date() {
            debug!(branch, "branch already up to date");
            return Ok(());
        }

        if !analysis.is_fast_forward() {
            return Err(GitError::NotFastForward(branch.to_string()));
        }

        let refname = format!("refs/heads/{}", branch);
        let mut reference = self.repo.find_reference(&refname)?;
        reference.set_target(fetch_commit.id(), "fast-forward")?;
        self.repo.set_head(&refname)?;
        self.repo
            .checkout_head(Some(git2::build::CheckoutBuilder::default().force()))?;

        info!(branch, target = %fetch_commit.id(), "fast-forwarded branch");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use std::path::Path;
    use tempfile::TempDir;

    fn setup_repo() -> (TempDir, GitRepo) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();

        let sig = Signature::now("Test", "test@example.com").unwrap();

        std::fs::write(temp.path().join("file.txt"), "content").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("file.txt")).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
            .unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        (temp, git_repo)
    }

    #[test]
    fn test_create_and_checkout_branch() {
        let (_temp, repo) = setup_repo();

        repo.create_and_checkout_branch("release-0.16.9").unwrap();
        assert_eq!(
            repo.current_branch().unwrap(),
            Some("release-0.16.9".to_string())
        );
    }

    #[test]
    fn test_create_existing_branch_fails() {
        let (_temp, repo) = setup_repo();

        repo.create_and_checkout_branch("release-0.16.9").unwrap();
        let result = repo.create_and_checkout_branch("release-0.16.9");
        assert!(matches!(result, Err(GitError::BranchExists(_))));
    }

    #[test]
    fn test_checkout_missing_branch() {
        let (_temp, repo) = setup_repo();
        let result = repo.checkout_branch("does-not-exist");
        assert!(matches!(result, Err(GitError::BranchNotFound(_))));
    }

    #[test]
    fn test_fetch_missing_remote() {
        let (_temp, repo) = setup_repo();
        let result = repo.fetch_and_fast_forward("origin", "develop");
        assert!(matches!(result, Err(GitError::RemoteNotFound(_))));
    }
}
