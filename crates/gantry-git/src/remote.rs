//! Remote push operations
//!
//! Pushing goes through the git CLI rather than libgit2: the CLI picks up
//! the operator's credential helpers and SSH agent, which libgit2 does not.

use tracing::{info, instrument};

use gantry_core::error::GitError;

use crate::repository::Result;

/// Push a branch, setting its upstream
#[instrument(fields(remote, branch))]
pub fn push_branch_with_upstream(remote: &str, branch: &str) -> Result<()> {
    run_push(&["push", "--set-upstream", remote, branch])
}

/// Push a tag
#[instrument(fields(remote, tag))]
pub fn push_tag(remote: &str, tag: &str) -> Result<()> {
    run_push(&["push", remote, tag])
}

fn run_push(args: &[&str]) -> Result<()> {
    let start = std::time::Instant::now();
    let output = std::process::Command::new("git")
        .args(args)
        .output()
        .map_err(|e| GitError::PushFailed(e.to_string()))?;

    info!(
        ?args,
        duration_ms = start.elapsed().as_millis(),
        success = output.status.success(),
        "git push (CLI)"
    );

    if !output.status.success() {
        return Err(GitError::PushFailed(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    Ok(())
}
