//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for Gantry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub repository configuration
    pub github: GitHubConfig,

    /// Well-known file paths in the target repository
    pub paths: PathsConfig,

    /// Release workflow configuration
    pub release: ReleaseConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github: GitHubConfig::default(),
            paths: PathsConfig::default(),
            release: ReleaseConfig::default(),
        }
    }
}

/// GitHub repository configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Repository owner (user or organization)
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Branch releases are cut from and PRs are opened against
    pub base_branch: String,

    /// API root URL
    pub api_url: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            repo: String::new(),
            base_branch: "develop".to_string(),
            api_url: "https://api.github.com".to_string(),
        }
    }
}

impl GitHubConfig {
    /// The `owner/repo` slug
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Well-known file paths, relative to the repository root
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Markdown changelog
    pub changelog_md: PathBuf,

    /// RST changelog
    pub changelog_rst: PathBuf,

    /// Single-line file holding the deployed version
    pub deployment_version: PathBuf,

    /// Docs snippet showing the CLI version banner
    pub version_snippet: PathBuf,

    /// Text file listing internal author logins
    pub internal_authors: PathBuf,

    /// JSON map of release date to scheduled version
    pub release_schedule: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            changelog_md: PathBuf::from("docs/changelog.md"),
            changelog_rst: PathBuf::from("docs/changelog.rst"),
            deployment_version: PathBuf::from("deployment_version"),
            version_snippet: PathBuf::from("docs/components/_version_snippet.mdx"),
            internal_authors: PathBuf::from(".github/teams.yml"),
            release_schedule: PathBuf::from("release_schedule.json"),
        }
    }
}

/// Release workflow configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Prefix for release branch names
    pub branch_prefix: String,

    /// Commit message for the prep commit
    pub commit_message: String,

    /// Prefix for the prep PR title
    pub pr_title_prefix: String,

    /// Remote name to push to
    pub remote: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            branch_prefix: "release-".to_string(),
            commit_message: "release prep".to_string(),
            pr_title_prefix: "[RELEASE]".to_string(),
            remote: "origin".to_string(),
        }
    }
}

impl ReleaseConfig {
    /// Branch name for a release version
    pub fn branch_name(&self, version: &str) -> String {
        format!("{}{}", self.branch_prefix, version)
    }

    /// PR title for a release version
    pub fn pr_title(&self, version: &str) -> String {
        format!("{} {}", self.pr_title_prefix, version)
    }
}
