//! Error types for Gantry

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using GantryError
pub type Result<T> = std::result::Result<T, GantryError>;

/// Main error type for Gantry operations
#[derive(Debug, Error)]
pub enum GantryError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// GitHub API errors
    #[error(transparent)]
    GitHub(#[from] GitHubError),

    /// Version-related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Release-schedule errors
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Branch not found
    #[error("Branch not found: {0}")]
    BranchNotFound(String),

    /// Branch already exists
    #[error("Branch already exists: {0}")]
    BranchExists(String),

    /// Base branch cannot be fast-forwarded to the remote
    #[error("Branch '{0}' has diverged from its remote and cannot be fast-forwarded")]
    NotFastForward(String),

    /// Tag already exists
    #[error("Tag already exists: {0}")]
    TagExists(String),

    /// Working directory is not clean
    #[error("Working directory has uncommitted changes")]
    DirtyWorkingDirectory,

    /// Failed to push
    #[error("Failed to push to remote: {0}")]
    PushFailed(String),

    /// Remote not found
    #[error("Remote not found: {0}")]
    RemoteNotFound(String),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// GitHub API errors
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Token missing from the environment
    #[error("GITHUB_TOKEN is not set")]
    MissingToken,

    /// Unexpected HTTP status
    #[error("GitHub API returned {status} for {url}")]
    Status { status: u16, url: String },

    /// Release not found for a tag
    #[error("No release found for tag '{0}'")]
    ReleaseNotFound(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Version-related errors
#[derive(Debug, Error)]
pub enum VersionError {
    /// Proposed release version does not advance the deployed version
    #[error("Release version {proposed} is not greater than current version {current}")]
    NotMonotonic { current: String, proposed: String },

    /// Version file not found
    #[error("Deployment version file not found at {0}")]
    FileNotFound(PathBuf),

    /// Semver error
    #[error("Semver error: {0}")]
    Semver(#[from] semver::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Release-schedule errors
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// No version scheduled for the given date
    #[error("No release scheduled for {0}")]
    NoScheduledVersion(chrono::NaiveDate),

    /// Schedule file not found
    #[error("Release schedule file not found at {0}")]
    FileNotFound(PathBuf),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Previous-version marker not found in a target document
    #[error("No insertion point for version {version} in {path}: marker '{marker}' not found")]
    MissingInsertionPoint {
        version: String,
        marker: String,
        path: PathBuf,
    },

    /// Target path extension is neither markdown nor RST
    #[error("Unsupported changelog format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Changelog file not found
    #[error("Changelog file not found at {0}")]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GantryError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
