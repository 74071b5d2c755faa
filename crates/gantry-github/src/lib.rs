//! Gantry GitHub - GitHub REST API client for release preparation
//!
//! All calls are blocking and single-shot: a failed request aborts the
//! release run, and nothing here retries.

mod client;
mod pulls;
mod releases;

pub use client::GitHubClient;
pub use pulls::{ClosedPullsFeed, CreatedPull, PullRequestInfo};
pub use releases::ReleaseInfo;
