//! Release operations

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use gantry_core::error::GitHubError;

use crate::client::{GitHubClient, Result};

/// A published (or draft) GitHub release
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseInfo {
    /// Tag the release points at
    pub tag_name: String,
    /// Creation timestamp; the lower bound of the next release window
    pub created_at: DateTime<Utc>,
    /// Web URL of the release
    pub html_url: String,
    /// Whether the release is still a draft
    #[serde(default)]
    pub draft: bool,
}

#[derive(Debug, Serialize)]
struct CreateReleaseBody<'a> {
    tag_name: &'a str,
    name: &'a str,
    body: &'a str,
    draft: bool,
}

impl GitHubClient {
    /// Look up a release by its tag name
    pub fn release_by_tag(&self, tag: &str) -> Result<ReleaseInfo> {
        let url = self.repo_url(&format!("releases/tags/{}", tag));
        debug!(url, tag, "looking up release");

        let response = self.http.get(&url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(GitHubError::ReleaseNotFound(tag.to_string()));
        }

        Self::decode(&url, response)
    }

    /// Create a release pointing at `tag`
    pub fn create_release(
        &self,
        tag: &str,
        name: &str,
        body: &str,
        draft: bool,
    ) -> Result<ReleaseInfo> {
        let url = self.repo_url("releases");
        let release: ReleaseInfo = self.post_json(
            &url,
            &CreateReleaseBody {
                tag_name: tag,
                name,
                body,
                draft,
            },
        )?;
        info!(tag, draft, url = %release.html_url, "created release");
        Ok(release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_deserialization() {
        let json = r#"{
            "tag_name": "0.16.8",
            "created_at": "2024-05-02T09:00:00Z",
            "html_url": "https://github.com/acme/widgets/releases/tag/0.16.8",
            "draft": true
        }"#;

        let release: ReleaseInfo = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag_name, "0.16.8");
        assert!(release.draft);
    }

    #[test]
    fn test_draft_defaults_false() {
        let json = r#"{
            "tag_name": "0.16.8",
            "created_at": "2024-05-02T09:00:00Z",
            "html_url": "https://github.com/acme/widgets/releases/tag/0.16.8"
        }"#;

        let release: ReleaseInfo = serde_json::from_str(json).unwrap();
        assert!(!release.draft);
    }
}
