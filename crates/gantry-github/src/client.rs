//! Blocking GitHub API client

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use gantry_core::config::GitHubConfig;
use gantry_core::error::GitHubError;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, GitHubError>;

/// Environment variable holding the API token
const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Blocking client bound to one repository
pub struct GitHubClient {
    pub(crate) http: Client,
    api_url: String,
    slug: String,
}

impl GitHubClient {
    /// Create a client for the configured repository, reading the token
    /// from `GITHUB_TOKEN`.
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let token = std::env::var(TOKEN_ENV).map_err(|_| GitHubError::MissingToken)?;
        Self::with_token(config, &token)
    }

    /// Create a client with an explicit token
    pub fn with_token(config: &GitHubConfig, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("gantry"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| GitHubError::MissingToken)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            slug: config.slug(),
        })
    }

    /// Absolute URL for a repository-scoped path
    pub(crate) fn repo_url(&self, path: &str) -> String {
        format!("{}/repos/{}/{}", self.api_url, self.slug, path)
    }

    pub(crate) fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        debug!(url, "POST");
        let response = self.http.post(url).json(body).send()?;
        Self::decode(url, response)
    }

    pub(crate) fn decode<T: DeserializeOwned>(
        url: &str,
        response: reqwest::blocking::Response,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_url() {
        let config = GitHubConfig {
            owner: "acme".to_string(),
            repo: "widgets".to_string(),
            ..Default::default()
        };
        let client = GitHubClient::with_token(&config, "test-token").unwrap();
        assert_eq!(
            client.repo_url("pulls"),
            "https://api.github.com/repos/acme/widgets/pulls"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = GitHubConfig {
            owner: "acme".to_string(),
            repo: "widgets".to_string(),
            api_url: "https://github.example.com/api/v3/".to_string(),
            ..Default::default()
        };
        let client = GitHubClient::with_token(&config, "test-token").unwrap();
        assert_eq!(
            client.repo_url("releases"),
            "https://github.example.com/api/v3/repos/acme/widgets/releases"
        );
    }
}
