//! Pull request operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::client::{GitHubClient, Result};

/// Page size for the closed-PR feed
const FEED_PAGE_SIZE: usize = 50;

/// One pull request as seen by the release window scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestInfo {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Author login
    pub author: String,
    /// Merge timestamp; `None` for closed-but-unmerged PRs
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequestInfo {
    /// Whether this PR was merged (as opposed to closed without merging)
    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }
}

/// A pull request created by us
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPull {
    /// PR number
    pub number: u64,
    /// Web URL of the PR
    pub html_url: String,
}

/// Wire shape of a pull request in list responses
#[derive(Debug, Deserialize)]
struct PullResponse {
    number: u64,
    title: String,
    user: UserResponse,
    merged_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    login: String,
}

impl From<PullResponse> for PullRequestInfo {
    fn from(raw: PullResponse) -> Self {
        Self {
            number: raw.number,
            title: raw.title,
            author: raw.user.login,
            merged_at: raw.merged_at,
        }
    }
}

#[derive(Debug, Serialize)]
struct CreatePullBody<'a> {
    title: &'a str,
    body: &'a str,
    head: &'a str,
    base: &'a str,
}

impl GitHubClient {
    /// Closed pull requests against `base`, most recently updated first,
    /// fetched page by page as the iterator is advanced.
    ///
    /// The window scan in gantry-changelog stops early, so lazy paging here
    /// bounds the number of API calls per release run.
    pub fn closed_pulls(&self, base: &str) -> ClosedPullsFeed<'_> {
        ClosedPullsFeed {
            client: self,
            base: base.to_string(),
            page: 1,
            buffer: Vec::new().into_iter(),
            exhausted: false,
        }
    }

    fn closed_pulls_page(&self, base: &str, page: usize) -> Result<Vec<PullRequestInfo>> {
        let url = self.repo_url("pulls");
        debug!(url, base, page, "fetching closed pulls page");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("base", base),
                ("state", "closed"),
                ("sort", "updated"),
                ("direction", "desc"),
                ("per_page", &FEED_PAGE_SIZE.to_string()),
                ("page", &page.to_string()),
            ])
            .send()?;

        let raw: Vec<PullResponse> = Self::decode(&url, response)?;
        Ok(raw.into_iter().map(PullRequestInfo::from).collect())
    }

    /// Open a pull request and return its number and URL
    pub fn create_pull(
        &self,
        title: &str,
        body: &str,
        head: &str,
        base: &str,
    ) -> Result<CreatedPull> {
        let url = self.repo_url("pulls");
        let created: CreatedPull = self.post_json(
            &url,
            &CreatePullBody {
                title,
                body,
                head,
                base,
            },
        )?;
        info!(number = created.number, url = %created.html_url, "opened pull request");
        Ok(created)
    }
}

/// Lazily paged iterator over closed pull requests
pub struct ClosedPullsFeed<'a> {
    client: &'a GitHubClient,
    base: String,
    page: usize,
    buffer: std::vec::IntoIter<PullRequestInfo>,
    exhausted: bool,
}

impl Iterator for ClosedPullsFeed<'_> {
    type Item = Result<PullRequestInfo>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pr) = self.buffer.next() {
                return Some(Ok(pr));
            }
            if self.exhausted {
                return None;
            }

            match self.client.closed_pulls_page(&self.base, self.page) {
                Ok(items) => {
                    if items.len() < FEED_PAGE_SIZE {
                        self.exhausted = true;
                    }
                    self.page += 1;
                    self.buffer = items.into_iter();
                }
                Err(e) => {
                    self.exhausted = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
