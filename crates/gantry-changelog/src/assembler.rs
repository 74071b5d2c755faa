//! Release window collection and change-record assembly

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

use gantry_github::PullRequestInfo;

use crate::classifier::{attribution_suffix, classify_title};
use crate::types::ChangeRecord;

/// How many already-released PRs the window scan tolerates before stopping.
pub const STALE_PR_THRESHOLD: usize = 5;

/// Collect the pull requests merged after `last_release` from a feed of
/// closed PRs ordered by most-recent-update descending.
///
/// The feed is ordered by update time, not merge time: an old PR touched
/// after a newer one appears earlier in the scan, so cutting off at the
/// first pre-release entry would drop merges. Instead a counter of
/// at-or-before-release entries runs until it reaches
/// [`STALE_PR_THRESHOLD`], which bounds the number of feed pages fetched.
/// The counter does not reset on fresh entries; if more than the threshold
/// of stale PRs are interleaved ahead of fresh ones in update order, those
/// fresh PRs are missed. That trade-off is deliberate and pinned by tests.
pub fn collect_window<E>(
    feed: impl IntoIterator<Item = Result<PullRequestInfo, E>>,
    last_release: DateTime<Utc>,
) -> Result<Vec<PullRequestInfo>, E> {
    let mut recent = Vec::new();
    let mut stale_seen = 0usize;

    for item in feed {
        if stale_seen >= STALE_PR_THRESHOLD {
            break;
        }

        let pr = item?;
        let Some(merged_at) = pr.merged_at else {
            continue;
        };

        if merged_at <= last_release {
            stale_seen += 1;
        } else {
            recent.push(pr);
        }
    }

    debug!(
        collected = recent.len(),
        stale_seen,
        %last_release,
        "collected release window"
    );
    Ok(recent)
}

/// Turns collected pull requests into ordered change records
pub struct ChangelogAssembler {
    internal_authors: String,
}

impl ChangelogAssembler {
    /// Create an assembler with the internal-authors text
    pub fn new(internal_authors: impl Into<String>) -> Self {
        Self {
            internal_authors: internal_authors.into(),
        }
    }

    /// Classify every PR and order the records by category precedence,
    /// ties broken by merge time ascending.
    #[instrument(skip(self, prs), fields(pr_count = prs.len()))]
    pub fn assemble(&self, prs: Vec<PullRequestInfo>) -> Vec<ChangeRecord> {
        let mut records: Vec<ChangeRecord> = prs
            .into_iter()
            .filter_map(|pr| {
                // Window collection only passes merged PRs through.
                let merged_at = pr.merged_at?;
                let classification = classify_title(&pr.title);
                Some(ChangeRecord {
                    number: pr.number,
                    category: classification.category,
                    description: classification.description,
                    merged_at,
                    attribution: attribution_suffix(&pr.author, &self.internal_authors),
                })
            })
            .collect();

        records.sort_by_key(ChangeRecord::sort_key);

        info!(record_count = records.len(), "assembled change records");
        records
    }
}
