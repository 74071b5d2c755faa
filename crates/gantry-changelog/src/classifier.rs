//! Pull request title classification
//!
//! Titles follow the convention `[CATEGORY] description`. Anything that
//! does not follow it degrades to MAINTENANCE with the verbatim title;
//! classification never fails a release run.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use crate::types::ChangeCategory;

/// Regex for `[category] description` titles
static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([a-zA-Z]+)\] ?(.*)$").expect("Invalid regex")
});

/// Category and description derived from a PR title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Derived category
    pub category: ChangeCategory,
    /// Title with the category token stripped (verbatim title on fallback)
    pub description: String,
}

/// Classify a PR title.
///
/// A bracketed token naming a known category selects it; an unknown token
/// still strips the bracket but falls back to MAINTENANCE. A title that
/// starts with `[` yet fails the pattern is logged and kept verbatim.
pub fn classify_title(title: &str) -> Classification {
    if !title.starts_with('[') {
        return Classification {
            category: ChangeCategory::Maintenance,
            description: title.to_string(),
        };
    }

    match TITLE_REGEX.captures(title) {
        Some(caps) => {
            let category = caps[1]
                .to_uppercase()
                .parse()
                .unwrap_or(ChangeCategory::Maintenance);
            Classification {
                category,
                description: caps[2].to_string(),
            }
        }
        None => {
            warn!(title, "could not parse pull request title");
            Classification {
                category: ChangeCategory::Maintenance,
                description: title.to_string(),
            }
        }
    }
}

/// Attribution suffix for a PR author.
///
/// Membership is a substring check of the login against the raw
/// internal-authors text, matching how the authors file has always been
/// consumed. A login that is a substring of another login is therefore
/// never attributed; see DESIGN.md.
pub fn attribution_suffix(author: &str, internal_authors: &str) -> String {
    if internal_authors.contains(author) {
        String::new()
    } else {
        format!(" (thanks @{})", author)
    }
}
