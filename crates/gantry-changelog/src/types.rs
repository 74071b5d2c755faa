//! Changelog types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a change, ordered most impactful first.
///
/// Display precedence is the declaration order; `rank` is the explicit
/// lookup used for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeCategory {
    /// Backwards-incompatible change
    Breaking,
    /// New functionality
    Feature,
    /// Bug fix
    Bugfix,
    /// Documentation change
    Docs,
    /// Everything else
    Maintenance,
}

impl ChangeCategory {
    /// Sort precedence, lowest first
    pub fn rank(&self) -> u8 {
        match self {
            Self::Breaking => 0,
            Self::Feature => 1,
            Self::Bugfix => 2,
            Self::Docs => 3,
            Self::Maintenance => 4,
        }
    }

    /// Uppercase label as rendered in changelog bullets
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breaking => "BREAKING",
            Self::Feature => "FEATURE",
            Self::Bugfix => "BUGFIX",
            Self::Docs => "DOCS",
            Self::Maintenance => "MAINTENANCE",
        }
    }
}

impl std::fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChangeCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BREAKING" => Ok(Self::Breaking),
            "FEATURE" => Ok(Self::Feature),
            "BUGFIX" => Ok(Self::Bugfix),
            "DOCS" => Ok(Self::Docs),
            "MAINTENANCE" => Ok(Self::Maintenance),
            _ => Err(()),
        }
    }
}

/// One merged pull request, represented as a change.
///
/// Records are immutable once constructed; the assembler owns them for the
/// duration of a release run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// PR number
    pub number: u64,
    /// Derived category
    pub category: ChangeCategory,
    /// Human-readable summary
    pub description: String,
    /// Merge timestamp, used for ordering and window membership
    pub merged_at: DateTime<Utc>,
    /// `" (thanks @login)"` for external contributors, otherwise empty
    pub attribution: String,
}

impl ChangeRecord {
    /// Sort key: category precedence first, then merge time ascending
    pub fn sort_key(&self) -> (u8, DateTime<Utc>) {
        (self.category.rank(), self.merged_at)
    }

    /// The bullet line shared by both output formats
    pub fn bullet(&self) -> String {
        format!(
            "* [{}] {} (#{}){}",
            self.category, self.description, self.number, self.attribution
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_category_from_str() {
        assert_eq!("FEATURE".parse::<ChangeCategory>().unwrap(), ChangeCategory::Feature);
        assert_eq!("bugfix".parse::<ChangeCategory>().unwrap(), ChangeCategory::Bugfix);
        assert!("RELEASE".parse::<ChangeCategory>().is_err());
    }

    #[test]
    fn test_rank_follows_declaration_order() {
        let order = [
            ChangeCategory::Breaking,
            ChangeCategory::Feature,
            ChangeCategory::Bugfix,
            ChangeCategory::Docs,
            ChangeCategory::Maintenance,
        ];
        for pair in order.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn test_bullet() {
        let record = ChangeRecord {
            number: 123,
            category: ChangeCategory::Feature,
            description: "add frobnicator".to_string(),
            merged_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            attribution: " (thanks @octocat)".to_string(),
        };
        assert_eq!(
            record.bullet(),
            "* [FEATURE] add frobnicator (#123) (thanks @octocat)"
        );
    }

    #[test]
    fn test_bullet_internal_author() {
        let record = ChangeRecord {
            number: 9,
            category: ChangeCategory::Maintenance,
            description: "misc cleanup".to_string(),
            merged_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            attribution: String::new(),
        };
        assert_eq!(record.bullet(), "* [MAINTENANCE] misc cleanup (#9)");
    }
}
