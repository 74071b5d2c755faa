//! Markdown entry formatter

use super::{bullet_lines, EntryFormatter};
use crate::types::ChangeRecord;

/// Renders an entry as a `###` heading followed by bullets
pub struct MarkdownFormatter;

impl EntryFormatter for MarkdownFormatter {
    fn render(&self, version: &str, records: &[ChangeRecord]) -> Vec<String> {
        let mut lines = vec![String::new(), format!("### {}", version)];
        lines.extend(bullet_lines(records));
        lines
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangeCategory;
    use chrono::{TimeZone, Utc};

    fn make_record(number: u64, category: ChangeCategory, description: &str) -> ChangeRecord {
        ChangeRecord {
            number,
            category,
            description: description.to_string(),
            merged_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            attribution: String::new(),
        }
    }

    #[test]
    fn test_render() {
        let records = vec![
            make_record(10, ChangeCategory::Feature, "add X"),
            make_record(11, ChangeCategory::Bugfix, "fix Y"),
        ];

        let lines = MarkdownFormatter.render("0.16.9", &records);
        assert_eq!(
            lines,
            vec![
                "",
                "### 0.16.9",
                "* [FEATURE] add X (#10)",
                "* [BUGFIX] fix Y (#11)",
            ]
        );
    }

    #[test]
    fn test_render_empty_window() {
        let lines = MarkdownFormatter.render("0.16.9", &[]);
        assert_eq!(lines, vec!["", "### 0.16.9"]);
    }
}
