//! Document patching
//!
//! Splices a rendered changelog entry into an existing versioned document,
//! immediately above the previous release's entry. The document is a plain
//! line sequence; the previous version string is the only structural marker.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use gantry_core::error::ChangelogError;

use crate::formatter::{EntryFormatter, MarkdownFormatter, RstFormatter};
use crate::types::ChangeRecord;

/// Result type for patch operations
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// Logical format of a target document, declared by its path.
///
/// Content is never sniffed; an unknown extension is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Lightweight markup (`.md`)
    Markdown,
    /// Structured text (`.rst`)
    Rst,
}

impl DocumentKind {
    /// Select the kind from a path extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("md") => Ok(Self::Markdown),
            Some("rst") => Ok(Self::Rst),
            _ => Err(ChangelogError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn formatter(&self) -> Box<dyn EntryFormatter> {
        match self {
            Self::Markdown => Box::new(MarkdownFormatter),
            Self::Rst => Box::new(RstFormatter),
        }
    }
}

/// Splices rendered changelog entries into one target document
pub struct DocumentPatcher {
    path: PathBuf,
    formatter: Box<dyn EntryFormatter>,
}

impl DocumentPatcher {
    /// Create a patcher for a target path, selecting the format from its
    /// extension.
    pub fn for_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let kind = DocumentKind::from_path(&path)?;
        Ok(Self {
            path,
            formatter: kind.formatter(),
        })
    }

    /// Insert the rendered entry for `release_version` into `lines`,
    /// immediately before the line above the last line containing
    /// `current_version`.
    ///
    /// Scanning keeps the LAST matching line: release branches mention the
    /// previous version in prose higher up, and the bottom-most mention is
    /// the previous entry heading. Nothing is overwritten or removed, and
    /// on any error the lines are left untouched.
    ///
    /// There is no duplicate detection: re-running for the same release
    /// version inserts a second block. Callers run this once per release.
    #[instrument(skip(self, lines, records), fields(path = %self.path.display(), line_count = lines.len()))]
    pub fn insert(
        &self,
        lines: &mut Vec<String>,
        current_version: &str,
        release_version: &str,
        records: &[ChangeRecord],
    ) -> Result<()> {
        let mut marker_index = None;
        for (i, line) in lines.iter().enumerate() {
            if line.contains(current_version) {
                marker_index = Some(i);
            }
        }

        // A marker on the first line leaves no room above it; treat it the
        // same as a missing marker.
        let insertion_point = marker_index
            .and_then(|i| i.checked_sub(1))
            .ok_or_else(|| ChangelogError::MissingInsertionPoint {
                version: release_version.to_string(),
                marker: current_version.to_string(),
                path: self.path.clone(),
            })?;

        let block = self.formatter.render(release_version, records);
        debug!(insertion_point, block_len = block.len(), "splicing entry block");
        lines.splice(insertion_point..insertion_point, block);

        Ok(())
    }

    /// Read the target document, insert the entry, and write it back.
    ///
    /// The write only happens after a successful splice, so a failed run
    /// never leaves a partially mutated file.
    pub fn patch_file(
        &self,
        current_version: &str,
        release_version: &str,
        records: &[ChangeRecord],
    ) -> Result<()> {
        if !self.path.exists() {
            return Err(ChangelogError::FileNotFound(self.path.clone()));
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let mut lines: Vec<String> = contents.lines().map(str::to_string).collect();

        self.insert(&mut lines, current_version, release_version, records)?;

        let mut output = lines.join("\n");
        output.push('\n');
        std::fs::write(&self.path, output)?;

        info!(path = %self.path.display(), release_version, "patched changelog");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangeCategory;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn make_record(number: u64, category: ChangeCategory, description: &str) -> ChangeRecord {
        ChangeRecord {
            number,
            category,
            description: description.to_string(),
            merged_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            attribution: String::new(),
        }
    }

    fn doc(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_kind_from_path() {
        assert_eq!(
            DocumentKind::from_path(Path::new("docs/changelog.md")).unwrap(),
            DocumentKind::Markdown
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("docs/changelog.rst")).unwrap(),
            DocumentKind::Rst
        );
        assert!(matches!(
            DocumentKind::from_path(Path::new("docs/changelog.adoc")),
            Err(ChangelogError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_insert_is_positional_and_non_destructive() {
        let patcher = DocumentPatcher::for_path("changelog.md").unwrap();
        let mut lines = doc(&[
            "# Changelog",
            "",
            "### 1.2.0",
            "* [BUGFIX] earlier fix (#8)",
        ]);
        let original = lines.clone();

        let records = vec![make_record(10, ChangeCategory::Feature, "add X")];
        patcher.insert(&mut lines, "1.2.0", "1.3.0", &records).unwrap();

        assert_eq!(
            lines,
            doc(&[
                "# Changelog",
                "",
                "### 1.3.0",
                "* [FEATURE] add X (#10)",
                "",
                "### 1.2.0",
                "* [BUGFIX] earlier fix (#8)",
            ])
        );
        // Every pre-existing line survives, in order.
        for line in &original {
            assert!(lines.contains(line));
        }
    }

    #[test]
    fn test_insert_rst() {
        let patcher = DocumentPatcher::for_path("changelog.rst").unwrap();
        let mut lines = doc(&[
            "Changelog",
            "=========",
            "",
            "1.2.0",
            "-----------------",
            "* [BUGFIX] earlier fix (#8)",
        ]);

        let records = vec![make_record(10, ChangeCategory::Feature, "add X")];
        patcher.insert(&mut lines, "1.2.0", "1.3.0", &records).unwrap();

        assert_eq!(
            lines,
            doc(&[
                "Changelog",
                "=========",
                "",
                "1.3.0",
                "-----------------",
                "* [FEATURE] add X (#10)",
                "",
                "1.2.0",
                "-----------------",
                "* [BUGFIX] earlier fix (#8)",
            ])
        );
    }

    #[test]
    fn test_last_marker_wins() {
        let patcher = DocumentPatcher::for_path("changelog.md").unwrap();
        let mut lines = doc(&[
            "# Changelog",
            "Release notes for 1.2.0 and friends.",
            "",
            "### 1.2.0",
            "* [BUGFIX] earlier fix (#8)",
        ]);

        let records = vec![make_record(10, ChangeCategory::Feature, "add X")];
        patcher.insert(&mut lines, "1.2.0", "1.3.0", &records).unwrap();

        // Inserted above the heading, not above the prose mention.
        assert_eq!(lines[3], "### 1.3.0");
        assert_eq!(lines[6], "### 1.2.0");
    }

    #[test]
    fn test_missing_marker_leaves_document_unmodified() {
        let patcher = DocumentPatcher::for_path("changelog.md").unwrap();
        let mut lines = doc(&["# Changelog", "", "### 1.1.0"]);
        let original = lines.clone();

        let result = patcher.insert(&mut lines, "1.2.0", "1.3.0", &[]);
        assert!(matches!(
            result,
            Err(ChangelogError::MissingInsertionPoint { .. })
        ));
        assert_eq!(lines, original);
    }

    #[test]
    fn test_marker_on_first_line_is_rejected() {
        let patcher = DocumentPatcher::for_path("changelog.md").unwrap();
        let mut lines = doc(&["### 1.2.0", "* [BUGFIX] earlier fix (#8)"]);
        let original = lines.clone();

        let result = patcher.insert(&mut lines, "1.2.0", "1.3.0", &[]);
        assert!(matches!(
            result,
            Err(ChangelogError::MissingInsertionPoint { .. })
        ));
        assert_eq!(lines, original);
    }

    #[test]
    fn test_patch_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("changelog.md");
        std::fs::write(&path, "# Changelog\n\n### 1.2.0\n* [BUGFIX] earlier fix (#8)\n").unwrap();

        let patcher = DocumentPatcher::for_path(&path).unwrap();
        let records = vec![make_record(10, ChangeCategory::Feature, "add X")];
        patcher.patch_file("1.2.0", "1.3.0", &records).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "# Changelog\n\n### 1.3.0\n* [FEATURE] add X (#10)\n\n### 1.2.0\n* [BUGFIX] earlier fix (#8)\n"
        );
    }

    #[test]
    fn test_patch_file_missing_file() {
        let temp = TempDir::new().unwrap();
        let patcher = DocumentPatcher::for_path(temp.path().join("nope.md")).unwrap();
        let result = patcher.patch_file("1.2.0", "1.3.0", &[]);
        assert!(matches!(result, Err(ChangelogError::FileNotFound(_))));
    }

    #[test]
    fn test_rerun_duplicates_block() {
        // No duplicate detection: a second run for the same version inserts
        // a second identical block.
        let patcher = DocumentPatcher::for_path("changelog.md").unwrap();
        let mut lines = doc(&["# Changelog", "", "### 1.2.0"]);

        let records = vec![make_record(10, ChangeCategory::Feature, "add X")];
        patcher.insert(&mut lines, "1.2.0", "1.3.0", &records).unwrap();
        patcher.insert(&mut lines, "1.2.0", "1.3.0", &records).unwrap();

        let headings = lines.iter().filter(|l| *l == "### 1.3.0").count();
        assert_eq!(headings, 2);
    }

    #[test]
    fn test_round_trip_across_formats() {
        // Rendering the same records to both formats and re-extracting the
        // bullets yields identical tuples in identical order.
        let records = vec![
            make_record(10, ChangeCategory::Feature, "add X"),
            make_record(11, ChangeCategory::Bugfix, "fix Y"),
        ];

        let md = MarkdownFormatter.render("1.3.0", &records);
        let rst = RstFormatter.render("1.3.0", &records);

        let bullets = |lines: &[String]| -> Vec<String> {
            lines
                .iter()
                .filter(|l| l.starts_with("* ["))
                .cloned()
                .collect()
        };

        assert_eq!(bullets(&md), bullets(&rst));
        assert_eq!(
            bullets(&md),
            vec![
                "* [FEATURE] add X (#10)".to_string(),
                "* [BUGFIX] fix Y (#11)".to_string(),
            ]
        );
    }
}
