//! Release notes extraction
//!
//! Pulls one release's bullet lines back out of the Markdown changelog so
//! they can be reused as the GitHub release body.

use tracing::debug;

/// Extract the lines of the entry for `version`: everything between the
/// line containing the version and the next blank line.
///
/// Returns an empty list when the version has no entry.
pub fn extract_release_notes(lines: &[String], version: &str) -> Vec<String> {
    let mut start = 0usize;
    let mut end = 0usize;

    for (i, line) in lines.iter().enumerate() {
        if line.contains(version) {
            start = i + 1;
        }
        if start != 0 && line.trim().is_empty() {
            end = i;
            break;
        }
    }

    debug!(version, start, end, "extracted release notes span");
    if end <= start {
        // No entry, or an entry that runs to EOF without a closing blank line.
        return Vec::new();
    }
    lines[start..end].to_vec()
}
