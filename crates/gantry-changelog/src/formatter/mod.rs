//! Changelog entry formatters

mod markdown;
mod rst;

pub use markdown::MarkdownFormatter;
pub use rst::RstFormatter;

use crate::types::ChangeRecord;

/// Trait for rendering a release's change records into document lines
pub trait EntryFormatter: Send + Sync {
    /// Render the entry block for a release version.
    ///
    /// The block is spliced into an existing document, so it starts with a
    /// blank separator line and carries no trailing one.
    fn render(&self, version: &str, records: &[ChangeRecord]) -> Vec<String>;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}

/// The shared bullet lines, one per record
pub(crate) fn bullet_lines(records: &[ChangeRecord]) -> impl Iterator<Item = String> + '_ {
    records.iter().map(ChangeRecord::bullet)
}
