//! reStructuredText entry formatter

use super::{bullet_lines, EntryFormatter};
use crate::types::ChangeRecord;

/// Underline used beneath the version title
const TITLE_UNDERLINE: &str = "-----------------";

/// Renders an entry as an underlined title followed by bullets
pub struct RstFormatter;

impl EntryFormatter for RstFormatter {
    fn render(&self, version: &str, records: &[ChangeRecord]) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            version.to_string(),
            TITLE_UNDERLINE.to_string(),
        ];
        lines.extend(bullet_lines(records));
        lines
    }

    fn extension(&self) -> &'static str {
        "rst"
    }
}
