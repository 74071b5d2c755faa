//! Gantry Changelog - Changelog derivation and insertion
//!
//! This crate is the release-prep core: it classifies merged pull requests,
//! collects the release window, orders the change records, and splices the
//! rendered entry into the persisted changelog documents.

pub mod assembler;
pub mod classifier;
pub mod formatter;
pub mod notes;
pub mod patcher;
pub mod types;

pub use assembler::{collect_window, ChangelogAssembler, STALE_PR_THRESHOLD};
pub use classifier::{attribution_suffix, classify_title, Classification};
pub use formatter::{EntryFormatter, MarkdownFormatter, RstFormatter};
pub use notes::extract_release_notes;
pub use patcher::{DocumentKind, DocumentPatcher};
pub use types::{ChangeCategory, ChangeRecord};
