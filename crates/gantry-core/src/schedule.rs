//! Release schedule file handling
//!
//! The schedule is a JSON object mapping ISO dates to version strings:
//!
//! ```json
//! {
//!     "2024-05-02": "0.16.8",
//!     "2024-05-09": "0.16.9"
//! }
//! ```
//!
//! When `prep` runs without an explicit version, the entry for today's date
//! is consumed: its version is returned and the file is rewritten without it.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{Result, ScheduleError};

/// Read the schedule file into a date-sorted map
pub fn read_schedule(path: &Path) -> Result<BTreeMap<NaiveDate, String>> {
    if !path.exists() {
        return Err(ScheduleError::FileNotFound(path.to_path_buf()).into());
    }

    let contents = std::fs::read_to_string(path).map_err(ScheduleError::Io)?;
    let schedule: BTreeMap<NaiveDate, String> =
        serde_json::from_str(contents.trim()).map_err(ScheduleError::Json)?;
    debug!(path = %path.display(), entries = schedule.len(), "read release schedule");
    Ok(schedule)
}

/// Look up the version scheduled for `today` without touching the file.
pub fn scheduled_version(path: &Path, today: NaiveDate) -> Result<String> {
    let schedule = read_schedule(path)?;
    schedule
        .get(&today)
        .cloned()
        .ok_or_else(|| ScheduleError::NoScheduledVersion(today).into())
}

/// Look up the version scheduled for `today` and rewrite the schedule file
/// with that entry removed.
pub fn consume_scheduled_version(path: &Path, today: NaiveDate) -> Result<String> {
    let mut schedule = read_schedule(path)?;

    let version = schedule
        .remove(&today)
        .ok_or(ScheduleError::NoScheduledVersion(today))?;

    // BTreeMap keys keep the rewritten file date-sorted.
    let rewritten = serde_json::to_string_pretty(&schedule).map_err(ScheduleError::Json)?;
    std::fs::write(path, rewritten).map_err(ScheduleError::Io)?;

    info!(%today, version, "consumed scheduled release");
    Ok(version)
}
