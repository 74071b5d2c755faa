//! Deployment version file handling
//!
//! The deployed version lives in a single-line text file in the repository.
//! The release-prep run rewrites it, together with a docs snippet showing
//! the CLI version banner.

use std::path::Path;

use semver::Version;
use tracing::{debug, info};

use crate::error::{Result, VersionError};

/// Read and parse the deployment version file
pub fn read_deployment_version(path: &Path) -> Result<Version> {
    if !path.exists() {
        return Err(VersionError::FileNotFound(path.to_path_buf()).into());
    }

    let contents = std::fs::read_to_string(path).map_err(VersionError::Io)?;
    let version = Version::parse(contents.trim()).map_err(VersionError::Semver)?;
    debug!(path = %path.display(), version = %version, "read deployment version");
    Ok(version)
}

/// Overwrite the deployment version file with a new version
pub fn write_deployment_version(path: &Path, version: &Version) -> Result<()> {
    info!(path = %path.display(), version = %version, "updating deployment version file");
    std::fs::write(path, format!("{}\n", version)).map_err(VersionError::Io)?;
    Ok(())
}

/// Overwrite the docs snippet showing the version banner.
///
/// The snippet is a fenced codeblock with the expected output of
/// `<tool> --version`; it is rewritten wholesale on every release.
pub fn write_version_snippet(path: &Path, tool_name: &str, version: &Version) -> Result<()> {
    info!(path = %path.display(), version = %version, "updating version snippet");
    let contents = format!("```\n{}, version {}\n```\n", tool_name, version);
    std::fs::write(path, contents).map_err(VersionError::Io)?;
    Ok(())
}

/// Ensure the proposed release version is strictly greater than the current
/// deployed version. Runs before any mutation.
pub fn ensure_newer(current: &Version, proposed: &Version) -> Result<()> {
    if proposed <= current {
        return Err(VersionError::NotMonotonic {
            current: current.to_string(),
            proposed: proposed.to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GantryError;
    use tempfile::TempDir;

    #[test]
    fn test_read_deployment_version() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deployment_version");
        std::fs::write(&path, "0.15.3\n").unwrap();

        let version = read_deployment_version(&path).unwrap();
        assert_eq!(version, Version::new(0, 15, 3));
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = read_deployment_version(&temp.path().join("nope"));
        assert!(matches!(
            result,
            Err(GantryError::Version(VersionError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_write_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deployment_version");

        write_deployment_version(&path, &Version::new(0, 16, 0)).unwrap();
        let read_back = read_deployment_version(&path).unwrap();
        assert_eq!(read_back, Version::new(0, 16, 0));
    }

    #[test]
    fn test_write_version_snippet() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("_version_snippet.mdx");

        write_version_snippet(&path, "widgets", &Version::new(0, 16, 0)).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "```\nwidgets, version 0.16.0\n```\n");
    }

    #[test]
    fn test_ensure_newer() {
        let current = Version::new(0, 15, 3);
        assert!(ensure_newer(&current, &Version::new(0, 15, 4)).is_ok());
        assert!(ensure_newer(&current, &Version::new(0, 16, 0)).is_ok());

        let equal = ensure_newer(&current, &Version::new(0, 15, 3));
        assert!(matches!(
            equal,
            Err(GantryError::Version(VersionError::NotMonotonic { .. }))
        ));

        let older = ensure_newer(&current, &Version::new(0, 15, 2));
        assert!(matches!(
            older,
            Err(GantryError::Version(VersionError::NotMonotonic { .. }))
        ));
    }
}
