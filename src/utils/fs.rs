//! File system helpers for descriptor output.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Ensures a directory exists, creating it and any missing parents.
///
/// # Errors
///
/// Fails if the path exists but is not a directory, or if creation fails.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            bail!("Path exists but is not a directory: {}", path.display());
        }
        return Ok(());
    }

    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// Writes a file atomically via a temporary file and rename.
///
/// The destination is overwritten if it already exists. A reader never
/// observes a half-written descriptor: content is written to a sibling
/// `.tmp` file, synced, then renamed into place.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let temp_path = path.with_extension("tmp");

    {
        let mut file = fs::File::create(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        file.sync_all().with_context(|| "Failed to sync file to disk")?;
    }

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join(".project");

        atomic_write(&target, b"<projectDescription/>").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"<projectDescription/>");
    }

    #[test]
    fn atomic_write_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join(".project");
        fs::write(&target, b"stale").unwrap();

        atomic_write(&target, b"fresh").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"fresh");
    }

    #[test]
    fn atomic_write_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join(".flexLibProperties");

        atomic_write(&target, b"<flexLibProperties/>").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn ensure_dir_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("occupied");
        fs::write(&file, b"x").unwrap();

        assert!(ensure_dir(&file).is_err());
    }
}
