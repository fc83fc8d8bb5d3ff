//! A module for reading and rewriting the persisted solutions file.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Read every line of the solutions file.
/// The file is read in full up front; nothing streams.
///
/// # Errors
///
/// Returns an error if the file does not exist (without creating it) or
/// cannot be read.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        bail!("{} not found", path.display());
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Overwrite the solutions file with the retained lines, one per line.
/// An empty set truncates the file, signaling full completion.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn rewrite(path: &Path, retained: &[String]) -> Result<()> {
    let mut contents = retained.join("\n");
    if !contents.is_empty() {
        contents.push('\n');
    }
    fs::write(path, contents).with_context(|| format!("Failed to rewrite {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_fails_without_creating_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solutions.csv");

        assert!(load_lines(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_load_empty_file_returns_no_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solutions.csv");
        fs::write(&path, "").unwrap();

        assert_eq!(load_lines(&path).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_load_keeps_blank_lines_as_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solutions.csv");
        fs::write(&path, "a,b,c\n\nd,e,f\n").unwrap();

        assert_eq!(load_lines(&path).unwrap(), vec!["a,b,c", "", "d,e,f"]);
    }

    #[test]
    fn test_rewrite_preserves_line_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solutions.csv");
        let retained = vec!["a,b,c".to_string(), "d,e,f".to_string()];

        rewrite(&path, &retained).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b,c\nd,e,f\n");
    }

    #[test]
    fn test_rewrite_empty_set_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solutions.csv");
        fs::write(&path, "a,b,c\n").unwrap();

        rewrite(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
