//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_and_dedups() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.html"), "b").unwrap();
        fs::write(temp_dir.path().join("a.html"), "a").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "n").unwrap();

        let dir = temp_dir.path().display().to_string();
        let files = resolve_patterns(&[
            format!("{dir}/*.html"),
            format!("{dir}/a.html"),
        ])
        .unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.html", "b.html"]);
    }

    #[test]
    fn test_no_match_is_an_error() {
        let err = resolve_patterns(&["/nonexistent/*.html".to_string()]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid file pattern"));
    }
}
