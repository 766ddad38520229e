//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.msg.to_string(),
        })?;

        let before = files.len();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == before {
            return Err(CliError::FileNotFound {
                pattern: pattern.clone(),
            }
            .into());
        }
    }

    // Remove duplicates and sort
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
    fn test_resolves_plain_path_and_glob() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["a.txt", "b.txt", "c.bin"] {
            fs::write(temp_dir.path().join(name), "x").unwrap();
        }

        let pattern = temp_dir.path().join("*.txt").display().to_string();
        let plain = temp_dir.path().join("c.bin").display().to_string();
        let files = resolve_patterns(&[pattern.clone(), plain, pattern]).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.bin"]);
    }

    #[test]
    fn test_unmatched_pattern_is_an_error() {
        let err = resolve_patterns(&["/nonexistent/*.txt".to_string()]).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid file pattern"));
    }
}
