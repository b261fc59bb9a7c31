//! On-disk layout of chunked scanpaths:
//! `<root>/scanpath-<n>/<subject>_scanpath-<n>.tsv`, with run roots named
//! `run-<r>` when several runs share a parent.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

const SCANPATH_PREFIX: &str = "scanpath-";

/// Directory holding every subject's chunk for window `index` (1-based).
pub fn scanpath_dir(out_root: &Path, index: usize) -> PathBuf {
    out_root.join(format!("{SCANPATH_PREFIX}{index}"))
}

pub fn scanpath_file_name(subject: &str, index: usize) -> String {
    format!("{subject}_{SCANPATH_PREFIX}{index}.tsv")
}

pub fn run_dir(root: &Path, run: u32) -> PathBuf {
    root.join(format!("run-{run}"))
}

/// Window index encoded in a `scanpath-<n>` directory name.
pub fn scanpath_index(name: &str) -> Option<usize> {
    name.strip_prefix(SCANPATH_PREFIX)?.parse().ok()
}

/// Subject encoded in a `<subject>_scanpath-<n>.tsv` file name, provided the
/// window index matches.
pub fn subject_of(file_name: &str, index: usize) -> Option<&str> {
    let suffix = format!("_{SCANPATH_PREFIX}{index}.tsv");
    file_name
        .strip_suffix(suffix.as_str())
        .filter(|subject| !subject.is_empty())
}

/// All `scanpath-<n>` directories under `root`, ordered by `n`.
pub fn list_scanpath_dirs(root: &Path) -> Result<Vec<(usize, PathBuf)>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("failed to list scanpath directories in {}", root.display()))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", root.display()))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(index) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(scanpath_index)
        {
            dirs.push((index, path));
        }
    }

    dirs.sort_by_key(|(index, _)| *index);
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        let name = scanpath_file_name("sub-07", 12);
        assert_eq!(name, "sub-07_scanpath-12.tsv");
        assert_eq!(subject_of(&name, 12), Some("sub-07"));
        assert_eq!(subject_of(&name, 1), None);
        assert_eq!(scanpath_index("scanpath-12"), Some(12));
        assert_eq!(scanpath_index("comparisons.tsv"), None);
    }

    #[test]
    fn scanpath_dirs_sorted_numerically() {
        let root = tempfile::tempdir().unwrap();
        for index in [10, 2, 1] {
            fs::create_dir_all(scanpath_dir(root.path(), index)).unwrap();
        }
        fs::create_dir_all(root.path().join("notes")).unwrap();
        fs::write(root.path().join("scanpath-99"), "file, not dir").unwrap();

        let dirs = list_scanpath_dirs(root.path()).unwrap();
        let indices: Vec<usize> = dirs.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![1, 2, 10]);
    }
}
