use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::settings::ScreenSize;
use crate::tables::{layout::subject_of, list_scanpath_dirs, writer::write_score_rows};

use super::SimilarityComparator;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info, log_warn};

/// Subjects with a chunk in `dir` (a `scanpath-<index>` directory), sorted
/// by subject identifier.
pub fn discover_subjects(dir: &Path, index: usize) -> Result<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to list scanpaths in {}", dir.display()))?;

    let mut subjects = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        let subject = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| subject_of(name, index))
            .map(str::to_string);
        if let Some(subject) = subject {
            subjects.push((subject, path));
        }
    }

    subjects.sort();
    Ok(subjects)
}

/// Compare every unordered subject pair of one scanpath directory and write
/// one score row per pair to `dir/output_name`. Returns the number of pairs.
pub fn compare_scanpath_dir<C: SimilarityComparator>(
    comparator: &C,
    dir: &Path,
    index: usize,
    screen: ScreenSize,
    output_name: &str,
) -> Result<usize> {
    let subjects = discover_subjects(dir, index)?;
    if subjects.len() < 2 {
        log_warn!(
            "{} has {} subject(s), nothing to compare",
            dir.display(),
            subjects.len()
        );
    }

    let mut rows = Vec::new();
    for (i, (first, first_path)) in subjects.iter().enumerate() {
        for (second, second_path) in &subjects[i + 1..] {
            log_debug!("comparing {first} vs {second} in scanpath-{index}");
            rows.push(comparator.compare(first_path, second_path, screen)?);
        }
    }

    let out = dir.join(output_name);
    write_score_rows(&out, &rows)?;
    log_info!("wrote {} comparisons to {}", rows.len(), out.display());
    Ok(rows.len())
}

/// Run [`compare_scanpath_dir`] over every scanpath directory of a run.
pub fn compare_run<C: SimilarityComparator>(
    comparator: &C,
    run_dir: &Path,
    screen: ScreenSize,
    output_name: &str,
) -> Result<usize> {
    let mut total = 0;
    for (index, dir) in list_scanpath_dirs(run_dir)? {
        total += compare_scanpath_dir(comparator, &dir, index, screen, output_name)?;
    }
    Ok(total)
}
