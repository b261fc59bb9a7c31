use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::error::ChunkError;
use crate::models::{SimilarityScores, SummaryRow};
use crate::tables::{list_scanpath_dirs, read_score_rows, run_dir};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

/// Mean of the finite-or-infinite values, ignoring NaN. NaN when nothing is
/// left to average.
pub fn nanmean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Column-wise NaN-ignoring mean of score rows.
pub fn mean_scores(rows: &[SimilarityScores]) -> SimilarityScores {
    let mut means = [0.0; 5];
    for (col, mean) in means.iter_mut().enumerate() {
        *mean = nanmean(rows.iter().map(|row| row.to_array()[col]));
    }
    SimilarityScores::from_array(means)
}

/// Average similarity of one scanpath across all subject pairings.
pub fn scene_means(comparisons: &Path) -> Result<SimilarityScores> {
    Ok(mean_scores(&read_score_rows(comparisons)?))
}

/// Per-scanpath means for each run under `root` (`run-<r>/scanpath-<n>/`),
/// ordered by run then scanpath. Directories without a comparisons file are
/// skipped.
pub fn collect_scene_means(
    root: &Path,
    runs: &[u32],
    comparisons_name: &str,
) -> Result<Vec<SimilarityScores>> {
    let mut means = Vec::new();
    for &run in runs {
        let dir = run_dir(root, run);
        for (index, scanpath) in list_scanpath_dirs(&dir)? {
            let comparisons = scanpath.join(comparisons_name);
            if !comparisons.is_file() {
                log_warn!("run-{run}/scanpath-{index} has no {comparisons_name}, skipping");
                continue;
            }
            means.push(scene_means(&comparisons)?);
        }
    }
    log_info!("averaged {} scanpaths over {} runs", means.len(), runs.len());
    Ok(means)
}

/// Pairwise result tables of one run: file names containing `vs` and ending
/// in a digit, sorted by path.
pub fn find_pairwise_tables(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;

    let mut tables = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read entry in {}", dir.display()))?
            .path();
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| {
                name.contains("vs") && name.chars().last().is_some_and(|c| c.is_ascii_digit())
            })
            .unwrap_or(false);
        if matches && path.is_file() {
            tables.push(path);
        }
    }

    tables.sort();
    Ok(tables)
}

/// Row-wise means across equally long summary tables: row `i` of the result
/// averages row `i` of every table, ignoring NaN.
pub fn run_means(tables: &[(String, Vec<SummaryRow>)]) -> Result<Vec<SummaryRow>, ChunkError> {
    let Some((_, first)) = tables.first() else {
        return Ok(Vec::new());
    };
    let expected = first.len();

    for (name, rows) in tables {
        if rows.len() != expected {
            return Err(ChunkError::RowCount {
                table: name.clone(),
                found: rows.len(),
                expected,
            });
        }
    }

    Ok((0..expected)
        .map(|i| {
            let column = |f: &dyn Fn(&SummaryRow) -> f64| {
                nanmean(tables.iter().map(|(_, rows)| f(&rows[i])))
            };
            let mut scores = [0.0; 5];
            for (col, score) in scores.iter_mut().enumerate() {
                *score = column(&|row: &SummaryRow| row.scores.to_array()[col]);
            }
            SummaryRow {
                onset: column(&|row: &SummaryRow| row.onset),
                duration: column(&|row: &SummaryRow| row.duration),
                scores: SimilarityScores::from_array(scores),
            }
        })
        .collect())
}
