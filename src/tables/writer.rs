use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::models::{
    ChunkManifest, GazeEvent, SimilarityScores, SummaryRow, Window, GAZE_FIELDS,
    SIMILARITY_FIELDS,
};

use super::helpers::format_fixed;
use super::layout::{scanpath_dir, scanpath_file_name};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// One tab-separated output line. Coordinates carry one decimal, every other
/// numeric field three.
pub fn format_event_row(event: &GazeEvent) -> String {
    [
        format_fixed(event.onset, 3),
        format_fixed(event.duration, 3),
        event.label.clone(),
        format_fixed(event.start_x, 1),
        format_fixed(event.start_y, 1),
        format_fixed(event.end_x, 1),
        format_fixed(event.end_y, 1),
        format_fixed(event.amp, 3),
        format_fixed(event.peak_vel, 3),
        format_fixed(event.med_vel, 3),
        format_fixed(event.avg_vel, 3),
    ]
    .join("\t")
}

fn render_chunk(events: &[GazeEvent]) -> String {
    let mut out = GAZE_FIELDS.join("\t");
    out.push('\n');
    for event in events {
        out.push_str(&format_event_row(event));
        out.push('\n');
    }
    out
}

/// Write one file per window under `out_root/scanpath-{i}/`.
///
/// Existing window directories are reused and existing files overwritten.
/// Returns the written paths in window order.
pub fn chunk_and_save(
    events: &[GazeEvent],
    windows: &[Window],
    out_root: &Path,
    subject: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(windows.len());

    for (idx, window) in windows.iter().enumerate() {
        let index = idx + 1;
        let dir = scanpath_dir(out_root, index);
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create scanpath directory {}", dir.display()))?;

        let path = dir.join(scanpath_file_name(subject, index));
        let chunk = &events[window.start..window.end];
        fs::write(&path, render_chunk(chunk))
            .with_context(|| format!("failed to write scanpath {}", path.display()))?;

        log_debug!("wrote {} events to {}", chunk.len(), path.display());
        written.push(path);
    }

    Ok(written)
}

pub fn write_manifest(path: &Path, manifest: &ChunkManifest) -> Result<()> {
    let serialized = serde_json::to_string_pretty(manifest)?;
    fs::write(path, serialized)
        .with_context(|| format!("failed to write manifest to {}", path.display()))
}

fn score_fields(scores: &SimilarityScores) -> Vec<String> {
    scores.to_array().iter().map(|v| v.to_string()).collect()
}

/// Headerless score rows, as the comparator emits them.
pub fn write_score_rows(path: &Path, rows: &[SimilarityScores]) -> Result<()> {
    let mut out = String::new();
    for row in rows {
        out.push_str(&score_fields(row).join("\t"));
        out.push('\n');
    }
    fs::write(path, out).with_context(|| format!("failed to write scores to {}", path.display()))
}

/// Score rows under a header of measure names.
pub fn write_scores_table(path: &Path, rows: &[SimilarityScores]) -> Result<()> {
    let mut out = SIMILARITY_FIELDS.join("\t");
    out.push('\n');
    for row in rows {
        out.push_str(&score_fields(row).join("\t"));
        out.push('\n');
    }
    fs::write(path, out)
        .with_context(|| format!("failed to write score table to {}", path.display()))
}

pub fn write_summary_table(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    let mut out = String::from("onset\tduration\t");
    out.push_str(&SIMILARITY_FIELDS.join("\t"));
    out.push('\n');
    for row in rows {
        let mut fields = vec![row.onset.to_string(), row.duration.to_string()];
        fields.extend(score_fields(&row.scores));
        out.push_str(&fields.join("\t"));
        out.push('\n');
    }
    fs::write(path, out)
        .with_context(|| format!("failed to write summary table to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(onset: f64) -> GazeEvent {
        GazeEvent {
            onset,
            duration: 0.1234,
            label: "PURS".into(),
            start_x: 100.26,
            start_y: 200.0,
            end_x: 110.04,
            end_y: 201.96,
            amp: 0.5,
            peak_vel: 33.3333,
            med_vel: 20.0,
            avg_vel: 21.5,
        }
    }

    #[test]
    fn row_formatting_uses_fixed_precision() {
        assert_eq!(
            format_event_row(&event(1.5)),
            "1.500\t0.123\tPURS\t100.3\t200.0\t110.0\t202.0\t0.500\t33.333\t20.000\t21.500"
        );
    }

    #[test]
    fn writes_half_open_window() {
        let dir = tempfile::tempdir().unwrap();
        let events: Vec<GazeEvent> = (0..10).map(|i| event(f64::from(i))).collect();

        let written = chunk_and_save(&events, &[Window::new(2, 7)], dir.path(), "sub-01").unwrap();

        let expected = dir.path().join("scanpath-1").join("sub-01_scanpath-1.tsv");
        assert_eq!(written, vec![expected.clone()]);

        let content = fs::read_to_string(expected).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], GAZE_FIELDS.join("\t"));
        assert!(lines[1].starts_with("2.000\t"));
        assert!(lines[5].starts_with("6.000\t"));
    }

    #[test]
    fn reuses_directories_and_overwrites_files() {
        let dir = tempfile::tempdir().unwrap();
        let events: Vec<GazeEvent> = (0..10).map(|i| event(f64::from(i))).collect();

        chunk_and_save(&events, &[Window::new(0, 9)], dir.path(), "sub-02").unwrap();
        let written = chunk_and_save(&events, &[Window::new(0, 1)], dir.path(), "sub-02").unwrap();

        let content = fs::read_to_string(&written[0]).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn one_directory_per_window() {
        let dir = tempfile::tempdir().unwrap();
        let events: Vec<GazeEvent> = (0..10).map(|i| event(f64::from(i))).collect();
        let windows = [Window::new(0, 3), Window::new(4, 8)];

        chunk_and_save(&events, &windows, dir.path(), "sub-03").unwrap();

        assert!(dir.path().join("scanpath-1/sub-03_scanpath-1.tsv").is_file());
        assert!(dir.path().join("scanpath-2/sub-03_scanpath-2.tsv").is_file());
    }
}
