//! End-to-end chunking of one subject's recording.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::Utc;

use crate::fetch::DataFetcher;
use crate::models::{ChunkManifest, ManifestWindow};
use crate::segmentation::plan_windows;
use crate::settings::Settings;
use crate::tables::{chunk_and_save, read_annotation, read_gaze_events, write_manifest};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

/// What a chunking run produced.
#[derive(Debug, Clone)]
pub struct ChunkReport {
    pub subject: String,
    pub chunk_paths: Vec<PathBuf>,
    pub manifest_path: PathBuf,
}

pub fn manifest_file_name(subject: &str) -> String {
    format!("{subject}_manifest.json")
}

/// Fetch, read, plan and write every scanpath of one recording.
pub fn chunk_recording<F: DataFetcher>(
    fetcher: &F,
    settings: &Settings,
    data_file: &Path,
    annotation_file: &Path,
    out_root: &Path,
) -> Result<ChunkReport> {
    // Input-shape checks first, before anything is written
    let subject = settings.subject.subject_from_path(data_file)?;
    log_info!("found subject identifier {subject}");

    fetcher.fetch(data_file)?;
    fetcher.fetch(annotation_file)?;

    let events = read_gaze_events(data_file)?;
    let annotation = read_annotation(annotation_file)?;
    log_info!(
        "read {} events and {} shots for {subject}",
        events.len(),
        annotation.len()
    );

    fs::create_dir_all(out_root)
        .with_context(|| format!("failed to create output directory {}", out_root.display()))?;

    let plan = plan_windows(&events, &annotation, &settings.chunking);
    if plan.windows.is_empty() {
        log_warn!("no scanpaths for {subject}");
    }

    let chunk_paths = chunk_and_save(&events, &plan.windows, out_root, &subject)?;

    let manifest = ChunkManifest {
        subject: subject.clone(),
        generated_at: Utc::now(),
        config: settings.chunking.clone(),
        merged_shot_count: plan.merged.len(),
        windows: plan
            .windows
            .iter()
            .zip(&plan.target_times)
            .enumerate()
            .map(|(idx, (window, &target_time))| ManifestWindow {
                index: idx + 1,
                target_time,
                start_index: window.start,
                end_index: window.end,
                first_onset: events[window.start].onset,
                last_onset: events[window.end - 1].onset,
            })
            .collect(),
    };
    let manifest_path = out_root.join(manifest_file_name(&subject));
    write_manifest(&manifest_path, &manifest)?;

    log_info!(
        "wrote {} scanpaths for {subject} to {}",
        chunk_paths.len(),
        out_root.display()
    );

    Ok(ChunkReport {
        subject,
        chunk_paths,
        manifest_path,
    })
}
