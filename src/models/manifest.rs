use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::segmentation::ChunkingConfig;

/// Record of one chunking run, written next to the chunks it describes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkManifest {
    pub subject: String,
    pub generated_at: DateTime<Utc>,
    pub config: ChunkingConfig,
    pub merged_shot_count: usize,
    pub windows: Vec<ManifestWindow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManifestWindow {
    /// 1-based, matches the `scanpath-{index}` directory.
    pub index: usize,
    pub target_time: f64,
    pub start_index: usize,
    pub end_index: usize,
    pub first_onset: f64,
    pub last_onset: f64,
}
