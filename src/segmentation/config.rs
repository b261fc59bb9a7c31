use serde::{Deserialize, Serialize};

/// Offset subtracted from a shot's end so the event sitting exactly on the
/// cut is not pulled into the scanpath.
pub const EDGE_OFFSET_SECS: f64 = 0.03;

/// Configuration for scene-aware chunking with tunable thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChunkingConfig {
    /// Consecutive same-locale shots shorter than this are fused
    pub min_shot_duration_secs: f64,

    /// Length of every extracted scanpath; shots shorter than this host none
    pub window_length_secs: f64,

    /// Anchor windows at the end of each shot instead of its onset
    pub from_end: bool,

    /// Distance kept from the cut when anchoring at the shot end
    pub edge_offset_secs: f64,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            min_shot_duration_secs: 5.0,
            window_length_secs: 4.92,
            from_end: true,
            edge_offset_secs: EDGE_OFFSET_SECS,
        }
    }
}
