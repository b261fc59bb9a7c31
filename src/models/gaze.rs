use serde::{Deserialize, Serialize};

/// Column order of every gaze-event table, in and out.
pub const GAZE_FIELDS: [&str; 11] = [
    "onset", "duration", "label", "start_x", "start_y", "end_x", "end_y", "amp", "peak_vel",
    "med_vel", "avg_vel",
];

/// A single classified eye movement (fixation, saccade, pursuit, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GazeEvent {
    pub onset: f64,
    pub duration: f64,
    pub label: String,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub amp: f64,
    pub peak_vel: f64,
    pub med_vel: f64,
    pub avg_vel: f64,
}

impl GazeEvent {
    /// Onset column of an event stream, in stream order.
    pub fn onsets(events: &[GazeEvent]) -> Vec<f64> {
        events.iter().map(|event| event.onset).collect()
    }
}
