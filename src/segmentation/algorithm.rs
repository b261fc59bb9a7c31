use crate::models::{AnnotationInterval, GazeEvent, Window};
use crate::segmentation::config::ChunkingConfig;
use crate::segmentation::{merge::merge_short_shots, onsets::window_onsets, windows::make_windows};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

/// Everything derived from one annotation and one event stream before any
/// chunk is written.
#[derive(Debug, Clone)]
pub struct WindowPlan {
    pub merged: Vec<AnnotationInterval>,
    pub target_times: Vec<f64>,
    pub windows: Vec<Window>,
}

/// Main chunking plan: merged shots, window anchors, then snapped windows.
pub fn plan_windows(
    events: &[GazeEvent],
    annotation: &[AnnotationInterval],
    config: &ChunkingConfig,
) -> WindowPlan {
    // Step 1: Fuse short same-locale shots
    let merged = merge_short_shots(annotation, config.min_shot_duration_secs);
    log_info!(
        "merged {} shots into {} (min duration {}s)",
        annotation.len(),
        merged.len(),
        config.min_shot_duration_secs
    );

    // Step 2: Anchor a window in every shot long enough to host one
    let target_times = window_onsets(
        &merged,
        config.window_length_secs,
        config.from_end,
        config.edge_offset_secs,
    );

    // Edge case: no shot long enough to host a window
    if target_times.is_empty() {
        log_info!("no windows: no shot reaches {}s", config.window_length_secs);
        return WindowPlan {
            merged,
            target_times,
            windows: Vec::new(),
        };
    }

    // Step 3: Snap anchors to event indices
    let windows = make_windows(
        events,
        &target_times,
        config.window_length_secs,
        config.from_end,
    );
    for (t, window) in target_times.iter().zip(&windows) {
        log_debug!("anchor {t:.3}s -> events [{}, {})", window.start, window.end);
    }
    log_info!("planned {} windows", windows.len());

    WindowPlan {
        merged,
        target_times,
        windows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(onset: f64) -> GazeEvent {
        GazeEvent {
            onset,
            duration: 0.2,
            label: "SACC".into(),
            start_x: 10.0,
            start_y: 20.0,
            end_x: 30.0,
            end_y: 40.0,
            amp: 1.0,
            peak_vel: 100.0,
            med_vel: 50.0,
            avg_vel: 60.0,
        }
    }

    #[test]
    fn plans_end_anchored_windows_from_raw_annotation() {
        let events: Vec<GazeEvent> = (0..150).map(|i| event(f64::from(i) * 0.1)).collect();
        let annotation = vec![
            AnnotationInterval::new(0.0, 3.0, "A"),
            AnnotationInterval::new(3.0, 2.0, "A"),
            AnnotationInterval::new(5.0, 10.0, "B"),
        ];

        let plan = plan_windows(&events, &annotation, &ChunkingConfig::default());

        assert_eq!(plan.merged.len(), 2);
        assert_eq!(plan.target_times.len(), 2);
        assert_eq!(plan.windows.len(), 2);
        for window in &plan.windows {
            assert!(window.start < window.end);
            let span = events[window.end - 1].onset - events[window.start].onset;
            assert!(span <= 4.92, "span {span}");
        }
    }

    #[test]
    fn short_annotation_plans_nothing() {
        let events: Vec<GazeEvent> = (0..10).map(|i| event(f64::from(i))).collect();
        let annotation = vec![AnnotationInterval::new(0.0, 2.0, "A")];
        let plan = plan_windows(&events, &annotation, &ChunkingConfig::default());
        assert!(plan.windows.is_empty());
    }

    #[test]
    #[should_panic(expected = "empty onset column")]
    fn empty_event_stream_is_fatal() {
        let annotation = vec![AnnotationInterval::new(0.0, 10.0, "A")];
        plan_windows(&[], &annotation, &ChunkingConfig::default());
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let events: Vec<GazeEvent> = (0..300).map(|i| event(f64::from(i) * 0.07)).collect();
        let annotation = vec![
            AnnotationInterval::new(0.0, 6.0, "A"),
            AnnotationInterval::new(6.0, 1.0, "B"),
            AnnotationInterval::new(7.0, 3.0, "B"),
            AnnotationInterval::new(10.0, 8.0, "C"),
        ];
        let config = ChunkingConfig::default();
        let first = plan_windows(&events, &annotation, &config);
        let second = plan_windows(&events, &annotation, &config);
        assert_eq!(first.windows, second.windows);
    }
}
