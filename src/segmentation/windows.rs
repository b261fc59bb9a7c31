use crate::models::{GazeEvent, Window};

use super::search::{closest_left_index, closest_right_index};

/// Position of the first event whose onset equals the matched onset.
fn first_index_of(onsets: &[f64], matched: f64) -> usize {
    onsets.partition_point(|&value| value < matched)
}

/// Snap every target time to event indices and build one window per target.
///
/// Anchored at the start, a window runs from the first event after `t` to the
/// first event after `t + window_length`. Anchored at the end, it runs from
/// the first event after `t - window_length` up to the last event before `t`.
///
/// Panics if a window does not move forward in time, which only happens for
/// overlapping or degenerate annotations.
pub fn make_windows(
    events: &[GazeEvent],
    target_times: &[f64],
    window_length: f64,
    from_end: bool,
) -> Vec<Window> {
    let onsets = GazeEvent::onsets(events);

    let windows: Vec<Window> = target_times
        .iter()
        .map(|&t| {
            let (start_pos, end_pos) = if from_end {
                (
                    closest_right_index(&onsets, t - window_length),
                    closest_left_index(&onsets, t),
                )
            } else {
                (
                    closest_right_index(&onsets, t),
                    closest_right_index(&onsets, t + window_length),
                )
            };

            Window::new(
                first_index_of(&onsets, onsets[start_pos]),
                first_index_of(&onsets, onsets[end_pos]),
            )
        })
        .collect();

    for (target, window) in target_times.iter().zip(&windows) {
        assert!(
            window.start < window.end,
            "degenerate window [{}, {}) for target time {target}",
            window.start,
            window.end
        );
    }

    windows
}
