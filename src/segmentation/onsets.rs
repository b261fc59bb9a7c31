use crate::models::AnnotationInterval;

/// Anchor times of the windows a merged annotation can host.
///
/// Shots shorter than `min_length` are skipped. When `from_end` is set the
/// anchor is the shot end pulled back by `edge_offset`, otherwise the shot
/// onset. Output order follows the annotation.
pub fn window_onsets(
    annotation: &[AnnotationInterval],
    min_length: f64,
    from_end: bool,
    edge_offset: f64,
) -> Vec<f64> {
    annotation
        .iter()
        .filter(|shot| shot.duration >= min_length)
        .map(|shot| {
            if from_end {
                shot.end() - edge_offset
            } else {
                shot.onset
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::config::EDGE_OFFSET_SECS;

    fn merged() -> Vec<AnnotationInterval> {
        vec![
            AnnotationInterval::new(0.0, 5.0, "A"),
            AnnotationInterval::new(5.0, 10.0, "B"),
        ]
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn shot_ends_minus_offset() {
        let ends = window_onsets(&merged(), 4.92, true, EDGE_OFFSET_SECS);
        assert_close(&ends, &[4.97, 14.97]);
    }

    #[test]
    fn shot_onsets_when_anchored_at_start() {
        let starts = window_onsets(&merged(), 4.92, false, EDGE_OFFSET_SECS);
        assert_close(&starts, &[0.0, 5.0]);
    }

    #[test]
    fn short_shots_are_skipped() {
        let annotation = vec![
            AnnotationInterval::new(0.0, 2.0, "A"),
            AnnotationInterval::new(2.0, 4.92, "B"),
            AnnotationInterval::new(6.92, 4.0, "C"),
        ];
        let starts = window_onsets(&annotation, 4.92, false, EDGE_OFFSET_SECS);
        assert_close(&starts, &[2.0]);
    }
}
