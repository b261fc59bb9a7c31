use crate::models::AnnotationInterval;

/// Fuse runs of short shots that share a locale.
///
/// A shot absorbs its right neighbour when both are shorter than
/// `min_duration` and carry the same locale. The grown shot is compared again
/// with its new neighbour, so a chain of short same-locale shots collapses
/// until the accumulated duration reaches the threshold. Onsets are kept from
/// the first shot of each fused run.
pub fn merge_short_shots(
    annotation: &[AnnotationInterval],
    min_duration: f64,
) -> Vec<AnnotationInterval> {
    assert!(!annotation.is_empty(), "cannot merge an empty annotation");
    assert!(
        min_duration > 0.0,
        "min_duration must be positive, got {min_duration}"
    );

    let mut merged: Vec<AnnotationInterval> = Vec::with_capacity(annotation.len());

    for shot in annotation {
        match merged.last_mut() {
            Some(current)
                if current.is_short(min_duration)
                    && shot.is_short(min_duration)
                    && current.locale == shot.locale =>
            {
                current.duration += shot.duration;
            }
            _ => merged.push(shot.clone()),
        }
    }

    merged
}
