//! Saturating nearest-neighbour lookups over an ascending onset column.
//!
//! Both lookups return a position into the slice. Queries outside the covered
//! range clamp to the first or last element instead of failing.

fn assert_sorted(sorted: &[f64]) {
    assert!(!sorted.is_empty(), "cannot search an empty onset column");
    assert!(
        sorted.windows(2).all(|pair| pair[0] <= pair[1]),
        "onset column must be sorted ascending"
    );
}

/// Position of the last element strictly below `t`.
///
/// Saturates to the first element when nothing lies below `t`.
pub fn closest_left_index(sorted: &[f64], t: f64) -> usize {
    assert_sorted(sorted);
    let pos = sorted.partition_point(|&value| value < t);
    if pos == 0 {
        0
    } else {
        pos - 1
    }
}

/// Position of the first element strictly above `t`.
///
/// Saturates to the last element when nothing lies above `t`.
pub fn closest_right_index(sorted: &[f64], t: f64) -> usize {
    assert_sorted(sorted);
    let pos = sorted.partition_point(|&value| value <= t);
    pos.min(sorted.len() - 1)
}

pub fn closest_left(sorted: &[f64], t: f64) -> f64 {
    sorted[closest_left_index(sorted, t)]
}

pub fn closest_right(sorted: &[f64], t: f64) -> f64 {
    sorted[closest_right_index(sorted, t)]
}
