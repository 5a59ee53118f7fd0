//! Assertion utilities for robot testing
//!
//! Spring motion ends exactly on its target, but intermediate frames are
//! only approximately predictable; these helpers compare with a tolerance.

use lightbox::Keyframe;
use lightbox_geometry::Rect;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

pub fn assert_keyframe_approx_eq(actual: Keyframe, expected: Keyframe, tolerance: f32, msg: &str) {
    assert_rect_approx_eq(actual.frame, expected.frame, tolerance, msg);
    assert_approx_eq(actual.blur, expected.blur, tolerance, &format!("{} - blur", msg));
}

/// Assert that every blur value in `history` is a valid intensity.
pub fn assert_blur_in_range(history: &[Keyframe], msg: &str) {
    for (index, keyframe) in history.iter().enumerate() {
        assert!(
            (0.0..=1.0).contains(&keyframe.blur),
            "{}: frame {} has blur {}",
            msg,
            index,
            keyframe.blur
        );
    }
}

/// Assert that a sequence only ever moves in one direction.
pub fn assert_monotonic(values: &[f32], increasing: bool, msg: &str) {
    for pair in values.windows(2) {
        let ok = if increasing {
            pair[1] >= pair[0]
        } else {
            pair[1] <= pair[0]
        };
        assert!(ok, "{}: {:?} is not monotonic", msg, pair);
    }
}
