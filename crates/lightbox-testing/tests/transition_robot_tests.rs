use lightbox::{Keyframe, Rect, RenderState, TransitionConfig};
use lightbox_testing::robot_assertions::{
    assert_blur_in_range, assert_keyframe_approx_eq, assert_monotonic, assert_rect_approx_eq,
};
use lightbox_testing::{init_logging, LightboxRobot};

fn thumbnail() -> Rect {
    Rect::new(100.0, 431.25, 300.0, 168.75)
}

fn full() -> Rect {
    Rect::new(0.0, 0.0, 400.0, 600.0)
}

/// 400x600 container: distance threshold 150, center 300.
fn robot() -> LightboxRobot {
    init_logging();
    LightboxRobot::new(400.0, 600.0)
}

fn expanded_robot() -> LightboxRobot {
    let mut robot = robot();
    robot.tap();
    robot.wait_for_idle();
    assert_eq!(robot.render_state(), RenderState::Expanded);
    robot.surface_mut().clear_history();
    robot
}

#[test]
fn long_drag_up_expands() {
    let mut robot = robot();
    robot.drag((250.0, 550.0), (250.0, 250.0));
    robot.wait_for_idle();

    assert_eq!(robot.render_state(), RenderState::Expanded);
    assert_eq!(robot.surface().frame(), full());
    assert_eq!(robot.surface().blur(), 1.0);
    assert_blur_in_range(robot.surface().history(), "expand");
}

/// Presses at `from`, moves vertically through `ys` 10ms apart, clears the
/// history and releases at the last point.
fn release_after(robot: &mut LightboxRobot, from: (f32, f32), ys: &[f32]) {
    robot.pointer_down(from.0, from.1);
    for &y in ys {
        robot.pointer_move(from.0, y, 10);
    }
    robot.surface_mut().clear_history();
    let last = ys.last().copied().unwrap_or(from.1);
    robot.pointer_up(from.0, last);
}

fn assert_every_frame_near(robot: &LightboxRobot, expected: Rect, label: &str) {
    let history = robot.surface().history();
    assert!(!history.is_empty(), "{label}: nothing presented");
    for keyframe in history {
        assert_rect_approx_eq(keyframe.frame, expected, 1.0, label);
    }
}

#[test]
fn fast_expanding_release_stays_on_the_full_rect() {
    let mut robot = robot();
    // 300 up in 100ms: past the center, so scrubbing already sits at the end.
    let ys: Vec<f32> = (1..=10).map(|step| 550.0 - 30.0 * step as f32).collect();
    release_after(&mut robot, (250.0, 550.0), &ys);
    robot.wait_for_idle();

    assert_eq!(robot.render_state(), RenderState::Expanded);
    assert_every_frame_near(&robot, full(), "expanding release");
}

#[test]
fn flicking_back_after_a_long_drag_still_stays_on_the_full_rect() {
    let mut robot = robot();
    // 400 up, then a quick 20 point flick back down before lifting.
    release_after(&mut robot, (250.0, 580.0), &[480.0, 380.0, 280.0, 180.0, 200.0]);
    robot.wait_for_idle();

    assert_eq!(robot.render_state(), RenderState::Expanded);
    assert_every_frame_near(&robot, full(), "reverse flick");
}

#[test]
fn fast_collapsing_release_stays_on_the_thumbnail() {
    let mut robot = expanded_robot();
    release_after(&mut robot, (200.0, 150.0), &[230.0, 310.0, 390.0, 470.0, 550.0]);
    robot.wait_for_idle();

    assert_eq!(robot.render_state(), RenderState::Collapsed);
    assert_every_frame_near(&robot, thumbnail(), "collapsing release");
}

#[test]
fn short_slow_drag_reverts() {
    let mut robot = robot();
    robot.drag_and_hold((250.0, 550.0), (250.0, 480.0));
    robot.wait_for_idle();

    assert_eq!(robot.render_state(), RenderState::Collapsed);
    assert_eq!(robot.surface().frame(), thumbnail());
    assert_eq!(robot.surface().blur(), 0.0);
}

#[test]
fn quick_flick_commits_despite_short_travel() {
    let mut robot = robot();
    // 60 points in 30ms: well under the distance threshold, well over the
    // velocity threshold.
    robot.drag_with_steps((250.0, 550.0), (250.0, 490.0), 3, 10);
    robot.wait_for_idle();

    assert_eq!(robot.render_state(), RenderState::Expanded);
}

#[test]
fn flick_away_from_target_stays_collapsed() {
    let mut robot = robot();
    robot.drag_with_steps((250.0, 450.0), (250.0, 590.0), 4, 10);
    robot.wait_for_idle();

    assert_eq!(robot.render_state(), RenderState::Collapsed);
    assert_eq!(robot.surface().frame(), thumbnail());
}

#[test]
fn distance_threshold_is_inclusive_when_collapsing() {
    let mut robot = expanded_robot();
    robot.drag_and_hold((200.0, 200.0), (200.0, 350.0));
    robot.wait_for_idle();
    assert_eq!(robot.render_state(), RenderState::Collapsed);

    let mut robot = expanded_robot();
    robot.drag_and_hold((200.0, 200.0), (200.0, 340.0));
    robot.wait_for_idle();
    assert_eq!(robot.render_state(), RenderState::Expanded);
    assert_eq!(robot.surface().frame(), full());
}

#[test]
fn scrubbing_tracks_the_pointer_in_both_directions() {
    let mut robot = robot();
    robot.pointer_down(250.0, 550.0);
    let mut widths = Vec::new();
    for step in 1..=6 {
        robot.pointer_move(250.0, 550.0 - step as f32 * 40.0, 16);
        widths.push(robot.surface().frame().width);
    }
    assert_monotonic(&widths, true, "dragging up grows the frame");

    let mut blurs = Vec::new();
    for step in 1..=4 {
        robot.pointer_move(250.0, 310.0 + step as f32 * 40.0, 16);
        blurs.push(robot.surface().blur());
    }
    assert_monotonic(&blurs, false, "dragging back down clears the blur");
    assert!(robot.lightbox().controller().transition().unwrap().is_interactive());
}

#[test]
fn halfway_scrub_presents_halfway_keyframe() {
    let mut robot = robot();
    robot.pointer_down(250.0, 550.0);
    robot.pointer_move(250.0, 500.0, 16);
    robot.pointer_move(250.0, 400.0, 16);

    // 150 up from a 300 center.
    let expected = Keyframe::new(
        Rect::new(50.0, 215.625, 350.0, 384.375),
        0.5,
    );
    let history = robot.surface().history();
    assert_keyframe_approx_eq(history[history.len() - 1], expected, 1e-3, "halfway");
}

#[test]
fn tap_toggles_both_ways() {
    let mut robot = robot();
    robot.tap();
    let frames = robot.wait_for_idle();
    assert!((55..=62).contains(&frames), "took {frames} frames");
    assert_eq!(robot.render_state(), RenderState::Expanded);
    assert_blur_in_range(robot.surface().history(), "tap expand");

    robot.tap();
    robot.wait_for_idle();
    assert_eq!(robot.render_state(), RenderState::Collapsed);
    assert_eq!(robot.surface().frame(), thumbnail());
}

#[test]
fn tap_during_animation_is_ignored() {
    let mut robot = robot();
    robot.tap();
    robot.advance_frame();
    robot.advance_frame();
    robot.tap();
    robot.wait_for_idle();

    assert_eq!(robot.render_state(), RenderState::Expanded);
}

#[test]
fn drag_during_completion_is_ignored() {
    let mut robot = robot();
    robot.drag((250.0, 550.0), (250.0, 250.0));
    robot.advance_frame();
    assert!(!robot.lightbox().controller().accepts_gestures());

    robot.drag((200.0, 100.0), (200.0, 500.0));
    robot.wait_for_idle();

    assert_eq!(robot.render_state(), RenderState::Expanded);
    assert!(robot.lightbox().controller().accepts_gestures());
}

#[test]
fn cancelled_pointer_reverts() {
    let mut robot = robot();
    robot.pointer_down(250.0, 550.0);
    robot.pointer_move(250.0, 200.0, 16);
    robot.pointer_cancel(250.0, 200.0);
    robot.wait_for_idle();

    assert_eq!(robot.render_state(), RenderState::Collapsed);
    assert_eq!(robot.surface().frame(), thumbnail());
}

#[test]
fn release_is_faster_than_tap() {
    let mut tapped = robot();
    tapped.tap();
    let tap_frames = tapped.wait_for_idle();

    let mut dragged = robot();
    dragged.drag_and_hold((250.0, 550.0), (250.0, 350.0));
    let drag_frames = dragged.wait_for_idle();

    assert_eq!(dragged.render_state(), RenderState::Expanded);
    assert!(drag_frames < tap_frames, "{drag_frames} vs {tap_frames}");
}

#[test]
fn custom_config_changes_thumbnail_and_threshold() {
    init_logging();
    let config = TransitionConfig::default()
        .with_thumbnail(200.0, 0.5)
        .with_distance_threshold_divisor(10.0);
    let mut robot = LightboxRobot::with_config(full(), config).unwrap();
    assert_rect_approx_eq(
        robot.surface().frame(),
        Rect::new(200.0, 500.0, 200.0, 100.0),
        0.0,
        "thumbnail",
    );

    // 70 points clears a 60 point threshold.
    robot.drag_and_hold((300.0, 550.0), (300.0, 480.0));
    robot.wait_for_idle();
    assert_eq!(robot.render_state(), RenderState::Expanded);
}
