use super::*;

use std::cell::RefCell;
use std::rc::Rc;

const FRAME_NANOS: u64 = 16_666_667;

/// Pumps frames until the clock goes idle; returns the number of frames.
fn pump(clock: &FrameClock, start_nanos: u64, max_frames: usize) -> (usize, u64) {
    let mut time = start_nanos;
    let mut frames = 0;
    while clock.has_frame_callbacks() && frames < max_frames {
        time += FRAME_NANOS;
        clock.drain_frame_callbacks(time);
        frames += 1;
    }
    (frames, time)
}

fn recorder(animator: &PropertyAnimator) -> Rc<RefCell<Vec<AnimatingPosition>>> {
    let positions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&positions);
    animator.add_completion(move |position| sink.borrow_mut().push(position));
    positions
}

#[test]
fn new_animator_is_inactive_at_zero() {
    let animator = PropertyAnimator::new(FrameClock::new(), 1.0, 0.8);
    assert_eq!(animator.state(), AnimatorState::Inactive);
    assert_eq!(animator.fraction_complete(), 0.0);
    assert!(!animator.is_reversed());
    assert_eq!(animator.duration_secs(), 1.0);
}

#[test]
fn scrubbing_pauses_and_clamps() {
    let animator = PropertyAnimator::new(FrameClock::new(), 1.0, 0.8);

    animator.set_fraction_complete(0.4);
    assert_eq!(animator.state(), AnimatorState::Active);
    assert_eq!(animator.fraction_complete(), 0.4);

    animator.set_fraction_complete(3.0);
    assert_eq!(animator.fraction_complete(), 1.0);

    animator.set_fraction_complete(-1.0);
    assert_eq!(animator.fraction_complete(), 0.0);

    animator.set_fraction_complete(f32::NAN);
    assert_eq!(animator.fraction_complete(), 0.0);
}

#[test]
fn continue_runs_forward_to_end() {
    let clock = FrameClock::new();
    let animator = PropertyAnimator::new(clock.clone(), 1.0, 0.8);
    let positions = recorder(&animator);

    animator.set_fraction_complete(0.5);
    animator.continue_animation(None, 0.5);
    assert!(animator.is_running());

    let (frames, _) = pump(&clock, 0, 240);

    assert!(frames <= 40, "took {frames} frames");
    assert_eq!(positions.borrow().as_slice(), &[AnimatingPosition::End]);
    assert_eq!(animator.fraction_complete(), 1.0);
    assert_eq!(animator.state(), AnimatorState::Inactive);
}

#[test]
fn reversed_continue_returns_to_start() {
    let clock = FrameClock::new();
    let animator = PropertyAnimator::new(clock.clone(), 1.0, 0.8);
    let positions = recorder(&animator);

    animator.set_fraction_complete(0.3);
    animator.set_reversed(true);
    animator.continue_animation(Some(SpringTimingParameters::at_rest(0.8)), 0.5);
    pump(&clock, 0, 240);

    assert_eq!(positions.borrow().as_slice(), &[AnimatingPosition::Start]);
    assert_eq!(animator.fraction_complete(), 0.0);
}

#[test]
fn start_animation_runs_full_duration_from_zero() {
    let clock = FrameClock::new();
    let animator = PropertyAnimator::new(clock.clone(), 1.0, 0.8);
    let positions = recorder(&animator);

    animator.start_animation();
    let mut saw_midpoint = false;
    let mut time = 0;
    for _ in 0..240 {
        if !clock.has_frame_callbacks() {
            break;
        }
        time += FRAME_NANOS;
        clock.drain_frame_callbacks(time);
        let fraction = animator.fraction_complete();
        if fraction > 0.1 && fraction < 0.9 {
            saw_midpoint = true;
        }
    }

    assert!(saw_midpoint, "animation should report intermediate values");
    assert_eq!(positions.borrow().as_slice(), &[AnimatingPosition::End]);
}

#[test]
fn completions_run_once_in_registration_order() {
    let clock = FrameClock::new();
    let animator = PropertyAnimator::new(clock.clone(), 0.2, 1.0);
    let order = Rc::new(RefCell::new(Vec::new()));
    for label in ["first", "second"] {
        let sink = Rc::clone(&order);
        animator.add_completion(move |_| sink.borrow_mut().push(label));
    }

    animator.start_animation();
    pump(&clock, 0, 120);
    clock.drain_frame_callbacks(u64::MAX / 2);

    assert_eq!(order.borrow().as_slice(), &["first", "second"]);
}

#[test]
fn scrub_is_ignored_while_running() {
    let clock = FrameClock::new();
    let animator = PropertyAnimator::new(clock.clone(), 1.0, 0.8);
    animator.set_fraction_complete(0.5);
    animator.continue_animation(None, 1.0);

    animator.set_fraction_complete(0.1);
    assert_eq!(animator.fraction_complete(), 0.5);
    assert!(animator.is_running());
}

#[test]
fn second_continue_while_running_is_ignored() {
    let clock = FrameClock::new();
    let animator = PropertyAnimator::new(clock.clone(), 1.0, 0.8);
    let positions = recorder(&animator);
    animator.set_fraction_complete(0.5);
    animator.continue_animation(None, 0.5);
    animator.continue_animation(None, 0.5);

    pump(&clock, 0, 240);
    assert_eq!(positions.borrow().len(), 1);
}

#[test]
fn release_velocity_is_projected_on_axis() {
    let clock = FrameClock::new();
    let fast = PropertyAnimator::new(clock.clone(), 1.0, 0.8).with_velocity_axis(Vector::new(0.0, -1.0));
    let slow = PropertyAnimator::new(clock.clone(), 1.0, 0.8).with_velocity_axis(Vector::new(0.0, -1.0));
    fast.set_fraction_complete(0.2);
    slow.set_fraction_complete(0.2);

    // Upward flick: negative y velocity pushes progress forward.
    fast.continue_animation(Some(SpringTimingParameters::new(0.8, Vector::new(0.0, -8.0))), 0.5);
    slow.continue_animation(Some(SpringTimingParameters::new(0.8, Vector::new(0.0, 0.0))), 0.5);

    clock.drain_frame_callbacks(0);
    clock.drain_frame_callbacks(FRAME_NANOS * 2);

    assert!(fast.fraction_complete() > slow.fraction_complete());
}

/// Fraction one frame into a release from `from` with an upward velocity.
fn fraction_after_first_frame(from: f32, velocity: f32) -> f32 {
    let clock = FrameClock::new();
    let animator = PropertyAnimator::new(clock.clone(), 1.0, 0.8).with_velocity_axis(Vector::new(0.0, -1.0));
    animator.set_fraction_complete(from);
    animator.continue_animation(Some(SpringTimingParameters::new(0.8, Vector::new(0.0, -velocity))), 1.0);
    clock.drain_frame_callbacks(FRAME_NANOS);
    clock.drain_frame_callbacks(FRAME_NANOS * 2);
    animator.fraction_complete()
}

#[test]
fn release_velocity_is_relative_to_remaining_distance() {
    let push = |from: f32, velocity: f32| {
        fraction_after_first_frame(from, velocity) - fraction_after_first_frame(from, 0.0)
    };

    let half = push(0.5, 2.0);
    assert!(half > 0.0, "upward release should push forward, got {half}");
    assert!((push(0.5, 4.0) - 2.0 * half).abs() < 1e-4);
    // Half the distance left, half the displacement for the same velocity.
    assert!((2.0 * push(0.75, 2.0) - half).abs() < 1e-4);
}

#[test]
fn fast_release_near_the_end_stays_near_the_end() {
    // Forward and backward flicks at 3000 pt/s, scaled by 1/100.
    for velocity in [Vector::new(0.0, -30.0), Vector::new(0.0, 30.0)] {
        let clock = FrameClock::new();
        let animator = PropertyAnimator::new(clock.clone(), 1.0, 0.8).with_velocity_axis(Vector::new(0.0, -1.0));
        let positions = recorder(&animator);
        animator.set_fraction_complete(0.9999);
        animator.continue_animation(Some(SpringTimingParameters::new(0.8, velocity)), 0.5);

        let mut time = 0;
        let mut low = animator.fraction_complete();
        let mut high = low;
        for _ in 0..120 {
            if !clock.has_frame_callbacks() {
                break;
            }
            time += FRAME_NANOS;
            clock.drain_frame_callbacks(time);
            low = low.min(animator.fraction_complete());
            high = high.max(animator.fraction_complete());
        }

        assert!(high <= 1.001, "{velocity:?} overshot to {high}");
        assert!(low >= 0.998, "{velocity:?} dipped to {low}");
        assert_eq!(positions.borrow().as_slice(), &[AnimatingPosition::End]);
    }
}

#[test]
fn stop_animation_drops_completions() {
    let clock = FrameClock::new();
    let animator = PropertyAnimator::new(clock.clone(), 1.0, 0.8);
    let positions = recorder(&animator);

    animator.start_animation();
    clock.drain_frame_callbacks(0);
    animator.stop_animation();

    assert!(!clock.has_frame_callbacks());
    assert_eq!(animator.state(), AnimatorState::Inactive);
    assert!(positions.borrow().is_empty());
}

#[test]
fn dropping_last_handle_cancels_pending_frame() {
    let clock = FrameClock::new();
    let animator = PropertyAnimator::new(clock.clone(), 1.0, 0.8);
    animator.start_animation();
    assert!(clock.has_frame_callbacks());

    drop(animator);
    assert!(!clock.has_frame_callbacks());
}
