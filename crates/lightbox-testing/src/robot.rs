//! Robot testing harness for end-to-end transition tests
//!
//! Drives a [`Lightbox`] the way a user and a display would: pointer
//! streams with realistic timestamps, taps, and a frame clock ticking at
//! 60fps.
//!
//! # Example
//!
//! ```
//! use lightbox::RenderState;
//! use lightbox_testing::LightboxRobot;
//!
//! let mut robot = LightboxRobot::new(400.0, 800.0);
//! robot.drag((250.0, 700.0), (250.0, 300.0));
//! robot.wait_for_idle();
//! assert_eq!(robot.render_state(), RenderState::Expanded);
//! ```

use lightbox::{ConfigError, Lightbox, PointerEvent, RenderState, TransitionConfig};
use lightbox_foundation::PanGestureRecognizer;
use lightbox_geometry::{Point, Rect};

use crate::surface::RecordingSurface;

/// 60fps.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

/// Delay between pointer samples during a drag.
pub const DRAG_STEP_MS: i64 = 10;

/// Upper bound for [`LightboxRobot::wait_for_idle`]; ten seconds of frames.
pub const MAX_IDLE_FRAMES: usize = 600;

pub struct LightboxRobot {
    lightbox: Lightbox<RecordingSurface>,
    frame_time_nanos: u64,
    pointer_time_ms: i64,
}

impl LightboxRobot {
    /// A collapsed lightbox in a `width` x `height` container at the origin.
    ///
    /// # Panics
    ///
    /// If the container is empty.
    pub fn new(width: f32, height: f32) -> Self {
        match Self::with_config(Rect::new(0.0, 0.0, width, height), TransitionConfig::default()) {
            Ok(robot) => robot,
            Err(err) => panic!("invalid robot container: {err}"),
        }
    }

    pub fn with_config(container: Rect, config: TransitionConfig) -> Result<Self, ConfigError> {
        let lightbox = Lightbox::with_config(container, config, RecordingSurface::new())?;
        Ok(Self {
            lightbox,
            frame_time_nanos: 0,
            pointer_time_ms: 0,
        })
    }

    pub fn with_recognizer(mut self, recognizer: PanGestureRecognizer) -> Self {
        self.lightbox = self.lightbox.with_recognizer(recognizer);
        self
    }

    pub fn lightbox(&self) -> &Lightbox<RecordingSurface> {
        &self.lightbox
    }

    pub fn lightbox_mut(&mut self) -> &mut Lightbox<RecordingSurface> {
        &mut self.lightbox
    }

    pub fn surface(&self) -> &RecordingSurface {
        self.lightbox.surface()
    }

    pub fn surface_mut(&mut self) -> &mut RecordingSurface {
        self.lightbox.surface_mut()
    }

    pub fn render_state(&self) -> RenderState {
        self.lightbox.render_state()
    }

    pub fn is_idle(&self) -> bool {
        self.lightbox.is_idle()
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let event = PointerEvent::down(Point::new(x, y), self.pointer_time_ms);
        self.lightbox.handle_pointer(&event);
    }

    /// Moves the pointer after `elapsed_ms`.
    pub fn pointer_move(&mut self, x: f32, y: f32, elapsed_ms: i64) {
        self.pointer_time_ms += elapsed_ms;
        let event = PointerEvent::moved(Point::new(x, y), self.pointer_time_ms);
        self.lightbox.handle_pointer(&event);
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        let event = PointerEvent::up(Point::new(x, y), self.pointer_time_ms);
        self.lightbox.handle_pointer(&event);
    }

    pub fn pointer_cancel(&mut self, x: f32, y: f32) {
        let event = PointerEvent::cancel(Point::new(x, y), self.pointer_time_ms);
        self.lightbox.handle_pointer(&event);
    }

    /// Press, ten evenly spaced moves [`DRAG_STEP_MS`] apart, release.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.drag_with_steps(from, to, 10, DRAG_STEP_MS);
    }

    /// Like [`drag`](Self::drag) but holds still before lifting, so the
    /// release carries no velocity.
    pub fn drag_and_hold(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.drag_moves(from, to, 10, DRAG_STEP_MS);
        // Longer than the velocity tracker's horizon.
        self.pointer_move(to.0, to.1, 200);
        self.pointer_up(to.0, to.1);
    }

    pub fn drag_with_steps(&mut self, from: (f32, f32), to: (f32, f32), steps: u32, step_ms: i64) {
        self.drag_moves(from, to, steps, step_ms);
        self.pointer_up(to.0, to.1);
    }

    /// Taps the content: a tap toggles between the two states.
    pub fn tap(&mut self) {
        self.lightbox.toggle();
    }

    /// Advances the frame clock by one frame.
    pub fn advance_frame(&mut self) {
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
        self.lightbox.on_frame(self.frame_time_nanos);
    }

    /// Advances by whole frames covering at least `nanos`.
    pub fn advance_time(&mut self, nanos: u64) {
        let frames = nanos.div_ceil(FRAME_INTERVAL_NANOS);
        for _ in 0..frames {
            self.advance_frame();
        }
    }

    /// Pumps frames until nothing is in flight. Returns the frame count.
    ///
    /// # Panics
    ///
    /// If the lightbox is still busy after [`MAX_IDLE_FRAMES`].
    pub fn wait_for_idle(&mut self) -> usize {
        let mut frames = 0;
        while !self.lightbox.is_idle() {
            assert!(
                frames < MAX_IDLE_FRAMES,
                "lightbox still busy after {frames} frames"
            );
            self.advance_frame();
            frames += 1;
        }
        log::debug!("idle after {frames} frames in {:?}", self.render_state());
        frames
    }

    fn drag_moves(&mut self, from: (f32, f32), to: (f32, f32), steps: u32, step_ms: i64) {
        self.pointer_down(from.0, from.1);
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            self.pointer_move(x, y, step_ms);
        }
    }
}
