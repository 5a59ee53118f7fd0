use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

pub type FrameCallbackId = u64;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Box<dyn FnOnce(u64) + 'static>,
}

struct FrameClockInner {
    callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_callback_id: Cell<FrameCallbackId>,
}

impl FrameClockInner {
    fn register(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> FrameCallbackId {
        let id = self.next_callback_id.get();
        self.next_callback_id.set(id + 1);
        self.callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry { id, callback });
        id
    }

    fn cancel(&self, id: FrameCallbackId) {
        let mut callbacks = self.callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
    }

    fn drain(&self, frame_time_nanos: u64) {
        let pending = std::mem::take(&mut *self.callbacks.borrow_mut());
        // Callbacks registered from inside a callback land in the next frame.
        for entry in pending {
            (entry.callback)(frame_time_nanos);
        }
    }
}

/// Single-threaded registry of one-shot frame callbacks.
///
/// The host drives time by calling [`FrameClock::drain_frame_callbacks`] once
/// per display frame. Clones share the same registry.
#[derive(Clone)]
pub struct FrameClock {
    inner: Rc<FrameClockInner>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(FrameClockInner {
                callbacks: RefCell::new(VecDeque::new()),
                next_callback_id: Cell::new(1),
            }),
        }
    }

    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let id = self.inner.register(Box::new(callback));
        FrameCallbackRegistration {
            clock: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        self.with_frame_nanos(move |nanos| {
            let millis = nanos / 1_000_000;
            callback(millis);
        })
    }

    /// Runs every callback registered before this call with the given frame time.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.inner.drain(frame_time_nanos);
    }

    pub fn has_frame_callbacks(&self) -> bool {
        !self.inner.callbacks.borrow().is_empty()
    }
}

/// Handle to a pending frame callback. Dropping it cancels the callback.
pub struct FrameCallbackRegistration {
    clock: Weak<FrameClockInner>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn id(&self) -> Option<FrameCallbackId> {
        self.id
    }

    pub fn cancel(mut self) {
        self.cancel_pending();
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(clock) = self.clock.upgrade() {
                clock.cancel(id);
            }
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
