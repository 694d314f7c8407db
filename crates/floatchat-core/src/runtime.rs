use crate::frame_clock::FrameClock;
use crate::platform::RuntimeScheduler;
use crate::timer::Timers;
use crate::{FrameCallbackId, TimerId};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::sync::Arc;

pub(crate) struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

pub(crate) struct TimerEntry {
    id: TimerId,
    deadline_millis: u64,
    callback: Option<Box<dyn FnOnce() + 'static>>,
}

struct RuntimeInner {
    scheduler: Arc<dyn RuntimeScheduler>,
    needs_frame: Cell<bool>,
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_frame_callback_id: Cell<u64>,
    // Sorted by (deadline, id) so equal deadlines fire in posting order.
    timers: RefCell<Vec<TimerEntry>>,
    next_timer_id: Cell<u64>,
    now_millis: Cell<u64>,
}

impl RuntimeInner {
    fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            scheduler,
            needs_frame: Cell::new(false),
            frame_callbacks: RefCell::new(VecDeque::new()),
            next_frame_callback_id: Cell::new(1),
            timers: RefCell::new(Vec::new()),
            next_timer_id: Cell::new(1),
            now_millis: Cell::new(0),
        }
    }

    fn schedule(&self) {
        self.needs_frame.set(true);
        self.scheduler.schedule_frame();
    }

    fn has_frame_callbacks(&self) -> bool {
        !self.frame_callbacks.borrow().is_empty()
    }

    fn register_frame_callback(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
        self.schedule();
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
        if callbacks.is_empty() {
            self.needs_frame.set(false);
        }
    }

    fn is_frame_callback_pending(&self, id: FrameCallbackId) -> bool {
        self.frame_callbacks
            .borrow()
            .iter()
            .any(|entry| entry.id == id)
    }

    fn take_frame_callback(&self, id: FrameCallbackId) -> Option<Box<dyn FnOnce(u64) + 'static>> {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        let index = callbacks.iter().position(|entry| entry.id == id)?;
        callbacks
            .remove(index)
            .and_then(|entry| entry.callback)
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        // Only callbacks pending at entry run this frame. Each one is taken out
        // of the queue right before it runs, so a cancellation issued by an
        // earlier callback in the same frame is still honored.
        let due: SmallVec<[FrameCallbackId; 8]> = self
            .frame_callbacks
            .borrow()
            .iter()
            .map(|entry| entry.id)
            .collect();
        if !due.is_empty() {
            log::trace!("frame at {frame_time_nanos}ns runs {} callbacks", due.len());
        }
        for id in due {
            if let Some(callback) = self.take_frame_callback(id) {
                callback(frame_time_nanos);
            }
        }
        if !self.has_frame_callbacks() {
            self.needs_frame.set(false);
        }
    }

    fn post_delayed(&self, delay_millis: u64, callback: Box<dyn FnOnce() + 'static>) -> TimerId {
        let id = self.next_timer_id.get();
        self.next_timer_id.set(id + 1);
        let deadline_millis = self.now_millis.get().saturating_add(delay_millis);
        let mut timers = self.timers.borrow_mut();
        let index = timers.partition_point(|entry| {
            (entry.deadline_millis, entry.id) <= (deadline_millis, id)
        });
        timers.insert(
            index,
            TimerEntry {
                id,
                deadline_millis,
                callback: Some(callback),
            },
        );
        id
    }

    fn cancel_timer(&self, id: TimerId) {
        let mut timers = self.timers.borrow_mut();
        if let Some(index) = timers.iter().position(|entry| entry.id == id) {
            timers.remove(index);
        }
    }

    fn is_timer_pending(&self, id: TimerId) -> bool {
        self.timers.borrow().iter().any(|entry| entry.id == id)
    }

    fn next_timer_deadline(&self) -> Option<u64> {
        self.timers.borrow().first().map(|entry| entry.deadline_millis)
    }

    fn take_due_timer(&self, now_millis: u64) -> Option<Box<dyn FnOnce() + 'static>> {
        let mut timers = self.timers.borrow_mut();
        let due = timers
            .first()
            .is_some_and(|entry| entry.deadline_millis <= now_millis);
        if !due {
            return None;
        }
        timers.remove(0).callback
    }

    fn advance_time(&self, now_millis: u64) {
        let now = self.now_millis.get().max(now_millis);
        self.now_millis.set(now);
        while let Some(callback) = self.take_due_timer(now) {
            callback();
        }
    }
}

/// Owner of the frame-callback queue and the delayed timers.
///
/// The runtime is single-threaded: callbacks may capture `Rc`/`RefCell`
/// state because they never leave the thread that created the runtime.
#[derive(Clone)]
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(scheduler)),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.handle())
    }

    pub fn timers(&self) -> Timers {
        Timers::new(self.handle())
    }

    pub fn needs_frame(&self) -> bool {
        self.inner.needs_frame.get()
    }

    pub fn now_millis(&self) -> u64 {
        self.inner.now_millis.get()
    }

    /// Runs the callbacks pending at call time with the given frame timestamp.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.inner.drain_frame_callbacks(frame_time_nanos);
    }

    /// Moves the runtime clock forward and fires every timer that is due.
    ///
    /// The clock never moves backward; an older `now_millis` only fires
    /// timers that were already due.
    pub fn advance_time(&self, now_millis: u64) {
        self.inner.advance_time(now_millis);
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner.has_frame_callbacks()
    }

    pub fn next_timer_deadline(&self) -> Option<u64> {
        self.inner.next_timer_deadline()
    }
}

/// Weak handle to a [`Runtime`]. Every operation is a no-op once the
/// runtime has been dropped.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    pub fn is_frame_callback_pending(&self, id: FrameCallbackId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.is_frame_callback_pending(id))
            .unwrap_or(false)
    }

    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain_frame_callbacks(frame_time_nanos);
        }
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_frame_callbacks())
            .unwrap_or(false)
    }

    pub fn post_delayed(
        &self,
        delay_millis: u64,
        callback: impl FnOnce() + 'static,
    ) -> Option<TimerId> {
        self.inner
            .upgrade()
            .map(|inner| inner.post_delayed(delay_millis, Box::new(callback)))
    }

    pub fn cancel_timer(&self, id: TimerId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_timer(id);
        }
    }

    pub fn is_timer_pending(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.is_timer_pending(id))
            .unwrap_or(false)
    }

    pub fn advance_time(&self, now_millis: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.advance_time(now_millis);
        }
    }

    pub fn now_millis(&self) -> u64 {
        self.inner
            .upgrade()
            .map(|inner| inner.now_millis.get())
            .unwrap_or(0)
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }

    pub fn timers(&self) -> Timers {
        Timers::new(self.clone())
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
