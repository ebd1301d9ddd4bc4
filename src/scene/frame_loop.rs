//! A cancellable per-frame callback loop.
//!
//! The browser drives it through `requestAnimationFrame`; tests drive it by
//! hand through a [`FrameScheduler`] that just queues callbacks.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Source of "call me on the next frame" requests.
pub trait FrameScheduler: 'static {
    type Handle: 'static;

    /// Schedules `callback` with the frame timestamp in milliseconds.
    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

struct Inner<S: FrameScheduler> {
    scheduler: S,
    on_frame: RefCell<Box<dyn FnMut(f64)>>,
    pending: Cell<Option<S::Handle>>,
    running: Cell<bool>,
}

/// Calls `on_frame` once per frame while running. Stopping (or dropping the
/// loop) cancels the pending request, so no frame runs afterwards.
pub struct FrameLoop<S: FrameScheduler> {
    inner: Rc<Inner<S>>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S, on_frame: impl FnMut(f64) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                on_frame: RefCell::new(Box::new(on_frame)),
                pending: Cell::new(None),
                running: Cell::new(false),
            }),
        }
    }

    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        Self::schedule(&self.inner);
    }

    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(handle) = self.inner.pending.take() {
            self.inner.scheduler.cancel(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    fn schedule(inner: &Rc<Inner<S>>) {
        let weak: Weak<Inner<S>> = Rc::downgrade(inner);
        let handle = inner.scheduler.request(Box::new(move |timestamp| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.take();
            if !inner.running.get() {
                return;
            }
            (inner.on_frame.borrow_mut())(timestamp);
            if inner.running.get() {
                Self::schedule(&inner);
            }
        }));
        if handle.is_none() {
            tracing::warn!("frame request refused, animation stopped");
            inner.running.set(false);
        }
        inner.pending.set(handle);
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Queue = Rc<RefCell<Vec<(usize, Box<dyn FnOnce(f64)>)>>>;

    #[derive(Clone, Default)]
    struct ManualScheduler {
        queue: Queue,
        next: Rc<Cell<usize>>,
    }

    impl ManualScheduler {
        fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        fn fire(&self, timestamp: f64) {
            let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
            for (_, callback) in due {
                callback(timestamp);
            }
        }
    }

    impl FrameScheduler for ManualScheduler {
        type Handle = usize;

        fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Option<usize> {
            let id = self.next.get();
            self.next.set(id + 1);
            self.queue.borrow_mut().push((id, callback));
            Some(id)
        }

        fn cancel(&self, handle: usize) {
            self.queue.borrow_mut().retain(|(id, _)| *id != handle);
        }
    }

    fn counting_loop(scheduler: &ManualScheduler) -> (FrameLoop<ManualScheduler>, Rc<RefCell<Vec<f64>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let frames = FrameLoop::new(scheduler.clone(), move |t| sink.borrow_mut().push(t));
        (frames, seen)
    }

    #[test]
    fn runs_once_per_frame_while_started() {
        let scheduler = ManualScheduler::default();
        let (frames, seen) = counting_loop(&scheduler);
        assert_eq!(scheduler.pending(), 0);

        frames.start();
        frames.start();
        assert_eq!(scheduler.pending(), 1);

        scheduler.fire(16.0);
        scheduler.fire(32.0);
        assert_eq!(*seen.borrow(), [16.0, 32.0]);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn stop_cancels_the_pending_frame() {
        let scheduler = ManualScheduler::default();
        let (frames, seen) = counting_loop(&scheduler);
        frames.start();
        scheduler.fire(16.0);
        frames.stop();

        assert!(!frames.is_running());
        assert_eq!(scheduler.pending(), 0);
        scheduler.fire(32.0);
        assert_eq!(*seen.borrow(), [16.0]);
    }

    #[test]
    fn dropping_the_loop_stops_it() {
        let scheduler = ManualScheduler::default();
        let (frames, seen) = counting_loop(&scheduler);
        frames.start();
        drop(frames);

        assert_eq!(scheduler.pending(), 0);
        scheduler.fire(16.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn can_restart_after_stop() {
        let scheduler = ManualScheduler::default();
        let (frames, seen) = counting_loop(&scheduler);
        frames.start();
        frames.stop();
        frames.start();
        scheduler.fire(48.0);
        assert_eq!(*seen.borrow(), [48.0]);
    }
}
