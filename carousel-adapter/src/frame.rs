use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::Controller;

/// Revokes a [`FrameTask`] when the owning widget is torn down.
///
/// The handle is the teardown side of the loop contract: once cancelled, the
/// task refuses to run and the host stops re-scheduling it, so no callback
/// ever writes into a stale carousel.
#[derive(Clone, Debug)]
pub struct FrameHandle {
    cancelled: Arc<AtomicBool>,
}

impl FrameHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// The carousel's animation loop as an explicit repeating task.
///
/// Instead of a literal self-rescheduling callback, the host owns a
/// `FrameTask` and calls [`FrameTask::step`] once per display refresh,
/// re-scheduling only while `step` keeps returning `Some`. Ticks are strictly
/// sequential; the host scheduler must not overlap invocations. Skipped
/// frames (backgrounded hosts) simply pause the loop, which is the intended
/// resource-saving behavior.
#[derive(Debug)]
pub struct FrameTask {
    cancelled: Arc<AtomicBool>,
}

impl FrameTask {
    /// Creates a task and the handle that revokes it.
    pub fn new() -> (Self, FrameHandle) {
        let cancelled = Arc::new(AtomicBool::new(false));
        let handle = FrameHandle {
            cancelled: Arc::clone(&cancelled),
        };
        (Self { cancelled }, handle)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Runs one frame of the widget. Returns the offset to apply, or `None`
    /// once the handle has been cancelled (the host must then stop
    /// re-scheduling).
    pub fn step(&self, controller: &mut Controller, now_ms: u64) -> Option<u64> {
        if self.is_cancelled() {
            return None;
        }
        Some(controller.tick(now_ms))
    }
}
