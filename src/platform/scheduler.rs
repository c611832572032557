//! Frame scheduling
//!
//! The loop asks for "the next frame" and gets back a handle. Whoever owns the
//! scheduler delivers that handle to `GameLoop::on_frame` when the frame comes
//! due. A cancelled handle is never delivered. A host that cannot schedule at
//! all returns `None` and the loop goes idle.

use std::collections::VecDeque;

/// Opaque id of a requested frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u32);

/// Source of display-refresh callbacks
pub trait Scheduler {
    /// Request one callback on the next frame (`None` if the host refused)
    fn request_frame(&mut self) -> Option<FrameHandle>;
    /// Cancel a pending request (no-op if it already fired or is unknown)
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler pumped by hand, for headless runs and tests
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u32,
    pending: VecDeque<FrameHandle>,
    /// Total `request_frame` calls
    pub requested: u32,
    /// Total `cancel_frame` calls that removed a pending handle
    pub cancelled: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles waiting to fire
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }

    /// Pop the oldest due frame
    pub fn pump(&mut self) -> Option<FrameHandle> {
        self.pending.pop_front()
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push_back(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|h| *h != handle);
        if self.pending.len() < before {
            self.cancelled += 1;
        }
    }
}
