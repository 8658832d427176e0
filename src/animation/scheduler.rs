use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Opaque ticket for one requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameHandle(u64);

impl FrameHandle {
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Host hook for cooperative, per-frame callbacks.
///
/// Implementations wrap whatever the host uses to get called back before
/// the next paint (a browser `requestAnimationFrame`, a GTK tick callback,
/// a test harness). Geometry code never blocks or spawns threads.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler driven explicitly by the host, used by tests and headless hosts.
///
/// Requested frames queue up until [`ManualFrameScheduler::fire_next`] pops them.
#[derive(Debug, Default)]
pub struct ManualFrameScheduler {
    next_raw: u64,
    pending: SmallVec<[FrameHandle; 2]>,
    requested_count: usize,
    cancelled_count: usize,
}

impl ManualFrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pops the oldest pending frame, as if the host's frame callback fired.
    pub fn fire_next(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    #[must_use]
    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    #[must_use]
    pub fn cancelled_count(&self) -> usize {
        self.cancelled_count
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_raw += 1;
        let handle = FrameHandle(self.next_raw);
        self.pending.push(handle);
        self.requested_count += 1;
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != handle);
        if self.pending.len() < before {
            self.cancelled_count += 1;
        }
    }
}
