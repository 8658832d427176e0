use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::animation::easing::{AnimationTiming, Easing};
use crate::animation::interpolate::{Interpolate, interpolate};
use crate::animation::scheduler::{FrameHandle, FrameScheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationPhase {
    /// No geometry has been set yet.
    Idle,
    Running,
    /// Resting on the target geometry.
    Settled,
}

/// Frame-driven transition between two geometries.
///
/// Holds at most one pending [`FrameHandle`]. Starting a new transition or
/// cancelling releases that handle first, and frames carrying any other
/// handle are ignored, so two interpolation loops never run at once.
#[derive(Debug, Clone)]
pub struct Animator<G> {
    easing: Easing,
    timing: AnimationTiming,
    phase: AnimationPhase,
    from: Option<G>,
    to: Option<G>,
    started_at_ms: f64,
    pending_frame: Option<FrameHandle>,
}

impl<G: Interpolate> Animator<G> {
    #[must_use]
    pub fn new(easing: Easing, timing: AnimationTiming) -> Self {
        Self {
            easing,
            timing,
            phase: AnimationPhase::Idle,
            from: None,
            to: None,
            started_at_ms: 0.0,
            pending_frame: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == AnimationPhase::Running
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    #[must_use]
    pub fn target(&self) -> Option<&G> {
        self.to.as_ref()
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    #[must_use]
    pub fn timing(&self) -> AnimationTiming {
        self.timing
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn set_timing(&mut self, timing: AnimationTiming) {
        self.timing = timing;
    }

    /// Starts a transition from `from` to `to` and requests the first frame.
    pub fn start<S: FrameScheduler>(&mut self, scheduler: &mut S, from: G, to: G, now_ms: f64) {
        self.cancel(scheduler);
        self.from = Some(from);
        self.to = Some(to);
        self.started_at_ms = now_ms;
        self.phase = AnimationPhase::Running;
        let handle = scheduler.request_frame();
        self.pending_frame = Some(handle);
        debug!(
            frame = handle.raw(),
            duration_ms = self.timing.duration_ms,
            delay_ms = self.timing.delay_ms,
            "animation started"
        );
    }

    /// Rests on `target` immediately without requesting frames.
    pub fn jump_to<S: FrameScheduler>(&mut self, scheduler: &mut S, target: G) {
        self.cancel(scheduler);
        self.from = None;
        self.to = Some(target);
        self.phase = AnimationPhase::Settled;
    }

    /// Handles a fired frame and returns the geometry to draw.
    ///
    /// Returns `None` when `handle` is not the pending frame (stale or
    /// cancelled). Requests the next frame until progress reaches 1.
    pub fn on_frame<S: FrameScheduler>(
        &mut self,
        scheduler: &mut S,
        handle: FrameHandle,
        now_ms: f64,
    ) -> Option<G> {
        if self.pending_frame != Some(handle) {
            trace!(frame = handle.raw(), "ignoring stale animation frame");
            return None;
        }
        self.pending_frame = None;

        let fraction = self.fraction_at(now_ms);
        let geometry = self.sample_fraction(fraction)?;
        if fraction >= 1.0 {
            self.settle();
        } else {
            let next = scheduler.request_frame();
            self.pending_frame = Some(next);
            trace!(frame = next.raw(), fraction, "animation frame requested");
        }
        Some(geometry)
    }

    /// Geometry at `now_ms` without touching the scheduler.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> Option<G> {
        match self.phase {
            AnimationPhase::Idle => None,
            AnimationPhase::Settled => self.to.clone(),
            AnimationPhase::Running => self.sample_fraction(self.fraction_at(now_ms)),
        }
    }

    /// Stops requesting frames and settles a running animation, so
    /// [`Animator::sample`] returns the target from then on. Callers that
    /// want to keep the displayed geometry sample it before cancelling.
    pub fn cancel<S: FrameScheduler>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending_frame.take() {
            scheduler.cancel_frame(handle);
            debug!(frame = handle.raw(), "animation frame cancelled");
        }
        if self.phase == AnimationPhase::Running {
            self.settle();
        }
    }

    fn fraction_at(&self, now_ms: f64) -> f64 {
        self.timing.progress(now_ms - self.started_at_ms)
    }

    fn sample_fraction(&self, fraction: f64) -> Option<G> {
        let to = self.to.as_ref()?;
        match self.from.as_ref() {
            Some(from) => Some(interpolate(from, to, fraction, self.easing)),
            None => Some(to.clone()),
        }
    }

    fn settle(&mut self) {
        self.from = None;
        self.phase = AnimationPhase::Settled;
    }
}
