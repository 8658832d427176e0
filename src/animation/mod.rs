//! Eased, frame-driven transitions between chart geometries.
//!
//! Everything here is single-threaded and cooperative: the host calls back
//! once per frame and the animator decides whether another frame is needed.

mod animator;
mod easing;
mod interpolate;
mod scheduler;

pub use animator::{AnimationPhase, Animator};
pub use easing::{AnimationTiming, Easing};
pub use interpolate::{Interpolate, interpolate};
pub use scheduler::{FrameHandle, FrameScheduler, ManualFrameScheduler};
