use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Maps linear time progress onto perceptual progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Applies the curve to `t`, clamped to `[0, 1]`.
    ///
    /// Every curve maps `0` to exactly `0` and `1` to exactly `1`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = clamp_unit(t);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// Duration and start delay of one animation, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationTiming {
    pub duration_ms: f64,
    #[serde(default)]
    pub delay_ms: f64,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            duration_ms: 600.0,
            delay_ms: 0.0,
        }
    }
}

impl AnimationTiming {
    pub fn new(duration_ms: f64, delay_ms: f64) -> ChartResult<Self> {
        let timing = Self {
            duration_ms,
            delay_ms,
        };
        timing.validate()?;
        Ok(timing)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "animation duration must be finite and >= 0".to_owned(),
            ));
        }
        if !self.delay_ms.is_finite() || self.delay_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "animation delay must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// `(elapsed - delay) / duration`, clamped to `[0, 1]`.
    ///
    /// A zero duration completes as soon as the delay has passed.
    #[must_use]
    pub fn progress(self, elapsed_ms: f64) -> f64 {
        if elapsed_ms.is_nan() {
            return 0.0;
        }
        let active = elapsed_ms - self.delay_ms;
        if self.duration_ms <= 0.0 {
            return if active >= 0.0 { 1.0 } else { 0.0 };
        }
        clamp_unit(active / self.duration_ms)
    }

    /// Total time until the animation settles.
    #[must_use]
    pub fn total_ms(self) -> f64 {
        self.delay_ms + self.duration_ms
    }
}

fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}
