use serde::{Deserialize, Serialize};

use crate::animation::{AnimationTiming, Easing};
use crate::core::{BarLayoutOptions, CurveMode, PieOptions, StackingMode, Viewport};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Area,
    Pie,
}

/// Entry/update transition settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_animation_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub timing: AnimationTiming,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_animation_enabled(),
            easing: Easing::default(),
            timing: AnimationTiming::default(),
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Public chart configuration.
///
/// Serializable so hosts can persist chart setup alongside their data
/// without inventing an ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub kind: ChartKind,
    #[serde(default)]
    pub bar: BarLayoutOptions,
    #[serde(default)]
    pub curve: CurveMode,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    /// Alpha applied to series colors when filling areas.
    #[serde(default = "default_area_fill_alpha")]
    pub area_fill_alpha: f64,
    #[serde(default)]
    pub pie: PieOptions,
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl ChartConfig {
    /// Creates a config with defaults for everything but size and kind.
    #[must_use]
    pub fn new(viewport: Viewport, kind: ChartKind) -> Self {
        Self {
            viewport,
            kind,
            bar: BarLayoutOptions::default(),
            curve: CurveMode::default(),
            line_width: default_line_width(),
            area_fill_alpha: default_area_fill_alpha(),
            pie: PieOptions::default(),
            animation: AnimationConfig::default(),
        }
    }

    #[must_use]
    pub fn with_bar_options(mut self, bar: BarLayoutOptions) -> Self {
        self.bar = bar;
        self
    }

    #[must_use]
    pub fn with_curve(mut self, curve: CurveMode) -> Self {
        self.curve = curve;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_pie_options(mut self, pie: PieOptions) -> Self {
        self.pie = pie;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn without_animation(mut self) -> Self {
        self.animation = AnimationConfig::disabled();
        self
    }

    /// Stacking used when computing the shared scale maximum.
    #[must_use]
    pub fn stacking(self) -> StackingMode {
        match self.kind {
            ChartKind::Bar => self.bar.mode.into(),
            ChartKind::Line | ChartKind::Area | ChartKind::Pie => StackingMode::None,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.area_fill_alpha.is_finite() || !(0.0..=1.0).contains(&self.area_fill_alpha) {
            return Err(ChartError::InvalidData(
                "area fill alpha must be in [0, 1]".to_owned(),
            ));
        }
        if !self.bar.corner_radius.is_finite() || self.bar.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "bar corner radius must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(max) = self.bar.max_bar_width {
            if !max.is_finite() || max <= 0.0 {
                return Err(ChartError::InvalidData(
                    "max bar width must be finite and > 0".to_owned(),
                ));
            }
        }
        self.pie.validate()?;
        self.animation.timing.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_animation_enabled() -> bool {
    true
}

fn default_line_width() -> f64 {
    2.0
}

fn default_area_fill_alpha() -> f64 {
    0.3
}
