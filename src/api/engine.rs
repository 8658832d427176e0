use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::animation::{Animator, FrameHandle, FrameScheduler, ManualFrameScheduler};
use crate::core::normalize::DEFAULT_SERIES_ID;
use crate::core::{ChartGeometry, ChartInput, NormalizedChartData, Viewport, normalize};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HoverState;
use crate::render::{RenderFrame, Renderer, resolve_color};

use super::geometry_builder::{SeriesPalette, build_frame, compute_geometry};
use super::snapshot::EngineSnapshot;
use super::ChartConfig;

/// Main facade consumed by host applications.
///
/// `ChartEngine` owns the current input, derives normalized data and target
/// geometry from it, drives transitions through the host's
/// [`FrameScheduler`] and hands finished frames to the renderer.
///
/// Any change of input, visibility or config cancels the in-flight frame
/// before the next transition starts. Dropping the engine releases its
/// pending frame as well.
pub struct ChartEngine<R: Renderer, S: FrameScheduler = ManualFrameScheduler> {
    renderer: R,
    scheduler: S,
    config: ChartConfig,
    input: ChartInput,
    series_visibility: IndexMap<String, bool>,
    data: NormalizedChartData,
    palette: SeriesPalette,
    target: ChartGeometry,
    animator: Animator<ChartGeometry>,
    hover: HoverState,
}

impl<R: Renderer, S: FrameScheduler> ChartEngine<R, S> {
    pub fn new(renderer: R, scheduler: S, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            scheduler,
            config,
            input: ChartInput::Points(Vec::new()),
            series_visibility: IndexMap::new(),
            data: NormalizedChartData::empty(),
            palette: SeriesPalette::default(),
            target: ChartGeometry::Empty,
            animator: Animator::new(config.animation.easing, config.animation.timing),
            hover: HoverState::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> ChartConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn input(&self) -> &ChartInput {
        &self.input
    }

    /// Normalized data restricted to visible series.
    #[must_use]
    pub fn normalized_data(&self) -> &NormalizedChartData {
        &self.data
    }

    /// Series ids in input order with their visibility.
    #[must_use]
    pub fn series_visibility(&self) -> &IndexMap<String, bool> {
        &self.series_visibility
    }

    /// Geometry the chart settles on once the current transition ends.
    #[must_use]
    pub fn geometry(&self) -> &ChartGeometry {
        &self.target
    }

    /// Geometry to draw at `now_ms`.
    #[must_use]
    pub fn geometry_at(&self, now_ms: f64) -> ChartGeometry {
        self.animator.sample(now_ms).unwrap_or(ChartGeometry::Empty)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.animator.pending_frame()
    }

    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Replaces chart data and starts a transition towards the new geometry.
    pub fn set_input(&mut self, input: impl Into<ChartInput>, now_ms: f64) {
        let input = input.into();
        let shape = match &input {
            ChartInput::Points(_) => "points",
            ChartInput::Series(_) => "series",
        };
        debug!(shape, empty = input.is_empty(), "set chart input");
        self.input = input;
        self.sync_series_visibility();
        self.refresh(now_ms);
    }

    /// Replaces chart data from untyped JSON.
    ///
    /// Unrecognized shapes clear the chart and return
    /// [`ChartError::DataFormat`] so hosts can show their placeholder.
    pub fn set_input_json(&mut self, value: &Value, now_ms: f64) -> ChartResult<()> {
        match ChartInput::detect(value) {
            Ok(input) => {
                self.set_input(input, now_ms);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "clearing chart after unrecognized input");
                self.set_input(ChartInput::Points(Vec::new()), now_ms);
                Err(err)
            }
        }
    }

    pub fn set_series_visible(
        &mut self,
        series_id: &str,
        visible: bool,
        now_ms: f64,
    ) -> ChartResult<()> {
        let Some(entry) = self.series_visibility.get_mut(series_id) else {
            return Err(ChartError::InvalidData(format!(
                "unknown series id `{series_id}`"
            )));
        };
        if *entry == visible {
            return Ok(());
        }
        *entry = visible;
        debug!(series_id, visible, "series visibility changed");
        self.refresh(now_ms);
        Ok(())
    }

    pub fn set_config(&mut self, config: ChartConfig, now_ms: f64) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        self.animator.set_easing(config.animation.easing);
        self.animator.set_timing(config.animation.timing);
        self.refresh(now_ms);
        Ok(())
    }

    pub fn resize(&mut self, viewport: Viewport, now_ms: f64) -> ChartResult<()> {
        let config = ChartConfig {
            viewport,
            ..self.config
        };
        self.set_config(config, now_ms)
    }

    /// Handles a fired frame callback; renders and returns `true` when the
    /// frame belonged to the running transition.
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: f64) -> ChartResult<bool> {
        let Some(geometry) = self.animator.on_frame(&mut self.scheduler, handle, now_ms) else {
            return Ok(false);
        };
        let frame = build_frame(&geometry, &self.data, &self.palette, self.config);
        self.renderer.render(&frame)?;
        trace!(
            frame = handle.raw(),
            animating = self.animator.is_running(),
            "rendered animation frame"
        );
        Ok(true)
    }

    /// Advances a running transition from the host's own clock instead of a
    /// scheduler callback. Returns `false` when nothing was pending.
    pub fn tick(&mut self, now_ms: f64) -> ChartResult<bool> {
        let Some(handle) = self.animator.pending_frame() else {
            return Ok(false);
        };
        self.scheduler.cancel_frame(handle);
        self.on_frame(handle, now_ms)
    }

    pub fn build_render_frame(&self, now_ms: f64) -> RenderFrame {
        build_frame(
            &self.geometry_at(now_ms),
            &self.data,
            &self.palette,
            self.config,
        )
    }

    pub fn render(&mut self, now_ms: f64) -> ChartResult<()> {
        let frame = self.build_render_frame(now_ms);
        self.renderer.render(&frame)
    }

    /// Updates hover against the target geometry; returns `true` on change.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.hover.on_pointer_move(&self.target, x, y)
    }

    pub fn pointer_leave(&mut self) {
        self.hover.on_pointer_leave();
    }

    /// Cancels any pending frame; the chart rests on its target geometry.
    pub fn dispose(&mut self) {
        self.animator.cancel(&mut self.scheduler);
    }

    pub fn snapshot(&self, now_ms: f64) -> EngineSnapshot {
        EngineSnapshot {
            config: self.config,
            series_visibility: self.series_visibility.clone(),
            max_value: self.data.max_value,
            animating: self.animator.is_running(),
            geometry: self.geometry_at(now_ms),
            hover: self.hover,
        }
    }

    pub fn snapshot_json_pretty(&self, now_ms: f64) -> ChartResult<String> {
        self.snapshot(now_ms).to_json_pretty()
    }

    fn sync_series_visibility(&mut self) {
        let previous = std::mem::take(&mut self.series_visibility);
        match &self.input {
            ChartInput::Points(_) => {
                let visible = previous.get(DEFAULT_SERIES_ID).copied().unwrap_or(true);
                self.series_visibility
                    .insert(DEFAULT_SERIES_ID.to_owned(), visible);
            }
            ChartInput::Series(series) => {
                for entry in series {
                    let visible = previous.get(&entry.id).copied().unwrap_or(entry.visible);
                    self.series_visibility.insert(entry.id.clone(), visible);
                }
            }
        }
    }

    fn refresh(&mut self, now_ms: f64) {
        let stacking = self.config.stacking();
        let mut full = normalize(&self.input, stacking);
        for series in &mut full.series {
            series.visible = self
                .series_visibility
                .get(&series.id)
                .copied()
                .unwrap_or(series.visible);
        }
        self.data = full.visible(stacking);
        self.palette = SeriesPalette {
            colors: self
                .data
                .series
                .iter()
                .map(|series| {
                    let index = self
                        .series_visibility
                        .get_index_of(&series.id)
                        .unwrap_or_default();
                    resolve_color(series.color.as_deref(), index)
                })
                .collect(),
        };

        let target = compute_geometry(&self.data, self.config);
        let displayed = self.animator.sample(now_ms);

        if !self.config.animation.enabled || target.is_empty() {
            self.animator.jump_to(&mut self.scheduler, target.clone());
        } else {
            let from = match displayed {
                Some(current) if current.same_kind(&target) && !current.is_empty() => current,
                _ => target.collapsed(self.config.viewport.height_px()),
            };
            self.animator
                .start(&mut self.scheduler, from, target.clone(), now_ms);
        }
        self.target = target;

        if let Some(pointer) = self.hover.pointer {
            self.hover.on_pointer_move(&self.target, pointer.x, pointer.y);
        }
    }
}

impl<R: Renderer, S: FrameScheduler> Drop for ChartEngine<R, S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<R: Renderer> ChartEngine<R, ManualFrameScheduler> {
    /// Engine driven by a [`ManualFrameScheduler`], for headless hosts.
    pub fn headless(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        Self::new(renderer, ManualFrameScheduler::new(), config)
    }

    /// Fires every pending frame at `now_ms` until none is left or the
    /// transition settles; returns how many frames were rendered.
    pub fn drain_frames(&mut self, now_ms: f64) -> ChartResult<usize> {
        let mut rendered = 0;
        while let Some(handle) = self.scheduler.fire_next() {
            if self.on_frame(handle, now_ms)? {
                rendered += 1;
            }
        }
        Ok(rendered)
    }
}
