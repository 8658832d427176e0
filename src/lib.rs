//! chart-geometry: data normalization, layout and path geometry for
//! bar, line, area and pie charts.
//!
//! The crate turns loosely shaped chart data into deterministic draw
//! primitives and animates between successive geometries. Drawing itself
//! is left to a [`render::Renderer`] supplied by the host.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine, ChartKind};
pub use error::{ChartError, ChartResult};
