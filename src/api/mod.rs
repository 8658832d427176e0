mod config;
mod engine;
mod geometry_builder;
mod snapshot;

pub use config::{AnimationConfig, ChartConfig, ChartKind};
pub use engine::ChartEngine;
pub use geometry_builder::{SeriesPalette, build_frame, compute_geometry};
pub use snapshot::EngineSnapshot;
