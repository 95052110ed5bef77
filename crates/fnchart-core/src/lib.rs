// File: crates/fnchart-core/src/lib.rs
// Summary: Core library entry point; exports the function chart adapter, configuration and surfaces.

pub mod adapter;
pub mod axis;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod numeric;
pub mod plugin;
pub mod scale;
pub mod skia_surface;
pub mod surface;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use adapter::ChartAdapter;
pub use axis::ScaleOptions;
pub use chart::{Chart, Layout};
pub use config::{ChartOptions, InteractionMode, RenderOptions};
pub use dataset::{ChartData, Dataset, FUNCTION, X_AXIS, Y_AXIS};
pub use error::{ChartError, ChartResult};
pub use numeric::round2;
pub use plugin::{ChartAreaBackground, DrawContext, Plugin};
pub use skia_surface::SkiaSurface;
pub use surface::{CompositeOp, DrawCommand, RecordingSurface, Surface};
pub use theme::Theme;
pub use tooltip::{TooltipContent, TooltipItem, TooltipOptions, TooltipPosition};
pub use types::{Insets, Point};
