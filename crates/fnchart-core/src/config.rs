// File: crates/fnchart-core/src/config.rs
// Summary: Static chart policy (interaction, plugins, scales, sizing) and render options.

use serde::{Deserialize, Serialize};

use crate::axis::Scales;
use crate::error::{ChartError, ChartResult};
use crate::theme::Theme;
use crate::tooltip::TooltipOptions;
use crate::types::Insets;

/// How pointer positions select elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    /// Closest element(s) across all datasets.
    Nearest,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionOptions {
    pub mode: InteractionMode,
    /// Only elements under the pointer (within `hit_radius`) qualify.
    pub intersect: bool,
    pub hit_radius: f32,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self { mode: InteractionMode::Nearest, intersect: false, hit_radius: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendOptions {
    pub display: bool,
}

#[derive(Clone, Debug)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self { legend: LegendOptions { display: false }, tooltip: TooltipOptions::default() }
    }
}

#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub interaction: InteractionOptions,
    pub plugins: PluginOptions,
    pub scales: Scales,
    /// Connect across non-finite samples instead of breaking the line.
    pub span_gaps: bool,
    /// Follow the surface size on every draw.
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    /// width / height used when `maintain_aspect_ratio` is set.
    pub aspect_ratio: f32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            interaction: InteractionOptions::default(),
            plugins: PluginOptions::default(),
            scales: Scales::default(),
            span_gaps: false,
            responsive: true,
            maintain_aspect_ratio: true,
            aspect_ratio: 2.0,
        }
    }
}

impl ChartOptions {
    /// Drawing size for a surface of `surface` pixels.
    pub fn canvas_size(&self, surface: (i32, i32), fixed: (i32, i32)) -> (i32, i32) {
        let (w, h) = if self.responsive { surface } else { (fixed.0.min(surface.0), fixed.1.min(surface.1)) };
        if self.maintain_aspect_ratio && self.aspect_ratio > 0.0 {
            let by_ratio = (w as f32 / self.aspect_ratio).round() as i32;
            (w, h.min(by_ratio))
        } else {
            (w, h)
        }
    }
}

/// Pixel-level layout and styling knobs. Loadable from JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Size used when the chart is not responsive.
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub font_size: f32,
    pub max_ticks: usize,
    #[serde(skip)]
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: crate::types::WIDTH,
            height: crate::types::HEIGHT,
            insets: Insets::default(),
            font_size: 12.0,
            max_ticks: 11,
            theme: Theme::light(),
        }
    }
}

impl RenderOptions {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| ChartError::Config(format!("failed to parse render options: {e}")))
    }

    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> ChartResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_function_plot_policy() {
        let o = ChartOptions::default();
        assert_eq!(o.interaction.mode, InteractionMode::Nearest);
        assert!(!o.interaction.intersect);
        assert!(!o.plugins.legend.display);
        assert_eq!(o.scales.x.title.text, "x");
        assert_eq!(o.scales.y.title.text, "f(x)");
        assert!(!o.scales.x.grid.draw_border);
        assert!(!o.span_gaps);
        assert!(o.responsive && o.maintain_aspect_ratio);
    }

    #[test]
    fn aspect_ratio_caps_height() {
        let o = ChartOptions::default();
        assert_eq!(o.canvas_size((800, 600), (0, 0)), (800, 400));
        assert_eq!(o.canvas_size((800, 300), (0, 0)), (800, 300));
    }

    #[test]
    fn render_options_partial_json() {
        let r = RenderOptions::from_json_str(r#"{ "width": 640, "insets": { "left": 10, "right": 10, "top": 10, "bottom": 10 } }"#)
            .expect("valid json");
        assert_eq!(r.width, 640);
        assert_eq!(r.height, crate::types::HEIGHT);
        assert_eq!(r.insets.left, 10);
    }

    #[test]
    fn render_options_bad_json() {
        let err = RenderOptions::from_json_str("{ width: }").unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
    }
}
