// File: crates/fnchart-core/src/plugin.rs
// Summary: Draw-hook plugin trait and the chart-area background frame plugin.

use skia_safe as skia;

use crate::geometry::Rect;
use crate::surface::{CompositeOp, Surface};
use crate::theme::Theme;

/// What a hook gets to work with during one draw.
pub struct DrawContext<'a> {
    pub surface: &'a mut dyn Surface,
    /// Plot area inside the axes, in surface pixels.
    pub chart_area: Rect,
    pub theme: &'a Theme,
}

/// Callbacks run by the chart around each draw. Hooks must leave the
/// surface state as they found it.
pub trait Plugin {
    fn id(&self) -> &'static str;
    /// Runs after the surface is cleared, before grid, axes and datasets.
    fn before_draw(&self, _ctx: &mut DrawContext<'_>) {}
    /// Runs after everything else, including the tooltip.
    fn after_draw(&self, _ctx: &mut DrawContext<'_>) {}
}

/// Paints a bordered, filled rectangle behind the plot area.
///
/// Uses destination-over compositing so it lands underneath anything already
/// on the surface, and brackets its state changes in save/restore.
#[derive(Clone, Copy, Debug)]
pub struct ChartAreaBackground {
    pub border: skia::Color,
    pub fill: skia::Color,
    pub line_width: f32,
}

impl ChartAreaBackground {
    pub fn from_theme(theme: &Theme) -> Self {
        Self { border: theme.chart_area_border, fill: theme.chart_area_fill, line_width: 1.0 }
    }
}

impl Plugin for ChartAreaBackground {
    fn id(&self) -> &'static str { "chartArea" }

    fn before_draw(&self, ctx: &mut DrawContext<'_>) {
        let area = ctx.chart_area;
        let s = &mut *ctx.surface;
        s.save();
        s.set_stroke_color(self.border);
        s.set_line_width(self.line_width);
        s.set_composite(CompositeOp::DestinationOver);
        s.set_fill_color(self.fill);
        s.stroke_rect(area);
        s.fill_rect(area);
        s.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn frame_is_painted_behind_and_state_restored() {
        let theme = Theme::light();
        let mut surface = RecordingSurface::new(200, 100);
        let area = Rect::from_ltwh(10.0, 5.0, 180.0, 80.0);
        {
            let mut ctx = DrawContext { surface: &mut surface, chart_area: area, theme: &theme };
            ChartAreaBackground::from_theme(&theme).before_draw(&mut ctx);
        }
        let cmds = surface.commands();
        assert_eq!(cmds.first(), Some(&DrawCommand::Save));
        assert_eq!(cmds.last(), Some(&DrawCommand::Restore));
        let stroke = cmds.iter().find_map(|c| match c {
            DrawCommand::StrokeRect { rect, state } => Some((*rect, *state)),
            _ => None,
        });
        let (rect, state) = stroke.expect("stroke_rect issued");
        assert_eq!(rect, area);
        assert_eq!(state.stroke_color, skia::Color::from_rgb(0xdb, 0xdb, 0xdb));
        assert_eq!(state.line_width, 1.0);
        assert_eq!(state.composite, CompositeOp::DestinationOver);
        assert!(cmds.iter().any(|c| matches!(c,
            DrawCommand::FillRect { rect, state } if *rect == area && state.fill_color == skia::Color::WHITE)));
        assert_eq!(surface.state().composite, CompositeOp::SourceOver);
        assert_eq!(surface.depth(), 0);
    }
}
