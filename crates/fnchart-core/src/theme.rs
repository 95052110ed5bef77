// File: crates/fnchart-core/src/theme.rs
// Summary: Fixed colour palette for the function chart.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub chart_area_fill: skia::Color,
    pub chart_area_border: skia::Color,
    pub grid: skia::Color,
    pub tick_label: skia::Color,
    pub axis_title: skia::Color,
    pub x_reference: skia::Color,
    pub y_reference: skia::Color,
    pub function: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            // transparent surface; the chart-area plugin paints the plot background
            background: skia::Color::from_argb(0, 0, 0, 0),
            chart_area_fill: skia::Color::from_rgb(0xff, 0xff, 0xff),
            chart_area_border: skia::Color::from_rgb(0xdb, 0xdb, 0xdb),
            grid: skia::Color::from_argb(25, 0, 0, 0),
            tick_label: skia::Color::from_rgb(0x66, 0x66, 0x66),
            axis_title: skia::Color::from_rgb(0x66, 0x66, 0x66),
            x_reference: skia::Color::from_rgb(0xff, 0x7e, 0x67),
            y_reference: skia::Color::from_rgb(0x5c, 0x7a, 0xea),
            function: skia::Color::from_rgb(0x52, 0x52, 0x52),
            tooltip_background: skia::Color::from_argb(204, 0, 0, 0),
            tooltip_text: skia::Color::from_rgb(0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
