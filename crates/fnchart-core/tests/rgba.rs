// File: crates/fnchart-core/tests/rgba.rs
// Purpose: Validate RGBA readback shape and that the plot frame is painted behind the data.

use fnchart_core::{ChartAdapter, Point, SkiaSurface};

#[test]
fn render_rgba8_buffer() {
    let mut adapter = ChartAdapter::new();
    adapter.create_chart(SkiaSurface::new(320, 160).expect("raster surface")).expect("create");
    adapter
        .update_chart_data(vec![Point::new(-4.0, -4.0), Point::new(4.0, 4.0)], -4.0, 4.0, -4.0, 4.0)
        .expect("update");
    let mut surface = adapter.into_surface().expect("surface");

    let (px, w, h, stride) = surface.rgba8().expect("rgba readback");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    let alpha = |x: usize, y: usize| px[y * stride + x * 4 + 3];
    // outside the plot area the surface stays transparent
    assert_eq!(alpha(2, 2), 0);
    // inside, the chart-area fill is opaque white
    assert_eq!(alpha(100, 30), 255);
}
