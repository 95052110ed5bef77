// File: crates/fnchart-core/tests/smoke.rs
// Purpose: End-to-end render through the Skia surface writing a PNG.

use fnchart_core::{ChartAdapter, Point, SkiaSurface};

fn sine_samples() -> Vec<Point> {
    (0..=200).map(|i| {
        let x = -10.0 + i as f64 * 0.1;
        Point::new(x, x.sin() * 3.0)
    }).collect()
}

#[test]
fn render_smoke_png() {
    let mut adapter = ChartAdapter::new();
    adapter.create_chart(SkiaSurface::new(640, 320).expect("raster surface")).expect("create");
    adapter.update_chart_data(sine_samples(), -10.0, 10.0, -4.0, 4.0).expect("update");

    let mut surface = adapter.into_surface().expect("surface");
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    surface.write_png(&out).expect("write png");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = surface.png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
