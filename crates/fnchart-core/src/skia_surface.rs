// File: crates/fnchart-core/src/skia_surface.rs
// Summary: Skia CPU raster implementation of `Surface` with PNG and RGBA export.

use skia_safe as skia;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::geometry::Rect;
use crate::surface::{CompositeOp, DrawState, PathOp, Surface, TextAlign};

pub struct SkiaSurface {
    surface: skia::Surface,
    width: i32,
    height: i32,
    state: DrawState,
    stack: Vec<DrawState>,
    font: skia::Font,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| ChartError::Surface(format!("failed to create {width}x{height} raster surface")))?;
        let state = DrawState::default();
        let font = skia::FontMgr::default()
            .legacy_make_typeface(None, skia::FontStyle::default())
            .map(|tf| skia::Font::from_typeface(tf, state.font_size))
            .unwrap_or_default();
        debug!(width, height, "created skia raster surface");
        Ok(Self { surface, width, height, state, stack: Vec::new(), font })
    }

    fn paint(&self, style: skia::paint::Style, color: skia::Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(style);
        paint.set_color(color);
        paint.set_stroke_width(self.state.line_width);
        paint.set_blend_mode(match self.state.composite {
            CompositeOp::SourceOver => skia::BlendMode::SrcOver,
            CompositeOp::DestinationOver => skia::BlendMode::DstOver,
        });
        paint
    }

    fn stroke_paint(&self) -> skia::Paint {
        self.paint(skia::paint::Style::Stroke, self.state.stroke_color)
    }

    fn fill_paint(&self) -> skia::Paint {
        self.paint(skia::paint::Style::Fill, self.state.fill_color)
    }

    /// Encode the current pixels as PNG.
    pub fn png_bytes(&mut self) -> ChartResult<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Encode("PNG encode failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the current pixels to `path` as PNG, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> ChartResult<()> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path.as_ref(), bytes)?;
        debug!(path = %path.as_ref().display(), "wrote png");
        Ok(())
    }

    /// Read back unpremultiplied RGBA8 pixels. Returns (pixels, width, height, stride).
    pub fn rgba8(&mut self) -> ChartResult<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.width, self.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Surface("read_pixels failed".into()));
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

impl Surface for SkiaSurface {
    fn size(&self) -> (i32, i32) { (self.width, self.height) }

    fn save(&mut self) {
        self.stack.push(self.state);
        self.surface.canvas().save();
    }

    fn restore(&mut self) {
        if let Some(prev) = self.stack.pop() {
            self.state = prev;
            self.font.set_size(prev.font_size);
            self.surface.canvas().restore();
        }
    }

    fn set_stroke_color(&mut self, color: skia::Color) { self.state.stroke_color = color; }

    fn set_fill_color(&mut self, color: skia::Color) { self.state.fill_color = color; }

    fn set_line_width(&mut self, width: f32) { self.state.line_width = width; }

    fn set_composite(&mut self, op: CompositeOp) { self.state.composite = op; }

    fn set_font_size(&mut self, size: f32) {
        self.state.font_size = size;
        self.font.set_size(size.max(1.0));
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.state.clip = Some(self.state.clip.map_or(rect, |c| c.intersect(&rect)));
        let r = skia::Rect::from_xywh(rect.left, rect.top, rect.width, rect.height);
        self.surface.canvas().clip_rect(r, skia::ClipOp::Intersect, true);
    }

    fn clear(&mut self, color: skia::Color) {
        self.surface.canvas().clear(color);
    }

    fn stroke_rect(&mut self, rect: Rect) {
        let paint = self.stroke_paint();
        let r = skia::Rect::from_xywh(rect.left, rect.top, rect.width, rect.height);
        self.surface.canvas().draw_rect(r, &paint);
    }

    fn fill_rect(&mut self, rect: Rect) {
        let paint = self.fill_paint();
        let r = skia::Rect::from_xywh(rect.left, rect.top, rect.width, rect.height);
        self.surface.canvas().draw_rect(r, &paint);
    }

    fn stroke_path(&mut self, ops: &[PathOp]) {
        if ops.is_empty() {
            return;
        }
        let mut path = skia::Path::new();
        for op in ops {
            match *op {
                PathOp::MoveTo(x, y) => { path.move_to((x, y)); }
                PathOp::LineTo(x, y) => { path.line_to((x, y)); }
                PathOp::CubicTo(x1, y1, x2, y2, x, y) => { path.cubic_to((x1, y1), (x2, y2), (x, y)); }
            }
        }
        let paint = self.stroke_paint();
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        let paint = self.fill_paint();
        self.surface.canvas().draw_circle((cx, cy), radius, &paint);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        let w = self.measure_text(text);
        let x = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - w * 0.5,
            TextAlign::Right => x - w,
        };
        let paint = self.fill_paint();
        self.surface.canvas().draw_str(text, (x, y), &self.font, &paint);
    }

    fn measure_text(&self, text: &str) -> f32 {
        self.font.measure_str(text, None).0
    }
}
