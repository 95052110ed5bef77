// File: crates/fnchart-core/src/surface.rs
// Summary: Canvas-like drawing contract used by the chart, plus a command-recording implementation.
// Notes:
// - Drawing state (colours, width, composite op) is part of a save/restore
//   stack, matching a 2D canvas context. Unmatched `restore` is a no-op.

use skia_safe as skia;

use crate::geometry::Rect;

/// How new pixels combine with what is already on the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CompositeOp {
    /// Paint over existing content.
    #[default]
    SourceOver,
    /// Paint only where the surface is still transparent ("behind" existing content).
    DestinationOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// One segment of a path, in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOp {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    /// Cubic Bezier: two control points then the end point.
    CubicTo(f32, f32, f32, f32, f32, f32),
}

/// Mutable drawing state, saved and restored as a unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawState {
    pub stroke_color: skia::Color,
    pub fill_color: skia::Color,
    pub line_width: f32,
    pub composite: CompositeOp,
    pub font_size: f32,
    pub clip: Option<Rect>,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            stroke_color: skia::Color::BLACK,
            fill_color: skia::Color::BLACK,
            line_width: 1.0,
            composite: CompositeOp::SourceOver,
            font_size: 12.0,
            clip: None,
        }
    }
}

/// A drawable target. Implementations own pixels (or a command log) and the state stack.
pub trait Surface {
    /// Pixel size `(width, height)`.
    fn size(&self) -> (i32, i32);

    fn save(&mut self);
    fn restore(&mut self);

    fn set_stroke_color(&mut self, color: skia::Color);
    fn set_fill_color(&mut self, color: skia::Color);
    fn set_line_width(&mut self, width: f32);
    fn set_composite(&mut self, op: CompositeOp);
    fn set_font_size(&mut self, size: f32);
    /// Intersect the clip with `rect` until the next `restore`.
    fn clip_rect(&mut self, rect: Rect);

    /// Fill the whole surface with `color`; called at the start of each frame.
    fn clear(&mut self, color: skia::Color);
    fn stroke_rect(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect);
    fn stroke_path(&mut self, path: &[PathOp]);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32);
    /// Draw `text` with its baseline at `y`, anchored at `x` per `align`.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign);
    fn measure_text(&self, text: &str) -> f32;
}

/// Everything a [`RecordingSurface`] has been asked to do, with the state in effect.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    SetStrokeColor(skia::Color),
    SetFillColor(skia::Color),
    SetLineWidth(f32),
    SetComposite(CompositeOp),
    ClipRect(Rect),
    Clear(skia::Color),
    StrokeRect { rect: Rect, state: DrawState },
    FillRect { rect: Rect, state: DrawState },
    StrokePath { path: Vec<PathOp>, state: DrawState },
    FillCircle { cx: f32, cy: f32, radius: f32, state: DrawState },
    FillText { text: String, x: f32, y: f32, align: TextAlign, state: DrawState },
}

/// Surface that records commands instead of rasterizing; used by tests and
/// by hosts that replay the command list onto their own canvas.
#[derive(Debug)]
pub struct RecordingSurface {
    width: i32,
    height: i32,
    state: DrawState,
    stack: Vec<DrawState>,
    commands: Vec<DrawCommand>,
    frames: usize,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            state: DrawState::default(),
            stack: Vec::new(),
            commands: Vec::new(),
            frames: 0,
        }
    }

    /// Commands since the last `clear`, i.e. the most recent frame.
    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    /// Number of `clear` calls seen; each redraw starts with one.
    pub fn frames(&self) -> usize { self.frames }

    pub fn state(&self) -> &DrawState { &self.state }

    pub fn depth(&self) -> usize { self.stack.len() }

    /// Stroked paths of the current frame drawn in `color`.
    pub fn paths_with_color(&self, color: skia::Color) -> Vec<&[PathOp]> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokePath { path, state } if state.stroke_color == color => Some(path.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Text drawn in the current frame, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (i32, i32) { (self.width, self.height) }

    fn save(&mut self) {
        self.stack.push(self.state);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if let Some(prev) = self.stack.pop() {
            self.state = prev;
            self.commands.push(DrawCommand::Restore);
        }
    }

    fn set_stroke_color(&mut self, color: skia::Color) {
        self.state.stroke_color = color;
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn set_fill_color(&mut self, color: skia::Color) {
        self.state.fill_color = color;
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn set_composite(&mut self, op: CompositeOp) {
        self.state.composite = op;
        self.commands.push(DrawCommand::SetComposite(op));
    }

    fn set_font_size(&mut self, size: f32) {
        self.state.font_size = size;
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.state.clip = Some(self.state.clip.map_or(rect, |c| c.intersect(&rect)));
        self.commands.push(DrawCommand::ClipRect(rect));
    }

    fn clear(&mut self, color: skia::Color) {
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::Clear(color));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::StrokeRect { rect, state: self.state });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect { rect, state: self.state });
    }

    fn stroke_path(&mut self, path: &[PathOp]) {
        self.commands.push(DrawCommand::StrokePath { path: path.to_vec(), state: self.state });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        self.commands.push(DrawCommand::FillCircle { cx, cy, radius, state: self.state });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        self.commands.push(DrawCommand::FillText { text: text.to_string(), x, y, align, state: self.state });
    }

    fn measure_text(&self, text: &str) -> f32 {
        // fixed advance keeps layouts deterministic
        text.chars().count() as f32 * self.state.font_size * 0.6
    }
}
