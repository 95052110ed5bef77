// File: crates/fnchart-core/src/chart.rs
// Summary: Chart instance: layout, grid/ticks, dataset paths, legend, pointer tooltips and plugin hooks.

use tracing::{debug, trace};

use crate::config::{ChartOptions, InteractionMode, RenderOptions};
use crate::dataset::{ChartData, Dataset};
use crate::geometry::{clamp, distance, Rect};
use crate::grid::ticks;
use crate::numeric::format_tick;
use crate::plugin::{DrawContext, Plugin};
use crate::scale::LinearScale;
use crate::surface::{PathOp, Surface, TextAlign};
use crate::tooltip::{TooltipContent, TooltipItem};
use crate::types::Point;

/// Resolved geometry for one draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub canvas: (i32, i32),
    pub chart_area: Rect,
    pub x: LinearScale,
    pub y: LinearScale,
}

impl Layout {
    #[inline]
    pub fn to_px(&self, p: Point) -> (f32, f32) {
        (self.x.to_px(p.x), self.y.to_px(p.y))
    }
}

pub struct Chart<S: Surface> {
    surface: S,
    data: ChartData,
    options: ChartOptions,
    render: RenderOptions,
    plugins: Vec<Box<dyn Plugin>>,
    active: Option<TooltipContent>,
    /// Last pointer position inside the canvas; hover state is re-resolved from it on every update.
    pointer: Option<(f32, f32)>,
}

impl<S: Surface> Chart<S> {
    /// Bind a chart to `surface` and draw it once.
    pub fn new(
        surface: S,
        data: ChartData,
        options: ChartOptions,
        render: RenderOptions,
        plugins: Vec<Box<dyn Plugin>>,
    ) -> Self {
        let mut chart = Self { surface, data, options, render, plugins, active: None, pointer: None };
        chart.update();
        chart
    }

    pub fn data(&self) -> &ChartData { &self.data }
    pub fn data_mut(&mut self) -> &mut ChartData { &mut self.data }
    pub fn options(&self) -> &ChartOptions { &self.options }
    pub fn options_mut(&mut self) -> &mut ChartOptions { &mut self.options }
    pub fn render_options(&self) -> &RenderOptions { &self.render }
    pub fn surface(&self) -> &S { &self.surface }
    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }
    pub fn into_surface(self) -> S { self.surface }
    pub fn tooltip(&self) -> Option<&TooltipContent> { self.active.as_ref() }

    pub fn plugin_ids(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.id()).collect()
    }

    /// Current layout for the surface size, options and data.
    pub fn layout(&self) -> Layout {
        let canvas = self.options.canvas_size(self.surface.size(), (self.render.width, self.render.height));
        let insets = self.render.insets;
        let legend_h = if self.options.plugins.legend.display { self.render.font_size + 10.0 } else { 0.0 };
        let chart_area = Rect::from_ltrb(
            insets.left as f32,
            insets.top as f32 + legend_h,
            (canvas.0 - insets.right as i32) as f32,
            (canvas.1 - insets.bottom as i32) as f32,
        );
        let x = LinearScale::resolve(&self.options.scales.x, self.data.x_range(), chart_area.left, chart_area.right());
        let y = LinearScale::resolve(&self.options.scales.y, self.data.y_range(), chart_area.bottom(), chart_area.top);
        Layout { canvas, chart_area, x, y }
    }

    /// Redraw synchronously with the current data and options.
    pub fn update(&mut self) {
        let layout = self.layout();
        debug!(
            x_min = layout.x.min,
            x_max = layout.x.max,
            y_min = layout.y.min,
            y_max = layout.y.max,
            points = self.data.datasets[crate::dataset::FUNCTION].data.len(),
            "chart update"
        );
        self.refresh_active(&layout);
        self.draw(&layout);
    }

    /// Recompute hovered elements for a pointer at `(px, py)` and redraw.
    pub fn pointer_move(&mut self, px: f32, py: f32) -> Option<&TooltipContent> {
        let layout = self.layout();
        self.pointer = Some((px, py));
        self.refresh_active(&layout);
        self.draw(&layout);
        self.active.as_ref()
    }

    /// Drop any active tooltip and redraw.
    pub fn pointer_leave(&mut self) {
        self.pointer = None;
        if self.active.take().is_some() {
            let layout = self.layout();
            self.draw(&layout);
        }
    }

    fn refresh_active(&mut self, layout: &Layout) {
        let Some((px, py)) = self.pointer else {
            self.active = None;
            return;
        };
        let candidates = self.hit_candidates(layout, px, py);
        trace!(px, py, candidates = candidates.len(), "hover resolve");
        self.active = self.options.plugins.tooltip.resolve(&candidates, (px, py));
    }

    fn hit_candidates(&self, layout: &Layout, px: f32, py: f32) -> Vec<TooltipItem> {
        if !layout.chart_area.contains(px, py) {
            return Vec::new();
        }
        match self.options.interaction.mode {
            InteractionMode::Nearest => self.nearest_items(layout, px, py),
        }
    }

    /// Items at the minimum pixel distance from the pointer, ties included.
    fn nearest_items(&self, layout: &Layout, px: f32, py: f32) -> Vec<TooltipItem> {
        let mut best = f32::INFINITY;
        let mut out: Vec<TooltipItem> = Vec::new();
        for (dataset_index, ds) in self.data.datasets.iter().enumerate() {
            let reach = self.options.interaction.hit_radius + ds.style.point_radius.max(0.0);
            for (data_index, p) in ds.data.iter().enumerate() {
                if !p.is_finite() {
                    continue;
                }
                let at = layout.to_px(*p);
                let d = distance(at, (px, py));
                if self.options.interaction.intersect && d > reach {
                    continue;
                }
                let item = TooltipItem { dataset_index, data_index, parsed: *p, px: at };
                if d < best - 1e-3 {
                    best = d;
                    out.clear();
                    out.push(item);
                } else if (d - best).abs() <= 1e-3 {
                    out.push(item);
                }
            }
        }
        out
    }

    fn draw(&mut self, layout: &Layout) {
        let theme = self.render.theme;
        self.surface.clear(theme.background);
        self.surface.set_font_size(self.render.font_size);

        {
            let mut ctx = DrawContext { surface: &mut self.surface, chart_area: layout.chart_area, theme: &theme };
            for p in &self.plugins {
                p.before_draw(&mut ctx);
            }
        }

        self.draw_scales(layout);

        self.surface.save();
        self.surface.clip_rect(layout.chart_area);
        for i in self.data.draw_order() {
            let ds = &self.data.datasets[i];
            draw_dataset(&mut self.surface, layout, ds, self.options.span_gaps);
            if let Some(active) = &self.active {
                for it in active.items.iter().filter(|it| it.dataset_index == i) {
                    draw_hover_point(&mut self.surface, ds, it.px);
                }
            }
        }
        self.surface.restore();

        if self.options.plugins.legend.display {
            self.draw_legend(layout);
        }
        if let Some(active) = &self.active {
            draw_tooltip(&mut self.surface, layout, active, &self.render);
        }

        let mut ctx = DrawContext { surface: &mut self.surface, chart_area: layout.chart_area, theme: &theme };
        for p in &self.plugins {
            p.after_draw(&mut ctx);
        }
    }

    fn draw_scales(&mut self, layout: &Layout) {
        let theme = self.render.theme;
        let area = layout.chart_area;
        let fs = self.render.font_size;
        let s = &mut self.surface;
        let xo = &self.options.scales.x;
        let yo = &self.options.scales.y;

        s.save();
        s.set_line_width(1.0);

        if xo.display {
            let (xt, step) = ticks(layout.x.min, layout.x.max, self.render.max_ticks);
            for v in xt {
                let px = layout.x.to_px(v);
                if xo.grid.display {
                    s.set_stroke_color(theme.grid);
                    s.stroke_path(&[PathOp::MoveTo(px, area.top), PathOp::LineTo(px, area.bottom())]);
                }
                s.set_fill_color(theme.tick_label);
                s.fill_text(&format_tick(v, step), px, area.bottom() + fs + 4.0, TextAlign::Center);
            }
            if xo.grid.draw_border {
                s.set_stroke_color(theme.chart_area_border);
                s.stroke_path(&[PathOp::MoveTo(area.left, area.bottom()), PathOp::LineTo(area.right(), area.bottom())]);
            }
            if xo.title.display {
                s.set_fill_color(theme.axis_title);
                let cx = area.left + area.width * 0.5;
                s.fill_text(&xo.title.text, cx, area.bottom() + 2.0 * fs + 12.0, TextAlign::Center);
            }
        }

        if yo.display {
            let (yt, step) = ticks(layout.y.min, layout.y.max, self.render.max_ticks);
            for v in yt {
                let py = layout.y.to_px(v);
                if yo.grid.display {
                    s.set_stroke_color(theme.grid);
                    s.stroke_path(&[PathOp::MoveTo(area.left, py), PathOp::LineTo(area.right(), py)]);
                }
                s.set_fill_color(theme.tick_label);
                s.fill_text(&format_tick(v, step), area.left - 6.0, py + fs * 0.35, TextAlign::Right);
            }
            if yo.grid.draw_border {
                s.set_stroke_color(theme.chart_area_border);
                s.stroke_path(&[PathOp::MoveTo(area.left, area.top), PathOp::LineTo(area.left, area.bottom())]);
            }
            if yo.title.display {
                s.set_fill_color(theme.axis_title);
                s.fill_text(&yo.title.text, 4.0, area.top + area.height * 0.5, TextAlign::Left);
            }
        }

        s.restore();
    }

    fn draw_legend(&mut self, layout: &Layout) {
        let fs = self.render.font_size;
        let s = &mut self.surface;
        let mut x = layout.chart_area.left;
        let y = self.render.insets.top as f32;
        s.save();
        for ds in &self.data.datasets {
            s.set_fill_color(ds.style.border_color);
            s.fill_rect(Rect::from_ltwh(x, y, fs * 2.0, fs * 0.8));
            x += fs * 2.0 + 4.0;
            s.set_fill_color(self.render.theme.tick_label);
            s.fill_text(&ds.label, x, y + fs * 0.8, TextAlign::Left);
            x += s.measure_text(&ds.label) + fs;
        }
        s.restore();
    }
}

/// Split samples into drawable runs. Without `span_gaps` a non-finite point
/// ends the current run; with it non-finite points are skipped.
pub fn segments(data: &[Point], span_gaps: bool) -> Vec<Vec<Point>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for p in data {
        if p.is_finite() {
            current.push(*p);
        } else if !span_gaps && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Path through `pts`. With `tension > 0` each interior point gets Bezier
/// control points along the direction from its previous to its next point,
/// scaled by the relative neighbour distances.
pub fn line_path(pts: &[(f32, f32)], tension: f32) -> Vec<PathOp> {
    let Some(&(x0, y0)) = pts.first() else {
        return Vec::new();
    };
    let mut ops = Vec::with_capacity(pts.len());
    ops.push(PathOp::MoveTo(x0, y0));
    if tension <= 0.0 || pts.len() < 3 {
        ops.extend(pts.iter().skip(1).map(|&(x, y)| PathOp::LineTo(x, y)));
        return ops;
    }
    let n = pts.len();
    let controls: Vec<((f32, f32), (f32, f32))> = (0..n)
        .map(|i| {
            let prev = pts[i.saturating_sub(1)];
            let cur = pts[i];
            let next = pts[(i + 1).min(n - 1)];
            control_points(prev, cur, next, tension)
        })
        .collect();
    for i in 1..n {
        let (_, c1) = controls[i - 1];
        let (c2, _) = controls[i];
        let (x, y) = pts[i];
        ops.push(PathOp::CubicTo(c1.0, c1.1, c2.0, c2.1, x, y));
    }
    ops
}

fn control_points(prev: (f32, f32), cur: (f32, f32), next: (f32, f32), t: f32) -> ((f32, f32), (f32, f32)) {
    let d01 = distance(cur, prev);
    let d12 = distance(next, cur);
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 { (d01 / total, d12 / total) } else { (0.0, 0.0) };
    let fa = t * s01;
    let fb = t * s12;
    let (dx, dy) = (next.0 - prev.0, next.1 - prev.1);
    ((cur.0 - fa * dx, cur.1 - fa * dy), (cur.0 + fb * dx, cur.1 + fb * dy))
}

fn draw_dataset<S: Surface>(s: &mut S, layout: &Layout, ds: &Dataset, span_gaps: bool) {
    let style = &ds.style;
    s.set_stroke_color(style.border_color);
    s.set_line_width(style.border_width);
    for run in segments(&ds.data, span_gaps) {
        if run.len() < 2 {
            continue;
        }
        let pts: Vec<(f32, f32)> = run.iter().map(|p| layout.to_px(*p)).collect();
        s.stroke_path(&line_path(&pts, style.tension));
    }
    if style.point_radius > 0.0 {
        s.set_fill_color(style.background_color);
        for p in ds.data.iter().filter(|p| p.is_finite()) {
            let (x, y) = layout.to_px(*p);
            s.fill_circle(x, y, style.point_radius);
        }
    }
}

fn draw_hover_point<S: Surface>(s: &mut S, ds: &Dataset, at: (f32, f32)) {
    let style = &ds.style;
    if style.point_hover_radius <= 0.0 {
        return;
    }
    // border ring first, then the body on top of it
    if style.hover_border_width > 0.0 {
        s.set_fill_color(style.hover_border_color);
        s.fill_circle(at.0, at.1, style.point_hover_radius + style.hover_border_width * 0.5);
    }
    s.set_fill_color(style.hover_background_color);
    s.fill_circle(at.0, at.1, style.point_hover_radius);
}

fn draw_tooltip<S: Surface>(s: &mut S, layout: &Layout, tip: &TooltipContent, render: &RenderOptions) {
    let fs = render.font_size;
    let pad = 6.0;
    let line_h = fs + 4.0;
    let lines: Vec<&str> = tip.title.iter().chain(tip.body.iter()).map(String::as_str).collect();
    let text_w = lines.iter().map(|l| s.measure_text(l)).fold(0.0f32, f32::max);
    let w = text_w + 2.0 * pad;
    let h = lines.len() as f32 * line_h + 2.0 * pad;
    let (cw, ch) = (layout.canvas.0 as f32, layout.canvas.1 as f32);
    let mut left = tip.anchor.0 + 8.0;
    if left + w > cw {
        left = tip.anchor.0 - 8.0 - w;
    }
    let left = clamp(left, 0.0, (cw - w).max(0.0));
    let top = clamp(tip.anchor.1 - h * 0.5, 0.0, (ch - h).max(0.0));

    s.save();
    s.set_fill_color(render.theme.tooltip_background);
    s.fill_rect(Rect::from_ltwh(left, top, w, h));
    s.set_fill_color(render.theme.tooltip_text);
    for (i, line) in lines.iter().enumerate() {
        let baseline = top + pad + (i as f32 + 1.0) * line_h - 4.0;
        s.fill_text(line, left + pad, baseline, TextAlign::Left);
    }
    s.restore();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point { Point::new(x, y) }

    #[test]
    fn nan_breaks_runs_without_span_gaps() {
        let data = [p(0.0, 0.0), p(1.0, 1.0), p(2.0, f64::NAN), p(3.0, 3.0), p(4.0, 4.0)];
        let runs = segments(&data, false);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1].len(), 2);
    }

    #[test]
    fn span_gaps_joins_runs() {
        let data = [p(0.0, 0.0), p(1.0, f64::INFINITY), p(2.0, 2.0)];
        let runs = segments(&data, true);
        assert_eq!(runs, vec![vec![p(0.0, 0.0), p(2.0, 2.0)]]);
    }

    #[test]
    fn zero_tension_is_polyline() {
        let ops = line_path(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)], 0.0);
        assert_eq!(ops, vec![PathOp::MoveTo(0.0, 0.0), PathOp::LineTo(1.0, 1.0), PathOp::LineTo(2.0, 0.0)]);
    }

    #[test]
    fn tension_curves_pass_through_points() {
        let pts = [(0.0, 0.0), (10.0, 10.0), (20.0, 0.0), (30.0, 10.0)];
        let ops = line_path(&pts, 0.1);
        assert_eq!(ops.len(), 4);
        for (op, &(x, y)) in ops.iter().skip(1).zip(pts.iter().skip(1)) {
            match *op {
                PathOp::CubicTo(_, _, _, _, ex, ey) => assert_eq!((ex, ey), (x, y)),
                ref other => panic!("expected cubic, got {other:?}"),
            }
        }
        // first control point of the first curve collapses onto the start point
        match ops[1] {
            PathOp::CubicTo(c1x, c1y, ..) => assert_eq!((c1x, c1y), (0.0, 0.0)),
            _ => unreachable!(),
        }
    }
}
