// File: crates/fnchart-core/src/dataset.rs
// Summary: Dataset model: the two axis-reference segments and the plotted function.
// Notes:
// - The chart always carries exactly three datasets; slot indices are part of
//   the tooltip filter contract (only slots above `Y_AXIS` produce entries).

use skia_safe as skia;

use crate::theme::Theme;
use crate::types::Point;

/// Slot of the horizontal reference segment (y = 0).
pub const X_AXIS: usize = 0;
/// Slot of the vertical reference segment (x = 0).
pub const Y_AXIS: usize = 1;
/// Slot of the caller-supplied samples.
pub const FUNCTION: usize = 2;

/// Half-extent of the reference segments before the first bounds update.
pub const DEFAULT_EXTENT: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DatasetStyle {
    pub background_color: skia::Color,
    pub border_color: skia::Color,
    pub border_width: f32,
    /// Marker radius for every point; 0 hides markers.
    pub point_radius: f32,
    /// Bezier smoothing factor; 0 draws straight segments.
    pub tension: f32,
    pub hover_background_color: skia::Color,
    pub hover_border_color: skia::Color,
    pub hover_border_width: f32,
    pub point_hover_radius: f32,
}

impl DatasetStyle {
    /// Thin unsmoothed line with hidden markers in a single colour.
    pub fn reference(color: skia::Color) -> Self {
        Self {
            background_color: color,
            border_color: color,
            border_width: 1.0,
            point_radius: 0.0,
            tension: 0.0,
            hover_background_color: color,
            hover_border_color: color,
            hover_border_width: 1.0,
            point_hover_radius: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Point>,
    pub style: DatasetStyle,
    /// Stacking order: higher values are drawn first (underneath).
    pub order: i32,
}

impl Dataset {
    pub fn x_axis(theme: &Theme) -> Self {
        Self {
            label: "x".into(),
            data: vec![Point::new(DEFAULT_EXTENT, 0.0), Point::new(-DEFAULT_EXTENT, 0.0)],
            style: DatasetStyle::reference(theme.x_reference),
            order: 2,
        }
    }

    pub fn y_axis(theme: &Theme) -> Self {
        Self {
            label: "y".into(),
            data: vec![Point::new(0.0, DEFAULT_EXTENT), Point::new(0.0, -DEFAULT_EXTENT)],
            style: DatasetStyle::reference(theme.y_reference),
            order: 1,
        }
    }

    pub fn function(theme: &Theme) -> Self {
        let mut style = DatasetStyle::reference(theme.function);
        style.tension = 0.1;
        Self { label: "Function".into(), data: Vec::new(), style, order: 0 }
    }
}

/// The fixed dataset triple.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub datasets: [Dataset; 3],
}

impl ChartData {
    pub fn new(theme: &Theme) -> Self {
        Self {
            datasets: [Dataset::x_axis(theme), Dataset::y_axis(theme), Dataset::function(theme)],
        }
    }

    /// Dataset indices in paint order: descending `order`, ties by index.
    pub fn draw_order(&self) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..self.datasets.len()).collect();
        idx.sort_by(|&a, &b| self.datasets[b].order.cmp(&self.datasets[a].order).then(a.cmp(&b)));
        idx
    }

    /// Set the reference segments to span the given bounds through the origin.
    pub fn set_reference_segments(&mut self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) {
        self.datasets[X_AXIS].data = vec![Point::new(min_x, 0.0), Point::new(max_x, 0.0)];
        self.datasets[Y_AXIS].data = vec![Point::new(0.0, min_y), Point::new(0.0, max_y)];
    }

    pub fn set_function(&mut self, samples: Vec<Point>) {
        self.datasets[FUNCTION].data = samples;
    }

    /// Min/max over all finite coordinates, for axes without fixed bounds.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        crate::scale::finite_range(self.datasets.iter().flat_map(|d| d.data.iter().map(|p| p.x)))
    }

    pub fn y_range(&self) -> Option<(f64, f64)> {
        crate::scale::finite_range(self.datasets.iter().flat_map(|d| d.data.iter().map(|p| p.y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_triple() {
        let d = ChartData::new(&Theme::light());
        assert_eq!(d.datasets[X_AXIS].label, "x");
        assert_eq!(d.datasets[Y_AXIS].label, "y");
        assert_eq!(d.datasets[FUNCTION].label, "Function");
        assert!(d.datasets[FUNCTION].data.is_empty());
        assert_eq!(d.datasets[FUNCTION].style.tension, 0.1);
    }

    #[test]
    fn lower_order_paints_last() {
        let d = ChartData::new(&Theme::light());
        assert_eq!(d.draw_order(), vec![X_AXIS, Y_AXIS, FUNCTION]);
    }

    #[test]
    fn ranges_cover_all_datasets() {
        let mut d = ChartData::new(&Theme::light());
        d.set_function(vec![Point::new(80.0, -90.0)]);
        assert_eq!(d.x_range(), Some((-50.0, 80.0)));
        assert_eq!(d.y_range(), Some((-90.0, 50.0)));
    }
}
