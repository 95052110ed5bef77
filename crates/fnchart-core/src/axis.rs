// File: crates/fnchart-core/src/axis.rs
// Summary: Axis/scale options with titles, grid flags and optional fixed bounds.

#[derive(Clone, Debug, PartialEq)]
pub struct ScaleTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridOptions {
    pub display: bool,
    /// Draw a solid line along the plot edge the axis sits on.
    pub draw_border: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self { display: true, draw_border: false }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScaleOptions {
    pub display: bool,
    pub title: ScaleTitle,
    pub grid: GridOptions,
    /// Fixed lower bound; derived from data when `None`.
    pub min: Option<f64>,
    /// Fixed upper bound; derived from data when `None`.
    pub max: Option<f64>,
}

impl ScaleOptions {
    pub fn linear(title: impl Into<String>) -> Self {
        Self {
            display: true,
            title: ScaleTitle { display: true, text: title.into() },
            grid: GridOptions::default(),
            min: None,
            max: None,
        }
    }

    pub fn default_x() -> Self { Self::linear("x") }

    pub fn default_y() -> Self { Self::linear("f(x)") }

    pub fn set_bounds(&mut self, min: f64, max: f64) {
        self.min = Some(min);
        self.max = Some(max);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scales {
    pub x: ScaleOptions,
    pub y: ScaleOptions,
}

impl Default for Scales {
    fn default() -> Self {
        Self { x: ScaleOptions::default_x(), y: ScaleOptions::default_y() }
    }
}
