// File: crates/fnchart-core/src/scale.rs
// Summary: Linear value-to-pixel transforms for the X and Y axes.

use crate::axis::ScaleOptions;

/// Linear mapping from `[min, max]` onto the pixel range `[start_px, end_px]`.
/// For the Y axis `start_px` is the bottom edge so larger values go up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub min: f64,
    pub max: f64,
    pub start_px: f32,
    pub end_px: f32,
}

impl LinearScale {
    pub fn new(min: f64, max: f64, start_px: f32, end_px: f32) -> Self {
        let mut s = Self { min, max, start_px, end_px };
        if (s.max - s.min).abs() < 1e-12 {
            s.max = s.min + 1.0;
        }
        s
    }

    /// Resolve bounds: fixed `min`/`max` from options win over the data range.
    pub fn resolve(opts: &ScaleOptions, data: Option<(f64, f64)>, start_px: f32, end_px: f32) -> Self {
        let (dmin, dmax) = data.unwrap_or((0.0, 1.0));
        let min = opts.min.unwrap_or(dmin);
        let max = opts.max.unwrap_or(dmax);
        Self::new(min, max, start_px, end_px)
    }

    #[inline]
    pub fn span(&self) -> f64 { self.max - self.min }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let frac = (v - self.min) / self.span();
        self.start_px + (frac as f32) * (self.end_px - self.start_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let frac = ((px - self.start_px) / (self.end_px - self.start_px)) as f64;
        self.min + frac * self.span()
    }
}

/// Min/max over finite values, `None` when there are none.
pub fn finite_range(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.into_iter().filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn maps_both_directions() {
        let s = LinearScale::new(-5.0, 5.0, 300.0, 100.0);
        assert_relative_eq!(s.to_px(-5.0), 300.0);
        assert_relative_eq!(s.to_px(5.0), 100.0);
        assert_relative_eq!(s.to_px(0.0), 200.0);
        assert_relative_eq!(s.from_px(200.0), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn degenerate_span_widens() {
        let s = LinearScale::new(2.0, 2.0, 0.0, 10.0);
        assert_eq!(s.max, 3.0);
    }

    #[test]
    fn options_override_data() {
        let mut opts = ScaleOptions::default_x();
        opts.min = Some(0.0);
        let s = LinearScale::resolve(&opts, Some((-3.0, 7.0)), 0.0, 100.0);
        assert_eq!((s.min, s.max), (0.0, 7.0));
    }

    #[test]
    fn finite_range_skips_nan() {
        assert_eq!(finite_range([1.0, f64::NAN, -2.0]), Some((-2.0, 1.0)));
        assert_eq!(finite_range([f64::NAN]), None);
    }
}
