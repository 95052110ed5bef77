// File: crates/fnchart-core/src/grid.rs
// Summary: Tick layout helpers ("nice" 1/2/5 steps).

/// Step of the form {1, 2, 5} x 10^n covering `span` in at most `max_ticks` intervals.
pub fn nice_step(span: f64, max_ticks: usize) -> f64 {
    let raw = span.abs() / max_ticks.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick values inside `[min, max]` at a nice step, plus the step itself.
pub fn ticks(min: f64, max: f64, max_ticks: usize) -> (Vec<f64>, f64) {
    let step = nice_step(max - min, max_ticks);
    if !min.is_finite() || !max.is_finite() || max < min {
        return (Vec::new(), step);
    }
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    let out = (first..=last).map(|k| k as f64 * step).collect();
    (out, step)
}
