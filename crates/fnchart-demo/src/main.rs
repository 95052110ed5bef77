// File: crates/fnchart-demo/src/main.rs
// Summary: Demo samples a built-in function (or loads x,y points from CSV) and renders the chart to PNG.
// Usage: fnchart-demo [sin|cos|square|cube|exp|recip|points.csv] [min_x] [max_x] [samples] [--config render.json]

use anyhow::{Context, Result};
use fnchart_core::{ChartAdapter, ChartOptions, Point, RenderOptions, SkiaSurface};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse(std::env::args().skip(1))?;

    let render = match &args.config {
        Some(path) => RenderOptions::from_json_file(path)
            .with_context(|| format!("failed to load render options '{}'", path.display()))?,
        None => RenderOptions::default(),
    };

    let (name, samples) = if args.source.ends_with(".csv") {
        let path = Path::new(&args.source);
        let points = load_points_csv(path)
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("points").to_string();
        (stem, points)
    } else {
        let f = builtin(&args.source)
            .with_context(|| format!("unknown function '{}'", args.source))?;
        (args.source.clone(), sample(f, args.min_x, args.max_x, args.samples))
    };
    info!(function = %name, points = samples.len(), "sampled");

    let (min_x, max_x) = match x_range(&samples) {
        Some(r) if args.source.ends_with(".csv") => r,
        _ => (args.min_x, args.max_x),
    };
    let (min_y, max_y) = y_range(&samples).unwrap_or((-1.0, 1.0));
    info!(min_x, max_x, min_y, max_y, "bounds");

    let surface = SkiaSurface::new(render.width, render.height)?;
    let mut adapter = ChartAdapter::with_options(ChartOptions::default(), render);
    adapter.create_chart(surface)?;
    adapter.update_chart_data(samples, min_x, max_x, min_y, max_y)?;

    let out = out_name(&name);
    adapter.into_surface()?.write_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

struct Args {
    source: String,
    min_x: f64,
    max_x: f64,
    samples: usize,
    config: Option<PathBuf>,
}

impl Args {
    fn parse(raw: impl Iterator<Item = String>) -> Result<Self> {
        let mut positional = Vec::new();
        let mut config = None;
        let mut raw = raw.peekable();
        while let Some(arg) = raw.next() {
            if arg == "--config" {
                let path = raw.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            } else {
                positional.push(arg);
            }
        }
        let num = |i: usize, default: f64| -> Result<f64> {
            match positional.get(i) {
                Some(s) => s.parse::<f64>().with_context(|| format!("'{s}' is not a number")),
                None => Ok(default),
            }
        };
        let min_x = num(1, -10.0)?;
        let max_x = num(2, 10.0)?;
        let samples = match positional.get(3) {
            Some(s) => s.parse::<usize>().with_context(|| format!("'{s}' is not a sample count"))?,
            None => 400,
        };
        if max_x < min_x {
            warn!(min_x, max_x, "inverted x range");
        }
        Ok(Self {
            source: positional.first().cloned().unwrap_or_else(|| "sin".to_string()),
            min_x,
            max_x,
            samples: samples.max(2),
            config,
        })
    }
}

fn builtin(name: &str) -> Option<fn(f64) -> f64> {
    let f: fn(f64) -> f64 = match name {
        "sin" => f64::sin,
        "cos" => f64::cos,
        "square" => |x| x * x,
        "cube" => |x| x * x * x,
        "exp" => f64::exp,
        // 1/x yields an infinity at 0, which shows up as a gap
        "recip" => |x| 1.0 / x,
        _ => return None,
    };
    Some(f)
}

fn sample(f: fn(f64) -> f64, min_x: f64, max_x: f64, n: usize) -> Vec<Point> {
    let step = (max_x - min_x) / (n - 1) as f64;
    (0..n)
        .map(|i| {
            let x = min_x + step * i as f64;
            Point::new(x, f(x))
        })
        .collect()
}

/// Load x,y pairs from a CSV with headers; rows that fail to parse are skipped.
fn load_points_csv(path: &Path) -> Result<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let i_x = headers.iter().position(|h| h == "x").unwrap_or(0);
    let i_y = headers.iter().position(|h| h == "y" || h == "f(x)").unwrap_or(1);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        match (parse(i_x), parse(i_y)) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => warn!(row = ?rec.position().map(|p| p.line()), "skipping unparsable row"),
        }
    }
    Ok(out)
}

fn x_range(points: &[Point]) -> Option<(f64, f64)> {
    minmax(points.iter().map(|p| p.x))
}

/// Y range with a 5% margin so the curve does not touch the frame.
fn y_range(points: &[Point]) -> Option<(f64, f64)> {
    let (lo, hi) = minmax(points.iter().map(|p| p.y))?;
    let margin = ((hi - lo) * 0.05).max(0.5);
    Some((lo - margin, hi + margin))
}

fn minmax(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    (lo <= hi).then_some((lo, hi))
}

/// Produce output file name like target/out/fn_<name>.png
fn out_name(name: &str) -> PathBuf {
    let safe: String = name.chars().map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }).collect();
    PathBuf::from("target/out").join(format!("fn_{safe}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Result<Args> {
        Args::parse(v.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults() {
        let a = args(&[]).unwrap();
        assert_eq!(a.source, "sin");
        assert_eq!((a.min_x, a.max_x, a.samples), (-10.0, 10.0, 400));
        assert!(a.config.is_none());
    }

    #[test]
    fn positional_and_config() {
        let a = args(&["cube", "-2", "2", "50", "--config", "r.json"]).unwrap();
        assert_eq!(a.source, "cube");
        assert_eq!((a.min_x, a.max_x, a.samples), (-2.0, 2.0, 50));
        assert_eq!(a.config, Some(PathBuf::from("r.json")));
    }

    #[test]
    fn bad_number_is_reported() {
        assert!(args(&["sin", "abc"]).is_err());
        assert!(args(&["sin", "0", "1", "--config"]).is_err());
    }

    #[test]
    fn recip_has_gap_at_zero() {
        let pts = sample(builtin("recip").unwrap(), -1.0, 1.0, 3);
        assert!(!pts[1].y.is_finite());
        assert_eq!(y_range(&pts), Some((-1.5, 1.5)));
    }

    #[test]
    fn out_names_are_path_safe() {
        assert_eq!(out_name("f(x)"), PathBuf::from("target/out/fn_f_x_.png"));
    }
}
