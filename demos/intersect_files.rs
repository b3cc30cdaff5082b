//! Intersects two quadratic curves whose control points are stored in text
//! files, one `x y` pair per line.
//!
//! ```text
//! RUST_LOG=quadsect=debug cargo run --example intersect_files -- a.txt b.txt
//! ```
//!
//! Without arguments the files under `demos/data/` are used.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use quadsect::math::Point2;
use quadsect::operations::query::CurveCurveIntersect;
use quadsect::tessellation::{sample_control_points, SampleParams};

fn read_control_points(path: &Path) -> Result<Vec<Point2>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut points = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let mut fields = line.split_whitespace();
        let (Some(x), Some(y)) = (fields.next(), fields.next()) else {
            continue;
        };
        let x: f64 = x
            .parse()
            .with_context(|| format!("{}:{}", path.display(), i + 1))?;
        let y: f64 = y
            .parse()
            .with_context(|| format!("{}:{}", path.display(), i + 1))?;
        points.push(Point2::new(x, y));
    }
    Ok(points)
}

fn run(path_a: &Path, path_b: &Path) -> Result<()> {
    let params = SampleParams::default();
    let curve_a = sample_control_points(&read_control_points(path_a)?, params)?;
    let curve_b = sample_control_points(&read_control_points(path_b)?, params)?;
    tracing::info!(samples_a = curve_a.len(), samples_b = curve_b.len(), "curves sampled");

    let set = CurveCurveIntersect::new(curve_a, curve_b).execute()?;
    tracing::info!(count = set.len(), "intersection points");
    for p in set.into_sorted_vec() {
        tracing::info!("({:.6}, {:.6})", p.x, p.y);
    }
    Ok(())
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("intersect_files=info".parse().unwrap_or_default())
        .add_directive("quadsect=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/data");
    let args: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    let (a, b) = match args.as_slice() {
        [a, b] => (a.clone(), b.clone()),
        [] => (data.join("curve1.txt"), data.join("curve2.txt")),
        _ => bail!("usage: intersect_files [CURVE_A CURVE_B]"),
    };

    run(&a, &b)
}
