// File: crates/demo/src/main.rs
// Summary: Demo loads an x,y CSV (or synthesizes a waveform) and renders light/dark PNGs.

use anyhow::{Context, Result};
use plotline_core::{ChartConfig, ChartStyle, LineChart, RenderOptions};
use skia_safe as skia;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let data = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            println!("Using input file: {}", path.display());
            load_xy_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            println!("No input file given; plotting a synthesized waveform.");
            sample_waveform()
        }
    };
    println!("Loaded {} points", data.len());

    if data.is_empty() {
        anyhow::bail!("no points loaded — check headers/delimiter.");
    }

    let (max_x, max_y) = bounds(&data);
    println!("Data extent: x up to {:.4}, y up to {:.4}", max_x, max_y);

    // Five X ticks and four Y ticks over zero-based bounds.
    let config = ChartConfig::new(0.0, 0.0, max_x, max_y, max_x / 5.0, max_y / 4.0);

    let chart = LineChart::new(config, RenderOptions::default());
    let out = PathBuf::from("target/out/line_light.png");
    chart.render_to_png(&data, skia::Color::from_argb(255, 32, 120, 200), 2.0, &out)?;
    println!("Wrote {}", out.display());

    let mut dark_opts = RenderOptions::default();
    dark_opts.background = skia::Color::from_argb(255, 18, 18, 20); // near-black
    let dark = LineChart::with_style(config, ChartStyle::dark(), dark_opts);
    let out = PathBuf::from("target/out/line_dark.png");
    dark.render_to_png(&data, skia::Color::from_argb(255, 64, 160, 255), 2.0, &out)?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Chart bounds grown a little past the data so the top marker clears the
/// plot edge.
fn bounds(data: &[(f64, f64)]) -> (f64, f64) {
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(x, y) in data {
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    (max_x.max(1.0).ceil(), (max_y.max(1.0) * 1.05).ceil())
}

/// Sum of two tones lifted into positive territory, sampled at 65 points.
fn sample_waveform() -> Vec<(f64, f64)> {
    (0..=64)
        .map(|i| {
            let x = i as f64 * 100.0 / 64.0;
            let y = 50.0 + 32.0 * (x * 0.09).sin() + 12.0 * (x * 0.23).cos();
            (x, y)
        })
        .collect()
}

/// Load x,y pairs from a CSV with headers, falling back to the first two
/// columns when no x/y-like headers are present.
fn load_xy_csv(path: &Path) -> Result<Vec<(f64, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };
    let i_x = idx(&["x", "time", "t", "index", "frequency", "freq"]);
    let i_y = idx(&["y", "value", "v", "magnitude", "amplitude"]);

    let (i_x, i_y) = match (i_x, i_y) {
        (Some(ix), Some(iy)) => (ix, iy),
        _ => {
            println!("Warning: no x/y-like headers found; using the first two columns.");
            (0, 1)
        }
    };

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let get = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        if let (Some(x), Some(y)) = (get(i_x), get(i_y)) {
            out.push((x, y));
        }
    }
    Ok(out)
}
