// File: crates/plotline-core/tests/rgba.rs
// Purpose: Validate RGBA readback: buffer shape, per-point markers, idempotence.

use plotline_core::{ChartConfig, LineChart, RenderOptions};
use skia_safe as skia;

fn pixel(px: &[u8], stride: usize, x: i32, y: i32) -> [u8; 4] {
    let i = y as usize * stride + x as usize * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

fn chart_without_labels() -> LineChart {
    let config = ChartConfig::new(0.0, 0.0, 4.0, 4.0, 1.0, 1.0);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    LineChart::new(config, opts)
}

#[test]
fn render_rgba8_buffer() {
    let chart = chart_without_labels();
    let data = vec![(0.0, 0.0), (4.0, 4.0)];
    let (px, w, h, stride) =
        chart.render_to_rgba8(&data, skia::Color::RED, 2.0).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);

    // Check background alpha in top-left pixel (RGBA)
    assert_eq!(pixel(&px, stride, 0, 0)[3], 255);
}

#[test]
fn every_point_gets_a_marker() {
    let chart = chart_without_labels();
    let data = vec![(0.5, 0.5), (2.0, 3.0), (3.5, 1.0)];

    let (px, _, _, stride) =
        chart.render_to_rgba8(&data, skia::Color::RED, 2.0).expect("rgba render");
    for &(x, y) in &data {
        let (cx, cy) = chart.layout().data_to_surface(x, y);
        let got = pixel(&px, stride, cx.round() as i32, cy.round() as i32);
        assert_eq!(got, [255, 0, 0, 255], "marker missing at ({x}, {y})");
    }
}

#[test]
fn render_is_idempotent() {
    // Labels on: the whole frame, text included, must repeat exactly.
    let config = ChartConfig::new(0.0, 0.0, 4.0, 4.0, 1.0, 1.0);
    let chart = LineChart::new(config, RenderOptions::default());
    let data = vec![(0.0, 1.0), (1.0, 3.0), (2.0, 2.0), (3.0, 4.0), (4.0, 0.5)];
    let color = skia::Color::from_argb(255, 32, 120, 200);

    let (first, ..) = chart.render_to_rgba8(&data, color, 2.0).expect("first render");
    let (second, ..) = chart.render_to_rgba8(&data, color, 2.0).expect("second render");
    assert_eq!(first, second, "identical inputs must produce identical frames");
}

#[test]
fn empty_and_single_point_datasets_render() {
    let chart = chart_without_labels();

    // Axes only; nothing to connect.
    let (_, w, h, _) = chart.render_to_rgba8(&[], skia::Color::RED, 2.0).expect("empty render");
    assert_eq!((w, h), (800, 500));

    // One point: a marker, no segments.
    let data = vec![(2.0, 2.0)];
    let (px, _, _, stride) =
        chart.render_to_rgba8(&data, skia::Color::RED, 2.0).expect("single render");
    let (cx, cy) = chart.layout().data_to_surface(2.0, 2.0);
    let got = pixel(&px, stride, cx.round() as i32, cy.round() as i32);
    assert_eq!(got, [255, 0, 0, 255]);
}
