// File: crates/plotline-core/src/style.rs
// Summary: Colors and metrics for axes, tick labels, and point markers.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct ChartStyle {
    pub name: &'static str,
    pub axis_line: skia::Color,
    pub label: skia::Color,
    /// Gap between the plot rect and labels/edges, in pixels.
    pub padding: f32,
    /// Tick mark length, in pixels.
    pub tick_size: f32,
    /// Radius of the filled marker drawn on every data point.
    pub point_radius: f32,
    /// Label font size; also the line height reserved under the X axis.
    pub font_size: f32,
}

impl ChartStyle {
    pub fn light() -> Self {
        Self {
            name: "light",
            axis_line: skia::Color::from_argb(255, 0x55, 0x55, 0x55),
            label: skia::Color::BLACK,
            padding: 10.0,
            tick_size: 10.0,
            point_radius: 3.0,
            font_size: 11.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            label: skia::Color::from_argb(255, 235, 235, 245),
            padding: 10.0,
            tick_size: 10.0,
            point_radius: 3.0,
            font_size: 11.0,
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::light()
    }
}
