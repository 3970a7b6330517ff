// File: crates/plotline-core/src/layout.rs
// Summary: Derived layout: ranges, tick counts, plot rect, and data-to-pixel scales.

use crate::config::ChartConfig;
use crate::style::ChartStyle;

/// Pixel-space layout derived once from a chart configuration.
///
/// The mapping from a data point (x, y) to a plot-local offset is
/// (x * scale_x, y * scale_y); the render pipeline flips the y axis so
/// offsets grow upward from the plot's bottom-left corner.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub range_x: f64,
    pub range_y: f64,
    pub num_x_ticks: usize,
    pub num_y_ticks: usize,
    /// Left edge of the plot rect, in surface pixels.
    pub origin_x: f32,
    /// Top edge of the plot rect, in surface pixels.
    pub origin_y: f32,
    pub plot_w: f32,
    pub plot_h: f32,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Layout {
    /// Compute the layout for a surface of `width` x `height` pixels.
    ///
    /// `measure` returns the rendered width of a label string in the
    /// configured font; the left margin is sized by the widest Y label so
    /// none of them clip. Degenerate configurations are not rejected: a
    /// zero range produces a non-finite scale.
    pub fn compute(
        config: &ChartConfig,
        style: &ChartStyle,
        width: i32,
        height: i32,
        measure: impl Fn(&str) -> f32,
    ) -> Self {
        let range_x = config.max_x - config.min_x;
        let range_y = config.max_y - config.min_y;
        let num_x_ticks = (range_x / config.units_per_tick_x).round() as usize;
        let num_y_ticks = (range_y / config.units_per_tick_y).round() as usize;

        let mut longest = 0.0f32;
        for n in 0..=num_y_ticks {
            let value = config.max_y - n as f64 * config.units_per_tick_y;
            longest = longest.max(measure(&format_value(value)));
        }

        let origin_x = longest + style.padding * 2.0;
        let origin_y = style.padding * 2.0;
        let plot_w = width as f32 - origin_x - style.padding;
        let plot_h = height as f32 - origin_y - style.padding - style.font_size;
        let scale_x = plot_w as f64 / range_x;
        let scale_y = plot_h as f64 / range_y;

        Self {
            range_x,
            range_y,
            num_x_ticks,
            num_y_ticks,
            origin_x,
            origin_y,
            plot_w,
            plot_h,
            scale_x,
            scale_y,
        }
    }

    /// Pixel x of X-axis tick `n` (0-based; tick `n` sits at (n+1)/num of
    /// the plot width).
    #[inline]
    pub fn x_tick_px(&self, n: usize) -> f32 {
        self.origin_x + (n + 1) as f32 * self.plot_w / self.num_x_ticks as f32
    }

    /// Pixel y of Y-axis tick row `n` (0-based from the top of the plot).
    #[inline]
    pub fn y_tick_px(&self, n: usize) -> f32 {
        self.origin_y + n as f32 * self.plot_h / self.num_y_ticks as f32
    }

    /// Label value at X-axis tick `n`.
    #[inline]
    pub fn x_tick_value(&self, n: usize) -> i64 {
        ((n + 1) as f64 * self.range_x / self.num_x_ticks as f64).round() as i64
    }

    /// Label value at Y-axis tick row `n`.
    #[inline]
    pub fn y_tick_value(&self, n: usize) -> i64 {
        (self.range_y - n as f64 * self.range_y / self.num_y_ticks as f64).round() as i64
    }

    /// Plot-local offset of a data point, before the y flip.
    #[inline]
    pub fn data_to_plot(&self, x: f64, y: f64) -> (f32, f32) {
        ((x * self.scale_x) as f32, (y * self.scale_y) as f32)
    }

    /// Surface-pixel position of a data point after the y flip.
    #[inline]
    pub fn data_to_surface(&self, x: f64, y: f64) -> (f32, f32) {
        let (px, py) = self.data_to_plot(x, y);
        (self.origin_x + px, self.origin_y + self.plot_h - py)
    }
}

/// Format a label value the way the axis renders it: integral values
/// print without a decimal point.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
