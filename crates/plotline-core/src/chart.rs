// File: crates/plotline-core/src/chart.rs
// Summary: LineChart render pipeline over Skia CPU raster surfaces.

use skia_safe as skia;

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::layout::Layout;
use crate::style::ChartStyle;
use crate::text::TextShaper;

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 500;

#[derive(Clone)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
    /// Disable tick labels to keep render output deterministic across
    /// font environments (layout is still measured).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: skia::Color::from_argb(255, 250, 250, 252), // near-white
            draw_labels: true,
        }
    }
}

/// A single-series line chart with a layout fixed at construction.
///
/// Construction measures the Y-axis labels to size the left margin and
/// derives scales from the surface bounds in `RenderOptions`. There is no
/// dynamic resize; rebuild the chart for a new surface size.
pub struct LineChart {
    config: ChartConfig,
    style: ChartStyle,
    opts: RenderOptions,
    shaper: TextShaper,
    layout: Layout,
}

impl LineChart {
    /// Build a chart with the default (light) style.
    pub fn new(config: ChartConfig, opts: RenderOptions) -> Self {
        Self::with_style(config, ChartStyle::light(), opts)
    }

    pub fn with_style(config: ChartConfig, style: ChartStyle, opts: RenderOptions) -> Self {
        let shaper = TextShaper::new();
        let layout = Layout::compute(&config, &style, opts.width, opts.height, |s| {
            shaper.measure_width(s, style.font_size)
        });
        Self { config, style, opts, shaper, layout }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Render one full frame onto `canvas`: clear, both axes, then the
    /// data polyline with a filled marker on every point.
    ///
    /// Axes are stateless relative to the dataset and are redrawn from
    /// scratch on every call.
    pub fn draw_line(
        &self,
        canvas: &skia::Canvas,
        data: &[(f64, f64)],
        color: skia::Color,
        stroke_width: f32,
    ) {
        canvas.save();
        canvas.clear(self.opts.background);
        self.draw_x_axis(canvas);
        self.draw_y_axis(canvas);

        // Move the origin to the plot's bottom-left corner and flip y so
        // increasing data values draw upward.
        canvas.translate((self.layout.origin_x, self.layout.origin_y + self.layout.plot_h));
        canvas.scale((1.0, -1.0));

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(stroke_width);
        stroke.set_color(color);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color);

        if let Some(&(x0, y0)) = data.first() {
            if data.len() >= 2 {
                let mut builder = skia::PathBuilder::new();
                builder.move_to(self.layout.data_to_plot(x0, y0));
                for &(x, y) in &data[1..] {
                    builder.line_to(self.layout.data_to_plot(x, y));
                }
                let path = builder.detach();
                canvas.draw_path(&path, &stroke);
            }
            for &(x, y) in data {
                let center = self.layout.data_to_plot(x, y);
                canvas.draw_circle(center, self.style.point_radius, &fill);
            }
        }

        canvas.restore();
    }

    /// Render to a PNG file, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        data: &[(f64, f64)],
        color: skia::Color,
        stroke_width: f32,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), ChartError> {
        let bytes = self.render_to_png_bytes(data, color, stroke_width)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to PNG-encoded bytes.
    pub fn render_to_png_bytes(
        &self,
        data: &[(f64, f64)],
        color: skia::Color,
        stroke_width: f32,
    ) -> Result<Vec<u8>, ChartError> {
        let mut surface = self.raster_surface()?;
        self.draw_line(surface.canvas(), data, color, stroke_width);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let png = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::PngEncode)?;
        Ok(png.as_bytes().to_vec())
    }

    /// Render to a raw RGBA8 buffer; returns (pixels, width, height, stride).
    pub fn render_to_rgba8(
        &self,
        data: &[(f64, f64)],
        color: skia::Color,
        stroke_width: f32,
    ) -> Result<(Vec<u8>, i32, i32, usize), ChartError> {
        let mut surface = self.raster_surface()?;
        self.draw_line(surface.canvas(), data, color, stroke_width);

        let (w, h) = (self.opts.width, self.opts.height);
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, w, h, stride))
    }

    fn raster_surface(&self) -> Result<skia::Surface, ChartError> {
        skia::surfaces::raster_n32_premul((self.opts.width, self.opts.height)).ok_or(
            ChartError::SurfaceCreate { width: self.opts.width, height: self.opts.height },
        )
    }

    fn draw_x_axis(&self, canvas: &skia::Canvas) {
        let l = &self.layout;
        let paint = axis_paint(self.style.axis_line);
        let axis_y = l.origin_y + l.plot_h;
        canvas.draw_line((l.origin_x, axis_y), (l.origin_x + l.plot_w, axis_y), &paint);

        // Tick marks rise from the axis line into the plot.
        for n in 0..l.num_x_ticks {
            let x = l.x_tick_px(n);
            canvas.draw_line((x, axis_y), (x, axis_y - self.style.tick_size), &paint);
        }

        if self.opts.draw_labels {
            for n in 0..l.num_x_ticks {
                let text = format!("{}", l.x_tick_value(n));
                self.shaper.draw_centered(
                    canvas,
                    &text,
                    l.x_tick_px(n),
                    axis_y + self.style.padding,
                    self.style.font_size,
                    self.style.label,
                );
            }
        }
    }

    fn draw_y_axis(&self, canvas: &skia::Canvas) {
        let l = &self.layout;
        let paint = axis_paint(self.style.axis_line);
        canvas.draw_line((l.origin_x, l.origin_y), (l.origin_x, l.origin_y + l.plot_h), &paint);

        // Tick marks extend right from the axis line.
        for n in 0..l.num_y_ticks {
            let y = l.y_tick_px(n);
            canvas.draw_line((l.origin_x, y), (l.origin_x + self.style.tick_size, y), &paint);
        }

        if self.opts.draw_labels {
            for n in 0..l.num_y_ticks {
                let text = format!("{}", l.y_tick_value(n));
                self.shaper.draw_right(
                    canvas,
                    &text,
                    l.origin_x - self.style.padding,
                    l.y_tick_px(n),
                    self.style.font_size,
                    self.style.label,
                );
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn axis_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(2.0);
    paint.set_color(color);
    paint
}
