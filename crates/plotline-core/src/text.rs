// File: crates/plotline-core/src/text.rs
// Summary: Label measurement and anchored drawing using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        // Prefer monospaced/tabular-number families for numeric alignment
        style.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Rendered width of `text` at `size`.
    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        p.longest_line()
    }

    /// Draw `text` centered horizontally and vertically on (x, y).
    pub fn draw_centered(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
    ) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let h = p.height();
        p.paint(canvas, (x - w * 0.5, y - h * 0.5));
    }

    /// Draw `text` right-aligned at x, vertically centered on y.
    pub fn draw_right(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
    ) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let h = p.height();
        p.paint(canvas, (x - w, y - h * 0.5));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
