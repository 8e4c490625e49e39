// File: crates/colplot-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with the system font manager.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Liberation Sans", "Arial", "Helvetica", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, self.fonts.clone());
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT).longest_line()
    }

    /// Draw with the baseline at `y`, starting at `x`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw centred horizontally on `cx`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color) {
        let w = self.measure_width(text, size);
        self.draw_left(canvas, text, cx - w * 0.5, y, size, color);
    }

    /// Draw ending at `right`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, y: f32, size: f32, color: skia::Color) {
        let w = self.measure_width(text, size);
        self.draw_left(canvas, text, right - w, y, size, color);
    }

    /// Draw rotated a quarter turn counter-clockwise, centred on (`x`, `cy`).
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, x: f32, cy: f32, size: f32, color: skia::Color) {
        canvas.save();
        canvas.translate((x, cy));
        canvas.rotate(-90.0, None);
        self.draw_centered(canvas, text, 0.0, 0.0, size, color);
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
