// File: crates/colplot-core/src/chart.rs
// Summary: Composed chart description and its headless PNG rendering via Skia CPU raster surfaces.
// Notes:
// - A `ChartSpec` owns its points; the renderer never sees datasets.
// - PNG bytes are built in memory and land on disk through a temp file + rename,
//   so a failed render leaves no partial image behind.

use std::fs;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use skia_safe as skia;
use tracing::info;

use crate::axis::Axis;
use crate::config::{LegendPosition, RenderStyle, Style};
use crate::error::RenderError;
use crate::grid::{format_x_tick, format_y_tick, nice_step, ticks};
use crate::labels::ChartLabels;
use crate::text::TextShaper;
use crate::types::RenderOptions;
use crate::view::Extents;

const TICK_TARGET: usize = 5;
const POINT_RADIUS: f32 = 2.0;
const LINE_WIDTH: f32 = 1.5;
const TITLE_SIZE: f32 = 14.0;
const LABEL_SIZE: f32 = 12.0;
const TICK_SIZE: f32 = 10.0;

/// One plotted line or scatter trace.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSpec {
    pub x_col: usize,
    pub y_col: usize,
    /// Legend text; empty when the source file had no legend.
    pub legend: String,
    /// Position of the series within its chart.
    pub palette_index: usize,
    pub color: skia::Color,
    pub points: Vec<(f64, f64)>,
}

#[derive(Clone, Debug)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<SeriesSpec>,
    pub output: PathBuf,
    pub style: Style,
}

impl ChartSpec {
    pub fn new(labels: ChartLabels, style: Style) -> Self {
        Self {
            title: labels.title,
            x_label: labels.x_label,
            y_label: labels.y_label,
            series: Vec::new(),
            output: labels.output,
            style,
        }
    }

    pub fn add_series(&mut self, series: SeriesSpec) {
        self.series.push(series);
    }

    /// Axes autoscaled to the data.
    pub fn axes(&self) -> (Axis, Axis) {
        let e = Extents::from_series(&self.series);
        (
            Axis::new(self.x_label.clone(), e.x_min, e.x_max),
            Axis::new(self.y_label.clone(), e.y_min, e.y_max),
        )
    }

    /// Write every series as a `<title> <legend>` header followed by tab-indented points.
    pub fn print_data<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for s in &self.series {
            writeln!(out, "{} {}", self.title, s.legend)?;
            for (x, y) in &s.points {
                writeln!(out, "\t{x} {y}")?;
            }
        }
        Ok(())
    }

    /// Render with options derived from the chart's style and write to `self.output`.
    pub fn save(&self) -> Result<(), RenderError> {
        self.render_to_png(&RenderOptions::from_style(&self.style), &self.output)
    }

    /// Render into an RGBA8 buffer: (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let image = image::RgbaImage::from_raw(w, h, pixels).ok_or(RenderError::ReadPixels)?;
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        let io_err = |source: io::Error| RenderError::Io { path: path.to_path_buf(), source };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let tmp = temp_sibling(path);
        if let Err(e) = fs::write(&tmp, &bytes).and_then(|_| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(io_err(e));
        }
        info!(output = %path.display(), series = self.series.len(), "wrote chart");
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.background);

        let insets = opts.insets.fit(opts.width, opts.height);
        let frame = Frame {
            l: insets.left as f32,
            t: insets.top as f32,
            r: (opts.width - insets.right as i32) as f32,
            b: (opts.height - insets.bottom as i32) as f32,
        };
        let (x_axis, y_axis) = self.axes();
        let x_ticks = ticks(x_axis.min, x_axis.max, TICK_TARGET);
        let y_ticks = ticks(y_axis.min, y_axis.max, TICK_TARGET);

        draw_grid(canvas, &frame, &x_axis, &y_axis, &x_ticks, &y_ticks);

        canvas.save();
        canvas.clip_rect(frame.rect(), skia::ClipOp::Intersect, true);
        for s in &self.series {
            match self.style.render {
                RenderStyle::Line => draw_line_series(canvas, &frame, &x_axis, &y_axis, s),
                RenderStyle::Points => draw_point_series(canvas, &frame, &x_axis, &y_axis, s),
            }
        }
        canvas.restore();

        draw_axes(canvas, &frame);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_tick_labels(canvas, &shaper, &frame, &x_axis, &y_axis, &x_ticks, &y_ticks);
            draw_titles(canvas, &shaper, &frame, opts, &self.title, &x_axis, &y_axis);
            draw_legend(canvas, &shaper, &frame, self.style, &self.series);
        }
    }
}

/// Temporary file next to `path`, unique within the process.
fn temp_sibling(path: &Path) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(format!(".{}.{}.tmp", std::process::id(), COUNTER.fetch_add(1, Ordering::Relaxed)));
    path.with_file_name(name)
}

// ---- helpers ----------------------------------------------------------------

/// Plot area in pixels.
struct Frame {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

impl Frame {
    fn sx(&self, axis: &Axis, x: f64) -> f32 { axis.map(x, self.l, self.r) }
    fn sy(&self, axis: &Axis, y: f64) -> f32 { axis.map(y, self.b, self.t) }
    fn rect(&self) -> skia::Rect { skia::Rect::from_ltrb(self.l, self.t, self.r, self.b) }
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, f: &Frame, x: &Axis, y: &Axis, x_ticks: &[f64], y_ticks: &[f64]) {
    let paint = stroke(skia::Color::from_argb(255, 230, 230, 235), 1.0);
    for &v in x_ticks {
        let px = f.sx(x, v);
        canvas.draw_line((px, f.t), (px, f.b), &paint);
    }
    for &v in y_ticks {
        let py = f.sy(y, v);
        canvas.draw_line((f.l, py), (f.r, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, f: &Frame) {
    let paint = stroke(skia::Color::from_argb(255, 60, 60, 70), 1.0);
    canvas.draw_line((f.l, f.b), (f.r, f.b), &paint);
    canvas.draw_line((f.l, f.t), (f.l, f.b), &paint);
}

fn draw_line_series(canvas: &skia::Canvas, f: &Frame, x_axis: &Axis, y_axis: &Axis, series: &SeriesSpec) {
    if series.points.len() < 2 {
        return;
    }
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for &(x, y) in &series.points {
        if !x.is_finite() || !y.is_finite() {
            pen_down = false;
            continue;
        }
        let p = (f.sx(x_axis, x), f.sy(y_axis, y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }
    canvas.draw_path(&path, &stroke(series.color, LINE_WIDTH));
}

fn draw_point_series(canvas: &skia::Canvas, f: &Frame, x_axis: &Axis, y_axis: &Axis, series: &SeriesSpec) {
    let paint = fill(series.color);
    for &(x, y) in series.points.iter().filter(|(x, y)| x.is_finite() && y.is_finite()) {
        canvas.draw_circle((f.sx(x_axis, x), f.sy(y_axis, y)), POINT_RADIUS, &paint);
    }
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    f: &Frame,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
) {
    let color = skia::Color::from_argb(255, 40, 40, 50);
    let tick = stroke(color, 1.0);
    let x_step = nice_step(x_axis.max - x_axis.min, TICK_TARGET);
    for &v in x_ticks {
        let px = f.sx(x_axis, v);
        canvas.draw_line((px, f.b), (px, f.b + 4.0), &tick);
        shaper.draw_centered(canvas, &format_x_tick(v, x_step), px, f.b + 16.0, TICK_SIZE, color);
    }
    for &v in y_ticks {
        let py = f.sy(y_axis, v);
        canvas.draw_line((f.l - 4.0, py), (f.l, py), &tick);
        shaper.draw_right(canvas, &format_y_tick(v), f.l - 6.0, py + TICK_SIZE * 0.35, TICK_SIZE, color);
    }
}

fn draw_titles(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    f: &Frame,
    opts: &RenderOptions,
    title: &str,
    x_axis: &Axis,
    y_axis: &Axis,
) {
    let color = skia::Color::from_argb(255, 20, 20, 30);
    let cx = (f.l + f.r) * 0.5;
    if !title.is_empty() {
        shaper.draw_centered(canvas, title, cx, f.t * 0.5 + TITLE_SIZE * 0.4, TITLE_SIZE, color);
    }
    if !x_axis.label.is_empty() {
        shaper.draw_centered(canvas, &x_axis.label, cx, opts.height as f32 - 8.0, LABEL_SIZE, color);
    }
    if !y_axis.label.is_empty() {
        shaper.draw_vertical(canvas, &y_axis.label, LABEL_SIZE + 2.0, (f.t + f.b) * 0.5, LABEL_SIZE, color);
    }
}

fn draw_legend(canvas: &skia::Canvas, shaper: &TextShaper, f: &Frame, style: Style, series: &[SeriesSpec]) {
    let entries: Vec<&SeriesSpec> = series.iter().filter(|s| !s.legend.is_empty()).collect();
    if entries.is_empty() {
        return;
    }

    let pad = 4.0f32;
    let swatch = 14.0f32;
    let line_h = LABEL_SIZE + 4.0;
    let text_w = entries
        .iter()
        .map(|s| shaper.measure_width(&s.legend, LABEL_SIZE))
        .fold(0.0f32, f32::max);
    let w = pad * 3.0 + swatch + text_w;
    let h = pad * 2.0 + line_h * entries.len() as f32;
    let left = f.r - w - pad;
    let top = match style.legend {
        LegendPosition::Top => f.t + pad,
        LegendPosition::Bottom => f.b - h - pad,
    };

    let rect = skia::Rect::from_xywh(left, top, w, h);
    canvas.draw_rect(rect, &fill(skia::Color::from_argb(230, 255, 255, 255)));
    canvas.draw_rect(rect, &stroke(skia::Color::from_argb(255, 180, 180, 190), 1.0));

    let text_color = skia::Color::from_argb(255, 20, 20, 30);
    for (i, s) in entries.iter().enumerate() {
        let mid = top + pad + line_h * (i as f32 + 0.5);
        let sx = left + pad;
        match style.render {
            RenderStyle::Line => {
                canvas.draw_line((sx, mid), (sx + swatch, mid), &stroke(s.color, 2.0));
            }
            RenderStyle::Points => {
                canvas.draw_circle((sx + swatch * 0.5, mid), POINT_RADIUS + 1.0, &fill(s.color));
            }
        }
        shaper.draw_left(canvas, &s.legend, sx + swatch + pad, mid + LABEL_SIZE * 0.35, LABEL_SIZE, text_color);
    }
}
