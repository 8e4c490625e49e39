// File: crates/colplot-core/tests/render_smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs from parsed files.

use std::path::PathBuf;

use colplot_core::types::Insets;
use colplot_core::{
    parse_file, ColorPalette, ColumnSelection, LabelOverrides, ParseOptions, PlotComposer, RenderOptions, RenderStyle,
    Style,
};

fn out_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("target/test_out");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn sample_file(name: &str) -> PathBuf {
    let path = out_dir().join(name);
    let mut text = String::from("#t sin cos\n");
    for i in 0..50 {
        let t = i as f64 * 0.2;
        text.push_str(&format!("{t} {} {}\n", t.sin(), t.cos()));
    }
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn render_smoke_png() {
    let input = sample_file("smoke_lines.res");
    let ds = parse_file(&input, &ParseOptions::default(), &ColumnSelection::default()).expect("parse");

    let palette = ColorPalette::new();
    let composer = PlotComposer::new(ColumnSelection::default(), &palette, Style::default());
    let out = out_dir().join("smoke_lines.png");
    let overrides = LabelOverrides { output: Some(out.clone()), ..LabelOverrides::default() };
    let chart = composer.per_file(&ds, &overrides);
    assert_eq!(chart.series.len(), 2);

    chart.save().expect("render should succeed");
    let img = image::open(&out).expect("decode png").to_rgba8();
    // 10 cm at 96 dpi
    assert_eq!(img.dimensions(), (378, 378));

    // some pixel carries the first series' red
    assert!(img.pixels().any(|p| p[0] > 200 && p[1] < 80 && p[2] < 80), "no red series pixels");
}

#[test]
fn render_points_rgba8_buffer() {
    let input = sample_file("smoke_points.res");
    let ds = parse_file(&input, &ParseOptions::default(), &ColumnSelection::default()).expect("parse");

    let palette = ColorPalette::new();
    let style = Style { render: RenderStyle::Points, ..Style::default() };
    let composer = PlotComposer::new(ColumnSelection::default(), &palette, style);
    let chart = composer.per_file(&ds, &LabelOverrides::default());

    let mut opts = RenderOptions::from_style(&style);
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // white, opaque background in the top-left corner
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
    // blue points of the second series
    assert!(px.chunks_exact(4).any(|p| p[2] > 200 && p[0] < 80 && p[1] < 80), "no blue series pixels");
}

#[test]
fn png_bytes_have_png_header_and_custom_size() {
    let input = sample_file("smoke_bytes.res");
    let ds = parse_file(&input, &ParseOptions::default(), &ColumnSelection::default()).expect("parse");
    let palette = ColorPalette::new();
    let style = Style { x_length_cm: 15.0, y_length_cm: 5.0, ..Style::default() };
    let composer = PlotComposer::new(ColumnSelection::default(), &palette, style);
    let chart = composer.per_file(&ds, &LabelOverrides::default());

    let bytes = chart.render_to_png_bytes(&RenderOptions::from_style(&style)).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode");
    assert_eq!((img.width(), img.height()), (567, 189));
}

#[test]
fn empty_chart_still_renders() {
    let input = out_dir().join("smoke_empty.res");
    std::fs::write(&input, "#t v\n# nothing yet\n").unwrap();
    let ds = parse_file(&input, &ParseOptions::default(), &ColumnSelection::default()).expect("parse");
    let palette = ColorPalette::new();
    let composer = PlotComposer::new(ColumnSelection::default(), &palette, Style::default());
    let chart = composer.per_file(&ds, &LabelOverrides::default());
    assert!(chart.series.is_empty());

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn unwritable_output_leaves_no_file() {
    let input = sample_file("smoke_unwritable.res");
    let ds = parse_file(&input, &ParseOptions::default(), &ColumnSelection::default()).expect("parse");
    let palette = ColorPalette::new();
    let composer = PlotComposer::new(ColumnSelection::default(), &palette, Style::default());

    // parent "directory" is a regular file
    let blocker = out_dir().join("smoke_blocker");
    std::fs::write(&blocker, "not a dir").unwrap();
    let out = blocker.join("chart.png");
    let overrides = LabelOverrides { output: Some(out.clone()), ..LabelOverrides::default() };
    let chart = composer.per_file(&ds, &overrides);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    assert!(chart.render_to_png(&opts, &chart.output).is_err());
    assert!(!out.exists());
}

#[test]
fn insets_shrink_to_fit_a_tiny_canvas() {
    let fitted = Insets::default().fit(38, 38);
    assert!(fitted.hsum() <= 19 && fitted.vsum() <= 19, "{fitted:?}");
    assert!(fitted.left > fitted.right, "left margin keeps its larger share");
    // roomy canvases keep the defaults
    assert_eq!(Insets::default().fit(378, 378), Insets::default());
}

#[test]
fn one_centimetre_chart_renders_upright() {
    let input = sample_file("smoke_tiny.res");
    let ds = parse_file(&input, &ParseOptions::default(), &ColumnSelection::default()).expect("parse");
    let palette = ColorPalette::new();
    let style = Style { x_length_cm: 1.0, y_length_cm: 1.0, ..Style::default() };
    let composer = PlotComposer::new(ColumnSelection::default(), &palette, style);
    let chart = composer.per_file(&ds, &LabelOverrides::default());

    let mut opts = RenderOptions::from_style(&style);
    opts.draw_labels = false;
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (38, 38));

    // the y axis sits at the fitted left inset, not mirrored to the right edge
    let left = Insets::default().fit(38, 38).left as usize;
    let mid_row = h as usize / 2;
    let axis_px = &px[mid_row * stride + left * 4..mid_row * stride + left * 4 + 4];
    assert!(axis_px[0] < 200, "expected a dark axis pixel at x={left}, got {axis_px:?}");
}
