// File: crates/colplot-core/tests/compose.rs
// Purpose: Series selection, ordering and palette index continuity.

use colplot_core::{
    select_columns, ColorPalette, ColumnSelection, Dataset, LabelOverrides, Legend, Mode, PlotComposer, Row, Style,
    YColumns,
};

fn dataset(name: &str, legend: Option<&[&str]>, rows: &[&[f64]]) -> Dataset {
    Dataset::new(
        name,
        legend.map(|l| Legend::new(l.iter().copied())),
        rows.iter().map(|r| Row::new(r.to_vec())).collect(),
    )
}

#[test]
fn selection_skips_x_column() {
    assert_eq!(select_columns(3, &ColumnSelection::new(0, YColumns::All)), vec![1, 2]);
    assert_eq!(select_columns(3, &ColumnSelection::new(1, YColumns::All)), vec![0, 2]);
    assert_eq!(select_columns(3, &ColumnSelection::new(0, YColumns::Single(2))), vec![2]);
    assert!(select_columns(3, &ColumnSelection::new(1, YColumns::Single(1))).is_empty());
    assert!(select_columns(0, &ColumnSelection::new(0, YColumns::All)).is_empty());
}

#[test]
fn two_column_file_yields_one_series() {
    let palette = ColorPalette::new();
    let composer = PlotComposer::new(ColumnSelection::default(), &palette, Style::default());
    let ds = dataset("tv.res", Some(&["t", "v"]), &[&[0.0, 1.0], &[1.0, 3.0]]);

    let chart = composer.per_file(&ds, &LabelOverrides::default());
    assert_eq!(chart.series.len(), 1);
    let s = &chart.series[0];
    assert_eq!((s.x_col, s.y_col), (0, 1));
    assert_eq!(s.legend, "v");
    assert_eq!(s.palette_index, 0);
    assert_eq!(s.points, vec![(0.0, 1.0), (1.0, 3.0)]);
}

#[test]
fn combined_palette_indices_continue_across_datasets() {
    let palette = ColorPalette::new();
    let composer = PlotComposer::new(ColumnSelection::default(), &palette, Style::default());
    let a = dataset("a.res", Some(&["t", "p", "q"]), &[&[0.0, 1.0, 2.0]]);
    let b = dataset("b.res", Some(&["t", "r", "s"]), &[&[5.0, 6.0, 7.0]]);

    let charts = composer.compose(&[a, b], &LabelOverrides::default(), Mode::Combined);
    assert_eq!(charts.len(), 1);
    let chart = &charts[0];

    let indices: Vec<usize> = chart.series.iter().map(|s| s.palette_index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    let legends: Vec<&str> = chart.series.iter().map(|s| s.legend.as_str()).collect();
    assert_eq!(legends, vec!["p", "q", "r", "s"]);
    assert_eq!(chart.series[2].color, palette.color_for(2));

    // x values come from the series' own dataset
    assert_eq!(chart.series[0].points, vec![(0.0, 1.0)]);
    assert_eq!(chart.series[3].points, vec![(5.0, 7.0)]);

    // labels from the first dataset
    assert_eq!(chart.title, "a.res");
    assert_eq!(chart.y_label, "p-q");
    assert_eq!(chart.output, std::path::PathBuf::from("a.png"));
}

#[test]
fn per_file_restarts_palette_indices() {
    let palette = ColorPalette::new();
    let composer = PlotComposer::new(ColumnSelection::default(), &palette, Style::default());
    let a = dataset("a.res", None, &[&[0.0, 1.0, 2.0]]);
    let b = dataset("b.res", None, &[&[0.0, 1.0, 2.0]]);

    let charts = composer.compose(&[a, b], &LabelOverrides::default(), Mode::PerFile);
    assert_eq!(charts.len(), 2);
    for chart in &charts {
        let indices: Vec<usize> = chart.series.iter().map(|s| s.palette_index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert!(chart.series.iter().all(|s| s.legend.is_empty()));
        assert_eq!((chart.x_label.as_str(), chart.y_label.as_str()), ("x", "y"));
    }
    assert_eq!(charts[1].output, std::path::PathBuf::from("b.png"));
}

#[test]
fn single_y_column_and_non_zero_x() {
    let palette = ColorPalette::new();
    let composer = PlotComposer::new(ColumnSelection::new(2, YColumns::Single(0)), &palette, Style::default());
    let ds = dataset("c.res", Some(&["a", "b", "c"]), &[&[1.0, 2.0, 10.0], &[3.0, 4.0, 20.0]]);

    let chart = composer.per_file(&ds, &LabelOverrides::default());
    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.series[0].legend, "a");
    assert_eq!(chart.series[0].points, vec![(10.0, 1.0), (20.0, 3.0)]);
    assert_eq!(chart.x_label, "c");
    assert_eq!(chart.y_label, "a");
}

#[test]
fn empty_dataset_contributes_no_series() {
    let palette = ColorPalette::new();
    let composer = PlotComposer::new(ColumnSelection::default(), &palette, Style::default());
    let empty = dataset("empty.res", Some(&["t", "v"]), &[]);
    let full = dataset("full.res", None, &[&[0.0, 1.0]]);

    let chart = composer.combined(&[empty, full], &LabelOverrides::default()).expect("chart");
    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.series[0].palette_index, 0);
    assert_eq!(chart.title, "empty.res");
}

#[test]
fn combined_without_datasets_is_none() {
    let palette = ColorPalette::new();
    let composer = PlotComposer::new(ColumnSelection::default(), &palette, Style::default());
    assert!(composer.combined(&[], &LabelOverrides::default()).is_none());
    assert!(composer.compose(&[], &LabelOverrides::default(), Mode::Combined).is_empty());
}

#[test]
fn overrides_win_over_legend() {
    let palette = ColorPalette::new();
    let composer = PlotComposer::new(ColumnSelection::default(), &palette, Style::default());
    let ds = dataset("a.res", Some(&["t", "v"]), &[&[0.0, 1.0]]);
    let overrides = LabelOverrides {
        title: Some("Throughput".into()),
        x_label: Some("nb".into()),
        y_label: Some("size".into()),
        output: Some("graphic.png".into()),
    };

    let chart = composer.per_file(&ds, &overrides);
    assert_eq!(chart.title, "Throughput");
    assert_eq!(chart.x_label, "nb");
    assert_eq!(chart.y_label, "size");
    assert_eq!(chart.output, std::path::PathBuf::from("graphic.png"));
    // series legends still come from the file
    assert_eq!(chart.series[0].legend, "v");
}

#[test]
fn print_data_lists_points_per_series() {
    let palette = ColorPalette::new();
    let composer = PlotComposer::new(ColumnSelection::default(), &palette, Style::default());
    let ds = dataset("a.res", Some(&["t", "v"]), &[&[0.0, 1.5], &[1.0, 2.0]]);
    let chart = composer.per_file(&ds, &LabelOverrides::default());

    let mut out = Vec::new();
    chart.print_data(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a.res v\n\t0 1.5\n\t1 2\n");
}

#[test]
fn dataset_dump_lists_rows_then_legend() {
    let ds = dataset("a.res", Some(&["t", "v"]), &[&[0.0, 1.5], &[1.0, 2.0]]);
    let mut out = Vec::new();
    ds.print_data(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a.res data:\n\t0 1.5\n\t1 2\na.res legend: t v\n");

    let bare = dataset("b.res", None, &[&[3.0, 4.0]]);
    let mut out = Vec::new();
    bare.print_data(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "b.res data:\n\t3 4\nb.res legend: \n");
}
