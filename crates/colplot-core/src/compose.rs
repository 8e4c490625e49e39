// File: crates/colplot-core/src/compose.rs
// Summary: Turns parsed datasets into chart descriptions: column selection, series order and palette indices.
// Notes:
// - Palette indices run 0, 1, 2, ... over every series of one chart, across dataset boundaries.
// - Each series takes its x values from the same dataset as its y values.

use tracing::debug;

use crate::chart::{ChartSpec, SeriesSpec};
use crate::config::{ColumnSelection, Style, YColumns};
use crate::dataset::Dataset;
use crate::labels::{ChartLabels, LabelOverrides};
use crate::palette::ColorPalette;

/// How many charts a set of datasets becomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Every dataset on a single chart.
    Combined,
    /// One independent chart per dataset.
    PerFile,
}

/// Y columns plotted for a dataset with `ncol` columns, in ascending order.
/// The x column is never part of the result.
pub fn select_columns(ncol: usize, columns: &ColumnSelection) -> Vec<usize> {
    match columns.y {
        YColumns::All => (0..ncol).filter(|&c| c != columns.x).collect(),
        YColumns::Single(c) if c < ncol && c != columns.x => vec![c],
        YColumns::Single(_) => Vec::new(),
    }
}

pub struct PlotComposer<'a> {
    columns: ColumnSelection,
    palette: &'a ColorPalette,
    style: Style,
}

impl<'a> PlotComposer<'a> {
    pub fn new(columns: ColumnSelection, palette: &'a ColorPalette, style: Style) -> Self {
        Self { columns, palette, style }
    }

    pub fn columns(&self) -> &ColumnSelection { &self.columns }

    pub fn style(&self) -> &Style { &self.style }

    pub fn compose(&self, datasets: &[Dataset], overrides: &LabelOverrides, mode: Mode) -> Vec<ChartSpec> {
        match mode {
            Mode::Combined => self.combined(datasets, overrides).into_iter().collect(),
            Mode::PerFile => datasets.iter().map(|d| self.per_file(d, overrides)).collect(),
        }
    }

    /// All datasets on one chart, labeled from the first dataset.
    /// Returns `None` when there is no dataset to label the chart from.
    pub fn combined(&self, datasets: &[Dataset], overrides: &LabelOverrides) -> Option<ChartSpec> {
        let first = datasets.first()?;
        let labels = ChartLabels::derive(overrides, first, &self.columns);
        let mut chart = ChartSpec::new(labels, self.style);
        let mut next_index = 0usize;
        for dataset in datasets {
            self.push_series(dataset, &mut next_index, &mut chart);
        }
        debug!(output = %chart.output.display(), series = chart.series.len(), "composed combined chart");
        Some(chart)
    }

    /// One chart for one dataset; palette indices start at 0.
    pub fn per_file(&self, dataset: &Dataset, overrides: &LabelOverrides) -> ChartSpec {
        let labels = ChartLabels::derive(overrides, dataset, &self.columns);
        let mut chart = ChartSpec::new(labels, self.style);
        let mut next_index = 0usize;
        self.push_series(dataset, &mut next_index, &mut chart);
        debug!(output = %chart.output.display(), series = chart.series.len(), "composed chart");
        chart
    }

    fn push_series(&self, dataset: &Dataset, next_index: &mut usize, chart: &mut ChartSpec) {
        if dataset.is_empty() {
            return;
        }
        let legend = dataset.legend();
        for y_col in select_columns(dataset.ncol(), &self.columns) {
            let palette_index = *next_index;
            *next_index += 1;
            chart.add_series(SeriesSpec {
                x_col: self.columns.x,
                y_col,
                legend: legend.and_then(|l| l.get(y_col)).unwrap_or_default().to_string(),
                palette_index,
                color: self.palette.color_for(palette_index),
                points: dataset.xy(self.columns.x, y_col),
            });
        }
    }
}
