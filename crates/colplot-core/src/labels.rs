// File: crates/colplot-core/src/labels.rs
// Summary: Axis labels, title and output name derived from overrides, legend and file name.
// Each value is taken from the first of: explicit override, legend, default.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::{ColumnSelection, YColumns};
use crate::dataset::{Dataset, Legend};

pub const DEFAULT_X_LABEL: &str = "x";
pub const DEFAULT_Y_LABEL: &str = "y";

/// Values given on the command line; `None` or empty means "derive it".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelOverrides {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub output: Option<PathBuf>,
}

/// Labels for one chart, derived once per chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub output: PathBuf,
}

impl ChartLabels {
    /// Derive every label from `dataset` (the first dataset of a combined chart).
    pub fn derive(overrides: &LabelOverrides, dataset: &Dataset, columns: &ColumnSelection) -> Self {
        let legend = dataset.legend();
        Self {
            title: title(overrides.title.as_deref(), dataset.source()),
            x_label: x_label(overrides.x_label.as_deref(), legend, columns.x),
            y_label: y_label(overrides.y_label.as_deref(), legend, columns),
            output: output_path(overrides.output.as_deref(), dataset.source()),
        }
    }
}

fn explicit(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub fn x_label(explicit_label: Option<&str>, legend: Option<&Legend>, xcol: usize) -> String {
    if let Some(label) = explicit(explicit_label) {
        return label.to_string();
    }
    match legend {
        Some(legend) => legend_name(legend, xcol, DEFAULT_X_LABEL),
        None => DEFAULT_X_LABEL.to_string(),
    }
}

/// With every y column selected, the label joins all legend names except the
/// x column's with `-`.
pub fn y_label(explicit_label: Option<&str>, legend: Option<&Legend>, columns: &ColumnSelection) -> String {
    if let Some(label) = explicit(explicit_label) {
        return label.to_string();
    }
    let Some(legend) = legend else {
        return DEFAULT_Y_LABEL.to_string();
    };
    match columns.y {
        YColumns::All => legend
            .names()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != columns.x)
            .map(|(_, name)| name.as_str())
            .collect::<Vec<_>>()
            .join("-"),
        YColumns::Single(c) => legend_name(legend, c, DEFAULT_Y_LABEL),
    }
}

/// Explicit title, else the file's base name with its extension.
pub fn title(explicit_title: Option<&str>, source: &Path) -> String {
    if let Some(t) = explicit(explicit_title) {
        return t.to_string();
    }
    base_name(source)
}

/// Explicit output path, else the file's base name with a `.png` extension.
pub fn output_path(explicit_output: Option<&Path>, source: &Path) -> PathBuf {
    if let Some(out) = explicit_output.filter(|p| !p.as_os_str().is_empty()) {
        return out.to_path_buf();
    }
    PathBuf::from(base_name(source)).with_extension("png")
}

fn base_name(source: &Path) -> String {
    source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.to_string_lossy().into_owned())
}

fn legend_name(legend: &Legend, column: usize, fallback: &str) -> String {
    match legend.get(column) {
        Some(name) => name.to_string(),
        None => {
            warn!(column, legend = legend.len(), "legend has no name for column");
            fallback.to_string()
        }
    }
}
