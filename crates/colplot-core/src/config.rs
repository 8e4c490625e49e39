// File: crates/colplot-core/src/config.rs
// Summary: Immutable options resolved once from the command line and shared by reference.

use std::fmt;

/// How input files are split into legend, comments and data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Lines whose trimmed text starts with this prefix are skipped.
    /// An empty prefix disables comment detection.
    pub comment: String,
    /// The first physical line is a header holding the column names.
    pub header: bool,
    /// Reject data lines wider than the first data line.
    pub strict_width: bool,
}

impl ParseOptions {
    pub fn is_comment(&self, trimmed: &str) -> bool {
        !self.comment.is_empty() && trimmed.starts_with(self.comment.as_str())
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { comment: "#".to_string(), header: true, strict_width: false }
    }
}

/// Which y columns to plot against the x column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YColumns {
    /// Every column except the x column.
    All,
    Single(usize),
}

impl YColumns {
    /// Maps the command-line convention (`-1` = all columns) to a selection.
    /// Returns `None` for anything below `-1`.
    pub fn from_sentinel(ycol: i64) -> Option<Self> {
        match ycol {
            -1 => Some(YColumns::All),
            c if c >= 0 => usize::try_from(c).ok().map(YColumns::Single),
            _ => None,
        }
    }
}

impl fmt::Display for YColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YColumns::All => f.write_str("all"),
            YColumns::Single(c) => write!(f, "{c}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSelection {
    pub x: usize,
    pub y: YColumns,
}

impl ColumnSelection {
    pub const fn new(x: usize, y: YColumns) -> Self {
        Self { x, y }
    }

    /// True when every referenced column exists in a file with `ncol` columns.
    pub fn fits(&self, ncol: usize) -> bool {
        if self.x >= ncol {
            return false;
        }
        match self.y {
            YColumns::All => true,
            YColumns::Single(c) => c < ncol,
        }
    }
}

impl Default for ColumnSelection {
    fn default() -> Self {
        Self::new(0, YColumns::All)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderStyle {
    #[default]
    Line,
    Points,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    #[default]
    Bottom,
}

/// Presentation settings shared by every chart of one invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub render: RenderStyle,
    /// Horizontal axis length in centimetres.
    pub x_length_cm: f64,
    /// Vertical axis length in centimetres.
    pub y_length_cm: f64,
    pub legend: LegendPosition,
    /// Print each series' points while drawing.
    pub print: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            render: RenderStyle::Line,
            x_length_cm: 10.0,
            y_length_cm: 10.0,
            legend: LegendPosition::Bottom,
            print: false,
        }
    }
}
