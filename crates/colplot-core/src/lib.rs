// File: crates/colplot-core/src/lib.rs
// Summary: Core library entry point; parsing, label derivation, series composition and PNG rendering.

pub mod axis;
pub mod chart;
pub mod compose;
pub mod config;
pub mod dataset;
pub mod error;
pub mod grid;
pub mod labels;
pub mod palette;
pub mod parse;
pub mod text;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use chart::{ChartSpec, SeriesSpec};
pub use compose::{select_columns, Mode, PlotComposer};
pub use config::{ColumnSelection, LegendPosition, ParseOptions, RenderStyle, Style, YColumns};
pub use dataset::{Dataset, Legend, Row};
pub use error::{ParseError, RenderError};
pub use labels::{ChartLabels, LabelOverrides};
pub use palette::ColorPalette;
pub use parse::{parse_file, parse_reader};
pub use text::TextShaper;
pub use types::RenderOptions;
pub use view::Extents;
