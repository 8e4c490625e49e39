// File: crates/colplot/src/cli.rs
// Summary: Command-line options and their conversion into the core's immutable settings.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use colplot_core::{
    ColumnSelection, LabelOverrides, LegendPosition, Mode, ParseOptions, RenderStyle, Style, YColumns,
};

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(about = "Plot whitespace-separated numeric columns of one or more files to PNG charts")]
#[command(after_help = "Examples:\n  colplot file1.res file2.res file3.res\n  colplot 'file*'\n  colplot -a -r results '*.res'")]
pub(crate) struct Cli {
    /// Files to plot. Arguments containing `*` are expanded as glob patterns.
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub(crate) files: Vec<String>,

    /// Comment line prefix. An empty prefix disables comment skipping.
    #[arg(short, long, default_value = "#", allow_hyphen_values = true)]
    pub(crate) comment: String,

    /// The first line is data, not the column titles used for the legend.
    #[arg(long, alias = "nolegend", action = ArgAction::SetTrue)]
    pub(crate) no_header: bool,

    /// Name of the output graphic.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub(crate) output: Option<PathBuf>,

    /// Print the data while drawing.
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub(crate) print: bool,

    /// Draw points instead of lines.
    #[arg(long = "pt", alias = "points", action = ArgAction::SetTrue)]
    pub(crate) points: bool,

    /// Root folder of the files to process.
    #[arg(short, long, value_parser(parse_root), value_hint = ValueHint::DirPath)]
    pub(crate) root: Option<PathBuf>,

    /// Graphic title.
    #[arg(short, long)]
    pub(crate) title: Option<String>,

    /// X column number.
    #[arg(short = 'x', long, default_value_t = 0)]
    pub(crate) xcol: usize,

    /// Y column number; -1 plots every column except the x column.
    #[arg(short = 'y', long, default_value_t = -1, allow_negative_numbers = true, value_parser(parse_ycol))]
    pub(crate) ycol: i64,

    /// X axis label.
    #[arg(long)]
    pub(crate) xlabel: Option<String>,

    /// Y axis label.
    #[arg(long)]
    pub(crate) ylabel: Option<String>,

    /// Graphic X axis length in cm.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) xlength: u32,

    /// Graphic Y axis length in cm.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) ylength: u32,

    /// One graphic per file.
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub(crate) automation: bool,

    /// Put the legend at the top of the plot (default bottom).
    #[arg(long, action = ArgAction::SetTrue)]
    pub(crate) ytopleg: bool,

    /// Maximum number of series per graphic that get distinct colors.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
    pub(crate) max_series: u16,

    /// Reject data lines with more columns than the first data line.
    #[arg(long, action = ArgAction::SetTrue)]
    pub(crate) strict: bool,

    /// Debug logging.
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub(crate) verbose: bool,
}

impl Cli {
    pub(crate) fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            comment: self.comment.clone(),
            header: !self.no_header,
            strict_width: self.strict,
        }
    }

    /// Column selection; a y column equal to the x column is rejected.
    pub(crate) fn columns(&self) -> Result<ColumnSelection, String> {
        let y = YColumns::from_sentinel(self.ycol)
            .ok_or_else(|| format!("y column must be positive or -1: {}", self.ycol))?;
        if y == YColumns::Single(self.xcol) {
            return Err(format!("y column must differ from x column: {}", self.xcol));
        }
        Ok(ColumnSelection::new(self.xcol, y))
    }

    pub(crate) fn style(&self) -> Style {
        Style {
            render: if self.points { RenderStyle::Points } else { RenderStyle::Line },
            x_length_cm: f64::from(self.xlength),
            y_length_cm: f64::from(self.ylength),
            legend: if self.ytopleg { LegendPosition::Top } else { LegendPosition::Bottom },
            print: self.print,
        }
    }

    pub(crate) fn overrides(&self) -> LabelOverrides {
        LabelOverrides {
            title: self.title.clone(),
            x_label: self.xlabel.clone(),
            y_label: self.ylabel.clone(),
            output: self.output.clone(),
        }
    }

    pub(crate) fn mode(&self) -> Mode {
        if self.automation { Mode::PerFile } else { Mode::Combined }
    }
}

fn parse_root(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("folder does not exist: `{}`", path.display()));
    }

    if !path.is_dir() {
        return Err(format!("this is not a folder: `{}`", path.display()));
    }

    Ok(path)
}

fn parse_ycol(value: &str) -> Result<i64, String> {
    let ycol: i64 = value.parse().map_err(|e| format!("`{value}` is not a column number: {e}"))?;
    if ycol < -1 {
        return Err(format!("y column must be positive or -1: {ycol}"));
    }
    Ok(ycol)
}
