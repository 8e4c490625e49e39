// File: crates/colplot-core/src/view.rs
// Summary: Data extents of a composed chart, used to autoscale its axes.

use crate::chart::SeriesSpec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extents {
    /// Bounds of every finite point, with 2% vertical padding.
    /// Falls back to the unit square when there is nothing to bound.
    pub fn from_series(series: &[SeriesSpec]) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in series {
            for &(x, y) in &s.points {
                if !x.is_finite() || !y.is_finite() {
                    continue;
                }
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let ym = (y_max - y_min) * 0.02;
        Self { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
    }
}
