// File: crates/colplot-core/src/axis.rs
// Summary: Axis model with label and data range.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Data span, never smaller than a tiny epsilon.
    pub fn span(&self) -> f64 { (self.max - self.min).max(1e-9) }

    /// Map `v` linearly from [min, max] onto [from_px, to_px].
    #[inline]
    pub fn map(&self, v: f64, from_px: f32, to_px: f32) -> f32 {
        from_px + ((v - self.min) / self.span()) as f32 * (to_px - from_px)
    }
}
