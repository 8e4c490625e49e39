// File: crates/colplot-core/src/palette.rs
// Summary: Deterministic series colors: ten named base colors extended by a cool/warm diverging ramp.

use skia_safe as skia;

/// Base colors for palette indices 0..10, in order.
const BASE: [(u8, u8, u8); 10] = [
    (255, 0, 0),     // red
    (0, 0, 255),     // blue
    (50, 190, 50),   // green
    (255, 175, 15),  // orange
    (200, 0, 255),   // pink
    (255, 255, 0),   // yellow
    (255, 0, 200),   // rose
    (0, 255, 255),   // light blue
    (150, 255, 150), // light green
    (0, 0, 0),       // black
];

/// Moreland's smooth cool/warm diverging map sampled at 33 evenly spaced stops.
const COOL_WARM: [(u8, u8, u8); 33] = [
    (59, 76, 192),
    (68, 90, 204),
    (77, 104, 215),
    (87, 117, 225),
    (98, 130, 234),
    (108, 142, 241),
    (119, 154, 247),
    (130, 165, 251),
    (141, 176, 254),
    (152, 185, 255),
    (163, 194, 255),
    (174, 201, 253),
    (184, 208, 249),
    (194, 213, 244),
    (204, 217, 238),
    (213, 219, 230),
    (221, 221, 221),
    (229, 216, 209),
    (236, 211, 197),
    (241, 204, 185),
    (245, 196, 173),
    (247, 187, 160),
    (247, 177, 148),
    (247, 166, 135),
    (244, 154, 123),
    (241, 141, 111),
    (236, 127, 99),
    (229, 112, 88),
    (222, 96, 77),
    (213, 80, 66),
    (203, 62, 56),
    (192, 40, 47),
    (180, 4, 38),
];

/// Maps a palette index to a color.
///
/// The table starts with the ten base colors. When the declared capacity `N`
/// exceeds that, `N + 1 - 10` ramp colors are appended once at construction.
/// Indices at or above `N` fall back to the first color. The table is never
/// reordered, so a palette is safe to share read-only across threads.
#[derive(Clone, Debug)]
pub struct ColorPalette {
    capacity: usize,
    table: Vec<skia::Color>,
}

impl ColorPalette {
    pub const BASE_SIZE: usize = BASE.len();

    /// Palette with the default capacity (the ten base colors).
    pub fn new() -> Self {
        Self::with_capacity(Self::BASE_SIZE)
    }

    /// Palette able to give `max_series` distinct colors.
    pub fn with_capacity(max_series: usize) -> Self {
        let mut table: Vec<skia::Color> = BASE.iter().map(|&(r, g, b)| skia::Color::from_rgb(r, g, b)).collect();
        if max_series > table.len() {
            let extra = max_series.saturating_add(1) - table.len();
            table.extend(cool_warm_ramp(extra));
        }
        Self { capacity: max_series, table }
    }

    /// Declared maximum number of series (`N`).
    pub fn capacity(&self) -> usize { self.capacity }

    /// Number of colors held in the table.
    pub fn len(&self) -> usize { self.table.len() }

    pub fn is_empty(&self) -> bool { self.table.is_empty() }

    pub fn color_for(&self, index: usize) -> skia::Color {
        if index >= self.capacity {
            return self.table[0];
        }
        self.table[index]
    }
}

impl Default for ColorPalette {
    fn default() -> Self { Self::new() }
}

/// `count` colors spread evenly from the cool end to the warm end of the ramp.
pub fn cool_warm_ramp(count: usize) -> Vec<skia::Color> {
    match count {
        0 => Vec::new(),
        1 => vec![sample_cool_warm(0.0)],
        n => (0..n).map(|i| sample_cool_warm(i as f64 / (n - 1) as f64)).collect(),
    }
}

/// Linear interpolation between the two stops surrounding `t` in [0, 1].
fn sample_cool_warm(t: f64) -> skia::Color {
    let last = COOL_WARM.len() - 1;
    let pos = t.clamp(0.0, 1.0) * last as f64;
    let lo = (pos.floor() as usize).min(last);
    let hi = (lo + 1).min(last);
    let frac = pos - lo as f64;
    let mix = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * frac).round() as u8 };
    let (r0, g0, b0) = COOL_WARM[lo];
    let (r1, g1, b1) = COOL_WARM[hi];
    skia::Color::from_rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}
