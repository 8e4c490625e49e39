// File: crates/colplot-core/src/types.rs
// Summary: Render sizes, paddings and the physical-length to pixel conversion.

use skia_safe as skia;

use crate::config::Style;

/// Output resolution used to turn centimetre axis lengths into pixels.
pub const DPI: f64 = 96.0;

/// Pixels for `cm` centimetres at `DPI`, at least one.
pub fn cm_to_px(cm: f64) -> i32 {
    (cm / 2.54 * DPI).round().max(1.0) as i32
}

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Insets shrunk proportionally so they take at most half of a
    /// `width` x `height` canvas on each axis.
    pub fn fit(&self, width: i32, height: i32) -> Self {
        let scale = |a: u32, b: u32, sum: u32, room: i32| -> (u32, u32) {
            let room = (room.max(0) / 2) as u32;
            if sum <= room {
                return (a, b);
            }
            let k = f64::from(room) / f64::from(sum);
            ((f64::from(a) * k).floor() as u32, (f64::from(b) * k).floor() as u32)
        };
        let (left, right) = scale(self.left, self.right, self.hsum(), width);
        let (top, bottom) = scale(self.top, self.bottom, self.vsum(), height);
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(64, 16, 32, 48)
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: skia::Color,
    /// Draw title, tick labels, axis labels and legend text.
    pub draw_labels: bool,
}

impl RenderOptions {
    /// Canvas sized from the style's axis lengths.
    pub fn from_style(style: &Style) -> Self {
        Self {
            width: cm_to_px(style.x_length_cm),
            height: cm_to_px(style.y_length_cm),
            ..Self::default()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: cm_to_px(10.0),
            height: cm_to_px(10.0),
            insets: Insets::default(),
            background: skia::Color::WHITE,
            draw_labels: true,
        }
    }
}
