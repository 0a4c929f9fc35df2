// File: crates/plot-core/src/types.rs
// Summary: Shared types and constants (sizes, font scale, paddings).

/// Default surface width in pixels (14 in at 100 dpi).
pub const WIDTH: i32 = 1400;
/// Default surface height in pixels (8 in at 100 dpi).
pub const HEIGHT: i32 = 800;

/// Base font size in pixels before scaling.
pub const BASE_FONT_SIZE: f32 = 12.0;
/// Default font scale applied to all chart text.
pub const FONT_SCALE: f32 = 1.2;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(88, 28, 32, 68)
    }
}
