// File: crates/plot-core/src/theme.rs
// Summary: Whitegrid/dark theming and the muted series palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid_major: skia::Color,
    pub grid_minor: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick_label: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    /// Default series colors, assigned by insertion index when a series
    /// carries no explicit color.
    pub palette: [skia::Color; 10],
}

/// Muted 10-color cycle (seaborn "muted" order).
const MUTED: [skia::Color; 10] = [
    skia::Color::new(0xff_48_78_d0), // blue
    skia::Color::new(0xff_ee_85_4a), // orange
    skia::Color::new(0xff_6a_cc_64), // green
    skia::Color::new(0xff_d6_5f_5f), // red
    skia::Color::new(0xff_95_6c_b4), // purple
    skia::Color::new(0xff_8c_61_3c), // brown
    skia::Color::new(0xff_dc_7e_c0), // pink
    skia::Color::new(0xff_79_79_79), // gray
    skia::Color::new(0xff_d5_bb_67), // olive
    skia::Color::new(0xff_82_c6_e2), // cyan
];

impl Theme {
    /// White background, light gray grid. The default look.
    pub fn whitegrid() -> Self {
        Self {
            name: "whitegrid",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid_major: skia::Color::from_argb(255, 204, 204, 204),
            grid_minor: skia::Color::from_argb(255, 228, 228, 228),
            axis_line: skia::Color::from_argb(255, 38, 38, 38),
            axis_label: skia::Color::from_argb(255, 25, 25, 30),
            tick_label: skia::Color::from_argb(255, 60, 60, 65),
            legend_background: skia::Color::from_argb(230, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 180, 180, 185),
            palette: MUTED,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid_major: skia::Color::from_argb(255, 52, 52, 58),
            grid_minor: skia::Color::from_argb(255, 34, 34, 38),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick_label: skia::Color::from_argb(255, 190, 190, 200),
            legend_background: skia::Color::from_argb(230, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 90, 90, 100),
            palette: MUTED,
        }
    }

    /// Palette color for a series index, wrapping around the cycle.
    pub fn palette_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::whitegrid()
    }
}
