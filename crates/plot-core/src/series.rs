// File: crates/plot-core/src/series.rs
// Summary: Series model for line and scatter data with per-series styling.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Scatter,
}

/// A single plotted layer: (x, y) points plus styling and legend metadata.
///
/// Layers paint in ascending `z_order`; ties keep insertion order. The legend
/// always lists labelled series in insertion order, independent of z-order.
#[derive(Clone)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    pub label: Option<String>,
    /// Explicit color; `None` falls back to the theme palette by series index.
    pub color: Option<skia::Color>,
    /// Stroke width for line series, in pixels.
    pub stroke_width: f32,
    /// Marker radius for scatter series, in pixels.
    pub marker_radius: f32,
    pub z_order: i32,
}

impl Series {
    pub fn new(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self {
            series_type,
            data_xy: data,
            label: None,
            color: None,
            stroke_width: 2.0,
            marker_radius: 4.0,
            z_order: 0,
        }
    }

    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self::new(SeriesType::Line, data)
    }

    pub fn scatter(data: Vec<(f64, f64)>) -> Self {
        Self::new(SeriesType::Scatter, data)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.1);
        self
    }

    pub fn with_marker_radius(mut self, radius: f32) -> Self {
        self.marker_radius = radius.max(0.5);
        self
    }

    pub fn with_z_order(mut self, z: i32) -> Self {
        self.z_order = z;
        self
    }

    /// Number of points in the layer.
    pub fn len(&self) -> usize {
        self.data_xy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_xy.is_empty()
    }
}
