// File: crates/plot-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::Axis;
use crate::geometry::RectI32;
use crate::grid::{format_tick, major_ticks, minor_ticks, nice_step};
use crate::series::{Series, SeriesType};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, BASE_FONT_SIZE, FONT_SCALE, HEIGHT, WIDTH};
use crate::view::ViewState;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Multiplier applied to all chart text.
    pub font_scale: f32,
    /// Disable for pixel-deterministic output across font stacks.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::whitegrid(),
            font_scale: FONT_SCALE,
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data extents, padding each span once by `margin`
    /// (a fraction, e.g. 0.02 for 2%).
    pub fn autoscale_axes(&mut self, margin: f64) {
        let v = ViewState::from_chart(self);
        let xm = (v.x_max - v.x_min) * margin;
        let ym = (v.y_max - v.y_min) * margin;
        self.x_axis.min = v.x_min - xm;
        self.x_axis.max = v.x_max + xm;
        self.y_axis.min = v.y_min - ym;
        self.y_axis.max = v.y_max + ym;
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a tightly packed RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), opts);

        let w = opts.width.max(1) as u32;
        let h = opts.height.max(1) as u32;
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    /// Full paint pass onto an arbitrary canvas (background, grid, axes,
    /// series in z-order, tick/axis labels, legend).
    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = RectI32::from_ltrb(
            opts.insets.left as i32,
            opts.insets.top as i32,
            opts.width - opts.insets.right as i32,
            opts.height - opts.insets.bottom as i32,
        );

        let x_ticks = major_ticks(self.x_axis.min, self.x_axis.max, 9);
        let y_ticks = major_ticks(self.y_axis.min, self.y_axis.max, 7);
        let x_minors = minor_ticks(&x_ticks, 5, self.x_axis.min, self.x_axis.max);
        let y_minors = minor_ticks(&y_ticks, 5, self.y_axis.min, self.y_axis.max);

        draw_grid(canvas, plot, &self.x_axis, &self.y_axis, &x_minors, &y_minors, theme, true);
        draw_grid(canvas, plot, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks, theme, false);
        draw_axis_lines(canvas, plot, theme);

        // Series paint in ascending z-order; stable sort keeps insertion
        // order for equal z.
        let mut order: Vec<usize> = (0..self.series.len()).collect();
        order.sort_by_key(|&i| self.series[i].z_order);

        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(
                plot.left as f32,
                plot.top as f32,
                plot.right as f32,
                plot.bottom as f32,
            ),
            None,
            None,
        );
        for &i in &order {
            let s = &self.series[i];
            let color = s.color.unwrap_or_else(|| theme.palette_color(i));
            match s.series_type {
                SeriesType::Line => {
                    draw_line_series(canvas, plot, &self.x_axis, &self.y_axis, s, color)
                }
                SeriesType::Scatter => {
                    draw_scatter_series(canvas, plot, &self.x_axis, &self.y_axis, s, color)
                }
            }
        }
        canvas.restore();

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_tick_labels(
                canvas, plot, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks, theme, &shaper,
                opts.font_scale,
            );
            draw_axis_titles(canvas, plot, &self.x_axis, &self.y_axis, theme, &shaper, opts.font_scale);
            self.draw_legend(canvas, plot, theme, &shaper, opts.font_scale);
        }
    }

    fn draw_legend(
        &self,
        canvas: &skia::Canvas,
        plot: RectI32,
        theme: &Theme,
        shaper: &TextShaper,
        font_scale: f32,
    ) {
        let entries: Vec<(usize, &Series)> = self
            .series
            .iter()
            .enumerate()
            .filter(|(_, s)| s.label.is_some())
            .collect();
        if entries.is_empty() {
            return;
        }

        let font = BASE_FONT_SIZE * font_scale;
        let pad = 10.0f32;
        let swatch = 22.0f32;
        let row_h = font + 8.0;

        let mut text_w = 0.0f32;
        for (_, s) in &entries {
            let label = s.label.as_deref().unwrap_or_default();
            text_w = text_w.max(shaper.measure_width(label, font));
        }
        let box_w = pad + swatch + 8.0 + text_w + pad;
        let box_h = pad * 2.0 + row_h * entries.len() as f32 - 8.0;

        let right = plot.right as f32 - 12.0;
        let top = plot.top as f32 + 12.0;
        let rect = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme.legend_background);
        canvas.draw_rect(rect, &fill);

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(theme.legend_border);
        canvas.draw_rect(rect, &border);

        for (row, (i, s)) in entries.iter().enumerate() {
            let cy = top + pad + row_h * row as f32 + font * 0.5;
            let sx = right - box_w + pad;
            let color = s.color.unwrap_or_else(|| theme.palette_color(*i));
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_color(color);
            match s.series_type {
                SeriesType::Line => {
                    paint.set_style(skia::paint::Style::Stroke);
                    paint.set_stroke_width(s.stroke_width);
                    canvas.draw_line((sx, cy), (sx + swatch, cy), &paint);
                }
                SeriesType::Scatter => {
                    paint.set_style(skia::paint::Style::Fill);
                    canvas.draw_circle((sx + swatch * 0.5, cy), s.marker_radius.min(6.0), &paint);
                }
            }
            let label = s.label.as_deref().unwrap_or_default();
            shaper.draw_left(canvas, label, sx + swatch + 8.0, cy + font * 0.35, font, theme.axis_label);
        }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn sx(plot: RectI32, axis: &Axis, x: f64) -> f32 {
    plot.left as f32 + ((x - axis.min) / axis.span()) as f32 * plot.width() as f32
}

fn sy(plot: RectI32, axis: &Axis, y: f64) -> f32 {
    plot.bottom as f32 - ((y - axis.min) / axis.span()) as f32 * plot.height() as f32
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
    minor: bool,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(if minor { 0.5 } else { 1.0 });
    paint.set_color(if minor { theme.grid_minor } else { theme.grid_major });
    if minor {
        paint.set_path_effect(skia::dash_path_effect::new(&[2.0, 4.0], 0.0));
    }

    for &x in x_ticks {
        let px = sx(plot, x_axis, x);
        canvas.draw_line((px, plot.top as f32), (px, plot.bottom as f32), &paint);
    }
    for &y in y_ticks {
        let py = sy(plot, y_axis, y);
        canvas.draw_line((plot.left as f32, py), (plot.right as f32, py), &paint);
    }
}

fn draw_axis_lines(canvas: &skia::Canvas, plot: RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);
    paint.set_color(theme.axis_line);

    canvas.draw_line(
        (plot.left as f32, plot.bottom as f32),
        (plot.right as f32, plot.bottom as f32),
        &paint,
    );
    canvas.draw_line(
        (plot.left as f32, plot.top as f32),
        (plot.left as f32, plot.bottom as f32),
        &paint,
    );
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    if series.len() < 2 {
        return;
    }
    let data = &series.data_xy;

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((sx(plot, x_axis, x0), sy(plot, y_axis, y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx(plot, x_axis, x), sy(plot, y_axis, y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.stroke_width);
    stroke.set_color(color);
    canvas.draw_path(&path, &stroke);
}

fn draw_scatter_series(
    canvas: &skia::Canvas,
    plot: RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    if series.is_empty() {
        return;
    }

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);

    for &(x, y) in &series.data_xy {
        canvas.draw_circle((sx(plot, x_axis, x), sy(plot, y_axis, y)), series.marker_radius, &paint);
    }
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    plot: RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
    shaper: &TextShaper,
    font_scale: f32,
) {
    let font = BASE_FONT_SIZE * font_scale;
    let x_step = nice_step(x_axis.span(), 9);
    let y_step = nice_step(y_axis.span(), 7);

    for &x in x_ticks {
        let px = sx(plot, x_axis, x);
        shaper.draw_centered(
            canvas,
            &format_tick(x, x_step),
            px,
            plot.bottom as f32 + font + 8.0,
            font,
            theme.tick_label,
        );
    }
    for &y in y_ticks {
        let py = sy(plot, y_axis, y);
        shaper.draw_right(
            canvas,
            &format_tick(y, y_step),
            plot.left as f32 - 8.0,
            py + font * 0.35,
            font,
            theme.tick_label,
        );
    }
}

fn draw_axis_titles(
    canvas: &skia::Canvas,
    plot: RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
    shaper: &TextShaper,
    font_scale: f32,
) {
    // Axis titles run one step larger than tick labels.
    let font = BASE_FONT_SIZE * font_scale * 14.0 / 12.0;
    let cx = (plot.left + plot.right) as f32 * 0.5;
    shaper.draw_centered(
        canvas,
        &x_axis.label,
        cx,
        plot.bottom as f32 + font * 2.0 + 14.0,
        font,
        theme.axis_label,
    );

    // Y title rotated 90° counter-clockwise, vertically centered.
    let cy = (plot.top + plot.bottom) as f32 * 0.5;
    let lx = plot.left as f32 - font * 2.0 - 18.0;
    canvas.save();
    canvas.rotate(-90.0, Some(skia::Point::new(lx, cy)));
    shaper.draw_centered(canvas, &y_axis.label, lx, cy, font, theme.axis_label);
    canvas.restore();
}
