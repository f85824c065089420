// File: crates/fiolat-plot/src/chart.rs
// Summary: Chart struct and headless PNG rendering of a single line using Skia CPU raster surfaces.

use anyhow::Result;
use fiolat_core::PlotSource;
use skia_safe as skia;
use tracing::debug;

use crate::grid::linspace;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::Axis;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: skia::Color,
    pub line: skia::Color,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: skia::Color::from_argb(255, 18, 18, 20), // near-black
            line: skia::Color::from_argb(255, 64, 160, 255),
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new("") }
}

impl Chart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    /// Fit both axes to the extents of `src`; the value range is widened by `pad_frac` on each side.
    /// An empty source leaves the axes unchanged.
    pub fn autoscale(&mut self, src: &impl PlotSource, pad_frac: f64) {
        if src.is_empty() { return; }
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for i in 0..src.len() {
            let (x, y) = src.xy(i);
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if x_max - x_min < 1e-12 { x_max = x_min + 1.0; }
        if y_max - y_min < 1e-12 { y_min -= 0.5; y_max += 0.5; }
        let pad = (y_max - y_min) * pad_frac.max(0.0);
        self.x_axis.min = x_min;
        self.x_axis.max = x_max;
        self.y_axis.min = y_min - pad;
        self.y_axis.max = y_max + pad;
        debug!(x_min, x_max, y_min = self.y_axis.min, y_max = self.y_axis.max, "autoscaled axes");
    }

    /// Render `src` to a PNG at `output_png_path`, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        src: &impl PlotSource,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(src, opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Render `src` to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, src: &impl PlotSource, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        canvas.clear(opts.background);

        let plot_left = opts.insets.left;
        let plot_right = opts.width - opts.insets.right;
        let plot_top = opts.insets.top;
        let plot_bottom = opts.height - opts.insets.bottom;

        draw_grid(canvas, plot_left, plot_top, plot_right, plot_bottom);
        draw_axes(canvas, plot_left, plot_top, plot_right, plot_bottom);
        if opts.draw_labels {
            draw_labels(canvas, plot_left, plot_top, plot_right, plot_bottom, self);
        }
        draw_line(
            canvas,
            plot_left, plot_top, plot_right, plot_bottom,
            &self.x_axis, &self.y_axis, src, opts.line,
        );

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32) {
    let mut paint = skia::Paint::default();
    paint.set_color(skia::Color::from_argb(255, 40, 40, 45));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for x in linspace(l as f64, r as f64, 10) {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    for y in linspace(t as f64, b as f64, 6) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(skia::Color::from_argb(255, 180, 180, 190));
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);
}

fn draw_labels(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, chart: &Chart) {
    let mut paint_text = skia::Paint::default();
    paint_text.set_color(skia::Color::from_argb(255, 210, 210, 220));
    paint_text.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(14.0);

    let x = &chart.x_axis;
    let y = &chart.y_axis;
    canvas.draw_str(&x.label, (r as f32 - 80.0, b as f32 + 40.0), &font, &paint_text);
    canvas.draw_str(&y.label, (4.0, t as f32 - 12.0), &font, &paint_text);
    if !chart.title.is_empty() {
        canvas.draw_str(&chart.title, (l as f32, 24.0), &font, &paint_text);
    }

    // range ends on each axis
    font.set_size(11.0);
    canvas.draw_str(format_tick(x.min), (l as f32, b as f32 + 18.0), &font, &paint_text);
    canvas.draw_str(format_tick(x.max), (r as f32 - 60.0, b as f32 + 18.0), &font, &paint_text);
    canvas.draw_str(format_tick(y.max), (4.0, t as f32 + 12.0), &font, &paint_text);
    canvas.draw_str(format_tick(y.min), (4.0, b as f32), &font, &paint_text);
}

fn format_tick(v: f64) -> String {
    if v.abs() >= 1e6 { format!("{v:.3e}") } else { format!("{v:.1}") }
}

#[allow(clippy::too_many_arguments)]
fn draw_line(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    src: &impl PlotSource,
    color: skia::Color,
) {
    if src.len() < 2 {
        return;
    }

    let xspan = x_axis.span();
    let yspan = y_axis.span();
    let sx = |x: f64| -> f32 { l as f32 + ((x - x_axis.min) / xspan) as f32 * (r - l) as f32 };
    let sy = |y: f64| -> f32 { b as f32 - ((y - y_axis.min) / yspan) as f32 * (b - t) as f32 };

    let mut path = skia::Path::new();
    let (x0, y0) = src.xy(0);
    path.move_to((sx(x0), sy(y0)));
    for i in 1..src.len() {
        let (x, y) = src.xy(i);
        path.line_to((sx(x), sy(y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color);

    canvas.draw_path(&path, &stroke);
}
