//! Visualization: render a [`Plot`] to **SVG** or **PNG**.
//!
//! - Output format follows the file extension (`.svg`, anything else is PNG)
//! - Light grid with locale-aware tick labels
//! - Elements drawn in insertion order, clipped to the data area
//! - Legend for labelled elements in the upper-right corner

pub mod draw;
pub mod legend;
pub mod util;

use anyhow::{Result, anyhow, bail};
use log::{info, warn};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::element::{Drawable, PointCollection};
use plotters::prelude::*;
use plotters::style::Color as _;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::ops::Range;
use std::path::Path;

use crate::color::Color;
use crate::models::AxisLimits;
use crate::plot::Plot;
use util::{format_number, nice_ticks, rgba, tick_decimals};

const MARGIN: u32 = 16;
const LEFT_GUTTER: u32 = 56;
const BOTTOM_GUTTER: u32 = 32;
const TICK_FONT_PX: f64 = 12.0;
const GRID_COLOR: Color = Color::rgb(230, 230, 230);

/// Plotting area in data coordinates.
pub type DataArea<DB> = DrawingArea<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Register a font for the bitmap text path.
///
/// The `ab_glyph` backend doesn't discover OS fonts, so PNG labels are only
/// drawn once a "sans-serif" font is registered. SVG output needs no font.
pub fn register_font(bytes: &'static [u8]) -> Result<()> {
    plotters::style::register_font("sans-serif", plotters::style::FontStyle::Normal, bytes)
        .map_err(|_| anyhow!("invalid font data"))
}

/// Render with the size from the plot's config.
pub fn save<P: AsRef<Path>>(plot: &Plot, out_path: P) -> Result<()> {
    let cfg = plot.config();
    save_with_size(plot, out_path, cfg.width, cfg.height)
}

/// Render to `out_path` at `width` x `height` pixels.
pub fn save_with_size<P: AsRef<Path>>(
    plot: &Plot,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    if width == 0 || height == 0 {
        bail!("image size must be non-zero, got {width}x{height}");
    }
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_plot(root, plot)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_plot(root, plot)?;
    }
    info!(
        "wrote {} element(s) to {} ({width}x{height})",
        plot.len(),
        out_path.display()
    );
    Ok(())
}

/// Render to an in-memory SVG document.
pub fn render_svg_string(plot: &Plot, width: u32, height: u32) -> Result<String> {
    if width == 0 || height == 0 {
        bail!("image size must be non-zero, got {width}x{height}");
    }
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (width, height)).into_drawing_area();
        draw_plot(root, plot)?;
    }
    Ok(buf)
}

/// Pixel-space helpers shared by the element painters.
pub struct Canvas<'a, DB: DrawingBackend> {
    pub root: &'a DrawingArea<DB, Shift>,
    pub area: &'a DataArea<DB>,
    pub limits: AxisLimits,
    pub locale: &'a str,
}

impl<DB: DrawingBackend> Canvas<'_, DB> {
    /// Data coordinate to backend pixel, clamped to a band around the data area
    /// so far-off points still give drawable segments.
    pub fn px(&self, p: (f64, f64)) -> (i32, i32) {
        let (x, y) = self.area.map_coordinate(&p);
        let (xr, yr) = self.pixel_rect();
        let (w, h) = (xr.end - xr.start, yr.end - yr.start);
        (
            x.clamp(xr.start - 4 * w, xr.end + 4 * w),
            y.clamp(yr.start - 4 * h, yr.end + 4 * h),
        )
    }

    /// Pixel ranges of the data area.
    pub fn pixel_rect(&self) -> (Range<i32>, Range<i32>) {
        self.area.get_pixel_range()
    }

    pub fn draw<E>(&self, element: &E) -> Result<()>
    where
        for<'b> &'b E: PointCollection<'b, (i32, i32)>,
        E: Drawable<DB>,
    {
        self.root.draw(element).map_err(|e| anyhow!("{:?}", e))
    }

    /// Draw text; a missing font (bitmap backends) is logged and skipped.
    pub fn text(&self, text: &str, pos: (i32, i32), font_px: f64, color: Color, h: HPos, v: VPos) {
        if text.is_empty() {
            return;
        }
        let fg = rgba(color);
        let style = TextStyle::from((FontFamily::SansSerif, font_px).into_font())
            .color(&fg)
            .pos(Pos::new(h, v));
        if let Err(e) = self.root.draw(&Text::new(text.to_string(), pos, style)) {
            warn!("skipping label {text:?}: {e:?}");
        }
    }
}

/// Helper that draws the whole plot to any Plotters backend.
fn draw_plot<DB>(root: DrawingArea<DB, Shift>, plot: &Plot) -> Result<()>
where
    DB: DrawingBackend,
{
    let cfg = plot.config();
    let background = rgba(cfg.background);
    root.fill(&background).map_err(|e| anyhow!("{:?}", e))?;

    let limits = plot.axis_limits();
    let chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .margin_left(MARGIN + LEFT_GUTTER)
        .margin_bottom(MARGIN + BOTTOM_GUTTER)
        .build_cartesian_2d(limits.x_min..limits.x_max, limits.y_min..limits.y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    let canvas = Canvas {
        root: &root,
        area: chart.plotting_area(),
        limits,
        locale: cfg.locale.as_str(),
    };

    let (x_ticks, x_step) = nice_ticks(limits.x_min, limits.x_max, 8);
    let (y_ticks, y_step) = nice_ticks(limits.y_min, limits.y_max, 6);
    draw_grid(&canvas, &x_ticks, &y_ticks)?;

    for element in plot.iter() {
        draw::draw_plottable(&canvas, element)?;
    }

    mask_gutters(&canvas, background)?;
    draw_frame(&canvas, &x_ticks, x_step, &y_ticks, y_step)?;
    legend::draw_legend(&canvas, &legend::legend_items(plot))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_grid<DB: DrawingBackend>(
    canvas: &Canvas<'_, DB>,
    x_ticks: &[f64],
    y_ticks: &[f64],
) -> Result<()> {
    let (xr, yr) = canvas.pixel_rect();
    let style = rgba(GRID_COLOR).stroke_width(1);
    for &x in x_ticks {
        let (px, _) = canvas.px((x, canvas.limits.y_min));
        canvas.draw(&PathElement::new(vec![(px, yr.start), (px, yr.end)], style))?;
    }
    for &y in y_ticks {
        let (_, py) = canvas.px((canvas.limits.x_min, y));
        canvas.draw(&PathElement::new(vec![(xr.start, py), (xr.end, py)], style))?;
    }
    Ok(())
}

/// Paint over everything outside the data area so elements appear clipped.
fn mask_gutters<DB: DrawingBackend>(canvas: &Canvas<'_, DB>, background: RGBAColor) -> Result<()> {
    let (xr, yr) = canvas.pixel_rect();
    let (w, h) = canvas.root.dim_in_pixel();
    let (w, h) = (w as i32, h as i32);
    let fill = background.filled();
    for rect in [
        [(0, 0), (w, yr.start)],
        [(0, yr.end), (w, h)],
        [(0, 0), (xr.start, h)],
        [(xr.end, 0), (w, h)],
    ] {
        canvas.draw(&Rectangle::new(rect, fill))?;
    }
    Ok(())
}

fn draw_frame<DB: DrawingBackend>(
    canvas: &Canvas<'_, DB>,
    x_ticks: &[f64],
    x_step: f64,
    y_ticks: &[f64],
    y_step: f64,
) -> Result<()> {
    let (xr, yr) = canvas.pixel_rect();
    canvas.draw(&Rectangle::new(
        [(xr.start, yr.start), (xr.end, yr.end)],
        BLACK.stroke_width(1),
    ))?;

    let tick = BLACK.stroke_width(1);
    let x_dec = tick_decimals(x_step);
    for &x in x_ticks {
        let (px, _) = canvas.px((x, canvas.limits.y_min));
        canvas.draw(&PathElement::new(vec![(px, yr.end), (px, yr.end + 4)], tick))?;
        let label = format_number(x, x_dec, canvas.locale);
        canvas.text(
            &label,
            (px, yr.end + 6),
            TICK_FONT_PX,
            Color::BLACK,
            HPos::Center,
            VPos::Top,
        );
    }
    let y_dec = tick_decimals(y_step);
    for &y in y_ticks {
        let (_, py) = canvas.px((canvas.limits.x_min, y));
        canvas.draw(&PathElement::new(vec![(xr.start - 4, py), (xr.start, py)], tick))?;
        let label = format_number(y, y_dec, canvas.locale);
        canvas.text(
            &label,
            (xr.start - 6, py),
            TICK_FONT_PX,
            Color::BLACK,
            HPos::Right,
            VPos::Center,
        );
    }
    Ok(())
}
