//! Painters for each element kind. Everything is drawn in backend pixels on
//! the root area; data coordinates go through [`Canvas::px`].

use anyhow::Result;
use plotters::backend::DrawingBackend;
use plotters::prelude::*;
use plotters::style::Color as _;
use plotters::style::text_anchor::{HPos, VPos};
use std::f64::consts::TAU;

use super::Canvas;
use super::util::{dash_segments, format_value, rgba};
use crate::color::Color;
use crate::models::{ArrowCap, LineCap, LineStyle, MarkerShape};
use crate::plottable::radar::LABEL_RADIUS;
use crate::plottable::{Function, Pie, Plottable, Radar, ScaleBar, Scatter, VectorField};

const LABEL_FONT_PX: f64 = 12.0;
const RADAR_RINGS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];
const PIE_CAPTION_RADIUS: f64 = 0.6;

/// Draw one element.
pub fn draw_plottable<DB: DrawingBackend>(canvas: &Canvas<'_, DB>, p: &Plottable) -> Result<()> {
    match p {
        Plottable::Scatter(s) => draw_scatter(canvas, s),
        Plottable::Function(f) => draw_function(canvas, f),
        Plottable::VectorField(v) => draw_vector_field(canvas, v),
        Plottable::Radar(r) => draw_radar(canvas, r),
        Plottable::Pie(p) => draw_pie(canvas, p),
        Plottable::ScaleBar(b) => draw_scale_bar(canvas, b),
    }
}

fn stroke(color: Color, width: f64) -> ShapeStyle {
    rgba(color).stroke_width((width.round() as u32).max(1))
}

fn to_i(p: (f64, f64)) -> (i32, i32) {
    (p.0.round() as i32, p.1.round() as i32)
}

fn to_f(p: (i32, i32)) -> (f64, f64) {
    (p.0 as f64, p.1 as f64)
}

/// Polyline in pixels honoring the dash pattern.
fn draw_polyline<DB: DrawingBackend>(
    canvas: &Canvas<'_, DB>,
    points: &[(i32, i32)],
    color: Color,
    line_width: f64,
    line_style: LineStyle,
) -> Result<()> {
    if points.len() < 2 || line_width <= 0.0 || line_style == LineStyle::None {
        return Ok(());
    }
    let style = stroke(color, line_width);
    match line_style.dash_pattern() {
        None => canvas.draw(&PathElement::new(points.to_vec(), style)),
        Some(pattern) => {
            for piece in dash_segments(points, pattern, line_width) {
                canvas.draw(&PathElement::new(piece, style))?;
            }
            Ok(())
        }
    }
}

/// Arrowhead with its tip at `tip`, pointing away from `from`.
/// Returns the centre of the head's base, where the shaft should end.
fn draw_arrowhead<DB: DrawingBackend>(
    canvas: &Canvas<'_, DB>,
    from: (f64, f64),
    tip: (f64, f64),
    head_length: f64,
    head_width: f64,
    color: Color,
    filled: bool,
) -> Result<(f64, f64)> {
    let (dx, dy) = (tip.0 - from.0, tip.1 - from.1);
    let len = dx.hypot(dy);
    if len <= f64::EPSILON || head_length <= 0.0 {
        return Ok(tip);
    }
    let (ux, uy) = (dx / len, dy / len);
    let base = (tip.0 - ux * head_length, tip.1 - uy * head_length);
    let half = head_width / 2.0;
    let left = (base.0 - uy * half, base.1 + ux * half);
    let right = (base.0 + uy * half, base.1 - ux * half);
    let outline = vec![to_i(tip), to_i(left), to_i(right)];
    if filled {
        canvas.draw(&Polygon::new(outline, rgba(color).filled()))?;
    } else {
        let mut closed = outline;
        closed.push(to_i(tip));
        canvas.draw(&PathElement::new(closed, stroke(color, 1.0)))?;
    }
    Ok(base)
}

fn draw_marker<DB: DrawingBackend>(
    canvas: &Canvas<'_, DB>,
    (x, y): (i32, i32),
    shape: MarkerShape,
    size: f64,
    color: Color,
) -> Result<()> {
    if size <= 0.0 || shape == MarkerShape::None {
        return Ok(());
    }
    let r = ((size / 2.0).round() as i32).max(1);
    let fill = rgba(color).filled();
    let line = stroke(color, 1.0);
    let square = [(x - r, y - r), (x + r, y + r)];
    let diamond = vec![(x, y - r), (x + r, y), (x, y + r), (x - r, y)];
    match shape {
        MarkerShape::None => Ok(()),
        MarkerShape::FilledCircle => canvas.draw(&Circle::new((x, y), r, fill)),
        MarkerShape::OpenCircle => canvas.draw(&Circle::new((x, y), r, line)),
        MarkerShape::FilledSquare => canvas.draw(&Rectangle::new(square, fill)),
        MarkerShape::OpenSquare => canvas.draw(&Rectangle::new(square, line)),
        MarkerShape::FilledDiamond => canvas.draw(&Polygon::new(diamond, fill)),
        MarkerShape::OpenDiamond => {
            let mut closed = diamond;
            closed.push((x, y - r));
            canvas.draw(&PathElement::new(closed, line))
        }
        MarkerShape::TriangleUp => {
            canvas.draw(&Polygon::new(vec![(x, y - r), (x + r, y + r), (x - r, y + r)], fill))
        }
        MarkerShape::TriangleDown => {
            canvas.draw(&Polygon::new(vec![(x, y + r), (x + r, y - r), (x - r, y - r)], fill))
        }
        MarkerShape::Cross => {
            canvas.draw(&PathElement::new(vec![(x - r, y), (x + r, y)], line))?;
            canvas.draw(&PathElement::new(vec![(x, y - r), (x, y + r)], line))
        }
        MarkerShape::Eks => {
            canvas.draw(&PathElement::new(vec![(x - r, y - r), (x + r, y + r)], line))?;
            canvas.draw(&PathElement::new(vec![(x - r, y + r), (x + r, y - r)], line))
        }
    }
}

fn draw_start_cap<DB: DrawingBackend>(
    canvas: &Canvas<'_, DB>,
    (x, y): (i32, i32),
    cap: LineCap,
    line_width: f64,
    color: Color,
) -> Result<()> {
    let half = ((line_width / 2.0).round() as i32).max(1);
    match cap {
        LineCap::Flat => Ok(()),
        LineCap::Round => canvas.draw(&Circle::new((x, y), half, rgba(color).filled())),
        LineCap::Square => canvas.draw(&Rectangle::new(
            [(x - half, y - half), (x + half, y + half)],
            rgba(color).filled(),
        )),
    }
}

fn draw_scatter<DB: DrawingBackend>(canvas: &Canvas<'_, DB>, s: &Scatter) -> Result<()> {
    // non-finite points break the line
    let mut runs: Vec<Vec<(i32, i32)>> = Vec::new();
    let mut current: Vec<(i32, i32)> = Vec::new();
    for (x, y) in s.points() {
        if x.is_finite() && y.is_finite() {
            current.push(canvas.px((x, y)));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    let last_run = runs.len().saturating_sub(1);
    for (i, run) in runs.iter().enumerate() {
        let mut line = run.clone();
        if i == last_run
            && let Some(cap) = s.end_cap
            && line.len() >= 2
        {
            shorten_for_head(canvas, &mut line, cap, s)?;
        }
        draw_polyline(canvas, &line, s.color, s.line_width, s.line_style)?;
        if i == 0
            && s.line_width > 0.0
            && let Some(&first) = run.first()
        {
            draw_start_cap(canvas, first, s.start_cap, s.line_width, s.color)?;
        }
        for &p in run {
            draw_marker(canvas, p, s.marker_shape, s.marker_size, s.color)?;
        }
    }
    Ok(())
}

/// Draw the end arrowhead and pull the last vertex back to the head's base.
fn shorten_for_head<DB: DrawingBackend>(
    canvas: &Canvas<'_, DB>,
    line: &mut [(i32, i32)],
    cap: ArrowCap,
    s: &Scatter,
) -> Result<()> {
    let n = line.len();
    let (from, tip) = (to_f(line[n - 2]), to_f(line[n - 1]));
    let lw = s.line_width.max(1.0);
    let base = draw_arrowhead(
        canvas,
        from,
        tip,
        cap.length * lw,
        cap.width * lw,
        s.color,
        cap.filled,
    )?;
    line[n - 1] = to_i(base);
    Ok(())
}

fn draw_function<DB: DrawingBackend>(canvas: &Canvas<'_, DB>, f: &Function) -> Result<()> {
    let (xr, _) = canvas.pixel_rect();
    let n = (xr.end - xr.start).max(2) as usize;
    let limits = canvas.limits;
    for run in f.sample(limits.x_min, limits.x_max, n) {
        let pixels: Vec<(i32, i32)> = run.iter().map(|&p| canvas.px(p)).collect();
        draw_polyline(canvas, &pixels, f.color, f.line_width, f.line_style)?;
        if f.marker_size > 0.0 {
            for &p in &pixels {
                draw_marker(canvas, p, f.marker_shape, f.marker_size, f.color)?;
            }
        }
    }
    Ok(())
}

fn draw_vector_field<DB: DrawingBackend>(canvas: &Canvas<'_, DB>, v: &VectorField) -> Result<()> {
    for (tail, head, color) in v.arrows() {
        let (from, tip) = (to_f(canvas.px(tail)), to_f(canvas.px(head)));
        let len = (tip.0 - from.0).hypot(tip.1 - from.1);
        if len < 1.0 {
            continue;
        }
        let head_length = (len * 0.35).min(8.0);
        let head_width = head_length * 0.8;
        let base = draw_arrowhead(canvas, from, tip, head_length, head_width, color, true)?;
        canvas.draw(&PathElement::new(vec![to_i(from), to_i(base)], stroke(color, 1.0)))?;
    }
    Ok(())
}

fn draw_radar<DB: DrawingBackend>(canvas: &Canvas<'_, DB>, r: &Radar) -> Result<()> {
    let spokes = r.category_count();
    let web = stroke(r.web_color, 1.0);
    let center = canvas.px((0.0, 0.0));

    for ring in RADAR_RINGS {
        let mut outline: Vec<(i32, i32)> =
            (0..spokes).map(|i| canvas.px(r.spoke_point(i, ring))).collect();
        if let Some(&first) = outline.first() {
            outline.push(first);
        }
        canvas.draw(&PathElement::new(outline, web))?;
    }
    for i in 0..spokes {
        canvas.draw(&PathElement::new(vec![center, canvas.px(r.spoke_point(i, 1.0))], web))?;
    }

    for g in 0..r.group_count() {
        let pixels: Vec<(i32, i32)> = r.polygon(g).into_iter().map(|p| canvas.px(p)).collect();
        let fill = r.fill_color(g);
        canvas.draw(&Polygon::new(pixels.clone(), rgba(fill).filled()))?;
        let mut outline = pixels;
        if let Some(&first) = outline.first() {
            outline.push(first);
        }
        canvas.draw(&PathElement::new(outline, stroke(fill.with_alpha(255), 2.0)))?;
    }

    if let Some(names) = &r.category_names {
        for (i, name) in names.iter().enumerate().take(spokes) {
            let a = r.spoke_angle(i);
            let h = if a.cos() > 0.1 {
                HPos::Left
            } else if a.cos() < -0.1 {
                HPos::Right
            } else {
                HPos::Center
            };
            let v = if a.sin() > 0.1 {
                VPos::Bottom
            } else if a.sin() < -0.1 {
                VPos::Top
            } else {
                VPos::Center
            };
            let pos = canvas.px(r.spoke_point(i, LABEL_RADIUS));
            canvas.text(name, pos, LABEL_FONT_PX, Color::BLACK, h, v);
        }
    }
    Ok(())
}

/// Slices are drawn as true circles in pixel space regardless of the axis aspect.
fn draw_pie<DB: DrawingBackend>(canvas: &Canvas<'_, DB>, p: &Pie) -> Result<()> {
    let c0 = to_f(canvas.px((0.0, 0.0)));
    let ux = (to_f(canvas.px((1.0, 0.0))).0 - c0.0).abs();
    let uy = (to_f(canvas.px((0.0, 1.0))).1 - c0.1).abs();
    let radius = ux.min(uy);
    if radius < 1.0 {
        return Ok(());
    }
    // screen y grows downwards
    let at = |center: (f64, f64), angle: f64, r: f64| {
        (center.0 + r * angle.cos(), center.1 - r * angle.sin())
    };
    let offset = p.explode_offset() * radius;

    for (i, (start, end)) in p.slice_angles().into_iter().enumerate() {
        let mid = (start + end) / 2.0;
        let center = at(c0, mid, offset);
        let span = start - end;
        let steps = ((span / TAU * 360.0).ceil() as usize).max(2);
        let mut outline = vec![to_i(center)];
        outline.extend((0..=steps).map(|k| {
            let a = start - span * k as f64 / steps as f64;
            to_i(at(center, a, radius))
        }));
        let color = p.colors.get(i).copied().unwrap_or(Color::GRAY);
        canvas.draw(&Polygon::new(outline, rgba(color).filled()))?;

        let locale = canvas.locale;
        if let Some(caption) = p.slice_caption(i, &|v| format_value(v, locale)) {
            let pos = to_i(at(center, mid, radius * PIE_CAPTION_RADIUS));
            canvas.text(&caption, pos, LABEL_FONT_PX, Color::BLACK, HPos::Center, VPos::Center);
        }
    }
    Ok(())
}

/// L-shaped bar anchored at the lower-right corner of the data area.
fn draw_scale_bar<DB: DrawingBackend>(canvas: &Canvas<'_, DB>, b: &ScaleBar) -> Result<()> {
    let (xr, yr) = canvas.pixel_rect();
    let limits = canvas.limits;
    let origin = to_f(canvas.px((limits.x_min, limits.y_min)));
    let corner_x = to_f(canvas.px((limits.x_min + b.size_x(), limits.y_min)));
    let corner_y = to_f(canvas.px((limits.x_min, limits.y_min + b.size_y())));
    let width_px = (corner_x.0 - origin.0).abs();
    let height_px = (corner_y.1 - origin.1).abs();

    let pad = b.padding_px.round() as i32;
    let t = (b.thickness.round() as i32).max(1);
    let (cx, cy) = (xr.end - pad, yr.end - pad);
    let (w, h) = (width_px.round() as i32, height_px.round() as i32);
    let fill = rgba(b.color).filled();

    canvas.draw(&Rectangle::new([(cx - w, cy - t), (cx, cy)], fill))?;
    canvas.draw(&Rectangle::new([(cx - t, cy - h), (cx, cy)], fill))?;

    if let Some(label) = &b.label_x {
        let pos = (cx - w / 2, cy - t - 4);
        canvas.text(label, pos, b.font_size, b.color, HPos::Center, VPos::Bottom);
    }
    if let Some(label) = &b.label_y {
        let pos = (cx - t - 6, cy - h / 2);
        canvas.text(label, pos, b.font_size, b.color, HPos::Right, VPos::Center);
    }
    Ok(())
}
