//! Legend box in the upper-right corner of the data area.
//!
//! One row per labelled element: a color swatch and the label text. Radar
//! charts contribute one row per named group.

use anyhow::Result;
use plotters::backend::DrawingBackend;
use plotters::prelude::*;
use plotters::style::Color as _;
use plotters::style::text_anchor::{HPos, VPos};

use super::Canvas;
use super::util::{estimate_text_width_px, rgba};
use crate::color::Color;
use crate::plot::Plot;
use crate::plottable::Plottable;

const FONT_PX: u32 = 12;
const LINE_H: i32 = FONT_PX as i32 + 6;
const PAD: i32 = 6;
const SWATCH_W: i32 = 18;
const SWATCH_TO_TEXT: i32 = 6;
const OFFSET: i32 = 8;

/// Legend entries in drawing order.
pub fn legend_items(plot: &Plot) -> Vec<(String, Color)> {
    let mut items = Vec::new();
    for element in plot.iter() {
        match element {
            Plottable::Scatter(s) => push_label(&mut items, &s.label, s.color),
            Plottable::Function(f) => push_label(&mut items, &f.label, f.color),
            Plottable::VectorField(v) => push_label(&mut items, &v.label, v.color),
            Plottable::Pie(p) => {
                let color = p.colors.first().copied().unwrap_or(Color::GRAY);
                push_label(&mut items, &p.label, color);
            }
            Plottable::Radar(r) => {
                if let Some(names) = &r.group_names {
                    for (g, name) in names.iter().enumerate().take(r.group_count()) {
                        items.push((name.clone(), r.fill_color(g).with_alpha(255)));
                    }
                }
            }
            Plottable::ScaleBar(_) => {}
        }
    }
    items
}

fn push_label(items: &mut Vec<(String, Color)>, label: &Option<String>, color: Color) {
    if let Some(label) = label.as_deref().filter(|l| !l.trim().is_empty()) {
        items.push((label.to_string(), color));
    }
}

/// Draw `items` as a framed box; nothing is drawn for an empty list.
pub fn draw_legend<DB: DrawingBackend>(
    canvas: &Canvas<'_, DB>,
    items: &[(String, Color)],
) -> Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    let (xr, yr) = canvas.pixel_rect();
    let text_w = items
        .iter()
        .map(|(label, _)| estimate_text_width_px(label, FONT_PX) as i32)
        .max()
        .unwrap_or(0);
    let box_w = PAD + SWATCH_W + SWATCH_TO_TEXT + text_w + PAD;
    let box_h = PAD * 2 + LINE_H * items.len() as i32;
    let right = xr.end - OFFSET;
    let left = right - box_w;
    let top = yr.start + OFFSET;

    canvas.draw(&Rectangle::new(
        [(left, top), (right, top + box_h)],
        WHITE.mix(0.9).filled(),
    ))?;
    canvas.draw(&Rectangle::new(
        [(left, top), (right, top + box_h)],
        BLACK.stroke_width(1),
    ))?;

    for (i, (label, color)) in items.iter().enumerate() {
        let cy = top + PAD + LINE_H * i as i32 + LINE_H / 2;
        let sx = left + PAD;
        canvas.draw(&Rectangle::new(
            [(sx, cy - 3), (sx + SWATCH_W, cy + 3)],
            rgba(*color).filled(),
        ))?;
        canvas.text(
            label,
            (sx + SWATCH_W + SWATCH_TO_TEXT, cy),
            FONT_PX as f64,
            Color::BLACK,
            HPos::Left,
            VPos::Center,
        );
    }
    Ok(())
}
