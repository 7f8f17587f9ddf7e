//! Utility functions for rendering: color conversion, locale-aware numbers,
//! tick placement, text measurement and dash splitting.

use num_format::{Locale, ToFormattedString};
use plotters::prelude::*;

use crate::color::Color;

/// Convert to the plotters color type.
#[inline]
pub fn rgba(c: Color) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.alpha_f64())
}

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Recognized tags (case-insensitive): `de`/`de_DE`/`german`, `fr`, `es`, `it`,
/// `pt`/`pt_BR` and `nl`, each optionally with its country suffix. Anything else
/// formats as English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'), // default
    }
}

/// Format `v` with grouped thousands and `decimals` fraction digits for `locale_tag`.
pub fn format_number(v: f64, decimals: usize, locale_tag: &str) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let (locale, dec_sep) = map_locale(locale_tag);
    let fixed = format!("{:.*}", decimals, v.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let grouped = int_part
        .parse::<u64>()
        .map(|n| n.to_formatted_string(locale))
        .unwrap_or_else(|_| int_part.to_string());
    let negative = v < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push(dec_sep);
        out.push_str(f);
    }
    out
}

/// Format a value for display: whole numbers without decimals, others with two.
pub fn format_value(v: f64, locale_tag: &str) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format_number(v, 0, locale_tag)
    } else {
        format_number(v, 2, locale_tag)
    }
}

/// Round `raw` up to 1, 2 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let exp = raw.log10().floor();
    let base = 10f64.powf(exp);
    let frac = raw / base;
    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Tick positions within `[min, max]`, roughly `target` of them, on a nice step.
/// Returns the ticks and the step.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> (Vec<f64>, f64) {
    let span = max - min;
    if !(span.is_finite() && span > 0.0) || target == 0 {
        return (Vec::new(), 1.0);
    }
    let step = nice_step(span / target as f64);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    let ticks = (first..=last)
        .map(|k| {
            let t = k as f64 * step;
            // snap -0.0 and float dust to zero
            if t.abs() < step * 1e-9 { 0.0 } else { t }
        })
        .collect();
    (ticks, step)
}

/// Fraction digits needed to tell ticks `step` apart.
pub fn tick_decimals(step: f64) -> usize {
    if step >= 1.0 || step <= 0.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    }
}

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Split a pixel polyline into the "on" pieces of a dash pattern.
/// `pattern` alternates on/off lengths in multiples of `unit`.
pub fn dash_segments(points: &[(i32, i32)], pattern: &[f64], unit: f64) -> Vec<Vec<(i32, i32)>> {
    let lengths: Vec<f64> = pattern.iter().map(|p| (p * unit).max(1.0)).collect();
    if lengths.is_empty() || points.len() < 2 {
        return vec![points.to_vec()];
    }
    let to_px = |x: f64, y: f64| (x.round() as i32, y.round() as i32);

    let mut out: Vec<Vec<(i32, i32)>> = Vec::new();
    let mut idx = 0usize; // position in pattern
    let mut left = lengths[0]; // remaining length of the current dash/gap
    let mut current: Vec<(i32, i32)> = vec![points[0]];

    for w in points.windows(2) {
        let (x0, y0) = (w[0].0 as f64, w[0].1 as f64);
        let (x1, y1) = (w[1].0 as f64, w[1].1 as f64);
        let seg_len = (x1 - x0).hypot(y1 - y0);
        let mut pos = 0.0;
        while seg_len - pos > left {
            pos += left;
            let t = pos / seg_len;
            let p = to_px(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t);
            if idx % 2 == 0 {
                current.push(p);
                out.push(std::mem::take(&mut current));
            } else {
                current = vec![p];
            }
            idx = (idx + 1) % lengths.len();
            left = lengths[idx];
        }
        left -= seg_len - pos;
        if idx % 2 == 0 {
            current.push(w[1]);
        }
    }
    if idx % 2 == 0 && current.len() > 1 {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_use_locale_separators() {
        assert_eq!(format_number(1234567.891, 2, "en"), "1,234,567.89");
        assert_eq!(format_number(1234567.891, 2, "de"), "1.234.567,89");
        assert_eq!(format_number(-0.26, 1, "en"), "-0.3");
        assert_eq!(format_number(-0.001, 1, "en"), "0.0");
        assert_eq!(format_value(30.0, "en"), "30");
    }

    #[test]
    fn unknown_tags_format_as_english() {
        assert_eq!(map_locale("en_US").1, '.');
        assert_eq!(map_locale("DE_de").1, ',');
        assert_eq!(format_number(1500.0, 0, "xx"), "1,500");
    }

    #[test]
    fn ticks_land_on_nice_steps() {
        let (ticks, step) = nice_ticks(-1.0, 9.0, 5);
        assert_eq!(step, 2.0);
        assert_eq!(ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(tick_decimals(0.05), 2);
        assert_eq!(tick_decimals(5.0), 0);
    }

    #[test]
    fn dashes_alternate_on_and_off() {
        let segs = dash_segments(&[(0, 0), (10, 0)], &[2.0, 2.0], 1.0);
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0], vec![(0, 0), (2, 0)]);
        assert_eq!(segs[1], vec![(4, 0), (6, 0)]);
        assert_eq!(segs[2], vec![(8, 0), (10, 0)]);
    }
}
