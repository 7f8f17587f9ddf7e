use std::f64::consts::{FRAC_PI_2, TAU};

use crate::color::Color;
use crate::error::{PlotError, PlotResult, ensure_finite};
use crate::models::AxisLimits;

/// Radius (in data units) at which category names are placed.
pub const LABEL_RADIUS: f64 = 1.1;

/// Spider chart: one spoke per category, one filled polygon per group.
///
/// `values[group][category]`. Each category is normalized by its largest
/// absolute value across groups so all spokes share the unit radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Radar {
    values: Vec<Vec<f64>>,
    normalized: Vec<Vec<f64>>,
    pub category_names: Option<Vec<String>>,
    pub group_names: Option<Vec<String>>,
    pub fill_colors: Vec<Color>,
    /// Fill opacity in `[0, 1]`.
    pub fill_alpha: f64,
    pub web_color: Color,
}

impl Radar {
    pub(crate) fn new(
        values: Vec<Vec<f64>>,
        category_names: Option<Vec<String>>,
        group_names: Option<Vec<String>>,
        fill_colors: Vec<Color>,
        fill_alpha: f64,
        web_color: Color,
    ) -> PlotResult<Self> {
        let categories = Self::check_shape(&values)?;
        let groups = values.len();
        if let Some(names) = &category_names
            && names.len() != categories
        {
            return Err(PlotError::invalid(format!(
                "expected {categories} category names, got {}",
                names.len()
            )));
        }
        if let Some(names) = &group_names
            && names.len() != groups
        {
            return Err(PlotError::invalid(format!(
                "expected {groups} group names, got {}",
                names.len()
            )));
        }
        if fill_colors.len() < groups {
            return Err(PlotError::invalid(format!(
                "need a fill color for each of {groups} groups, got {}",
                fill_colors.len()
            )));
        }
        ensure_finite("fill_alpha", fill_alpha)?;
        if !(0.0..=1.0).contains(&fill_alpha) {
            return Err(PlotError::invalid(format!(
                "fill_alpha must be within [0, 1], got {fill_alpha}"
            )));
        }

        let normalized = normalize_columns(&values, categories);
        Ok(Self {
            values,
            normalized,
            category_names,
            group_names,
            fill_colors,
            fill_alpha,
            web_color,
        })
    }

    /// Returns the category count of a rectangular, finite, non-empty matrix.
    pub(crate) fn check_shape(values: &[Vec<f64>]) -> PlotResult<usize> {
        let first = values
            .first()
            .ok_or_else(|| PlotError::invalid("radar needs at least one group"))?;
        let categories = first.len();
        if categories == 0 {
            return Err(PlotError::invalid("radar needs at least one category"));
        }
        if let Some((g, row)) = values.iter().enumerate().find(|(_, r)| r.len() != categories) {
            return Err(PlotError::invalid(format!(
                "radar group {g} has {} values, expected {categories}",
                row.len()
            )));
        }
        for &v in values.iter().flatten() {
            ensure_finite("radar value", v)?;
        }
        Ok(categories)
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Values scaled per category into `[-1, 1]`.
    pub fn normalized(&self) -> &[Vec<f64>] {
        &self.normalized
    }

    pub fn group_count(&self) -> usize {
        self.values.len()
    }

    pub fn category_count(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    /// Angle of spoke `i`: the first spoke points straight up, the rest follow clockwise.
    pub fn spoke_angle(&self, i: usize) -> f64 {
        FRAC_PI_2 - TAU * i as f64 / self.category_count() as f64
    }

    /// Point on spoke `i` at `radius`.
    pub fn spoke_point(&self, i: usize, radius: f64) -> (f64, f64) {
        let a = self.spoke_angle(i);
        (radius * a.cos(), radius * a.sin())
    }

    /// Vertices of the polygon for `group`, in data coordinates.
    pub fn polygon(&self, group: usize) -> Vec<(f64, f64)> {
        self.normalized
            .get(group)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, &r)| self.spoke_point(i, r))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Fill color of `group` with `fill_alpha` applied. Falls back to the web
    /// color when `fill_colors` has been emptied.
    pub fn fill_color(&self, group: usize) -> Color {
        let base = self
            .fill_colors
            .get(group % self.fill_colors.len().max(1))
            .copied()
            .unwrap_or(self.web_color);
        base.with_alpha((self.fill_alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    pub fn limits(&self) -> AxisLimits {
        let r = LABEL_RADIUS + 0.1;
        AxisLimits::new(-r, r, -r, r)
    }
}

fn normalize_columns(values: &[Vec<f64>], categories: usize) -> Vec<Vec<f64>> {
    let maxes: Vec<f64> = (0..categories)
        .map(|c| values.iter().map(|row| row[c].abs()).fold(0.0, f64::max))
        .collect();
    values
        .iter()
        .map(|row| {
            row.iter()
                .zip(&maxes)
                .map(|(&v, &m)| if m > 0.0 { v / m } else { 0.0 })
                .collect()
        })
        .collect()
}
