use std::f64::consts::{FRAC_PI_2, TAU};

use crate::color::Color;
use crate::error::{PlotError, PlotResult, ensure_non_negative};
use crate::models::AxisLimits;

/// Radial offset of each slice when the chart is exploded.
pub const EXPLODE_OFFSET: f64 = 0.1;

/// Pie chart of unit radius centred on the origin.
///
/// Slices start at twelve o'clock and proceed clockwise in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Pie {
    values: Vec<f64>,
    pub slice_labels: Option<Vec<String>>,
    pub colors: Vec<Color>,
    pub exploded: bool,
    pub show_values: bool,
    pub show_percentages: bool,
    pub show_labels: bool,
    pub label: Option<String>,
}

impl Pie {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        values: Vec<f64>,
        slice_labels: Option<Vec<String>>,
        colors: Vec<Color>,
        exploded: bool,
        show_values: bool,
        show_percentages: bool,
        show_labels: bool,
        label: Option<String>,
    ) -> PlotResult<Self> {
        Self::check_values(&values)?;
        let n = values.len();
        if let Some(labels) = &slice_labels
            && labels.len() != n
        {
            return Err(PlotError::invalid(format!(
                "expected {n} slice labels, got {}",
                labels.len()
            )));
        }
        if colors.len() != n {
            return Err(PlotError::invalid(format!(
                "expected {n} slice colors, got {}",
                colors.len()
            )));
        }
        Ok(Self {
            values,
            slice_labels,
            colors,
            exploded,
            show_values,
            show_percentages,
            show_labels,
            label,
        })
    }

    pub(crate) fn check_values(values: &[f64]) -> PlotResult<()> {
        if values.is_empty() {
            return Err(PlotError::invalid("pie needs at least one slice"));
        }
        for &v in values {
            ensure_non_negative("pie value", v)?;
        }
        if values.iter().sum::<f64>() <= 0.0 {
            return Err(PlotError::invalid("pie values must have a positive sum"));
        }
        Ok(())
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Share of each slice in percent (sums to 100).
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total();
        self.values.iter().map(|v| v / total * 100.0).collect()
    }

    /// `(start, end)` angle of each slice in radians; `end < start` since slices run clockwise.
    pub fn slice_angles(&self) -> Vec<(f64, f64)> {
        let total = self.total();
        let mut start = FRAC_PI_2;
        self.values
            .iter()
            .map(|v| {
                let end = start - TAU * v / total;
                let span = (start, end);
                start = end;
                span
            })
            .collect()
    }

    /// Offset of slice centres from the origin.
    pub fn explode_offset(&self) -> f64 {
        if self.exploded { EXPLODE_OFFSET } else { 0.0 }
    }

    /// Caption for slice `i`, combining its label, value and percentage as enabled.
    /// `format_value` renders the raw value (locale formatting lives in the renderer).
    pub fn slice_caption(&self, i: usize, format_value: &dyn Fn(f64) -> String) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        if self.show_labels
            && let Some(label) = self.slice_labels.as_ref().and_then(|l| l.get(i))
        {
            parts.push(label.clone());
        }
        let value = *self.values.get(i)?;
        if self.show_values {
            parts.push(format_value(value));
        }
        if self.show_percentages {
            parts.push(format!("{:.1}%", value / self.total() * 100.0));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    pub fn limits(&self) -> AxisLimits {
        let r = 1.0 + self.explode_offset();
        AxisLimits::new(-r, r, -r, r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pie(values: Vec<f64>) -> PlotResult<Pie> {
        let n = values.len();
        Pie::new(values, None, vec![Color::BLACK; n], false, false, false, true, None)
    }

    #[test]
    fn percentages_sum_to_hundred() {
        let p = pie(vec![1.0, 1.0, 2.0]).unwrap();
        assert_eq!(p.percentages(), vec![25.0, 25.0, 50.0]);
    }

    #[test]
    fn angles_cover_full_turn_clockwise() {
        let p = pie(vec![1.0, 3.0]).unwrap();
        let a = p.slice_angles();
        assert!((a[0].0 - FRAC_PI_2).abs() < 1e-12);
        assert!((a[0].1 - (FRAC_PI_2 - TAU / 4.0)).abs() < 1e-12);
        assert!((a[1].1 - (FRAC_PI_2 - TAU)).abs() < 1e-12);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(pie(vec![]).is_err());
        assert!(pie(vec![0.0, 0.0]).is_err());
        assert!(pie(vec![1.0, -1.0]).is_err());
        assert!(pie(vec![1.0, f64::NAN]).is_err());
    }

    #[test]
    fn caption_respects_flags() {
        let mut p = Pie::new(
            vec![1.0, 3.0],
            Some(vec!["a".into(), "b".into()]),
            vec![Color::BLACK; 2],
            false,
            true,
            true,
            true,
            None,
        )
        .unwrap();
        let fmt = |v: f64| format!("{v}");
        assert_eq!(p.slice_caption(1, &fmt).as_deref(), Some("b 3 75.0%"));
        p.show_values = false;
        p.show_percentages = false;
        p.show_labels = false;
        assert_eq!(p.slice_caption(0, &fmt), None);
    }
}
