use crate::color::Color;
use crate::error::{PlotError, PlotResult, ensure_non_negative};
use crate::models::{ArrowCap, AxisLimits, LineCap, LineStyle, MarkerShape};

/// Connected x/y series with optional markers and line caps.
///
/// Arrows are two-point scatters with an `end_cap`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
    xs: Vec<f64>,
    ys: Vec<f64>,
    pub color: Color,
    pub line_width: f64,
    pub marker_size: f64,
    pub marker_shape: MarkerShape,
    pub line_style: LineStyle,
    pub label: Option<String>,
    pub start_cap: LineCap,
    pub end_cap: Option<ArrowCap>,
}

impl Scatter {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        xs: Vec<f64>,
        ys: Vec<f64>,
        color: Color,
        line_width: f64,
        marker_size: f64,
        marker_shape: MarkerShape,
        line_style: LineStyle,
        label: Option<String>,
    ) -> PlotResult<Self> {
        if xs.is_empty() {
            return Err(PlotError::invalid("scatter needs at least one point"));
        }
        if xs.len() != ys.len() {
            return Err(PlotError::invalid(format!(
                "xs and ys must have equal length, got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        ensure_non_negative("line_width", line_width)?;
        ensure_non_negative("marker_size", marker_size)?;
        Ok(Self {
            xs,
            ys,
            color,
            line_width,
            marker_size,
            marker_shape,
            line_style,
            label,
            start_cap: LineCap::default(),
            end_cap: None,
        })
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Points in drawing order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    pub fn limits(&self) -> Option<AxisLimits> {
        AxisLimits::from_points(&self.xs, &self.ys)
    }
}
