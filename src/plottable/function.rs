use std::fmt;
use std::sync::Arc;

use crate::color::Color;
use crate::error::{PlotResult, ensure_non_negative};
use crate::models::{LineStyle, MarkerShape};

/// Partial function of x: `None` (or a non-finite result) means undefined at that x.
pub type PartialFn = Arc<dyn Fn(f64) -> Option<f64> + Send + Sync>;

/// Curve evaluated lazily over whatever x range the plot shows.
#[derive(Clone)]
pub struct Function {
    function: PartialFn,
    pub color: Color,
    pub line_width: f64,
    pub marker_size: f64,
    pub label: Option<String>,
    pub marker_shape: MarkerShape,
    pub line_style: LineStyle,
}

impl Function {
    pub(crate) fn new(
        function: PartialFn,
        color: Color,
        line_width: f64,
        marker_size: f64,
        label: Option<String>,
        marker_shape: MarkerShape,
        line_style: LineStyle,
    ) -> PlotResult<Self> {
        ensure_non_negative("line_width", line_width)?;
        ensure_non_negative("marker_size", marker_size)?;
        Ok(Self {
            function,
            color,
            line_width,
            marker_size,
            label,
            marker_shape,
            line_style,
        })
    }

    /// Value at `x`, or `None` where the function is undefined or not finite.
    pub fn eval(&self, x: f64) -> Option<f64> {
        (self.function)(x).filter(|y| y.is_finite())
    }

    /// Sample `n` evenly spaced x values across `[x_min, x_max]` and return the
    /// continuous runs. A gap in the domain ends the current run.
    pub fn sample(&self, x_min: f64, x_max: f64, n: usize) -> Vec<Vec<(f64, f64)>> {
        let mut segments: Vec<Vec<(f64, f64)>> = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        for x in sample_xs(x_min, x_max, n) {
            match self.eval(x) {
                Some(y) => current.push((x, y)),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("color", &self.color)
            .field("line_width", &self.line_width)
            .field("marker_size", &self.marker_size)
            .field("label", &self.label)
            .field("marker_shape", &self.marker_shape)
            .field("line_style", &self.line_style)
            .finish_non_exhaustive()
    }
}

/// `n` evenly spaced values from `x_min` to `x_max` inclusive.
pub fn sample_xs(x_min: f64, x_max: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (x_max - x_min) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |k| x_min + step * k as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn func(f: impl Fn(f64) -> Option<f64> + Send + Sync + 'static) -> Function {
        Function::new(
            Arc::new(f),
            Color::BLACK,
            1.0,
            0.0,
            None,
            MarkerShape::FilledCircle,
            LineStyle::Solid,
        )
        .unwrap()
    }

    #[test]
    fn gaps_split_segments() {
        let f = func(|x| if x.abs() < 0.5 { None } else { Some(1.0 / x) });
        let segs = f.sample(-2.0, 2.0, 9);
        assert_eq!(segs.len(), 2);
        assert!(segs[0].iter().all(|(x, _)| *x < 0.0));
        assert!(segs[1].iter().all(|(x, _)| *x > 0.0));
    }

    #[test]
    fn non_finite_results_count_as_undefined() {
        let f = func(|x| Some(x.ln()));
        assert_eq!(f.eval(-1.0), None);
        assert_eq!(f.eval(1.0), Some(0.0));
    }

    #[test]
    fn sample_endpoints_are_inclusive() {
        let xs: Vec<f64> = sample_xs(0.0, 1.0, 3).collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0]);
        assert_eq!(sample_xs(4.0, 9.0, 1).collect::<Vec<_>>(), vec![4.0]);
        assert_eq!(sample_xs(4.0, 9.0, 0).count(), 0);
    }
}
