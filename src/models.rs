use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// 2D vector (vector field samples).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn scaled(&self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Rectangular data-space extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisLimits {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Extent used when nothing on the plot reports limits.
    pub const fn fallback() -> Self {
        Self::new(-10.0, 10.0, -10.0, 10.0)
    }

    /// Bounding box of parallel coordinate slices, ignoring non-finite values.
    /// `None` when no finite (x, y) pair exists.
    pub fn from_points(xs: &[f64], ys: &[f64]) -> Option<Self> {
        let mut out: Option<Self> = None;
        for (&x, &y) in xs.iter().zip(ys) {
            if !(x.is_finite() && y.is_finite()) {
                continue;
            }
            let p = Self::new(x, x, y, y);
            out = Some(match out {
                Some(acc) => acc.union(&p),
                None => p,
            });
        }
        out
    }

    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.x_min.min(other.x_min),
            self.x_max.max(other.x_max),
            self.y_min.min(other.y_min),
            self.y_max.max(other.y_max),
        )
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Widen degenerate (zero-span) axes by one unit on each side.
    pub fn expand_degenerate(&self) -> Self {
        let mut out = *self;
        if out.width().abs() < f64::EPSILON {
            out.x_min -= 1.0;
            out.x_max += 1.0;
        }
        if out.height().abs() < f64::EPSILON {
            out.y_min -= 1.0;
            out.y_max += 1.0;
        }
        out
    }

    /// Grow each axis by a fraction of its span (split evenly on both sides).
    pub fn padded(&self, frac_x: f64, frac_y: f64) -> Self {
        let dx = self.width() * frac_x / 2.0;
        let dy = self.height() * frac_y / 2.0;
        Self::new(
            self.x_min - dx,
            self.x_max + dx,
            self.y_min - dy,
            self.y_max + dy,
        )
    }

    /// Check finiteness and strict ordering on both axes.
    pub fn validate(&self) -> PlotResult<()> {
        let all_finite = [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(PlotError::invalid("axis limits must be finite"));
        }
        if self.x_min >= self.x_max || self.y_min >= self.y_max {
            return Err(PlotError::invalid(format!(
                "axis limits must satisfy min < max, got x {}..{} y {}..{}",
                self.x_min, self.x_max, self.y_min, self.y_max
            )));
        }
        Ok(())
    }

    pub fn contains(&self, other: &Self) -> bool {
        self.x_min <= other.x_min
            && self.x_max >= other.x_max
            && self.y_min <= other.y_min
            && self.y_max >= other.y_max
    }
}

/// Marker drawn at each data point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    None,
    #[default]
    FilledCircle,
    OpenCircle,
    FilledSquare,
    OpenSquare,
    FilledDiamond,
    OpenDiamond,
    TriangleUp,
    TriangleDown,
    Cross,
    Eks,
}

/// Line dash pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    None,
    #[default]
    Solid,
    Dash,
    DashDot,
    Dot,
}

impl LineStyle {
    /// On/off dash lengths in multiples of the line width; `None` means continuous.
    pub fn dash_pattern(&self) -> Option<&'static [f64]> {
        match self {
            LineStyle::None | LineStyle::Solid => None,
            LineStyle::Dash => Some(&[4.0, 2.0]),
            LineStyle::DashDot => Some(&[4.0, 2.0, 1.0, 2.0]),
            LineStyle::Dot => Some(&[1.0, 2.0]),
        }
    }
}

/// Decoration at the start of a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    #[default]
    Flat,
    Round,
    Square,
}

/// Arrowhead drawn at a line's terminal point.
///
/// `width` and `length` are multiples of the line width, so thicker arrows get
/// proportionally larger heads.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrowCap {
    pub width: f64,
    pub length: f64,
    pub filled: bool,
}
