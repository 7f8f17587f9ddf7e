//! Per-factory option structs.
//!
//! Every option a factory recognizes is a field here; `Default` carries the
//! documented defaults. Override only what you need:
//!
//! ```
//! use quickplot::plot::PieOptions;
//! let opts = PieOptions { show_percentages: true, ..Default::default() };
//! assert!(opts.show_labels);
//! ```
//!
//! A `color: Option<Color>` left as `None` takes the plot's next cycle color.

use crate::color::{Color, Colormap};
use crate::models::{LineStyle, MarkerShape};

/// Label given to function curves unless overridden.
pub const DEFAULT_FUNCTION_LABEL: &str = "f(x)";

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterOptions {
    pub color: Option<Color>,
    pub line_width: f64,
    pub marker_size: f64,
    pub marker_shape: MarkerShape,
    pub line_style: LineStyle,
    pub label: Option<String>,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self {
            color: None,
            line_width: 1.0,
            marker_size: 5.0,
            marker_shape: MarkerShape::FilledCircle,
            line_style: LineStyle::Solid,
            label: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VectorFieldOptions {
    pub label: Option<String>,
    pub color: Option<Color>,
    /// Color arrows by relative magnitude instead of using `color`.
    pub colormap: Option<Colormap>,
    pub scale_factor: f64,
}

impl Default for VectorFieldOptions {
    fn default() -> Self {
        Self {
            label: None,
            color: None,
            colormap: None,
            scale_factor: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowOptions {
    pub line_width: f64,
    /// Head width as a multiple of the line width.
    pub arrowhead_width: f64,
    /// Head length as a multiple of the line width.
    pub arrowhead_length: f64,
    pub color: Option<Color>,
    pub label: Option<String>,
}

impl Default for ArrowOptions {
    fn default() -> Self {
        Self {
            line_width: 5.0,
            arrowhead_width: 3.0,
            arrowhead_length: 3.0,
            color: None,
            label: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarOptions {
    pub category_names: Option<Vec<String>>,
    pub group_names: Option<Vec<String>>,
    /// One per group; `None` picks palette colors by group index.
    pub fill_colors: Option<Vec<Color>>,
    pub fill_alpha: f64,
    pub web_color: Color,
}

impl Default for RadarOptions {
    fn default() -> Self {
        Self {
            category_names: None,
            group_names: None,
            fill_colors: None,
            fill_alpha: 0.4,
            web_color: Color::GRAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionOptions {
    pub color: Option<Color>,
    pub line_width: f64,
    pub marker_size: f64,
    pub label: Option<String>,
    pub marker_shape: MarkerShape,
    pub line_style: LineStyle,
}

impl Default for FunctionOptions {
    fn default() -> Self {
        Self {
            color: None,
            line_width: 1.0,
            marker_size: 0.0,
            label: Some(DEFAULT_FUNCTION_LABEL.to_string()),
            marker_shape: MarkerShape::FilledCircle,
            line_style: LineStyle::Solid,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBarOptions {
    pub label_x: Option<String>,
    pub label_y: Option<String>,
    pub thickness: f64,
    pub font_size: f64,
    pub color: Color,
    pub padding_px: f64,
}

impl Default for ScaleBarOptions {
    fn default() -> Self {
        Self {
            label_x: None,
            label_y: None,
            thickness: 2.0,
            font_size: 12.0,
            color: Color::BLACK,
            padding_px: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieOptions {
    pub slice_labels: Option<Vec<String>>,
    /// One per slice; `None` picks palette colors by slice index.
    pub colors: Option<Vec<Color>>,
    pub exploded: bool,
    pub show_values: bool,
    pub show_percentages: bool,
    pub show_labels: bool,
    pub label: Option<String>,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            slice_labels: None,
            colors: None,
            exploded: false,
            show_values: false,
            show_percentages: false,
            show_labels: true,
            label: None,
        }
    }
}
