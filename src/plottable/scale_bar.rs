use crate::color::Color;
use crate::error::{PlotResult, ensure_non_negative, ensure_positive};

/// L-shaped size reference anchored to the lower-right corner of the data area.
///
/// `size_x`/`size_y` are in data units; `thickness`, `font_size` and `padding_px`
/// are in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBar {
    size_x: f64,
    size_y: f64,
    pub label_x: Option<String>,
    pub label_y: Option<String>,
    pub thickness: f64,
    pub font_size: f64,
    pub color: Color,
    pub padding_px: f64,
}

impl ScaleBar {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        size_x: f64,
        size_y: f64,
        label_x: Option<String>,
        label_y: Option<String>,
        thickness: f64,
        font_size: f64,
        color: Color,
        padding_px: f64,
    ) -> PlotResult<Self> {
        ensure_positive("size_x", size_x)?;
        ensure_positive("size_y", size_y)?;
        ensure_positive("thickness", thickness)?;
        ensure_positive("font_size", font_size)?;
        ensure_non_negative("padding_px", padding_px)?;
        Ok(Self {
            size_x,
            size_y,
            label_x,
            label_y,
            thickness,
            font_size,
            color,
            padding_px,
        })
    }

    pub fn size_x(&self) -> f64 {
        self.size_x
    }

    pub fn size_y(&self) -> f64 {
        self.size_y
    }
}
