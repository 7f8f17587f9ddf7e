//! Colors, palettes, the per-plot color cycle, and intensity colormaps.
//!
//! - `Colorset`: fixed 10-color palettes indexed by position (wraps around)
//! - `ColorCycle`: cursor over a colorset used to auto-assign single-color elements
//! - `Colormap`: maps an intensity in `[0, 1]` to a color (vector field magnitudes)

use serde::{Deserialize, Serialize};

use crate::error::PlotError;

/// RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same color with a different alpha channel.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn alpha_f64(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, PlotError> {
        let hex = s.trim().trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| PlotError::invalid(format!("invalid hex color: {s:?}")))
        };
        match hex.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(PlotError::invalid(format!("invalid hex color: {s:?}"))),
        }
    }

    /// `#RRGGBB` for opaque colors, `#RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = PlotError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

/// Tableau "Category10" palette (matplotlib's default cycle).
const CATEGORY10: [Color; 10] = [
    Color::rgb(31, 119, 180),  // blue   (#1F77B4)
    Color::rgb(255, 127, 14),  // orange (#FF7F0E)
    Color::rgb(44, 160, 44),   // green  (#2CA02C)
    Color::rgb(214, 39, 40),   // red    (#D62728)
    Color::rgb(148, 103, 189), // purple (#9467BD)
    Color::rgb(140, 86, 75),   // brown  (#8C564B)
    Color::rgb(227, 119, 194), // pink   (#E377C2)
    Color::rgb(127, 127, 127), // gray   (#7F7F7F)
    Color::rgb(188, 189, 34),  // olive  (#BCBD22)
    Color::rgb(23, 190, 207),  // cyan   (#17BECF)
];

/// Microsoft Office (2013+) chart series palette.
const OFFICE10: [Color; 10] = [
    Color::rgb(68, 114, 196),  // blue       (#4472C4)
    Color::rgb(237, 125, 49),  // orange     (#ED7D31)
    Color::rgb(165, 165, 165), // gray       (#A5A5A5)
    Color::rgb(255, 192, 0),   // gold       (#FFC000)
    Color::rgb(91, 155, 213),  // light blue (#5B9BD5)
    Color::rgb(112, 173, 71),  // green      (#70AD47)
    Color::rgb(38, 68, 120),   // dark blue  (#264478)
    Color::rgb(158, 72, 14),   // dark org.  (#9E480E)
    Color::rgb(99, 99, 99),    // dark gray  (#636363)
    Color::rgb(153, 115, 0),   // brownish   (#997300)
];

/// Named palettes used for automatic color assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colorset {
    #[default]
    Category10,
    Office,
}

impl Colorset {
    /// All colors of the palette in order.
    pub fn colors(&self) -> &'static [Color] {
        match self {
            Colorset::Category10 => &CATEGORY10,
            Colorset::Office => &OFFICE10,
        }
    }

    /// Color at position `idx`, wrapping past the end of the palette.
    #[inline]
    pub fn color(&self, idx: usize) -> Color {
        let colors = self.colors();
        colors[idx % colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors().len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors().is_empty()
    }

    /// First `n` palette colors by index (used for per-slice/per-group defaults).
    pub fn take(&self, n: usize) -> Vec<Color> {
        (0..n).map(|i| self.color(i)).collect()
    }
}

/// Rotating cursor over a colorset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorCycle {
    colorset: Colorset,
    cursor: usize,
}

impl ColorCycle {
    pub fn new(colorset: Colorset) -> Self {
        Self {
            colorset,
            cursor: 0,
        }
    }

    pub fn colorset(&self) -> Colorset {
        self.colorset
    }

    /// Number of colors handed out since the last reset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Color the next call to `next_color` will return, without advancing.
    pub fn peek(&self) -> Color {
        self.colorset.color(self.cursor)
    }

    /// Return the current color and advance the cursor.
    pub fn next_color(&mut self) -> Color {
        let c = self.peek();
        self.cursor += 1;
        c
    }

    /// Rewind to the first palette color.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

/// Intensity-to-color mappings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    Grayscale,
    Viridis,
}

const VIRIDIS_ANCHORS: [Color; 5] = [
    Color::rgb(68, 1, 84),
    Color::rgb(59, 82, 139),
    Color::rgb(33, 145, 140),
    Color::rgb(94, 201, 98),
    Color::rgb(253, 231, 37),
];

impl Colormap {
    /// Map `t` (clamped to `[0, 1]`; NaN treated as 0) to an opaque color.
    pub fn color_at(&self, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Colormap::Grayscale => {
                let v = (t * 255.0).round() as u8;
                Color::rgb(v, v, v)
            }
            Colormap::Viridis => {
                let segments = (VIRIDIS_ANCHORS.len() - 1) as f64;
                let pos = t * segments;
                let i = (pos.floor() as usize).min(VIRIDIS_ANCHORS.len() - 2);
                let frac = pos - i as f64;
                lerp(VIRIDIS_ANCHORS[i], VIRIDIS_ANCHORS[i + 1], frac)
            }
        }
    }
}

fn lerp(a: Color, b: Color, t: f64) -> Color {
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    Color::rgb(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}
