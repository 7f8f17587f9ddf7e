use crate::color::{Color, Colormap};
use crate::error::{PlotError, PlotResult, ensure_finite, ensure_positive};
use crate::models::{AxisLimits, Vector2};

/// Grid of arrows, one per `(xs[i], ys[j])` sample.
///
/// Vectors are stored pre-scaled so the longest one spans `scale_factor / 1.2`
/// data units. With a colormap, each arrow gets a color from its relative
/// magnitude; otherwise every arrow uses `color`.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorField {
    vectors: Vec<Vec<Vector2>>,
    xs: Vec<f64>,
    ys: Vec<f64>,
    scale_factor: f64,
    max_magnitude: f64,
    colormap: Option<Colormap>,
    arrow_colors: Option<Vec<Color>>,
    pub label: Option<String>,
    pub color: Color,
}

impl VectorField {
    pub(crate) fn new(
        vectors: Vec<Vec<Vector2>>,
        xs: Vec<f64>,
        ys: Vec<f64>,
        label: Option<String>,
        color: Color,
        colormap: Option<Colormap>,
        scale_factor: f64,
    ) -> PlotResult<Self> {
        if xs.is_empty() || ys.is_empty() {
            return Err(PlotError::invalid("vector field needs non-empty xs and ys"));
        }
        if vectors.len() != xs.len() {
            return Err(PlotError::invalid(format!(
                "vector grid has {} columns but xs has {} entries",
                vectors.len(),
                xs.len()
            )));
        }
        if let Some((i, col)) = vectors.iter().enumerate().find(|(_, c)| c.len() != ys.len()) {
            return Err(PlotError::invalid(format!(
                "vector grid column {i} has {} rows but ys has {} entries",
                col.len(),
                ys.len()
            )));
        }
        for &v in xs.iter().chain(ys.iter()) {
            ensure_finite("grid coordinate", v)?;
        }
        for v in vectors.iter().flatten() {
            ensure_finite("vector component", v.x)?;
            ensure_finite("vector component", v.y)?;
        }
        ensure_positive("scale_factor", scale_factor)?;

        let magnitudes: Vec<f64> = vectors.iter().flatten().map(Vector2::length).collect();
        let min_mag = magnitudes.iter().copied().fold(f64::INFINITY, f64::min);
        let max_mag = magnitudes.iter().copied().fold(0.0, f64::max);

        let arrow_colors = colormap.map(|cmap| {
            let span = max_mag - min_mag;
            magnitudes
                .iter()
                .map(|m| {
                    let t = if span > 0.0 { (m - min_mag) / span } else { 0.0 };
                    cmap.color_at(t)
                })
                .collect()
        });

        let k = if max_mag > 0.0 {
            scale_factor / (max_mag * 1.2)
        } else {
            1.0
        };
        let vectors = vectors
            .into_iter()
            .map(|col| col.into_iter().map(|v| v.scaled(k)).collect())
            .collect();

        Ok(Self {
            vectors,
            xs,
            ys,
            scale_factor,
            max_magnitude: max_mag,
            colormap,
            arrow_colors,
            label,
            color,
        })
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Scaled vectors, indexed `[x][y]`.
    pub fn vectors(&self) -> &[Vec<Vector2>] {
        &self.vectors
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Largest input magnitude before scaling.
    pub fn max_magnitude(&self) -> f64 {
        self.max_magnitude
    }

    pub fn colormap(&self) -> Option<Colormap> {
        self.colormap
    }

    /// Color of the arrow at grid cell `(i, j)`.
    pub fn arrow_color(&self, i: usize, j: usize) -> Color {
        self.arrow_colors
            .as_ref()
            .and_then(|c| c.get(i * self.ys.len() + j).copied())
            .unwrap_or(self.color)
    }

    /// `(tail, head, color)` for every arrow, each centred on its grid point.
    pub fn arrows(&self) -> Vec<((f64, f64), (f64, f64), Color)> {
        let mut out = Vec::with_capacity(self.xs.len() * self.ys.len());
        for (i, &x) in self.xs.iter().enumerate() {
            for (j, &y) in self.ys.iter().enumerate() {
                let v = self.vectors[i][j];
                let tail = (x - v.x / 2.0, y - v.y / 2.0);
                let head = (x + v.x / 2.0, y + v.y / 2.0);
                out.push((tail, head, self.arrow_color(i, j)));
            }
        }
        out
    }

    /// Grid bounds widened by one unit on every side.
    pub fn limits(&self) -> AxisLimits {
        let min = |v: &[f64]| v.iter().copied().fold(f64::INFINITY, f64::min);
        let max = |v: &[f64]| v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        AxisLimits::new(
            min(&self.xs) - 1.0,
            max(&self.xs) + 1.0,
            min(&self.ys) - 1.0,
            max(&self.ys) + 1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(vals: &[(f64, f64)], nx: usize, ny: usize) -> Vec<Vec<Vector2>> {
        (0..nx)
            .map(|i| (0..ny).map(|j| vals[i * ny + j].into()).collect())
            .collect()
    }

    #[test]
    fn longest_vector_is_scaled_to_fit_cell() {
        let v = grid(&[(3.0, 4.0), (0.0, 1.0)], 2, 1);
        let field =
            VectorField::new(v, vec![0.0, 1.0], vec![0.0], None, Color::BLACK, None, 1.0).unwrap();
        assert_eq!(field.max_magnitude(), 5.0);
        let longest = field.vectors()[0][0].length();
        assert!((longest - 1.0 / 1.2).abs() < 1e-12);
    }

    #[test]
    fn colormap_spans_min_to_max() {
        let v = grid(&[(0.0, 1.0), (0.0, 2.0)], 2, 1);
        let field = VectorField::new(
            v,
            vec![0.0, 1.0],
            vec![0.0],
            None,
            Color::BLACK,
            Some(Colormap::Grayscale),
            1.0,
        )
        .unwrap();
        assert_eq!(field.arrow_color(0, 0), Color::rgb(0, 0, 0));
        assert_eq!(field.arrow_color(1, 0), Color::rgb(255, 255, 255));
    }

    #[test]
    fn all_zero_vectors_are_left_alone() {
        let v = grid(&[(0.0, 0.0)], 1, 1);
        let field = VectorField::new(v, vec![2.0], vec![3.0], None, Color::BLACK, None, 1.0).unwrap();
        let (tail, head, _) = field.arrows()[0];
        assert_eq!(tail, (2.0, 3.0));
        assert_eq!(head, (2.0, 3.0));
    }
}
