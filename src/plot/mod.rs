//! The plot facade: one factory per element kind.
//!
//! Factories resolve defaults (next cycle color, palette-by-index colors, fixed
//! sizes), validate inputs, register the element and hand back a typed
//! [`Handle`]. A failed validation leaves the plot untouched: nothing is added
//! and the color cycle does not advance.
//!
//! ```
//! use quickplot::Plot;
//! use quickplot::plot::{ArrowOptions, FunctionOptions};
//!
//! let mut plot = Plot::new();
//! let arrow = plot.plot_arrow(1.0, 1.0, 0.0, 0.0, ArrowOptions::default())?;
//! let curve = plot.plot_function(|x| Some(x.sin()), FunctionOptions::default())?;
//! plot.get_mut(curve).unwrap().line_width = 2.0;
//! assert_eq!(plot.len(), 2);
//! assert_eq!(plot.get(arrow).unwrap().len(), 2);
//! # Ok::<(), quickplot::PlotError>(())
//! ```

pub mod options;

pub use options::{
    ArrowOptions, DEFAULT_FUNCTION_LABEL, FunctionOptions, PieOptions, RadarOptions,
    ScaleBarOptions, ScatterOptions, VectorFieldOptions,
};

use log::debug;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::color::{ColorCycle, Colorset};
use crate::config::PlotConfig;
use crate::error::{PlotResult, ensure_finite, ensure_non_negative, ensure_positive};
use crate::models::{ArrowCap, AxisLimits, LineCap, Vector2};
use crate::plottable::{Element, Function, Pie, Plottable, Radar, ScaleBar, Scatter, VectorField};
use crate::registry::{Key, Registry};

/// Horizontal auto-fit margin (fraction of the data span).
pub const DEFAULT_MARGIN_X: f64 = 0.05;
/// Vertical auto-fit margin (fraction of the data span).
pub const DEFAULT_MARGIN_Y: f64 = 0.1;

/// Non-owning, typed reference to an element stored in a [`Plot`].
///
/// Resolves to `None` once the element is removed or the plot is cleared.
pub struct Handle<T> {
    key: Key,
    _kind: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    fn new(key: Key) -> Self {
        Self {
            key,
            _kind: PhantomData,
        }
    }

    /// Insertion position within the plot.
    pub fn index(&self) -> usize {
        self.key.index()
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&self.key).finish()
    }
}

#[derive(Debug, Clone)]
pub struct Plot {
    config: PlotConfig,
    colors: ColorCycle,
    elements: Registry<Plottable>,
    /// `None` while the axes follow the data automatically.
    axes: Option<AxisLimits>,
}

impl Default for Plot {
    fn default() -> Self {
        Self::new()
    }
}

impl Plot {
    pub fn new() -> Self {
        Self::with_config(PlotConfig::default())
    }

    pub fn with_config(config: PlotConfig) -> Self {
        Self {
            colors: ColorCycle::new(config.colorset),
            config,
            elements: Registry::new(),
            axes: None,
        }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn colorset(&self) -> Colorset {
        self.colors.colorset()
    }

    pub fn color_cycle(&self) -> &ColorCycle {
        &self.colors
    }

    // ------------------------ Registry ------------------------

    /// Register an already-built element.
    pub fn add<T: Element>(&mut self, element: T) -> Handle<T> {
        let key = self.elements.insert(element.into());
        debug!("added {} element #{}", T::KIND.as_str(), key.index());
        Handle::new(key)
    }

    pub fn get<T: Element>(&self, handle: Handle<T>) -> Option<&T> {
        self.elements.get(handle.key).and_then(T::from_plottable)
    }

    /// Mutable access to presentation attributes.
    pub fn get_mut<T: Element>(&mut self, handle: Handle<T>) -> Option<&mut T> {
        self.elements
            .get_mut(handle.key)
            .and_then(T::from_plottable_mut)
    }

    pub fn remove<T: Element>(&mut self, handle: Handle<T>) -> Option<Plottable> {
        let removed = self.elements.remove(handle.key);
        if removed.is_some() {
            debug!("removed {} element #{}", T::KIND.as_str(), handle.index());
        }
        removed
    }

    /// Drop every element, rewind the color cycle and return the axes to auto-fit.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.colors.reset();
        self.axes = None;
        debug!("plot cleared");
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in insertion (drawing) order.
    pub fn iter(&self) -> impl Iterator<Item = &Plottable> {
        self.elements.iter()
    }

    // ------------------------ Factories ------------------------

    pub fn plot_scatter(
        &mut self,
        xs: Vec<f64>,
        ys: Vec<f64>,
        opts: ScatterOptions,
    ) -> PlotResult<Handle<Scatter>> {
        let auto_color = opts.color.is_none();
        let color = opts.color.unwrap_or_else(|| self.colors.peek());
        let scatter = Scatter::new(
            xs,
            ys,
            color,
            opts.line_width,
            opts.marker_size,
            opts.marker_shape,
            opts.line_style,
            opts.label,
        )?;
        self.commit_color(auto_color);
        Ok(self.add(scatter))
    }

    /// `vectors` is indexed `[x][y]` and must be `xs.len()` by `ys.len()`.
    pub fn plot_vector_field(
        &mut self,
        vectors: Vec<Vec<Vector2>>,
        xs: Vec<f64>,
        ys: Vec<f64>,
        opts: VectorFieldOptions,
    ) -> PlotResult<Handle<VectorField>> {
        let auto_color = opts.color.is_none();
        let color = opts.color.unwrap_or_else(|| self.colors.peek());
        let field = VectorField::new(
            vectors,
            xs,
            ys,
            opts.label,
            color,
            opts.colormap,
            opts.scale_factor,
        )?;
        self.commit_color(auto_color);
        Ok(self.add(field))
    }

    /// Two-point line from base to tip with a filled arrowhead at the tip.
    pub fn plot_arrow(
        &mut self,
        tip_x: f64,
        tip_y: f64,
        base_x: f64,
        base_y: f64,
        opts: ArrowOptions,
    ) -> PlotResult<Handle<Scatter>> {
        for (name, v) in [
            ("tip_x", tip_x),
            ("tip_y", tip_y),
            ("base_x", base_x),
            ("base_y", base_y),
        ] {
            ensure_finite(name, v)?;
        }
        ensure_positive("line_width", opts.line_width)?;
        ensure_positive("arrowhead_width", opts.arrowhead_width)?;
        ensure_positive("arrowhead_length", opts.arrowhead_length)?;

        let handle = self.plot_scatter(
            vec![base_x, tip_x],
            vec![base_y, tip_y],
            ScatterOptions {
                color: opts.color,
                line_width: opts.line_width,
                marker_size: 0.0,
                label: opts.label,
                ..ScatterOptions::default()
            },
        )?;
        if let Some(line) = self.get_mut(handle) {
            line.end_cap = Some(ArrowCap {
                width: opts.arrowhead_width,
                length: opts.arrowhead_length,
                filled: true,
            });
            line.start_cap = LineCap::Flat;
        }
        Ok(handle)
    }

    /// `values[group][category]`. Re-fits the axes to the whole plot afterwards.
    pub fn plot_radar(
        &mut self,
        values: Vec<Vec<f64>>,
        opts: RadarOptions,
    ) -> PlotResult<Handle<Radar>> {
        let categories = Radar::check_shape(&values)?;
        // one palette entry per value cell; groups read the leading entries
        let fill_colors = opts
            .fill_colors
            .unwrap_or_else(|| self.colorset().take(values.len() * categories));
        let radar = Radar::new(
            values,
            opts.category_names,
            opts.group_names,
            fill_colors,
            opts.fill_alpha,
            opts.web_color,
        )?;
        let handle = self.add(radar);
        self.fit_axes(DEFAULT_MARGIN_X, DEFAULT_MARGIN_Y);
        Ok(handle)
    }

    /// Curve of a partial function, sampled at render time.
    pub fn plot_function<F>(
        &mut self,
        function: F,
        opts: FunctionOptions,
    ) -> PlotResult<Handle<Function>>
    where
        F: Fn(f64) -> Option<f64> + Send + Sync + 'static,
    {
        let auto_color = opts.color.is_none();
        let color = opts.color.unwrap_or_else(|| self.colors.peek());
        let curve = Function::new(
            Arc::new(function),
            color,
            opts.line_width,
            opts.marker_size,
            opts.label,
            opts.marker_shape,
            opts.line_style,
        )?;
        self.commit_color(auto_color);
        Ok(self.add(curve))
    }

    /// `size_x`/`size_y` are data units.
    pub fn plot_scale_bar(
        &mut self,
        size_x: f64,
        size_y: f64,
        opts: ScaleBarOptions,
    ) -> PlotResult<Handle<ScaleBar>> {
        let bar = ScaleBar::new(
            size_x,
            size_y,
            opts.label_x,
            opts.label_y,
            opts.thickness,
            opts.font_size,
            opts.color,
            opts.padding_px,
        )?;
        Ok(self.add(bar))
    }

    pub fn plot_pie(&mut self, values: Vec<f64>, opts: PieOptions) -> PlotResult<Handle<Pie>> {
        Pie::check_values(&values)?;
        let colors = opts
            .colors
            .unwrap_or_else(|| self.colorset().take(values.len()));
        let pie = Pie::new(
            values,
            opts.slice_labels,
            colors,
            opts.exploded,
            opts.show_values,
            opts.show_percentages,
            opts.show_labels,
            opts.label,
        )?;
        Ok(self.add(pie))
    }

    /// Advance the cycle past the color a factory just consumed.
    fn commit_color(&mut self, auto_color: bool) {
        if auto_color {
            self.colors.next_color();
        }
    }

    // ------------------------ Axes ------------------------

    /// Current limits: the explicitly set ones, or an auto-fit of the data.
    pub fn axis_limits(&self) -> AxisLimits {
        self.axes
            .unwrap_or_else(|| self.auto_limits(DEFAULT_MARGIN_X, DEFAULT_MARGIN_Y))
    }

    /// True once limits were set, matched or fitted (rather than following the data).
    pub fn axes_fixed(&self) -> bool {
        self.axes.is_some()
    }

    /// Fit the axes to every element's extent plus fractional margins and keep them.
    pub fn axis_auto(&mut self, margin_x: f64, margin_y: f64) -> PlotResult<AxisLimits> {
        ensure_non_negative("margin_x", margin_x)?;
        ensure_non_negative("margin_y", margin_y)?;
        Ok(self.fit_axes(margin_x, margin_y))
    }

    pub fn set_axis(&mut self, limits: AxisLimits) -> PlotResult<()> {
        limits.validate()?;
        self.axes = Some(limits);
        Ok(())
    }

    /// Copy the current limits of `source`.
    pub fn match_axis(&mut self, source: &Plot) {
        self.axes = Some(source.axis_limits());
    }

    /// Go back to following the data.
    pub fn reset_axis(&mut self) {
        self.axes = None;
    }

    fn fit_axes(&mut self, margin_x: f64, margin_y: f64) -> AxisLimits {
        let limits = self.auto_limits(margin_x, margin_y);
        debug!(
            "axes fitted to x {:.3}..{:.3}, y {:.3}..{:.3}",
            limits.x_min, limits.x_max, limits.y_min, limits.y_max
        );
        self.axes = Some(limits);
        limits
    }

    fn auto_limits(&self, margin_x: f64, margin_y: f64) -> AxisLimits {
        self.elements
            .iter()
            .filter_map(Plottable::limits)
            .reduce(|a, b| a.union(&b))
            .map(|l| l.expand_degenerate().padded(margin_x, margin_y))
            .unwrap_or_else(AxisLimits::fallback)
    }
}

impl From<PlotConfig> for Plot {
    fn from(config: PlotConfig) -> Self {
        Plot::with_config(config)
    }
}
