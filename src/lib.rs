//! quickplot
//!
//! A small plotting library: a [`Plot`] surface with one factory per chart
//! element, rendered to SVG or PNG. Pairs with the `quickplot` CLI.
//!
//! ### Features
//! - Factories for vector fields, arrows, radar charts, function curves,
//!   scale bars, pie charts and plain scatter lines
//! - Automatic color cycling and palette-by-index colors
//! - Typed handles for editing elements after they are added
//! - Axis auto-fit, explicit limits and matching between plots
//! - SVG/PNG output and CSV export of element data
//!
//! ### Example
//! ```no_run
//! use quickplot::Plot;
//! use quickplot::plot::{PieOptions, ScaleBarOptions};
//!
//! let mut plot = Plot::new();
//! let pie = plot.plot_pie(
//!     vec![3.0, 2.0, 1.0],
//!     PieOptions {
//!         slice_labels: Some(vec!["a".into(), "b".into(), "c".into()]),
//!         show_percentages: true,
//!         ..Default::default()
//!     },
//! )?;
//! plot.get_mut(pie).unwrap().exploded = true;
//! plot.plot_scale_bar(0.5, 0.5, ScaleBarOptions::default())?;
//! quickplot::viz::save(&plot, "pie.svg")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod models;
pub mod plot;
pub mod plottable;
pub mod registry;
pub mod storage;
pub mod viz;

pub use color::{Color, ColorCycle, Colormap, Colorset};
pub use config::PlotConfig;
pub use error::{PlotError, PlotResult};
pub use models::{ArrowCap, AxisLimits, LineCap, LineStyle, MarkerShape, Vector2};
pub use plot::{Handle, Plot};
pub use plottable::{Element, Function, Pie, Plottable, PlottableKind, Radar, ScaleBar, Scatter, VectorField};
