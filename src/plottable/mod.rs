//! Drawable chart elements.
//!
//! Each element keeps its geometric inputs private (read through accessors, fixed
//! at construction) and exposes presentation attributes as public fields that can
//! be edited through [`crate::Plot::get_mut`].

pub mod function;
pub mod pie;
pub mod radar;
pub mod scale_bar;
pub mod scatter;
pub mod vector_field;

pub use function::{Function, PartialFn};
pub use pie::Pie;
pub use radar::Radar;
pub use scale_bar::ScaleBar;
pub use scatter::Scatter;
pub use vector_field::VectorField;

use crate::models::AxisLimits;

/// Discriminant of [`Plottable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlottableKind {
    Scatter,
    VectorField,
    Radar,
    Function,
    ScaleBar,
    Pie,
}

impl PlottableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlottableKind::Scatter => "scatter",
            PlottableKind::VectorField => "vector field",
            PlottableKind::Radar => "radar",
            PlottableKind::Function => "function",
            PlottableKind::ScaleBar => "scale bar",
            PlottableKind::Pie => "pie",
        }
    }
}

/// One element owned by a plot.
#[derive(Debug, Clone)]
pub enum Plottable {
    Scatter(Scatter),
    VectorField(VectorField),
    Radar(Radar),
    Function(Function),
    ScaleBar(ScaleBar),
    Pie(Pie),
}

impl Plottable {
    pub fn kind(&self) -> PlottableKind {
        match self {
            Plottable::Scatter(_) => PlottableKind::Scatter,
            Plottable::VectorField(_) => PlottableKind::VectorField,
            Plottable::Radar(_) => PlottableKind::Radar,
            Plottable::Function(_) => PlottableKind::Function,
            Plottable::ScaleBar(_) => PlottableKind::ScaleBar,
            Plottable::Pie(_) => PlottableKind::Pie,
        }
    }

    /// Legend text, if the element has one.
    pub fn label(&self) -> Option<&str> {
        match self {
            Plottable::Scatter(p) => p.label.as_deref(),
            Plottable::VectorField(p) => p.label.as_deref(),
            Plottable::Function(p) => p.label.as_deref(),
            Plottable::Pie(p) => p.label.as_deref(),
            Plottable::Radar(_) | Plottable::ScaleBar(_) => None,
        }
    }

    /// Data extent used by axis auto-fit. Elements without a fixed extent
    /// (functions, screen-anchored scale bars) return `None`.
    pub fn limits(&self) -> Option<AxisLimits> {
        match self {
            Plottable::Scatter(p) => p.limits(),
            Plottable::VectorField(p) => Some(p.limits()),
            Plottable::Radar(p) => Some(p.limits()),
            Plottable::Pie(p) => Some(p.limits()),
            Plottable::Function(_) | Plottable::ScaleBar(_) => None,
        }
    }
}

/// Typed access to one variant of [`Plottable`].
pub trait Element: Sized + Into<Plottable> {
    const KIND: PlottableKind;

    fn from_plottable(p: &Plottable) -> Option<&Self>;

    fn from_plottable_mut(p: &mut Plottable) -> Option<&mut Self>;
}

macro_rules! element_variant {
    ($ty:ident) => {
        impl From<$ty> for Plottable {
            fn from(p: $ty) -> Self {
                Plottable::$ty(p)
            }
        }

        impl Element for $ty {
            const KIND: PlottableKind = PlottableKind::$ty;

            fn from_plottable(p: &Plottable) -> Option<&Self> {
                match p {
                    Plottable::$ty(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_plottable_mut(p: &mut Plottable) -> Option<&mut Self> {
                match p {
                    Plottable::$ty(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

element_variant!(Scatter);
element_variant!(VectorField);
element_variant!(Radar);
element_variant!(Function);
element_variant!(ScaleBar);
element_variant!(Pie);
