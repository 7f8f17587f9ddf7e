use anyhow::{Context, Result};
use csv::WriterBuilder;
use log::info;
use std::path::Path;

use crate::plottable::{Function, Scatter};

/// Save the points of a scatter/line as `x,y` CSV with header.
pub fn save_scatter_csv<P: AsRef<Path>>(scatter: &Scatter, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    wtr.serialize(("x", "y"))?;
    for (x, y) in scatter.points() {
        wtr.serialize((x, y))?;
    }
    wtr.flush()?;
    info!("wrote {} point(s) to {}", scatter.len(), path.display());
    Ok(())
}

/// Sample `function` at `n` evenly spaced x values across `[x_min, x_max]` and save
/// as `x,y` CSV. The `y` field is left empty where the function is undefined.
pub fn save_function_csv<P: AsRef<Path>>(
    function: &Function,
    x_min: f64,
    x_max: f64,
    n: usize,
    path: P,
) -> Result<()> {
    if !(x_min.is_finite() && x_max.is_finite()) || x_min >= x_max {
        anyhow::bail!("invalid sampling range {x_min}..{x_max}");
    }
    if n == 0 {
        anyhow::bail!("sample count must be positive");
    }
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    wtr.serialize(("x", "y"))?;
    for x in crate::plottable::function::sample_xs(x_min, x_max, n) {
        wtr.serialize((x, function.eval(x)))?;
    }
    wtr.flush()?;
    info!("wrote {n} sample(s) to {}", path.display());
    Ok(())
}
