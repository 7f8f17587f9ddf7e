//! Plot-wide settings, loadable from JSON.
//!
//! Every field has a default, so a config file only needs the keys it overrides:
//!
//! ```json
//! { "width": 1000, "colorset": "office", "background": "#FAFAFA" }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::color::{Color, Colorset};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Palette for automatic colors.
    pub colorset: Colorset,
    pub background: Color,
    /// Number formatting locale tag (`en`, `de`, `fr`, ...).
    pub locale: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            colorset: Colorset::default(),
            background: Color::WHITE,
            locale: "en".to_string(),
        }
    }
}

impl PlotConfig {
    /// Read a config from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg: PlotConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        if cfg.width == 0 || cfg.height == 0 {
            anyhow::bail!("config {}: width and height must be non-zero", path.display());
        }
        Ok(cfg)
    }

    /// Write the config as pretty JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let s = serde_json::to_string_pretty(self)?;
        fs::write(path, s).with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }
}
