//! Host implementations of the layout engine's capabilities.
//!
//! - [`LogoDirectory`]: logo artwork on disk, sized with the `image` crate.
//! - [`ApproxMetrics`]: font-free text measurement from average glyph advances.
//!
//! Both are deterministic for a given directory content and font config, so
//! layouts computed by the CLI are reproducible.

use crate::brands::{LOGO_FILES, logo_key};
use crate::config::FontConfig;
use crate::layout::{FontWeight, LogoAsset, LogoLookup, TextMeasure};
use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Logo artwork found in one directory.
///
/// Sizes are read once at construction; files added later are not seen.
#[derive(Debug, Clone, Default)]
pub struct LogoDirectory {
    dir: PathBuf,
    assets: BTreeMap<&'static str, LogoAsset>,
}

impl LogoDirectory {
    /// Probe `dir` for every file in the logo table. Missing or unreadable
    /// files are skipped; the corresponding brand then renders as text.
    pub fn load(dir: &Path) -> Self {
        let mut assets = BTreeMap::new();
        for (name, file) in LOGO_FILES {
            let path = dir.join(file);
            match image::image_dimensions(&path) {
                Ok((width, height)) => {
                    assets.insert(
                        *name,
                        LogoAsset {
                            reference: path.to_string_lossy().into_owned(),
                            width,
                            height,
                        },
                    );
                }
                Err(e) => debug!("no logo for {name} at {}: {e}", path.display()),
            }
        }
        Self {
            dir: dir.to_path_buf(),
            assets,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Canonical names with artwork available.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.assets.keys().copied()
    }
}

impl LogoLookup for LogoDirectory {
    fn logo(&self, name: &str) -> Option<LogoAsset> {
        self.assets.get(logo_key(name)?).cloned()
    }
}

/// Text widths estimated from a per-font average advance.
///
/// Each glyph advances `size × average_advance × class`, where the class
/// factor separates narrow glyphs (`i`, `l`, punctuation), wide glyphs (`m`,
/// `W`) and capitals. Heavier weights advance further by `weight_spread`
/// per 100 units above 400.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxMetrics {
    average_advance: f64,
    weight_spread: f64,
}

impl ApproxMetrics {
    pub fn new(average_advance: f64, weight_spread: f64) -> Self {
        Self {
            average_advance,
            weight_spread,
        }
    }

    pub fn from_config(font: &FontConfig) -> Self {
        Self::new(font.average_advance, font.weight_spread)
    }

    fn advance(&self, weight: FontWeight) -> f64 {
        let steps = (weight.0 as f64 - 400.0) / 100.0;
        (self.average_advance + steps * self.weight_spread).max(0.05)
    }
}

impl Default for ApproxMetrics {
    fn default() -> Self {
        Self::from_config(&FontConfig::default())
    }
}

fn glyph_class(c: char) -> f64 {
    match c {
        'i' | 'j' | 'l' | 'I' | '!' | '|' | '.' | ',' | ':' | ';' | '\'' => 0.5,
        ' ' | 'f' | 't' | 'r' | '1' | '/' | '-' => 0.7,
        'm' | 'w' | 'M' | 'W' => 1.5,
        c if c.is_uppercase() => 1.2,
        _ => 1.0,
    }
}

impl TextMeasure for ApproxMetrics {
    fn text_width(&self, text: &str, font_size: u32, weight: FontWeight) -> f64 {
        let units: f64 = text.chars().map(glyph_class).sum();
        units * font_size as f64 * self.advance(weight)
    }
}
