//! Host capabilities the layout engine depends on.
//!
//! The engine never touches fonts or image files. Text widths come from a
//! [`TextMeasure`] and logo artwork from a [`LogoLookup`], both supplied by
//! the caller. Implementations must be deterministic: the same inputs have
//! to produce the same widths, or layouts stop being reproducible.

use serde::Serialize;

/// CSS-style numeric font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Camera name.
    pub const EXTRA_LIGHT: FontWeight = FontWeight(200);
    /// Stat labels.
    pub const LIGHT: FontWeight = FontWeight(300);
    /// Stat values.
    pub const MEDIUM: FontWeight = FontWeight(500);
    /// Brand and lens text.
    pub const SEMI_BOLD: FontWeight = FontWeight(600);
}

/// Measures rendered text width in pixels.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font_size: u32, weight: FontWeight) -> f64;
}

/// Logo artwork as the host sees it: an opaque reference plus natural size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoAsset {
    pub reference: String,
    pub width: u32,
    pub height: u32,
}

impl LogoAsset {
    /// Artwork with a zero dimension cannot be scaled and is treated as missing.
    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Looks up logo artwork by canonical name (`"Sony"`, `"Leica"`, …).
pub trait LogoLookup {
    fn logo(&self, name: &str) -> Option<LogoAsset>;
}

/// A lookup with no artwork; every brand and lens renders as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLogos;

impl LogoLookup for NoLogos {
    fn logo(&self, _name: &str) -> Option<LogoAsset> {
        None
    }
}
