//! Brand and lens vocabulary: matcher table, option sets, logo tables.
//!
//! ## Brand detection
//!
//! [`detect_brand`] scans an ordered table of case-insensitive patterns and
//! returns the label of the first one that matches. Order is priority: some
//! patterns are deliberately broad (`ricoh|gr` catches "GR III" bodies) and
//! must stay below the specific ones. Do not reorder the table without
//! checking the `detection_priority_*` tests.
//!
//! ## Choices
//!
//! A brand is either explicitly absent ([`BrandChoice::None`]), one of the
//! [`brand_options`], or free text ([`BrandChoice::Other`] + custom text).
//! A lens has no explicit-absence state: it is unset, one of the
//! [`lens_options`], or free text.
//!
//! ## Logos
//!
//! Only names in [`LOGO_FILES`] have artwork. Some artwork is visually
//! smaller than the rest and is scaled up by [`logo_scale`].

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// `(pattern, label)` pairs, first match wins.
const BRAND_PATTERNS: &[(&str, &str)] = &[
    ("apple|iphone", "Apple"),
    ("sony|ilce|dsc|nex", "Sony"),
    ("canon", "Canon"),
    ("nikon", "Nikon"),
    ("fujifilm|fuji", "Fujifilm"),
    ("leica", "Leica"),
    ("panasonic|lumix", "Lumix"),
    ("sigma", "Sigma"),
    ("zeiss", "Zeiss"),
    ("olympus|om system|omds", "Olympus"),
    ("pentax", "Pentax"),
    ("ricoh|gr", "Ricoh"),
    ("hasselblad", "Hasselblad"),
    ("dji", "DJI"),
    ("gopro", "GoPro"),
];

/// Brand/lens names with logo artwork, and their file names in the logo directory.
pub const LOGO_FILES: &[(&str, &str)] = &[
    ("Apple", "Apple.png"),
    ("Fujifilm", "Fujifilm.png"),
    ("Leica", "Leica.png"),
    ("Sigma", "Sigma.png"),
    ("Sony", "Sony.png"),
    ("Zeiss", "Zeiss.png"),
];

/// Target-height multipliers for artwork that reads small next to the rest.
const LOGO_SCALES: &[(&str, f64)] = &[("Apple", 1.45), ("Leica", 1.4), ("Zeiss", 1.35)];

static BRAND_MATCHERS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    BRAND_PATTERNS
        .iter()
        .map(|(pattern, label)| {
            let regex = Regex::new(&format!("(?i){pattern}")).expect("brand pattern must compile");
            (regex, *label)
        })
        .collect()
});

static BRAND_OPTIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut options: Vec<&'static str> = Vec::new();
    for (_, label) in BRAND_PATTERNS {
        if !options.contains(label) {
            options.push(*label);
        }
    }
    options
});

static LENS_OPTIONS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| LOGO_FILES.iter().map(|(name, _)| *name).collect());

/// Selectable brands, in matcher-table order.
pub fn brand_options() -> &'static [&'static str] {
    &BRAND_OPTIONS
}

/// Selectable lenses, in logo-table order.
pub fn lens_options() -> &'static [&'static str] {
    &LENS_OPTIONS
}

/// Label of the first matcher that matches `text`.
pub fn detect_brand(text: &str) -> Option<&'static str> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    BRAND_MATCHERS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, label)| *label)
}

/// Case-insensitive exact lookup in a static option list.
fn find_option(options: &[&'static str], text: &str) -> Option<&'static str> {
    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(text))
        .copied()
}

/// Canonical logo name for `name`, if any artwork exists for it.
pub fn logo_key(name: &str) -> Option<&'static str> {
    let name = name.trim();
    LOGO_FILES
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(key, _)| *key)
}

/// Logo file name for `name`, if any.
pub fn logo_file(name: &str) -> Option<&'static str> {
    let key = logo_key(name)?;
    LOGO_FILES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, file)| *file)
}

/// Height multiplier for `name`'s logo; `1.0` for everything not in the table.
pub fn logo_scale(name: &str) -> f64 {
    let name = name.trim();
    LOGO_SCALES
        .iter()
        .find(|(brand, _)| brand.eq_ignore_ascii_case(name))
        .map(|(_, scale)| *scale)
        .unwrap_or(1.0)
}

// =============================================================================
// Choices and resolved state
// =============================================================================

/// Brand selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandChoice {
    /// Explicitly no brand.
    None,
    /// Free text, carried in the custom field.
    Other,
    /// One of [`brand_options`].
    Named(&'static str),
}

impl BrandChoice {
    /// Parse a choice the way it is spelled in forms: `none`, `other`, or an
    /// option label (any case). Empty text counts as `none`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() || text.eq_ignore_ascii_case("none") {
            Some(BrandChoice::None)
        } else if text.eq_ignore_ascii_case("other") {
            Some(BrandChoice::Other)
        } else {
            find_option(brand_options(), text).map(BrandChoice::Named)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BrandChoice::None => "none",
            BrandChoice::Other => "other",
            BrandChoice::Named(label) => *label,
        }
    }
}

impl fmt::Display for BrandChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BrandChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Lens selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LensChoice {
    Unset,
    Other,
    Named(&'static str),
}

impl LensChoice {
    /// `""` for unset, `other`, or an option label (any case).
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            Some(LensChoice::Unset)
        } else if text.eq_ignore_ascii_case("other") {
            Some(LensChoice::Other)
        } else {
            find_option(lens_options(), text).map(LensChoice::Named)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LensChoice::Unset => "",
            LensChoice::Other => "other",
            LensChoice::Named(label) => *label,
        }
    }
}

impl fmt::Display for LensChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LensChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandState {
    pub choice: BrandChoice,
    pub custom: String,
}

impl BrandState {
    /// The brand as text: `""` for none, the custom text for other, the label otherwise.
    pub fn as_text(&self) -> &str {
        match self.choice {
            BrandChoice::None => "",
            BrandChoice::Other => &self.custom,
            BrandChoice::Named(label) => label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LensState {
    pub choice: LensChoice,
    pub custom: String,
}

impl LensState {
    pub fn as_text(&self) -> &str {
        match self.choice {
            LensChoice::Unset => "",
            LensChoice::Other => &self.custom,
            LensChoice::Named(label) => label,
        }
    }
}

/// Map free brand text onto a brand choice.
///
/// Exact option names win, then pattern detection, then the text is kept
/// as a custom brand.
pub fn resolve_brand_state(text: &str) -> BrandState {
    let normalized = text.trim().to_string();
    if normalized.is_empty() {
        return BrandState {
            choice: BrandChoice::None,
            custom: String::new(),
        };
    }
    if let Some(option) = find_option(brand_options(), &normalized) {
        return BrandState {
            choice: BrandChoice::Named(option),
            custom: String::new(),
        };
    }
    match detect_brand(&normalized).filter(|label| brand_options().contains(label)) {
        Some(label) => BrandState {
            choice: BrandChoice::Named(label),
            custom: String::new(),
        },
        None => BrandState {
            choice: BrandChoice::Other,
            custom: normalized,
        },
    }
}

/// Map free lens text onto a lens choice.
///
/// A lens option contained anywhere in the text wins (first in table
/// order), then pattern detection when it lands on a lens option, then the
/// text is kept as a custom lens.
pub fn resolve_lens_state(text: &str) -> LensState {
    let normalized = text.trim().to_string();
    if normalized.is_empty() {
        return LensState {
            choice: LensChoice::Unset,
            custom: String::new(),
        };
    }
    let lower = normalized.to_lowercase();
    let contained = lens_options()
        .iter()
        .find(|option| lower.contains(&option.to_lowercase()))
        .copied();
    let detected = || detect_brand(&normalized).filter(|label| lens_options().contains(label));

    match contained.or_else(detected) {
        Some(option) => LensState {
            choice: LensChoice::Named(option),
            custom: String::new(),
        },
        None => LensState {
            choice: LensChoice::Other,
            custom: normalized,
        },
    }
}
