//! Display resolution: live form → the exact text the panel renders.
//!
//! ## Brand text
//!
//! | Brand choice | Brand text |
//! |---|---|
//! | `none` | always empty |
//! | `other` | the custom text |
//! | a named option | the option label |
//!
//! When the form yields no brand text (and the choice is not `none`), a
//! brand is detected from the camera name. If that also fails, the
//! `"Brand"` placeholder shows, but only when there is no lens text either:
//! a lone lens label reads better than a generic placeholder next to it.
//!
//! ## Duplicate suppression
//!
//! Brand and lens often resolve to the same maker (`Leica` body, `Leica`
//! lens). When the two texts are equal ignoring case, the lens text is
//! cleared so the label or logo renders once. The brand always survives.

use crate::brands::{BrandChoice, LensChoice, detect_brand};
use crate::form::DisplayForm;
use crate::normalize::{
    format_aperture, format_exposure_text, format_focal_length, format_iso,
};
use serde::Serialize;

pub const CAMERA_PLACEHOLDER: &str = "Camera name";
pub const BRAND_PLACEHOLDER: &str = "Brand";

/// One value/label pair of the stats row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: String,
    pub label: &'static str,
}

/// Render-ready texts for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub camera_name: String,
    /// Brand label to draw; may be the placeholder.
    pub brand_text: String,
    /// Brand used for logo lookup; never the placeholder.
    pub brand_key: String,
    pub lens_text: String,
    /// Aperture, shutter speed, focal length and ISO, in that order.
    pub stats: [Stat; 4],
}

/// Resolve a form into the texts the layout draws.
pub fn resolve_display(form: &DisplayForm) -> DisplayRecord {
    let camera_name = match form.camera_name.trim() {
        "" => CAMERA_PLACEHOLDER.to_string(),
        name => name.to_string(),
    };

    let mut lens_text = match form.lens_choice {
        LensChoice::Unset => String::new(),
        LensChoice::Other => form.lens_custom.trim().to_string(),
        LensChoice::Named(label) => label.to_string(),
    };

    let explicit_none = form.brand_choice == BrandChoice::None;
    let from_form = match form.brand_choice {
        BrandChoice::None => "",
        BrandChoice::Other => form.brand_custom.trim(),
        BrandChoice::Named(label) => label,
    };
    let brand_key = if !from_form.is_empty() {
        from_form.to_string()
    } else if explicit_none {
        String::new()
    } else {
        detect_brand(&form.camera_name)
            .unwrap_or_default()
            .to_string()
    };

    let brand_text = if explicit_none {
        String::new()
    } else if !brand_key.is_empty() {
        brand_key.clone()
    } else if lens_text.is_empty() {
        BRAND_PLACEHOLDER.to_string()
    } else {
        String::new()
    };

    if !lens_text.is_empty() && brand_text.to_lowercase() == lens_text.to_lowercase() {
        lens_text.clear();
    }

    let shutter = format_exposure_text(&form.shutter_speed);
    let focal = format_focal_length(&form.focal_length);

    DisplayRecord {
        camera_name,
        brand_text,
        brand_key,
        lens_text,
        stats: [
            Stat {
                value: format_aperture(&form.aperture),
                label: "f",
            },
            Stat {
                value: or_dash(shutter),
                label: "shutter speed",
            },
            Stat {
                value: or_dash(focal),
                label: "mm",
            },
            Stat {
                value: format_iso(&form.iso),
                label: "ISO",
            },
        ],
    }
}

fn or_dash(value: String) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value
    }
}
