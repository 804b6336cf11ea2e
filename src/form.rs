//! Editable form state: the auto record derived from metadata and the live
//! record the user edits.
//!
//! ```text
//! TagMap ──build_form──▶ auto ──clone──▶ live ──edit──▶ live' ──edit──▶ …
//!                          ▲                                 │
//!                          └────────────── reset ────────────┘
//! ```
//!
//! Both records are plain values. [`FormState::edit`] and
//! [`FormState::reset`] return a new state instead of mutating, so a host
//! can keep the previous one around or drop it. Reset discards every edit at
//! once; there is no per-field undo.

use crate::brands::{BrandChoice, LensChoice, resolve_brand_state, resolve_lens_state};
use crate::exif::{Field, FieldValue, TagMap};
use crate::normalize::{
    derive_camera_name, format_exposure, format_number, normalize_text, to_numeric,
};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Where the panel goes: below the photo (portrait) or to its right (landscape).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Landscape when the photo is at least as wide as it is tall.
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        if width >= height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "portrait" => Some(Orientation::Portrait),
            "landscape" => Some(Orientation::Landscape),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every value the panel shows, as editable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayForm {
    pub camera_name: String,
    pub brand_choice: BrandChoice,
    pub brand_custom: String,
    pub lens_choice: LensChoice,
    pub lens_custom: String,
    pub aperture: String,
    pub shutter_speed: String,
    pub focal_length: String,
    pub iso: String,
    pub orientation: Orientation,
}

impl Default for DisplayForm {
    fn default() -> Self {
        Self {
            camera_name: String::new(),
            brand_choice: BrandChoice::None,
            brand_custom: String::new(),
            lens_choice: LensChoice::Unset,
            lens_custom: String::new(),
            aperture: String::new(),
            shutter_speed: String::new(),
            focal_length: String::new(),
            iso: String::new(),
            orientation: Orientation::default(),
        }
    }
}

/// Derive the auto form from decoded metadata.
///
/// - camera name: make + model, see [`derive_camera_name`]
/// - brand: from the make, or the camera name when there is no make
/// - lens: from the lens model, or the lens make when there is no model
/// - ISO: `ISOSpeedRatings`, falling back to `PhotographicSensitivity`
pub fn build_form(tags: &TagMap, orientation: Orientation) -> DisplayForm {
    let text = |field| normalize_text(tags.get(field));

    let make = text(Field::Make);
    let model = text(Field::Model);
    let camera_name = derive_camera_name(&make, &model);
    let brand = resolve_brand_state(if make.is_empty() { &camera_name } else { &make });

    let lens_model = text(Field::LensModel);
    let lens_text = if lens_model.is_empty() {
        text(Field::LensMake)
    } else {
        lens_model
    };
    let lens = resolve_lens_state(&lens_text);

    // A scalar zero counts as unset so the next field can fill in
    let iso = [Field::IsoSpeedRatings, Field::PhotographicSensitivity]
        .into_iter()
        .map(|field| tags.get(field))
        .filter(|value| !is_scalar_zero(*value))
        .map(normalize_text)
        .find(|v| !v.is_empty())
        .unwrap_or_default();

    DisplayForm {
        camera_name,
        brand_choice: brand.choice,
        brand_custom: brand.custom,
        lens_choice: lens.choice,
        lens_custom: lens.custom,
        aperture: format_number(to_numeric(tags.get(Field::FNumber))),
        shutter_speed: format_exposure(tags.get(Field::ExposureTime)),
        focal_length: format_number(to_numeric(tags.get(Field::FocalLength))),
        iso,
        orientation,
    }
}

fn is_scalar_zero(value: Option<&FieldValue>) -> bool {
    value.is_some_and(|v| !v.is_sequence() && to_numeric(Some(v)) == Some(0.0))
}

// =============================================================================
// Edits
// =============================================================================

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("expected field=value, got '{0}'")]
    MissingEquals(String),
    #[error("unknown form field '{0}'")]
    UnknownField(String),
    #[error("'{value}' is not a valid {field}")]
    InvalidValue { field: &'static str, value: String },
}

/// One user edit of the live form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    CameraName(String),
    /// Selecting anything but [`BrandChoice::Other`] clears the custom brand.
    BrandChoice(BrandChoice),
    BrandCustom(String),
    /// Selecting anything but [`LensChoice::Other`] clears the custom lens.
    LensChoice(LensChoice),
    LensCustom(String),
    Aperture(String),
    ShutterSpeed(String),
    FocalLength(String),
    Iso(String),
    Orientation(Orientation),
}

impl FormEdit {
    /// Parse `field=value`, e.g. `aperture=2.8`, `brand=Leica`, `lens=other`.
    pub fn parse(assignment: &str) -> Result<Self, FormError> {
        let (field, value) = assignment
            .split_once('=')
            .ok_or_else(|| FormError::MissingEquals(assignment.to_string()))?;
        let value = value.to_string();
        let invalid = |field: &'static str, value: &str| FormError::InvalidValue {
            field,
            value: value.to_string(),
        };

        let edit = match field.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "camera" | "camera_name" => FormEdit::CameraName(value),
            "brand" => FormEdit::BrandChoice(
                BrandChoice::parse(&value).ok_or_else(|| invalid("brand", &value))?,
            ),
            "brand_custom" => FormEdit::BrandCustom(value),
            "lens" => FormEdit::LensChoice(
                LensChoice::parse(&value).ok_or_else(|| invalid("lens", &value))?,
            ),
            "lens_custom" => FormEdit::LensCustom(value),
            "aperture" | "f" => FormEdit::Aperture(value),
            "shutter" | "shutter_speed" => FormEdit::ShutterSpeed(value),
            "focal" | "focal_length" | "mm" => FormEdit::FocalLength(value),
            "iso" => FormEdit::Iso(value),
            "orientation" => FormEdit::Orientation(
                Orientation::parse(&value).ok_or_else(|| invalid("orientation", &value))?,
            ),
            other => return Err(FormError::UnknownField(other.to_string())),
        };
        Ok(edit)
    }
}

impl DisplayForm {
    /// A copy of this form with `edit` applied.
    pub fn apply(&self, edit: FormEdit) -> DisplayForm {
        let mut next = self.clone();
        match edit {
            FormEdit::CameraName(v) => next.camera_name = v,
            FormEdit::BrandChoice(choice) => {
                if choice != BrandChoice::Other {
                    next.brand_custom.clear();
                }
                next.brand_choice = choice;
            }
            FormEdit::BrandCustom(v) => next.brand_custom = v,
            FormEdit::LensChoice(choice) => {
                if choice != LensChoice::Other {
                    next.lens_custom.clear();
                }
                next.lens_choice = choice;
            }
            FormEdit::LensCustom(v) => next.lens_custom = v,
            FormEdit::Aperture(v) => next.aperture = v,
            FormEdit::ShutterSpeed(v) => next.shutter_speed = v,
            FormEdit::FocalLength(v) => next.focal_length = v,
            FormEdit::Iso(v) => next.iso = v,
            FormEdit::Orientation(o) => next.orientation = o,
        }
        next
    }
}

/// The auto record (last successful decode) and the live record (auto plus edits).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    auto: DisplayForm,
    live: DisplayForm,
}

impl FormState {
    /// Fresh state for a newly loaded photo: live starts as a copy of auto.
    pub fn new(auto: DisplayForm) -> Self {
        Self {
            live: auto.clone(),
            auto,
        }
    }

    pub fn auto(&self) -> &DisplayForm {
        &self.auto
    }

    pub fn live(&self) -> &DisplayForm {
        &self.live
    }

    /// Apply an edit to the live record; auto is untouched.
    pub fn edit(&self, edit: FormEdit) -> FormState {
        FormState {
            auto: self.auto.clone(),
            live: self.live.apply(edit),
        }
    }

    /// Replace live with a copy of auto, discarding every edit.
    pub fn reset(&self) -> FormState {
        FormState::new(self.auto.clone())
    }

    pub fn is_edited(&self) -> bool {
        self.auto != self.live
    }
}
