//! Field normalization: raw decoded values → clean display text.
//!
//! Every function here is total. Any [`FieldValue`] shape, or no value at
//! all, produces a result; shapes that make no sense for a conversion
//! degrade to empty text or `None` rather than failing.
//!
//! ## Number formatting
//!
//! Numbers are rounded to one decimal place and a trailing `.0` is dropped:
//! `2.8` stays `2.8`, `50.0` becomes `50`, `46.06` becomes `46.1`.
//!
//! ## Exposure formatting
//!
//! | Input | Output |
//! |---|---|
//! | text containing `/` | unchanged (`"1/60"`) |
//! | rational `1/d` | `"1/d"` exactly, no division |
//! | under one second | `"1/" + round(1 / seconds)` |
//! | one second or longer | number formatting (`"2.5"`, `"30"`) |

use crate::exif::FieldValue;

/// Text form of a value: the first element of a sequence, numbers in
/// decimal, rationals as `n/d`, text trimmed. Absent → `""`.
pub fn normalize_text(value: Option<&FieldValue>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    if value.is_sequence() {
        return normalize_text(value.first().as_ref());
    }
    match value {
        FieldValue::Ascii(text) => text.trim().to_string(),
        other => other.to_string(),
    }
}

/// Numeric form of a value. Rationals divide (zero denominator → `None`),
/// sequences use their first element, text has no numeric form.
pub fn to_numeric(value: Option<&FieldValue>) -> Option<f64> {
    match value? {
        FieldValue::Byte(v) => Some(*v as f64),
        FieldValue::Short(v) => Some(*v as f64),
        FieldValue::Long(v) => Some(*v as f64),
        FieldValue::Rational(r) => r.to_f64(),
        FieldValue::Ascii(_) => None,
        sequence => to_numeric(sequence.first().as_ref()),
    }
}

/// Combine make and model into one camera name.
///
/// Models usually repeat the make (`Canon` + `Canon EOS R5`), in which case
/// the model stands alone.
pub fn derive_camera_name(make: &str, model: &str) -> String {
    let make = make.trim();
    let model = model.trim();
    match (make.is_empty(), model.is_empty()) {
        (false, false) => {
            if model.to_lowercase().contains(&make.to_lowercase()) {
                model.to_string()
            } else {
                format!("{make} {model}").trim().to_string()
            }
        }
        (true, false) => model.to_string(),
        (false, true) => make.to_string(),
        (true, true) => String::new(),
    }
}

/// Round to one decimal place, dropping a trailing `.0`. `None` → `""`.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let rounded = (v * 10.0).round() / 10.0;
            format!("{rounded}")
        }
        _ => String::new(),
    }
}

/// `"2.8"`, `"f2.8"` and `"F2.8"` all become `"f2.8"`; empty becomes `"-"`.
pub fn format_aperture(text: &str) -> String {
    let raw = text.trim();
    if raw.is_empty() {
        return "-".to_string();
    }
    let clean = raw
        .strip_prefix('f')
        .or_else(|| raw.strip_prefix('F'))
        .unwrap_or(raw);
    format!("f{clean}")
}

/// Format an exposure time taken straight from a decoded value.
pub fn format_exposure(value: Option<&FieldValue>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match value {
        FieldValue::Ascii(text) => format_exposure_text(text),
        FieldValue::Rational(r) => {
            if r.denominator == 0 {
                String::new()
            } else if r.numerator == 1 {
                format!("1/{}", r.denominator)
            } else {
                r.to_f64().map(format_seconds).unwrap_or_default()
            }
        }
        sequence if sequence.is_sequence() => format_exposure(sequence.first().as_ref()),
        other => to_numeric(Some(other))
            .map(format_seconds)
            .unwrap_or_default(),
    }
}

/// Format an exposure time typed by hand.
///
/// Fractions pass through untouched; finite numbers are read as seconds;
/// anything else (including `inf` and `nan`) is kept as typed.
pub fn format_exposure_text(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.contains('/') {
        return trimmed.to_string();
    }
    match trimmed.parse::<f64>() {
        Ok(seconds) if seconds.is_finite() => format_seconds(seconds),
        _ => trimmed.to_string(),
    }
}

/// Seconds → shutter-speed text. Non-positive or non-finite → `""`.
pub fn format_seconds(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return String::new();
    }
    if seconds < 1.0 {
        format!("1/{}", (1.0 / seconds).round() as u64)
    } else {
        format_number(Some(seconds))
    }
}

/// Strip a trailing `mm` unit (any case) and surrounding whitespace.
pub fn format_focal_length(text: &str) -> String {
    let trimmed = text.trim();
    let lower = trimmed.to_ascii_lowercase();
    match lower.strip_suffix("mm") {
        Some(rest) => trimmed[..rest.len()].trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// ISO passes through; empty becomes `"-"`.
pub fn format_iso(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "-".to_string()
    } else {
        trimmed.to_string()
    }
}
