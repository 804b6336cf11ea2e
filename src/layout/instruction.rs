//! Draw instructions: the layout engine's only output.
//!
//! A host replays the list in order onto a canvas of the geometry's size.
//! Coordinates are canvas pixels with the origin at the top-left; text `y`
//! is the baseline.

use super::metrics::FontWeight;
use serde::{Deserialize, Serialize};

/// Colors used by the panel, as CSS color strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub panel: String,
    pub text: String,
    pub label: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            panel: "#ffffff".to_string(),
            text: "#191611".to_string(),
            label: "#4b463e".to_string(),
        }
    }
}

/// Horizontal anchor of a text instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
}

/// What a [`DrawInstruction::DrawImage`] draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AssetRef {
    /// The source photo, at its natural size.
    Photo,
    /// Logo artwork, by canonical name and the host's reference.
    Logo { name: String, reference: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawInstruction {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
    },
    DrawImage {
        asset: AssetRef,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        font_size: u32,
        font_weight: FontWeight,
        align: TextAlign,
        color: String,
    },
    StrokeLine {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
        color: String,
    },
}

impl DrawInstruction {
    /// Text of a `FillText`, `None` for every other instruction.
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawInstruction::FillText { text, .. } => Some(text),
            _ => None,
        }
    }
}
