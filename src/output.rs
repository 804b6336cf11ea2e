//! CLI output formatting for every command.
//!
//! # Output Format
//!
//! ## Inspect
//!
//! ```text
//! shot.jpg (6000×4000, landscape)
//!     Metadata pulled from EXIF. Update the fields if needed.
//! Tags
//!     Make: Canon
//!     FNumber: 28/10
//! Form
//!     Camera: Canon EOS R5
//!     Brand: Canon
//!     Lens: other (RF 50mm F1.2)
//!     Aperture: 2.8
//! Display
//!     Canon EOS R5 · Canon · RF 50mm F1.2
//!     f2.8 (f) · 1/125 (shutter speed) · 50 (mm) · 800 (ISO)
//! ```
//!
//! ## Layout
//!
//! ```text
//! Canvas 1080×1588 (portrait, panel 238)
//! 001 fill_rect 0,0 1080×1588 #ffffff
//! 002 draw_image photo 0,0 1080×1350
//! 003 fill_text "f2.8" 468.5,1413 36px/500 center #191611
//! ```
//!
//! ## Scan
//!
//! ```text
//! 001 a.jpg
//!     Canon EOS R5 · Canon
//!     f2.8 · 1/125 · 35 · 800
//! 002 broken.jpg
//!     Error: Could not read photo metadata or dimensions: broken.jpg
//!
//! Scanned 2 photos, 1 failed
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O.

use crate::brands::{BrandChoice, LensChoice};
use crate::display::DisplayRecord;
use crate::form::DisplayForm;
use crate::layout::{AssetRef, DrawInstruction, Layout, TextAlign};
use crate::process::{LoadedPhoto, ScanEntry};
use serde::Serialize;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Pixel value with at most two decimals and no trailing zeros.
fn px(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn or_placeholder(text: &str) -> &str {
    if text.is_empty() { "-" } else { text }
}

/// Path relative to `root` when possible.
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

// ============================================================================
// Inspect
// ============================================================================

fn brand_line(form: &DisplayForm) -> String {
    match form.brand_choice {
        BrandChoice::Other => format!("other ({})", form.brand_custom),
        choice => choice.to_string(),
    }
}

fn lens_line(form: &DisplayForm) -> String {
    match form.lens_choice {
        LensChoice::Unset => "-".to_string(),
        LensChoice::Other => format!("other ({})", form.lens_custom),
        choice => choice.to_string(),
    }
}

/// Form fields, one per line, at `depth`.
pub fn format_form(form: &DisplayForm, depth: usize) -> Vec<String> {
    let pad = indent(depth);
    vec![
        format!("{pad}Camera: {}", or_placeholder(&form.camera_name)),
        format!("{pad}Brand: {}", brand_line(form)),
        format!("{pad}Lens: {}", lens_line(form)),
        format!("{pad}Aperture: {}", or_placeholder(&form.aperture)),
        format!("{pad}Shutter: {}", or_placeholder(&form.shutter_speed)),
        format!("{pad}Focal length: {}", or_placeholder(&form.focal_length)),
        format!("{pad}ISO: {}", or_placeholder(&form.iso)),
        format!("{pad}Orientation: {}", form.orientation),
    ]
}

/// `camera · brand · lens`, skipping empty parts.
fn identity_line(record: &DisplayRecord) -> String {
    [
        record.camera_name.as_str(),
        record.brand_text.as_str(),
        record.lens_text.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" · ")
}

/// Display record as rendered, at `depth`.
pub fn format_display(record: &DisplayRecord, depth: usize) -> Vec<String> {
    let pad = indent(depth);
    let stats = record
        .stats
        .iter()
        .map(|s| format!("{} ({})", s.value, s.label))
        .collect::<Vec<_>>()
        .join(" · ");
    vec![
        format!("{pad}{}", identity_line(record)),
        format!("{pad}{stats}"),
    ]
}

/// Full inspect report for one loaded photo and its resolved display.
pub fn format_inspect(photo: &LoadedPhoto, record: &DisplayRecord) -> Vec<String> {
    let name = photo
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| photo.path.display().to_string());
    let form = photo.state.live();

    let mut lines = Vec::new();
    match photo.dimensions {
        Some(d) => lines.push(format!(
            "{name} ({}×{}, {})",
            d.width, d.height, form.orientation
        )),
        None => lines.push(format!("{name} (unknown size)")),
    }
    lines.push(format!("{}{}", indent(1), photo.status));

    if !photo.tags.is_empty() {
        lines.push("Tags".to_string());
        for (field, value) in photo.tags.iter() {
            lines.push(format!("{}{}: {}", indent(1), field.name(), value));
        }
    }

    lines.push(if photo.state.is_edited() {
        "Form (edited)".to_string()
    } else {
        "Form".to_string()
    });
    lines.extend(format_form(form, 1));

    lines.push("Display".to_string());
    lines.extend(format_display(record, 1));
    lines
}

pub fn print_inspect(photo: &LoadedPhoto, record: &DisplayRecord) {
    for line in format_inspect(photo, record) {
        println!("{}", line);
    }
}

// ============================================================================
// Layout
// ============================================================================

fn format_instruction(index: usize, instruction: &DrawInstruction) -> String {
    let pos = format_index(index);
    match instruction {
        DrawInstruction::FillRect {
            x,
            y,
            width,
            height,
            color,
        } => format!(
            "{pos} fill_rect {},{} {}×{} {color}",
            px(*x),
            px(*y),
            px(*width),
            px(*height)
        ),
        DrawInstruction::DrawImage {
            asset,
            x,
            y,
            width,
            height,
        } => {
            let what = match asset {
                AssetRef::Photo => "photo".to_string(),
                AssetRef::Logo { name, reference } => format!("logo {name} ({reference})"),
            };
            format!(
                "{pos} draw_image {what} {},{} {}×{}",
                px(*x),
                px(*y),
                px(*width),
                px(*height)
            )
        }
        DrawInstruction::FillText {
            text,
            x,
            y,
            font_size,
            font_weight,
            align,
            color,
        } => {
            let align = match align {
                TextAlign::Left => "left",
                TextAlign::Center => "center",
            };
            format!(
                "{pos} fill_text {text:?} {},{} {font_size}px/{} {align} {color}",
                px(*x),
                px(*y),
                font_weight.0
            )
        }
        DrawInstruction::StrokeLine {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
        } => format!(
            "{pos} stroke_line {},{} → {},{} {}px {color}",
            px(*x1),
            px(*y1),
            px(*x2),
            px(*y2),
            px(*width)
        ),
    }
}

/// Canvas summary followed by one numbered line per instruction.
pub fn format_layout(layout: &Layout) -> Vec<String> {
    let g = &layout.geometry;
    let mut lines = vec![format!(
        "Canvas {}×{} ({}, panel {})",
        g.canvas_width, g.canvas_height, g.orientation, g.panel_size
    )];
    lines.extend(
        layout
            .instructions
            .iter()
            .enumerate()
            .map(|(i, instruction)| format_instruction(i + 1, instruction)),
    );
    lines
}

pub fn print_layout(layout: &Layout) {
    for line in format_layout(layout) {
        println!("{}", line);
    }
}

/// Everything a host needs to replay a layout, for `--json`.
#[derive(Debug, Serialize)]
pub struct LayoutReport<'a> {
    pub font_family: &'a str,
    pub display: &'a DisplayRecord,
    pub layout: &'a Layout,
}

pub fn format_layout_json(report: &LayoutReport<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

// ============================================================================
// Scan
// ============================================================================

/// One block per photo plus a summary line.
pub fn format_scan(entries: &[ScanEntry], root: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    let mut failed = 0;
    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "{} {}",
            format_index(i + 1),
            display_path(&entry.path, root)
        ));
        match &entry.result {
            Ok(photo) => {
                let record = crate::display::resolve_display(photo.state.live());
                let stats = record
                    .stats
                    .iter()
                    .map(|s| s.value.as_str())
                    .collect::<Vec<_>>()
                    .join(" · ");
                lines.push(format!("{}{}", indent(1), identity_line(&record)));
                lines.push(format!("{}{stats}", indent(1)));
            }
            Err(e) => {
                failed += 1;
                lines.push(format!("{}Error: {e}", indent(1)));
            }
        }
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }
    let noun = if entries.len() == 1 { "photo" } else { "photos" };
    lines.push(format!("Scanned {} {noun}, {failed} failed", entries.len()));
    lines
}

pub fn print_scan(entries: &[ScanEntry], root: &Path) {
    for line in format_scan(entries, root) {
        println!("{}", line);
    }
}
