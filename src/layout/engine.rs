//! Panel composition: display record + photo size → draw instructions.
//!
//! ## Portrait (panel below the photo)
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │                  photo                   │
//! ├──────────────────────────────────────────┤
//! │      f2.8    1/125     35     400        │ ← stats row, centred
//! │       f   shutter speed mm    ISO        │
//! │                                          │
//! │ Camera name              BRAND │ LENS    │ ← footer, right-aligned brand line
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Landscape (panel right of the photo)
//!
//! Stats stack vertically at a fixed spacing, the camera name sits below the
//! last label, and brand and lens stack on separate lines under it.
//!
//! The brand and lens each render as logo artwork when the host has it and
//! as text otherwise. The divider between them is drawn only when both are
//! present; when neither is, the brand line is omitted entirely.

use super::geometry::{LayoutGeometry, PanelMetrics, layout_geometry};
use super::instruction::{AssetRef, DrawInstruction, Palette, TextAlign};
use super::metrics::{FontWeight, LogoAsset, LogoLookup, TextMeasure};
use crate::brands::{logo_key, logo_scale};
use crate::display::{DisplayRecord, Stat};
use crate::form::Orientation;
use log::trace;
use serde::Serialize;

/// The camera name never shrinks below this size.
pub const MIN_FONT_SIZE: u32 = 8;

/// Share of the canvas width the camera name may use in portrait.
const PORTRAIT_NAME_SHARE: f64 = 0.55;

/// A composed frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub geometry: LayoutGeometry,
    pub instructions: Vec<DrawInstruction>,
}

/// Largest size ≤ `base` at which `text` fits in `max_width`, stepping down
/// one unit at a time and stopping at [`MIN_FONT_SIZE`].
pub fn fit_font_size(
    measure: &impl TextMeasure,
    text: &str,
    base: u32,
    weight: FontWeight,
    max_width: f64,
) -> u32 {
    let mut size = base;
    while size > MIN_FONT_SIZE && measure.text_width(text, size, weight) > max_width {
        size -= 1;
    }
    size
}

/// A brand or lens rendered either as artwork or as text.
#[derive(Debug, Clone)]
enum Mark {
    Logo {
        name: &'static str,
        asset: LogoAsset,
        width: f64,
        height: f64,
    },
    Text {
        text: String,
        width: f64,
    },
}

impl Mark {
    fn width(&self) -> f64 {
        match self {
            Mark::Logo { width, .. } | Mark::Text { width, .. } => *width,
        }
    }
}

/// Composes layouts with one palette and one pair of host capabilities.
pub struct Composer<'a, M, L> {
    palette: &'a Palette,
    measure: &'a M,
    logos: &'a L,
}

impl<'a, M: TextMeasure, L: LogoLookup> Composer<'a, M, L> {
    pub fn new(palette: &'a Palette, measure: &'a M, logos: &'a L) -> Self {
        Self {
            palette,
            measure,
            logos,
        }
    }

    /// Compose the full frame for a `width × height` photo.
    ///
    /// Returns `None` when either photo dimension is zero. The output is a
    /// pure function of the arguments and the two capabilities.
    pub fn compose(
        &self,
        record: &DisplayRecord,
        width: u32,
        height: u32,
        orientation: Orientation,
    ) -> Option<Layout> {
        let geometry = layout_geometry(width, height, orientation)?;
        let metrics = PanelMetrics::new(geometry.panel_size, orientation);
        trace!(
            "{orientation} layout: {}x{} canvas, panel {}",
            geometry.canvas_width, geometry.canvas_height, geometry.panel_size
        );

        let mut out = vec![
            DrawInstruction::FillRect {
                x: 0.0,
                y: 0.0,
                width: geometry.canvas_width as f64,
                height: geometry.canvas_height as f64,
                color: self.palette.panel.clone(),
            },
            DrawInstruction::DrawImage {
                asset: AssetRef::Photo,
                x: 0.0,
                y: 0.0,
                width: width as f64,
                height: height as f64,
            },
        ];
        match orientation {
            Orientation::Portrait => self.portrait(&mut out, record, &geometry, height, &metrics),
            Orientation::Landscape => self.landscape(&mut out, record, &geometry, width, &metrics),
        }

        Some(Layout {
            geometry,
            instructions: out,
        })
    }

    fn portrait(
        &self,
        out: &mut Vec<DrawInstruction>,
        record: &DisplayRecord,
        geometry: &LayoutGeometry,
        photo_height: u32,
        m: &PanelMetrics,
    ) {
        let top = photo_height as f64;
        let canvas_width = geometry.canvas_width as f64;
        out.push(DrawInstruction::FillRect {
            x: 0.0,
            y: top,
            width: canvas_width,
            height: geometry.panel_size as f64,
            color: self.palette.panel.clone(),
        });

        let value_y = top + (m.stats_top + m.value_size) as f64;
        let label_y = value_y + m.label_offset() as f64;
        let spacing = m.stat_spacing as f64;

        let widths: Vec<f64> = record.stats.iter().map(|s| self.stat_width(s, m)).collect();
        let total = widths.iter().sum::<f64>() + spacing * (widths.len() as f64 - 1.0);
        let mut x = (canvas_width - total) / 2.0;
        for (stat, slot) in record.stats.iter().zip(&widths) {
            let centre = x + slot / 2.0;
            self.stat(out, stat, centre, value_y, label_y, TextAlign::Center, m);
            x += slot + spacing;
        }

        let footer_y = label_y + m.footer_gap as f64;
        let padding = m.footer_padding as f64;
        self.camera_name(
            out,
            &record.camera_name,
            padding,
            footer_y,
            canvas_width * PORTRAIT_NAME_SHARE,
            m,
        );
        self.brand_line(out, record, canvas_width - padding, footer_y, m);
    }

    fn landscape(
        &self,
        out: &mut Vec<DrawInstruction>,
        record: &DisplayRecord,
        geometry: &LayoutGeometry,
        photo_width: u32,
        m: &PanelMetrics,
    ) {
        let left = photo_width as f64;
        let panel = geometry.panel_size as f64;
        out.push(DrawInstruction::FillRect {
            x: left,
            y: 0.0,
            width: panel,
            height: geometry.canvas_height as f64,
            color: self.palette.panel.clone(),
        });

        let x = left + m.panel_padding as f64;
        let first_value_y = (m.stats_top + m.value_size) as f64;
        let spacing = m.stat_spacing as f64;
        let label_offset = m.label_offset() as f64;
        for (i, stat) in record.stats.iter().enumerate() {
            let value_y = first_value_y + i as f64 * spacing;
            self.stat(out, stat, x, value_y, value_y + label_offset, TextAlign::Left, m);
        }

        let rows = record.stats.len() as f64;
        let last_label_y = first_value_y + (rows - 1.0) * spacing + label_offset;
        let camera_y = last_label_y + m.footer_gap as f64;
        let brand_y = camera_y + (m.name_to_brand_gap + m.brand_size) as f64;
        let padding = m.footer_padding as f64;
        self.camera_name(
            out,
            &record.camera_name,
            left + padding,
            camera_y,
            panel - 2.0 * padding,
            m,
        );
        self.brand_stack(out, record, left + padding, brand_y, m);
    }

    /// Slot width of one stat: the wider of its value and its label.
    fn stat_width(&self, stat: &Stat, m: &PanelMetrics) -> f64 {
        let value = self
            .measure
            .text_width(&stat.value, m.value_size, FontWeight::MEDIUM);
        let label = self
            .measure
            .text_width(stat.label, m.label_size, FontWeight::LIGHT);
        value.max(label)
    }

    #[allow(clippy::too_many_arguments)]
    fn stat(
        &self,
        out: &mut Vec<DrawInstruction>,
        stat: &Stat,
        x: f64,
        value_y: f64,
        label_y: f64,
        align: TextAlign,
        m: &PanelMetrics,
    ) {
        out.push(DrawInstruction::FillText {
            text: stat.value.clone(),
            x,
            y: value_y,
            font_size: m.value_size,
            font_weight: FontWeight::MEDIUM,
            align,
            color: self.palette.text.clone(),
        });
        out.push(DrawInstruction::FillText {
            text: stat.label.to_string(),
            x,
            y: label_y,
            font_size: m.label_size,
            font_weight: FontWeight::LIGHT,
            align,
            color: self.palette.label.clone(),
        });
    }

    fn camera_name(
        &self,
        out: &mut Vec<DrawInstruction>,
        name: &str,
        x: f64,
        y: f64,
        max_width: f64,
        m: &PanelMetrics,
    ) {
        let size = fit_font_size(
            self.measure,
            name,
            m.camera_size,
            FontWeight::EXTRA_LIGHT,
            max_width,
        );
        out.push(DrawInstruction::FillText {
            text: name.to_string(),
            x,
            y,
            font_size: size,
            font_weight: FontWeight::EXTRA_LIGHT,
            align: TextAlign::Left,
            color: self.palette.text.clone(),
        });
    }

    /// Resolve one side of the brand line. `logo_name` picks the artwork,
    /// `text` is the fallback label; empty text means the side is absent.
    fn mark(&self, text: &str, logo_name: &str, m: &PanelMetrics) -> Option<Mark> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if let Some(name) = logo_key(logo_name) {
            if let Some(asset) = self.logos.logo(name).filter(LogoAsset::is_drawable) {
                let height = m.logo_height as f64 * logo_scale(name);
                let width = asset.width as f64 * height / asset.height as f64;
                return Some(Mark::Logo {
                    name,
                    asset,
                    width,
                    height,
                });
            }
        }
        let width = self
            .measure
            .text_width(text, m.brand_size, FontWeight::SEMI_BOLD);
        Some(Mark::Text {
            text: text.to_string(),
            width,
        })
    }

    fn draw_mark(
        &self,
        out: &mut Vec<DrawInstruction>,
        mark: &Mark,
        x: f64,
        baseline: f64,
        m: &PanelMetrics,
    ) {
        match mark {
            Mark::Logo {
                name,
                asset,
                width,
                height,
            } => out.push(DrawInstruction::DrawImage {
                asset: AssetRef::Logo {
                    name: name.to_string(),
                    reference: asset.reference.clone(),
                },
                x,
                y: baseline - height,
                width: *width,
                height: *height,
            }),
            Mark::Text { text, .. } => out.push(DrawInstruction::FillText {
                text: text.clone(),
                x,
                y: baseline,
                font_size: m.brand_size,
                font_weight: FontWeight::SEMI_BOLD,
                align: TextAlign::Left,
                color: self.palette.text.clone(),
            }),
        }
    }

    /// Portrait: `brand │ lens` on one line, its right edge at `right`.
    fn brand_line(
        &self,
        out: &mut Vec<DrawInstruction>,
        record: &DisplayRecord,
        right: f64,
        baseline: f64,
        m: &PanelMetrics,
    ) {
        let brand = self.mark(&record.brand_text, &record.brand_key, m);
        let lens = self.mark(&record.lens_text, &record.lens_text, m);
        let divided = brand.is_some() && lens.is_some();

        let gap = m.brand_gap as f64;
        let divider_width = m.divider_width as f64;
        let total = brand.as_ref().map_or(0.0, Mark::width)
            + lens.as_ref().map_or(0.0, Mark::width)
            + if divided { gap * 2.0 + divider_width } else { 0.0 };

        let mut x = right - total;
        if let Some(brand) = &brand {
            self.draw_mark(out, brand, x, baseline, m);
            x += brand.width();
        }
        if divided {
            x += gap;
            let centre = x + divider_width / 2.0;
            let height = m.divider_height as f64;
            let bottom = baseline - height * 0.05;
            out.push(DrawInstruction::StrokeLine {
                x1: centre,
                y1: bottom - height,
                x2: centre,
                y2: bottom,
                width: m.divider_stroke as f64,
                color: self.palette.text.clone(),
            });
            x += divider_width + gap;
        }
        if let Some(lens) = &lens {
            self.draw_mark(out, lens, x, baseline, m);
        }
    }

    /// Landscape: brand on `baseline`, lens on the next line below it.
    fn brand_stack(
        &self,
        out: &mut Vec<DrawInstruction>,
        record: &DisplayRecord,
        x: f64,
        baseline: f64,
        m: &PanelMetrics,
    ) {
        let brand = self.mark(&record.brand_text, &record.brand_key, m);
        let lens = self.mark(&record.lens_text, &record.lens_text, m);

        if let Some(brand) = &brand {
            self.draw_mark(out, brand, x, baseline, m);
        }
        if let Some(lens) = &lens {
            let line_height = match lens {
                Mark::Logo { height, .. } => *height,
                Mark::Text { .. } => m.brand_size as f64,
            };
            let lens_y = if brand.is_some() {
                baseline + m.lens_line_gap as f64 + line_height
            } else {
                baseline
            };
            self.draw_mark(out, lens, x, lens_y, m);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brands::{BrandChoice, LensChoice};
    use crate::display::resolve_display;
    use crate::form::{DisplayForm, FormEdit};
    use crate::layout::NoLogos;
    use crate::test_helpers::{FixedLogos, HalfEmMetrics};

    fn record(edits: Vec<FormEdit>) -> DisplayRecord {
        let form = edits
            .into_iter()
            .fold(DisplayForm::default(), |form, edit| form.apply(edit));
        resolve_display(&form)
    }

    fn sample() -> DisplayRecord {
        record(vec![
            FormEdit::CameraName("Sony ILCE-7RM5".into()),
            FormEdit::BrandChoice(BrandChoice::Named("Sony")),
            FormEdit::LensChoice(LensChoice::Named("Zeiss")),
            FormEdit::Aperture("2.8".into()),
            FormEdit::ShutterSpeed("1/125".into()),
            FormEdit::FocalLength("35".into()),
            FormEdit::Iso("400".into()),
        ])
    }

    fn compose_with(
        record: &DisplayRecord,
        width: u32,
        height: u32,
        orientation: Orientation,
        logos: &impl LogoLookup,
    ) -> Layout {
        let palette = Palette::default();
        Composer::new(&palette, &HalfEmMetrics, logos)
            .compose(record, width, height, orientation)
            .unwrap()
    }

    fn find_text<'a>(layout: &'a Layout, wanted: &str) -> &'a DrawInstruction {
        layout
            .instructions
            .iter()
            .find(|i| i.text() == Some(wanted))
            .unwrap_or_else(|| panic!("no text instruction for {wanted:?}"))
    }

    fn text_pos(layout: &Layout, wanted: &str) -> (f64, f64, u32) {
        match find_text(layout, wanted) {
            DrawInstruction::FillText {
                x, y, font_size, ..
            } => (*x, *y, *font_size),
            _ => unreachable!(),
        }
    }

    fn strokes(layout: &Layout) -> usize {
        layout
            .instructions
            .iter()
            .filter(|i| matches!(i, DrawInstruction::StrokeLine { .. }))
            .count()
    }

    fn logo_images(layout: &Layout) -> Vec<(&str, f64, f64, f64, f64)> {
        layout
            .instructions
            .iter()
            .filter_map(|i| match i {
                DrawInstruction::DrawImage {
                    asset: AssetRef::Logo { name, .. },
                    x,
                    y,
                    width,
                    height,
                } => Some((name.as_str(), *x, *y, *width, *height)),
                _ => None,
            })
            .collect()
    }

    // =========================================================================
    // fit_font_size
    // =========================================================================

    #[test]
    fn short_name_keeps_base_size() {
        assert_eq!(
            fit_font_size(&HalfEmMetrics, "X100V", 16, FontWeight::EXTRA_LIGHT, 500.0),
            16
        );
    }

    #[test]
    fn long_name_shrinks_until_it_fits() {
        // 20 chars × size/2 ≤ 120 → size ≤ 12
        let name = "a".repeat(20);
        let size = fit_font_size(&HalfEmMetrics, &name, 16, FontWeight::EXTRA_LIGHT, 120.0);
        assert_eq!(size, 12);
        assert!(HalfEmMetrics.text_width(&name, size, FontWeight::EXTRA_LIGHT) <= 120.0);
    }

    #[test]
    fn huge_name_stops_at_floor() {
        // Budget of a 40-char name at the base size; 200 chars never fits
        let budget = HalfEmMetrics.text_width(&"a".repeat(40), 16, FontWeight::EXTRA_LIGHT);
        let name = "a".repeat(200);
        let size = fit_font_size(&HalfEmMetrics, &name, 16, FontWeight::EXTRA_LIGHT, budget);
        assert_eq!(size, MIN_FONT_SIZE);
    }

    #[test]
    fn base_below_floor_is_left_alone() {
        let size = fit_font_size(&HalfEmMetrics, &"a".repeat(50), 5, FontWeight::EXTRA_LIGHT, 1.0);
        assert_eq!(size, 5);
    }

    // =========================================================================
    // Frame
    // =========================================================================

    #[test]
    fn zero_dimensions_compose_nothing() {
        let palette = Palette::default();
        let composer = Composer::new(&palette, &HalfEmMetrics, &NoLogos);
        assert!(composer.compose(&sample(), 0, 100, Orientation::Portrait).is_none());
        assert!(composer.compose(&sample(), 100, 0, Orientation::Landscape).is_none());
    }

    #[test]
    fn canvas_overflow_composes_nothing() {
        let palette = Palette::default();
        let composer = Composer::new(&palette, &HalfEmMetrics, &NoLogos);
        let huge = u32::MAX - 10;
        assert!(composer.compose(&sample(), huge, huge, Orientation::Portrait).is_none());
        assert!(composer.compose(&sample(), huge, huge, Orientation::Landscape).is_none());
    }

    #[test]
    fn frame_starts_with_canvas_photo_panel() {
        let layout = compose_with(&sample(), 1080, 1350, Orientation::Portrait, &NoLogos);
        assert_eq!(
            layout.instructions[..3],
            [
                DrawInstruction::FillRect {
                    x: 0.0,
                    y: 0.0,
                    width: 1080.0,
                    height: 1588.0,
                    color: "#ffffff".into(),
                },
                DrawInstruction::DrawImage {
                    asset: AssetRef::Photo,
                    x: 0.0,
                    y: 0.0,
                    width: 1080.0,
                    height: 1350.0,
                },
                DrawInstruction::FillRect {
                    x: 0.0,
                    y: 1350.0,
                    width: 1080.0,
                    height: 238.0,
                    color: "#ffffff".into(),
                },
            ]
        );
    }

    #[test]
    fn composition_is_deterministic() {
        let a = compose_with(
            &sample(),
            1620,
            1080,
            Orientation::Landscape,
            &FixedLogos::new(&["Sony"]),
        );
        let b = compose_with(
            &sample(),
            1620,
            1080,
            Orientation::Landscape,
            &FixedLogos::new(&["Sony"]),
        );
        assert_eq!(a, b);
    }

    // =========================================================================
    // Portrait
    // =========================================================================

    #[test]
    fn portrait_stats_row_is_centred() {
        let layout = compose_with(&sample(), 1080, 1350, Orientation::Portrait, &NoLogos);
        let m = PanelMetrics::new(238, Orientation::Portrait);
        let widths: Vec<f64> = sample()
            .stats
            .iter()
            .map(|s| {
                let v = HalfEmMetrics.text_width(&s.value, m.value_size, FontWeight::MEDIUM);
                let l = HalfEmMetrics.text_width(s.label, m.label_size, FontWeight::LIGHT);
                v.max(l)
            })
            .collect();

        let (first_x, value_y, _) = text_pos(&layout, "f2.8");
        let (last_x, _, _) = text_pos(&layout, "400");
        let row_left = first_x - widths[0] / 2.0;
        let row_right = last_x + widths[3] / 2.0;
        assert!((row_left - (1080.0 - row_right)).abs() < 1e-9);
        assert_eq!(value_y, 1350.0 + 27.0 + 36.0);

        let (label_x, label_y, _) = text_pos(&layout, "shutter speed");
        let (value_x, _, _) = text_pos(&layout, "1/125");
        assert_eq!(label_x, value_x);
        assert_eq!(label_y, value_y + 8.0 + 13.0);
    }

    #[test]
    fn portrait_camera_name_in_footer() {
        let layout = compose_with(&sample(), 1080, 1350, Orientation::Portrait, &NoLogos);
        let (x, y, size) = text_pos(&layout, "Sony ILCE-7RM5");
        assert_eq!(x, 43.0);
        assert_eq!(y, 1350.0 + 27.0 + 36.0 + 21.0 + 103.0);
        assert_eq!(size, 16);
    }

    #[test]
    fn portrait_long_camera_name_fits_share() {
        let name = "Z".repeat(200);
        let rec = record(vec![FormEdit::CameraName(name.clone())]);
        let layout = compose_with(&rec, 1080, 1350, Orientation::Portrait, &NoLogos);
        let (_, _, size) = text_pos(&layout, &name);
        assert_eq!(size, MIN_FONT_SIZE);
    }

    #[test]
    fn portrait_text_brand_line_is_right_aligned() {
        let layout = compose_with(&sample(), 1080, 1350, Orientation::Portrait, &NoLogos);
        let (brand_x, brand_y, brand_size) = text_pos(&layout, "Sony");
        let (lens_x, lens_y, _) = text_pos(&layout, "Zeiss");
        assert_eq!(brand_size, 18);
        assert_eq!(brand_y, lens_y);
        // "Sony" 4 × 9 = 36, gap 12, divider 13, gap 12
        assert_eq!(lens_x, brand_x + 36.0 + 12.0 + 13.0 + 12.0);
        // "Zeiss" 5 × 9 = 45 ends at canvas − padding
        assert_eq!(lens_x + 45.0, 1080.0 - 43.0);
        assert_eq!(strokes(&layout), 1);
    }

    #[test]
    fn divider_sits_between_marks() {
        let layout = compose_with(&sample(), 1080, 1350, Orientation::Portrait, &NoLogos);
        let (brand_x, baseline, _) = text_pos(&layout, "Sony");
        let stroke = layout
            .instructions
            .iter()
            .find_map(|i| match i {
                DrawInstruction::StrokeLine {
                    x1, y1, x2, y2, width, ..
                } => Some((*x1, *y1, *x2, *y2, *width)),
                _ => None,
            })
            .unwrap();
        let centre = brand_x + 36.0 + 12.0 + 6.5;
        let bottom = baseline - 23.0 * 0.05;
        assert_eq!(stroke, (centre, bottom - 23.0, centre, bottom, 2.0));
    }

    #[test]
    fn single_mark_has_no_divider() {
        let rec = record(vec![FormEdit::BrandChoice(BrandChoice::Named("Canon"))]);
        let layout = compose_with(&rec, 1080, 1350, Orientation::Portrait, &NoLogos);
        assert_eq!(strokes(&layout), 0);
        let (x, _, _) = text_pos(&layout, "Canon");
        assert_eq!(x + 45.0, 1080.0 - 43.0);
    }

    #[test]
    fn no_brand_no_lens_omits_line() {
        let rec = record(vec![FormEdit::CameraName("Mystery".into())]);
        assert_eq!(rec.brand_text, "");
        let layout = compose_with(&rec, 1080, 1350, Orientation::Portrait, &NoLogos);
        // canvas, photo, panel, 8 stat texts, camera name
        assert_eq!(layout.instructions.len(), 3 + 8 + 1);
        assert_eq!(strokes(&layout), 0);
    }

    #[test]
    fn logo_replaces_text_at_logo_height() {
        let layout = compose_with(
            &sample(),
            1080,
            1350,
            Orientation::Portrait,
            &FixedLogos::new(&["Sony"]),
        );
        let logos = logo_images(&layout);
        assert_eq!(logos.len(), 1);
        let (name, x, y, w, h) = logos[0];
        assert_eq!(name, "Sony");
        // 200×50 artwork at height 23 → width 92
        assert_eq!((w, h), (92.0, 23.0));
        let (lens_x, baseline, _) = text_pos(&layout, "Zeiss");
        assert_eq!(y, baseline - 23.0);
        assert_eq!(lens_x, x + 92.0 + 12.0 + 13.0 + 12.0);
        assert!(layout.instructions.iter().all(|i| i.text() != Some("Sony")));
    }

    #[test]
    fn logo_scale_applies_per_brand() {
        let rec = record(vec![FormEdit::BrandChoice(BrandChoice::Named("Leica"))]);
        let layout = compose_with(
            &rec,
            1080,
            1350,
            Orientation::Portrait,
            &FixedLogos::new(&["Leica"]),
        );
        let (_, _, _, w, h) = logo_images(&layout)[0];
        assert!((h - 23.0 * 1.4).abs() < 1e-9);
        assert!((w - 4.0 * h).abs() < 1e-9);
    }

    #[test]
    fn zero_sized_logo_falls_back_to_text() {
        let logos = FixedLogos {
            width: 0,
            ..FixedLogos::new(&["Sony"])
        };
        let layout = compose_with(&sample(), 1080, 1350, Orientation::Portrait, &logos);
        assert!(logo_images(&layout).is_empty());
        text_pos(&layout, "Sony");
    }

    #[test]
    fn placeholder_brand_never_uses_artwork() {
        // "Brand" placeholder has an empty key, so no lookup happens
        let rec = record(vec![FormEdit::BrandChoice(BrandChoice::Other)]);
        let layout = compose_with(
            &rec,
            1080,
            1350,
            Orientation::Portrait,
            &FixedLogos::new(&["Brand"]),
        );
        assert!(logo_images(&layout).is_empty());
        text_pos(&layout, "Brand");
    }

    // =========================================================================
    // Landscape
    // =========================================================================

    #[test]
    fn landscape_stats_stack_in_panel() {
        let layout = compose_with(&sample(), 1620, 1080, Orientation::Landscape, &NoLogos);
        let expected_x = 1620.0 + 29.0;
        for (i, value) in ["f2.8", "1/125", "35", "400"].iter().enumerate() {
            let (x, y, size) = text_pos(&layout, value);
            assert_eq!(x, expected_x);
            assert_eq!(y, 125.0 + 36.0 + i as f64 * 123.0);
            assert_eq!(size, 36);
        }
        let (_, iso_label_y, _) = text_pos(&layout, "ISO");
        assert_eq!(iso_label_y, 125.0 + 36.0 + 3.0 * 123.0 + 21.0);
    }

    #[test]
    fn landscape_footer_follows_last_label() {
        let layout = compose_with(&sample(), 1620, 1080, Orientation::Landscape, &NoLogos);
        let last_label_y = 125.0 + 36.0 + 3.0 * 123.0 + 21.0;
        let (camera_x, camera_y, _) = text_pos(&layout, "Sony ILCE-7RM5");
        assert_eq!(camera_x, 1620.0 + 43.0);
        assert_eq!(camera_y, last_label_y + 211.0);

        let (brand_x, brand_y, _) = text_pos(&layout, "Sony");
        assert_eq!(brand_x, camera_x);
        assert_eq!(brand_y, camera_y + 32.0 + 18.0);

        let (lens_x, lens_y, _) = text_pos(&layout, "Zeiss");
        assert_eq!(lens_x, brand_x);
        assert_eq!(lens_y, brand_y + 14.0 + 18.0);
        assert_eq!(strokes(&layout), 0);
    }

    #[test]
    fn landscape_lone_lens_takes_brand_line() {
        let rec = record(vec![FormEdit::LensChoice(LensChoice::Named("Sigma"))]);
        let layout = compose_with(&rec, 1620, 1080, Orientation::Landscape, &NoLogos);
        let (_, camera_y, _) = text_pos(&layout, "Camera name");
        let (_, lens_y, _) = text_pos(&layout, "Sigma");
        assert_eq!(lens_y, camera_y + 32.0 + 18.0);
    }

    #[test]
    fn landscape_lens_logo_line_height() {
        let layout = compose_with(
            &sample(),
            1620,
            1080,
            Orientation::Landscape,
            &FixedLogos::new(&["Zeiss"]),
        );
        let (_, brand_y, _) = text_pos(&layout, "Sony");
        let (name, _, y, _, h) = logo_images(&layout)[0];
        assert_eq!(name, "Zeiss");
        let lens_baseline = brand_y + 14.0 + h;
        assert!((y - (lens_baseline - h)).abs() < 1e-9);
    }

    #[test]
    fn landscape_camera_name_budget_is_panel_width() {
        let name = "W".repeat(30);
        let rec = record(vec![FormEdit::CameraName(name.clone())]);
        let layout = compose_with(&rec, 1620, 1080, Orientation::Landscape, &NoLogos);
        let (_, _, size) = text_pos(&layout, &name);
        // budget 238 − 86 = 152; 30 × size/2 ≤ 152 → size 10
        assert_eq!(size, 10);
    }

    #[test]
    fn doubled_photo_doubles_positions() {
        let small = compose_with(&sample(), 1080, 1350, Orientation::Portrait, &NoLogos);
        let large = compose_with(&sample(), 2160, 2700, Orientation::Portrait, &NoLogos);
        let (_, small_y, small_size) = text_pos(&small, "Sony ILCE-7RM5");
        let (_, large_y, large_size) = text_pos(&large, "Sony ILCE-7RM5");
        assert!((large_y - 2.0 * small_y).abs() <= 4.0);
        assert_eq!(large_size, 2 * small_size);
    }
}
