//! Pure calculation functions for panel geometry.
//!
//! The panel is designed at a reference thickness of 238 px for a 1080 px
//! photo. Every other dimension is a design constant at that reference,
//! multiplied by `panel_size / 238` and rounded to whole pixels on its own.
//! Constants are never derived from already-rounded constants, so rounding
//! error never accumulates and a photo twice as large gets a panel whose
//! every dimension is twice as large, within one pixel.

use crate::form::Orientation;
use serde::Serialize;

/// Panel thickness of the reference design.
pub const DESIGN_PANEL: f64 = 238.0;
/// Photo dimension the reference panel was designed against.
pub const DESIGN_PHOTO: f64 = 1080.0;

/// Canvas and panel size for one photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutGeometry {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub panel_size: u32,
    pub orientation: Orientation,
}

/// Panel thickness for a photo whose primary dimension is `primary`.
///
/// # Examples
/// ```
/// # use photostats::layout::panel_size;
/// assert_eq!(panel_size(1080), 238);
/// assert_eq!(panel_size(2160), 476);
/// ```
pub fn panel_size(primary: u32) -> u32 {
    (primary as f64 * DESIGN_PANEL / DESIGN_PHOTO).round() as u32
}

/// Canvas geometry: portrait appends the panel below the photo (thickness
/// from the width), landscape appends it to the right (thickness from the
/// height). `None` when either dimension is zero or the canvas would not
/// fit in `u32`.
pub fn layout_geometry(
    width: u32,
    height: u32,
    orientation: Orientation,
) -> Option<LayoutGeometry> {
    if width == 0 || height == 0 {
        return None;
    }
    let geometry = match orientation {
        Orientation::Portrait => {
            let panel = panel_size(width);
            LayoutGeometry {
                canvas_width: width,
                canvas_height: height.checked_add(panel)?,
                panel_size: panel,
                orientation,
            }
        }
        Orientation::Landscape => {
            let panel = panel_size(height);
            LayoutGeometry {
                canvas_width: width.checked_add(panel)?,
                canvas_height: height,
                panel_size: panel,
                orientation,
            }
        }
    };
    Some(geometry)
}

/// `design × panel_size / 238`, rounded.
pub fn scaled(design: f64, panel_size: u32) -> u32 {
    (design * panel_size as f64 / DESIGN_PANEL).round() as u32
}

/// Every panel dimension in pixels for one panel size.
///
/// Fields shared by both orientations use the same design constant; the
/// few that differ are resolved by [`PanelMetrics::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelMetrics {
    /// Portrait: gap between panel top and stats row. Landscape: canvas top to first stat.
    pub stats_top: u32,
    /// Portrait: gap between stat slots. Landscape: distance between stat rows.
    pub stat_spacing: u32,
    pub value_size: u32,
    pub label_size: u32,
    pub label_gap: u32,
    /// Last label baseline to camera-name baseline.
    pub footer_gap: u32,
    pub footer_padding: u32,
    /// Landscape only: left inset of the stats column.
    pub panel_padding: u32,
    pub camera_size: u32,
    pub brand_size: u32,
    /// Portrait only: space on each side of the brand/lens divider.
    pub brand_gap: u32,
    /// Landscape only: camera-name baseline to brand baseline, before the brand size.
    pub name_to_brand_gap: u32,
    /// Landscape only: vertical gap between brand and lens lines.
    pub lens_line_gap: u32,
    pub logo_height: u32,
    pub divider_width: u32,
    pub divider_stroke: u32,
    pub divider_height: u32,
}

impl PanelMetrics {
    pub fn new(panel_size: u32, orientation: Orientation) -> Self {
        let s = |design: f64| scaled(design, panel_size);
        let (stats_top, footer_gap) = match orientation {
            Orientation::Portrait => (s(27.0), s(103.0)),
            Orientation::Landscape => (s(125.0), s(211.0)),
        };
        Self {
            stats_top,
            stat_spacing: s(123.0),
            value_size: s(36.0),
            label_size: s(13.0),
            label_gap: s(8.0),
            footer_gap,
            footer_padding: s(DESIGN_PANEL * 0.18),
            panel_padding: s(DESIGN_PANEL * 0.12),
            camera_size: s(16.0),
            brand_size: s(18.0),
            brand_gap: s(12.0),
            name_to_brand_gap: s(32.0),
            lens_line_gap: s(14.0),
            logo_height: s(18.0 * 1.25),
            divider_width: s(18.0 * 0.7),
            divider_stroke: s(18.0 * 0.12).max(1),
            divider_height: s((18.0 * 1.25 * 0.9_f64).max(18.0 * 1.3)),
        }
    }

    /// Label baseline sits this far below its value baseline.
    pub fn label_offset(&self) -> u32 {
        self.label_gap + self.label_size
    }
}
