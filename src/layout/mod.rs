//! Layout engine.
//!
//! Turns a [`DisplayRecord`](crate::display::DisplayRecord) and the photo's
//! pixel size into an ordered list of [`DrawInstruction`]s. Nothing here
//! draws; a host replays the instructions on whatever surface it has.
//!
//! ## Module Structure
//!
//! ```text
//! layout/
//! ├── geometry.rs     # Panel size, canvas size, scaled design constants (pure)
//! ├── metrics.rs      # TextMeasure / LogoLookup host capabilities
//! ├── instruction.rs  # DrawInstruction, Palette
//! └── engine.rs       # Composer: portrait and landscape composition, text fitting
//! ```
//!
//! ## Scaling
//!
//! Every dimension is expressed at a 238 px reference panel and scaled by
//! `panel_size / 238`, where the panel size itself is 238/1080 of the photo's
//! primary dimension. A layout is therefore resolution independent: the
//! same record on a photo twice as large produces a frame twice as large.

mod engine;
pub mod geometry;
mod instruction;
mod metrics;

pub use engine::{Composer, Layout, MIN_FONT_SIZE, fit_font_size};
pub use geometry::{LayoutGeometry, PanelMetrics, layout_geometry, panel_size};
pub use instruction::{AssetRef, DrawInstruction, Palette, TextAlign};
pub use metrics::{FontWeight, LogoAsset, LogoLookup, NoLogos, TextMeasure};
