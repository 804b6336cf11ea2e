//! # Photostats
//!
//! Camera-stats panels for photos. Reads the shooting metadata a camera
//! embeds in a JPEG or TIFF (make, model, lens, aperture, shutter speed,
//! focal length, ISO), lets the photographer correct it, and lays out a
//! panel showing it below or beside the photo.
//!
//! # Architecture: Decode → Edit → Resolve → Lay Out
//!
//! ```text
//! bytes ──decode──▶ TagMap ──build_form──▶ DisplayForm (auto)
//!                                              │ edits
//!                                              ▼
//!                                         DisplayForm (live)
//!                                              │ resolve_display
//!                                              ▼
//!                                         DisplayRecord ──compose──▶ DrawInstructions
//! ```
//!
//! Each arrow is a pure function. Nothing in the core touches the
//! filesystem, fonts or pixels: text measurement and logo artwork come in
//! through the [`layout::TextMeasure`] and [`layout::LogoLookup`] traits,
//! and the output is a list of instructions for whatever surface the host
//! draws on.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`exif`] | Byte-level JPEG/TIFF EXIF decoding into a [`exif::TagMap`] |
//! | [`normalize`] | Raw values → display text: numbers, apertures, exposure times |
//! | [`brands`] | Brand matcher table, brand/lens options, logo tables |
//! | [`form`] | Editable display fields, edits, auto/live state |
//! | [`display`] | Live form → exact texts the panel shows |
//! | [`layout`] | Panel geometry and draw-instruction composition |
//! | [`config`] | `photostats.toml` loading, validation and merging |
//! | [`assets`] | Host capabilities: logo directory, approximate font metrics |
//! | [`process`] | File loading, status messages, parallel batch scan |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Decoding Never Fails
//!
//! Camera metadata is routinely truncated, stripped or written by buggy
//! software. The decoder treats every malformed structure as "no data here"
//! and keeps whatever it already read. A photo without usable EXIF is a
//! normal case for the UI (the user fills the fields in), not an error.
//!
//! ## Resolution Independence
//!
//! The panel is designed once at a 238 px reference for a 1080 px photo.
//! Every dimension is scaled from that reference and rounded on its own, so
//! a 6000 px photo gets exactly the same panel, proportionally.
//!
//! ## Logos Are Optional
//!
//! Artwork exists for a handful of brands. Everything else, and every brand
//! whose artwork is missing or unreadable, renders as text with identical
//! alignment rules.

pub mod assets;
pub mod brands;
pub mod config;
pub mod display;
pub mod exif;
pub mod form;
pub mod layout;
pub mod normalize;
pub mod output;
pub mod process;

#[cfg(test)]
pub(crate) mod test_helpers;
