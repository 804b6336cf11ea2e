//! Shared test utilities for the photostats test suite.
//!
//! Builds synthetic TIFF blocks (IFD0 plus an optional Exif sub-IFD) in
//! either byte order, and wraps them into minimal JPEG streams.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tiff = TiffBuilder::new(Endian::Big)
//!     .ifd0(TiffEntry::ascii(0x010f, "Canon"))
//!     .exif(TiffEntry::rational(0x829a, &[(1, 250)]))
//!     .build();
//! let jpeg = wrap_in_jpeg(&tiff);
//! ```

use crate::layout::{FontWeight, LogoAsset, LogoLookup, TextMeasure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    fn u16(self, v: u16) -> [u8; 2] {
        match self {
            Endian::Little => v.to_le_bytes(),
            Endian::Big => v.to_be_bytes(),
        }
    }

    fn u32(self, v: u32) -> [u8; 4] {
        match self {
            Endian::Little => v.to_le_bytes(),
            Endian::Big => v.to_be_bytes(),
        }
    }
}

/// One IFD entry before encoding.
#[derive(Debug, Clone)]
pub enum TiffEntry {
    Ascii(u16, String),
    Short(u16, Vec<u16>),
    Long(u16, Vec<u32>),
    Rational(u16, Vec<(u32, u32)>),
    /// Entry written verbatim: `value` goes into the 4-byte value field
    /// when it fits, otherwise into the data area.
    Raw {
        tag: u16,
        typ: u16,
        count: u32,
        value: Vec<u8>,
    },
}

impl TiffEntry {
    pub fn ascii(tag: u16, text: &str) -> Self {
        TiffEntry::Ascii(tag, text.to_string())
    }

    pub fn short(tag: u16, values: &[u16]) -> Self {
        TiffEntry::Short(tag, values.to_vec())
    }

    pub fn long(tag: u16, values: &[u32]) -> Self {
        TiffEntry::Long(tag, values.to_vec())
    }

    pub fn rational(tag: u16, values: &[(u32, u32)]) -> Self {
        TiffEntry::Rational(tag, values.to_vec())
    }

    pub fn raw(tag: u16, typ: u16, count: u32, value: Vec<u8>) -> Self {
        TiffEntry::Raw {
            tag,
            typ,
            count,
            value,
        }
    }

    /// (tag, type, count, payload bytes in `endian` order)
    fn encode(&self, endian: Endian) -> (u16, u16, u32, Vec<u8>) {
        match self {
            TiffEntry::Ascii(tag, text) => {
                let mut bytes = text.as_bytes().to_vec();
                bytes.push(0);
                (*tag, 2, bytes.len() as u32, bytes)
            }
            TiffEntry::Short(tag, values) => (
                *tag,
                3,
                values.len() as u32,
                values.iter().flat_map(|v| endian.u16(*v)).collect(),
            ),
            TiffEntry::Long(tag, values) => (
                *tag,
                4,
                values.len() as u32,
                values.iter().flat_map(|v| endian.u32(*v)).collect(),
            ),
            TiffEntry::Rational(tag, values) => (
                *tag,
                5,
                values.len() as u32,
                values
                    .iter()
                    .flat_map(|(n, d)| {
                        let mut b = endian.u32(*n).to_vec();
                        b.extend_from_slice(&endian.u32(*d));
                        b
                    })
                    .collect(),
            ),
            TiffEntry::Raw {
                tag,
                typ,
                count,
                value,
            } => (*tag, *typ, *count, value.clone()),
        }
    }
}

/// Builds a TIFF block: header, IFD0, optional Exif IFD, then a data area
/// holding every payload longer than 4 bytes.
#[derive(Debug, Clone)]
pub struct TiffBuilder {
    endian: Endian,
    ifd0: Vec<TiffEntry>,
    exif: Vec<TiffEntry>,
}

impl TiffBuilder {
    pub fn new(endian: Endian) -> Self {
        Self {
            endian,
            ifd0: Vec::new(),
            exif: Vec::new(),
        }
    }

    pub fn ifd0(mut self, entry: TiffEntry) -> Self {
        self.ifd0.push(entry);
        self
    }

    pub fn exif(mut self, entry: TiffEntry) -> Self {
        self.exif.push(entry);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let e = self.endian;
        let has_exif = !self.exif.is_empty();
        let ifd_len = |n: usize| 2 + 12 * n + 4;

        let ifd0_count = self.ifd0.len() + usize::from(has_exif);
        let ifd0_offset = 8;
        let exif_offset = ifd0_offset + ifd_len(ifd0_count);
        let data_start = exif_offset + if has_exif { ifd_len(self.exif.len()) } else { 0 };

        let mut out = Vec::new();
        out.extend_from_slice(match e {
            Endian::Little => b"II",
            Endian::Big => b"MM",
        });
        out.extend_from_slice(&e.u16(42));
        out.extend_from_slice(&e.u32(ifd0_offset as u32));

        let mut data = Vec::new();
        let mut write_ifd = |out: &mut Vec<u8>, entries: &[TiffEntry], pointer: Option<usize>| {
            let count = entries.len() + usize::from(pointer.is_some());
            out.extend_from_slice(&e.u16(count as u16));
            for entry in entries {
                let (tag, typ, count, payload) = entry.encode(e);
                out.extend_from_slice(&e.u16(tag));
                out.extend_from_slice(&e.u16(typ));
                out.extend_from_slice(&e.u32(count));
                if payload.len() <= 4 {
                    let mut inline = payload.clone();
                    inline.resize(4, 0);
                    out.extend_from_slice(&inline);
                } else {
                    let offset = data_start + data.len();
                    out.extend_from_slice(&e.u32(offset as u32));
                    data.extend_from_slice(&payload);
                }
            }
            if let Some(offset) = pointer {
                out.extend_from_slice(&e.u16(0x8769));
                out.extend_from_slice(&e.u16(4));
                out.extend_from_slice(&e.u32(1));
                out.extend_from_slice(&e.u32(offset as u32));
            }
            out.extend_from_slice(&e.u32(0)); // next IFD
        };

        write_ifd(&mut out, &self.ifd0, has_exif.then_some(exif_offset));
        if has_exif {
            write_ifd(&mut out, &self.exif, None);
        }
        out.extend_from_slice(&data);
        out
    }
}

/// SOI, a JFIF APP0, the Exif APP1 carrying `tiff`, then EOI.
pub fn wrap_in_jpeg(tiff: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8];

    let jfif = b"JFIF\0\x01\x01\0\0\x01\0\x01\0\0";
    out.extend_from_slice(&[0xFF, 0xE0]);
    out.extend_from_slice(&((jfif.len() + 2) as u16).to_be_bytes());
    out.extend_from_slice(jfif);

    out.extend_from_slice(&exif_app1(tiff));
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

/// A complete APP1 segment (marker, length, `Exif\0\0`, `tiff`).
pub fn exif_app1(tiff: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, 0xE1];
    out.extend_from_slice(&((tiff.len() + 8) as u16).to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(tiff);
    out
}

// =========================================================================
// Layout doubles
// =========================================================================

/// Every character advances half the font size, regardless of weight.
pub struct HalfEmMetrics;

impl TextMeasure for HalfEmMetrics {
    fn text_width(&self, text: &str, font_size: u32, _weight: FontWeight) -> f64 {
        text.chars().count() as f64 * font_size as f64 * 0.5
    }
}

/// Serves a fixed-size logo for every name in the list.
pub struct FixedLogos {
    pub names: Vec<&'static str>,
    pub width: u32,
    pub height: u32,
}

impl FixedLogos {
    pub fn new(names: &[&'static str]) -> Self {
        Self {
            names: names.to_vec(),
            width: 200,
            height: 50,
        }
    }
}

impl LogoLookup for FixedLogos {
    fn logo(&self, name: &str) -> Option<LogoAsset> {
        self.names
            .iter()
            .find(|n| n.eq_ignore_ascii_case(name))
            .map(|n| LogoAsset {
                reference: format!("logos/{n}.png"),
                width: self.width,
                height: self.height,
            })
    }
}
