//! Minimal EXIF reader for JPEG files and bare TIFF blocks.
//!
//! Extracts the fixed field set in [`Field`] from IFD0 and the Exif
//! sub-IFD (pointed to by tag `0x8769`). Sub-IFD entries override IFD0
//! entries of the same name.
//!
//! For JPEG: walks the marker segments to the first APP1 carrying the
//! `Exif\0\0` signature; the TIFF block follows the signature.
//! For TIFF: parses the block directly from its byte-order marker.
//!
//! Decoding never fails. Missing, truncated or malformed input yields an
//! empty (or partial) [`TagMap`]; every read is bounds-checked and an
//! out-of-range entry is skipped rather than aborting the directory.

use super::value::{EXIF_IFD_POINTER, Field, FieldValue, Rational, TagMap};
use log::{debug, trace};
use std::path::Path;

const SOI: [u8; 2] = [0xFF, 0xD8];
const APP1: u8 = 0xE1;
const SOS: u8 = 0xDA;
const EOI: u8 = 0xD9;
const EXIF_SIGNATURE: &[u8] = b"Exif\0\0";
const ENTRY_LEN: usize = 12;

/// Read the recognized fields from a file on disk.
/// Returns an empty map when the file cannot be read.
pub fn read_tags(path: &Path) -> TagMap {
    match std::fs::read(path) {
        Ok(bytes) => decode(&bytes),
        Err(e) => {
            debug!("cannot read {}: {e}", path.display());
            TagMap::default()
        }
    }
}

/// Decode a buffer by sniffing its leading bytes: JPEG when it starts with
/// the start-of-image marker, TIFF when it starts with a TIFF header.
pub fn decode(data: &[u8]) -> TagMap {
    if data.starts_with(&SOI) {
        decode_jpeg(data)
    } else if data.starts_with(b"II*\0") || data.starts_with(b"MM\0*") {
        decode_tiff(data)
    } else {
        TagMap::default()
    }
}

// ---------------------------------------------------------------------------
// JPEG: locate the Exif APP1 segment
// ---------------------------------------------------------------------------

/// Decode the Exif block of a JPEG byte stream.
pub fn decode_jpeg(data: &[u8]) -> TagMap {
    match find_exif_tiff(data) {
        Some(tiff) => decode_tiff(tiff),
        None => {
            debug!("no Exif APP1 segment found");
            TagMap::default()
        }
    }
}

/// Find the TIFF block inside a JPEG's Exif APP1 segment.
///
/// The returned slice runs from the TIFF header to the end of the buffer:
/// value offsets are relative to the header and are checked against the
/// whole buffer, not the segment.
fn find_exif_tiff(data: &[u8]) -> Option<&[u8]> {
    if data.len() < 4 || !data.starts_with(&SOI) {
        return None;
    }

    let mut pos = 2;
    while pos + 4 <= data.len() {
        if data[pos] != 0xFF {
            trace!("expected marker at {pos}, found {:#04x}", data[pos]);
            return None;
        }
        let marker = data[pos + 1];
        // Fill bytes before a marker
        if marker == 0xFF {
            pos += 1;
            continue;
        }
        if marker == SOS || marker == EOI {
            return None;
        }

        let seg_len = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
        let body_start = pos + 4;
        let body_end = (pos + 2 + seg_len).min(data.len());

        if marker == APP1
            && body_end >= body_start
            && data[body_start..body_end].starts_with(EXIF_SIGNATURE)
        {
            debug!("Exif segment at offset {pos}, {seg_len} bytes");
            return Some(&data[body_start + EXIF_SIGNATURE.len()..]);
        }

        pos += 2 + seg_len;
    }
    None
}

// ---------------------------------------------------------------------------
// TIFF: header, IFDs, values
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteOrder {
    Little,
    Big,
}

/// Bounds-checked reads over a TIFF block in a fixed byte order.
struct TiffReader<'a> {
    data: &'a [u8],
    order: ByteOrder,
}

impl<'a> TiffReader<'a> {
    fn bytes(&self, offset: usize, len: usize) -> Option<&'a [u8]> {
        let end = offset.checked_add(len)?;
        self.data.get(offset..end)
    }

    fn u16_at(&self, offset: usize) -> Option<u16> {
        self.bytes(offset, 2).map(|b| self.u16(b))
    }

    fn u32_at(&self, offset: usize) -> Option<u32> {
        self.bytes(offset, 4).map(|b| self.u32(b))
    }

    fn u16(&self, b: &[u8]) -> u16 {
        let b = [b[0], b[1]];
        match self.order {
            ByteOrder::Little => u16::from_le_bytes(b),
            ByteOrder::Big => u16::from_be_bytes(b),
        }
    }

    fn u32(&self, b: &[u8]) -> u32 {
        let b = [b[0], b[1], b[2], b[3]];
        match self.order {
            ByteOrder::Little => u32::from_le_bytes(b),
            ByteOrder::Big => u32::from_be_bytes(b),
        }
    }
}

/// Recognized entries of one IFD plus the sub-IFD pointer, if any.
#[derive(Debug, Default)]
struct IfdContents {
    tags: TagMap,
    exif_offset: Option<usize>,
}

/// Decode a TIFF block starting at its byte-order marker.
pub fn decode_tiff(data: &[u8]) -> TagMap {
    let order = match data.get(0..2) {
        Some(b"II") => ByteOrder::Little,
        Some(b"MM") => ByteOrder::Big,
        _ => {
            debug!("TIFF header has no byte-order marker");
            return TagMap::default();
        }
    };
    let reader = TiffReader { data, order };

    let Some(first_ifd) = reader.u32_at(4) else {
        return TagMap::default();
    };

    let ifd0 = read_ifd(&reader, first_ifd as usize);
    let mut tags = ifd0.tags;

    if let Some(offset) = ifd0.exif_offset.filter(|&o| o != 0) {
        let exif = read_ifd(&reader, offset);
        debug!("Exif sub-IFD at {offset}: {} recognized entries", exif.tags.len());
        tags.merge(exif.tags);
    }

    tags
}

/// TIFF type code → byte size of one value. Unsupported types have no size.
fn type_size(typ: u16) -> Option<usize> {
    match typ {
        1 | 2 | 7 => Some(1), // BYTE, ASCII, UNDEFINED
        3 => Some(2),         // SHORT
        4 => Some(4),         // LONG
        5 => Some(8),         // RATIONAL
        _ => None,
    }
}

fn read_ifd(reader: &TiffReader<'_>, offset: usize) -> IfdContents {
    let mut contents = IfdContents::default();
    let Some(entry_count) = reader.u16_at(offset) else {
        trace!("IFD offset {offset} out of range");
        return contents;
    };

    for i in 0..entry_count as usize {
        let Some(entry) = offset
            .checked_add(2)
            .and_then(|o| o.checked_add(i * ENTRY_LEN))
        else {
            break;
        };
        let Some(raw) = reader.bytes(entry, ENTRY_LEN) else {
            trace!("IFD at {offset} truncated after {i} of {entry_count} entries");
            break;
        };

        let tag = reader.u16(&raw[0..2]);
        let field = Field::from_tag(tag);
        if field.is_none() && tag != EXIF_IFD_POINTER {
            continue;
        }

        let typ = reader.u16(&raw[2..4]);
        let count = reader.u32(&raw[4..8]) as usize;
        let Some(value) = read_value(reader, typ, count, entry) else {
            trace!("skipping tag {tag:#06x} (type {typ}, count {count})");
            continue;
        };

        match field {
            Some(field) => contents.tags.insert(field, value),
            None => contents.exif_offset = pointer_offset(&value),
        }
    }

    contents
}

/// Decode the value of the entry at `entry`, following its offset when the
/// value does not fit in the 4 inline bytes.
fn read_value(
    reader: &TiffReader<'_>,
    typ: u16,
    count: usize,
    entry: usize,
) -> Option<FieldValue> {
    let size = type_size(typ)?;
    let byte_len = size.checked_mul(count)?;
    let start = if byte_len <= 4 {
        entry + 8
    } else {
        reader.u32_at(entry + 8)? as usize
    };
    let bytes = reader.bytes(start, byte_len)?;

    let value = match typ {
        1 | 7 => {
            if count == 1 {
                FieldValue::Byte(bytes[0])
            } else {
                FieldValue::Bytes(bytes.to_vec())
            }
        }
        2 => FieldValue::Ascii(read_ascii(bytes)),
        3 => {
            let mut values: Vec<u16> = bytes.chunks_exact(2).map(|b| reader.u16(b)).collect();
            if count == 1 {
                FieldValue::Short(values.remove(0))
            } else {
                FieldValue::Shorts(values)
            }
        }
        4 => {
            let mut values: Vec<u32> = bytes.chunks_exact(4).map(|b| reader.u32(b)).collect();
            if count == 1 {
                FieldValue::Long(values.remove(0))
            } else {
                FieldValue::Longs(values)
            }
        }
        5 => {
            let mut values: Vec<Rational> = bytes
                .chunks_exact(8)
                .map(|b| Rational::new(reader.u32(&b[0..4]), reader.u32(&b[4..8])))
                .collect();
            if count == 1 {
                FieldValue::Rational(values.remove(0))
            } else {
                FieldValue::Rationals(values)
            }
        }
        _ => return None,
    };
    Some(value)
}

/// ASCII text up to the first NUL, trimmed.
fn read_ascii(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).trim().to_string()
}

fn pointer_offset(value: &FieldValue) -> Option<usize> {
    match value {
        FieldValue::Long(v) => Some(*v as usize),
        FieldValue::Short(v) => Some(*v as usize),
        _ => None,
    }
}
