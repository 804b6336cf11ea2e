//! EXIF decoding.
//!
//! Two pure entry points over byte buffers ([`decode_jpeg`], [`decode_tiff`])
//! plus a sniffing [`decode`] and a filesystem convenience ([`read_tags`]).
//! The result is a [`TagMap`] keyed by the fixed [`Field`] set; any other
//! tag in the file is ignored.

mod parser;
mod value;

pub use parser::{decode, decode_jpeg, decode_tiff, read_tags};
pub use value::{EXIF_IFD_POINTER, Field, FieldValue, Rational, TagMap};
