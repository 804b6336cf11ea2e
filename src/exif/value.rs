//! Typed values and the closed field vocabulary produced by the decoder.
//!
//! Every value is typed exactly as the TIFF type code of its entry declares.
//! A count of one decodes to the scalar variant, any other count to the
//! sequence variant: a one-element `SHORT` is [`FieldValue::Short`], a
//! three-element one is [`FieldValue::Shorts`].

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Unsigned rational as stored by TIFF type 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// `numerator / denominator`, or `None` for a zero denominator.
    pub fn to_f64(self) -> Option<f64> {
        if self.denominator == 0 {
            None
        } else {
            Some(self.numerator as f64 / self.denominator as f64)
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A decoded entry value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Byte(u8),
    Bytes(Vec<u8>),
    Ascii(String),
    Short(u16),
    Shorts(Vec<u16>),
    Long(u32),
    Longs(Vec<u32>),
    Rational(Rational),
    Rationals(Vec<Rational>),
}

impl FieldValue {
    /// First element of a sequence as its scalar shape; scalars return themselves.
    ///
    /// Empty sequences have no first element.
    pub fn first(&self) -> Option<FieldValue> {
        match self {
            FieldValue::Bytes(v) => v.first().copied().map(FieldValue::Byte),
            FieldValue::Shorts(v) => v.first().copied().map(FieldValue::Short),
            FieldValue::Longs(v) => v.first().copied().map(FieldValue::Long),
            FieldValue::Rationals(v) => v.first().copied().map(FieldValue::Rational),
            scalar => Some(scalar.clone()),
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(
            self,
            FieldValue::Bytes(_)
                | FieldValue::Shorts(_)
                | FieldValue::Longs(_)
                | FieldValue::Rationals(_)
        )
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T: fmt::Display>(items: &[T]) -> String {
            items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        }
        match self {
            FieldValue::Byte(v) => write!(f, "{v}"),
            FieldValue::Short(v) => write!(f, "{v}"),
            FieldValue::Long(v) => write!(f, "{v}"),
            FieldValue::Rational(v) => write!(f, "{v}"),
            FieldValue::Ascii(v) => write!(f, "{v}"),
            FieldValue::Bytes(v) => write!(f, "[{}]", join(v)),
            FieldValue::Shorts(v) => write!(f, "[{}]", join(v)),
            FieldValue::Longs(v) => write!(f, "[{}]", join(v)),
            FieldValue::Rationals(v) => write!(f, "[{}]", join(v)),
        }
    }
}

/// Recognized fields, keyed by their EXIF names.
///
/// The Exif sub-IFD pointer (`0x8769`) is recognized by the parser but is
/// structural, so it never appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Field {
    Make,
    Model,
    ExposureTime,
    FNumber,
    #[serde(rename = "ISOSpeedRatings")]
    IsoSpeedRatings,
    PhotographicSensitivity,
    FocalLength,
    LensMake,
    LensModel,
}

/// Tag id of the Exif sub-IFD pointer.
pub const EXIF_IFD_POINTER: u16 = 0x8769;

const TAG_TABLE: &[(u16, Field)] = &[
    (0x010f, Field::Make),
    (0x0110, Field::Model),
    (0x829a, Field::ExposureTime),
    (0x829d, Field::FNumber),
    (0x8827, Field::IsoSpeedRatings),
    (0x8830, Field::PhotographicSensitivity),
    (0x920a, Field::FocalLength),
    (0xa433, Field::LensMake),
    (0xa434, Field::LensModel),
];

impl Field {
    pub fn from_tag(tag: u16) -> Option<Field> {
        TAG_TABLE
            .iter()
            .find(|(id, _)| *id == tag)
            .map(|(_, field)| *field)
    }

    pub fn tag(self) -> u16 {
        TAG_TABLE
            .iter()
            .find(|(_, field)| *field == self)
            .map(|(id, _)| *id)
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Make => "Make",
            Field::Model => "Model",
            Field::ExposureTime => "ExposureTime",
            Field::FNumber => "FNumber",
            Field::IsoSpeedRatings => "ISOSpeedRatings",
            Field::PhotographicSensitivity => "PhotographicSensitivity",
            Field::FocalLength => "FocalLength",
            Field::LensMake => "LensMake",
            Field::LensModel => "LensModel",
        }
    }
}

/// Decoded fields of one file. Absent fields are simply missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TagMap {
    fields: BTreeMap<Field, FieldValue>,
}

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    /// Entries of `other` win over entries already present.
    pub(crate) fn merge(&mut self, other: TagMap) {
        self.fields.extend(other.fields);
    }

    pub(crate) fn insert(&mut self, field: Field, value: FieldValue) {
        self.fields.insert(field, value);
    }
}

impl FromIterator<(Field, FieldValue)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (Field, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rational_zero_denominator_has_no_value() {
        assert_eq!(Rational::new(1, 0).to_f64(), None);
        assert_eq!(Rational::new(1, 4).to_f64(), Some(0.25));
    }

    #[test]
    fn first_of_sequence_is_scalar() {
        let v = FieldValue::Shorts(vec![200, 400]);
        assert_eq!(v.first(), Some(FieldValue::Short(200)));
        assert_eq!(FieldValue::Rationals(vec![]).first(), None);
        assert_eq!(
            FieldValue::Ascii("x".into()).first(),
            Some(FieldValue::Ascii("x".into()))
        );
    }

    #[test]
    fn field_tag_table_roundtrips() {
        for (tag, field) in TAG_TABLE {
            assert_eq!(Field::from_tag(*tag), Some(*field));
            assert_eq!(field.tag(), *tag);
        }
        assert_eq!(Field::from_tag(EXIF_IFD_POINTER), None);
        assert_eq!(Field::from_tag(0x0112), None);
    }

    #[test]
    fn merge_overrides_existing_entries() {
        let mut base: TagMap = [(Field::Make, FieldValue::Ascii("A".into()))]
            .into_iter()
            .collect();
        let overlay: TagMap = [
            (Field::Make, FieldValue::Ascii("B".into())),
            (Field::FNumber, FieldValue::Rational(Rational::new(28, 10))),
        ]
        .into_iter()
        .collect();
        base.merge(overlay);
        assert_eq!(base.get(Field::Make), Some(&FieldValue::Ascii("B".into())));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn display_joins_sequences() {
        assert_eq!(FieldValue::Shorts(vec![1, 2]).to_string(), "[1, 2]");
        assert_eq!(FieldValue::Rational(Rational::new(1, 125)).to_string(), "1/125");
    }

    #[test]
    fn serializes_by_field_name() {
        let map: TagMap = [(Field::IsoSpeedRatings, FieldValue::Short(200))]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"ISOSpeedRatings":{"type":"short","value":200}}"#);
    }
}
