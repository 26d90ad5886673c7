//! Tag payloads
//!
//! A tag starts with its type signature and four reserved bytes. Only the
//! types a matrix/TRC import reads are decoded; everything else is kept as
//! [`TagData::Unknown`] so its presence can still be checked.

mod curves;
mod text;
mod xyz;

pub use curves::{CurveData, ParametricCurveData};
pub use text::TextData;
pub use xyz::parse_xyz;

use crate::color::Xyz;

use super::error::IccError;
use super::types::{TypeSignature, read_u32};

/// Parsed tag data
#[derive(Debug, Clone, PartialEq)]
pub enum TagData {
    /// XYZ type data (colorants, white point)
    Xyz(Xyz),
    /// Curve type (TRC)
    Curve(CurveData),
    /// Parametric curve type
    ParametricCurve(ParametricCurveData),
    /// Text, v2 description or multi-localized Unicode
    Text(TextData),
    /// Type the engine does not read (LUTs, sf32, ...)
    Unknown { type_sig: u32 },
    /// Known type whose payload failed to parse
    Malformed { type_sig: u32, error: IccError },
}

impl TagData {
    /// Parse a whole tag (type signature, reserved bytes and payload)
    ///
    /// Never fails: unreadable payloads are kept as [`TagData::Malformed`]
    /// so the caller can decide whether the tag was required.
    pub fn parse(data: &[u8]) -> Self {
        let Some(type_sig) = read_u32(data, 0).filter(|_| data.len() >= 8) else {
            return TagData::Malformed {
                type_sig: 0,
                error: IccError::CorruptedData("Tag data too small for header".to_string()),
            };
        };
        let type_data = &data[8..];

        let parsed = match TypeSignature(type_sig) {
            TypeSignature::XYZ => parse_xyz(type_data).map(TagData::Xyz),
            TypeSignature::CURVE => CurveData::parse(type_data).map(TagData::Curve),
            TypeSignature::PARA => {
                ParametricCurveData::parse(type_data).map(TagData::ParametricCurve)
            }
            TypeSignature::TEXT => TextData::parse_text(type_data).map(TagData::Text),
            TypeSignature::DESC => TextData::parse_desc(type_data).map(TagData::Text),
            TypeSignature::MLUC => TextData::parse_mluc(data).map(TagData::Text),
            _ => Ok(TagData::Unknown { type_sig }),
        };

        parsed.unwrap_or_else(|error| TagData::Malformed { type_sig, error })
    }

    /// Type signature of the tag
    pub fn type_signature(&self) -> u32 {
        match self {
            TagData::Xyz(_) => TypeSignature::XYZ.0,
            TagData::Curve(_) => TypeSignature::CURVE.0,
            TagData::ParametricCurve(_) => TypeSignature::PARA.0,
            TagData::Text(_) => TypeSignature::TEXT.0,
            TagData::Unknown { type_sig } | TagData::Malformed { type_sig, .. } => *type_sig,
        }
    }

    /// Check if this is an XYZ tag
    pub fn as_xyz(&self) -> Option<Xyz> {
        match self {
            TagData::Xyz(xyz) => Some(*xyz),
            _ => None,
        }
    }

    /// Check if this is a text tag
    pub fn as_text(&self) -> Option<&TextData> {
        match self {
            TagData::Text(text) => Some(text),
            _ => None,
        }
    }
}
