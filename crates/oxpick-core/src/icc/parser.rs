//! ICC Profile Parser
//!
//! Reads the tag table of a matrix/TRC RGB profile and derives the matrix
//! that takes profile linear RGB to linear sRGB.
//!
//! # Structure
//!
//! An ICC profile consists of:
//! 1. A 128-byte header
//! 2. A tag table listing all tags
//! 3. Tag data (may overlap/share data)

use std::collections::HashMap;

use tracing::{debug, warn};

use super::error::IccError;
use super::header::{IccHeader, MIN_PROFILE_SIZE};
use super::tags::TagData;
use super::types::{TagSignature, TypeSignature, read_u32, signature_to_string};
use crate::color::Xyz;
use crate::math::chromatic_adaptation::D50_TO_D65_BRADFORD;
use crate::math::matrix::{Matrix3x3, XYZ_TO_SRGB};

/// Offset of the tag count, right after the header
const TAG_COUNT_OFFSET: usize = MIN_PROFILE_SIZE;

/// Offset of the first tag table entry
const TAG_TABLE_OFFSET: usize = TAG_COUNT_OFFSET + 4;

/// signature(4) + offset(4) + size(4)
const TAG_ENTRY_SIZE: usize = 12;

/// Profile name used when no readable description is present
pub const DEFAULT_PROFILE_NAME: &str = "Custom CS";

/// An ICC profile parsed from bytes
#[derive(Debug, Clone)]
pub struct IccProfile {
    /// Profile header (128 bytes)
    pub header: IccHeader,
    /// Tag table: signature -> parsed data
    tags: HashMap<u32, TagData>,
    /// Tag table entries dropped for pointing outside the buffer
    skipped: Vec<IccError>,
}

/// Tag table entry (as stored in profile)
#[derive(Debug, Clone, Copy)]
struct TagTableEntry {
    /// Tag signature
    signature: u32,
    /// Offset from start of profile
    offset: u32,
    /// Size of tag data
    size: u32,
}

impl IccProfile {
    /// Parse an ICC profile from bytes
    ///
    /// Fails only when the header or the tag table cannot be read. Tags
    /// outside the buffer are skipped with a warning.
    pub fn parse(data: &[u8]) -> Result<Self, IccError> {
        let header = IccHeader::parse(data)?;
        if !header.has_valid_signature() {
            warn!(
                signature = %signature_to_string(header.signature),
                "ICC header signature is not 'acsp'"
            );
        }
        if !header.is_rgb() {
            warn!(color_space = %header.color_space_name(), "ICC profile is not RGB");
        }

        let tag_count = Self::parse_tag_count(data)?;
        let entries = Self::parse_tag_table(data, tag_count)?;
        debug!(bytes = data.len(), tag_count, "parsing ICC profile");

        let mut tags = HashMap::with_capacity(entries.len());
        let mut skipped = Vec::new();

        for entry in &entries {
            let start = entry.offset as usize;
            let Some(tag_data) = start
                .checked_add(entry.size as usize)
                .and_then(|end| data.get(start..end))
            else {
                let error = IccError::TagOutOfBounds {
                    tag: TagSignature(entry.signature),
                    offset: entry.offset,
                    size: entry.size,
                    profile_size: data.len(),
                };
                warn!(%error, "skipping ICC tag");
                skipped.push(error);
                continue;
            };

            tags.insert(entry.signature, TagData::parse(tag_data));
        }

        Ok(Self {
            header,
            tags,
            skipped,
        })
    }

    /// Get the number of tags declared in the table
    fn parse_tag_count(data: &[u8]) -> Result<usize, IccError> {
        read_u32(data, TAG_COUNT_OFFSET)
            .map(|count| count as usize)
            .ok_or(IccError::TooSmall {
                expected: TAG_TABLE_OFFSET,
                actual: data.len(),
            })
    }

    /// Parse the tag table
    fn parse_tag_table(data: &[u8], count: usize) -> Result<Vec<TagTableEntry>, IccError> {
        let required_size = count
            .checked_mul(TAG_ENTRY_SIZE)
            .and_then(|n| n.checked_add(TAG_TABLE_OFFSET))
            .unwrap_or(usize::MAX);

        if data.len() < required_size {
            return Err(IccError::TooSmall {
                expected: required_size,
                actual: data.len(),
            });
        }

        let entries = data[TAG_TABLE_OFFSET..required_size]
            .chunks_exact(TAG_ENTRY_SIZE)
            .map(|entry| TagTableEntry {
                signature: u32::from_be_bytes([entry[0], entry[1], entry[2], entry[3]]),
                offset: u32::from_be_bytes([entry[4], entry[5], entry[6], entry[7]]),
                size: u32::from_be_bytes([entry[8], entry[9], entry[10], entry[11]]),
            })
            .collect();

        Ok(entries)
    }

    /// Get a tag by signature
    pub fn get_tag(&self, sig: TagSignature) -> Option<&TagData> {
        self.tags.get(&sig.0)
    }

    /// Get number of parsed tags
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Tag entries that were dropped while parsing
    pub fn skipped_tags(&self) -> &[IccError] {
        &self.skipped
    }

    /// Profile description, if present and non-empty
    pub fn description(&self) -> Option<String> {
        self.text_tag(TagSignature::DESC)
    }

    /// Description, or [`DEFAULT_PROFILE_NAME`]
    pub fn name(&self) -> String {
        self.description()
            .unwrap_or_else(|| DEFAULT_PROFILE_NAME.to_string())
    }

    /// Copyright text
    pub fn copyright(&self) -> Option<String> {
        self.text_tag(TagSignature::COPYRIGHT)
    }

    fn text_tag(&self, sig: TagSignature) -> Option<String> {
        self.get_tag(sig)
            .and_then(|t| t.as_text())
            .map(|t| t.text.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Media white point (wtpt tag)
    pub fn media_white_point(&self) -> Option<Xyz> {
        self.get_tag(TagSignature::MEDIA_WHITE)
            .and_then(|t| t.as_xyz())
    }

    /// Check if the profile carries device-to-PCS or PCS-to-device LUTs
    pub fn is_lut_based(&self) -> bool {
        self.get_tag(TagSignature::A2B0).is_some() || self.get_tag(TagSignature::B2A0).is_some()
    }

    /// Check if all three colorant tags are readable
    pub fn is_matrix_shaper(&self) -> bool {
        self.colorants().is_ok()
    }

    /// Read one colorant tag
    fn colorant(&self, sig: TagSignature) -> Result<Xyz, IccError> {
        match self.get_tag(sig) {
            None if self.is_lut_based() => Err(IccError::LutBased),
            None => Err(IccError::NotMatrixBased { missing: sig }),
            Some(TagData::Malformed { error, .. }) => Err(error.clone()),
            Some(tag) => tag
                .as_xyz()
                .ok_or(IccError::InvalidTagType {
                    tag: sig,
                    type_sig: TypeSignature(tag.type_signature()),
                }),
        }
    }

    /// Red, green and blue colorants in the D50 connection space
    pub fn colorants(&self) -> Result<[Xyz; 3], IccError> {
        Ok([
            self.colorant(TagSignature::RED_COLORANT)?,
            self.colorant(TagSignature::GREEN_COLORANT)?,
            self.colorant(TagSignature::BLUE_COLORANT)?,
        ])
    }

    /// Profile linear RGB → D50 XYZ, colorants as columns
    pub fn colorant_matrix(&self) -> Result<Matrix3x3, IccError> {
        let [r, g, b] = self.colorants()?;
        Ok(Matrix3x3::from_columns(
            r.to_array(),
            g.to_array(),
            b.to_array(),
        ))
    }

    /// Matrices between profile linear RGB and linear sRGB
    ///
    /// Returns `(forward, reverse)` where forward is
    /// `XYZ→sRGB · Bradford(D50→D65) · colorants`.
    pub fn srgb_matrices(&self) -> Result<(Matrix3x3, Matrix3x3), IccError> {
        let forward = XYZ_TO_SRGB
            .multiply(&D50_TO_D65_BRADFORD)
            .multiply(&self.colorant_matrix()?);
        let reverse = forward.inverse().ok_or(IccError::SingularMatrix {
            determinant: forward.determinant(),
        })?;
        Ok((forward, reverse))
    }
}
