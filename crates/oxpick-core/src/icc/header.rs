//! ICC Profile Header
//!
//! The ICC profile header is exactly 128 bytes and contains basic profile
//! information. See ICC.1:2022 Section 7.2.
//!
//! Parsing is lenient: only the buffer length is enforced here. Whether a
//! profile is usable is decided by its tags.

use super::error::IccError;
use super::types::{read_u32, signature_to_string};

/// Profile file signature - 'acsp' (0x61637370)
pub const PROFILE_SIGNATURE: u32 = 0x61637370;

/// Size of the fixed header
pub const MIN_PROFILE_SIZE: usize = 128;

/// Data color space signature for RGB
pub const RGB_COLOR_SPACE: u32 = u32::from_be_bytes(*b"RGB ");

/// ICC Profile Header fields used by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IccHeader {
    /// Profile size in bytes, as declared
    pub size: u32,
    /// Profile version
    pub version: ProfileVersion,
    /// Device class signature (`mntr`, `scnr`, ...)
    pub device_class: u32,
    /// Data color space signature (`RGB `, `CMYK`, ...)
    pub color_space: u32,
    /// Profile connection space signature (`XYZ ` or `Lab `)
    pub pcs: u32,
    /// Profile file signature (should be 'acsp')
    pub signature: u32,
}

impl IccHeader {
    /// Parse header from bytes
    pub fn parse(data: &[u8]) -> Result<Self, IccError> {
        let too_small = || IccError::TooSmall {
            expected: MIN_PROFILE_SIZE,
            actual: data.len(),
        };
        if data.len() < MIN_PROFILE_SIZE {
            return Err(too_small());
        }
        let field = |offset: usize| read_u32(data, offset).ok_or_else(too_small);

        Ok(Self {
            size: field(0)?,
            version: ProfileVersion {
                major: data[8],
                minor: data[9] >> 4,
                patch: data[9] & 0x0F,
            },
            device_class: field(12)?,
            color_space: field(16)?,
            pcs: field(20)?,
            signature: field(36)?,
        })
    }

    /// True if the file signature is 'acsp'
    pub fn has_valid_signature(&self) -> bool {
        self.signature == PROFILE_SIGNATURE
    }

    /// True if the data color space is RGB
    pub fn is_rgb(&self) -> bool {
        self.color_space == RGB_COLOR_SPACE
    }

    /// Data color space as text
    pub fn color_space_name(&self) -> String {
        signature_to_string(self.color_space)
    }
}

/// Profile version (major.minor.patch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProfileVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl ProfileVersion {
    /// ICC v4 or later (`mluc` descriptions)
    pub fn is_v4(&self) -> bool {
        self.major >= 4
    }
}
