//! Text Tag Types
//!
//! ICC profiles can contain text in several formats:
//! - text: Simple ASCII text
//! - desc: Profile description (v2 format)
//! - mluc: Multi-localized Unicode (v4 format)
//!
//! See ICC.1:2022 Sections 10.24 (text), 10.14 (desc), 10.15 (mluc)

use crate::icc::error::IccError;
use crate::icc::types::read_u32;

/// Text tag data
#[derive(Debug, Clone, PartialEq)]
pub struct TextData {
    /// Primary text content (first localized record for `mluc`)
    pub text: String,
    /// Localized versions (language-country -> text)
    pub localized: Vec<(String, String)>,
}

impl TextData {
    /// Create from a single string
    pub fn new(text: String) -> Self {
        Self {
            text,
            localized: Vec::new(),
        }
    }

    /// Parse 'text' type (null-terminated ASCII)
    pub fn parse_text(data: &[u8]) -> Result<Self, IccError> {
        Ok(Self::new(ascii_until_nul(data)))
    }

    /// Parse 'desc' type (v2 profile description)
    ///
    /// Only the ASCII part is read; the Unicode and ScriptCode parts that
    /// follow are rarely populated correctly.
    pub fn parse_desc(data: &[u8]) -> Result<Self, IccError> {
        let ascii_count = read_u32(data, 0).ok_or_else(|| {
            IccError::CorruptedData("Description tag too small".to_string())
        })? as usize;

        let ascii = ascii_count
            .checked_add(4)
            .and_then(|end| data.get(4..end))
            .ok_or_else(|| {
                IccError::CorruptedData("Description ASCII data truncated".to_string())
            })?;

        Ok(Self::new(ascii_until_nul(ascii)))
    }

    /// Parse 'mluc' type (multi-localized Unicode)
    ///
    /// Takes the whole tag, type signature included: record string offsets
    /// are relative to the start of the tag.
    pub fn parse_mluc(tag: &[u8]) -> Result<Self, IccError> {
        let too_small = || IccError::CorruptedData("mluc tag too small".to_string());
        let record_count = read_u32(tag, 8).ok_or_else(too_small)? as usize;
        let record_size = read_u32(tag, 12).ok_or_else(too_small)? as usize;

        if record_size < 12 {
            return Err(IccError::CorruptedData(
                "mluc record size too small".to_string(),
            ));
        }

        let mut localized = Vec::new();

        for i in 0..record_count {
            let Some(record) = i
                .checked_mul(record_size)
                .and_then(|o| o.checked_add(16))
                .and_then(|start| tag.get(start..start.checked_add(12)?))
            else {
                break;
            };

            let locale = format!(
                "{}{}-{}{}",
                record[0] as char, record[1] as char, record[2] as char, record[3] as char
            );

            let (Some(len), Some(offset)) = (read_u32(record, 4), read_u32(record, 8)) else {
                continue;
            };
            let Some(utf16) = (offset as usize)
                .checked_add(len as usize)
                .and_then(|end| tag.get(offset as usize..end))
            else {
                continue;
            };

            if let Some(text) = decode_utf16be(utf16) {
                localized.push((locale, text));
            }
        }

        let text = localized
            .first()
            .map(|(_, text)| text.clone())
            .unwrap_or_default();

        Ok(Self { text, localized })
    }

    /// Get text for a specific language prefix
    pub fn get_locale(&self, lang: &str) -> Option<&str> {
        self.localized
            .iter()
            .find(|(locale, _)| locale.starts_with(lang))
            .map(|(_, text)| text.as_str())
    }
}

/// ASCII bytes up to the first NUL
fn ascii_until_nul(data: &[u8]) -> String {
    data.iter()
        .take_while(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}

/// Decode UTF-16BE bytes to String, stopping at a NUL code unit
///
/// A trailing odd byte is ignored.
fn decode_utf16be(data: &[u8]) -> Option<String> {
    let utf16: Vec<u16> = data
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .take_while(|&c| c != 0)
        .collect();

    String::from_utf16(&utf16).ok()
}
