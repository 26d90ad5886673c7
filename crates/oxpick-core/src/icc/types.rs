//! Big-endian primitives of the ICC format
//!
//! Readers take an offset into a tag or the whole profile and return `None`
//! instead of panicking when the value would run past the end.

use std::fmt;

use crate::color::Xyz;

/// Render a 4-byte signature as text, escaping non-printable bytes
pub fn signature_to_string(sig: u32) -> String {
    let mut out = String::with_capacity(4);
    for b in sig.to_be_bytes() {
        match b {
            b' ' | 0x21..=0x7E => out.push(b as char),
            _ => out.push_str(&format!("\\x{b:02x}")),
        }
    }
    out
}

macro_rules! signature {
    ($(#[$doc:meta])* $name:ident { $($konst:ident = $code:literal,)* }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub u32);

        impl $name {
            $(pub const $konst: Self = Self(u32::from_be_bytes(*$code));)*
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&signature_to_string(self.0))
            }
        }
    };
}

signature!(
    /// Key of a tag table entry
    TagSignature {
        A2B0 = b"A2B0",
        B2A0 = b"B2A0",
        RED_COLORANT = b"rXYZ",
        GREEN_COLORANT = b"gXYZ",
        BLUE_COLORANT = b"bXYZ",
        RED_TRC = b"rTRC",
        GREEN_TRC = b"gTRC",
        BLUE_TRC = b"bTRC",
        DESC = b"desc",
        COPYRIGHT = b"cprt",
        MEDIA_WHITE = b"wtpt",
    }
);

signature!(
    /// First four bytes of a tag's payload
    TypeSignature {
        XYZ = b"XYZ ",
        CURVE = b"curv",
        PARA = b"para",
        TEXT = b"text",
        DESC = b"desc",
        MLUC = b"mluc",
    }
);

#[inline]
pub fn read_u16(data: &[u8], offset: usize) -> Option<u16> {
    let bytes = data.get(offset..offset.checked_add(2)?)?;
    Some(u16::from_be_bytes(bytes.try_into().ok()?))
}

#[inline]
pub fn read_u32(data: &[u8], offset: usize) -> Option<u32> {
    let bytes = data.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_be_bytes(bytes.try_into().ok()?))
}

/// s15Fixed16Number: signed, 16 fractional bits
#[inline]
pub fn read_s15fixed16(data: &[u8], offset: usize) -> Option<f64> {
    read_u32(data, offset).map(|raw| raw as i32 as f64 / 65536.0)
}

/// u8Fixed8Number: unsigned, 8 fractional bits
#[inline]
pub fn read_u8fixed8(data: &[u8], offset: usize) -> Option<f64> {
    read_u16(data, offset).map(|raw| raw as f64 / 256.0)
}

/// XYZNumber: three consecutive s15Fixed16Numbers
#[inline]
pub fn read_xyz_number(data: &[u8], offset: usize) -> Option<Xyz> {
    Some(Xyz::new(
        read_s15fixed16(data, offset)?,
        read_s15fixed16(data, offset + 4)?,
        read_s15fixed16(data, offset + 8)?,
    ))
}
