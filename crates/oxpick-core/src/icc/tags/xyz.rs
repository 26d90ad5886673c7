//! `XYZ ` tag payload (ICC.1:2022 10.31)
//!
//! The type allows an array, but colorant and white point tags carry exactly
//! one value; anything after the first is ignored.

use crate::color::Xyz;
use crate::icc::error::IccError;
use crate::icc::types::read_xyz_number;

/// First XYZNumber of an `XYZ ` payload
pub fn parse_xyz(payload: &[u8]) -> Result<Xyz, IccError> {
    read_xyz_number(payload, 0).ok_or_else(|| {
        IccError::CorruptedData(format!("XYZ payload of {} bytes", payload.len()))
    })
}
