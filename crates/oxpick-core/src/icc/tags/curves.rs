//! Curve Tag Types
//!
//! ICC profiles use curves for tone reproduction (TRC).
//! Two main types:
//! - curv: Identity, simple gamma or lookup table
//! - para: Parametric curves with formula
//!
//! See ICC.1:2022 Sections 10.6 (curv) and 10.18 (para)

use crate::icc::error::IccError;
use crate::icc::types::{read_s15fixed16, read_u8fixed8, read_u16, read_u32};
use crate::math::gamma::ParametricCurve;

/// Curve tag data (curv type)
#[derive(Debug, Clone, PartialEq)]
pub enum CurveData {
    /// Identity curve (count = 0)
    Identity,
    /// Simple gamma (count = 1, value is u8Fixed8)
    Gamma(f64),
    /// Lookup table (count > 1, values are u16)
    Table(Vec<u16>),
}

impl CurveData {
    /// Parse curve data from bytes (after type signature and reserved bytes)
    pub fn parse(data: &[u8]) -> Result<Self, IccError> {
        let count = read_u32(data, 0)
            .ok_or_else(|| IccError::CorruptedData("Curve tag too small".to_string()))?
            as usize;

        match count {
            0 => Ok(CurveData::Identity),
            1 => read_u8fixed8(data, 4)
                .map(CurveData::Gamma)
                .ok_or_else(|| IccError::CorruptedData("Curve gamma value missing".to_string())),
            _ => {
                let required_len = count
                    .checked_mul(2)
                    .and_then(|n| n.checked_add(4))
                    .filter(|&n| n <= data.len())
                    .ok_or_else(|| {
                        IccError::CorruptedData(format!(
                            "Curve table too small: {} entries, have {} bytes",
                            count,
                            data.len()
                        ))
                    })?;

                let table = data[4..required_len]
                    .chunks_exact(2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]))
                    .collect();
                Ok(CurveData::Table(table))
            }
        }
    }
}

/// Parametric curve data (para type)
#[derive(Debug, Clone, PartialEq)]
pub struct ParametricCurveData {
    /// Function type as stored in the tag
    pub function_type: u16,
    /// The curve the engine evaluates
    pub curve: ParametricCurve,
    /// False when the function type was replaced by a pure gamma
    pub exact: bool,
}

impl ParametricCurveData {
    /// Parse parametric curve from bytes (after type signature and reserved bytes)
    pub fn parse(data: &[u8]) -> Result<Self, IccError> {
        let function_type = read_u16(data, 0).ok_or_else(|| {
            IccError::CorruptedData("Parametric curve too small".to_string())
        })?;
        // Bytes 2-3 are reserved

        let param_count = match function_type {
            0 => 1,
            1 => 3,
            2 => 4,
            3 => 5,
            4 => 7,
            _ => 1,
        };
        let params: Vec<f64> = (0..param_count)
            .map_while(|i| read_s15fixed16(data, 4 + i * 4))
            .collect();

        if params.is_empty() {
            return Err(IccError::CorruptedData(
                "Parametric curve has no parameters".to_string(),
            ));
        }

        let (curve, exact) = ParametricCurve::from_icc(function_type, &params);
        Ok(Self {
            function_type,
            curve,
            exact,
        })
    }
}
