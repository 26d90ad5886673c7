//! Profile import errors

use thiserror::Error;

use super::types::{TagSignature, TypeSignature};

/// Why a profile could not become a working space
///
/// Every variant that means "this is not a matrix/TRC RGB profile" shares
/// the same message prefix so callers can surface it as one condition.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum IccError {
    /// Shorter than the header plus tag count
    #[error("Profile too small: expected at least {expected} bytes, got {actual}")]
    TooSmall { expected: usize, actual: usize },

    /// A tag table entry points past the end of the buffer
    #[error("Tag '{tag}' out of bounds: offset {offset} + size {size} > profile size {profile_size}")]
    TagOutOfBounds {
        tag: TagSignature,
        offset: u32,
        size: u32,
        profile_size: usize,
    },

    /// A tag holds a type the engine cannot use for it
    #[error("Invalid type '{type_sig}' for tag '{tag}'")]
    InvalidTagType { tag: TagSignature, type_sig: TypeSignature },

    /// A colorant tag is absent
    #[error("Profile is not a matrix-based RGB profile: missing '{missing}' tag")]
    NotMatrixBased { missing: TagSignature },

    /// Colorants are absent but `A2B0`/`B2A0` are present
    #[error("Profile is not a matrix-based RGB profile: LUT-based transforms are not supported")]
    LutBased,

    #[error("Colorant matrix is singular (determinant {determinant:e}), cannot invert")]
    SingularMatrix { determinant: f64 },

    #[error("Corrupted data: {0}")]
    CorruptedData(String),
}
