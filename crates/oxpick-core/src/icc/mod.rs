//! Matrix/TRC ICC Profiles
//!
//! Reads just enough of an ICC.1 profile to build a working color space:
//! the `rXYZ`/`gXYZ`/`bXYZ` colorants and `rTRC`/`gTRC`/`bTRC` curves, plus
//! `desc`, `cprt` and `wtpt` for display. Tags may share storage and are
//! read independently by offset, so an unreadable tag only matters when it
//! is one of the six the import needs. Profiles that describe their device
//! with `A2B0`/`B2A0` lookup tables are reported as [`IccError::LutBased`].
//!
//! ```ignore
//! use oxpick_core::icc::IccProfile;
//!
//! let profile = IccProfile::parse(&bytes)?;
//! let (to_srgb, from_srgb) = profile.srgb_matrices()?;
//! ```

pub mod header;
pub mod tags;

mod error;
mod parser;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use error::IccError;
pub use header::{IccHeader, ProfileVersion};
pub use parser::{DEFAULT_PROFILE_NAME, IccProfile};
pub use tags::{CurveData, ParametricCurveData, TagData, TextData};
pub use types::{TagSignature, TypeSignature};
