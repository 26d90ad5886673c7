//! Working color spaces
//!
//! - [`trc`]: tone response curves, uniform or per channel
//! - [`working`]: the immutable [`WorkingColorSpace`]
//! - [`active`]: the published [`ActiveSpace`] cell

pub mod active;
pub mod trc;
pub mod working;

pub use active::ActiveSpace;
pub use trc::{Channel, ToneCurve, Trc};
pub use working::{SpaceKind, WorkingColorSpace};
