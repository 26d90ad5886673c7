//! # oxpick - color management engine for OKLab color pickers
//!
//! Converts between perceptual (OKLab/OKLCH) and device color spaces,
//! imports matrix/TRC ICC profiles as working spaces, and maps colors into
//! a working space's gamut by reducing chroma at fixed lightness and hue.
//!
//! ## Layout
//!
//! - [`math`]: matrices, Bradford adaptation, transfer functions, LUTs
//! - [`color`]: OKLab/OKLCH, RGB, XYZ value types and conversions
//! - [`icc`]: matrix/TRC ICC profile parser
//! - [`space`]: working color spaces and the published active space
//! - [`gamut`]: gamut tests and chroma clamping
//! - [`css`]: `oklab()`, `oklch()` and `#hex` text values
//! - [`simd`]: batch conversions
//!
//! ## Quick Start
//!
//! ```
//! use oxpick_core::{Oklab, WorkingColorSpace, gamut};
//!
//! let srgb = WorkingColorSpace::srgb();
//! let vivid = Oklab::new(0.7, 0.3, 0.3);
//! assert!(!gamut::is_in_working_gamut(&srgb, vivid));
//!
//! let clamped = gamut::clamp_to_working_gamut(&srgb, vivid);
//! assert!(gamut::is_in_working_gamut(&srgb, clamped));
//! println!("{}", srgb.oklab_to_hex(clamped));
//! ```
//!
//! ## Importing a profile
//!
//! ```no_run
//! use oxpick_core::{ActiveSpace, EngineOptions};
//!
//! let active = ActiveSpace::from_options(&EngineOptions::new().with_wide_gamut(true));
//! let bytes = std::fs::read("display.icc").unwrap();
//! match active.import_icc(&bytes) {
//!     Ok(space) => println!("working space: {}", space.name()),
//!     Err(e) => eprintln!("kept {}: {}", active.current().name(), e),
//! }
//! ```

pub mod color;
pub mod css;
pub mod error;
pub mod gamut;
pub mod icc;
pub mod math;
pub mod options;
pub mod simd;
pub mod space;

pub use color::{LinearRgb, Oklab, Oklch, Rgb, Rgb8, Xyz};
pub use error::{Error, Result};
pub use icc::{IccError, IccProfile};
pub use math::Matrix3x3;
pub use options::{EngineOptions, GamutOptions};
pub use space::{ActiveSpace, Channel, SpaceKind, ToneCurve, Trc, WorkingColorSpace};

/// Version of oxpick
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
